pub mod lead;

pub use lead::{next_closed_at, Lead, LeadFilter, LeadWithAgent, NewLead};
