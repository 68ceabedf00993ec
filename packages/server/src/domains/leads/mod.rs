pub mod data;
pub mod models;

pub use models::{Lead, LeadFilter, LeadWithAgent, NewLead};
