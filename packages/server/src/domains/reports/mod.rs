pub mod models;

pub use models::{closed_last_week, pipeline_count, ClosedLeadRow};
