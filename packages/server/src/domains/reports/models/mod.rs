pub mod report;

pub use report::{closed_last_week, pipeline_count, ClosedLeadRow};
