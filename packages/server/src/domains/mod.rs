// Domain modules, one per persistence collection plus derived reports.

pub mod agents;
pub mod comments;
pub mod leads;
pub mod reports;
