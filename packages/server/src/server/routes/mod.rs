// HTTP routes
pub mod agents;
pub mod comments;
pub mod health;
pub mod leads;
pub mod reports;

pub use agents::*;
pub use comments::*;
pub use health::*;
pub use leads::*;
pub use reports::*;
