pub mod agent;

pub use agent::SalesAgent;
