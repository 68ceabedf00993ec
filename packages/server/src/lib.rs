// Anvaya CRM - API Core
//
// This crate provides the backend API for tracking sales leads through a
// status pipeline: sales agents, leads, comments, and reports.
// Architecture follows domain-driven design: one module per collection
// under domains/, HTTP surface under server/.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
