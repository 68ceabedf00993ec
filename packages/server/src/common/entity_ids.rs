//! Typed ID definitions for all domain entities.
//!
//! # Example
//!
//! ```rust,ignore
//! use anvaya_core::common::{AgentId, LeadId};
//!
//! // These are incompatible types - compiler prevents mixing them up
//! let agent_id: AgentId = AgentId::new();
//! let lead_id: LeadId = LeadId::new();
//!
//! // This would be a compile error:
//! // let wrong: LeadId = agent_id;
//! ```

pub use super::id::Id;

/// Marker type for SalesAgent entities.
pub struct SalesAgentEntity;

/// Marker type for Lead entities.
pub struct LeadEntity;

/// Marker type for Comment entities.
pub struct CommentEntity;

/// Typed ID for SalesAgent entities.
pub type AgentId = Id<SalesAgentEntity>;

/// Typed ID for Lead entities.
pub type LeadId = Id<LeadEntity>;

/// Typed ID for Comment entities.
pub type CommentId = Id<CommentEntity>;
