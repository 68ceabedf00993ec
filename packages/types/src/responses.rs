//! Response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::{LeadSource, LeadStatus, Priority};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentData {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// A sales agent reference expanded into a lead response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentRef {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadData {
    pub id: Uuid,
    pub name: String,
    pub source: LeadSource,
    /// `None` when the referenced agent has been deleted; clients render
    /// it as "Unassigned".
    pub sales_agent: Option<AgentRef>,
    pub status: LeadStatus,
    pub time_to_close: i32,
    pub priority: Option<Priority>,
    pub tags: Vec<String>,
    pub closed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentData {
    pub id: Uuid,
    pub comment_text: String,
    /// Author display name; "System"/"Unknown" when unresolvable.
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// One row of the closed-last-week report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosedLeadData {
    pub id: Uuid,
    pub name: String,
    /// Agent display name; "Unassigned" when the reference is dangling.
    pub sales_agent: String,
    pub closed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineCount {
    pub total_leads_in_pipeline: i64,
}

/// Confirmation body for delete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body shapes the server emits; clients use this to surface the
/// server-provided message verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Best server-provided message, if any.
    pub fn into_message(self) -> Option<String> {
        if let Some(error) = self.error {
            return Some(error);
        }
        if let Some(errors) = self.errors {
            if !errors.is_empty() {
                return Some(errors.join("; "));
            }
        }
        self.message
    }
}
