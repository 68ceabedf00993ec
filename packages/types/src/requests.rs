//! Request bodies and query filters.
//!
//! Fields arrive loosely typed (`Option<String>`) so that a missing or
//! out-of-enum value reaches the validation layer and comes back as a 400
//! with a field message instead of a serde rejection. The validation layer
//! parses them into [`crate::enums`] members.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAgentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadRequest {
    pub name: Option<String>,
    pub source: Option<String>,
    pub sales_agent: Option<String>,
    pub status: Option<String>,
    pub time_to_close: Option<i64>,
    pub priority: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Partial update; absent fields leave the stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeadRequest {
    pub name: Option<String>,
    pub source: Option<String>,
    pub sales_agent: Option<String>,
    pub status: Option<String>,
    pub time_to_close: Option<i64>,
    pub priority: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// The author is always the lead's assigned agent, so the body carries
/// only the text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentRequest {
    pub comment_text: Option<String>,
}

/// Query-string filter for `GET /api/leads`.
///
/// `tags` is comma-separated; a lead matches when any of its tags is in the
/// set. A `salesAgent` value that is not a well-formed UUID is ignored, not
/// rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadListFilter {
    pub sales_agent: Option<String>,
    pub status: Option<String>,
    pub source: Option<String>,
    pub tags: Option<String>,
}
