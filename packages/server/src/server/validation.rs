//! Declarative per-field validation, run at the boundary before any
//! persistence operation. Field messages mirror the API's documented
//! wording; all failing fields are reported together.

use anvaya_types::{
    AddCommentRequest, CreateAgentRequest, CreateLeadRequest, LeadListFilter, LeadSource,
    LeadStatus, Priority, UpdateLeadRequest,
};
use lazy_static::lazy_static;
use regex::Regex;

use crate::common::AgentId;
use crate::domains::leads::models::{Lead, LeadFilter, NewLead};
use crate::server::error::ApiError;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Validated agent creation fields.
#[derive(Debug, Clone)]
pub struct NewAgent {
    pub name: String,
    pub email: String,
}

pub fn validate_create_agent(req: &CreateAgentRequest) -> Result<NewAgent, ApiError> {
    let mut errors = Vec::new();

    let name = req.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        errors.push("Sales Agent name is required".to_string());
    }

    let email = req
        .email
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_lowercase();
    if !EMAIL_RE.is_match(&email) {
        errors.push("Invalid input: \"email\" must be a valid email address".to_string());
    }

    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    Ok(NewAgent {
        name: name.to_string(),
        email,
    })
}

pub fn validate_create_lead(req: &CreateLeadRequest) -> Result<NewLead, ApiError> {
    let mut errors = Vec::new();

    let name = req.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        errors.push("Lead name is required".to_string());
    }

    let source = match req.source.as_deref().map(str::parse::<LeadSource>) {
        Some(Ok(source)) => Some(source),
        _ => {
            errors.push("Invalid lead source".to_string());
            None
        }
    };

    let sales_agent = match req.sales_agent.as_deref().map(AgentId::parse) {
        Some(Ok(id)) => Some(id),
        _ => {
            errors.push("Invalid Sales Agent ID format".to_string());
            None
        }
    };

    // Optional; defaults to New
    let status = match &req.status {
        None => Some(LeadStatus::New),
        Some(raw) => match raw.parse::<LeadStatus>() {
            Ok(status) => Some(status),
            Err(_) => {
                errors.push("Invalid lead status".to_string());
                None
            }
        },
    };

    let time_to_close = match req.time_to_close {
        Some(days) if days >= 1 && days <= i32::MAX as i64 => Some(days as i32),
        _ => {
            errors.push("Time to Close must be a positive integer".to_string());
            None
        }
    };

    let priority = match &req.priority {
        None => None,
        Some(raw) => match raw.parse::<Priority>() {
            Ok(priority) => Some(priority),
            Err(_) => {
                errors.push("Invalid priority level".to_string());
                None
            }
        },
    };

    match (source, sales_agent, status, time_to_close) {
        (Some(source), Some(sales_agent), Some(status), Some(time_to_close))
            if errors.is_empty() =>
        {
            Ok(NewLead {
                name: name.to_string(),
                source,
                sales_agent,
                status,
                time_to_close,
                priority,
                tags: dedupe_tags(req.tags.clone().unwrap_or_default()),
            })
        }
        _ => Err(ApiError::Validation(errors)),
    }
}

/// Merges a patch over the stored lead and re-runs full field validation on
/// the result. Returns the merged write plus the status the patch carried
/// (if any), which drives the `closed_at` transition.
///
/// The caller has already resolved the patch's `salesAgent` reference; a
/// malformed id is rejected here, an unknown one is the caller's 404.
pub fn validate_lead_patch(
    existing: &Lead,
    patch: &UpdateLeadRequest,
) -> Result<(NewLead, Option<LeadStatus>), ApiError> {
    let mut errors = Vec::new();

    let name = match &patch.name {
        None => existing.name.clone(),
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                errors.push("Lead name is required".to_string());
            }
            trimmed.to_string()
        }
    };

    let source = match &patch.source {
        None => existing.source,
        Some(raw) => match raw.parse::<LeadSource>() {
            Ok(source) => source,
            Err(_) => {
                errors.push("Invalid lead source".to_string());
                existing.source
            }
        },
    };

    let sales_agent = match &patch.sales_agent {
        None => existing.sales_agent_id,
        Some(raw) => match AgentId::parse(raw) {
            Ok(id) => id,
            Err(_) => {
                errors.push("Invalid Sales Agent ID format".to_string());
                existing.sales_agent_id
            }
        },
    };

    let patch_status = match &patch.status {
        None => None,
        Some(raw) => match raw.parse::<LeadStatus>() {
            Ok(status) => Some(status),
            Err(_) => {
                errors.push("Invalid lead status".to_string());
                None
            }
        },
    };

    let time_to_close = match patch.time_to_close {
        None => existing.time_to_close,
        Some(days) if days >= 1 && days <= i32::MAX as i64 => days as i32,
        Some(_) => {
            errors.push("Time to Close must be a positive integer".to_string());
            existing.time_to_close
        }
    };

    let priority = match &patch.priority {
        None => existing.priority,
        Some(raw) => match raw.parse::<Priority>() {
            Ok(priority) => Some(priority),
            Err(_) => {
                errors.push("Invalid priority level".to_string());
                existing.priority
            }
        },
    };

    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let merged = NewLead {
        name,
        source,
        sales_agent,
        status: patch_status.unwrap_or(existing.status),
        time_to_close,
        priority,
        tags: match &patch.tags {
            None => existing.tags.clone(),
            Some(tags) => dedupe_tags(tags.clone()),
        },
    };

    Ok((merged, patch_status))
}

pub fn validate_comment(req: &AddCommentRequest) -> Result<String, ApiError> {
    let text = req
        .comment_text
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();
    if text.is_empty() {
        return Err(ApiError::invalid("Comment text is required"));
    }
    Ok(text.to_string())
}

/// Parses the query-string filter. A malformed `salesAgent` id is silently
/// dropped from the filter; an out-of-enum `status`/`source` can never
/// match a stored lead, so `None` is returned and the caller answers with
/// an empty list.
pub fn parse_lead_filter(query: &LeadListFilter) -> Option<LeadFilter> {
    let sales_agent = query
        .sales_agent
        .as_deref()
        .and_then(|raw| AgentId::parse(raw).ok());

    let status = match query.status.as_deref() {
        None => None,
        Some(raw) => match raw.parse::<LeadStatus>() {
            Ok(status) => Some(status),
            Err(_) => return None,
        },
    };

    let source = match query.source.as_deref() {
        None => None,
        Some(raw) => match raw.parse::<LeadSource>() {
            Ok(source) => Some(source),
            Err(_) => return None,
        },
    };

    let tags = query.tags.as_deref().and_then(|raw| {
        let tags: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        if tags.is_empty() {
            None
        } else {
            Some(tags)
        }
    });

    Some(LeadFilter {
        sales_agent,
        status,
        source,
        tags,
    })
}

/// Tags form a set; duplicates are dropped, first occurrence wins.
fn dedupe_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty() && seen.insert(t.clone()))
        .collect()
}
