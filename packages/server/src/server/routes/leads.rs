use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use axum::Json;
use anvaya_types::{CreateLeadRequest, LeadData, LeadListFilter, MessageResponse, UpdateLeadRequest};

use crate::common::LeadId;
use crate::domains::agents::models::SalesAgent;
use crate::domains::leads::models::{next_closed_at, Lead};
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::extract::ApiJson;
use crate::server::validation::{parse_lead_filter, validate_create_lead, validate_lead_patch};

/// `POST /api/leads`
pub async fn create_lead(
    Extension(state): Extension<AppState>,
    ApiJson(req): ApiJson<CreateLeadRequest>,
) -> Result<(StatusCode, Json<LeadData>), ApiError> {
    let new_lead = validate_create_lead(&req)?;

    // Referential check before the write
    if SalesAgent::find_by_id(new_lead.sales_agent, &state.db_pool)
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound(format!(
            "Sales agent with ID {} not found.",
            new_lead.sales_agent
        )));
    }

    let lead = Lead::create(&new_lead, &state.db_pool).await?;
    Ok((StatusCode::CREATED, Json(lead.into())))
}

/// `GET /api/leads?salesAgent=&status=&source=&tags=`
pub async fn list_leads(
    Extension(state): Extension<AppState>,
    Query(query): Query<LeadListFilter>,
) -> Result<Json<Vec<LeadData>>, ApiError> {
    // An out-of-enum status/source can never match a stored lead
    let Some(filter) = parse_lead_filter(&query) else {
        return Ok(Json(Vec::new()));
    };

    let leads = Lead::list(&filter, &state.db_pool).await?;
    Ok(Json(leads.into_iter().map(Into::into).collect()))
}

/// `PUT /api/leads/:id`
pub async fn update_lead(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<UpdateLeadRequest>,
) -> Result<Json<LeadData>, ApiError> {
    let id = LeadId::parse(&id).map_err(|_| ApiError::invalid("Invalid Lead ID format."))?;

    let existing = Lead::find_by_id(id, &state.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Lead not found.".to_string()))?;

    let (merged, patch_status) = validate_lead_patch(&existing, &patch)?;

    // Re-check the reference only when the patch reassigns it
    if patch.sales_agent.is_some()
        && SalesAgent::find_by_id(merged.sales_agent, &state.db_pool)
            .await?
            .is_none()
    {
        return Err(ApiError::NotFound(format!(
            "Sales agent with ID '{}' not found.",
            merged.sales_agent
        )));
    }

    let closed_at = next_closed_at(
        existing.status,
        existing.closed_at,
        patch_status,
        chrono::Utc::now(),
    );

    let updated = Lead::update(id, &merged, closed_at, &state.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Lead with ID '{id}' not found.")))?;

    Ok(Json(updated.into()))
}

/// `DELETE /api/leads/:id`
pub async fn delete_lead(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = LeadId::parse(&id).map_err(|_| ApiError::invalid("Invalid Lead ID format."))?;

    if !Lead::delete(id, &state.db_pool).await? {
        return Err(ApiError::NotFound(format!("Lead with ID '{id}' not found.")));
    }

    Ok(Json(MessageResponse {
        message: "Lead deleted successfully".to_string(),
    }))
}
