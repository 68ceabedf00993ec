use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::Json;
use anvaya_types::{AgentData, CreateAgentRequest, MessageResponse};

use crate::common::AgentId;
use crate::domains::agents::models::SalesAgent;
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::extract::ApiJson;
use crate::server::validation::validate_create_agent;

/// `POST /api/agents`
pub async fn create_agent(
    Extension(state): Extension<AppState>,
    ApiJson(req): ApiJson<CreateAgentRequest>,
) -> Result<(StatusCode, Json<AgentData>), ApiError> {
    let new_agent = validate_create_agent(&req)?;

    match SalesAgent::create(&new_agent.name, &new_agent.email, &state.db_pool).await? {
        Some(agent) => Ok((StatusCode::CREATED, Json(agent.into()))),
        None => Err(ApiError::Conflict(format!(
            "Sales agent with email '{}' already exists.",
            new_agent.email
        ))),
    }
}

/// `GET /api/agents`
pub async fn list_agents(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<AgentData>>, ApiError> {
    let agents = SalesAgent::list(&state.db_pool).await?;
    Ok(Json(agents.into_iter().map(Into::into).collect()))
}

/// `DELETE /api/agents/:id`
///
/// Leads and comments referencing the agent are left in place; their
/// references resolve as "Unassigned"/"Unknown" from then on.
pub async fn delete_agent(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = AgentId::parse(&id).map_err(|_| ApiError::invalid("Invalid Sales Agent ID format."))?;

    if !SalesAgent::delete(id, &state.db_pool).await? {
        return Err(ApiError::NotFound("Agent not found.".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "Agent deleted successfully".to_string(),
    }))
}
