use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::Json;
use anvaya_types::{AddCommentRequest, CommentData};

use crate::common::LeadId;
use crate::domains::comments::models::Comment;
use crate::domains::leads::models::Lead;
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::extract::ApiJson;
use crate::server::validation::validate_comment;

/// `POST /api/leads/:id/comments`
///
/// The author is always the lead's currently assigned sales agent; the
/// body carries only the text.
pub async fn add_comment(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<AddCommentRequest>,
) -> Result<(StatusCode, Json<CommentData>), ApiError> {
    let id = LeadId::parse(&id).map_err(|_| ApiError::invalid("Invalid Lead ID format."))?;

    let lead = Lead::find_by_id(id, &state.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Lead with ID '{id}' not found.")))?;

    let text = validate_comment(&req)?;

    let comment = Comment::create(id, &text, Some(lead.sales_agent_id), &state.db_pool).await?;
    Ok((StatusCode::CREATED, Json(comment.into_data("System"))))
}

/// `GET /api/leads/:id/comments`
///
/// Comments on an unknown lead id are simply an empty list; this route is
/// lead-id scoped, not a lead lookup.
pub async fn list_comments(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<CommentData>>, ApiError> {
    let id = LeadId::parse(&id).map_err(|_| ApiError::invalid("Invalid Lead ID format."))?;

    let comments = Comment::list_for_lead(id, &state.db_pool).await?;
    Ok(Json(
        comments
            .into_iter()
            .map(|c| c.into_data("Unknown"))
            .collect(),
    ))
}
