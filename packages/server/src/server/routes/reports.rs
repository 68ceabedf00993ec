use axum::extract::Extension;
use axum::Json;
use anvaya_types::{ClosedLeadData, PipelineCount};

use crate::domains::reports;
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// `GET /api/report/last-week`
pub async fn leads_closed_last_week(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<ClosedLeadData>>, ApiError> {
    let rows = reports::closed_last_week(&state.db_pool).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// `GET /api/report/pipeline`
pub async fn pipeline_count(
    Extension(state): Extension<AppState>,
) -> Result<Json<PipelineCount>, ApiError> {
    let total_leads_in_pipeline = reports::pipeline_count(&state.db_pool).await?;
    Ok(Json(PipelineCount {
        total_leads_in_pipeline,
    }))
}
