//! Derived report queries over the leads collection. Both are recomputed
//! in full on every call; there is no materialization.

use anyhow::Result;
use anvaya_types::{ClosedLeadData, LeadStatus};
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::common::LeadId;

/// One closed lead in the weekly report.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ClosedLeadRow {
    pub id: LeadId,
    pub name: String,
    pub agent_name: Option<String>,
    pub closed_at: DateTime<Utc>,
}

impl From<ClosedLeadRow> for ClosedLeadData {
    fn from(row: ClosedLeadRow) -> Self {
        Self {
            id: row.id.into_uuid(),
            name: row.name,
            sales_agent: row.agent_name.unwrap_or_else(|| "Unassigned".to_string()),
            closed_at: row.closed_at,
        }
    }
}

/// Leads closed within the last 7 days (inclusive lower bound), most
/// recently closed first.
pub async fn closed_last_week(pool: &PgPool) -> Result<Vec<ClosedLeadRow>> {
    sqlx::query_as::<_, ClosedLeadRow>(
        r#"
        SELECT l.id, l.name, a.name AS agent_name, l.closed_at
        FROM leads l
        LEFT JOIN sales_agents a ON a.id = l.sales_agent_id
        WHERE l.status = $1
          AND l.closed_at >= now() - interval '7 days'
        ORDER BY l.closed_at DESC
        "#,
    )
    .bind(LeadStatus::Closed)
    .fetch_all(pool)
    .await
    .map_err(Into::into)
}

/// Count of leads still in the pipeline (status != Closed).
pub async fn pipeline_count(pool: &PgPool) -> Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT count(*) FROM leads WHERE status <> $1")
        .bind(LeadStatus::Closed)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
}
