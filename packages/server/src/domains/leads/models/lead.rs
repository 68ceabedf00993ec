use anyhow::Result;
use anvaya_types::{LeadSource, LeadStatus, Priority};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{AgentId, LeadId};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub source: LeadSource,
    pub sales_agent_id: AgentId,
    pub status: LeadStatus,
    pub time_to_close: i32,
    pub priority: Option<Priority>,
    pub tags: Vec<String>,
    pub closed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A lead with its sales-agent reference resolved.
///
/// `agent_name` is `None` when the referenced agent has been deleted; there
/// is no foreign key, dangling references are resolved (or not) at read time.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LeadWithAgent {
    #[sqlx(flatten)]
    pub lead: Lead,
    pub agent_name: Option<String>,
}

/// Fully validated fields for a lead write (create, or a patch merged over
/// the stored document).
#[derive(Debug, Clone)]
pub struct NewLead {
    pub name: String,
    pub source: LeadSource,
    pub sales_agent: AgentId,
    pub status: LeadStatus,
    pub time_to_close: i32,
    pub priority: Option<Priority>,
    pub tags: Vec<String>,
}

/// Parsed list filter. All clauses are conjunctive; `tags` matches a lead
/// when any of its tags is in the set.
#[derive(Debug, Clone, Default)]
pub struct LeadFilter {
    pub sales_agent: Option<AgentId>,
    pub status: Option<LeadStatus>,
    pub source: Option<LeadSource>,
    pub tags: Option<Vec<String>>,
}

/// Decides the stored `closed_at` after applying a status patch.
///
/// Transitioning into `Closed` stamps the clock, transitioning to any
/// non-`Closed` status clears it, and a patch that does not touch `status`
/// (or re-asserts `Closed`) leaves the existing timestamp alone. This is
/// what keeps the invariant `closed_at IS NOT NULL iff status = Closed`.
pub fn next_closed_at(
    current_status: LeadStatus,
    current_closed_at: Option<DateTime<Utc>>,
    patch_status: Option<LeadStatus>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match patch_status {
        Some(LeadStatus::Closed) if !current_status.is_closed() => Some(now),
        Some(LeadStatus::Closed) => current_closed_at,
        Some(_) => None,
        None => current_closed_at,
    }
}

const SELECT_WITH_AGENT: &str = r#"
    SELECT l.*, a.name AS agent_name
    FROM leads l
    LEFT JOIN sales_agents a ON a.id = l.sales_agent_id
"#;

impl Lead {
    /// Inserts a new lead. A lead created directly in `Closed` status gets
    /// `closed_at` stamped at insert time.
    pub async fn create(new: &NewLead, pool: &PgPool) -> Result<LeadWithAgent> {
        let closed_at = if new.status.is_closed() {
            Some(Utc::now())
        } else {
            None
        };

        let lead = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO leads (id, name, source, sales_agent_id, status, time_to_close, priority, tags, closed_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(LeadId::new())
        .bind(&new.name)
        .bind(new.source)
        .bind(new.sales_agent)
        .bind(new.status)
        .bind(new.time_to_close)
        .bind(new.priority)
        .bind(&new.tags)
        .bind(closed_at)
        .fetch_one(pool)
        .await?;

        Self::find_with_agent(lead.id, pool)
            .await?
            .ok_or_else(|| anyhow::anyhow!("lead vanished between insert and read"))
    }

    pub async fn find_by_id(id: LeadId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM leads WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Fetches a lead with the agent reference resolved.
    pub async fn find_with_agent(id: LeadId, pool: &PgPool) -> Result<Option<LeadWithAgent>> {
        let sql = format!("{SELECT_WITH_AGENT} WHERE l.id = $1");
        sqlx::query_as::<_, LeadWithAgent>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Lists leads matching the filter, newest first.
    pub async fn list(filter: &LeadFilter, pool: &PgPool) -> Result<Vec<LeadWithAgent>> {
        let sql = format!(
            r#"
            {SELECT_WITH_AGENT}
            WHERE ($1::uuid IS NULL OR l.sales_agent_id = $1)
              AND ($2::lead_status IS NULL OR l.status = $2)
              AND ($3::lead_source IS NULL OR l.source = $3)
              AND ($4::text[] IS NULL OR l.tags && $4)
            ORDER BY l.created_at DESC
            "#
        );
        sqlx::query_as::<_, LeadWithAgent>(&sql)
            .bind(filter.sales_agent)
            .bind(filter.status)
            .bind(filter.source)
            .bind(&filter.tags)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Writes the merged document back. `closed_at` comes from
    /// [`next_closed_at`]; the caller merges the patch and re-validates
    /// before getting here. Returns `None` when the lead no longer exists.
    pub async fn update(
        id: LeadId,
        merged: &NewLead,
        closed_at: Option<DateTime<Utc>>,
        pool: &PgPool,
    ) -> Result<Option<LeadWithAgent>> {
        let updated = sqlx::query_as::<_, Self>(
            r#"
            UPDATE leads
            SET name = $2, source = $3, sales_agent_id = $4, status = $5,
                time_to_close = $6, priority = $7, tags = $8, closed_at = $9,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&merged.name)
        .bind(merged.source)
        .bind(merged.sales_agent)
        .bind(merged.status)
        .bind(merged.time_to_close)
        .bind(merged.priority)
        .bind(&merged.tags)
        .bind(closed_at)
        .fetch_optional(pool)
        .await?;

        match updated {
            Some(lead) => Self::find_with_agent(lead.id, pool).await,
            None => Ok(None),
        }
    }

    /// Deletes the lead. Returns `false` when the id was unknown.
    /// Comments are not cascaded; they stay addressable only by direct id.
    pub async fn delete(id: LeadId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM leads WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
