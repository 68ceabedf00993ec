//! Test fixtures, built through the model methods directly.

use anyhow::Result;
use anvaya_core::common::{AgentId, LeadId};
use anvaya_core::domains::agents::models::SalesAgent;
use anvaya_core::domains::leads::models::{Lead, LeadWithAgent, NewLead};
use anvaya_types::{LeadSource, LeadStatus};
use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Creates an agent with a collision-proof email (the database is shared
/// across tests).
pub async fn create_test_agent(pool: &PgPool, name: &str) -> Result<SalesAgent> {
    let email = format!("{}-{}@example.com", name.to_lowercase(), Uuid::new_v4());
    SalesAgent::create(name, &email, pool)
        .await?
        .ok_or_else(|| anyhow::anyhow!("fixture email collided"))
}

pub async fn create_test_lead(
    pool: &PgPool,
    name: &str,
    agent: AgentId,
    status: LeadStatus,
) -> Result<LeadWithAgent> {
    Lead::create(
        &NewLead {
            name: name.to_string(),
            source: LeadSource::Website,
            sales_agent: agent,
            status,
            time_to_close: 10,
            priority: None,
            tags: vec![],
        },
        pool,
    )
    .await
}

/// Rewrites a closed lead's `closed_at` to `days_ago` days in the past,
/// for exercising the report window boundary.
pub async fn backdate_closed_at(pool: &PgPool, lead: LeadId, days_ago: i64) -> Result<()> {
    sqlx::query("UPDATE leads SET closed_at = $2 WHERE id = $1")
        .bind(lead)
        .bind(Utc::now() - Duration::days(days_ago))
        .execute(pool)
        .await?;
    Ok(())
}
