use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::AgentId;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SalesAgent {
    pub id: AgentId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl SalesAgent {
    /// Inserts a new agent. Returns `None` when the email is already taken;
    /// the unique index makes this race-safe (exactly one of two concurrent
    /// inserts with the same email succeeds).
    pub async fn create(name: &str, email: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO sales_agents (id, name, email)
            VALUES ($1, $2, $3)
            ON CONFLICT (email) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(AgentId::new())
        .bind(name)
        .bind(email)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_by_id(id: AgentId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM sales_agents WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM sales_agents ORDER BY created_at")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Deletes the agent. Returns `false` when the id was unknown.
    /// Leads and comments referencing the agent are left untouched; their
    /// references resolve as "Unassigned"/"Unknown" at read time.
    pub async fn delete(id: AgentId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM sales_agents WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
