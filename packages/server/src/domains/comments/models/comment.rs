use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{AgentId, CommentId, LeadId};

/// A comment on a lead. Immutable once created; there is no update or
/// delete path.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: CommentId,
    pub lead_id: LeadId,
    pub comment_text: String,
    /// The lead's assigned agent at the time the comment was written.
    pub author_id: Option<AgentId>,
    pub created_at: DateTime<Utc>,
}

/// A comment with its author reference resolved to a display name, when the
/// agent still exists.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommentWithAuthor {
    #[sqlx(flatten)]
    pub comment: Comment,
    pub author_name: Option<String>,
}

const SELECT_WITH_AUTHOR: &str = r#"
    SELECT c.*, a.name AS author_name
    FROM comments c
    LEFT JOIN sales_agents a ON a.id = c.author_id
"#;

impl Comment {
    pub async fn create(
        lead_id: LeadId,
        comment_text: &str,
        author_id: Option<AgentId>,
        pool: &PgPool,
    ) -> Result<CommentWithAuthor> {
        let comment = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO comments (id, lead_id, comment_text, author_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(CommentId::new())
        .bind(lead_id)
        .bind(comment_text)
        .bind(author_id)
        .fetch_one(pool)
        .await?;

        let sql = format!("{SELECT_WITH_AUTHOR} WHERE c.id = $1");
        sqlx::query_as::<_, CommentWithAuthor>(&sql)
            .bind(comment.id)
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    /// All comments on a lead, newest first.
    pub async fn list_for_lead(lead_id: LeadId, pool: &PgPool) -> Result<Vec<CommentWithAuthor>> {
        let sql = format!("{SELECT_WITH_AUTHOR} WHERE c.lead_id = $1 ORDER BY c.created_at DESC");
        sqlx::query_as::<_, CommentWithAuthor>(&sql)
            .bind(lead_id)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }
}
