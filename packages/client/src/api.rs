//! Fetch wrappers, one per API endpoint. One network call per user action;
//! no retries, no deduplication.

use anvaya_types::{
    AddCommentRequest, AgentData, ClosedLeadData, CommentData, CreateAgentRequest,
    CreateLeadRequest, LeadData, LeadListFilter, MessageResponse, PipelineCount,
    UpdateLeadRequest,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::ClientError;

#[derive(Debug, Clone)]
pub struct AnvayaClient {
    http: reqwest::Client,
    base_url: String,
}

impl AnvayaClient {
    /// `base_url` without a trailing slash, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn expect_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), "api request failed");
        Err(ClientError::from_response(status.as_u16(), &body))
    }

    // Agents

    pub async fn create_agent(&self, req: &CreateAgentRequest) -> Result<AgentData, ClientError> {
        let response = self
            .http
            .post(self.url("/api/agents"))
            .json(req)
            .send()
            .await?;
        Self::expect_json(response).await
    }

    pub async fn list_agents(&self) -> Result<Vec<AgentData>, ClientError> {
        let response = self.http.get(self.url("/api/agents")).send().await?;
        Self::expect_json(response).await
    }

    pub async fn delete_agent(&self, id: Uuid) -> Result<MessageResponse, ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/agents/{id}")))
            .send()
            .await?;
        Self::expect_json(response).await
    }

    // Leads

    pub async fn create_lead(&self, req: &CreateLeadRequest) -> Result<LeadData, ClientError> {
        let response = self
            .http
            .post(self.url("/api/leads"))
            .json(req)
            .send()
            .await?;
        Self::expect_json(response).await
    }

    pub async fn list_leads(&self, filter: &LeadListFilter) -> Result<Vec<LeadData>, ClientError> {
        let response = self
            .http
            .get(self.url("/api/leads"))
            .query(filter)
            .send()
            .await?;
        Self::expect_json(response).await
    }

    pub async fn update_lead(
        &self,
        id: Uuid,
        patch: &UpdateLeadRequest,
    ) -> Result<LeadData, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/api/leads/{id}")))
            .json(patch)
            .send()
            .await?;
        Self::expect_json(response).await
    }

    pub async fn delete_lead(&self, id: Uuid) -> Result<MessageResponse, ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/leads/{id}")))
            .send()
            .await?;
        Self::expect_json(response).await
    }

    // Comments

    pub async fn add_comment(
        &self,
        lead_id: Uuid,
        comment_text: impl Into<String>,
    ) -> Result<CommentData, ClientError> {
        let req = AddCommentRequest {
            comment_text: Some(comment_text.into()),
        };
        let response = self
            .http
            .post(self.url(&format!("/api/leads/{lead_id}/comments")))
            .json(&req)
            .send()
            .await?;
        Self::expect_json(response).await
    }

    pub async fn list_comments(&self, lead_id: Uuid) -> Result<Vec<CommentData>, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/api/leads/{lead_id}/comments")))
            .send()
            .await?;
        Self::expect_json(response).await
    }

    // Reports

    pub async fn leads_closed_last_week(&self) -> Result<Vec<ClosedLeadData>, ClientError> {
        let response = self
            .http
            .get(self.url("/api/report/last-week"))
            .send()
            .await?;
        Self::expect_json(response).await
    }

    pub async fn pipeline_count(&self) -> Result<PipelineCount, ClientError> {
        let response = self
            .http
            .get(self.url("/api/report/pipeline"))
            .send()
            .await?;
        Self::expect_json(response).await
    }
}
