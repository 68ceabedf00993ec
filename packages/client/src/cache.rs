//! Explicit client-side cache of the agent list.
//!
//! The server does not push agent mutations, so the cache is only as fresh
//! as the last [`AgentCache::refresh`]. Callers that just created or
//! deleted an agent refresh (or invalidate) explicitly.

use anvaya_types::AgentData;
use tokio::sync::RwLock;

use crate::api::AnvayaClient;
use crate::error::ClientError;

pub struct AgentCache {
    client: AnvayaClient,
    agents: RwLock<Option<Vec<AgentData>>>,
}

impl AgentCache {
    pub fn new(client: AnvayaClient) -> Self {
        Self {
            client,
            agents: RwLock::new(None),
        }
    }

    /// Returns the cached snapshot, fetching it first when the cache is
    /// cold or has been invalidated.
    pub async fn get_or_fetch(&self) -> Result<Vec<AgentData>, ClientError> {
        if let Some(agents) = self.agents.read().await.as_ref() {
            return Ok(agents.clone());
        }
        self.refresh().await
    }

    /// Refetches the agent list and replaces the snapshot.
    pub async fn refresh(&self) -> Result<Vec<AgentData>, ClientError> {
        let agents = self.client.list_agents().await?;
        *self.agents.write().await = Some(agents.clone());
        Ok(agents)
    }

    /// Drops the snapshot; the next [`Self::get_or_fetch`] refetches.
    pub async fn invalidate(&self) {
        *self.agents.write().await = None;
    }
}
