use anvaya_types::AgentData;

use crate::domains::agents::models::SalesAgent;

impl From<SalesAgent> for AgentData {
    fn from(agent: SalesAgent) -> Self {
        Self {
            id: agent.id.into_uuid(),
            name: agent.name,
            email: agent.email,
            created_at: agent.created_at,
        }
    }
}
