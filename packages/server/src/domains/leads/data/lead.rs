use anvaya_types::{AgentRef, LeadData};

use crate::domains::leads::models::LeadWithAgent;

impl From<LeadWithAgent> for LeadData {
    fn from(row: LeadWithAgent) -> Self {
        let LeadWithAgent { lead, agent_name } = row;
        Self {
            id: lead.id.into_uuid(),
            name: lead.name,
            source: lead.source,
            // A dangling reference serializes as null; clients show "Unassigned"
            sales_agent: agent_name.map(|name| AgentRef {
                id: lead.sales_agent_id.into_uuid(),
                name,
            }),
            status: lead.status,
            time_to_close: lead.time_to_close,
            priority: lead.priority,
            tags: lead.tags,
            closed_at: lead.closed_at,
            created_at: lead.created_at,
        }
    }
}
