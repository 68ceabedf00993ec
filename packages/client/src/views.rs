//! Pure view composition over fetched lead snapshots.
//!
//! Nothing here caches or mutates shared state: every page re-derives its
//! presentation from the snapshot it just fetched.

use anvaya_types::{LeadData, LeadStatus, Priority};
use uuid::Uuid;

/// Direction for [`sort_by_time_to_close`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

pub fn filter_by_status(leads: &[LeadData], status: LeadStatus) -> Vec<LeadData> {
    leads
        .iter()
        .filter(|l| l.status == status)
        .cloned()
        .collect()
}

pub fn filter_by_agent(leads: &[LeadData], agent_id: Uuid) -> Vec<LeadData> {
    leads
        .iter()
        .filter(|l| l.sales_agent.as_ref().is_some_and(|a| a.id == agent_id))
        .cloned()
        .collect()
}

pub fn filter_by_priority(leads: &[LeadData], priority: Priority) -> Vec<LeadData> {
    leads
        .iter()
        .filter(|l| l.priority == Some(priority))
        .cloned()
        .collect()
}

/// High > Medium > Low; leads without a priority sort last. Ties keep
/// their fetched order.
pub fn sort_by_priority(leads: &mut [LeadData]) {
    leads.sort_by_key(|l| std::cmp::Reverse(l.priority.map(|p| p.weight()).unwrap_or(0)));
}

pub fn sort_by_time_to_close(leads: &mut [LeadData], order: SortOrder) {
    match order {
        SortOrder::Ascending => leads.sort_by_key(|l| l.time_to_close),
        SortOrder::Descending => leads.sort_by_key(|l| std::cmp::Reverse(l.time_to_close)),
    }
}

/// Dashboard counts, one entry per status in pipeline order (including
/// zero counts).
pub fn status_counts(leads: &[LeadData]) -> Vec<(LeadStatus, usize)> {
    LeadStatus::ALL
        .iter()
        .map(|&status| {
            let count = leads.iter().filter(|l| l.status == status).count();
            (status, count)
        })
        .collect()
}

/// Display name for a lead's agent reference; dangling references render
/// as "Unassigned".
pub fn agent_display_name(lead: &LeadData) -> &str {
    lead.sales_agent
        .as_ref()
        .map(|a| a.name.as_str())
        .unwrap_or("Unassigned")
}

#[cfg(test)]
mod tests {
    use super::*;
    use anvaya_types::{AgentRef, LeadSource};
    use chrono::Utc;

    fn lead(
        name: &str,
        status: LeadStatus,
        priority: Option<Priority>,
        time_to_close: i32,
        agent: Option<(Uuid, &str)>,
    ) -> LeadData {
        LeadData {
            id: Uuid::new_v4(),
            name: name.into(),
            source: LeadSource::Website,
            sales_agent: agent.map(|(id, name)| AgentRef {
                id,
                name: name.into(),
            }),
            status,
            time_to_close,
            priority,
            tags: vec![],
            closed_at: None,
            created_at: Utc::now(),
        }
    }

    fn snapshot() -> Vec<LeadData> {
        let amy = Uuid::new_v4();
        vec![
            lead("a", LeadStatus::New, Some(Priority::Low), 30, Some((amy, "Amy"))),
            lead("b", LeadStatus::Closed, Some(Priority::High), 5, Some((amy, "Amy"))),
            lead("c", LeadStatus::New, None, 12, None),
            lead("d", LeadStatus::Qualified, Some(Priority::Medium), 8, None),
        ]
    }

    #[test]
    fn filters_are_exact_and_pure() {
        let leads = snapshot();
        let new = filter_by_status(&leads, LeadStatus::New);
        assert_eq!(new.len(), 2);
        assert!(new.iter().all(|l| l.status == LeadStatus::New));
        // source snapshot untouched
        assert_eq!(leads.len(), 4);
    }

    #[test]
    fn filter_by_agent_skips_unassigned_leads() {
        let leads = snapshot();
        let amy = leads[0].sales_agent.as_ref().unwrap().id;
        let assigned = filter_by_agent(&leads, amy);
        assert_eq!(assigned.len(), 2);
    }

    #[test]
    fn priority_sort_puts_high_first_and_unset_last() {
        let mut leads = snapshot();
        sort_by_priority(&mut leads);
        let order: Vec<_> = leads.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(order, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn time_to_close_sorts_both_directions() {
        let mut leads = snapshot();
        sort_by_time_to_close(&mut leads, SortOrder::Ascending);
        assert_eq!(leads.first().unwrap().time_to_close, 5);
        sort_by_time_to_close(&mut leads, SortOrder::Descending);
        assert_eq!(leads.first().unwrap().time_to_close, 30);
    }

    #[test]
    fn status_counts_cover_every_stage() {
        let counts = status_counts(&snapshot());
        assert_eq!(counts.len(), LeadStatus::ALL.len());
        assert!(counts.contains(&(LeadStatus::New, 2)));
        assert!(counts.contains(&(LeadStatus::Contacted, 0)));
        assert!(counts.contains(&(LeadStatus::Closed, 1)));
    }

    #[test]
    fn dangling_agent_renders_as_unassigned() {
        let leads = snapshot();
        assert_eq!(agent_display_name(&leads[0]), "Amy");
        assert_eq!(agent_display_name(&leads[2]), "Unassigned");
    }
}
