use crate::{Agent, LABELS_TO_KEEP};

/// Agents whose most likely kept class scores above `threshold`.
pub fn filter_agents_by_labels(agents: &[Agent], threshold: f64) -> Vec<&Agent> {
    agents
        .iter()
        .filter(|agent| {
            LABELS_TO_KEEP
                .iter()
                .any(|&label| f64::from(agent.label_probability(label)) > threshold)
        })
        .collect()
}

pub fn filter_agents_by_track_id(agents: &[Agent], track_id: u64) -> Vec<&Agent> {
    agents.iter().filter(|a| a.track_id == track_id).collect()
}
