use serde::Serialize;
use thiserror::Error;

use crate::roster::ScoredParticipant;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionError {
    #[error("invalid configuration: team size must be at least 1 (got {team_size})")]
    InvalidConfiguration { team_size: i64 },
}

/// A group of participants in the order they were assigned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    pub members: Vec<ScoredParticipant>,
}

impl Team {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Arithmetic mean of member scores, 0.0 for an empty team.
    pub fn average_score(&self) -> f64 {
        if self.members.is_empty() {
            return 0.0;
        }
        let total: f64 = self.members.iter().map(|m| m.score).sum();
        total / self.members.len() as f64
    }

    pub fn has_high_scorer(&self, threshold: f64) -> bool {
        self.members.iter().any(|m| m.score >= threshold)
    }
}
