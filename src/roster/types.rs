use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An individual to be placed on a team.
///
/// Attribute values are nominally in 1..=10 but nothing past input parsing
/// enforces that; scoring accepts any real value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub skill: f64,
    pub rank: f64,
    pub efficiency: f64,
    pub availability: f64,
    #[serde(default = "Utc::now")]
    pub added_at: DateTime<Utc>,
}

impl Participant {
    pub fn new(
        name: impl Into<String>,
        skill: f64,
        rank: f64,
        efficiency: f64,
        availability: f64,
    ) -> Self {
        Self {
            name: name.into(),
            skill,
            rank,
            efficiency,
            availability,
            added_at: Utc::now(),
        }
    }
}

/// A participant paired with its composite score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredParticipant {
    #[serde(flatten)]
    pub participant: Participant,
    pub score: f64,
}

impl ScoredParticipant {
    pub fn new(participant: Participant, score: f64) -> Self {
        Self { participant, score }
    }

    pub fn name(&self) -> &str {
        &self.participant.name
    }
}

/// Persisted roster, one file per roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterState {
    pub version: u32,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl Default for RosterState {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterState {
    /// Create a new empty roster with version 1
    pub fn new() -> Self {
        Self {
            version: 1,
            participants: Vec::new(),
        }
    }

    pub fn add(&mut self, participant: Participant) {
        self.participants.push(participant);
    }

    /// Remove a participant by 1-based index, as shown by `list`.
    /// Returns the removed participant, or None if the index is out of range.
    pub fn remove(&mut self, index: usize) -> Option<Participant> {
        if index < 1 || index > self.participants.len() {
            return None;
        }
        Some(self.participants.remove(index - 1))
    }

    pub fn clear(&mut self) {
        self.participants.clear();
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
