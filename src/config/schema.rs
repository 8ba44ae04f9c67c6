use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

pub const DEFAULT_TEAM_SIZE: i64 = 4;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Target team size (default: 4)
    #[serde(default)]
    pub team_size: Option<i64>,

    /// Roster file location (default: ~/.config/team-builder/roster.json)
    #[serde(default)]
    pub roster_path: Option<String>,

    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}

impl Config {
    pub fn team_size(&self) -> i64 {
        self.team_size.unwrap_or(DEFAULT_TEAM_SIZE)
    }

    pub fn effective_scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_default()
    }
}
