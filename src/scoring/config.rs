use serde::{Deserialize, Serialize};

pub const DEFAULT_SKILL_WEIGHT: f64 = 0.30;
pub const DEFAULT_RANK_WEIGHT: f64 = 0.25;
pub const DEFAULT_EFFICIENCY_WEIGHT: f64 = 0.25;
pub const DEFAULT_AVAILABILITY_WEIGHT: f64 = 0.20;
pub const DEFAULT_HIGH_SCORE_THRESHOLD: f64 = 7.0;

/// Main scoring configuration.
///
/// Each weight is optional and falls back to its default when omitted. The
/// effective weights must sum to 1.0 so the composite score stays on the
/// same scale as the attributes.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   skill: 0.4
///   rank: 0.2
///   efficiency: 0.2
///   availability: 0.2
///   high_score_threshold: 7.5
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    #[serde(default)]
    pub skill: Option<f64>,

    #[serde(default)]
    pub rank: Option<f64>,

    #[serde(default)]
    pub efficiency: Option<f64>,

    #[serde(default)]
    pub availability: Option<f64>,

    /// Minimum composite score that counts as a high scorer (default: 7.0)
    #[serde(default)]
    pub high_score_threshold: Option<f64>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            skill: Some(DEFAULT_SKILL_WEIGHT),
            rank: Some(DEFAULT_RANK_WEIGHT),
            efficiency: Some(DEFAULT_EFFICIENCY_WEIGHT),
            availability: Some(DEFAULT_AVAILABILITY_WEIGHT),
            high_score_threshold: Some(DEFAULT_HIGH_SCORE_THRESHOLD),
        }
    }
}

impl ScoringConfig {
    /// Resolve the effective weights, filling gaps with defaults.
    pub fn weights(&self) -> Weights {
        Weights {
            skill: self.skill.unwrap_or(DEFAULT_SKILL_WEIGHT),
            rank: self.rank.unwrap_or(DEFAULT_RANK_WEIGHT),
            efficiency: self.efficiency.unwrap_or(DEFAULT_EFFICIENCY_WEIGHT),
            availability: self.availability.unwrap_or(DEFAULT_AVAILABILITY_WEIGHT),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.high_score_threshold.unwrap_or(DEFAULT_HIGH_SCORE_THRESHOLD)
    }
}

/// Resolved attribute weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Weights {
    pub skill: f64,
    pub rank: f64,
    pub efficiency: f64,
    pub availability: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            skill: DEFAULT_SKILL_WEIGHT,
            rank: DEFAULT_RANK_WEIGHT,
            efficiency: DEFAULT_EFFICIENCY_WEIGHT,
            availability: DEFAULT_AVAILABILITY_WEIGHT,
        }
    }
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skill + self.rank + self.efficiency + self.availability
    }
}
