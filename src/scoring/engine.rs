use super::config::Weights;
use crate::roster::Participant;

#[derive(Debug, Clone, PartialEq)]
pub struct AttributeContribution {
    pub label: &'static str, // e.g. "Skill", "Rank"
    pub value: f64,          // Raw attribute value
    pub weight: f64,
    pub contribution: f64,   // value * weight
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub attributes: Vec<AttributeContribution>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Composite score with the default weights.
pub fn compute_score(participant: &Participant) -> f64 {
    calculate_score(participant, &Weights::default()).score
}

/// Weighted sum of the four attributes. No clamping: out-of-range inputs
/// produce out-of-range scores.
pub fn calculate_score(participant: &Participant, weights: &Weights) -> ScoreResult {
    let attributes = vec![
        contribution("Skill", participant.skill, weights.skill),
        contribution("Rank", participant.rank, weights.rank),
        contribution("Efficiency", participant.efficiency, weights.efficiency),
        contribution("Availability", participant.availability, weights.availability),
    ];

    let score = attributes.iter().map(|a| a.contribution).sum();

    ScoreResult {
        score,
        breakdown: ScoreBreakdown { attributes },
    }
}

fn contribution(label: &'static str, value: f64, weight: f64) -> AttributeContribution {
    AttributeContribution {
        label,
        value,
        weight,
        contribution: value * weight,
    }
}
