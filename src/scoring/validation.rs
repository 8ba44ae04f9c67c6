use super::config::ScoringConfig;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let weights = [
        ("skill", config.skill),
        ("rank", config.rank),
        ("efficiency", config.efficiency),
        ("availability", config.availability),
    ];

    for (field, weight) in weights {
        if let Some(w) = weight {
            if !w.is_finite() {
                errors.push(format!("scoring.{}: must be a finite number", field));
            } else if w < 0.0 {
                errors.push(format!("scoring.{}: must be non-negative", field));
            }
        }
    }

    // Only meaningful once every weight is a usable number
    if errors.is_empty() {
        let sum = config.weights().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            errors.push(format!("scoring: weights must sum to 1.0 (got {})", sum));
        }
    }

    if let Some(threshold) = config.high_score_threshold {
        if !threshold.is_finite() {
            errors.push("scoring.high_score_threshold: must be a finite number".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
