use anyhow::{bail, Context, Result};

use super::types::Participant;

const NOMINAL_MIN: f64 = 1.0;
const NOMINAL_MAX: f64 = 10.0;

/// Build a participant from raw text fields, as typed by a user.
///
/// The name is trimmed and must be non-empty. Each attribute must parse as a
/// number. Values outside 1..=10 are accepted with a warning.
pub fn parse_participant(
    name: &str,
    skill: &str,
    rank: &str,
    efficiency: &str,
    availability: &str,
) -> Result<Participant> {
    let skill = parse_attribute("skill", skill)?;
    let rank = parse_attribute("rank", rank)?;
    let efficiency = parse_attribute("efficiency", efficiency)?;
    let availability = parse_attribute("availability", availability)?;

    let name = name.trim();
    if name.is_empty() {
        bail!("Name cannot be empty");
    }

    Ok(Participant::new(name, skill, rank, efficiency, availability))
}

/// Parse a single numeric attribute.
pub fn parse_attribute(field: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw.trim().parse().with_context(|| {
        format!(
            "{}: '{}' is not a number. Enter valid numeric scores (1-10)",
            field,
            raw.trim()
        )
    })?;

    if !value.is_finite() {
        bail!("{}: '{}' is not a finite number", field, raw.trim());
    }

    if !(NOMINAL_MIN..=NOMINAL_MAX).contains(&value) {
        tracing::warn!(field, value, "attribute outside the nominal 1-10 range");
    }

    Ok(value)
}
