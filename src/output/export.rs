use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;

use crate::roster::ScoredParticipant;
use crate::teams::Team;

pub const DEFAULT_EXPORT_FILE: &str = "team_builder_results.csv";

/// Write the scored roster as CSV, one row per participant, in the order
/// given. Scores are written at full precision.
///
/// When `teams` is given, a trailing `Team` column holds each participant's
/// 1-based team number.
pub fn write_csv<W: Write>(
    writer: W,
    roster: &[ScoredParticipant],
    teams: Option<&[Team]>,
) -> Result<()> {
    // Names need not be unique, so match whole records and consume each
    // assignment once.
    let mut unassigned: Option<Vec<(usize, &ScoredParticipant)>> = teams.map(|teams| {
        teams
            .iter()
            .enumerate()
            .flat_map(|(idx, team)| team.members.iter().map(move |m| (idx + 1, m)))
            .collect()
    });

    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["Name", "Skill", "Rank", "Efficiency", "Availability", "Score"];
    if unassigned.is_some() {
        header.push("Team");
    }
    wtr.write_record(&header).context("Failed to write CSV header")?;

    for scored in roster {
        let p = &scored.participant;
        let mut record = vec![
            p.name.clone(),
            p.skill.to_string(),
            p.rank.to_string(),
            p.efficiency.to_string(),
            p.availability.to_string(),
            scored.score.to_string(),
        ];

        if let Some(ref mut unassigned) = unassigned {
            let team = unassigned
                .iter()
                .position(|(_, member)| *member == scored)
                .map(|pos| unassigned.remove(pos).0.to_string())
                .unwrap_or_default();
            record.push(team);
        }

        wtr.write_record(&record)
            .with_context(|| format!("Failed to write CSV row for {}", p.name))?;
    }

    wtr.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Format the scored roster as a CSV string
pub fn format_csv(roster: &[ScoredParticipant], teams: Option<&[Team]>) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, roster, teams)?;
    String::from_utf8(buf).context("CSV output is not valid UTF-8")
}

/// Write the CSV export atomically
pub fn export_csv(
    path: &Path,
    roster: &[ScoredParticipant],
    teams: Option<&[Team]>,
) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    write_csv(&mut file, roster, teams)
        .with_context(|| format!("Failed to write CSV to {}", path.display()))?;

    file.commit().context("Failed to save CSV export")?;

    tracing::debug!(path = %path.display(), rows = roster.len(), "exported roster");
    Ok(())
}
