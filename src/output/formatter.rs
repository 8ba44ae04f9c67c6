use std::io::IsTerminal;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use terminal_size::{terminal_size, Width};

use crate::roster::ScoredParticipant;
use crate::scoring::ScoreBreakdown;
use crate::teams::Team;

const SEPARATOR_WIDTH: usize = 40;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score with two decimals, as used everywhere in output
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

/// Format an attribute value without a trailing ".0" for whole numbers
fn format_attribute(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format teams as text blocks: a heading, one line per member, then the
/// team average and a separator.
///
/// Members scoring at or above `threshold` are highlighted when colors are on.
pub fn format_teams(teams: &[Team], threshold: f64, use_colors: bool) -> String {
    if teams.is_empty() {
        return "No teams formed.".to_string();
    }

    teams
        .iter()
        .enumerate()
        .map(|(idx, team)| format_team_block(idx + 1, team, threshold, use_colors))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_team_block(number: usize, team: &Team, threshold: f64, use_colors: bool) -> String {
    let mut lines = Vec::with_capacity(team.len() + 3);

    let heading = format!("TEAM {}", number);
    lines.push(if use_colors {
        heading.bold().to_string()
    } else {
        heading
    });

    for member in &team.members {
        let line = format!("{} - Score: {}", member.name(), format_score(member.score));
        if use_colors && member.score >= threshold {
            lines.push(line.green().to_string());
        } else {
            lines.push(line);
        }
    }

    let average = format!("→ Avg Score: {}", format_score(team.average_score()));
    lines.push(if use_colors {
        average.cyan().to_string()
    } else {
        average
    });
    lines.push("-".repeat(SEPARATOR_WIDTH));

    lines.join("\n")
}

/// Format teams as tab-separated values for scripting
/// Columns: team number, name, score (no headers, no colors)
pub fn format_teams_tsv(teams: &[Team]) -> String {
    teams
        .iter()
        .enumerate()
        .flat_map(|(idx, team)| {
            team.members.iter().map(move |member| {
                format!(
                    "{}\t{}\t{}",
                    idx + 1,
                    member.name(),
                    format_score(member.score)
                )
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
struct TeamReport<'a> {
    team: usize,
    average_score: f64,
    members: &'a [ScoredParticipant],
}

/// Format teams as pretty-printed JSON
pub fn format_teams_json(teams: &[Team]) -> Result<String> {
    let reports: Vec<TeamReport> = teams
        .iter()
        .enumerate()
        .map(|(idx, team)| TeamReport {
            team: idx + 1,
            average_score: team.average_score(),
            members: &team.members,
        })
        .collect();

    serde_json::to_string_pretty(&reports).context("Failed to serialize teams")
}

/// Format the scored roster as a table: index, score, name, raw attributes
/// Index column: 3 chars (fits "99."), score column: 6 chars (fits "-10.00")
pub fn format_roster_table(roster: &[ScoredParticipant], use_colors: bool) -> String {
    if roster.is_empty() {
        return "No participants added.".to_string();
    }

    let term_width = get_terminal_width();
    let index_width = 3;
    let score_width = 6;
    let separator = "  ";

    roster
        .iter()
        .enumerate()
        .map(|(idx, scored)| {
            let p = &scored.participant;
            let index_str = format!("{:>2}.", idx + 1);
            let score_str = format!("{:>width$}", format_score(scored.score), width = score_width);
            let attributes = format!(
                "{}/{}/{}/{}",
                format_attribute(p.skill),
                format_attribute(p.rank),
                format_attribute(p.efficiency),
                format_attribute(p.availability)
            );

            let fixed_width =
                index_width + 1 + score_width + separator.len() * 2 + attributes.len();
            let name = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_name(&p.name, width - fixed_width)
                }
                Some(_) => truncate_name(&p.name, 20),
                None => p.name.clone(),
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}",
                    index_str.dimmed(),
                    score_str.bold(),
                    separator,
                    name,
                    separator,
                    attributes.dimmed()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    index_str, score_str, separator, name, separator, attributes
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single participant with a per-attribute score breakdown (for verbose mode)
pub fn format_participant_detail(
    scored: &ScoredParticipant,
    breakdown: &ScoreBreakdown,
    use_colors: bool,
) -> String {
    let mut lines = Vec::with_capacity(breakdown.attributes.len() + 2);
    lines.push(if use_colors {
        scored.name().bold().to_string()
    } else {
        scored.name().to_string()
    });

    for attr in &breakdown.attributes {
        lines.push(format!(
            "  {}: {} x {:.2} = {}",
            attr.label,
            format_attribute(attr.value),
            attr.weight,
            format_score(attr.contribution)
        ));
    }

    lines.push(format!("  Score: {}", format_score(scored.score)));
    lines.join("\n")
}

/// Message for a `remove` index that matches no participant
pub fn format_remove_error(index: usize, roster_len: usize) -> String {
    if roster_len == 0 {
        "The roster is empty, nothing to remove.".to_string()
    } else {
        format!("Invalid index {}. Must be between 1 and {}.", index, roster_len)
    }
}

/// One-line roster size summary
pub fn format_status(count: usize) -> String {
    format!("Participants added: {}", count)
}
