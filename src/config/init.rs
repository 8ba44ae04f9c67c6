use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

use crate::config::{get_config_path, Config, DEFAULT_TEAM_SIZE};
use crate::prompt::{prompt_with_default, prompt_yes_no};
use crate::scoring::{validate_scoring, ScoringConfig};
use crate::teams::validate_team_size;

/// Print text with a typewriter effect, one character at a time.
fn typewriter(text: &str) {
    use std::thread;
    use std::time::Duration;
    for c in text.chars() {
        print!("{}", c);
        std::io::stdout().flush().ok();
        thread::sleep(Duration::from_millis(18));
    }
    println!();
}

/// Prompt until the input parses as a number.
fn prompt_number(message: &str, default: f64) -> Result<f64> {
    loop {
        let input = prompt_with_default(message, &default.to_string())?;
        match input.parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => println!("  Invalid: must be a number. Try again."),
        }
    }
}

fn prompt_weights(defaults: &ScoringConfig) -> Result<ScoringConfig> {
    let defaults = defaults.weights();
    loop {
        let candidate = ScoringConfig {
            skill: Some(prompt_number("Skill weight", defaults.skill)?),
            rank: Some(prompt_number("Rank weight", defaults.rank)?),
            efficiency: Some(prompt_number("Efficiency weight", defaults.efficiency)?),
            availability: Some(prompt_number("Availability weight", defaults.availability)?),
            high_score_threshold: Some(prompt_number(
                "High scorer threshold",
                crate::scoring::DEFAULT_HIGH_SCORE_THRESHOLD,
            )?),
        };

        match validate_scoring(&candidate) {
            Ok(()) => return Ok(candidate),
            Err(errors) => {
                for error in errors {
                    println!("  Invalid: {}", error);
                }
                println!("  Try again.");
            }
        }
    }
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    typewriter("Team Builder Configuration Wizard");
    println!("=================================");
    println!();

    // 1. Team size
    typewriter("Teams are filled up to this size. Only the last team can come out smaller.");
    let team_size = loop {
        let input = prompt_with_default("Team size", &DEFAULT_TEAM_SIZE.to_string())?;
        match input.parse::<i64>() {
            Ok(v) => match validate_team_size(v) {
                Ok(_) => break v,
                Err(e) => println!("  Invalid: {}. Try again.", e),
            },
            Err(_) => println!("  Invalid: must be a whole number. Try again."),
        }
    };

    // 2. Scoring weights
    println!();
    let defaults = ScoringConfig::default();
    typewriter("Each participant's score is a weighted average of skill, rank, efficiency and availability.");
    typewriter("The weights must add up to 1.0 so scores stay on the same 1-10 scale.");
    let configure_scoring = prompt_yes_no(
        "Configure weights? (n accepts 0.30 / 0.25 / 0.25 / 0.20)",
        false,
    )?;
    let scoring = if configure_scoring {
        println!();
        prompt_weights(&defaults)?
    } else {
        defaults
    };

    // 3. Config path
    let default_config_path = match default_path {
        Some(p) => p,
        None => get_config_path()?,
    };
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    // 4. Write config
    let config = Config {
        team_size: Some(team_size),
        roster_path: None,
        scoring: Some(scoring),
    };

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(&config_path, &yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!();
    println!("Config written to {}", config_path.display());
    println!("Run `team-builder add` to start building your roster.");

    Ok(())
}
