use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use team_builder::config::Config;
use team_builder::prompt::value_or_prompt;
use team_builder::roster::{self, RosterState};
use team_builder::scoring::{calculate_score, ScoringConfig};
use team_builder::{output, teams};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_STORAGE: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum OutputFormat {
    #[default]
    Text,
    Tsv,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a participant to the roster (missing fields are prompted for)
    Add {
        #[arg(long)]
        name: Option<String>,
        /// Skill (1-10)
        #[arg(long, allow_hyphen_values = true)]
        skill: Option<String>,
        /// Rank (1-10)
        #[arg(long, allow_hyphen_values = true)]
        rank: Option<String>,
        /// Efficiency (1-10)
        #[arg(long, allow_hyphen_values = true)]
        efficiency: Option<String>,
        /// Availability (1-10)
        #[arg(long, allow_hyphen_values = true)]
        availability: Option<String>,
    },
    /// Remove a participant by its roster index (1-based, as shown by `list`)
    Remove { index: usize },
    /// Show the roster with scores, in the order added (default if no subcommand)
    List,
    /// Show how many participants have been added
    Status,
    /// Partition the roster into teams
    Teams {
        /// Team size (defaults to config team_size, or 4)
        #[arg(short, long, allow_negative_numbers = true)]
        size: Option<i64>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Export the scored roster as CSV, in the order added
    Export {
        /// Output file (defaults to ./team_builder_results.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Also form teams of this size and add a Team column
        #[arg(short, long, allow_negative_numbers = true)]
        size: Option<i64>,
    },
    /// Remove every participant from the roster
    Reset,
    /// Create a config file interactively
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "team-builder")]
#[command(about = "Build project teams with a high performer in each", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/team-builder/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Path to roster file (overrides config roster_path)
    #[arg(short, long, global = true)]
    roster: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    team_builder::logging::init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::List);
    let config_path = cli.config.map(PathBuf::from);

    if let Commands::Init = command {
        if let Err(e) = team_builder::config::run_init_wizard(config_path) {
            eprintln!("Init failed: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    let config = match team_builder::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let scoring = config.effective_scoring();
    if let Err(errors) = team_builder::scoring::validate_scoring(&scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let roster_path = match resolve_roster_path(cli.roster, &config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let mut state = match roster::load_roster(&roster_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Roster error: {:#}", e);
            std::process::exit(EXIT_STORAGE);
        }
    };

    let use_colors = !cli.no_color && output::should_use_colors();

    match command {
        Commands::Add {
            name,
            skill,
            rank,
            efficiency,
            availability,
        } => {
            let participant = match read_participant(name, skill, rank, efficiency, availability) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };
            let added_name = participant.name.clone();
            state.add(participant);
            save_or_exit(&roster_path, &state);
            println!("{} added successfully!", added_name);
            println!("{}", output::format_status(state.len()));
        }
        Commands::Remove { index } => match state.remove(index) {
            Some(removed) => {
                save_or_exit(&roster_path, &state);
                println!("Removed {}", removed.name);
                println!("{}", output::format_status(state.len()));
            }
            None => {
                eprintln!("{}", output::format_remove_error(index, state.len()));
                std::process::exit(EXIT_INPUT);
            }
        },
        Commands::List => {
            // `list` shows roster order so indexes match `remove`
            let weights = scoring.weights();
            if cli.verbose && !state.is_empty() {
                for participant in &state.participants {
                    let result = calculate_score(participant, &weights);
                    let scored = roster::ScoredParticipant::new(participant.clone(), result.score);
                    println!(
                        "{}",
                        output::format_participant_detail(&scored, &result.breakdown, use_colors)
                    );
                    println!();
                }
            } else {
                let scored = teams::score_participants(&state.participants, &weights);
                println!("{}", output::format_roster_table(&scored, use_colors));
            }
            tracing::debug!(participants = state.len(), "listed roster");
        }
        Commands::Status => {
            println!("{}", output::format_status(state.len()));
        }
        Commands::Teams { size, format } => {
            if state.is_empty() {
                eprintln!("No participants added! Use `team-builder add` first.");
                std::process::exit(EXIT_INPUT);
            }
            let size = size.unwrap_or_else(|| config.team_size());
            let formed = form_teams_or_exit(&state, &scoring, size);

            match format {
                OutputFormat::Text => {
                    println!(
                        "{}",
                        output::format_teams(&formed, scoring.threshold(), use_colors)
                    );
                }
                OutputFormat::Tsv => println!("{}", output::format_teams_tsv(&formed)),
                OutputFormat::Json => match output::format_teams_json(&formed) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: {:#}", e);
                        std::process::exit(EXIT_STORAGE);
                    }
                },
            }
        }
        Commands::Export { output: path, size } => {
            if state.is_empty() {
                eprintln!("No data to export!");
                std::process::exit(EXIT_INPUT);
            }
            let path = path.unwrap_or_else(|| PathBuf::from(output::DEFAULT_EXPORT_FILE));
            let scored = teams::score_participants(&state.participants, &scoring.weights());
            let formed = size.map(|size| form_teams_or_exit(&state, &scoring, size));

            if let Err(e) = output::export_csv(&path, &scored, formed.as_deref()) {
                eprintln!("Export failed: {:#}", e);
                std::process::exit(EXIT_STORAGE);
            }
            println!("Data exported as {}", path.display());
        }
        Commands::Reset => {
            state.clear();
            save_or_exit(&roster_path, &state);
            println!("All participant data cleared!");
        }
        Commands::Init => unreachable!("handled before config load"),
    }

    std::process::exit(EXIT_SUCCESS);
}

fn resolve_roster_path(flag: Option<String>, config: &Config) -> anyhow::Result<PathBuf> {
    match flag.or_else(|| config.roster_path.clone()) {
        Some(p) => Ok(PathBuf::from(p)),
        None => roster::get_roster_path(),
    }
}

fn read_participant(
    name: Option<String>,
    skill: Option<String>,
    rank: Option<String>,
    efficiency: Option<String>,
    availability: Option<String>,
) -> anyhow::Result<roster::Participant> {
    let name = value_or_prompt(name, "Name")?;
    let skill = value_or_prompt(skill, "Skill (1-10)")?;
    let rank = value_or_prompt(rank, "Rank (1-10)")?;
    let efficiency = value_or_prompt(efficiency, "Efficiency (1-10)")?;
    let availability = value_or_prompt(availability, "Availability (1-10)")?;
    roster::parse_participant(&name, &skill, &rank, &efficiency, &availability)
}

fn form_teams_or_exit(
    state: &RosterState,
    scoring: &ScoringConfig,
    size: i64,
) -> Vec<teams::Team> {
    match teams::form_teams(
        &state.participants,
        &scoring.weights(),
        size,
        scoring.threshold(),
    ) {
        Ok(formed) => {
            tracing::debug!(teams = formed.len(), team_size = size, "formed teams");
            formed
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    }
}

fn save_or_exit(path: &std::path::Path, state: &RosterState) {
    if let Err(e) = roster::save_roster(path, state) {
        eprintln!("Roster error: {:#}", e);
        std::process::exit(EXIT_STORAGE);
    }
}
