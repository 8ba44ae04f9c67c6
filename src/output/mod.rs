pub mod export;
pub mod formatter;

pub use export::{export_csv, format_csv, write_csv, DEFAULT_EXPORT_FILE};
pub use formatter::{
    format_participant_detail, format_remove_error, format_roster_table, format_score,
    format_status, format_teams, format_teams_json, format_teams_tsv, should_use_colors,
};
