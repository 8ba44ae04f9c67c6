use super::types::RosterState;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Get the default roster file path (~/.config/team-builder/roster.json)
pub fn get_roster_path() -> Result<PathBuf> {
    Ok(crate::config::get_config_dir()?.join("roster.json"))
}

/// Load the roster from a JSON file
///
/// If the file doesn't exist, returns a new empty roster.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_roster(path: &Path) -> Result<RosterState> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no roster file, starting empty");
        return Ok(RosterState::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open roster file at {}", path.display()))?;

    let state: RosterState = serde_json::from_reader(file)
        .with_context(|| format!("Failed to load roster from {}", path.display()))?;

    if state.version != 1 {
        anyhow::bail!("Unsupported roster version: {}", state.version);
    }

    tracing::debug!(
        path = %path.display(),
        participants = state.len(),
        "loaded roster"
    );
    Ok(state)
}

/// Save the roster to a JSON file atomically
///
/// Creates the parent directory if it doesn't exist.
pub fn save_roster(path: &Path, state: &RosterState) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, state).context("Failed to serialize roster")?;

    file.commit().context("Failed to save roster")?;

    tracing::debug!(
        path = %path.display(),
        participants = state.len(),
        "saved roster"
    );
    Ok(())
}
