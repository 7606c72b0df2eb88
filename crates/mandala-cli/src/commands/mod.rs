//! CLI subcommands.
//!
//! Every command consumes a goal snapshot JSON file (the stand-in for
//! the external store) and an optional `--as-of` instant so output is
//! reproducible.

pub mod coach;
pub mod grid;
pub mod heat;

use std::path::Path;

use chrono::{DateTime, Utc};
use mandala_core::{CoreError, GoalSnapshot};

/// Load and decode a goal snapshot file.
pub fn load_snapshot(path: &Path) -> Result<GoalSnapshot, CoreError> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Parse `--as-of`, defaulting to now.
pub fn parse_as_of(raw: Option<&str>) -> Result<DateTime<Utc>, CoreError> {
    match raw {
        None => Ok(Utc::now()),
        Some(value) => DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| CoreError::Custom(format!("invalid --as-of timestamp: {e}"))),
    }
}
