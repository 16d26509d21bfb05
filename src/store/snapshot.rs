//! Reading state snapshots from disk

use std::path::Path;

use crate::{domain::state::State, store::error::StoreError};

/// Reads one state from a JSON file
pub fn load_snapshot(path: &Path) -> Result<State, StoreError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        line: source.line(),
        source,
    })
}

/// Reads a sequence of states, one JSON document per line.
/// Blank lines are skipped.
pub fn load_snapshots(path: &Path) -> Result<Vec<State>, StoreError> {
    let contents = std::fs::read_to_string(path)?;
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|source| StoreError::Parse {
                path: path.to_path_buf(),
                line: index + 1,
                source,
            })
        })
        .collect()
}
