//! JSON state file.
//!
//! Loading never fails: anything missing or unreadable falls back to the
//! defaults, field by field.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::StorageError;
use crate::models::{ClearConfirmation, LeagueState, MatchRegistry};

/// Reads and writes one league state file.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the saved state, or a fresh one built from `default_teams`.
    ///
    /// A missing or empty `teams` list falls back to `default_teams`, a
    /// missing or malformed `matches` map falls back to an empty registry.
    pub fn load(&self, default_teams: &[String]) -> LeagueState {
        let fresh = || LeagueState::new(default_teams.to_vec());

        if !self.path.exists() {
            debug!("No state file at {:?}, starting fresh", self.path);
            return fresh();
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Failed to read {:?}: {}", self.path, e);
                return fresh();
            }
        };

        let value: Value = match serde_json::from_str(&contents) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to parse {:?}: {}", self.path, e);
                return fresh();
            }
        };

        let teams = field::<Vec<String>>(&value, "teams")
            .filter(|teams| !teams.is_empty())
            .unwrap_or_else(|| default_teams.to_vec());
        let matches = field::<MatchRegistry>(&value, "matches").unwrap_or_default();
        let clear_confirmation =
            field::<ClearConfirmation>(&value, "clear_confirmation").unwrap_or_default();

        debug!(
            "Loaded {} teams and {} matches from {:?}",
            teams.len(),
            matches.len(),
            self.path
        );
        LeagueState {
            teams,
            matches,
            clear_confirmation,
        }
    }

    /// Write `state`, replacing the file.
    pub fn save(&self, state: &LeagueState) -> Result<(), StorageError> {
        if self.path.file_name().is_none() {
            return Err(StorageError::InvalidPath(self.path.clone()));
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, json)?;

        info!(
            "Saved {} teams and {} matches to {:?}",
            state.teams.len(),
            state.matches.len(),
            self.path
        );
        Ok(())
    }
}

/// Deserialize one top-level field, logging and discarding bad shapes.
fn field<T: DeserializeOwned>(value: &Value, name: &str) -> Option<T> {
    let raw = value.get(name)?;
    match serde_json::from_value(raw.clone()) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!("Ignoring malformed '{}' in saved state: {}", name, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Score;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn defaults() -> Vec<String> {
        vec!["X".to_string(), "Y".to_string()]
    }

    fn store(temp_dir: &TempDir) -> StateStore {
        StateStore::new(temp_dir.path().join("state").join("league.json"))
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        let mut state = LeagueState::new(vec!["A".to_string(), "B".to_string()]);
        state.matches.insert("A", "B", Score::played(2, 1));
        state.matches.insert("B", "A", Score::new(None, Some(0)));

        store.save(&state).unwrap();
        assert!(store.exists());

        assert_eq!(store.load(&defaults()), state);
    }

    #[test]
    fn test_pending_clear_survives_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        let mut state = LeagueState::new(vec!["A".to_string(), "B".to_string()]);
        state.clear_confirmation.request();
        store.save(&state).unwrap();

        assert!(store.load(&defaults()).clear_confirmation.is_confirming());
    }

    #[test]
    fn test_load_unknown_confirmation_is_idle() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("league.json");
        fs::write(&path, r#"{"teams": ["A", "B"], "clear_confirmation": "maybe"}"#).unwrap();

        let state = StateStore::new(path).load(&defaults());
        assert!(state.clear_confirmation.is_idle());
        assert_eq!(state.teams, vec!["A", "B"]);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let state = store(&temp_dir).load(&defaults());

        assert_eq!(state, LeagueState::new(defaults()));
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("league.json");
        fs::write(&path, "{ not json").unwrap();

        let state = StateStore::new(path).load(&defaults());
        assert_eq!(state, LeagueState::new(defaults()));
    }

    #[test]
    fn test_load_missing_matches_keeps_teams() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("league.json");
        fs::write(&path, r#"{"teams": ["A", "B", "C"]}"#).unwrap();

        let state = StateStore::new(path).load(&defaults());
        assert_eq!(state.teams, vec!["A", "B", "C"]);
        assert!(state.matches.is_empty());
    }

    #[test]
    fn test_load_malformed_teams_keeps_matches() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("league.json");
        fs::write(
            &path,
            r#"{"teams": 42, "matches": {"X||Y": {"home": 1, "away": 0}}}"#,
        )
        .unwrap();

        let state = StateStore::new(path).load(&defaults());
        assert_eq!(state.teams, defaults());
        assert_eq!(state.matches.get("X", "Y"), Some(&Score::played(1, 0)));
    }

    #[test]
    fn test_load_empty_teams_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("league.json");
        fs::write(&path, r#"{"teams": [], "matches": {}}"#).unwrap();

        let state = StateStore::new(path).load(&defaults());
        assert_eq!(state.teams, defaults());
    }

    #[test]
    fn test_load_malformed_matches() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("league.json");
        fs::write(&path, r#"{"teams": ["A", "B"], "matches": {"A||B": {"home": -1}}}"#).unwrap();

        let state = StateStore::new(path).load(&defaults());
        assert_eq!(state.teams, vec!["A", "B"]);
        assert!(state.matches.is_empty());
    }

    #[test]
    fn test_load_non_object_root() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("league.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let state = StateStore::new(path).load(&defaults());
        assert_eq!(state, LeagueState::new(defaults()));
    }

    #[test]
    fn test_save_rejects_directory_path() {
        let store = StateStore::new(PathBuf::from("/"));
        assert!(matches!(
            store.save(&LeagueState::default()),
            Err(StorageError::InvalidPath(_))
        ));
    }
}
