//! The persisted league snapshot.

use serde::{Deserialize, Serialize};

use super::{ClearConfirmation, MatchRegistry};

/// Everything a league session needs to resume: `{teams, matches}`.
///
/// A pending clear request is stored alongside so the confirming step can
/// come from a later run. It is omitted from the file while idle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueState {
    /// Team names in display order
    pub teams: Vec<String>,

    /// Recorded scores
    pub matches: MatchRegistry,

    #[serde(default, skip_serializing_if = "ClearConfirmation::is_idle")]
    pub clear_confirmation: ClearConfirmation,
}

impl LeagueState {
    /// A fresh state with `teams` and no results.
    pub fn new(teams: Vec<String>) -> Self {
        Self {
            teams,
            matches: MatchRegistry::new(),
            clear_confirmation: ClearConfirmation::Idle,
        }
    }

    pub fn has_team(&self, name: &str) -> bool {
        self.teams.iter().any(|t| t == name)
    }
}
