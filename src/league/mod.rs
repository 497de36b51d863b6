//! League session: the owner of the roster and the match registry.
//!
//! Every roster rule lives here (name uniqueness, team count bounds,
//! registry pruning on remove/rename). The standings engine trusts none of
//! it and recomputes from whatever it is handed.

use thiserror::Error;
use tracing::{info, warn};

use crate::calculate::compute_standings;
use crate::config::LeagueConfig;
use crate::models::{LeagueState, MatchRegistry, Score, TeamStats, RESERVED_NAME_CHAR};

/// Rejected league edits. State is unchanged whenever one is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeagueError {
    #[error("Team '{0}' already exists")]
    DuplicateTeam(String),

    #[error("Team '{0}' does not exist")]
    UnknownTeam(String),

    #[error("Team name must not be empty")]
    EmptyName,

    #[error("Team name '{0}' must not contain '|'")]
    InvalidName(String),

    #[error("A league holds at most {0} teams")]
    TooManyTeams(usize),

    #[error("A league needs at least {0} teams")]
    TooFewTeams(usize),

    #[error("Team '{0}' cannot play itself")]
    SameTeam(String),
}

/// A league being edited.
#[derive(Debug, Clone)]
pub struct League {
    config: LeagueConfig,
    state: LeagueState,
}

impl League {
    /// A fresh league with the configured default roster.
    pub fn new(config: LeagueConfig) -> Self {
        let state = LeagueState::new(config.default_teams.clone());
        Self { config, state }
    }

    /// Resume from a loaded snapshot.
    ///
    /// Roster entries that `add_team` would reject (blank, containing `|`,
    /// duplicated, beyond `max_teams`) are dropped with a warning. If fewer
    /// than `min_teams` remain the default roster is used instead.
    pub fn from_state(config: LeagueConfig, mut state: LeagueState) -> Self {
        let mut roster: Vec<String> = Vec::with_capacity(state.teams.len());
        for saved in &state.teams {
            match normalize_name(saved) {
                Ok(name) if roster.contains(&name) => {
                    warn!("Dropping duplicate team '{}' from saved state", name);
                }
                Ok(name) => {
                    if name != *saved {
                        state.matches.rename_team(saved, &name);
                    }
                    roster.push(name);
                }
                Err(e) => warn!("Dropping team {:?} from saved state: {}", saved, e),
            }
        }

        if roster.len() > config.max_teams {
            warn!(
                "Saved roster has {} teams, keeping the first {}",
                roster.len(),
                config.max_teams
            );
            roster.truncate(config.max_teams);
        }
        if roster.len() < config.min_teams {
            warn!(
                "Saved roster has only {} valid teams, using the default roster",
                roster.len()
            );
            roster = config.default_teams.clone();
        }

        state.teams = roster;
        Self { config, state }
    }

    pub fn teams(&self) -> &[String] {
        &self.state.teams
    }

    pub fn matches(&self) -> &MatchRegistry {
        &self.state.matches
    }

    pub fn state(&self) -> &LeagueState {
        &self.state
    }

    pub fn into_state(self) -> LeagueState {
        self.state
    }

    /// The current table.
    pub fn standings(&self) -> Vec<TeamStats> {
        compute_standings(&self.state.teams, &self.state.matches)
    }

    /// Append a team to the roster. Returns the stored (trimmed) name.
    pub fn add_team(&mut self, name: &str) -> Result<String, LeagueError> {
        let name = normalize_name(name)?;

        if self.state.teams.len() >= self.config.max_teams {
            return Err(LeagueError::TooManyTeams(self.config.max_teams));
        }
        if self.state.has_team(&name) {
            return Err(LeagueError::DuplicateTeam(name));
        }

        info!("Adding team '{}'", name);
        self.state.teams.push(name.clone());
        self.state.clear_confirmation.cancel();
        Ok(name)
    }

    /// Remove a team and every result it played in.
    pub fn remove_team(&mut self, name: &str) -> Result<(), LeagueError> {
        if self.state.teams.len() <= self.config.min_teams {
            return Err(LeagueError::TooFewTeams(self.config.min_teams));
        }
        let position = self.position(name)?;

        self.state.teams.remove(position);
        let pruned = self.state.matches.remove_team(name);
        info!("Removed team '{}' and {} of its matches", name, pruned);
        self.state.clear_confirmation.cancel();
        Ok(())
    }

    /// Rename a team in place, re-keying its results.
    pub fn rename_team(&mut self, old: &str, new: &str) -> Result<(), LeagueError> {
        let new = normalize_name(new)?;
        if old == new {
            return Ok(());
        }

        let position = self.position(old)?;
        if self.state.has_team(&new) {
            return Err(LeagueError::DuplicateTeam(new));
        }

        let rekeyed = self.state.matches.rename_team(old, &new);
        info!("Renamed '{}' to '{}' ({} matches re-keyed)", old, new, rekeyed);
        self.state.teams[position] = new;
        self.state.clear_confirmation.cancel();
        Ok(())
    }

    /// Record the score of `home` hosting `away`, replacing any earlier entry.
    pub fn update_score(
        &mut self,
        home: &str,
        away: &str,
        home_score: Option<u32>,
        away_score: Option<u32>,
    ) -> Result<(), LeagueError> {
        self.check_pair(home, away)?;

        let score = Score::new(home_score, away_score);
        self.state.matches.insert(home, away, score);
        info!("Recorded {} vs {}: {:?}", home, away, score);
        self.state.clear_confirmation.cancel();
        Ok(())
    }

    /// Forget the result of `home` hosting `away`. Returns what was stored.
    pub fn clear_score(&mut self, home: &str, away: &str) -> Result<Option<Score>, LeagueError> {
        self.check_pair(home, away)?;
        self.state.clear_confirmation.cancel();
        Ok(self.state.matches.remove(home, away))
    }

    /// Forget every result. The roster is kept.
    pub fn clear_scores(&mut self) {
        info!("Clearing {} recorded matches", self.state.matches.len());
        self.state.matches.clear();
        self.state.clear_confirmation.cancel();
    }

    /// Two-step clear: the first request arms it, the next one clears.
    ///
    /// Any other edit in between disarms it. Returns true once cleared.
    pub fn request_clear(&mut self) -> bool {
        if self.state.clear_confirmation.request() {
            self.clear_scores();
            true
        } else {
            info!("Clear requested, waiting for confirmation");
            false
        }
    }

    pub fn cancel_clear(&mut self) {
        self.state.clear_confirmation.cancel();
    }

    pub fn clear_pending(&self) -> bool {
        self.state.clear_confirmation.is_confirming()
    }

    /// Reorder the roster to match the current table.
    pub fn sort_by_rank(&mut self) {
        self.state.teams = self.standings().into_iter().map(|s| s.name).collect();
        self.state.clear_confirmation.cancel();
    }

    /// Put the configured default roster back. Results are kept.
    pub fn reset_order(&mut self) {
        info!("Resetting roster to the default order");
        self.state.teams = self.config.default_teams.clone();
        self.state.clear_confirmation.cancel();
    }

    fn position(&self, name: &str) -> Result<usize, LeagueError> {
        self.state
            .teams
            .iter()
            .position(|t| t == name)
            .ok_or_else(|| LeagueError::UnknownTeam(name.to_string()))
    }

    fn check_pair(&self, home: &str, away: &str) -> Result<(), LeagueError> {
        self.position(home)?;
        self.position(away)?;
        if home == away {
            return Err(LeagueError::SameTeam(home.to_string()));
        }
        Ok(())
    }
}

fn normalize_name(name: &str) -> Result<String, LeagueError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LeagueError::EmptyName);
    }
    // Keys are `home||away`; a pipe at either edge of a name shifts the split.
    if name.contains(RESERVED_NAME_CHAR) {
        return Err(LeagueError::InvalidName(name.to_string()));
    }
    Ok(name.to_string())
}
