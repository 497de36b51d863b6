//! Match scores and outcomes.

use serde::{Deserialize, Serialize};

/// Points awarded for a win.
pub const POINTS_WIN: u32 = 3;

/// Points awarded for a draw.
pub const POINTS_DRAW: u32 = 1;

/// Points awarded for a loss.
pub const POINTS_LOSS: u32 = 0;

/// Score of one match slot. Either side may still be unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    #[serde(default)]
    pub home: Option<u32>,

    #[serde(default)]
    pub away: Option<u32>,
}

impl Score {
    pub fn new(home: Option<u32>, away: Option<u32>) -> Self {
        Self { home, away }
    }

    /// A fully entered score.
    pub fn played(home: u32, away: u32) -> Self {
        Self::new(Some(home), Some(away))
    }

    /// Both sides entered; only these count towards the table.
    pub fn is_played(&self) -> bool {
        self.goals().is_some()
    }

    /// `(home, away)` goals when both are set.
    pub fn goals(&self) -> Option<(u32, u32)> {
        match (self.home, self.away) {
            (Some(home), Some(away)) => Some((home, away)),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.goals().map(|(home, away)| Outcome::from_goals(home, away))
    }
}

/// Result of a played match from the home side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    HomeWin,
    Draw,
    AwayWin,
}

impl Outcome {
    pub fn from_goals(home: u32, away: u32) -> Self {
        match home.cmp(&away) {
            std::cmp::Ordering::Greater => Outcome::HomeWin,
            std::cmp::Ordering::Equal => Outcome::Draw,
            std::cmp::Ordering::Less => Outcome::AwayWin,
        }
    }

    pub fn home_points(&self) -> u32 {
        match self {
            Outcome::HomeWin => POINTS_WIN,
            Outcome::Draw => POINTS_DRAW,
            Outcome::AwayWin => POINTS_LOSS,
        }
    }

    pub fn away_points(&self) -> u32 {
        match self {
            Outcome::HomeWin => POINTS_LOSS,
            Outcome::Draw => POINTS_DRAW,
            Outcome::AwayWin => POINTS_WIN,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::HomeWin => write!(f, "home win"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::AwayWin => write!(f, "away win"),
        }
    }
}
