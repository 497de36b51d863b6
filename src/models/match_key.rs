//! Ordered (home, away) pair keys for the match registry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator placed between the home and away names.
///
/// Team names are human-curated and are not expected to contain it. A name
/// that does contain it still encodes, but will not decode back to the same
/// pair: no escaping is applied.
///
/// A home name ending in a single `|` breaks decoding too: `"A|"` hosting
/// `"B"` encodes to `"A|||B"`, which splits into `("A", "|B")`. Callers
/// keep [`RESERVED_NAME_CHAR`] out of team names altogether.
pub const KEY_SEPARATOR: &str = "||";

/// Character team names must not contain for keys to decode reliably.
pub const RESERVED_NAME_CHAR: char = '|';

/// Key of a single directed match slot: `home || away`.
///
/// `MatchKey::encode("A", "B")` and `MatchKey::encode("B", "A")` are two
/// different slots.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchKey(String);

impl MatchKey {
    /// Build the key for `home` hosting `away`.
    pub fn encode(home: &str, away: &str) -> Self {
        let mut key = String::with_capacity(home.len() + KEY_SEPARATOR.len() + away.len());
        key.push_str(home);
        key.push_str(KEY_SEPARATOR);
        key.push_str(away);
        Self(key)
    }

    /// Split the key on the first separator into `(home, away)`.
    ///
    /// A key without a separator decodes to `(key, "")`.
    pub fn decode(&self) -> (&str, &str) {
        self.0
            .split_once(KEY_SEPARATOR)
            .unwrap_or((self.0.as_str(), ""))
    }

    pub fn home(&self) -> &str {
        self.decode().0
    }

    pub fn away(&self) -> &str {
        self.decode().1
    }

    /// True if `team` plays in this slot, home or away.
    pub fn involves(&self, team: &str) -> bool {
        let (home, away) = self.decode();
        home == team || away == team
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MatchKey({})", self.0)
    }
}

impl From<String> for MatchKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MatchKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
