//! Sparse registry of recorded match scores.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{MatchKey, Score};

/// Recorded scores keyed by directed (home, away) slot.
///
/// Serializes as a plain JSON object, `{"A||B": {"home": 2, "away": 1}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchRegistry(BTreeMap<MatchKey, Score>);

impl MatchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, home: &str, away: &str) -> Option<&Score> {
        self.0.get(&MatchKey::encode(home, away))
    }

    /// Store `score` in the (home, away) slot, returning what was there.
    pub fn insert(&mut self, home: &str, away: &str, score: Score) -> Option<Score> {
        self.0.insert(MatchKey::encode(home, away), score)
    }

    pub fn remove(&mut self, home: &str, away: &str) -> Option<Score> {
        self.0.remove(&MatchKey::encode(home, away))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MatchKey, &Score)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Drop every slot where `team` plays home or away.
    /// Returns the number of slots removed.
    pub fn remove_team(&mut self, team: &str) -> usize {
        let before = self.0.len();
        self.0.retain(|key, _| !key.involves(team));
        before - self.0.len()
    }

    /// Re-key every slot naming `old` so it names `new`, keeping the scores.
    /// Returns the number of slots re-keyed.
    ///
    /// A re-keyed slot overwrites any stale entry already stored under the
    /// new key.
    pub fn rename_team(&mut self, old: &str, new: &str) -> usize {
        let affected: Vec<MatchKey> = self
            .0
            .keys()
            .filter(|key| key.involves(old))
            .cloned()
            .collect();

        for key in &affected {
            if let Some(score) = self.0.remove(key) {
                let (home, away) = key.decode();
                let home = if home == old { new } else { home };
                let away = if away == old { new } else { away };
                self.0.insert(MatchKey::encode(home, away), score);
            }
        }

        affected.len()
    }

    /// Played scores between `a` and `b` in either direction, as
    /// `(a_goals, b_goals)`.
    pub fn encounters(&self, a: &str, b: &str) -> Vec<(u32, u32)> {
        let home = self.get(a, b).and_then(Score::goals);
        let away = self
            .get(b, a)
            .and_then(Score::goals)
            .map(|(b_goals, a_goals)| (a_goals, b_goals));

        home.into_iter().chain(away).collect()
    }
}

impl FromIterator<(MatchKey, Score)> for MatchRegistry {
    fn from_iter<I: IntoIterator<Item = (MatchKey, Score)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
