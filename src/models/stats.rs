//! Derived per-team table rows.

use serde::{Deserialize, Serialize};

use super::Outcome;

/// One row of the standings table.
///
/// Always derived from the registry, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStats {
    /// Team name
    pub name: String,

    /// Matches with both scores entered
    pub played: u32,

    pub won: u32,

    pub drawn: u32,

    pub lost: u32,

    /// Goals for
    pub gf: u32,

    /// Goals against
    pub ga: u32,

    /// Goal difference (gf - ga)
    pub gd: i64,

    /// 3 per win, 1 per draw
    pub points: u32,

    /// 1-based position, set once the table is sorted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<usize>,
}

impl TeamStats {
    /// An empty row for `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            gf: 0,
            ga: 0,
            gd: 0,
            points: 0,
            rank: None,
        }
    }

    /// Fold one played match into the row, from this team's side.
    ///
    /// Goal totals saturate at `u32::MAX` rather than overflow.
    pub fn record(&mut self, goals_for: u32, goals_against: u32) {
        self.played += 1;
        self.gf = self.gf.saturating_add(goals_for);
        self.ga = self.ga.saturating_add(goals_against);
        self.gd = i64::from(self.gf) - i64::from(self.ga);

        // Outcome seen as if this team were at home.
        let outcome = Outcome::from_goals(goals_for, goals_against);
        match outcome {
            Outcome::HomeWin => self.won += 1,
            Outcome::Draw => self.drawn += 1,
            Outcome::AwayWin => self.lost += 1,
        }
        self.points += outcome.home_points();
    }

    /// The (points, gd, gf) triple the table is ordered by before head-to-head.
    pub fn sort_key(&self) -> (u32, i64, u32) {
        (self.points, self.gd, self.gf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let stats = TeamStats::new("A");
        assert_eq!(stats.name, "A");
        assert_eq!(stats.played, 0);
        assert_eq!(stats.points, 0);
        assert_eq!(stats.gd, 0);
        assert_eq!(stats.rank, None);
    }

    #[test]
    fn test_record_win_draw_loss() {
        let mut stats = TeamStats::new("A");
        stats.record(2, 1);
        stats.record(1, 1);
        stats.record(0, 3);

        assert_eq!(stats.played, 3);
        assert_eq!((stats.won, stats.drawn, stats.lost), (1, 1, 1));
        assert_eq!((stats.gf, stats.ga), (3, 5));
        assert_eq!(stats.gd, -2);
        assert_eq!(stats.points, 4);
        assert_eq!(stats.points, 3 * stats.won + stats.drawn);
    }

    #[test]
    fn test_record_saturates_goal_totals() {
        let mut stats = TeamStats::new("A");
        stats.record(u32::MAX, 0);
        stats.record(1, u32::MAX);
        stats.record(7, 7);

        assert_eq!(stats.played, 3);
        assert_eq!(stats.gf, u32::MAX);
        assert_eq!(stats.ga, u32::MAX);
        assert_eq!(stats.gd, 0);
        assert_eq!((stats.won, stats.drawn, stats.lost), (1, 1, 1));
    }

    #[test]
    fn test_sort_key() {
        let mut stats = TeamStats::new("A");
        stats.record(4, 1);
        assert_eq!(stats.sort_key(), (3, 3, 4));
    }

    #[test]
    fn test_rank_omitted_when_unset() {
        let json = serde_json::to_value(TeamStats::new("A")).unwrap();
        assert!(json.get("rank").is_none());

        let mut ranked = TeamStats::new("A");
        ranked.rank = Some(1);
        let json = serde_json::to_value(ranked).unwrap();
        assert_eq!(json["rank"], 1);
    }
}
