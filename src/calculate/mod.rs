//! Standings calculation engine.
//!
//! Rebuilds the whole table from the roster and the match registry:
//! - Aggregates every fully entered score into per-team rows
//! - Orders by points, goal difference, then goals scored
//! - Breaks two-way ties on the head-to-head result
//! - Assigns sequential 1-based ranks
//!
//! The engine is a pure function: no state, no I/O, no errors.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::debug;

use crate::models::{MatchRegistry, Outcome, TeamStats};

/// Compute the ranked table for `teams` from `registry`.
///
/// Registry entries naming a team that is not on the roster, or a team
/// playing itself, are skipped. Teams still level after every criterion keep
/// their roster order and receive distinct sequential ranks.
pub fn compute_standings(teams: &[String], registry: &MatchRegistry) -> Vec<TeamStats> {
    let mut table: Vec<TeamStats> = teams.iter().map(TeamStats::new).collect();

    let mut index: HashMap<&str, usize> = HashMap::with_capacity(teams.len());
    for (i, name) in teams.iter().enumerate() {
        index.entry(name.as_str()).or_insert(i);
    }

    for (key, score) in registry.iter() {
        let Some((home_goals, away_goals)) = score.goals() else {
            continue;
        };

        let (home, away) = key.decode();
        match (index.get(home), index.get(away)) {
            (Some(&h), Some(&a)) if h != a => {
                table[h].record(home_goals, away_goals);
                table[a].record(away_goals, home_goals);
            }
            _ => debug!("Skipping match {} not between two roster teams", key),
        }
    }

    table.sort_by(compare_table);
    resolve_head_to_head(&mut table, registry);

    for (position, stats) in table.iter_mut().enumerate() {
        stats.rank = Some(position + 1);
    }

    table
}

/// Order two rows by points, goal difference and goals scored, best first.
pub fn compare_table(a: &TeamStats, b: &TeamStats) -> Ordering {
    compare_points(a, b)
        .then_with(|| compare_goal_difference(a, b))
        .then_with(|| compare_goals_scored(a, b))
}

fn compare_points(a: &TeamStats, b: &TeamStats) -> Ordering {
    b.points.cmp(&a.points)
}

fn compare_goal_difference(a: &TeamStats, b: &TeamStats) -> Ordering {
    b.gd.cmp(&a.gd)
}

fn compare_goals_scored(a: &TeamStats, b: &TeamStats) -> Ordering {
    b.gf.cmp(&a.gf)
}

/// Points `a` and `b` took off each other in their direct matches.
///
/// Both directed slots are counted. `None` when they have not played.
pub fn head_to_head_points(a: &str, b: &str, registry: &MatchRegistry) -> Option<(u32, u32)> {
    let encounters = registry.encounters(a, b);
    if encounters.is_empty() {
        return None;
    }

    let points = encounters
        .iter()
        .map(|&(a_goals, b_goals)| Outcome::from_goals(a_goals, b_goals))
        .fold((0, 0), |(a_pts, b_pts), outcome| {
            (a_pts + outcome.home_points(), b_pts + outcome.away_points())
        });

    Some(points)
}

/// Swap each exactly-two-team tie whose second team won the head-to-head.
///
/// Ties of three or more are left in their stable order.
fn resolve_head_to_head(table: &mut [TeamStats], registry: &MatchRegistry) {
    let mut start = 0;
    while start < table.len() {
        let mut end = start + 1;
        while end < table.len() && compare_table(&table[start], &table[end]) == Ordering::Equal {
            end += 1;
        }

        if end - start == 2 {
            let (first, second) = (&table[start].name, &table[start + 1].name);
            if let Some((first_pts, second_pts)) = head_to_head_points(first, second, registry) {
                if second_pts > first_pts {
                    debug!("{} ahead of {} on head-to-head", second, first);
                    table.swap(start, start + 1);
                }
            }
        }

        start = end;
    }
}
