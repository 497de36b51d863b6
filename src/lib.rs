//! # League Table
//!
//! Standings for a small round-robin league.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (pair keys, scores, registry, table rows)
//! - **calculate**: The standings engine (aggregation, ordering, head-to-head)
//! - **league**: Roster and result editing on top of the engine
//! - **storage**: The persisted `{teams, matches}` snapshot
//! - **config**: Configuration loading and validation

pub mod calculate;
pub mod config;
pub mod league;
pub mod models;
pub mod storage;

pub use models::*;

/// Parse a score cell as typed by a user: blank or `-` means unset.
pub fn parse_score(s: &str) -> Option<Option<u32>> {
    let s = s.trim();
    if s.is_empty() || s == "-" {
        return Some(None);
    }

    s.parse().ok().map(Some)
}
