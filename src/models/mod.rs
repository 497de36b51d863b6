//! Core data models for the league table.

mod confirm;
mod match_key;
mod registry;
mod score;
mod state;
mod stats;

pub use confirm::*;
pub use match_key::*;
pub use registry::*;
pub use score::*;
pub use state::*;
pub use stats::*;
