pub mod handicap;
pub mod sort_utils;
pub mod stableford;

pub use handicap::{get_playing_handicap, get_strokes_on_hole, resolve_effective_handicap};
pub use sort_utils::assign_ranks;
pub use stableford::{HoleCard, ScoreLookup, stableford_points};
