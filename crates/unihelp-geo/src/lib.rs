//! UniHelp Geo - distance computation and distance-ascending ranking
//!
//! Ranking is an enhancement, not a correctness requirement: a missing device
//! location degrades to server order, never to an error.

pub mod distance;
pub mod ranking;

pub use distance::{distance_meters, format_distance};
pub use ranking::{rank_by_distance, RankedRequest};
