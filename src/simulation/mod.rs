//! Point simulation and aggregate evaluation.
//!
//! - `Serves` — randomized serving condition per point
//! - `Point` — one point played to termination
//! - `Tally` — win/loss counters and the win rate
//! - `Evaluator` — seeded, batched, parallel simulation of many points
mod evaluator;
mod point;
mod serves;
mod tally;

pub use evaluator::*;
pub use point::*;
pub use serves::*;
pub use tally::*;
