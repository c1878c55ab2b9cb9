//! Historical point data.
//!
//! - `PointRecord` — one charted point, split by player
//! - `Baseline` — observed win rate of the charted player
//! - `load` — JSON artifact loading for the binaries
mod baseline;
mod loader;
mod record;

pub use baseline::*;
pub use loader::*;
pub use record::*;
