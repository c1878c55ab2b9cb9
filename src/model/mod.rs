//! Empirical opponent model.
//!
//! - `TransitionTable` — observed continuations per (prompt, shot)
//! - `Model` — rarity-thresholded query over a table
//! - `Responder` — anything that answers a shot with the next prompt
mod model;
mod responder;
mod table;

pub use model::*;
pub use responder::*;
pub use table::*;
