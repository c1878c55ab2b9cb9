//! User strategies.
//!
//! - `Strategy` — anything that picks a shot in answer to a prompt
//! - `Policy` — lookup table of repetition-weighted shot lists
//! - `Human` — interactive strategy reading shots from the terminal
#[cfg(feature = "server")]
mod human;
mod policy;
mod strategy;

#[cfg(feature = "server")]
pub use human::*;
pub use policy::*;
pub use strategy::*;
