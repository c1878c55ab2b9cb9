//! Shot and prompt tokens.
//!
//! - `Token` — interned-by-refcount shot string
//! - `Outcome` — terminal classification from the trailing marker
//! - `Vocabulary` — allowed prompts and the shots derived from them
mod outcome;
mod token;
mod vocabulary;

pub use outcome::*;
pub use token::*;
pub use vocabulary::*;
