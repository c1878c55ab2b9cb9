//! Discrete sampling with repetition-as-weight.
mod bag;

pub use bag::*;
