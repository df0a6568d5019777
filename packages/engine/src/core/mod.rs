//! Core utilities shared by every layer: access macros, logging, randomness.

#[macro_use]
pub mod utils;
pub mod random;
