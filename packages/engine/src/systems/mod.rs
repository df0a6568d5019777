//! Systems - the rules that move state forward
//!
//! - life:   one automaton generation (birth / death / survival + ages)
//! - sparks: click sparks counting down to expiry

pub mod life;
pub mod sparks;

pub use life::{next_generation, GenerationCounts};
pub use sparks::{Spark, Sparks};
