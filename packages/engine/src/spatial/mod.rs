//! Spatial storage for the automaton board.

pub mod grid;
