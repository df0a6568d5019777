//! Grid - Structure of Arrays for the automaton board
//!
//! Two parallel arrays of `cols * rows` entries, row-major:
//!     cells[]  0 = dead, 1 = live
//!     ages[]   consecutive live generations, 0 while dead
//!
//! The board is a torus: every coordinate lookup wraps in both axes.

mod indexing;
mod accessors;
mod neighbors;
pub mod patterns;

pub const DEAD: u8 = 0;
pub const LIVE: u8 = 1;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grid {
    cols: u32,
    rows: u32,
    size: usize,

    pub cells: Vec<u8>,
    pub ages: Vec<u32>,
}

impl Grid {
    pub fn new(cols: u32, rows: u32) -> Self {
        let size = (cols as usize) * (rows as usize);
        Self {
            cols,
            rows,
            size,
            cells: vec![DEAD; size],
            ages: vec![0; size],
        }
    }

    /// Drop all state and reallocate zeroed arrays at the new dimensions.
    pub fn reallocate(&mut self, cols: u32, rows: u32) {
        *self = Grid::new(cols, rows);
    }

    /// Zero both arrays in place, keeping dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(DEAD);
        self.ages.fill(0);
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.size == 0
    }
}
