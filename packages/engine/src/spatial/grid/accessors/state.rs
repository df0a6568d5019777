use super::super::*;

impl Grid {
    // === Cell state ===
    #[inline]
    pub fn is_alive(&self, x: u32, y: u32) -> bool {
        self.cells[self.index(x, y)] == LIVE
    }

    #[inline]
    pub fn state(&self, x: u32, y: u32) -> u8 {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn age(&self, x: u32, y: u32) -> u32 {
        self.ages[self.index(x, y)]
    }

    /// Set a cell the way randomize does: age mirrors the new state.
    #[inline]
    pub fn set_alive(&mut self, x: u32, y: u32, alive: bool) {
        let idx = self.index(x, y);
        let state = if alive { LIVE } else { DEAD };
        self.cells[idx] = state;
        self.ages[idx] = state as u32;
    }

    /// Set state and age together. A dead cell always gets age 0.
    #[inline]
    pub fn set_cell(&mut self, x: u32, y: u32, alive: bool, age: u32) {
        let idx = self.index(x, y);
        self.cells[idx] = if alive { LIVE } else { DEAD };
        self.ages[idx] = if alive { age } else { 0 };
    }

    pub fn live_count(&self) -> u32 {
        self.cells.iter().filter(|&&c| c == LIVE).count() as u32
    }

    /// Iterate live cells as `(x, y, age)`, row-major.
    pub fn live_cells(&self) -> impl Iterator<Item = (u32, u32, u32)> + '_ {
        self.cells
            .iter()
            .zip(self.ages.iter())
            .enumerate()
            .filter(|(_, (c, _))| **c == LIVE)
            .map(move |(idx, (_, &age))| {
                let (x, y) = self.coords(idx);
                (x, y, age)
            })
    }
}
