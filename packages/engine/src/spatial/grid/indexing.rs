use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn cols(&self) -> u32 { self.cols }

    #[inline]
    pub fn rows(&self) -> u32 { self.rows }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.cols && y < self.rows,
            "index: out of bounds ({}, {}) for {}x{} grid",
            x,
            y,
            self.cols,
            self.rows
        );
        (y as usize) * (self.cols as usize) + (x as usize)
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let x = (idx % self.cols as usize) as u32;
        let y = (idx / self.cols as usize) as u32;
        (x, y)
    }

    /// Map any signed coordinate onto the torus. Only meaningful for a
    /// non-degenerate grid.
    #[inline]
    pub fn wrap(&self, x: i64, y: i64) -> (u32, u32) {
        debug_assert!(!self.is_degenerate(), "wrap on a 0-sized grid");
        (
            x.rem_euclid(self.cols as i64) as u32,
            y.rem_euclid(self.rows as i64) as u32,
        )
    }

    /// Columns left and right of `x`, wrapped.
    #[inline]
    pub(crate) fn wrapped_cols(&self, x: u32) -> (u32, u32) {
        let left = if x == 0 { self.cols - 1 } else { x - 1 };
        let right = if x + 1 == self.cols { 0 } else { x + 1 };
        (left, right)
    }

    /// Rows above and below `y`, wrapped.
    #[inline]
    pub(crate) fn wrapped_rows(&self, y: u32) -> (u32, u32) {
        let up = if y == 0 { self.rows - 1 } else { y - 1 };
        let down = if y + 1 == self.rows { 0 } else { y + 1 };
        (up, down)
    }
}
