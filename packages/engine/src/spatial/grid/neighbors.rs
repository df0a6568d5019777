use super::*;

impl Grid {
    /// Live count over the 8 toroidal neighbours of `(x, y)`.
    ///
    /// There is no finite edge: column 0 neighbours column `cols - 1` and row 0
    /// neighbours row `rows - 1`. On boards narrower than 3 cells the same
    /// cell may be counted more than once, including the centre itself.
    #[inline]
    pub fn live_neighbors(&self, x: u32, y: u32) -> u8 {
        let (left, right) = self.wrapped_cols(x);
        let (up, down) = self.wrapped_rows(y);
        let row_up = (up as usize) * (self.cols as usize);
        let row_mid = (y as usize) * (self.cols as usize);
        let row_down = (down as usize) * (self.cols as usize);
        let (l, c, r) = (left as usize, x as usize, right as usize);
        let cells = &self.cells;

        *fast!(cells, [row_up + l])
            + *fast!(cells, [row_up + c])
            + *fast!(cells, [row_up + r])
            + *fast!(cells, [row_mid + l])
            + *fast!(cells, [row_mid + r])
            + *fast!(cells, [row_down + l])
            + *fast!(cells, [row_down + c])
            + *fast!(cells, [row_down + r])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_cell_counts_plain_neighbours() {
        let mut g = Grid::new(5, 5);
        g.set_alive(1, 1, true);
        g.set_alive(2, 1, true);
        g.set_alive(3, 3, true);
        assert_eq!(g.live_neighbors(2, 2), 3);
        assert_eq!(g.live_neighbors(0, 0), 1);
    }

    #[test]
    fn corner_sees_opposite_corners() {
        let mut g = Grid::new(6, 4);
        g.set_alive(5, 3, true);
        g.set_alive(5, 0, true);
        g.set_alive(0, 3, true);
        assert_eq!(g.live_neighbors(0, 0), 3);
    }

    #[test]
    fn centre_is_not_its_own_neighbour() {
        let mut g = Grid::new(3, 3);
        g.set_alive(1, 1, true);
        assert_eq!(g.live_neighbors(1, 1), 0);
    }
}
