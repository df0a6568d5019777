//! Named seed patterns, stamped onto the torus.

use super::Grid;

pub struct Pattern {
    pub name: &'static str,
    /// `(dx, dy)` offsets of live cells from the stamp origin.
    pub cells: &'static [(i32, i32)],
}

pub const BLOCK: Pattern = Pattern {
    name: "block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

pub const BEEHIVE: Pattern = Pattern {
    name: "beehive",
    cells: &[(1, 0), (2, 0), (0, 1), (3, 1), (1, 2), (2, 2)],
};

pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

/// Travels one cell towards +x/+y every 4 generations.
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "r-pentomino",
    cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
};

pub const PATTERNS: &[Pattern] = &[BLOCK, BEEHIVE, BLINKER, GLIDER, R_PENTOMINO];

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name == name)
}

/// Write the pattern's live cells (age 1) with its origin at `(x, y)`.
/// Coordinates wrap, so a stamp near an edge continues on the opposite side.
/// Cells outside the pattern are left untouched. Returns false on a 0-sized grid.
pub fn stamp(grid: &mut Grid, pattern: &Pattern, x: i64, y: i64) -> bool {
    if grid.is_degenerate() {
        return false;
    }
    for &(dx, dy) in pattern.cells {
        let (cx, cy) = grid.wrap(x + dx as i64, y + dy as i64);
        grid.set_alive(cx, cy, true);
    }
    true
}
