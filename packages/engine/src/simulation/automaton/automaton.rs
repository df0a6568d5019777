use crate::core::random::Rng;
use crate::grid::Grid;
use crate::systems::{next_generation, GenerationCounts};

/// Board size for a viewport: `floor(width / res) x floor(height / res)`.
///
/// Negative, NaN or non-finite inputs collapse to 0, as does a non-positive
/// resolution.
pub fn grid_dimensions(width: f64, height: f64, cell_resolution: f64) -> (u32, u32) {
    if !(cell_resolution > 0.0) || !cell_resolution.is_finite() {
        return (0, 0);
    }
    let cols = (width / cell_resolution).floor().max(0.0);
    let rows = (height / cell_resolution).floor().max(0.0);
    if !cols.is_finite() || !rows.is_finite() {
        return (0, 0);
    }
    (cols as u32, rows as u32)
}

/// Grid Engine: owns the cell and age grids and advances them one generation
/// at a time on a torus.
pub struct Automaton {
    grid: Grid,
    // Next-generation buffer, swapped with `grid` after each step
    scratch: Grid,
    rng: Rng,
    generation: u64,
    last_counts: GenerationCounts,
}

impl Automaton {
    /// 0x0 board seeded from `Math.random()` in the browser.
    pub fn new() -> Self {
        Self::with_rng(Rng::from_entropy())
    }

    pub fn with_seed(seed: u32) -> Self {
        Self::with_rng(Rng::new(seed))
    }

    fn with_rng(rng: Rng) -> Self {
        Self {
            grid: Grid::new(0, 0),
            scratch: Grid::new(0, 0),
            rng,
            generation: 0,
            last_counts: GenerationCounts::default(),
        }
    }

    pub fn reseed(&mut self, seed: u32) {
        self.rng = Rng::new(seed);
    }

    pub fn grid(&self) -> &Grid { &self.grid }

    /// Direct board access (pattern stamps, tests).
    pub fn grid_mut(&mut self) -> &mut Grid { &mut self.grid }

    pub fn cols(&self) -> u32 { self.grid.cols() }

    pub fn rows(&self) -> u32 { self.grid.rows() }

    /// Steps since the last resize or randomize.
    pub fn generation(&self) -> u64 { self.generation }

    pub fn last_counts(&self) -> GenerationCounts { self.last_counts }

    /// Recreate both grids, all dead, sized for the viewport. Previous
    /// contents are discarded, never migrated.
    pub fn resize(&mut self, width: f64, height: f64, cell_resolution: f64) {
        let (cols, rows) = grid_dimensions(width, height, cell_resolution);
        self.grid.reallocate(cols, rows);
        self.scratch.reallocate(cols, rows);
        self.generation = 0;
        self.last_counts = GenerationCounts::default();
    }

    /// Every cell becomes live with probability `live_probability`; its age
    /// is set to its new state (0 or 1).
    pub fn randomize(&mut self, live_probability: f32) {
        let rng = &mut self.rng;
        for (cell, age) in self.grid.cells.iter_mut().zip(self.grid.ages.iter_mut()) {
            let alive = rng.chance(live_probability) as u8;
            *cell = alive;
            *age = alive as u32;
        }
        self.generation = 0;
        self.last_counts = GenerationCounts {
            births: 0,
            deaths: 0,
            live: self.grid.live_count(),
        };
    }

    /// Advance one generation. A 0x0 board is a no-op apart from the counter.
    pub fn step(&mut self) -> GenerationCounts {
        let counts = next_generation(&self.grid, &mut self.scratch);
        std::mem::swap(&mut self.grid, &mut self.scratch);
        self.generation += 1;
        self.last_counts = counts;
        counts
    }
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}
