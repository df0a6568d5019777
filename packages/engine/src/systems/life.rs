//! Conway generation rule on the toroidal grid.
//!
//! Reads only `current` and writes only `next`, so every cell sees the same
//! generation. Rows are independent. By default they run in order on the
//! calling thread; the opt-in `parallel` feature hands them to Rayon.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::grid::{Grid, DEAD, LIVE};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationCounts {
    pub births: u32,
    pub deaths: u32,
    pub live: u32,
}

impl GenerationCounts {
    #[inline]
    fn merge(self, other: GenerationCounts) -> GenerationCounts {
        GenerationCounts {
            births: self.births + other.births,
            deaths: self.deaths + other.deaths,
            live: self.live + other.live,
        }
    }
}

/// Next `(state, age)` for one cell with `neighbors` live neighbours.
///
/// - dead with exactly 3: born, age 1
/// - live with 2 or 3: survives, age + 1
/// - live otherwise: dies, age 0
/// - dead otherwise: stays dead, age 0
#[inline]
pub fn next_cell(state: u8, age: u32, neighbors: u8) -> (u8, u32) {
    match (state, neighbors) {
        (DEAD, 3) => (LIVE, 1),
        (LIVE, 2) | (LIVE, 3) => (LIVE, age.saturating_add(1)),
        _ => (DEAD, 0),
    }
}

/// Compute the generation after `current` into `next`.
///
/// `next` is resized to match if needed; its previous contents are ignored.
pub fn next_generation(current: &Grid, next: &mut Grid) -> GenerationCounts {
    if next.cols() != current.cols() || next.rows() != current.rows() {
        next.reallocate(current.cols(), current.rows());
    }
    if current.is_degenerate() {
        return GenerationCounts::default();
    }

    let cols = current.cols() as usize;
    let next_cells = &mut next.cells;
    let next_ages = &mut next.ages;

    #[cfg(feature = "parallel")]
    {
        next_cells
            .par_chunks_mut(cols)
            .zip(next_ages.par_chunks_mut(cols))
            .enumerate()
            .map(|(y, (cells_row, ages_row))| step_row(current, y as u32, cells_row, ages_row))
            .reduce(GenerationCounts::default, GenerationCounts::merge)
    }

    #[cfg(not(feature = "parallel"))]
    {
        next_cells
            .chunks_mut(cols)
            .zip(next_ages.chunks_mut(cols))
            .enumerate()
            .map(|(y, (cells_row, ages_row))| step_row(current, y as u32, cells_row, ages_row))
            .fold(GenerationCounts::default(), GenerationCounts::merge)
    }
}

#[cfg(test)]
thread_local! {
    static ROWS_STEPPED: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

fn step_row(current: &Grid, y: u32, cells_row: &mut [u8], ages_row: &mut [u32]) -> GenerationCounts {
    #[cfg(test)]
    ROWS_STEPPED.with(|rows| rows.set(rows.get() + 1));

    let mut counts = GenerationCounts::default();
    let row_start = current.index(0, y);

    for x in 0..current.cols() {
        let idx = row_start + x as usize;
        let state = *fast!(current.cells, [idx]);
        let age = *fast!(current.ages, [idx]);
        let neighbors = current.live_neighbors(x, y);

        let (next_state, next_age) = next_cell(state, age, neighbors);
        fast!(cells_row, [x as usize] = next_state);
        fast!(ages_row, [x as usize] = next_age);

        if next_state == LIVE {
            counts.live += 1;
            if state == DEAD {
                counts.births += 1;
            }
        } else if state == LIVE {
            counts.deaths += 1;
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_table() {
        assert_eq!(next_cell(DEAD, 0, 3), (LIVE, 1));
        assert_eq!(next_cell(DEAD, 0, 2), (DEAD, 0));
        assert_eq!(next_cell(LIVE, 4, 2), (LIVE, 5));
        assert_eq!(next_cell(LIVE, 4, 3), (LIVE, 5));
        for n in [0u8, 1, 4, 5, 6, 7, 8] {
            assert_eq!(next_cell(LIVE, 9, n), (DEAD, 0), "n = {n}");
        }
    }

    #[test]
    fn age_saturates_instead_of_wrapping() {
        assert_eq!(next_cell(LIVE, u32::MAX, 2), (LIVE, u32::MAX));
    }

    #[test]
    fn counts_births_and_deaths() {
        let mut cur = Grid::new(5, 5);
        // blinker: horizontal -> vertical
        cur.set_alive(1, 2, true);
        cur.set_alive(2, 2, true);
        cur.set_alive(3, 2, true);
        let mut next = Grid::new(5, 5);
        let counts = next_generation(&cur, &mut next);
        assert_eq!(counts, GenerationCounts { births: 2, deaths: 2, live: 3 });
        assert!(next.is_alive(2, 1));
        assert!(next.is_alive(2, 2));
        assert!(next.is_alive(2, 3));
        assert_eq!(next.age(2, 2), 2);
        assert_eq!(next.age(2, 1), 1);
    }

    #[cfg(not(feature = "parallel"))]
    #[test]
    fn default_build_steps_every_row_on_the_calling_thread() {
        let mut cur = Grid::new(400, 400);
        cur.set_alive(10, 10, true);
        let mut next = Grid::new(400, 400);

        ROWS_STEPPED.with(|rows| rows.set(0));
        for _ in 0..5 {
            next_generation(&cur, &mut next);
        }
        assert_eq!(ROWS_STEPPED.with(|rows| rows.get()), 5 * 400);
    }

    #[test]
    fn mismatched_scratch_is_resized() {
        let cur = Grid::new(7, 3);
        let mut next = Grid::new(1, 1);
        next_generation(&cur, &mut next);
        assert_eq!((next.cols(), next.rows()), (7, 3));
    }
}
