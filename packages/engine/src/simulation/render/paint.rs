use crate::domain::palette::{cell_color, spark_color};

use super::surface::Surface;
use super::BackgroundCore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaintCounts {
    pub cells: u32,
    pub sparks: u32,
    pub expired: u32,
}

/// Clear, fill every live cell by age, then tick and fill sparks.
///
/// Sparks are ticked before drawing so a spark on its last tick is removed
/// instead of painted at zero opacity.
pub(super) fn paint<S: Surface + ?Sized>(core: &mut BackgroundCore, surface: &mut S) -> PaintCounts {
    let settings = core.settings;
    let res = settings.cell_resolution as f64;
    let mut counts = PaintCounts::default();

    let (width, height) = surface.size();
    surface.clear_rect(0.0, 0.0, width, height);

    for (x, y, age) in core.automaton.grid().live_cells() {
        surface.fill_rect(x as f64 * res, y as f64 * res, res, res, cell_color(&settings, age));
        counts.cells += 1;
    }

    counts.expired = core.sparks.tick() as u32;
    for spark in core.sparks.iter() {
        surface.fill_rect(
            spark.col as f64 * res,
            spark.row as f64 * res,
            res,
            res,
            spark_color(&settings, spark.opacity()),
        );
        counts.sparks += 1;
    }

    counts
}
