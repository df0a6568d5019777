use super::perf_timer::timed;
use super::surface::Surface;
use super::BackgroundCore;

/// Step the automaton once, then paint board and sparks.
pub(super) fn run_frame<S: Surface + ?Sized>(core: &mut BackgroundCore, surface: &mut S) {
    let perf_on = core.perf_enabled;

    let (counts, step_ms) = timed(perf_on, || core.automaton.step());
    let (painted, paint_ms) = timed(perf_on, || core.paint(surface));

    if perf_on {
        let stats = &mut core.perf_stats;
        stats.step_ms = step_ms;
        stats.paint_ms = paint_ms;
        stats.generation = core.automaton.generation().min(u32::MAX as u64) as u32;
        stats.live_cells = counts.live;
        stats.births = counts.births;
        stats.deaths = counts.deaths;
        stats.cells_painted = painted.cells;
        stats.sparks_painted = painted.sparks;
        stats.sparks_expired = painted.expired;
        stats.grid_size = core.automaton.grid().size() as u32;
    }
}
