use super::BackgroundCore;

pub(super) fn resize(core: &mut BackgroundCore, width: f64, height: f64) {
    let settings = core.settings;
    core.viewport_width = width;
    core.viewport_height = height;
    core.automaton.resize(width, height, settings.cell_resolution as f64);
    core.automaton.randomize(settings.live_probability);

    console_log!(
        "lifeglow: viewport {}x{} -> {}x{} cells, {} live",
        width,
        height,
        core.automaton.cols(),
        core.automaton.rows(),
        core.automaton.last_counts().live
    );
}

/// Surface-local point to cell, floored; no bounds check against the board.
pub(super) fn click(core: &mut BackgroundCore, local_x: f64, local_y: f64) -> (i32, i32) {
    let res = core.settings.cell_resolution as f64;
    let col = (local_x / res).floor() as i32;
    let row = (local_y / res).floor() as i32;
    core.sparks.spawn(col, row, core.settings.spark_life);
    (col, row)
}
