//! Background - cellular automaton + click sparks
//!
//! Two parts sharing one board and one drawing surface:
//! - `Automaton` (Grid Engine): cell/age grids, resize, randomize, step
//! - `BackgroundCore` (render/interaction loop): cadence, paint, sparks,
//!   click translation
//!
//! Everything here runs on one thread. The browser binding in `api/` owns the
//! only `BackgroundCore` and calls into it from timer, frame and DOM callbacks.

use crate::domain::settings::EffectSettings;
use crate::systems::{GenerationCounts, Sparks};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "automaton/automaton.rs"]
mod automaton;
#[path = "init/init.rs"]
mod init;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/surface.rs"]
mod surface;
#[path = "render/paint.rs"]
mod paint;
#[path = "cadence/cadence.rs"]
mod cadence;

pub use automaton::{grid_dimensions, Automaton};
pub use cadence::{LoopPhase, Scheduler};
pub use paint::PaintCounts;
pub use perf_stats::PerfStats;
pub use surface::{DrawCommand, DrawList, Surface};

/// The render/interaction loop state.
pub struct BackgroundCore {
    settings: EffectSettings,
    automaton: Automaton,
    sparks: Sparks,

    // Last viewport reported through `on_resize`
    viewport_width: f64,
    viewport_height: f64,

    phase: LoopPhase,

    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl BackgroundCore {
    /// Empty board; call `on_resize` to size and seed it.
    pub fn new(settings: EffectSettings) -> Self {
        init::create_background_core(settings, Automaton::new())
    }

    /// Deterministic seeding, for tests and reproducible captures.
    pub fn with_seed(settings: EffectSettings, seed: u32) -> Self {
        init::create_background_core(settings, Automaton::with_seed(seed))
    }

    pub fn settings(&self) -> &EffectSettings { &self.settings }

    pub fn automaton(&self) -> &Automaton { &self.automaton }

    pub fn automaton_mut(&mut self) -> &mut Automaton { &mut self.automaton }

    pub fn sparks(&self) -> &Sparks { &self.sparks }

    pub fn phase(&self) -> LoopPhase { self.phase }

    pub fn viewport(&self) -> (f64, f64) { (self.viewport_width, self.viewport_height) }

    pub fn last_counts(&self) -> GenerationCounts { self.automaton.last_counts() }

    /// Enable or disable per-frame timings (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
        if !enabled {
            self.perf_stats.reset();
        }
    }

    /// Last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }

    // === Input ===

    /// Viewport changed: rebuild and reseed the board. Sparks are kept as-is.
    pub fn on_resize(&mut self, width: f64, height: f64) {
        commands::resize(self, width, height)
    }

    /// Pointer click at client coordinates, with the surface's on-screen
    /// offset. Returns the spark's `(col, row)`.
    pub fn on_click(&mut self, client_x: f64, client_y: f64, surface_left: f64, surface_top: f64) -> (i32, i32) {
        commands::click(self, client_x - surface_left, client_y - surface_top)
    }

    /// Spawn a spark at surface-local coordinates.
    pub fn spark_at_local(&mut self, local_x: f64, local_y: f64) -> (i32, i32) {
        commands::click(self, local_x, local_y)
    }

    // === Frame work ===

    /// Paint the current board and advance sparks by one tick, without
    /// stepping the automaton.
    pub fn paint<S: Surface + ?Sized>(&mut self, surface: &mut S) -> PaintCounts {
        paint::paint(self, surface)
    }

    /// One generation followed by one paint: the work of a frame callback.
    pub fn run_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        step::run_frame(self, surface)
    }

    // === Cadence ===

    /// First frame immediately, then arm the cadence timer. No-op unless idle.
    pub fn start<S, T>(&mut self, surface: &mut S, scheduler: &mut T) -> bool
    where
        S: Surface + ?Sized,
        T: Scheduler + ?Sized,
    {
        cadence::start(self, surface, scheduler)
    }

    /// Cadence timer fired: ask for the next frame.
    pub fn on_tick<T: Scheduler + ?Sized>(&mut self, scheduler: &mut T) -> bool {
        cadence::on_tick(self, scheduler)
    }

    /// Frame callback: step, paint, re-arm the timer.
    pub fn on_frame<S, T>(&mut self, surface: &mut S, scheduler: &mut T) -> bool
    where
        S: Surface + ?Sized,
        T: Scheduler + ?Sized,
    {
        cadence::on_frame(self, surface, scheduler)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
