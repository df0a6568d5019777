//! Lifeglow Engine - landing page hero background in WASM
//!
//! A toroidal Game of Life board painted every 250 ms, with sparks that fade
//! out where the visitor clicks.
//!
//! Architecture:
//! - core/        - Access macros, logging, random source
//! - domain/      - Fixed settings and palette
//! - spatial/     - Cell/age grid storage
//! - systems/     - Generation rule and spark lifecycle
//! - simulation/  - Grid Engine, render/interaction loop, cadence
//! - api/         - Browser binding

// Macros must be declared before the modules that use them
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;
pub mod api;

pub use spatial::grid;

use wasm_bindgen::prelude::*;

// Opt-in `parallel` only: the step then joins on worker threads, which the
// browser main thread cannot block on.
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("lifeglow engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Fixed effect constants as JSON.
#[wasm_bindgen]
pub fn settings_json() -> String {
    domain::settings::EffectSettings::DEFAULT.manifest_json()
}

// Re-export main types
pub use api::canvas::CanvasSurface;
pub use api::wasm::{mount, BackgroundHandle};
pub use domain::palette::Hsla;
pub use domain::settings::EffectSettings;
pub use simulation::{
    grid_dimensions, Automaton, BackgroundCore, DrawCommand, DrawList, LoopPhase, PaintCounts,
    PerfStats, Scheduler, Surface,
};
pub use systems::{GenerationCounts, Spark, Sparks};
