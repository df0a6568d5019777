use wasm_bindgen::prelude::*;

/// Per-frame counters, filled only while perf metrics are enabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) paint_ms: f64,
    pub(super) generation: u32,
    pub(super) live_cells: u32,
    pub(super) births: u32,
    pub(super) deaths: u32,
    pub(super) cells_painted: u32,
    pub(super) sparks_painted: u32,
    pub(super) sparks_expired: u32,
    pub(super) grid_size: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn paint_ms(&self) -> f64 { self.paint_ms }
    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u32 { self.generation }
    #[wasm_bindgen(getter)]
    pub fn live_cells(&self) -> u32 { self.live_cells }
    #[wasm_bindgen(getter)]
    pub fn births(&self) -> u32 { self.births }
    #[wasm_bindgen(getter)]
    pub fn deaths(&self) -> u32 { self.deaths }
    #[wasm_bindgen(getter)]
    pub fn cells_painted(&self) -> u32 { self.cells_painted }
    #[wasm_bindgen(getter)]
    pub fn sparks_painted(&self) -> u32 { self.sparks_painted }
    #[wasm_bindgen(getter)]
    pub fn sparks_expired(&self) -> u32 { self.sparks_expired }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
}
