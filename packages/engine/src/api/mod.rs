//! Browser binding: canvas surface, timer/frame scheduling, DOM listeners.

pub mod canvas;
pub mod wasm;
