//! Fixed effect constants.
//!
//! The background is not user-configurable. Every tunable lives here so the
//! Grid Engine, the paint step and the browser binding agree on one table, and
//! so the page can read the same numbers through `settings_json()`.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectSettings {
    /// Side length of one cell, in CSS pixels.
    pub cell_resolution: u32,
    /// Delay between generations.
    pub cadence_ms: u32,
    /// Chance for a cell to start alive on randomize.
    pub live_probability: f32,
    /// Paint ticks a spark survives.
    pub spark_life: u32,

    pub base_hue: f32,
    pub saturation: f32,
    pub base_lightness: f32,
    /// Hue shift per generation of age.
    pub age_hue_step: f32,
    /// Lightness gain per generation of age, before the cap.
    pub age_lightness_step: f32,
    pub lightness_bonus_cap: f32,
    pub cell_alpha: f32,

    pub spark_hue: f32,
    pub spark_saturation: f32,
    pub spark_lightness: f32,
}

impl EffectSettings {
    pub const DEFAULT: EffectSettings = EffectSettings {
        cell_resolution: 25,
        cadence_ms: 250,
        live_probability: 0.2,
        spark_life: 50,
        base_hue: 260.0,
        saturation: 90.0,
        base_lightness: 50.0,
        age_hue_step: 2.0,
        age_lightness_step: 2.0,
        lightness_bonus_cap: 30.0,
        cell_alpha: 0.8,
        spark_hue: 320.0,
        spark_saturation: 100.0,
        spark_lightness: 80.0,
    };

    /// JSON manifest for the page (read-only).
    pub fn manifest_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self::DEFAULT
    }
}
