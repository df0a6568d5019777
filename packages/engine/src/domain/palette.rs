//! HSLA colours for live cells and sparks.

use std::fmt;

use super::settings::EffectSettings;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    /// Degrees; not wrapped, CSS treats hue as circular.
    pub h: f32,
    /// Percent.
    pub s: f32,
    /// Percent.
    pub l: f32,
    pub a: f32,
}

impl Hsla {
    pub const fn new(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a }
    }

    /// `hsla(H, S%, L%, A)`, the form canvas `fillStyle` accepts.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsla({}, {}%, {}%, {})", self.h, self.s, self.l, self.a)
    }
}

/// Colour of a live cell that has been alive for `age` generations.
///
/// Hue drifts linearly with age; lightness rises with age until the bonus cap.
pub fn cell_color(settings: &EffectSettings, age: u32) -> Hsla {
    let age = age as f32;
    let hue = settings.base_hue + settings.age_hue_step * age;
    let bonus = (settings.age_lightness_step * age).min(settings.lightness_bonus_cap);
    Hsla::new(
        hue,
        settings.saturation,
        settings.base_lightness + bonus,
        settings.cell_alpha,
    )
}

/// Colour of a spark at `opacity` (see `Spark::opacity`).
pub fn spark_color(settings: &EffectSettings, opacity: f32) -> Hsla {
    Hsla::new(
        settings.spark_hue,
        settings.spark_saturation,
        settings.spark_lightness,
        opacity.clamp(0.0, 1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const S: EffectSettings = EffectSettings::DEFAULT;

    #[test]
    fn newborn_cell_color() {
        let c = cell_color(&S, 1);
        assert_eq!(c, Hsla::new(262.0, 90.0, 52.0, 0.8));
    }

    #[test]
    fn lightness_bonus_caps_at_thirty() {
        assert_eq!(cell_color(&S, 15).l, 80.0);
        assert_eq!(cell_color(&S, 16).l, 80.0);
        assert_eq!(cell_color(&S, 500).l, 80.0);
        // hue keeps drifting past the cap
        assert_eq!(cell_color(&S, 500).h, 1260.0);
    }

    #[test]
    fn spark_fades_with_life() {
        assert_eq!(spark_color(&S, 1.0).a, 1.0);
        assert_eq!(spark_color(&S, 0.5).a, 0.5);
        assert_eq!(spark_color(&S, -0.25).a, 0.0);
    }

    #[test]
    fn css_string_matches_canvas_syntax() {
        assert_eq!(cell_color(&S, 3).to_css(), "hsla(266, 90%, 56%, 0.8)");
        assert_eq!(spark_color(&S, 0.5).to_css(), "hsla(320, 100%, 80%, 0.5)");
    }
}
