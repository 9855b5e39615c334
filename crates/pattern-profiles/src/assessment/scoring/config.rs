use serde::{Deserialize, Serialize};

/// Divisor applied to slider values by the reference scoring rules.
pub const REFERENCE_SLIDER_DIVISOR: f64 = 10.0;

/// Multiplier applied to every normalized slider contribution.
pub const SLIDER_SCALE: f64 = 10.0;

/// How a raw slider value is turned into a 0..1 fraction before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliderNormalization {
    /// `value / divisor`, ignoring the question's declared range. This is the
    /// reference behavior and is only correct for sliders whose range is
    /// `0..=divisor`; every slider in the built-in catalog is `0..=10`.
    FixedDivisor(f64),
    /// `(value - min) / (max - min)` using the question's own range.
    CatalogRange,
}

impl Default for SliderNormalization {
    fn default() -> Self {
        Self::FixedDivisor(REFERENCE_SLIDER_DIVISOR)
    }
}

/// Tunables for the scoring engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub slider_normalization: SliderNormalization,
    pub slider_scale: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            slider_normalization: SliderNormalization::default(),
            slider_scale: SLIDER_SCALE,
        }
    }
}
