//! Appeal-curve analytics: moving-average smoothing, pacing score and
//! summary statistics. Everything here is a pure function of its inputs.

use serde::Deserialize;
use shared::{
    domain::{SmoothingFactor, MAX_SMOOTHING_FACTOR},
    error::SequenceError,
    protocol::DerivedMetrics,
};

pub mod pacing;
pub mod smoothing;
pub mod stats;

pub use pacing::{
    mean_absolute_change, pacing_score, validate_pacing_scale, DEFAULT_PACING_SCALE,
};
pub use smoothing::{smooth, window_size};
pub use stats::SummaryStats;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Multiplier applied to the mean absolute change before it is
    /// subtracted from 100.
    pub pacing_scale: f64,
    pub default_smoothing_factor: u32,
    pub max_smoothing_factor: u32,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            pacing_scale: DEFAULT_PACING_SCALE,
            default_smoothing_factor: 0,
            max_smoothing_factor: MAX_SMOOTHING_FACTOR,
        }
    }
}

impl AnalyticsConfig {
    /// Checks the pacing scale and that the default factor fits under the max.
    pub fn validate(&self) -> Result<(), SequenceError> {
        validate_pacing_scale(self.pacing_scale)?;
        SmoothingFactor::new(
            i64::from(self.default_smoothing_factor),
            self.max_smoothing_factor,
        )?;
        Ok(())
    }
}

pub fn derive_metrics(
    values: &[f64],
    factor: SmoothingFactor,
    config: &AnalyticsConfig,
) -> DerivedMetrics {
    let smoothed = smooth(values, factor);
    let pacing_score = pacing_score(&smoothed, config.pacing_scale);
    let stats = SummaryStats::from_values(&smoothed);
    tracing::debug!(
        scenes = values.len(),
        factor = factor.get(),
        pacing_score,
        "recomputed derived metrics"
    );

    DerivedMetrics {
        smoothed,
        pacing_score,
        min: stats.min,
        max: stats.max,
        range: stats.range,
        average: stats.average,
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
