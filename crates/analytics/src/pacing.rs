use shared::error::SequenceError;

/// Scale applied to the mean absolute change. Chosen so appeal values in
/// roughly 0..=12 land in a readable 0..=100 band; not calibrated against
/// real narrative data.
pub const DEFAULT_PACING_SCALE: f64 = 10.0;

const PERFECT_SCORE: f64 = 100.0;

/// A negative or non-finite scale would push scores above 100.
pub fn validate_pacing_scale(scale: f64) -> Result<f64, SequenceError> {
    if scale.is_finite() && scale >= 0.0 {
        Ok(scale)
    } else {
        Err(SequenceError::InvalidParameter {
            message: format!("pacing scale must be finite and non-negative, got {scale}"),
        })
    }
}

/// Mean of `|v[i] - v[i-1]|`, or `None` with fewer than two points.
pub fn mean_absolute_change(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let total: f64 = values
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).abs())
        .sum();
    Some(total / (values.len() - 1) as f64)
}

/// `max(0, 100 - MAC * scale)`; sequences with fewer than two points score 100.
pub fn pacing_score(smoothed: &[f64], scale: f64) -> f64 {
    match mean_absolute_change(smoothed) {
        Some(mac) => (PERFECT_SCORE - mac * scale).max(0.0),
        None => PERFECT_SCORE,
    }
}

#[cfg(test)]
#[path = "tests/pacing_tests.rs"]
mod tests;
