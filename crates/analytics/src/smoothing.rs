//! Centered moving average over the appeal curve.
//!
//! Windows are truncated at both ends of the sequence: the first and last
//! points are averaged over fewer samples instead of being padded with zeros
//! or wrapped around.

use shared::domain::SmoothingFactor;

/// Odd window width for `factor`. Factors 2k and 2k+1 share a window.
pub fn window_size(factor: SmoothingFactor) -> usize {
    let factor = factor.get() as usize;
    (2 * (factor / 2) + 1).max(1)
}

pub fn smooth(values: &[f64], factor: SmoothingFactor) -> Vec<f64> {
    if factor == SmoothingFactor::DISABLED || values.len() <= 1 {
        return values.to_vec();
    }

    let half = window_size(factor) / 2;
    let last = values.len() - 1;

    (0..values.len())
        .map(|i| {
            let start = i.saturating_sub(half);
            let end = (i + half).min(last);
            let window = &values[start..=end];
            window.iter().sum::<f64>() / window.len() as f64
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/smoothing_tests.rs"]
mod tests;
