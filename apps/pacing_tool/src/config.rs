use std::{collections::HashMap, fs, path::Path};

use analytics::{validate_pacing_scale, AnalyticsConfig};
use tracing::warn;

pub const DEFAULT_CONFIG_FILE: &str = "pacing.toml";

/// Defaults, then `pacing.toml` (or `path`), then environment overrides.
pub fn load_settings(path: Option<&Path>) -> AnalyticsConfig {
    let mut settings = AnalyticsConfig::default();

    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    if let Ok(raw) = fs::read_to_string(path) {
        apply_file_config(&mut settings, &raw);
    }

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    settings
}

pub(crate) fn apply_file_config(settings: &mut AnalyticsConfig, raw: &str) {
    match toml::from_str::<AnalyticsConfig>(raw) {
        Ok(file_cfg) => match file_cfg.validate() {
            Ok(()) => {
                *settings = file_cfg;
                return;
            }
            Err(err) => warn!(error = %err, "config file has invalid values; applying valid fields only"),
        },
        Err(err) => warn!(error = %err, "config file did not parse as a whole; applying valid fields only"),
    }
    apply_file_fields(settings, raw);
}

fn apply_file_fields(settings: &mut AnalyticsConfig, raw: &str) {
    let file_cfg = match toml::from_str::<HashMap<String, toml::Value>>(raw) {
        Ok(file_cfg) => file_cfg,
        Err(err) => {
            warn!(error = %err, "ignoring unreadable config file");
            return;
        }
    };

    if let Some(v) = file_cfg.get("pacing_scale") {
        match v.as_float().or_else(|| v.as_integer().map(|i| i as f64)) {
            Some(scale) => set_pacing_scale(settings, scale),
            None => warn!(value = %v, "pacing_scale must be a number"),
        }
    }
    if let Some(v) = file_cfg.get("default_smoothing_factor") {
        match v.as_integer().and_then(|i| u32::try_from(i).ok()) {
            Some(factor) => settings.default_smoothing_factor = factor,
            None => warn!(value = %v, "default_smoothing_factor must be a non-negative integer"),
        }
    }
    if let Some(v) = file_cfg.get("max_smoothing_factor") {
        match v.as_integer().and_then(|i| u32::try_from(i).ok()) {
            Some(factor) => settings.max_smoothing_factor = factor,
            None => warn!(value = %v, "max_smoothing_factor must be a non-negative integer"),
        }
    }
}

pub(crate) fn apply_env_overrides(
    settings: &mut AnalyticsConfig,
    lookup: impl Fn(&str) -> Option<String>,
) {
    for key in ["PACING_SCALE", "APP__PACING_SCALE"] {
        if let Some(v) = lookup(key) {
            match v.parse::<f64>() {
                Ok(scale) => set_pacing_scale(settings, scale),
                Err(_) => warn!(key, value = %v, "ignoring non-numeric pacing scale"),
            }
        }
    }

    if let Some(v) = lookup("APP__DEFAULT_SMOOTHING_FACTOR") {
        match v.parse::<u32>() {
            Ok(parsed) => settings.default_smoothing_factor = parsed,
            Err(_) => warn!(value = %v, "ignoring invalid APP__DEFAULT_SMOOTHING_FACTOR"),
        }
    }
    if let Some(v) = lookup("APP__MAX_SMOOTHING_FACTOR") {
        match v.parse::<u32>() {
            Ok(parsed) => settings.max_smoothing_factor = parsed,
            Err(_) => warn!(value = %v, "ignoring invalid APP__MAX_SMOOTHING_FACTOR"),
        }
    }
}

fn set_pacing_scale(settings: &mut AnalyticsConfig, scale: f64) {
    match validate_pacing_scale(scale) {
        Ok(scale) => settings.pacing_scale = scale,
        Err(err) => warn!(error = %err, "ignoring pacing scale"),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
