use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SequenceError;

/// Upper bound for the smoothing factor when no other limit is configured.
pub const MAX_SMOOTHING_FACTOR: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneId(pub String);

impl SceneId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SceneId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A narrative scene. Only `id` and `appeal` are read by the analytics and
/// reorder code; the remaining fields are carried along for the presentation
/// layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub id: SceneId,
    pub appeal: f64,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Scene {
    pub fn new(id: impl Into<String>, appeal: f64) -> Self {
        Self {
            id: SceneId::new(id),
            appeal,
            name: String::new(),
            summary: None,
            category: None,
            image: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Which half of the hovered scene the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    Before,
    After,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SmoothingFactor(u32);

impl SmoothingFactor {
    pub const DISABLED: Self = Self(0);

    /// Validates `value` against `[0, max]`.
    pub fn new(value: i64, max: u32) -> Result<Self, SequenceError> {
        if value < 0 || value > i64::from(max) {
            return Err(SequenceError::InvalidParameter {
                message: format!("smoothing factor must be within 0..={max}, got {value}"),
            });
        }
        Ok(Self(value as u32))
    }

    /// Like [`SmoothingFactor::new`] but also rejects fractional and
    /// non-finite values.
    pub fn from_f64(value: f64, max: u32) -> Result<Self, SequenceError> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(SequenceError::InvalidParameter {
                message: format!("smoothing factor must be an integer, got {value}"),
            });
        }
        if value < 0.0 || value > f64::from(max) {
            return Err(SequenceError::InvalidParameter {
                message: format!("smoothing factor must be within 0..={max}, got {value}"),
            });
        }
        Ok(Self(value as u32))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for SmoothingFactor {
    type Error = SequenceError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value, MAX_SMOOTHING_FACTOR)
    }
}

impl TryFrom<f64> for SmoothingFactor {
    type Error = SequenceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value, MAX_SMOOTHING_FACTOR)
    }
}

impl fmt::Display for SmoothingFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
