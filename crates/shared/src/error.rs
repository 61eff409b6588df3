use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::SceneId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidParameter,
    DuplicateSceneId,
    InvalidAppeal,
}

/// Error as plain data, for handing across a UI boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SequenceError {
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },
    #[error("duplicate scene id '{0}'")]
    DuplicateSceneId(SceneId),
    #[error("scene '{scene_id}' has invalid appeal {appeal}; expected a finite non-negative number")]
    InvalidAppeal { scene_id: SceneId, appeal: f64 },
}

impl SequenceError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidParameter { .. } => ErrorCode::InvalidParameter,
            Self::DuplicateSceneId(_) => ErrorCode::DuplicateSceneId,
            Self::InvalidAppeal { .. } => ErrorCode::InvalidAppeal,
        }
    }
}

impl From<SequenceError> for ErrorReport {
    fn from(value: SequenceError) -> Self {
        Self {
            code: value.code(),
            message: value.to_string(),
        }
    }
}
