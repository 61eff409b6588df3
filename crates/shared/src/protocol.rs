use serde::{Deserialize, Serialize};

use crate::{
    domain::{Placement, SceneId},
    error::ErrorReport,
};

/// Drag gesture events produced by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum GestureEvent {
    BeginDrag {
        scene_id: SceneId,
    },
    UpdateTarget {
        index: usize,
        placement: Placement,
    },
    Drop,
    Cancel,
}

/// Result of a drop, or of any gesture that could have produced one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ReorderOutcome {
    Moved {
        scene_id: SceneId,
        from: usize,
        to: usize,
    },
    /// The drop resolved to the scene's current position.
    Unchanged,
    UnknownScene {
        scene_id: SceneId,
    },
    NoTarget,
    NotDragging,
    /// Gesture accepted without a drop (drag start, hover, cancel).
    Pending,
}

impl ReorderOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub smoothed: Vec<f64>,
    pub pacing_score: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum StoreEvent {
    OrderChanged {
        revision: u64,
        order: Vec<SceneId>,
        metrics: DerivedMetrics,
    },
    SmoothingChanged {
        revision: u64,
        factor: u32,
        metrics: DerivedMetrics,
    },
    Error(ErrorReport),
}
