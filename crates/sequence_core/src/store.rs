use std::collections::HashSet;

use analytics::{derive_metrics, AnalyticsConfig};
use shared::{
    domain::{Placement, Scene, SceneId, SmoothingFactor},
    error::SequenceError,
    protocol::{DerivedMetrics, GestureEvent, ReorderOutcome},
};
use tracing::{debug, warn};

use crate::{
    drag::{transition, DragEffect, DragState},
    reorder::{apply_move, plan_move},
};

/// Owns the canonical scene order and the session smoothing factor.
///
/// Derived metrics are never cached; [`SequenceStore::derived_metrics`]
/// recomputes them from the current order and factor.
#[derive(Debug, Clone)]
pub struct SequenceStore {
    scenes: Vec<Scene>,
    smoothing_factor: SmoothingFactor,
    drag: DragState,
    config: AnalyticsConfig,
    revision: u64,
}

impl SequenceStore {
    pub fn new(scenes: Vec<Scene>, config: AnalyticsConfig) -> Result<Self, SequenceError> {
        validate_scenes(&scenes)?;
        config.validate()?;
        let smoothing_factor = SmoothingFactor::new(
            i64::from(config.default_smoothing_factor),
            config.max_smoothing_factor,
        )?;

        debug!(
            scenes = scenes.len(),
            factor = smoothing_factor.get(),
            "created sequence store"
        );
        Ok(Self {
            scenes,
            smoothing_factor,
            drag: DragState::Idle,
            config,
            revision: 0,
        })
    }

    pub fn order(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn scene_ids(&self) -> Vec<SceneId> {
        self.scenes.iter().map(|scene| scene.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn smoothing_factor(&self) -> SmoothingFactor {
        self.smoothing_factor
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Bumped on every order or smoothing change; no-ops leave it alone.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_smoothing_factor(&mut self, factor: i64) -> Result<(), SequenceError> {
        let factor = SmoothingFactor::new(factor, self.config.max_smoothing_factor)
            .inspect_err(|err| warn!(error = %err, "rejected smoothing factor"))?;
        self.store_smoothing_factor(factor);
        Ok(())
    }

    /// Accepts a raw number from a UI control; fractional values are rejected.
    pub fn set_smoothing_factor_f64(&mut self, factor: f64) -> Result<(), SequenceError> {
        let factor = SmoothingFactor::from_f64(factor, self.config.max_smoothing_factor)
            .inspect_err(|err| warn!(error = %err, "rejected smoothing factor"))?;
        self.store_smoothing_factor(factor);
        Ok(())
    }

    fn store_smoothing_factor(&mut self, factor: SmoothingFactor) {
        if factor == self.smoothing_factor {
            return;
        }
        self.smoothing_factor = factor;
        self.revision += 1;
        debug!(factor = factor.get(), revision = self.revision, "smoothing factor changed");
    }

    pub fn begin_drag(&mut self, scene_id: &SceneId) -> ReorderOutcome {
        self.apply_gesture(&GestureEvent::BeginDrag {
            scene_id: scene_id.clone(),
        })
    }

    pub fn update_drag_target(&mut self, index: usize, placement: Placement) -> ReorderOutcome {
        self.apply_gesture(&GestureEvent::UpdateTarget { index, placement })
    }

    pub fn drop_dragged(&mut self) -> ReorderOutcome {
        self.apply_gesture(&GestureEvent::Drop)
    }

    pub fn cancel_drag(&mut self) -> ReorderOutcome {
        self.apply_gesture(&GestureEvent::Cancel)
    }

    /// Runs one gesture through the drag state machine. A drop that resolves
    /// to a move replaces the order in a single assignment.
    pub fn apply_gesture(&mut self, event: &GestureEvent) -> ReorderOutcome {
        let step = transition(&self.drag, event, &self.scenes);
        self.drag = step.next;

        match step.effect {
            DragEffect::None => {
                debug!(state = ?self.drag, "drag state updated");
                ReorderOutcome::Pending
            }
            DragEffect::Ignored(outcome) => {
                match &outcome {
                    ReorderOutcome::UnknownScene { scene_id } => {
                        warn!(scene_id = %scene_id, "ignoring gesture for unknown scene");
                    }
                    other => debug!(outcome = ?other, "ignoring gesture"),
                }
                outcome
            }
            DragEffect::Drop {
                scene_id,
                insertion_index,
            } => self.move_scene(&scene_id, insertion_index),
        }
    }

    /// Moves `scene_id` to `insertion_index` outside of a drag gesture.
    pub fn move_scene(&mut self, scene_id: &SceneId, insertion_index: usize) -> ReorderOutcome {
        let outcome = plan_move(&self.scenes, scene_id, insertion_index);
        match &outcome {
            ReorderOutcome::Moved { from, to, .. } => {
                let mut next = self.scenes.clone();
                apply_move(&mut next, *from, *to);
                self.scenes = next;
                self.revision += 1;
                debug!(
                    scene_id = %scene_id,
                    from,
                    to,
                    revision = self.revision,
                    "scene reordered"
                );
            }
            ReorderOutcome::UnknownScene { .. } => {
                warn!(scene_id = %scene_id, "ignoring drop for unknown scene");
            }
            _ => debug!(scene_id = %scene_id, insertion_index, "drop left order unchanged"),
        }
        outcome
    }

    pub fn derived_metrics(&self) -> DerivedMetrics {
        let appeal: Vec<f64> = self.scenes.iter().map(|scene| scene.appeal).collect();
        derive_metrics(&appeal, self.smoothing_factor, &self.config)
    }
}

fn validate_scenes(scenes: &[Scene]) -> Result<(), SequenceError> {
    let mut seen = HashSet::with_capacity(scenes.len());
    for scene in scenes {
        if !seen.insert(&scene.id) {
            return Err(SequenceError::DuplicateSceneId(scene.id.clone()));
        }
        if !scene.appeal.is_finite() || scene.appeal < 0.0 {
            return Err(SequenceError::InvalidAppeal {
                scene_id: scene.id.clone(),
                appeal: scene.appeal,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
