//! Drag gesture lifecycle as an explicit state value and transition function.

use shared::{
    domain::{Placement, Scene, SceneId},
    protocol::{GestureEvent, ReorderOutcome},
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        scene_id: SceneId,
        insertion_index: Option<usize>,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn dragged_scene(&self) -> Option<&SceneId> {
        match self {
            Self::Idle => None,
            Self::Dragging { scene_id, .. } => Some(scene_id),
        }
    }
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEffect {
    /// The gesture was accepted and only the drag state changed.
    None,
    /// A drop with a pending target; the caller performs the reorder.
    Drop {
        scene_id: SceneId,
        insertion_index: usize,
    },
    /// The gesture was ignored for the given reason.
    Ignored(ReorderOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: DragState,
    pub effect: DragEffect,
}

impl Transition {
    fn to(next: DragState, effect: DragEffect) -> Self {
        Self { next, effect }
    }
}

/// Maps a hover over the scene at `index` to an insertion index in `0..=len`.
pub fn insertion_index(index: usize, placement: Placement, len: usize) -> usize {
    let candidate = match placement {
        Placement::Before => index,
        Placement::After => index.saturating_add(1),
    };
    candidate.min(len)
}

pub fn transition(state: &DragState, event: &GestureEvent, order: &[Scene]) -> Transition {
    match (state, event) {
        (_, GestureEvent::BeginDrag { scene_id }) => {
            if order.iter().any(|scene| &scene.id == scene_id) {
                Transition::to(
                    DragState::Dragging {
                        scene_id: scene_id.clone(),
                        insertion_index: None,
                    },
                    DragEffect::None,
                )
            } else {
                Transition::to(
                    state.clone(),
                    DragEffect::Ignored(ReorderOutcome::UnknownScene {
                        scene_id: scene_id.clone(),
                    }),
                )
            }
        }
        (DragState::Dragging { scene_id, .. }, GestureEvent::UpdateTarget { index, placement }) => {
            Transition::to(
                DragState::Dragging {
                    scene_id: scene_id.clone(),
                    insertion_index: Some(insertion_index(*index, *placement, order.len())),
                },
                DragEffect::None,
            )
        }
        (
            DragState::Dragging {
                scene_id,
                insertion_index,
            },
            GestureEvent::Drop,
        ) => match insertion_index {
            Some(insertion_index) => Transition::to(
                DragState::Idle,
                DragEffect::Drop {
                    scene_id: scene_id.clone(),
                    insertion_index: *insertion_index,
                },
            ),
            None => Transition::to(
                DragState::Idle,
                DragEffect::Ignored(ReorderOutcome::NoTarget),
            ),
        },
        (DragState::Dragging { .. }, GestureEvent::Cancel) => {
            Transition::to(DragState::Idle, DragEffect::None)
        }
        (DragState::Idle, GestureEvent::UpdateTarget { .. })
        | (DragState::Idle, GestureEvent::Drop)
        | (DragState::Idle, GestureEvent::Cancel) => Transition::to(
            DragState::Idle,
            DragEffect::Ignored(ReorderOutcome::NotDragging),
        ),
    }
}

#[cfg(test)]
#[path = "tests/drag_tests.rs"]
mod tests;
