//! Index remapping for a single moved scene.
//!
//! `insertion_index` is expressed against the order *before* the dragged
//! scene is removed: `k` means "before the scene currently at `k`", and
//! `len` means "at the end".

use shared::{
    domain::{Scene, SceneId},
    protocol::ReorderOutcome,
};

/// Resolves where `dragged_id` would land without touching `order`.
///
/// Returns `Moved { from, to }` where `to` is an index into the order after
/// removal, so `apply_move` can remove then insert directly.
pub fn plan_move(order: &[Scene], dragged_id: &SceneId, insertion_index: usize) -> ReorderOutcome {
    let Some(from) = order.iter().position(|scene| &scene.id == dragged_id) else {
        return ReorderOutcome::UnknownScene {
            scene_id: dragged_id.clone(),
        };
    };

    let mut to = insertion_index.min(order.len());
    // Removing the dragged scene shifts everything after it left by one.
    if from < to {
        to -= 1;
    }

    if to == from {
        ReorderOutcome::Unchanged
    } else {
        ReorderOutcome::Moved {
            scene_id: dragged_id.clone(),
            from,
            to,
        }
    }
}

/// Applies a move previously resolved by [`plan_move`].
pub fn apply_move<T>(order: &mut Vec<T>, from: usize, to: usize) {
    let item = order.remove(from);
    order.insert(to, item);
}

/// Pure convenience wrapper: returns the new order alongside the outcome.
/// The returned order equals the input unless the outcome is `Moved`.
pub fn reorder(
    order: &[Scene],
    dragged_id: &SceneId,
    insertion_index: usize,
) -> (Vec<Scene>, ReorderOutcome) {
    let outcome = plan_move(order, dragged_id, insertion_index);
    let mut next = order.to_vec();
    if let ReorderOutcome::Moved { from, to, .. } = outcome {
        apply_move(&mut next, from, to);
    }
    (next, outcome)
}

#[cfg(test)]
#[path = "tests/reorder_tests.rs"]
mod tests;
