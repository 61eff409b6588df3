use super::*;

fn order() -> Vec<Scene> {
    ["A", "B", "C", "D"]
        .into_iter()
        .map(|id| Scene::new(id, 1.0))
        .collect()
}

fn dragging(id: &str, insertion_index: Option<usize>) -> DragState {
    DragState::Dragging {
        scene_id: SceneId::from(id),
        insertion_index,
    }
}

#[test]
fn begin_drag_enters_dragging_without_target() {
    let step = transition(
        &DragState::Idle,
        &GestureEvent::BeginDrag {
            scene_id: SceneId::from("B"),
        },
        &order(),
    );
    assert_eq!(step.next, dragging("B", None));
    assert_eq!(step.next.dragged_scene(), Some(&SceneId::from("B")));
    assert_eq!(step.effect, DragEffect::None);
}

#[test]
fn begin_drag_replaces_active_drag() {
    let step = transition(
        &dragging("A", Some(3)),
        &GestureEvent::BeginDrag {
            scene_id: SceneId::from("C"),
        },
        &order(),
    );
    assert_eq!(step.next, dragging("C", None));
}

#[test]
fn begin_drag_for_unknown_scene_keeps_state() {
    let state = dragging("A", Some(2));
    let step = transition(
        &state,
        &GestureEvent::BeginDrag {
            scene_id: SceneId::from("Z"),
        },
        &order(),
    );
    assert_eq!(step.next, state);
    assert!(matches!(
        step.effect,
        DragEffect::Ignored(ReorderOutcome::UnknownScene { .. })
    ));
}

#[test]
fn hover_placement_maps_to_insertion_index() {
    assert_eq!(insertion_index(2, Placement::Before, 4), 2);
    assert_eq!(insertion_index(2, Placement::After, 4), 3);
    assert_eq!(insertion_index(3, Placement::After, 4), 4);
    assert_eq!(insertion_index(10, Placement::Before, 4), 4);
    assert_eq!(insertion_index(usize::MAX, Placement::After, 4), 4);
}

#[test]
fn hover_updates_only_the_candidate() {
    let step = transition(
        &dragging("A", Some(1)),
        &GestureEvent::UpdateTarget {
            index: 2,
            placement: Placement::After,
        },
        &order(),
    );
    assert_eq!(step.next, dragging("A", Some(3)));
    assert_eq!(step.effect, DragEffect::None);
}

#[test]
fn drop_with_target_requests_reorder_and_returns_to_idle() {
    let step = transition(&dragging("A", Some(3)), &GestureEvent::Drop, &order());
    assert_eq!(step.next, DragState::Idle);
    assert_eq!(
        step.effect,
        DragEffect::Drop {
            scene_id: SceneId::from("A"),
            insertion_index: 3,
        }
    );
}

#[test]
fn drop_without_target_is_ignored() {
    let step = transition(&dragging("A", None), &GestureEvent::Drop, &order());
    assert_eq!(step.next, DragState::Idle);
    assert_eq!(step.effect, DragEffect::Ignored(ReorderOutcome::NoTarget));
}

#[test]
fn cancel_returns_to_idle() {
    let step = transition(&dragging("B", Some(0)), &GestureEvent::Cancel, &order());
    assert_eq!(step.next, DragState::Idle);
    assert_eq!(step.effect, DragEffect::None);
}

#[test]
fn idle_ignores_everything_but_begin() {
    for event in [
        GestureEvent::Drop,
        GestureEvent::Cancel,
        GestureEvent::UpdateTarget {
            index: 0,
            placement: Placement::Before,
        },
    ] {
        let step = transition(&DragState::Idle, &event, &order());
        assert_eq!(step.next, DragState::Idle);
        assert_eq!(step.effect, DragEffect::Ignored(ReorderOutcome::NotDragging));
    }
}
