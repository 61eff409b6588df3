use super::*;

fn scenes(ids: &[&str]) -> Vec<Scene> {
    ids.iter()
        .enumerate()
        .map(|(i, id)| Scene::new(*id, i as f64))
        .collect()
}

fn ids(order: &[Scene]) -> Vec<&str> {
    order.iter().map(|scene| scene.id.as_str()).collect()
}

#[test]
fn dragging_down_adjusts_for_removal() {
    let order = scenes(&["A", "B", "C", "D"]);
    let (next, outcome) = reorder(&order, &SceneId::from("A"), 3);
    assert_eq!(ids(&next), ["B", "C", "A", "D"]);
    assert_eq!(
        outcome,
        ReorderOutcome::Moved {
            scene_id: SceneId::from("A"),
            from: 0,
            to: 2,
        }
    );
}

#[test]
fn dragging_up_needs_no_adjustment() {
    let order = scenes(&["A", "B", "C", "D"]);
    let (next, _) = reorder(&order, &SceneId::from("D"), 1);
    assert_eq!(ids(&next), ["A", "D", "B", "C"]);
}

#[test]
fn insertion_at_end_and_start() {
    let order = scenes(&["A", "B", "C"]);
    let (next, _) = reorder(&order, &SceneId::from("A"), 3);
    assert_eq!(ids(&next), ["B", "C", "A"]);

    let (next, _) = reorder(&order, &SceneId::from("C"), 0);
    assert_eq!(ids(&next), ["C", "A", "B"]);
}

#[test]
fn dropping_on_own_slot_is_unchanged() {
    let order = scenes(&["A", "B", "C", "D"]);
    // Before itself, and directly after itself.
    for insertion in [1, 2] {
        let (next, outcome) = reorder(&order, &SceneId::from("B"), insertion);
        assert_eq!(outcome, ReorderOutcome::Unchanged);
        assert_eq!(next, order);
    }
}

#[test]
fn unknown_scene_leaves_order_alone() {
    let order = scenes(&["A", "B"]);
    let (next, outcome) = reorder(&order, &SceneId::from("Z"), 0);
    assert_eq!(next, order);
    assert_eq!(
        outcome,
        ReorderOutcome::UnknownScene {
            scene_id: SceneId::from("Z"),
        }
    );
}

#[test]
fn out_of_range_insertion_is_treated_as_end() {
    let order = scenes(&["A", "B", "C"]);
    let (next, _) = reorder(&order, &SceneId::from("A"), 99);
    assert_eq!(ids(&next), ["B", "C", "A"]);
}

#[test]
fn every_move_preserves_the_id_set() {
    let order = scenes(&["A", "B", "C", "D", "E"]);
    let mut expected = ids(&order);
    expected.sort_unstable();

    for scene in &order {
        for insertion in 0..=order.len() {
            let (next, outcome) = reorder(&order, &scene.id, insertion);
            let mut got = ids(&next);
            got.sort_unstable();
            assert_eq!(got, expected);

            let displaced = order
                .iter()
                .zip(&next)
                .filter(|(before, after)| before.id != after.id)
                .count();
            match outcome {
                ReorderOutcome::Moved { from, to, .. } => {
                    assert_eq!(next[to].id, scene.id);
                    assert_eq!(displaced, from.abs_diff(to) + 1);
                }
                ReorderOutcome::Unchanged => assert_eq!(displaced, 0),
                other => panic!("unexpected outcome {other:?}"),
            }
        }
    }
}
