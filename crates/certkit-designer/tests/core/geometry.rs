use certkit_designer::designer_state::DesignerState;
use certkit_designer::geometry::{
    distribute, snap_position, Alignment, Axis, GuideSource, LockPolicy, SnapOptions,
};
use certkit_designer::model::{ElementDraft, Geometry, ShapeKind};
use certkit_designer::presets;
use certkit_designer::template::Template;

fn rect(x: i32, width: i32) -> ElementDraft {
    presets::shape(ShapeKind::Rectangle).at(x, 0).sized(width, 40)
}

#[test]
fn test_center_align_uses_average_center() {
    let mut state = DesignerState::default();
    let a = state.add_element(rect(0, 100));
    let b = state.add_element(rect(200, 100));
    let c = state.add_element(rect(500, 50));
    state.select_all();

    assert!(state
        .align_selected(Alignment::CenterHorizontal, LockPolicy::Include)
        .unwrap());
    assert_eq!(state.element(a).unwrap().geometry.x, 225);
    assert_eq!(state.element(b).unwrap().geometry.x, 225);
    assert_eq!(state.element(c).unwrap().geometry.x, 250);

    // one history entry for the whole alignment
    assert!(state.undo());
    assert_eq!(state.element(c).unwrap().geometry.x, 500);
}

#[test]
fn test_distribute_keeps_ends_and_equalizes_gaps() {
    let mut state = DesignerState::default();
    let first = state.add_element(rect(0, 100));
    let last = state.add_element(rect(600, 100));
    let middle = state.add_element(rect(150, 200));
    state.select_all();

    assert!(state.distribute_selected(Axis::Horizontal).unwrap());
    let g = |id| state.element(id).unwrap().geometry;
    assert_eq!(g(first).x, 0);
    assert_eq!(g(last).x, 600);
    assert_eq!(g(middle).x - g(first).right(), g(last).x - g(middle).right());
}

#[test]
fn test_distribute_is_pure() {
    let (t, _) = Template::default().add_element(rect(0, 10));
    let (t, _) = t.add_element(rect(50, 10));
    let refs: Vec<_> = t.elements.iter().collect();
    assert!(distribute(&refs, Axis::Vertical).is_empty());
}

#[test]
fn test_snap_within_five_pixels() {
    let (template, other) = Template::default().add_element(rect(300, 200));
    let others: Vec<_> = template.elements.iter().collect();
    let options = SnapOptions::default();
    let dragged = Geometry::new(0, 100, 80, 80);

    // right edge of `other` is at 500
    let snapped = snap_position(
        Geometry { x: 505, ..dragged },
        template.canvas_size(),
        &others,
        &options,
    );
    assert_eq!(snapped.x, 500);
    assert!(snapped
        .guides
        .iter()
        .any(|g| g.source == GuideSource::Element(other)));

    let free = snap_position(
        Geometry { x: 506, ..dragged },
        template.canvas_size(),
        &others,
        &options,
    );
    assert_eq!(free.x, 506);
}

#[test]
fn test_paste_two_elements() {
    let mut state = DesignerState::default();
    let a = state.add_element(rect(10, 50));
    let b = state.add_element(presets::text("Hello").at(40, 60));
    state.select([a, b]);
    assert_eq!(state.copy_selected(), 2);

    let pasted = state.paste();
    assert_eq!(pasted.len(), 2);
    assert!(!pasted.contains(&a) && !pasted.contains(&b));
    assert_eq!(state.selected_ids(), pasted);

    for (source, copy) in [a, b].into_iter().zip(&pasted) {
        let src = state.element(source).unwrap().geometry;
        let dst = state.element(*copy).unwrap().geometry;
        assert_eq!((dst.x, dst.y), (src.x + 20, src.y + 20));
    }
}

#[test]
fn test_bring_to_front_after_paste() {
    let mut state = DesignerState::default();
    let a = state.add_element(rect(0, 10));
    let b = state.add_element(rect(20, 10));
    state.select([a]);
    assert!(state.bring_to_front());

    let order: Vec<_> = state.template().paint_order().iter().map(|e| e.id).collect();
    assert_eq!(order, vec![b, a]);
}
