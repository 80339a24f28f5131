use certkit_designer::designer_state::{DesignerState, InteractionKind};
use certkit_designer::model::{ElementPatch, ShapeKind};
use certkit_designer::presets;
use certkit_designer::template::CanvasPreset;

#[test]
fn test_click_selection() {
    let mut state = DesignerState::default();
    let a = state.add_element(presets::line());
    let b = state.add_element(presets::photo());

    state.click_element(a, false);
    assert_eq!(state.selected_ids(), vec![a]);
    state.click_element(b, true);
    assert_eq!(state.selected_ids(), vec![a, b]);
    state.click_element(a, true);
    assert_eq!(state.selected_ids(), vec![b]);
}

#[test]
fn test_undo_prunes_selection() {
    let mut state = DesignerState::default();
    let id = state.add_element(presets::qr_code());
    assert!(state.is_selected(id));
    state.undo();
    assert!(state.selected_ids().is_empty());
}

#[test]
fn test_group_drag_moves_unlocked_selection() {
    let mut state = DesignerState::default();
    let a = state.add_element(presets::shape(ShapeKind::Rectangle).at(100, 100));
    let b = state.add_element(presets::shape(ShapeKind::Rectangle).at(400, 400));
    let locked = state.add_element(presets::line().at(50, 50));
    state.update_element(locked, &ElementPatch::new().locked(true));
    state.select([a, b, locked]);

    assert!(state.begin_drag(a));
    assert!(matches!(
        state.interaction_kind(),
        Some(InteractionKind::Drag { .. })
    ));
    state.drag_to(133, 171);
    assert!(state.commit_interaction());

    assert_eq!(state.element(b).unwrap().geometry.x, 433);
    assert_eq!(state.element(b).unwrap().geometry.y, 471);
    assert_eq!(state.element(locked).unwrap().geometry.x, 50);
}

#[test]
fn test_discrete_edit_during_drag_ends_it() {
    let mut state = DesignerState::default();
    let id = state.add_element(presets::photo());
    state.begin_drag(id);
    state.drag_to(300, 300);
    state.set_background_color("#eeeeee");

    assert!(!state.is_interacting());
    assert_eq!(state.element(id).unwrap().geometry.x, 300);

    // the drag was folded into the color change
    assert!(state.undo());
    assert_eq!(state.template().background_color, "#ffffff");
    assert_eq!(state.element(id).unwrap().geometry.x, 100);
}

#[test]
fn test_new_template_resets_session() {
    let mut state = DesignerState::default();
    state.add_element(presets::line());
    state.copy_selected();
    state.new_template("Badge", CanvasPreset::BadgePortrait);

    assert!(state.template().elements.is_empty());
    assert!(!state.can_undo());
    assert!(!state.is_modified());
    assert_eq!(state.clipboard().len(), 1);
}
