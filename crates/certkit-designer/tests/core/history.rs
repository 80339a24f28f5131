use certkit_designer::designer_state::{DesignerState, EditorSettings};
use certkit_designer::model::{CommonStyle, ElementPatch, ShapeKind};
use certkit_designer::presets;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Edit {
    Add(i32, i32),
    Rename(u8),
    MoveFirst(i32, i32),
    Recolor(u8),
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (0..800i32, 0..500i32).prop_map(|(x, y)| Edit::Add(x, y)),
        any::<u8>().prop_map(Edit::Rename),
        (0..800i32, 0..500i32).prop_map(|(x, y)| Edit::MoveFirst(x, y)),
        any::<u8>().prop_map(Edit::Recolor),
    ]
}

/// Applies `edit`, returning whether it committed.
fn apply(state: &mut DesignerState, edit: &Edit, step: usize) -> bool {
    match edit {
        Edit::Add(x, y) => {
            state.add_element(presets::shape(ShapeKind::Rectangle).at(*x, *y));
            true
        }
        Edit::Rename(n) => state.set_template_name(format!("Template {n} #{step}")),
        Edit::MoveFirst(x, y) => match state.template().elements.first().map(|e| e.id) {
            Some(id) => state.update_element(id, &ElementPatch::new().position(*x, *y)),
            None => false,
        },
        Edit::Recolor(n) => state.set_background_color(format!("#{n:02x}{step:04x}")),
    }
}

proptest! {
    #[test]
    fn prop_undo_reverses_every_commit(edits in prop::collection::vec(edit_strategy(), 1..40)) {
        let mut state = DesignerState::default();
        let start = state.template().clone();

        let mut committed = 0;
        for (step, edit) in edits.iter().enumerate() {
            if apply(&mut state, edit, step) {
                committed += 1;
            }
        }
        for _ in 0..committed {
            prop_assert!(state.undo());
        }
        prop_assert_eq!(state.template(), &start);
        prop_assert!(!state.can_undo());
    }

    #[test]
    fn prop_style_is_normalized_at_rest(opacity in -1e6f64..1e6, rotation in -1e6f64..1e6) {
        let mut state = DesignerState::default();
        let style = CommonStyle { opacity, rotation, ..CommonStyle::default() };
        let id = state.add_element(presets::line().with_style(style));
        let element = state.element(id).unwrap();
        prop_assert!((0.0..=100.0).contains(&element.style.opacity));
        prop_assert!((0.0..360.0).contains(&element.style.rotation));

        state.update_element(id, &ElementPatch::new().opacity(-opacity).rotation(-rotation));
        let element = state.element(id).unwrap();
        prop_assert!((0.0..=100.0).contains(&element.style.opacity));
        prop_assert!((0.0..360.0).contains(&element.style.rotation));
    }
}

#[test]
fn test_history_is_bounded() {
    let settings = EditorSettings {
        history_limit: 50,
        ..EditorSettings::default()
    };
    let mut state = DesignerState::new(settings);
    for n in 1..=60 {
        assert!(state.set_template_name(format!("Edit {n}")));
    }

    let mut undos = 0;
    while state.undo() {
        undos += 1;
    }
    assert_eq!(undos, 49);
    assert_eq!(state.template().name, "Edit 11");
}

#[test]
fn test_new_commit_discards_redo() {
    let mut state = DesignerState::default();
    state.set_template_name("A");
    state.set_template_name("B");
    state.undo();
    assert!(state.can_redo());

    state.set_template_name("C");
    assert!(!state.can_redo());
    assert!(!state.redo());
    assert_eq!(state.template().name, "C");
}

#[test]
fn test_undo_at_start_is_silent() {
    let mut state = DesignerState::default();
    let before = state.template().clone();
    assert!(!state.undo());
    assert!(!state.redo());
    assert_eq!(state.template(), &before);
}
