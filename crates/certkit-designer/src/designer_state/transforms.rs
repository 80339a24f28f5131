//! Align, distribute, center and nudge for designer state.

use certkit_core::{Error, Result};

use super::interaction::{Interaction, InteractionKind};
use super::DesignerState;
use crate::geometry::{
    align, center_on_canvas, distribute, nudge, Alignment, Axis, CenterAxis, LockPolicy,
    NudgeDirection, Placement,
};
use crate::model::{Element, ElementPatch};
use crate::template::Template;

fn placement_patches(placements: Vec<Placement>) -> Vec<(crate::model::ElementId, ElementPatch)> {
    placements
        .into_iter()
        .map(|(id, g)| (id, ElementPatch::new().geometry(g)))
        .collect()
}

impl DesignerState {
    /// Aligns the selection.
    ///
    /// An empty selection does nothing. Fewer than two participating
    /// elements is rejected before anything changes.
    pub fn align_selected(&mut self, alignment: Alignment, locks: LockPolicy) -> Result<bool> {
        if self.selection.is_empty() {
            return Ok(false);
        }
        let participants: Vec<&Element> = self
            .selected_elements()
            .into_iter()
            .filter(|e| locks.admits(e))
            .collect();
        if participants.len() < 2 {
            tracing::warn!("{} rejected: {} element(s)", alignment.label(), participants.len());
            return Err(Error::insufficient_selection(
                alignment.label(),
                2,
                participants.len(),
            ));
        }
        let patches = placement_patches(align(&participants, alignment));
        let next = self.template.update_elements(&patches);
        Ok(self.commit(next, alignment.label()))
    }

    /// Spaces the selection evenly. Needs at least three elements.
    pub fn distribute_selected(&mut self, axis: Axis) -> Result<bool> {
        if self.selection.is_empty() {
            return Ok(false);
        }
        let label = match axis {
            Axis::Horizontal => "Distribute Horizontally",
            Axis::Vertical => "Distribute Vertically",
        };
        let participants = self.selected_elements();
        if participants.len() < 3 {
            tracing::warn!("{} rejected: {} element(s)", label, participants.len());
            return Err(Error::insufficient_selection(label, 3, participants.len()));
        }
        let patches = placement_patches(distribute(&participants, axis));
        let next = self.template.update_elements(&patches);
        Ok(self.commit(next, label))
    }

    /// Centers each selected unlocked element on the canvas on its own.
    pub fn center_selected(&mut self, axis: CenterAxis) -> bool {
        let canvas = self.template.canvas_size();
        let placements: Vec<Placement> = self
            .selected_elements()
            .into_iter()
            .filter(|e| !e.is_locked())
            .map(|e| (e.id, center_on_canvas(e.geometry, canvas, axis)))
            .collect();
        if placements.is_empty() {
            return false;
        }
        let next = self.template.update_elements(&placement_patches(placements));
        self.commit(next, "Center on Canvas")
    }

    /// Keyboard nudge preview. Moves every selected unlocked element one
    /// step (or a large step with the modifier held).
    ///
    /// Key repeats extend the same nudge interaction; the caller ends it
    /// with [`DesignerState::commit_interaction`] on key release so the whole
    /// burst becomes one history entry. Ignored while a drag or resize runs.
    pub fn nudge_selected(&mut self, direction: NudgeDirection, large: bool) -> bool {
        match &self.interaction {
            Some(Interaction {
                kind: InteractionKind::Nudge,
                ..
            }) => {}
            Some(_) => return false,
            None => {}
        }
        let step = if large {
            self.settings.nudge_large_step
        } else {
            self.settings.nudge_step
        };
        let patches: Vec<_> = self
            .selected_elements()
            .into_iter()
            .filter(|e| !e.is_locked())
            .map(|e| (e.id, ElementPatch::new().geometry(nudge(e.geometry, direction, step))))
            .collect();
        if patches.is_empty() {
            return false;
        }

        if self.interaction.is_none() {
            self.interaction = Some(Interaction {
                kind: InteractionKind::Nudge,
                before: self.template.clone(),
            });
        }
        let next: Template = self.template.update_elements(&patches);
        self.preview(next);
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::designer_state::DesignerState;
    use crate::geometry::{Alignment, Axis, CenterAxis, LockPolicy, NudgeDirection};
    use crate::model::ElementPatch;
    use crate::presets;

    #[test]
    fn test_align_needs_two() {
        let mut state = DesignerState::default();
        state.add_element(presets::line());
        let err = state
            .align_selected(Alignment::Left, LockPolicy::Include)
            .unwrap_err();
        assert!(err.is_validation());

        state.clear_selection();
        assert!(!state
            .align_selected(Alignment::Left, LockPolicy::Include)
            .unwrap());
    }

    #[test]
    fn test_align_exclude_locked() {
        let mut state = DesignerState::default();
        let a = state.add_element(presets::line().at(10, 0));
        let b = state.add_element(presets::line().at(50, 0));
        let c = state.add_element(presets::line().at(90, 0));
        state.update_element(a, &ElementPatch::new().locked(true));
        state.select([a, b, c]);

        state
            .align_selected(Alignment::Left, LockPolicy::Exclude)
            .unwrap();
        assert_eq!(state.element(a).unwrap().geometry.x, 10);
        assert_eq!(state.element(c).unwrap().geometry.x, 50);

        state
            .align_selected(Alignment::Left, LockPolicy::Include)
            .unwrap();
        assert_eq!(state.element(b).unwrap().geometry.x, 10);
    }

    #[test]
    fn test_distribute_needs_three() {
        let mut state = DesignerState::default();
        state.add_element(presets::line());
        state.add_element(presets::line());
        state.select_all();
        let before = state.template().clone();
        assert!(state.distribute_selected(Axis::Horizontal).is_err());
        assert_eq!(state.template(), &before);
    }

    #[test]
    fn test_center_skips_locked() {
        let mut state = DesignerState::default();
        let a = state.add_element(presets::photo());
        let b = state.add_element(presets::photo());
        state.update_element(b, &ElementPatch::new().locked(true));
        state.select_all();
        assert!(state.center_selected(CenterAxis::Both));
        let g = state.element(a).unwrap().geometry;
        assert_eq!((g.x, g.y), (492, 327));
        assert_eq!(state.element(b).unwrap().geometry.x, 100);
    }

    #[test]
    fn test_nudge_burst_is_one_history_entry() {
        let mut state = DesignerState::default();
        let id = state.add_element(presets::line().at(3, 3));
        let depth = state.undo_depth();

        for _ in 0..5 {
            state.nudge_selected(NudgeDirection::Left, false);
        }
        state.nudge_selected(NudgeDirection::Down, true);
        assert!(state.commit_interaction());
        assert_eq!(state.undo_depth(), depth + 1);

        let g = state.element(id).unwrap().geometry;
        assert_eq!((g.x, g.y), (0, 13));
    }
}
