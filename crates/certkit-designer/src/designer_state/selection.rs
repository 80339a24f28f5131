//! Selection operations for designer state.

use super::DesignerState;
use crate::model::ElementId;

impl DesignerState {
    /// Click on an element. `modifier` toggles instead of replacing.
    /// Ids not in the template are ignored.
    pub fn click_element(&mut self, id: ElementId, modifier: bool) {
        if self.template.contains(id) {
            self.selection.click(id, modifier);
        }
    }

    /// Click on empty canvas (or Escape).
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn select_all(&mut self) {
        self.selection.set(self.template.ids());
    }

    /// Replaces the selection, skipping ids not in the template.
    pub fn select(&mut self, ids: impl IntoIterator<Item = ElementId>) {
        let template = &self.template;
        self.selection
            .set(ids.into_iter().filter(|id| template.contains(*id)));
    }

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selection.contains(id)
    }

    pub fn selected_ids(&self) -> Vec<ElementId> {
        self.selection.ids().to_vec()
    }
}
