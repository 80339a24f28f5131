//! Element operations (add, update, delete, clipboard, z-order) for designer state.

use super::DesignerState;
use crate::clipboard::clone_into;
use crate::model::{Element, ElementDraft, ElementId, ElementPatch};
use crate::template::{CanvasPreset, ZOrder};

impl DesignerState {
    /// Adds an element and selects it.
    pub fn add_element(&mut self, draft: ElementDraft) -> ElementId {
        let (next, id) = self.template.add_element(draft);
        self.commit(next, "Add Element");
        self.selection.select_only(id);
        id
    }

    /// Patches one element. Returns `false` if the id is stale or nothing changed.
    pub fn update_element(&mut self, id: ElementId, patch: &ElementPatch) -> bool {
        let next = self.template.update_element(id, patch);
        self.commit(next, "Update Element")
    }

    /// Applies the same patch to every selected element.
    pub fn update_selected(&mut self, patch: &ElementPatch) -> bool {
        let patches: Vec<_> = self
            .selection
            .ids()
            .iter()
            .map(|id| (*id, patch.clone()))
            .collect();
        if patches.is_empty() {
            return false;
        }
        let next = self.template.update_elements(&patches);
        self.commit(next, "Update Selection")
    }

    /// Deletes the selected element(s).
    pub fn delete_selected(&mut self) -> bool {
        let ids = self.selection.ids().to_vec();
        if ids.is_empty() {
            return false;
        }
        let next = self.template.remove_elements(&ids);
        let removed = self.commit(next, "Delete Elements");
        self.sync_selection();
        removed
    }

    /// Deletes one element by id.
    pub fn delete_element(&mut self, id: ElementId) -> bool {
        let next = self.template.remove_element(id);
        self.commit(next, "Delete Element")
    }

    /// Copies selected elements to the clipboard.
    pub fn copy_selected(&mut self) -> usize {
        if self.selection.is_empty() {
            return 0;
        }
        let template = &self.template;
        let selected: Vec<&Element> = self
            .selection
            .ids()
            .iter()
            .filter_map(|id| template.element(*id))
            .collect();
        self.clipboard.copy(selected);
        self.clipboard.len()
    }

    /// Copies then deletes the selection.
    pub fn cut_selected(&mut self) -> usize {
        let copied = self.copy_selected();
        if copied > 0 {
            self.delete_selected();
        }
        copied
    }

    /// Pastes the clipboard, offset from the originals, and selects the result.
    pub fn paste(&mut self) -> Vec<ElementId> {
        if self.clipboard.is_empty() {
            return Vec::new();
        }
        let (next, ids) = self
            .clipboard
            .paste_into(&self.template, self.settings.paste_offset);
        self.commit(next, "Paste");
        self.selection.set(ids.iter().copied());
        ids
    }

    /// Clones the selection in place without touching the clipboard.
    pub fn duplicate_selected(&mut self) -> Vec<ElementId> {
        let sources: Vec<Element> = self.selected_elements().into_iter().cloned().collect();
        if sources.is_empty() {
            return Vec::new();
        }
        let (next, ids) = clone_into(&self.template, &sources, self.settings.paste_offset);
        self.commit(next, "Duplicate");
        self.selection.set(ids.iter().copied());
        ids
    }

    pub fn bring_to_front(&mut self) -> bool {
        self.reorder_selected(ZOrder::Front)
    }

    pub fn send_to_back(&mut self) -> bool {
        self.reorder_selected(ZOrder::Back)
    }

    fn reorder_selected(&mut self, to: ZOrder) -> bool {
        let ids = self.selection.ids().to_vec();
        if ids.is_empty() {
            return false;
        }
        let next = self.template.reorder(&ids, to);
        self.commit(next, "Reorder")
    }

    pub fn set_template_name(&mut self, name: impl Into<String>) -> bool {
        let next = self.template.with_name(name);
        self.commit(next, "Rename Template")
    }

    pub fn set_background_color(&mut self, color: impl Into<String>) -> bool {
        let next = self.template.with_background_color(color);
        self.commit(next, "Background Color")
    }

    /// Clears the background image. Setting one goes through an upload.
    pub fn clear_background_image(&mut self) -> bool {
        let next = self.template.with_background_image(None);
        self.commit(next, "Background Image")
    }

    pub fn set_canvas_size(&mut self, size: CanvasPreset) -> bool {
        let next = self.template.with_size(size);
        self.commit(next, "Canvas Size")
    }
}
