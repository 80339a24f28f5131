use crate::model::ElementId;

/// Tracks which elements are selected.
///
/// `SelectionManager` keeps the selected ids in the order they were
/// selected, without duplicates. It knows nothing about the template; the
/// session calls [`SelectionManager::retain_existing`] after any change that
/// can remove elements.
///
/// # Selection Model
///
/// - **Plain click**: replaces the selection with one element
/// - **Modified click**: toggles membership (Shift/Ctrl)
/// - **Select all / clear**: replaces the whole set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionManager {
    selected: Vec<ElementId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use certkit_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert!(manager.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[ElementId] {
        &self.selected
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The single selected element, if exactly one is selected.
    pub fn single(&self) -> Option<ElementId> {
        match self.selected.as_slice() {
            [id] => Some(*id),
            _ => None,
        }
    }

    pub fn select_only(&mut self, id: ElementId) {
        self.selected.clear();
        self.selected.push(id);
    }

    /// Adds `id` if absent, removes it if present.
    pub fn toggle(&mut self, id: ElementId) {
        if let Some(pos) = self.selected.iter().position(|s| *s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id);
        }
    }

    /// Click on an element; `modifier` is Shift/Ctrl held.
    pub fn click(&mut self, id: ElementId, modifier: bool) {
        if modifier {
            self.toggle(id);
        } else {
            self.select_only(id);
        }
    }

    /// Replaces the selection, dropping duplicates.
    pub fn set(&mut self, ids: impl IntoIterator<Item = ElementId>) {
        self.selected.clear();
        for id in ids {
            if !self.selected.contains(&id) {
                self.selected.push(id);
            }
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Drops ids for which `exists` returns false.
    pub fn retain_existing(&mut self, exists: impl Fn(ElementId) -> bool) {
        self.selected.retain(|id| exists(*id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_replaces_and_modifier_toggles() {
        let (a, b) = (ElementId::new(), ElementId::new());
        let mut selection = SelectionManager::new();

        selection.click(a, false);
        selection.click(b, true);
        assert_eq!(selection.ids(), &[a, b]);

        selection.click(a, true);
        assert_eq!(selection.ids(), &[b]);
        assert_eq!(selection.single(), Some(b));

        selection.click(a, false);
        assert_eq!(selection.ids(), &[a]);
    }

    #[test]
    fn test_set_dedupes() {
        let a = ElementId::new();
        let mut selection = SelectionManager::new();
        selection.set([a, a]);
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_retain_existing() {
        let (a, b) = (ElementId::new(), ElementId::new());
        let mut selection = SelectionManager::new();
        selection.set([a, b]);
        selection.retain_existing(|id| id == b);
        assert_eq!(selection.ids(), &[b]);
    }
}
