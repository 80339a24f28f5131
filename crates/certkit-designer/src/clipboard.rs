//! Copy/paste buffer and the clone rule shared by paste and duplicate.

use crate::model::{Element, ElementId};
use crate::template::Template;

/// Offset applied to pasted and duplicated elements.
pub const DEFAULT_PASTE_OFFSET: (i32, i32) = (20, 20);

/// Independent snapshots of copied elements.
///
/// Snapshots are not tied to the template: deleting or editing the source
/// after a copy does not change what is pasted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Clipboard {
    items: Vec<Element>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents with copies of `elements`.
    pub fn copy<'a>(&mut self, elements: impl IntoIterator<Item = &'a Element>) {
        self.items = elements.into_iter().cloned().collect();
    }

    pub fn items(&self) -> &[Element] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Adds a clone of every clipboard item to `template`.
    ///
    /// Returns the new template and the ids of the pasted elements. An empty
    /// clipboard returns the template unchanged and no ids.
    pub fn paste_into(&self, template: &Template, offset: (i32, i32)) -> (Template, Vec<ElementId>) {
        clone_into(template, &self.items, offset)
    }
}

/// Clones `sources` into `template` with fresh ids, shifted by `offset` and
/// stacked above the current maximum z-index.
///
/// Sources keep their relative paint order: they are placed at `max + 1`,
/// `max + 2`, ... in their own z order.
pub fn clone_into(
    template: &Template,
    sources: &[Element],
    offset: (i32, i32),
) -> (Template, Vec<ElementId>) {
    if sources.is_empty() {
        return (template.clone(), Vec::new());
    }

    let mut ordered: Vec<&Element> = sources.iter().collect();
    ordered.sort_by_key(|e| e.z_index);

    let base = template.next_z();
    let clones: Vec<Element> = ordered
        .iter()
        .enumerate()
        .map(|(i, source)| source.cloned_as_new(offset.0, offset.1, base.saturating_add(i as i32)))
        .collect();
    let ids = clones.iter().map(|e| e.id).collect();

    (template.insert_elements(clones), ids)
}
