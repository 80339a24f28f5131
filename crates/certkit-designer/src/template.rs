//! Template state and its pure mutation functions.
//!
//! Every mutating operation takes `&self` and returns a new [`Template`];
//! existing elements are never modified in place. Paint order comes from
//! `z_index` with ties broken by insertion order, never from list position
//! alone.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::model::{Element, ElementDraft, ElementId, ElementPatch};

/// Named canvas size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CanvasPreset {
    #[default]
    A4Landscape,
    A4Portrait,
    LetterLandscape,
    LetterPortrait,
    BadgePortrait,
    BadgeLandscape,
    Square,
    IdCard,
}

impl CanvasPreset {
    pub const ALL: [CanvasPreset; 8] = [
        Self::A4Landscape,
        Self::A4Portrait,
        Self::LetterLandscape,
        Self::LetterPortrait,
        Self::BadgePortrait,
        Self::BadgeLandscape,
        Self::Square,
        Self::IdCard,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::A4Landscape => "a4-landscape",
            Self::A4Portrait => "a4-portrait",
            Self::LetterLandscape => "letter-landscape",
            Self::LetterPortrait => "letter-portrait",
            Self::BadgePortrait => "badge-portrait",
            Self::BadgeLandscape => "badge-landscape",
            Self::Square => "square",
            Self::IdCard => "id-card",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.key() == key)
    }

    /// Resolves a stored key, falling back to the default preset.
    pub fn from_key_or_default(key: &str) -> Self {
        Self::from_key(key).unwrap_or_else(|| {
            tracing::warn!("Unknown canvas preset '{}', using {}", key, Self::default().key());
            Self::default()
        })
    }

    /// Width and height in canvas pixels (96 dpi).
    pub fn dimensions(self) -> (i32, i32) {
        match self {
            Self::A4Landscape => (1123, 794),
            Self::A4Portrait => (794, 1123),
            Self::LetterLandscape => (1056, 816),
            Self::LetterPortrait => (816, 1056),
            Self::BadgePortrait => (638, 1013),
            Self::BadgeLandscape => (1013, 638),
            Self::Square => (1080, 1080),
            Self::IdCard => (324, 204),
        }
    }
}

impl From<String> for CanvasPreset {
    fn from(key: String) -> Self {
        Self::from_key_or_default(&key)
    }
}

impl From<CanvasPreset> for String {
    fn from(preset: CanvasPreset) -> Self {
        preset.key().to_string()
    }
}

impl std::fmt::Display for CanvasPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (w, h) = self.dimensions();
        write!(f, "{} ({}×{})", self.key(), w, h)
    }
}

/// Where [`Template::reorder`] moves its targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZOrder {
    Front,
    Back,
}

/// A certificate or badge layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Assigned by persistence on first save
    pub id: Option<String>,
    pub name: String,
    pub size: CanvasPreset,
    pub background_color: String,
    pub background_image: Option<String>,
    pub elements: Vec<Element>,
}

impl Default for Template {
    fn default() -> Self {
        Self::new("Untitled", CanvasPreset::default())
    }
}

impl Template {
    pub fn new(name: impl Into<String>, size: CanvasPreset) -> Self {
        Self {
            id: None,
            name: name.into(),
            size,
            background_color: "#ffffff".to_string(),
            background_image: None,
            elements: Vec::new(),
        }
    }

    pub fn canvas_size(&self) -> (i32, i32) {
        self.size.dimensions()
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.element(id).is_some()
    }

    pub fn ids(&self) -> Vec<ElementId> {
        self.elements.iter().map(|e| e.id).collect()
    }

    pub fn max_z(&self) -> Option<i32> {
        self.elements.iter().map(|e| e.z_index).max()
    }

    pub fn min_z(&self) -> Option<i32> {
        self.elements.iter().map(|e| e.z_index).min()
    }

    /// The z-index a newly added element receives.
    pub fn next_z(&self) -> i32 {
        self.max_z().map_or(1, |z| z.saturating_add(1))
    }

    /// Elements bottom to top.
    pub fn paint_order(&self) -> Vec<&Element> {
        let mut ordered: Vec<&Element> = self.elements.iter().collect();
        // sort_by_key is stable, so equal z keeps insertion order
        ordered.sort_by_key(|e| e.z_index);
        ordered
    }

    /// Adds an element built from `draft` with a fresh id.
    pub fn add_element(&self, draft: ElementDraft) -> (Template, ElementId) {
        let id = ElementId::new();
        let element = draft.into_element(id, self.next_z());
        let mut next = self.clone();
        next.elements.push(element);
        (next, id)
    }

    /// Appends already-built elements (paste, duplicate).
    pub fn insert_elements(&self, elements: Vec<Element>) -> Template {
        let mut next = self.clone();
        next.elements
            .extend(elements.into_iter().map(Element::normalized));
        next
    }

    /// Applies `patch` to one element. An absent id returns the template unchanged.
    pub fn update_element(&self, id: ElementId, patch: &ElementPatch) -> Template {
        self.update_elements(&[(id, patch.clone())])
    }

    /// Applies several patches at once; absent ids are skipped.
    pub fn update_elements(&self, patches: &[(ElementId, ElementPatch)]) -> Template {
        let mut next = self.clone();
        for element in next.elements.iter_mut() {
            if let Some((_, patch)) = patches.iter().find(|(id, _)| *id == element.id) {
                *element = patch.apply(element);
            }
        }
        next
    }

    pub fn remove_element(&self, id: ElementId) -> Template {
        self.remove_elements(&[id])
    }

    pub fn remove_elements(&self, ids: &[ElementId]) -> Template {
        let mut next = self.clone();
        next.elements.retain(|e| !ids.contains(&e.id));
        next
    }

    /// Moves every targeted element to `max + 1` (front) or `min - 1` (back).
    ///
    /// All targets receive the same z-index, so their relative order falls
    /// back to insertion order.
    pub fn reorder(&self, ids: &[ElementId], to: ZOrder) -> Template {
        if !ids.iter().any(|id| self.contains(*id)) {
            return self.clone();
        }
        let z_index = match to {
            ZOrder::Front => self.max_z().unwrap_or(0).saturating_add(1),
            ZOrder::Back => self.min_z().unwrap_or(0).saturating_sub(1),
        };
        let patches: Vec<_> = ids
            .iter()
            .map(|id| (*id, ElementPatch::new().z_index(z_index)))
            .collect();
        self.update_elements(&patches)
    }

    pub fn with_name(&self, name: impl Into<String>) -> Template {
        Template {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn with_id(&self, id: impl Into<String>) -> Template {
        Template {
            id: Some(id.into()),
            ..self.clone()
        }
    }

    pub fn with_size(&self, size: CanvasPreset) -> Template {
        Template {
            size,
            ..self.clone()
        }
    }

    pub fn with_background_color(&self, color: impl Into<String>) -> Template {
        Template {
            background_color: color.into(),
            ..self.clone()
        }
    }

    pub fn with_background_image(&self, url: Option<String>) -> Template {
        Template {
            background_image: url,
            ..self.clone()
        }
    }

    /// Enforces element invariants on a template from an untrusted source.
    ///
    /// Geometry, opacity and rotation are clamped; duplicate ids are replaced
    /// with fresh ones.
    pub fn normalized(mut self) -> Template {
        let mut seen = HashSet::new();
        for element in self.elements.iter_mut() {
            if !seen.insert(element.id) {
                let fresh = ElementId::new();
                tracing::warn!("Duplicate element id {}, reassigned to {}", element.id, fresh);
                element.id = fresh;
                seen.insert(fresh);
            }
            *element = element.clone().normalized();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ElementKind, LineStyle, TextStyle};

    fn text_draft() -> ElementDraft {
        ElementDraft::new(ElementKind::Text(TextStyle::default())).with_content("{{name}}")
    }

    #[test]
    fn test_preset_keys_round_trip() {
        for preset in CanvasPreset::ALL {
            assert_eq!(CanvasPreset::from_key(preset.key()), Some(preset));
        }
        assert_eq!(CanvasPreset::A4Landscape.dimensions(), (1123, 794));
        assert_eq!(
            CanvasPreset::from_key_or_default("poster"),
            CanvasPreset::A4Landscape
        );
    }

    #[test]
    fn test_preset_serializes_as_key() {
        let value = serde_json::to_value(CanvasPreset::IdCard).unwrap();
        assert_eq!(value, "id-card");
        let preset: CanvasPreset = serde_json::from_value("nope".into()).unwrap();
        assert_eq!(preset, CanvasPreset::default());
    }

    #[test]
    fn test_add_element_is_pure_and_stacks() {
        let empty = Template::default();
        let (one, first) = empty.add_element(text_draft());
        let (two, second) = one.add_element(text_draft());

        assert!(empty.elements.is_empty());
        assert_eq!(one.elements.len(), 1);
        assert_ne!(first, second);
        assert_eq!(two.element(first).unwrap().z_index, 1);
        assert_eq!(two.element(second).unwrap().z_index, 2);
    }

    #[test]
    fn test_explicit_z_index_is_kept() {
        let (template, id) = Template::default().add_element(text_draft().with_z_index(0));
        assert_eq!(template.element(id).unwrap().z_index, 0);
    }

    #[test]
    fn test_update_absent_id_is_noop() {
        let (template, _) = Template::default().add_element(text_draft());
        let patched = template.update_element(ElementId::new(), &ElementPatch::new().position(5, 5));
        assert_eq!(patched, template);
    }

    #[test]
    fn test_remove_element() {
        let (template, id) = Template::default().add_element(text_draft());
        let removed = template.remove_element(id);
        assert!(removed.elements.is_empty());
        assert!(template.contains(id));
    }

    #[test]
    fn test_reorder_front_and_back() {
        let (t, a) = Template::default().add_element(text_draft());
        let (t, b) = t.add_element(text_draft());
        let (t, c) = t.add_element(text_draft());

        let front = t.reorder(&[a, b], ZOrder::Front);
        assert_eq!(front.element(a).unwrap().z_index, 4);
        assert_eq!(front.element(b).unwrap().z_index, 4);
        let order: Vec<_> = front.paint_order().iter().map(|e| e.id).collect();
        assert_eq!(order, vec![c, a, b]);

        let back = t.reorder(&[c], ZOrder::Back);
        assert_eq!(back.element(c).unwrap().z_index, 0);
        assert_eq!(back.paint_order()[0].id, c);
    }

    #[test]
    fn test_paint_order_ties_use_insertion_order() {
        let (t, a) = Template::default().add_element(text_draft().with_z_index(3));
        let (t, b) = t.add_element(
            ElementDraft::new(ElementKind::Line(LineStyle::default())).with_z_index(3),
        );
        let order: Vec<_> = t.paint_order().iter().map(|e| e.id).collect();
        assert_eq!(order, vec![a, b]);
    }

    #[test]
    fn test_normalized_replaces_duplicate_ids() {
        let (t, a) = Template::default().add_element(text_draft());
        let mut dup = t.clone();
        let mut copy = dup.elements[0].clone();
        copy.geometry.x = -40;
        dup.elements.push(copy);

        let fixed = dup.normalized();
        assert_eq!(fixed.elements[0].id, a);
        assert_ne!(fixed.elements[1].id, a);
        assert_eq!(fixed.elements[1].geometry.x, 0);
    }
}
