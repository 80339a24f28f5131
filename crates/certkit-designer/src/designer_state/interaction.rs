//! Two-phase drag, resize and nudge interactions.
//!
//! `begin_*` captures the state before the gesture, any number of preview
//! calls update the template without touching history, and exactly one
//! [`DesignerState::commit_interaction`] or
//! [`DesignerState::cancel_interaction`] ends it. Only the commit may write
//! a history entry.

use super::DesignerState;
use crate::geometry::{snap_position, SnapGuide, SnapResult};
use crate::model::{Element, ElementId, ElementPatch, Geometry};
use crate::template::Template;

#[derive(Debug, Clone, PartialEq)]
pub enum InteractionKind {
    /// `anchor` is the element under the pointer; `moving` holds the start
    /// geometry of every element that follows it.
    Drag {
        anchor: ElementId,
        moving: Vec<(ElementId, Geometry)>,
    },
    Resize {
        id: ElementId,
        origin: Geometry,
    },
    Nudge,
}

#[derive(Debug, Clone)]
pub(crate) struct Interaction {
    pub(crate) kind: InteractionKind,
    /// State before the gesture started
    pub(crate) before: Template,
}

impl DesignerState {
    pub fn is_interacting(&self) -> bool {
        self.interaction.is_some()
    }

    pub fn interaction_kind(&self) -> Option<&InteractionKind> {
        self.interaction.as_ref().map(|i| &i.kind)
    }

    /// Snap guides of the current drag preview.
    pub fn guides(&self) -> &[SnapGuide] {
        &self.guides
    }

    /// Starts dragging `id`. The element joins the selection if it is not
    /// already part of it; every selected unlocked element moves with it.
    ///
    /// Returns `false` for a locked or unknown element, or while another
    /// interaction is running.
    pub fn begin_drag(&mut self, id: ElementId) -> bool {
        if self.interaction.is_some() {
            return false;
        }
        match self.template.element(id) {
            Some(element) if !element.is_locked() => {}
            _ => return false,
        }
        if !self.selection.contains(id) {
            self.selection.select_only(id);
        }

        let moving = self
            .selection
            .ids()
            .iter()
            .filter_map(|sid| self.template.element(*sid))
            .filter(|e| !e.is_locked())
            .map(|e| (e.id, e.geometry))
            .collect();
        self.interaction = Some(Interaction {
            kind: InteractionKind::Drag { anchor: id, moving },
            before: self.template.clone(),
        });
        true
    }

    /// Drag preview: places the anchor's top-left at `(x, y)`, snapped to
    /// canvas and element guides. Other dragged elements follow by the same
    /// delta. Returns `None` when no drag is running.
    pub fn drag_to(&mut self, x: i32, y: i32) -> Option<SnapResult> {
        let Some(Interaction {
            kind: InteractionKind::Drag { anchor, moving },
            before,
        }) = &self.interaction
        else {
            return None;
        };
        let origin = moving.iter().find(|(id, _)| id == anchor)?.1;

        let candidate = Geometry { x, y, ..origin };
        let moving_ids: Vec<ElementId> = moving.iter().map(|(id, _)| *id).collect();
        let references: Vec<&Element> = before
            .elements
            .iter()
            .filter(|e| e.is_visible() && !moving_ids.contains(&e.id))
            .collect();
        let snapped = snap_position(
            candidate,
            before.canvas_size(),
            &references,
            &self.snap_options(),
        );

        let (dx, dy) = (
            snapped.x.saturating_sub(origin.x),
            snapped.y.saturating_sub(origin.y),
        );
        let patches: Vec<_> = moving
            .iter()
            .map(|(id, start)| {
                let position = ElementPatch::new()
                    .position(start.x.saturating_add(dx), start.y.saturating_add(dy));
                (*id, position)
            })
            .collect();
        let next = self.template.update_elements(&patches);

        self.preview(next);
        self.guides = snapped.guides.clone();
        Some(snapped)
    }

    /// Starts resizing `id`. Same rules as [`DesignerState::begin_drag`].
    pub fn begin_resize(&mut self, id: ElementId) -> bool {
        if self.interaction.is_some() {
            return false;
        }
        let origin = match self.template.element(id) {
            Some(element) if !element.is_locked() => element.geometry,
            _ => return false,
        };
        self.interaction = Some(Interaction {
            kind: InteractionKind::Resize { id, origin },
            before: self.template.clone(),
        });
        true
    }

    /// Resize preview. Sizes below one pixel are clamped.
    pub fn resize_to(&mut self, width: i32, height: i32) -> bool {
        let Some(Interaction {
            kind: InteractionKind::Resize { id, .. },
            ..
        }) = &self.interaction
        else {
            return false;
        };
        let next = self
            .template
            .update_element(*id, &ElementPatch::new().size(width, height));
        self.preview(next);
        true
    }

    /// Ends the running interaction, recording one history entry if the
    /// template changed. Returns whether an entry was recorded.
    pub fn commit_interaction(&mut self) -> bool {
        let Some(interaction) = self.interaction.take() else {
            return false;
        };
        self.guides.clear();
        if self.template == interaction.before {
            return false;
        }
        self.history.record(self.template.clone());
        self.sync_selection();
        tracing::debug!("{} interaction committed", interaction_label(&interaction.kind));
        true
    }

    /// Abandons the running interaction and restores the state it started from.
    pub fn cancel_interaction(&mut self) {
        if let Some(interaction) = self.interaction.take() {
            self.template = interaction.before;
            self.guides.clear();
            self.sync_selection();
        }
    }

    /// Applies `f` to the template, to the history snapshot at the cursor
    /// and, during an interaction, to the state the interaction would
    /// restore on cancel.
    pub(crate) fn patch_outside_history(&mut self, f: impl Fn(&Template) -> Template) {
        self.template = f(&self.template);
        self.history.update_current(|snapshot| *snapshot = f(snapshot));
        if let Some(interaction) = self.interaction.as_mut() {
            interaction.before = f(&interaction.before);
        }
    }
}

fn interaction_label(kind: &InteractionKind) -> &'static str {
    match kind {
        InteractionKind::Drag { .. } => "Drag",
        InteractionKind::Resize { .. } => "Resize",
        InteractionKind::Nudge => "Nudge",
    }
}
