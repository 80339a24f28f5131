//! Designer session state.
//! Owns the current template and everything that edits it.
//!
//! This module is split into submodules for better organization:
//! - `history`: Undo/redo functionality
//! - `selection`: Element selection operations
//! - `elements`: Element creation, patching, deletion, clipboard, z-order
//! - `transforms`: Align, distribute, center, nudge
//! - `interaction`: Two-phase drag/resize with snap guides
//! - `pending`: Asynchronous upload tickets
//! - `file_io`: Save/open/export and dirty tracking

mod elements;
mod file_io;
mod history;
mod interaction;
mod pending;
mod selection;
mod transforms;

pub use interaction::InteractionKind;
pub use pending::{AssetTarget, OperationTicket};

use crate::clipboard::{Clipboard, DEFAULT_PASTE_OFFSET};
use crate::geometry::{SnapGuide, SnapOptions};
use crate::history::{UndoRedoManager, DEFAULT_HISTORY_LIMIT};
use crate::model::{Element, ElementId};
use crate::selection_manager::SelectionManager;
use crate::template::{CanvasPreset, Template};

use interaction::Interaction;
use pending::PendingOperations;

/// Editor behaviour settings for a session.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSettings {
    pub history_limit: usize,
    pub snap_enabled: bool,
    /// Screen pixels at 100% zoom
    pub snap_threshold: f64,
    pub nudge_step: i32,
    pub nudge_large_step: i32,
    pub paste_offset: (i32, i32),
    pub default_preset: CanvasPreset,
    pub background_color: String,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            snap_enabled: true,
            snap_threshold: 5.0,
            nudge_step: 1,
            nudge_large_step: 10,
            paste_offset: DEFAULT_PASTE_OFFSET,
            default_preset: CanvasPreset::default(),
            background_color: "#ffffff".to_string(),
        }
    }
}

/// One editing session over one template.
///
/// Every operation is synchronous and leaves the session consistent; there
/// is no global state, so independent sessions never interfere.
#[derive(Debug, Clone)]
pub struct DesignerState {
    template: Template,
    history: UndoRedoManager<Template>,
    selection: SelectionManager,
    clipboard: Clipboard,
    settings: EditorSettings,
    interaction: Option<Interaction>,
    guides: Vec<SnapGuide>,
    pending: PendingOperations,
    /// Last state known to match the store
    saved: Template,
    zoom: f64,
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

impl DesignerState {
    /// Creates a session with an empty template from the settings' defaults.
    pub fn new(settings: EditorSettings) -> Self {
        let template = Template::new("Untitled", settings.default_preset)
            .with_background_color(settings.background_color.clone());
        Self::with_template(template, settings)
    }

    /// Creates a session editing `template`. The template is the start of
    /// history and counts as unmodified.
    pub fn with_template(template: Template, settings: EditorSettings) -> Self {
        let template = template.normalized();
        Self {
            history: UndoRedoManager::new(template.clone(), settings.history_limit),
            saved: template.clone(),
            template,
            selection: SelectionManager::new(),
            clipboard: Clipboard::new(),
            settings,
            interaction: None,
            guides: Vec::new(),
            pending: PendingOperations::default(),
            zoom: 1.0,
        }
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: EditorSettings) {
        self.settings = settings;
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.template.element(id)
    }

    /// Selected elements in selection order.
    pub fn selected_elements(&self) -> Vec<&Element> {
        self.selection
            .ids()
            .iter()
            .filter_map(|id| self.template.element(*id))
            .collect()
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the canvas zoom used to scale the snap threshold.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() && zoom > 0.0 {
            self.zoom = zoom;
        }
    }

    pub(crate) fn snap_options(&self) -> SnapOptions {
        SnapOptions {
            enabled: self.settings.snap_enabled,
            threshold: self.settings.snap_threshold,
            zoom: self.zoom,
        }
    }

    /// Replaces the current template with `next` as one committed change.
    ///
    /// Returns `false` without recording anything when neither `next` nor a
    /// running gesture changed the state. A running drag, resize or nudge is
    /// folded into this commit, even when `next` itself changes nothing.
    pub(crate) fn commit(&mut self, next: Template, label: &str) -> bool {
        let gesture_moved = self
            .interaction
            .take()
            .is_some_and(|interaction| interaction.before != self.template);
        self.guides.clear();
        if next == self.template && !gesture_moved {
            return false;
        }
        self.template = next;
        self.history.record(self.template.clone());
        self.sync_selection();
        tracing::debug!("{} committed ({} elements)", label, self.template.elements.len());
        true
    }

    /// Replaces the current template without touching history. Used for
    /// interaction previews.
    pub(crate) fn preview(&mut self, next: Template) {
        self.template = next;
    }

    /// Drops selection entries and pending uploads whose elements are gone.
    pub(crate) fn sync_selection(&mut self) {
        let template = &self.template;
        self.selection.retain_existing(|id| template.contains(id));
        self.pending.discard_missing(template);
    }
}
