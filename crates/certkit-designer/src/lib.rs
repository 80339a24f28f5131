//! # CertKit Designer
//!
//! This crate provides the template design engine behind certificates and
//! event badges. It combines the element model, editing history, geometry
//! tools and placeholder substitution into one editing session.
//!
//! ## Core Components
//!
//! ### Template Model
//! - **Elements**: Text, placeholder fields, shapes, lines, QR codes, barcodes, images and photos
//! - **Templates**: Canvas preset, background and an ordered element list
//! - **Presets**: Default drafts for every element kind
//!
//! ### Editing
//! - **History/Undo-Redo**: Bounded snapshot history
//! - **Selection and Clipboard**: Multi-select, copy, cut, paste and duplicate
//! - **Geometry**: Align, distribute, center, nudge and snap guides
//! - **Interactions**: Two-phase drag and resize with a single history entry
//!
//! ### Output
//! - **Placeholders**: `{{token}}` substitution with sample fallbacks
//! - **Renderer**: Backend-neutral draw plan with encoded QR and barcode data
//! - **Persistence**: Template documents and the store boundary
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (one session)
//!   ├── Template (pure, immutable updates)
//!   ├── UndoRedoManager<Template>
//!   ├── SelectionManager / Clipboard
//!   └── Pending uploads, saves and exports
//!
//! Renderer (Template + DataRecord -> RenderPlan)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use certkit_designer::{presets, DesignerState, Token};
//!
//! let mut state = DesignerState::default();
//! let name = state.add_element(presets::field(Token::Name));
//! state.undo();
//! ```

pub mod clipboard;
pub mod designer_state;
pub mod geometry;
pub mod history;
pub mod model;
pub mod persistence;
pub mod placeholders;
pub mod presets;
pub mod renderer;
pub mod selection_manager;
pub mod template;

// Re-export all public types from submodules
pub use clipboard::Clipboard;
pub use geometry::{
    Alignment, Axis, CenterAxis, GuideOrientation, GuideSource, LockPolicy, NudgeDirection,
    SnapGuide, SnapOptions, SnapResult,
};
pub use history::UndoRedoManager;
pub use model::{
    Element, ElementDraft, ElementId, ElementKind, ElementPatch, ElementType, Geometry,
};
pub use persistence::{
    AssignmentMetadata, FileTemplateStore, MemoryTemplateStore, TemplateDocument, TemplateStore,
};
pub use placeholders::{format_date_range, substitute, TextCase, Token};
pub use renderer::{render_template, Drawable, RenderItem, RenderPlan};
pub use selection_manager::SelectionManager;
pub use template::{CanvasPreset, Template, ZOrder};

// State
pub use designer_state::{
    AssetTarget, DesignerState, EditorSettings, InteractionKind, OperationTicket,
};
