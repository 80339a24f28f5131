//! # CertKit
//!
//! A template design engine for certificates and event badges with support for:
//! - Text, placeholder fields, shapes, lines, QR codes, barcodes, images and photos
//! - Bounded undo/redo with two-phase drag, resize and nudge interactions
//! - Alignment, distribution, centering and snap guides
//! - `{{token}}` placeholder substitution against recipient records
//!
//! ## Architecture
//!
//! CertKit is organized as a workspace with multiple crates:
//!
//! 1. **certkit-core** - Error model, data records, upload and export boundaries
//! 2. **certkit-designer** - Template model, editing session, geometry, renderer adapter
//! 3. **certkit-settings** - Editor configuration persisted as JSON or TOML
//! 4. **certkit** - Facade and command line tool

pub use certkit_core::data;
pub use certkit_designer as designer;

pub use certkit_core::{
    AssetUploader, DataRecord, Error, ExportArtifact, ExportRequest, ExportService, OutputKind,
    PageDensity, RasterFormat, Result, ServiceError, UploadFile, ValidationError,
};

pub use certkit_designer::{
    render_template, substitute, Alignment, AssetTarget, Axis, CanvasPreset, DesignerState,
    EditorSettings, Element, ElementDraft, ElementId, ElementKind, ElementPatch, LockPolicy,
    RenderPlan, Template, TemplateDocument, TemplateStore, TextCase, Token,
};

pub use certkit_settings::{default_config_path, EditorConfig, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Session settings derived from the persisted editor configuration.
///
/// An unknown canvas preset key falls back to the default preset.
pub fn editor_settings(config: &EditorConfig) -> EditorSettings {
    EditorSettings {
        history_limit: config.history.limit,
        snap_enabled: config.snap.enabled,
        snap_threshold: config.snap.threshold_px,
        nudge_step: config.nudge.step,
        nudge_large_step: config.nudge.large_step,
        paste_offset: config.clipboard.paste_offset,
        default_preset: CanvasPreset::from_key_or_default(&config.canvas.default_preset),
        background_color: config.canvas.background_color.clone(),
    }
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, so command output stays pipeable
/// - RUST_LOG environment variable support
/// - Target, thread and line information
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
