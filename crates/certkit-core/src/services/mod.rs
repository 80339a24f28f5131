//! Collaborator boundaries
//!
//! The engine never performs network I/O itself. Uploads and exports are
//! delegated to implementations of the traits below; the in-memory
//! implementations in [`memory`] back tests and offline tooling.

pub mod export;
pub mod memory;
pub mod upload;

pub use export::{
    run_export, ExportArtifact, ExportPayload, ExportRequest, ExportService, OutputKind,
    PageDensity, RasterFormat,
};
pub use upload::{AssetUploader, UploadFile};
