//! # CertKit Core
//!
//! Core types, traits, and utilities for CertKit.
//! Provides the error model shared by every crate, the recipient data
//! record used for placeholder substitution, and the boundaries to the
//! external upload and export services.

pub mod data;
pub mod error;
pub mod services;

pub use data::DataRecord;

pub use error::{Error, Result, ServiceError, ValidationError};

pub use services::{
    run_export, AssetUploader, ExportArtifact, ExportPayload, ExportRequest, ExportService,
    OutputKind, PageDensity, RasterFormat, UploadFile,
};
