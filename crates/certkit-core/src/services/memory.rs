//! In-memory collaborators.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use uuid::Uuid;

use super::export::{ExportPayload, ExportRequest, ExportService};
use super::upload::{AssetUploader, UploadFile};
use crate::error::{Result, ServiceError};

/// Uploader that keeps files in memory and hands out `memory://` URLs.
#[derive(Debug, Default)]
pub struct MemoryUploader {
    files: Mutex<HashMap<String, UploadFile>>,
    failure: Mutex<Option<String>>,
}

impl MemoryUploader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following upload fail with `reason`.
    pub fn fail_with(&self, reason: impl Into<String>) {
        *self.failure.lock() = Some(reason.into());
    }

    pub fn recover(&self) {
        *self.failure.lock() = None;
    }

    pub fn stored_count(&self) -> usize {
        self.files.lock().len()
    }

    pub fn get(&self, url: &str) -> Option<UploadFile> {
        self.files.lock().get(url).cloned()
    }
}

#[async_trait]
impl AssetUploader for MemoryUploader {
    async fn upload(&self, file: &UploadFile) -> Result<String> {
        if let Some(reason) = self.failure.lock().clone() {
            return Err(ServiceError::Upload {
                file_name: file.name.clone(),
                reason,
            }
            .into());
        }
        let url = format!("memory://assets/{}/{}", Uuid::new_v4().simple(), file.name);
        self.files.lock().insert(url.clone(), file.clone());
        Ok(url)
    }
}

/// Exporter that records requests and echoes them back as JSON bytes.
#[derive(Debug, Default)]
pub struct MemoryExporter {
    requests: Mutex<Vec<ExportRequest>>,
    suggested_filename: Mutex<Option<String>>,
    failure: Mutex<Option<String>>,
}

impl MemoryExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn suggest_filename(&self, name: impl Into<String>) {
        *self.suggested_filename.lock() = Some(name.into());
    }

    pub fn fail_with(&self, reason: impl Into<String>) {
        *self.failure.lock() = Some(reason.into());
    }

    pub fn requests(&self) -> Vec<ExportRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl ExportService for MemoryExporter {
    async fn export(&self, request: &ExportRequest) -> Result<ExportPayload> {
        if let Some(reason) = self.failure.lock().clone() {
            return Err(ServiceError::Export { reason }.into());
        }
        self.requests.lock().push(request.clone());
        Ok(ExportPayload {
            bytes: serde_json::to_vec(request)?,
            suggested_filename: self.suggested_filename.lock().clone(),
        })
    }
}
