//! Asset upload boundary.

use async_trait::async_trait;

use crate::error::Result;

/// A file chosen by the user, ready to be uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Whether the file looks like an image the renderer can place.
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

/// External file storage. The engine only keeps the returned URL.
#[async_trait]
pub trait AssetUploader: Send + Sync {
    async fn upload(&self, file: &UploadFile) -> Result<String>;
}
