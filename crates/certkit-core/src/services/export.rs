//! Export requests handed to the external rasterisation/PDF service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// How many certificates are laid out on a single page of a multi-page
/// document export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PageDensity {
    #[default]
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "8")]
    Eight,
}

impl PageDensity {
    /// Number of records placed on each page.
    pub fn per_page(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Four => 4,
            Self::Six => 6,
            Self::Eight => 8,
        }
    }

    /// Parses a per-page count; only the supported densities are accepted.
    pub fn from_per_page(count: usize) -> Option<Self> {
        match count {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            4 => Some(Self::Four),
            6 => Some(Self::Six),
            8 => Some(Self::Eight),
            _ => None,
        }
    }

    /// Number of pages needed for `records` records at this density.
    pub fn page_count(self, records: usize) -> usize {
        records.div_ceil(self.per_page())
    }
}

/// Image format for one-file-per-record exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RasterFormat {
    Png,
    Jpeg,
}

impl RasterFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }
}

impl std::fmt::Display for RasterFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Png => write!(f, "PNG"),
            Self::Jpeg => write!(f, "JPEG"),
        }
    }
}

/// What the export service should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutputKind {
    /// A single multi-page document.
    Document {
        #[serde(default)]
        density: PageDensity,
    },
    /// One raster image per record, bundled by the service.
    RasterBatch { format: RasterFormat },
}

impl OutputKind {
    pub fn document(density: PageDensity) -> Self {
        Self::Document { density }
    }

    pub fn raster(format: RasterFormat) -> Self {
        Self::RasterBatch { format }
    }
}

/// Request sent to the export service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub template_id: String,
    pub record_ids: Vec<String>,
    pub output: OutputKind,
}

impl ExportRequest {
    /// Builds a request, rejecting it before anything is sent if it could
    /// never succeed.
    pub fn new(
        template_id: Option<&str>,
        record_ids: Vec<String>,
        output: OutputKind,
    ) -> Result<Self> {
        let template_id = template_id
            .filter(|id| !id.is_empty())
            .ok_or(ValidationError::UnsavedTemplate)?;
        if record_ids.is_empty() {
            return Err(ValidationError::EmptyRecordList.into());
        }
        Ok(Self {
            template_id: template_id.to_string(),
            record_ids,
            output,
        })
    }

    /// Filename used when the service does not suggest one.
    pub fn default_filename(&self, template_name: &str) -> String {
        let slug = slugify(template_name);
        match self.output {
            OutputKind::Document { .. } => format!("{slug}.pdf"),
            OutputKind::RasterBatch { format } if self.record_ids.len() == 1 => {
                format!("{slug}.{}", format.extension())
            }
            OutputKind::RasterBatch { .. } => format!("{slug}-images.zip"),
        }
    }
}

/// Binary payload produced by the export service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub bytes: Vec<u8>,
    pub filename: String,
}

/// Raw response of the export service before a filename is settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub bytes: Vec<u8>,
    pub suggested_filename: Option<String>,
}

impl ExportPayload {
    /// Settles the filename: the service's suggestion if it made one,
    /// otherwise [`ExportRequest::default_filename`].
    pub fn into_artifact(self, request: &ExportRequest, template_name: &str) -> ExportArtifact {
        let filename = self
            .suggested_filename
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| request.default_filename(template_name));
        ExportArtifact {
            bytes: self.bytes,
            filename,
        }
    }
}

/// External rasterisation / PDF service.
#[async_trait]
pub trait ExportService: Send + Sync {
    /// Renders the requested records; timeouts belong to the implementation.
    async fn export(&self, request: &ExportRequest) -> Result<ExportPayload>;
}

/// Sends a request and resolves the final filename.
pub async fn run_export(
    service: &dyn ExportService,
    request: &ExportRequest,
    template_name: &str,
) -> Result<ExportArtifact> {
    tracing::info!(
        "Exporting template {} for {} record(s)",
        request.template_id,
        request.record_ids.len()
    );
    let payload = service.export(request).await?;
    Ok(payload.into_artifact(request, template_name))
}

fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        "certificates".to_string()
    } else {
        slug
    }
}
