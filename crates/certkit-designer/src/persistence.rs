//! Persistence boundary.
//!
//! [`TemplateDocument`] is the shape exchanged with a template store:
//! `{id, name, sizeKey, backgroundColor, backgroundImageUrl, elements[]}`.
//! Assignment metadata rides along opaquely and is never interpreted here.

use async_trait::async_trait;
use certkit_core::{Error, Result, ServiceError};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::model::Element;
use crate::template::{CanvasPreset, Template};

/// Stored file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Wire shape of a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDocument {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub size_key: String,
    #[serde(default = "default_background")]
    pub background_color: String,
    #[serde(default)]
    pub background_image_url: Option<String>,
    #[serde(default)]
    pub elements: Vec<Element>,
}

fn default_background() -> String {
    "#ffffff".to_string()
}

impl From<&Template> for TemplateDocument {
    fn from(template: &Template) -> Self {
        Self {
            id: template.id.clone(),
            name: template.name.clone(),
            size_key: template.size.key().to_string(),
            background_color: template.background_color.clone(),
            background_image_url: template.background_image.clone(),
            elements: template.elements.clone(),
        }
    }
}

impl TemplateDocument {
    /// Converts to a template, enforcing element invariants. Unknown size
    /// keys fall back to the default preset.
    pub fn into_template(self) -> Template {
        Template {
            id: self.id,
            name: self.name,
            size: CanvasPreset::from_key_or_default(&self.size_key),
            background_color: self.background_color,
            background_image: self.background_image_url,
            elements: self.elements,
        }
        .normalized()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_json()?)?;
        Ok(())
    }
}

/// Opaque assignment data (scoping rules, default flag, ...) passed through
/// to the store unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssignmentMetadata(pub serde_json::Value);

impl AssignmentMetadata {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// External template storage.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    async fn load(&self, id: &str) -> Result<TemplateDocument>;

    /// Persists the document and returns its id. A document without an id
    /// is stored as a new template.
    async fn save(&self, document: &TemplateDocument, assignment: &AssignmentMetadata)
        -> Result<String>;
}

fn persistence_error(reason: impl Into<String>) -> Error {
    ServiceError::Persistence {
        reason: reason.into(),
    }
    .into()
}

/// Store kept in memory, for tests and previews.
#[derive(Debug, Default)]
pub struct MemoryTemplateStore {
    documents: Mutex<HashMap<String, (TemplateDocument, AssignmentMetadata)>>,
    failure: Mutex<Option<String>>,
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following load and save fail with `reason`.
    pub fn fail_with(&self, reason: impl Into<String>) {
        *self.failure.lock() = Some(reason.into());
    }

    pub fn recover(&self) {
        *self.failure.lock() = None;
    }

    pub fn len(&self) -> usize {
        self.documents.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.lock().is_empty()
    }

    pub fn assignment(&self, id: &str) -> Option<AssignmentMetadata> {
        self.documents.lock().get(id).map(|(_, meta)| meta.clone())
    }

    fn check_failure(&self) -> Result<()> {
        match self.failure.lock().clone() {
            Some(reason) => Err(persistence_error(reason)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TemplateStore for MemoryTemplateStore {
    async fn load(&self, id: &str) -> Result<TemplateDocument> {
        self.check_failure()?;
        self.documents
            .lock()
            .get(id)
            .map(|(doc, _)| doc.clone())
            .ok_or_else(|| ServiceError::NotFound { id: id.to_string() }.into())
    }

    async fn save(
        &self,
        document: &TemplateDocument,
        assignment: &AssignmentMetadata,
    ) -> Result<String> {
        self.check_failure()?;
        let id = document
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let stored = TemplateDocument {
            id: Some(id.clone()),
            ..document.clone()
        };
        self.documents
            .lock()
            .insert(id.clone(), (stored, assignment.clone()));
        Ok(id)
    }
}

/// On-disk record written by [`FileTemplateStore`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredTemplate {
    version: String,
    saved_at: DateTime<Utc>,
    #[serde(default)]
    assignment: AssignmentMetadata,
    template: TemplateDocument,
}

/// Store writing one JSON file per template into a directory.
#[derive(Debug, Clone)]
pub struct FileTemplateStore {
    dir: PathBuf,
}

impl FileTemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> Result<PathBuf> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(persistence_error(format!("invalid template id '{id}'")));
        }
        Ok(self.dir.join(format!("{id}.json")))
    }
}

#[async_trait]
impl TemplateStore for FileTemplateStore {
    async fn load(&self, id: &str) -> Result<TemplateDocument> {
        let path = self.path_for(id)?;
        if !path.exists() {
            return Err(ServiceError::NotFound { id: id.to_string() }.into());
        }
        let content = std::fs::read_to_string(&path)?;
        let stored: StoredTemplate = serde_json::from_str(&content)?;
        tracing::info!("Loaded template {} from {}", id, path.display());
        Ok(stored.template)
    }

    async fn save(
        &self,
        document: &TemplateDocument,
        assignment: &AssignmentMetadata,
    ) -> Result<String> {
        let id = document
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let path = self.path_for(&id)?;
        let stored = StoredTemplate {
            version: FILE_FORMAT_VERSION.to_string(),
            saved_at: Utc::now(),
            assignment: assignment.clone(),
            template: TemplateDocument {
                id: Some(id.clone()),
                ..document.clone()
            },
        };
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(&path, serde_json::to_string_pretty(&stored)?)?;
        tracing::info!("Saved template {} to {}", id, path.display());
        Ok(id)
    }
}
