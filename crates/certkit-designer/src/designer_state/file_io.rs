//! File I/O operations (save, open, new, export) for designer state.

use certkit_core::{
    run_export, ExportArtifact, ExportPayload, ExportRequest, ExportService, OutputKind, Result,
    ValidationError,
};

use super::pending::{OperationTicket, PendingKind};
use super::DesignerState;
use crate::persistence::{AssignmentMetadata, TemplateDocument, TemplateStore};
use crate::template::{CanvasPreset, Template};

impl DesignerState {
    /// Whether the template differs from the last saved or opened state.
    pub fn is_modified(&self) -> bool {
        self.template != self.saved
    }

    /// Template name for a title bar, with `*` when modified.
    pub fn display_name(&self) -> String {
        let name = if self.template.name.trim().is_empty() {
            "Untitled"
        } else {
            self.template.name.as_str()
        };
        if self.is_modified() {
            format!("{name}*")
        } else {
            name.to_string()
        }
    }

    /// Starts a new, empty template. History, selection and pending
    /// requests are reset; the clipboard survives.
    pub fn new_template(&mut self, name: impl Into<String>, size: CanvasPreset) {
        let template = Template::new(name, size)
            .with_background_color(self.settings.background_color.clone());
        self.replace_document(template);
    }

    /// Opens `template` as a fresh, unmodified document.
    pub fn open_template(&mut self, template: Template) {
        self.replace_document(template.normalized());
    }

    fn replace_document(&mut self, template: Template) {
        self.interaction = None;
        self.guides.clear();
        self.pending.clear();
        self.selection.clear();
        self.history.reset(template.clone());
        self.saved = template.clone();
        self.template = template;
    }

    /// Validates the template and snapshots it for the store.
    pub fn prepare_save(&mut self) -> Result<(OperationTicket, TemplateDocument)> {
        if self.template.name.trim().is_empty() {
            tracing::warn!("Save rejected: empty template name");
            return Err(ValidationError::EmptyName.into());
        }
        let document = TemplateDocument::from(&self.template);
        let ticket = self.pending.register(PendingKind::Save(self.template.clone()));
        Ok((ticket, document))
    }

    /// Applies a save outcome.
    ///
    /// On success the returned id is written to the current template and to
    /// every history snapshot, so undo never strips it. Only the id field is
    /// touched; edits made while the save was in flight stay unsaved.
    pub fn complete_save(&mut self, ticket: OperationTicket, outcome: Result<String>) -> Result<bool> {
        let Some(PendingKind::Save(sent)) = self.pending.take(ticket) else {
            tracing::debug!("Save {} completed after cancellation, ignored", ticket);
            return Ok(false);
        };
        let id = match outcome {
            Ok(id) => id,
            Err(err) => {
                tracing::warn!("Save {} failed: {}", ticket, err);
                return Err(err);
            }
        };

        let assign = |template: &Template| template.with_id(id.clone());
        self.patch_outside_history(assign);
        self.history.update_all(|snapshot| snapshot.id = Some(id.clone()));
        self.saved = assign(&sent);
        tracing::info!("Template '{}' saved as {}", self.template.name, id);
        Ok(true)
    }

    /// Saves through `store`, passing `assignment` through unchanged.
    pub async fn save(
        &mut self,
        store: &dyn TemplateStore,
        assignment: &AssignmentMetadata,
    ) -> Result<String> {
        let (ticket, document) = self.prepare_save()?;
        let outcome = store.save(&document, assignment).await;
        let id = outcome.as_ref().ok().cloned();
        self.complete_save(ticket, outcome)?;
        id.ok_or_else(|| certkit_core::Error::other("save completed without an id"))
    }

    /// Loads template `id` from `store`. On failure the session is unchanged.
    pub async fn open(&mut self, store: &dyn TemplateStore, id: &str) -> Result<()> {
        let document = store.load(id).await?;
        let template = document.into_template();
        tracing::info!("Opened template '{}' ({} elements)", template.name, template.elements.len());
        self.open_template(template);
        Ok(())
    }

    /// Builds an export request for the current template.
    pub fn prepare_export(
        &mut self,
        record_ids: Vec<String>,
        output: OutputKind,
    ) -> Result<(OperationTicket, ExportRequest)> {
        let request = ExportRequest::new(self.template.id.as_deref(), record_ids, output)?;
        let ticket = self.pending.register(PendingKind::Export);
        Ok((ticket, request))
    }

    /// Settles an export outcome. `Ok(None)` when the ticket was cancelled.
    pub fn complete_export(
        &mut self,
        ticket: OperationTicket,
        request: &ExportRequest,
        outcome: Result<ExportPayload>,
    ) -> Result<Option<ExportArtifact>> {
        if !matches!(self.pending.take(ticket), Some(PendingKind::Export)) {
            return Ok(None);
        }
        let payload = outcome.inspect_err(|err| tracing::warn!("Export {} failed: {}", ticket, err))?;
        Ok(Some(payload.into_artifact(request, &self.template.name)))
    }

    /// Exports `record_ids` through `service`. Never modifies the template.
    pub async fn export(
        &self,
        service: &dyn ExportService,
        record_ids: Vec<String>,
        output: OutputKind,
    ) -> Result<ExportArtifact> {
        let request = ExportRequest::new(self.template.id.as_deref(), record_ids, output)?;
        run_export(service, &request, &self.template.name).await
    }
}
