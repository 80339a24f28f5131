//! Pending asynchronous operations.
//!
//! A long-running request (upload, save, export) is split into a `begin`
//! call that hands out an [`OperationTicket`] and a `complete` call that
//! applies the outcome. The session stays fully editable in between. A
//! completion patches exactly one field; a cancelled ticket or a target that
//! no longer exists turns the completion into a silent no-op.

use certkit_core::{AssetUploader, Error, Result, UploadFile};
use std::collections::HashMap;
use uuid::Uuid;

use super::DesignerState;
use crate::model::{ElementId, ElementPatch};
use crate::template::Template;

/// Handle of one outstanding request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationTicket(Uuid);

impl OperationTicket {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for OperationTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// The single field an upload writes its URL into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetTarget {
    Background,
    /// Source of an image or photo element
    Element(ElementId),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PendingKind {
    Upload(AssetTarget),
    /// Template as it was sent to the store
    Save(Template),
    Export,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PendingOperations {
    operations: HashMap<OperationTicket, PendingKind>,
}

impl PendingOperations {
    pub(crate) fn register(&mut self, kind: PendingKind) -> OperationTicket {
        let ticket = OperationTicket::new();
        self.operations.insert(ticket, kind);
        ticket
    }

    pub(crate) fn take(&mut self, ticket: OperationTicket) -> Option<PendingKind> {
        self.operations.remove(&ticket)
    }

    pub(crate) fn len(&self) -> usize {
        self.operations.len()
    }

    pub(crate) fn clear(&mut self) {
        self.operations.clear();
    }

    /// Forgets uploads aimed at elements that are no longer in `template`.
    pub(crate) fn discard_missing(&mut self, template: &Template) {
        self.operations.retain(|ticket, kind| match kind {
            PendingKind::Upload(AssetTarget::Element(id)) if !template.contains(*id) => {
                tracing::debug!("Discarding upload {} for deleted element {}", ticket, id);
                false
            }
            _ => true,
        });
    }
}

impl DesignerState {
    /// Number of requests still outstanding.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Registers an upload into `target`.
    ///
    /// Element targets must be image or photo elements.
    pub fn begin_upload(&mut self, target: AssetTarget) -> Result<OperationTicket> {
        if let AssetTarget::Element(id) = target {
            match self.template.element(id) {
                Some(element) if element.kind.holds_asset() => {}
                Some(element) => {
                    return Err(Error::other(format!(
                        "{} element {} cannot hold an uploaded asset",
                        element.element_type(),
                        id
                    )))
                }
                None => return Err(Error::other(format!("element {id} does not exist"))),
            }
        }
        Ok(self.pending.register(PendingKind::Upload(target)))
    }

    /// Applies an upload outcome.
    ///
    /// `Ok(true)` when the URL was written, `Ok(false)` when the ticket was
    /// cancelled or its element is gone. A failed upload is returned as the
    /// error and leaves the template untouched.
    pub fn complete_upload(
        &mut self,
        ticket: OperationTicket,
        outcome: Result<String>,
    ) -> Result<bool> {
        let Some(PendingKind::Upload(target)) = self.pending.take(ticket) else {
            tracing::debug!("Upload {} completed after cancellation, ignored", ticket);
            return Ok(false);
        };
        let url = match outcome {
            Ok(url) => url,
            Err(err) => {
                tracing::warn!("Upload {} failed: {}", ticket, err);
                return Err(err);
            }
        };

        let apply = move |template: &Template| match target {
            AssetTarget::Background => template.with_background_image(Some(url.clone())),
            AssetTarget::Element(id) => {
                let kind = template
                    .element(id)
                    .and_then(|e| e.kind.with_asset_source(url.clone()));
                match kind {
                    Some(kind) => template.update_element(id, &ElementPatch::new().kind(kind)),
                    None => template.clone(),
                }
            }
        };

        if let AssetTarget::Element(id) = target {
            if !self.template.contains(id) {
                tracing::debug!("Upload {} target {} no longer exists", ticket, id);
                return Ok(false);
            }
        }

        if self.interaction.is_some() {
            self.patch_outside_history(apply);
            Ok(true)
        } else {
            let next = apply(&self.template);
            Ok(self.commit(next, "Asset Upload"))
        }
    }

    /// Forgets an outstanding request; its completion will be ignored.
    pub fn cancel_pending(&mut self, ticket: OperationTicket) -> bool {
        self.pending.take(ticket).is_some()
    }

    /// Uploads `file` and stores the URL in `target`.
    pub async fn upload_asset(
        &mut self,
        uploader: &dyn AssetUploader,
        file: &UploadFile,
        target: AssetTarget,
    ) -> Result<bool> {
        let ticket = self.begin_upload(target)?;
        let outcome = uploader.upload(file).await;
        self.complete_upload(ticket, outcome)
    }
}
