use certkit_core::services::memory::{MemoryExporter, MemoryUploader};
use certkit_core::{ExportPayload, OutputKind, PageDensity, RasterFormat, UploadFile};
use certkit_designer::designer_state::{AssetTarget, DesignerState};
use certkit_designer::persistence::{AssignmentMetadata, MemoryTemplateStore};
use certkit_designer::presets;
use certkit_designer::template::{CanvasPreset, Template};
use serde_json::json;

#[tokio::test]
async fn test_upload_background_image() {
    let uploader = MemoryUploader::new();
    let mut state = DesignerState::default();
    let file = UploadFile::new("bg.png", "image/png", vec![7; 16]);

    assert!(state
        .upload_asset(&uploader, &file, AssetTarget::Background)
        .await
        .unwrap());
    let url = state.template().background_image.clone().unwrap();
    assert_eq!(uploader.get(&url), Some(file));
    assert!(state.undo());
    assert!(state.template().background_image.is_none());
}

#[tokio::test]
async fn test_failed_upload_changes_nothing() {
    let uploader = MemoryUploader::new();
    uploader.fail_with("offline");
    let mut state = DesignerState::default();
    let photo = state.add_element(presets::photo());
    let before = state.template().clone();

    let err = state
        .upload_asset(
            &uploader,
            &UploadFile::new("me.jpg", "image/jpeg", vec![1]),
            AssetTarget::Element(photo),
        )
        .await
        .unwrap_err();
    assert!(err.is_service());
    assert_eq!(state.template(), &before);
    assert_eq!(state.pending_count(), 0);
}

#[tokio::test]
async fn test_save_then_open() {
    let store = MemoryTemplateStore::new();
    let assignment = AssignmentMetadata::new(json!({"default": false}));
    let mut state = DesignerState::default();
    state.set_template_name("Workshop Certificate");
    state.add_element(presets::text("Certificate of Attendance"));

    let id = state.save(&store, &assignment).await.unwrap();
    assert!(!state.is_modified());
    assert_eq!(state.template().id.as_deref(), Some(id.as_str()));

    // saving again reuses the id
    state.set_background_color("#fff8e7");
    assert_eq!(state.save(&store, &assignment).await.unwrap(), id);
    assert_eq!(store.len(), 1);

    let mut other = DesignerState::default();
    other.open(&store, &id).await.unwrap();
    assert_eq!(other.template(), state.template());
    assert!(!other.can_undo());
}

#[tokio::test]
async fn test_failed_save_and_open_leave_state() {
    let store = MemoryTemplateStore::new();
    store.fail_with("timeout");
    let mut state = DesignerState::default();
    state.add_element(presets::line());
    let before = state.template().clone();

    assert!(state
        .save(&store, &AssignmentMetadata::default())
        .await
        .unwrap_err()
        .is_service());
    assert!(state.open(&store, "missing").await.is_err());
    assert_eq!(state.template(), &before);
    assert!(state.is_modified());
    assert!(state.can_undo());
}

#[tokio::test]
async fn test_export_requires_saved_template() {
    let exporter = MemoryExporter::new();
    let state = DesignerState::default();
    let err = state
        .export(&exporter, vec!["r1".into()], OutputKind::document(PageDensity::One))
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert!(exporter.requests().is_empty());
}

#[tokio::test]
async fn test_export_flow() {
    let store = MemoryTemplateStore::new();
    let exporter = MemoryExporter::new();
    let mut state = DesignerState::default();
    state.set_template_name("Spring Gala");
    let id = state.save(&store, &AssignmentMetadata::default()).await.unwrap();
    let before = state.template().clone();

    let artifact = state
        .export(
            &exporter,
            vec!["r1".into(), "r2".into()],
            OutputKind::raster(RasterFormat::Png),
        )
        .await
        .unwrap();
    assert_eq!(artifact.filename, "spring-gala-images.zip");
    assert_eq!(exporter.requests()[0].template_id, id);
    assert_eq!(state.template(), &before);
}

#[test]
fn test_cancelled_export_is_ignored() {
    let mut state = DesignerState::default();
    state.open_template(Template::new("Gala", CanvasPreset::A4Portrait).with_id("tpl-9"));
    let (ticket, request) = state
        .prepare_export(vec!["r1".into()], OutputKind::document(PageDensity::One))
        .unwrap();
    assert_eq!(request.template_id, "tpl-9");

    assert!(state.cancel_pending(ticket));
    let payload = ExportPayload {
        bytes: vec![1, 2],
        suggested_filename: None,
    };
    assert_eq!(state.complete_export(ticket, &request, Ok(payload)).unwrap(), None);
}
