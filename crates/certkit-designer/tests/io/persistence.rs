use certkit_designer::model::ShapeKind;
use certkit_designer::persistence::{
    AssignmentMetadata, FileTemplateStore, MemoryTemplateStore, TemplateDocument, TemplateStore,
};
use certkit_designer::presets;
use certkit_designer::template::{CanvasPreset, Template};
use serde_json::json;
use tempfile::TempDir;

fn sample_template() -> Template {
    let (template, _) = Template::new("Speaker Badge", CanvasPreset::BadgePortrait)
        .add_element(presets::shape(ShapeKind::Triangle));
    let (template, _) = template.add_element(presets::qr_code());
    template
}

#[tokio::test]
async fn test_file_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = FileTemplateStore::new(dir.path());
    let template = sample_template();
    let assignment = AssignmentMetadata::new(json!({"default": true, "ticketTypes": ["VIP"]}));

    let id = store
        .save(&TemplateDocument::from(&template), &assignment)
        .await
        .unwrap();
    assert!(dir.path().join(format!("{id}.json")).exists());

    let loaded = store.load(&id).await.unwrap().into_template();
    assert_eq!(loaded.id.as_deref(), Some(id.as_str()));
    assert_eq!(loaded.size, CanvasPreset::BadgePortrait);
    assert_eq!(loaded.elements, template.elements);
}

#[tokio::test]
async fn test_file_store_missing_id() {
    let dir = TempDir::new().unwrap();
    let store = FileTemplateStore::new(dir.path());
    let err = store.load("nope").await.unwrap_err();
    assert!(err.is_service());
}

#[tokio::test]
async fn test_memory_store_passes_assignment_through() {
    let store = MemoryTemplateStore::new();
    let assignment = AssignmentMetadata::new(json!({"scope": {"ticketType": "Staff"}}));
    let id = store
        .save(&TemplateDocument::from(&sample_template()), &assignment)
        .await
        .unwrap();

    assert_eq!(store.assignment(&id), Some(assignment));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_document_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("badge.json");
    let doc = TemplateDocument::from(&sample_template());
    doc.save_to_file(&path).unwrap();

    let loaded = TemplateDocument::load_from_file(&path).unwrap();
    assert_eq!(loaded, doc);
}
