use certkit_core::services::memory::MemoryExporter;
use certkit_core::{run_export, ExportRequest, OutputKind, PageDensity, RasterFormat};

#[tokio::test]
async fn test_export_uses_suggested_filename() {
    let exporter = MemoryExporter::new();
    exporter.suggest_filename("batch-42.pdf");

    let request = ExportRequest::new(
        Some("tpl-1"),
        vec!["r1".to_string(), "r2".to_string()],
        OutputKind::document(PageDensity::Four),
    )
    .unwrap();

    let artifact = run_export(&exporter, &request, "Summit").await.unwrap();
    assert_eq!(artifact.filename, "batch-42.pdf");
    assert!(!artifact.bytes.is_empty());
    assert_eq!(exporter.requests(), vec![request]);
}

#[tokio::test]
async fn test_export_falls_back_to_derived_filename() {
    let exporter = MemoryExporter::new();
    let request = ExportRequest::new(
        Some("tpl-1"),
        vec!["r1".to_string()],
        OutputKind::raster(RasterFormat::Png),
    )
    .unwrap();

    let artifact = run_export(&exporter, &request, "Speaker Badge").await.unwrap();
    assert_eq!(artifact.filename, "speaker-badge.png");
}

#[tokio::test]
async fn test_export_failure_is_reported() {
    let exporter = MemoryExporter::new();
    exporter.fail_with("renderer offline");
    let request = ExportRequest::new(
        Some("tpl-1"),
        vec!["r1".to_string()],
        OutputKind::raster(RasterFormat::Jpeg),
    )
    .unwrap();

    let err = run_export(&exporter, &request, "Badge").await.unwrap_err();
    assert!(err.is_service());
    assert!(exporter.requests().is_empty());
}
