use certkit_core::services::memory::MemoryUploader;
use certkit_core::{AssetUploader, UploadFile};

#[tokio::test]
async fn test_upload_returns_retrievable_url() {
    let uploader = MemoryUploader::new();
    let file = UploadFile::new("logo.png", "image/png", vec![1, 2, 3]);

    let url = uploader.upload(&file).await.unwrap();
    assert!(url.starts_with("memory://assets/"));
    assert!(url.ends_with("/logo.png"));
    assert_eq!(uploader.get(&url), Some(file));
}

#[tokio::test]
async fn test_upload_failure_stores_nothing() {
    let uploader = MemoryUploader::new();
    uploader.fail_with("quota exceeded");

    let err = uploader
        .upload(&UploadFile::new("bg.jpg", "image/jpeg", vec![0]))
        .await
        .unwrap_err();
    assert!(err.is_service());
    assert_eq!(uploader.stored_count(), 0);

    uploader.recover();
    assert!(uploader
        .upload(&UploadFile::new("bg.jpg", "image/jpeg", vec![0]))
        .await
        .is_ok());
}

#[test]
fn test_is_image() {
    assert!(UploadFile::new("a.png", "image/png", Vec::new()).is_image());
    assert!(!UploadFile::new("a.pdf", "application/pdf", Vec::new()).is_image());
}
