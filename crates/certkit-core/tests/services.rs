#[path = "services/export.rs"]
mod export;
#[path = "services/upload.rs"]
mod upload;
