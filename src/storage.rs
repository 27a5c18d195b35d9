// src/storage.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Where uploaded résumé files land and how they are retrieved later.
///
/// The pipeline only needs a stable public reference per stored file; how
/// that reference is served is the hosting layer's concern.
#[async_trait]
pub trait FileStore: Send + Sync {
    async fn store(&self, filename: &str, bytes: &[u8]) -> Result<String>;
}

/// Stores uploads under a local directory and hands back a download URL
/// composed from a configured public base.
pub struct LocalFileStore {
    upload_dir: PathBuf,
    public_base: String,
}

impl LocalFileStore {
    pub fn new(upload_dir: impl Into<PathBuf>, public_base: impl Into<String>) -> Self {
        let public_base = public_base.into().trim_end_matches('/').to_string();
        Self {
            upload_dir: upload_dir.into(),
            public_base,
        }
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn store(&self, filename: &str, bytes: &[u8]) -> Result<String> {
        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .with_context(|| {
                format!(
                    "Failed to create upload directory: {}",
                    self.upload_dir.display()
                )
            })?;

        let path = self.upload_dir.join(filename);
        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        Ok(format!("{}/{}", self.public_base, filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn store_writes_bytes_and_returns_public_reference() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = LocalFileStore::new(dir.path(), "http://127.0.0.1:8000/static/");

        let reference = store
            .store("cv.pdf", b"%PDF-fake")
            .await
            .expect("store should succeed");

        assert_eq!(reference, "http://127.0.0.1:8000/static/cv.pdf");
        let written = std::fs::read(dir.path().join("cv.pdf")).expect("file on disk");
        assert_eq!(written, b"%PDF-fake");
    }

    #[tokio::test]
    async fn store_creates_missing_upload_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("uploads").join("batch-1");
        let store = LocalFileStore::new(&nested, "http://localhost/static");

        let reference = store.store("a.pdf", b"x").await.expect("store");

        assert_eq!(reference, "http://localhost/static/a.pdf");
        assert!(nested.join("a.pdf").exists());
    }
}
