//! File storage collaborator for multipart upload endpoints.
//!
//! Uploads follow a two-phase pattern: the file is staged through
//! [`FileStore::store`] first, the owning database row is written second,
//! and on a failed write the staged file is deleted again. A stored file is
//! therefore either linked to a successfully created entity or removed,
//! never silently orphaned.

use std::path::PathBuf;

use async_trait::async_trait;
use rand::{distr::Alphanumeric, Rng};

/// Narrow seam over the object storage backing file uploads.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Stages the given bytes under a fresh unique key and returns the key.
    async fn store(&self, file_name: &str, bytes: &[u8]) -> Result<String, std::io::Error>;

    /// Removes a previously staged file.
    async fn delete(&self, key: &str) -> Result<(), std::io::Error>;
}

/// [`FileStore`] writing to a directory on local disk.
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// Keys are `<random prefix>-<sanitized original name>`; sanitizing keeps
/// keys path-safe regardless of what the client named the file.
fn storage_key(file_name: &str) -> String {
    let prefix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect();

    let name: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!("{}-{}", prefix, name)
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn store(&self, file_name: &str, bytes: &[u8]) -> Result<String, std::io::Error> {
        let key = storage_key(file_name);

        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.root.join(&key), bytes).await?;

        Ok(key)
    }

    async fn delete(&self, key: &str) -> Result<(), std::io::Error> {
        tokio::fs::remove_file(self.root.join(key)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("staffboard-upload-{}-{}", tag, std::process::id()))
    }

    #[tokio::test]
    async fn stores_and_deletes_file() {
        let root = temp_root("roundtrip");
        let store = LocalFileStore::new(&root);

        let key = store.store("contract.pdf", b"content").await.unwrap();
        assert!(key.ends_with("-contract.pdf"));

        let on_disk = tokio::fs::read(root.join(&key)).await.unwrap();
        assert_eq!(on_disk, b"content");

        store.delete(&key).await.unwrap();
        assert!(!root.join(&key).exists());

        tokio::fs::remove_dir_all(&root).await.ok();
    }

    #[tokio::test]
    async fn sanitizes_hostile_file_names() {
        let root = temp_root("sanitize");
        let store = LocalFileStore::new(&root);

        let key = store.store("../../etc/passwd", b"x").await.unwrap();
        assert!(!key.contains('/'));
        assert!(root.join(&key).exists());

        store.delete(&key).await.unwrap();
        tokio::fs::remove_dir_all(&root).await.ok();
    }

    #[test]
    fn keys_are_unique_per_store() {
        let a = storage_key("report.pdf");
        let b = storage_key("report.pdf");
        assert_ne!(a, b);
    }
}
