//! Image validation and local file storage.
//!
//! Uploads are accepted only when both the part's content type and the
//! file name's extension are on the allow lists. Accepted files are
//! written under a fresh UUID so client names never reach the disk.

use std::path::{Path, PathBuf};

use tokio::fs;
use uuid::Uuid;

use crate::error::{UploadError, UploadResult};

// =============================================================================
// Validation
// =============================================================================

/// Allowed image types.
#[derive(Debug, Clone, Copy)]
pub struct ImagePolicy {
    pub content_types: &'static [&'static str],
    pub extensions: &'static [&'static str],
}

impl ImagePolicy {
    pub const DEFAULT_CONTENT_TYPES: &'static [&'static str] =
        &["image/jpeg", "image/png", "image/gif"];
    pub const DEFAULT_EXTENSIONS: &'static [&'static str] = &[".jpeg", ".jpg", ".png", ".gif"];

    /// Check a file part and return the extension to store it under.
    pub fn check(
        &self,
        content_type: Option<&str>,
        file_name: Option<&str>,
    ) -> UploadResult<String> {
        let ext = file_name.map(extension).unwrap_or_default();
        let type_ok = content_type
            .is_some_and(|ct| self.content_types.iter().any(|allowed| *allowed == ct));
        let ext_ok = self.extensions.iter().any(|allowed| *allowed == ext);

        if type_ok && ext_ok {
            Ok(ext.to_string())
        } else {
            Err(UploadError::InvalidType {
                content_type: content_type.map(str::to_string),
                file_name: file_name.map(str::to_string),
            })
        }
    }
}

impl Default for ImagePolicy {
    fn default() -> Self {
        Self {
            content_types: Self::DEFAULT_CONTENT_TYPES,
            extensions: Self::DEFAULT_EXTENSIONS,
        }
    }
}

/// Extension of the last path element, dot included; empty when absent.
fn extension(file_name: &str) -> &str {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    base.rfind('.').map(|idx| &base[idx..]).unwrap_or("")
}

// =============================================================================
// Storage
// =============================================================================

/// Directory the uploads are written to.
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Use `dir`, creating it when missing.
    pub async fn init(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `bytes` under a new unique name ending in `ext`.
    pub async fn save(&self, ext: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
        let file_name = format!("{}{}", Uuid::new_v4(), ext);
        let path = self.dir.join(file_name);
        fs::write(&path, bytes).await?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension() {
        assert_eq!(extension("photo.png"), ".png");
        assert_eq!(extension("archive.tar.gif"), ".gif");
        assert_eq!(extension("dir.d/photo"), "");
        assert_eq!(extension("C:\\pics\\me.jpg"), ".jpg");
        assert_eq!(extension(""), "");
    }

    #[test]
    fn test_policy_accepts_matching_type_and_extension() {
        let policy = ImagePolicy::default();
        assert_eq!(policy.check(Some("image/png"), Some("me.png")).unwrap(), ".png");
        assert_eq!(policy.check(Some("image/jpeg"), Some("me.jpeg")).unwrap(), ".jpeg");
    }

    #[test]
    fn test_policy_rejects_mismatches() {
        let policy = ImagePolicy::default();
        assert!(policy.check(Some("image/webp"), Some("me.webp")).is_err());
        assert!(policy.check(Some("text/plain"), Some("me.png")).is_err());
        assert!(policy.check(Some("image/png"), Some("me.txt")).is_err());
        assert!(policy.check(None, Some("me.png")).is_err());
        assert!(policy.check(Some("image/png"), None).is_err());
        // Extensions are compared as written
        assert!(policy.check(Some("image/png"), Some("ME.PNG")).is_err());
    }

    #[tokio::test]
    async fn test_store_writes_unique_files() {
        let tmp = tempfile::tempdir().unwrap();
        let store = LocalStore::init(tmp.path().join("nested/uploads")).await.unwrap();

        let first = store.save(".png", b"one").await.unwrap();
        let second = store.save(".png", b"two").await.unwrap();

        assert_ne!(first, second);
        assert!(first.starts_with(store.dir()));
        assert_eq!(first.extension().unwrap(), "png");
        assert_eq!(std::fs::read(&second).unwrap(), b"two");
    }
}
