//! Local previews through object URLs.
//!
//! An object URL keeps its blob alive until it is revoked, so every URL
//! handed out here has to come back through [`PreviewUrls::revoke`].

use web_sys::{File, Url};

use crate::{AppError, AppResult};

/// Creates and releases preview URLs for picked files.
pub trait PreviewUrls<F> {
    fn create(&self, file: &F) -> AppResult<String>;
    fn revoke(&self, url: &str);
}

/// `URL.createObjectURL` / `URL.revokeObjectURL`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ObjectUrls;

impl PreviewUrls<File> for ObjectUrls {
    fn create(&self, file: &File) -> AppResult<String> {
        Url::create_object_url_with_blob(file)
            .map_err(|e| AppError::Preview(format!("Failed to create object URL: {:?}", e)))
    }

    fn revoke(&self, url: &str) {
        if let Err(e) = Url::revoke_object_url(url) {
            log::warn!("Failed to revoke object URL {}: {:?}", url, e);
        }
    }
}
