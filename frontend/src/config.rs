//! Application configuration.
//!
//! Centralized configuration for the upload widget. The endpoint path,
//! the JSON field names read from the service and every user-visible
//! message live here, so one widget covers both service variants.

/// Backend API base URL.
///
/// The face match upload service.
pub const BACKEND_URL: &str = "http://localhost:8080";

/// Upload endpoint of the current service.
pub const UPLOADS_ENDPOINT: &str = "/uploads";

/// Upload endpoint of the older service build.
pub const LEGACY_UPLOAD_ENDPOINT: &str = "/upload";

/// Multipart part name the service reads the image from.
pub const FILE_FIELD: &str = "file";

/// Maximum file size for upload (in bytes).
///
/// 10 MB, the service rejects anything larger.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Names of the JSON fields read from the upload response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponseFields {
    /// Success message field.
    pub message: String,
    /// Stored path field.
    pub file_path: String,
    /// Failure message field.
    pub error: String,
}

impl Default for ResponseFields {
    fn default() -> Self {
        Self {
            message: "message".to_string(),
            file_path: "file_path".to_string(),
            error: "error".to_string(),
        }
    }
}

/// User-visible texts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Messages {
    pub invalid_type: String,
    pub no_file: String,
    pub too_large: String,
    pub uploaded: String,
    pub missing_path: String,
    pub upload_failed: String,
    pub unexpected: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            invalid_type: "Invalid file type. Please upload an image file.".to_string(),
            no_file: "Please choose an image to upload.".to_string(),
            too_large: format!(
                "File is too large. Maximum size is {} MB.",
                MAX_FILE_SIZE / (1024 * 1024)
            ),
            uploaded: "Image uploaded successfully!".to_string(),
            missing_path: "No file path returned.".to_string(),
            upload_failed: "Upload failed. Please try again.".to_string(),
            unexpected: "An unexpected error occurred while processing the server response."
                .to_string(),
        }
    }
}

/// Full configuration of an [`UploadWidget`](crate::widget::UploadWidget).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadConfig {
    /// Service base URL, without trailing slash.
    pub backend_url: String,
    /// Endpoint path, with leading slash.
    pub endpoint: String,
    /// Multipart part name.
    pub field_name: String,
    /// Response field names.
    pub fields: ResponseFields,
    /// User-visible texts.
    pub messages: Messages,
    /// Client-side size limit, `None` disables the check.
    pub max_file_size: Option<u64>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            backend_url: BACKEND_URL.to_string(),
            endpoint: UPLOADS_ENDPOINT.to_string(),
            field_name: FILE_FIELD.to_string(),
            fields: ResponseFields::default(),
            messages: Messages::default(),
            max_file_size: Some(MAX_FILE_SIZE),
        }
    }
}

impl UploadConfig {
    /// Configuration for services that still expose `POST /upload`.
    pub fn legacy() -> Self {
        Self::with_endpoint(LEGACY_UPLOAD_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Absolute URL the upload is posted to.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/{}",
            self.backend_url.trim_end_matches('/'),
            self.endpoint.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = UploadConfig::default();
        assert_eq!(config.endpoint_url(), "http://localhost:8080/uploads");
        assert_eq!(config.field_name, "file");
    }

    #[test]
    fn test_legacy_endpoint() {
        assert_eq!(
            UploadConfig::legacy().endpoint_url(),
            "http://localhost:8080/upload"
        );
    }

    #[test]
    fn test_endpoint_url_joins_slashes() {
        let config = UploadConfig {
            backend_url: "http://api.local/".to_string(),
            ..UploadConfig::with_endpoint("uploads")
        };
        assert_eq!(config.endpoint_url(), "http://api.local/uploads");
    }

    #[test]
    fn test_too_large_message_mentions_limit() {
        assert!(Messages::default().too_large.contains("10 MB"));
    }
}
