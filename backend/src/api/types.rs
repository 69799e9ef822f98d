//! REST API types for frontend integration.
//!
//! Field names are part of the contract with the upload widget:
//! `message` and `file_path` on success, `error` on failure.

use serde::{Deserialize, Serialize};

/// Response sent after a stored upload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadResponse {
    pub message: String,
    /// Where the file was written, relative to the server's working directory
    pub file_path: String,
}

impl UploadResponse {
    pub fn stored(file_path: impl Into<String>) -> Self {
        Self {
            message: "File uploaded successfully!".to_string(),
            file_path: file_path.into(),
        }
    }
}

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WelcomeResponse {
    pub message: String,
}

/// Body of every failed request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
