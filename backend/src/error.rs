//! Error types for the upload service.
//!
//! - [`UploadError`] - Request-level failures, rendered as `{"error": ...}`
//! - [`ServerError`] - Startup failures
//!
//! The text sent to the client is fixed per variant; details only go to
//! the log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::types::ErrorResponse;

// =============================================================================
// Upload Errors
// =============================================================================

/// Errors while handling `POST /uploads`.
#[derive(Debug, Error)]
pub enum UploadError {
    /// No `file` part, or the multipart body could not be read.
    #[error("Invalid file upload")]
    InvalidUpload { reason: String },

    /// Content type or extension not allowed.
    #[error("Invalid file type or extension")]
    InvalidType {
        content_type: Option<String>,
        file_name: Option<String>,
    },

    /// File part could not be buffered.
    #[error("Failed to read file")]
    ReadFailed { reason: String },

    /// Writing to the upload directory failed.
    #[error("Failed to save file locally")]
    SaveFailed(#[from] std::io::Error),
}

impl UploadError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidUpload { .. } | Self::InvalidType { .. } => StatusCode::BAD_REQUEST,
            Self::ReadFailed { .. } | Self::SaveFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        match &self {
            Self::InvalidUpload { reason } => {
                tracing::warn!(%reason, "Error retrieving file");
            }
            Self::InvalidType {
                content_type,
                file_name,
            } => {
                tracing::warn!(?content_type, ?file_name, "Rejected file type");
            }
            Self::ReadFailed { reason } => {
                tracing::error!(%reason, "Failed to read file");
            }
            Self::SaveFailed(e) => {
                tracing::error!(error = %e, "Failed to save file locally");
            }
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (self.status(), body).into_response()
    }
}

// =============================================================================
// Server Errors
// =============================================================================

/// Errors while starting the HTTP server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Upload directory could not be created.
    #[error("Failed to create upload directory {path}: {source}")]
    UploadDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Listener could not be bound or the server stopped with an error.
    #[error("Server IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for upload handlers.
pub type UploadResult<T> = Result<T, UploadError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
