//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - What the widget needs to know about a picked file
//! - **Upload Types** - Outcome of one upload attempt
//! - **Feedback Types** - The message line under the upload button
//! - **Error Types** - Frontend error handling

use thiserror::Error;

// =============================================================================
// File Types
// =============================================================================

/// A file chosen by the user.
///
/// Implemented for `web_sys::File`; anything else exposing a MIME type,
/// a name and a size can be used in its place.
pub trait FileLike: Clone {
    /// Declared MIME type, empty when the browser could not tell.
    fn mime_type(&self) -> String;
    /// File name as picked.
    fn name(&self) -> String;
    /// Size in bytes.
    fn size(&self) -> u64;

    fn is_image(&self) -> bool {
        self.mime_type().starts_with("image/")
    }
}

impl FileLike for web_sys::File {
    fn mime_type(&self) -> String {
        self.type_()
    }

    fn name(&self) -> String {
        web_sys::File::name(self)
    }

    fn size(&self) -> u64 {
        web_sys::Blob::size(self) as u64
    }
}

// =============================================================================
// Upload Types
// =============================================================================

/// Outcome of a single upload attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Service accepted the file.
    Uploaded { message: String, file_path: String },
    /// Service answered with a failure status.
    Rejected { message: String },
    /// Request or response parsing failed.
    Failed { message: String },
}

impl UploadOutcome {
    pub fn message(&self) -> &str {
        match self {
            UploadOutcome::Uploaded { message, .. }
            | UploadOutcome::Rejected { message }
            | UploadOutcome::Failed { message } => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Uploaded { .. })
    }
}

// =============================================================================
// Feedback Types
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            FeedbackKind::Success => "feedback-success",
            FeedbackKind::Error => "feedback-error",
        }
    }
}

/// Message shown to the user after an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: String,
}

impl Feedback {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Error,
            text: text.into(),
        }
    }
}

impl From<&UploadOutcome> for Feedback {
    fn from(outcome: &UploadOutcome) -> Self {
        if outcome.is_success() {
            Feedback::success(outcome.message())
        } else {
            Feedback::error(outcome.message())
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    /// Picked file was refused before any request.
    #[error("Validation error: {0}")]
    Validation(String),
    /// Service reported a failure.
    #[error("Server error: {0}")]
    Server(String),
    /// Network/HTTP error.
    #[error("Network error: {0}")]
    Network(String),
    /// Object URL could not be created.
    #[error("Preview error: {0}")]
    Preview(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
