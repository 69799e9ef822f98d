//! # Face Match - image upload service
//!
//! Accepts one image per request as `multipart/form-data` and stores it
//! on the local disk under a generated name.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Multipart  │────▶│  Handler    │────▶│ ImagePolicy │────▶│ LocalStore  │
//! │  (`file`)   │     │ (10 MB cap) │     │ (type+ext)  │     │ (uuid name) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types and their HTTP rendering
//! - [`config`] - Server settings and defaults
//! - [`storage`] - Image validation and local storage
//! - [`api`] - HTTP API server

// Core modules
pub mod error;
pub mod config;

// Storage
pub mod storage;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ServerError, ServerResult, UploadError, UploadResult};

pub use config::ServerConfig;

pub use storage::{ImagePolicy, LocalStore};

pub use api::types::{ErrorResponse, UploadResponse, WelcomeResponse};

// Server
pub mod server {
    pub use crate::api::server::{create_router, start_server, AppState};
}
