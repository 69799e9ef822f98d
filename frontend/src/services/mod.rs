//! Browser-facing services.
//!
//! # Services
//!
//! - [`upload`] - Multipart POST to the upload service and response decoding
//! - [`preview`] - Object URLs used to preview a picked image locally

pub mod upload;
pub mod preview;

pub use upload::*;
pub use preview::*;
