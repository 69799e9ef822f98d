//! UI Components for the Face Match application.
//!
//! # Layout Components
//! - [`Header`] - Page title bar
//! - [`Hero`] - Card title and short description
//!
//! # Feature Components
//! - [`UploadForm`] - Image picker, local preview and upload button

mod header;
mod hero;
mod upload;

pub use header::*;
pub use hero::*;
pub use upload::*;
