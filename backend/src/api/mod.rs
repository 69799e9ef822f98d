//! HTTP API module.
//!
//! This module provides the HTTP server and API types for the upload service.

pub mod server;
pub mod types;

pub use server::{create_router, start_server, AppState};
pub use types::*;
