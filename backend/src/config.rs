//! Server configuration.
//!
//! Defaults match the original service: port 8080, `./uploads`, 10 MB.
//! The CLI overrides them, with `PORT`, `UPLOAD_DIR` and
//! `MAX_UPLOAD_SIZE` as fallbacks (a `.env` file is loaded first).

use std::path::PathBuf;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default directory for stored uploads.
pub const DEFAULT_UPLOAD_DIR: &str = "./uploads";

/// Maximum request body size (in bytes).
pub const DEFAULT_MAX_UPLOAD_SIZE: usize = 10 << 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub upload_dir: PathBuf,
    pub max_upload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            max_upload_size: DEFAULT_MAX_UPLOAD_SIZE,
        }
    }
}
