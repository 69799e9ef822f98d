//! Face match CLI - Run the image upload service
//!
//! ```bash
//! face-match serve                         # Start HTTP server (port 8080)
//! face-match serve --port 9000 --upload-dir /data/uploads
//! ```

use clap::{Parser, Subcommand};
use face_match::{ServerConfig, ServerResult};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "face-match")]
#[command(about = "Image upload service for Face Match", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = face_match::config::DEFAULT_PORT)]
        port: u16,

        /// Directory uploaded images are written to
        #[arg(short, long, env = "UPLOAD_DIR", default_value = face_match::config::DEFAULT_UPLOAD_DIR)]
        upload_dir: PathBuf,

        /// Maximum request body size in bytes
        #[arg(long, env = "MAX_UPLOAD_SIZE", default_value_t = face_match::config::DEFAULT_MAX_UPLOAD_SIZE)]
        max_upload_size: usize,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("face_match=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            port,
            upload_dir,
            max_upload_size,
        } => {
            cmd_serve(ServerConfig {
                port,
                upload_dir,
                max_upload_size,
            })
            .await
        }
    };

    if let Err(e) = result {
        tracing::error!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(config: ServerConfig) -> ServerResult<()> {
    face_match::server::start_server(config).await
}
