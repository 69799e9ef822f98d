//! HTTP Server for the upload API.
//!
//! # API Endpoints
//!
//! | Method | Path       | Description                         |
//! |--------|------------|-------------------------------------|
//! | GET    | `/`        | Welcome message                     |
//! | POST   | `/uploads` | Upload an image (multipart `file`)  |
//! | POST   | `/upload`  | Same handler, older path            |

use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::{header, Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::types::{UploadResponse, WelcomeResponse};
use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult, UploadError, UploadResult};
use crate::storage::{ImagePolicy, LocalStore};

/// Multipart part holding the image.
pub const FILE_FIELD: &str = "file";

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<LocalStore>,
    pub policy: ImagePolicy,
}

impl AppState {
    pub fn new(store: LocalStore) -> Self {
        Self {
            store: Arc::new(store),
            policy: ImagePolicy::default(),
        }
    }
}

/// Build the router with CORS, tracing and the body size cap.
pub fn create_router(state: AppState, max_upload_size: usize) -> Router {
    // The page is served from another origin (trunk dev server)
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(welcome))
        .route("/uploads", post(upload_file))
        .route("/upload", post(upload_file))
        .layer(DefaultBodyLimit::max(max_upload_size))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> ServerResult<()> {
    let store = LocalStore::init(&config.upload_dir)
        .await
        .map_err(|source| ServerError::UploadDir {
            path: config.upload_dir.display().to_string(),
            source,
        })?;

    let app = create_router(AppState::new(store), config.max_upload_size);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        port = config.port,
        upload_dir = %config.upload_dir.display(),
        max_upload_size = config.max_upload_size,
        "🚀 Face match server running on http://localhost:{}",
        config.port
    );
    tracing::info!("   POST /uploads - Upload image (alias: POST /upload)");
    tracing::info!("   GET  /        - Welcome message");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Welcome endpoint
async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Face Match API".to_string(),
    })
}

/// A buffered `file` part.
struct FilePart {
    file_name: Option<String>,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

/// Upload image endpoint
async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> UploadResult<Json<UploadResponse>> {
    let mut part: Option<FilePart> = None;

    // Drain the whole body so the client sees our answer, not a reset
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::InvalidUpload {
            reason: e.to_string(),
        })?
    {
        if part.is_some() || field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                UploadError::InvalidUpload {
                    reason: e.to_string(),
                }
            } else {
                UploadError::ReadFailed {
                    reason: e.to_string(),
                }
            }
        })?;

        part = Some(FilePart {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    let part = part.ok_or_else(|| UploadError::InvalidUpload {
        reason: format!("no `{}` part in request", FILE_FIELD),
    })?;

    let ext = state
        .policy
        .check(part.content_type.as_deref(), part.file_name.as_deref())?;

    let path = state.store.save(&ext, &part.bytes).await?;

    tracing::info!(
        file_name = part.file_name.as_deref().unwrap_or("unknown"),
        size = part.bytes.len(),
        path = %path.display(),
        "📄 Stored upload"
    );

    Ok(Json(UploadResponse::stored(path.display().to_string())))
}
