//! Face Match - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for picking an image, previewing it locally
//! and uploading it to the face match service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (title)                                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (card title, description)                         │
//! │  └── UploadForm (picker, preview, upload, feedback)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Endpoint, response field names and messages
//! - [`types`] - Common types (UploadOutcome, Feedback, AppError)
//! - [`widget`] - Upload widget state, testable without a browser
//! - [`components`] - UI components (Header, Hero, UploadForm)
//! - [`services`] - Browser APIs (fetch upload, object URLs)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod widget;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    FileLike,
    // Upload
    UploadOutcome,
    // Feedback
    Feedback, FeedbackKind,
    // Errors
    AppError, AppResult,
};

// Widget
pub use widget::{SubmitTicket, UploadWidget};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Mount the application on `<body>`.
///
/// Called by the trunk binary; exported for hosts loading the cdylib.
#[wasm_bindgen]
pub fn mount() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Face Match - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Photo Matcher"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <Header/>

        <div class="container">
            <div class="upload-card">
                <Hero/>
                <UploadForm/>
            </div>
        </div>
    }
}
