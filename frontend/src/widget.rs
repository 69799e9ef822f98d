//! State of the upload widget, independent of the DOM.
//!
//! The widget owns at most one picked file and the object URL previewing
//! it. Submitting is split in three steps so the UI can drop its borrow
//! while the request is in flight:
//!
//! ```text
//! begin_submit() ──▶ SubmitTicket::send().await ──▶ finish_submit()
//!  (uploading = true)        (one request)          (uploading = false)
//! ```

use crate::config::{Messages, ResponseFields, UploadConfig};
use crate::services::{interpret_response, PreviewUrls, UploadTransport};
use crate::{Feedback, FileLike, UploadOutcome};

pub struct UploadWidget<F, P>
where
    F: FileLike,
    P: PreviewUrls<F>,
{
    config: UploadConfig,
    previews: P,
    file: Option<F>,
    preview: Option<String>,
    uploading: bool,
    feedback: Option<Feedback>,
    file_path: Option<String>,
}

impl<F, P> UploadWidget<F, P>
where
    F: FileLike,
    P: PreviewUrls<F>,
{
    pub fn new(config: UploadConfig, previews: P) -> Self {
        Self {
            config,
            previews,
            file: None,
            preview: None,
            uploading: false,
            feedback: None,
            file_path: None,
        }
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    pub fn selected_file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Path returned by the last successful upload.
    pub fn file_path(&self) -> Option<&str> {
        self.file_path.as_deref()
    }

    /// Handle a change of the file input.
    ///
    /// `None` means the picker was dismissed and leaves everything as is.
    pub fn select_file(&mut self, candidate: Option<F>) {
        let Some(file) = candidate else {
            return;
        };

        if !file.is_image() {
            log::warn!("Rejected {} ({:?}): not an image", file.name(), file.mime_type());
            self.reject(self.config.messages.invalid_type.clone());
            return;
        }

        if let Some(limit) = self.config.max_file_size {
            if file.size() > limit {
                log::warn!("Rejected {}: {} bytes over {} limit", file.name(), file.size(), limit);
                self.reject(self.config.messages.too_large.clone());
                return;
            }
        }

        // The old URL must be gone before the new one exists.
        self.release_preview();
        match self.previews.create(&file) {
            Ok(url) => {
                log::debug!("Previewing {} at {}", file.name(), url);
                self.preview = Some(url);
                self.file = Some(file);
                self.feedback = None;
                self.file_path = None;
            }
            Err(e) => {
                log::error!("{}", e);
                self.reject(e.to_string());
            }
        }
    }

    /// Drop the picked file and its preview.
    pub fn clear_selection(&mut self) {
        self.file = None;
        self.release_preview();
        self.feedback = None;
        self.file_path = None;
    }

    /// Start an upload attempt.
    ///
    /// Returns `None` without touching the network when nothing is picked
    /// or an upload is already running.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket<F>> {
        if self.uploading {
            return None;
        }

        let Some(file) = self.file.clone() else {
            self.feedback = Some(Feedback::error(self.config.messages.no_file.clone()));
            return None;
        };

        self.uploading = true;
        self.feedback = None;
        self.file_path = None;

        Some(SubmitTicket {
            file,
            url: self.config.endpoint_url(),
            field: self.config.field_name.clone(),
            fields: self.config.fields.clone(),
            messages: self.config.messages.clone(),
        })
    }

    /// Apply the outcome of the attempt started by [`Self::begin_submit`].
    pub fn finish_submit(&mut self, outcome: UploadOutcome) {
        self.feedback = Some(Feedback::from(&outcome));
        self.file_path = match outcome {
            UploadOutcome::Uploaded { file_path, .. } => Some(file_path),
            _ => None,
        };
        self.uploading = false;
    }

    /// Run a whole attempt against `transport`.
    pub async fn submit<T>(&mut self, transport: &T) -> Option<UploadOutcome>
    where
        T: UploadTransport<F>,
    {
        let ticket = self.begin_submit()?;
        let outcome = ticket.send(transport).await;
        self.finish_submit(outcome.clone());
        Some(outcome)
    }

    /// Whether the file input should be emptied so the same file can be
    /// picked again and still fire `change`.
    pub fn needs_input_reset(&self) -> bool {
        self.file.is_none()
    }

    /// Release the preview when the widget is torn down.
    pub fn dispose(&mut self) {
        self.release_preview();
    }

    fn reject(&mut self, message: String) {
        self.file = None;
        self.release_preview();
        self.file_path = None;
        self.feedback = Some(Feedback::error(message));
    }

    fn release_preview(&mut self) {
        if let Some(url) = self.preview.take() {
            self.previews.revoke(&url);
        }
    }
}

impl<F, P> Drop for UploadWidget<F, P>
where
    F: FileLike,
    P: PreviewUrls<F>,
{
    fn drop(&mut self) {
        self.release_preview();
    }
}

/// Everything one request needs, detached from the widget.
#[derive(Clone, Debug)]
pub struct SubmitTicket<F> {
    file: F,
    url: String,
    field: String,
    fields: ResponseFields,
    messages: Messages,
}

impl<F: FileLike> SubmitTicket<F> {
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue the request. Never retried.
    pub async fn send<T>(self, transport: &T) -> UploadOutcome
    where
        T: UploadTransport<F>,
    {
        log::info!(
            "📤 Uploading {} ({} bytes) to {}",
            self.file.name(),
            self.file.size(),
            self.url
        );

        match transport.send(&self.url, &self.field, &self.file).await {
            Ok(raw) => {
                let outcome = interpret_response(&raw, &self.fields, &self.messages);
                match &outcome {
                    UploadOutcome::Uploaded { file_path, .. } => {
                        log::info!("✅ Uploaded file path: {}", file_path)
                    }
                    other => log::warn!("❌ Upload failed ({}): {}", raw.status, other.message()),
                }
                outcome
            }
            Err(e) => {
                log::error!("Upload error: {}", e);
                UploadOutcome::Failed {
                    message: self.messages.unexpected,
                }
            }
        }
    }
}
