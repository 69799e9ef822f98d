//! HTTP service for uploading an image to the backend.

use gloo_net::http::Request;
use serde_json::Value;
use web_sys::{File, FormData};

use crate::config::{Messages, ResponseFields};
use crate::{AppError, AppResult, UploadOutcome};

/// Status and body of the service's answer, before interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one multipart request carrying a single file.
#[allow(async_fn_in_trait)]
pub trait UploadTransport<F> {
    /// POST `file` under the part name `field` to `url`.
    async fn send(&self, url: &str, field: &str, file: &F) -> AppResult<RawResponse>;
}

/// Browser `fetch` through gloo-net.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl UploadTransport<File> for GlooTransport {
    async fn send(&self, url: &str, field: &str, file: &File) -> AppResult<RawResponse> {
        let form_data = FormData::new()
            .map_err(|e| AppError::Network(format!("Failed to create FormData: {:?}", e)))?;

        form_data
            .append_with_blob(field, file)
            .map_err(|e| AppError::Network(format!("Failed to append file: {:?}", e)))?;

        let request = Request::post(url)
            .body(form_data)
            .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response: {}", e)))?;

        Ok(RawResponse {
            status: response.status(),
            body,
        })
    }
}

/// Turn the service's answer into what the user is shown.
///
/// Missing or empty fields fall back to the configured defaults. A body
/// that is not JSON is a [`UploadOutcome::Failed`] whatever the status.
pub fn interpret_response(
    raw: &RawResponse,
    fields: &ResponseFields,
    messages: &Messages,
) -> UploadOutcome {
    let body: Value = match serde_json::from_str(&raw.body) {
        Ok(body) => body,
        Err(e) => {
            log::error!("Error parsing backend response (status {}): {}", raw.status, e);
            return UploadOutcome::Failed {
                message: messages.unexpected.clone(),
            };
        }
    };

    let text = |name: &str| {
        body.get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    if raw.ok() {
        UploadOutcome::Uploaded {
            message: text(&fields.message).unwrap_or_else(|| messages.uploaded.clone()),
            file_path: text(&fields.file_path).unwrap_or_else(|| messages.missing_path.clone()),
        }
    } else {
        UploadOutcome::Rejected {
            message: text(&fields.error).unwrap_or_else(|| messages.upload_failed.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            body: body.to_string(),
        }
    }

    fn interpret(status: u16, body: &str) -> UploadOutcome {
        interpret_response(
            &raw(status, body),
            &ResponseFields::default(),
            &Messages::default(),
        )
    }

    #[test]
    fn test_success_response() {
        let outcome = interpret(200, r#"{"message": "ok", "file_path": "/x.png"}"#);
        assert_eq!(
            outcome,
            UploadOutcome::Uploaded {
                message: "ok".into(),
                file_path: "/x.png".into(),
            }
        );
    }

    #[test]
    fn test_success_defaults() {
        let outcome = interpret(201, r#"{"message": ""}"#);
        assert_eq!(
            outcome,
            UploadOutcome::Uploaded {
                message: "Image uploaded successfully!".into(),
                file_path: "No file path returned.".into(),
            }
        );
    }

    #[test]
    fn test_server_error() {
        let outcome = interpret(400, r#"{"error": "bad file"}"#);
        assert_eq!(outcome, UploadOutcome::Rejected { message: "bad file".into() });

        let outcome = interpret(500, r#"{}"#);
        assert_eq!(outcome.message(), "Upload failed. Please try again.");
    }

    #[test]
    fn test_malformed_body() {
        for status in [200, 413, 502] {
            let outcome = interpret(status, "<html>Bad Gateway</html>");
            assert!(matches!(outcome, UploadOutcome::Failed { .. }));
            assert_eq!(outcome.message(), Messages::default().unexpected);
        }
    }

    #[test]
    fn test_custom_field_names() {
        let fields = ResponseFields {
            message: "msg".into(),
            file_path: "path".into(),
            error: "detail".into(),
        };
        let messages = Messages::default();

        let ok = interpret_response(
            &raw(200, r#"{"msg": "stored", "path": "a.png"}"#),
            &fields,
            &messages,
        );
        assert_eq!(
            ok,
            UploadOutcome::Uploaded {
                message: "stored".into(),
                file_path: "a.png".into(),
            }
        );

        let err = interpret_response(
            &raw(422, r#"{"error": "ignored", "detail": "too big"}"#),
            &fields,
            &messages,
        );
        assert_eq!(err.message(), "too big");
    }

    #[test]
    fn test_non_string_fields_use_defaults() {
        let outcome = interpret(200, r#"{"message": 42, "file_path": null}"#);
        assert_eq!(outcome.message(), "Image uploaded successfully!");
    }
}
