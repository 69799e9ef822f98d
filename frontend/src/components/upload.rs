//! Image upload component.
//!
//! Handles file selection, local preview, upload to backend and
//! result display. All state lives in one [`UploadWidget`] signal.

use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::services::{GlooTransport, ObjectUrls};
use crate::{UploadConfig, UploadWidget};

#[component]
pub fn UploadForm(
    /// Endpoint, field names and messages; defaults to `POST /uploads`.
    #[prop(optional)]
    config: Option<UploadConfig>,
) -> impl IntoView {
    let widget = create_rw_signal(UploadWidget::<File, ObjectUrls>::new(
        config.unwrap_or_default(),
        ObjectUrls,
    ));

    // The object URL must not outlive the form
    on_cleanup(move || {
        widget.try_update_untracked(|w| w.dispose());
    });

    let input_ref = create_node_ref::<html::Input>();

    // An unchanged input value fires no `change` when the same file is picked again
    let reset_input = move || {
        if widget.with_untracked(|w| w.needs_input_reset()) {
            if let Some(input) = input_ref.get_untracked() {
                input.set_value("");
            }
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        widget.update(|w| w.select_file(file));
        reset_input();
    };

    let on_clear = move |_: ev::MouseEvent| {
        widget.update(|w| w.clear_selection());
        reset_input();
    };

    let on_upload = move |_: ev::MouseEvent| {
        let Some(ticket) = widget.try_update(|w| w.begin_submit()).flatten() else {
            return;
        };

        spawn_local(async move {
            let outcome = ticket.send(&GlooTransport).await;
            if widget.try_update(|w| w.finish_submit(outcome)).is_none() {
                log::debug!("Upload finished after the form was removed");
            }
        });
    };

    let is_uploading = move || widget.with(|w| w.is_uploading());

    view! {
        <div class="upload-section">
            <input
                type="file"
                accept="image/*"
                class="file-input"
                node_ref=input_ref
                on:change=on_file_change
            />

            {move || {
                widget
                    .with(|w| w.preview_url().map(str::to_string))
                    .map(|url| view! {
                        <div class="preview">
                            <img src=url alt="Preview" class="preview-image"/>
                            <button class="preview-clear" title="Remove" on:click=on_clear>
                                "✕"
                            </button>
                        </div>
                    })
            }}

            <button
                class="upload-button"
                class:uploading=is_uploading
                disabled=is_uploading
                on:click=on_upload
            >
                {move || if is_uploading() { "Uploading..." } else { "Upload" }}
            </button>

            {move || {
                widget
                    .with(|w| w.feedback().cloned())
                    .map(|feedback| view! {
                        <p class=format!("feedback {}", feedback.kind.css_class())>
                            {feedback.text}
                        </p>
                    })
            }}

            {move || {
                widget
                    .with(|w| w.file_path().map(str::to_string))
                    .map(|path| view! {
                        <p class="file-path">
                            "Uploaded File Path: "
                            <a href=path.clone()>{path}</a>
                        </p>
                    })
            }}
        </div>
    }
}
