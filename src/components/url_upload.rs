//! URL-mode sub-widget: a remote dataset location instead of a local file.
//!
//! Builds a [`UrlUploadRequest`] from the form fields, validates the URL at
//! the boundary, and awaits the parent-supplied submit handler. Errors from
//! the handler are surfaced here, in the sub-widget's own error line.

use leptos::*;
use web_sys::HtmlInputElement;

use crate::types::{UrlUploadHandler, UrlUploadOptions, UrlUploadRequest};
use crate::validation::validate_url;

#[component]
pub fn UrlUpload(
    /// Awaitable submit handler provided by the upload widget.
    on_submit: UrlUploadHandler,
    /// True while a submission is in flight; disables the submit control.
    is_loading: ReadSignal<bool>,
) -> impl IntoView {
    let (url, set_url) = create_signal(String::new());
    let (has_header, set_has_header) = create_signal(true);
    let (sample_only, set_sample_only) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_submit_click = move |_| {
        let raw = url.get();
        if let Err(message) = validate_url(&raw) {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);

        let request = UrlUploadRequest {
            url: raw.trim().to_string(),
            options: UrlUploadOptions {
                has_header: has_header.get(),
                sample_only: sample_only.get(),
            },
        };

        log::info!("🔗 Submitting URL: {}", request.url);
        let submit = on_submit.clone();
        spawn_local(async move {
            if let Err(e) = submit(request).await {
                log::error!("❌ URL upload failed: {}", e);
                set_error.set(Some(e.to_string()));
            }
        });
    };

    view! {
        <div class="url-upload">
            <label class="url-label" for="urlInput">"Dataset URL"</label>
            <input
                type="url"
                id="urlInput"
                class="url-input"
                placeholder="https://example.com/dataset.csv"
                prop:value=url
                on:input=move |ev| {
                    let input: HtmlInputElement = event_target(&ev);
                    set_url.set(input.value());
                }
            />

            <div class="url-options">
                <label class="url-option">
                    <input
                        type="checkbox"
                        prop:checked=has_header
                        on:change=move |ev| {
                            let input: HtmlInputElement = event_target(&ev);
                            set_has_header.set(input.checked());
                        }
                    />
                    "First row is a header"
                </label>
                <label class="url-option">
                    <input
                        type="checkbox"
                        prop:checked=sample_only
                        on:change=move |ev| {
                            let input: HtmlInputElement = event_target(&ev);
                            set_sample_only.set(input.checked());
                        }
                    />
                    "Fetch a sample only"
                </label>
            </div>

            <Show
                when=move || error.get().is_some()
                fallback=|| view! { }
            >
                <div class="url-error">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            <button
                class="url-submit"
                disabled=move || is_loading.get()
                on:click=on_submit_click
            >
                {move || if is_loading.get() {
                    "⏳ Fetching dataset..."
                } else {
                    "Fetch from URL"
                }}
            </button>
        </div>
    }
}
