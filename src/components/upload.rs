//! Dataset upload widget with drag & drop, file picker and URL mode.
//!
//! The widget validates drops locally (type, count, size) and hands an
//! accepted file to the parent through `on_file_upload`; it never uploads
//! anything itself. URL-mode submissions go through an optional async
//! handler with a loading flag that is reset no matter how the handler
//! settles.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::components::url_upload::UrlUpload;
use crate::config::INVALID_FILE_MESSAGE;
use crate::types::{
    AppResult, DropZoneState, UploadTab, UrlUploadHandler, UrlUploadRequest,
};
use crate::validation::{classify_drag, evaluate_drop, DropOutcome, FileCandidate};

/// Run one URL submission with guaranteed-release loading semantics.
///
/// The flag goes up before the handler is invoked and comes back down after
/// it settles, on the success and the error path alike. A missing handler
/// still toggles the flag and resolves to `Ok(())`. The handler's error is
/// returned to the caller untouched.
pub async fn submit_url(
    handler: Option<UrlUploadHandler>,
    request: UrlUploadRequest,
    set_loading: impl Fn(bool),
) -> AppResult<()> {
    set_loading(true);
    let result = match handler {
        Some(handler) => handler(request).await,
        None => Ok(()),
    };
    set_loading(false);
    result
}

fn file_list_to_vec(list: Option<web_sys::FileList>) -> Vec<File> {
    let mut files = Vec::new();
    if let Some(list) = list {
        for index in 0..list.length() {
            if let Some(file) = list.get(index) {
                files.push(file);
            }
        }
    }
    files
}

#[component]
pub fn UploadSection(
    /// Called with exactly one accepted file; never called on rejection.
    #[prop(into)]
    on_file_upload: Callback<File>,
    /// Async handler for URL-mode submissions; absent makes them a no-op.
    #[prop(optional)]
    on_url_upload: Option<UrlUploadHandler>,
) -> impl IntoView {
    let (active_tab, set_active_tab) = create_signal(UploadTab::File);
    let (upload_error, set_upload_error) = create_signal(None::<String>);
    let (url_loading, set_url_loading) = create_signal(false);
    let (drag_state, set_drag_state) = create_signal(DropZoneState::Idle);

    // Shared by the drop and file-picker paths: every attempt starts by
    // clearing the previous error, then the batch is forwarded whole or
    // rejected whole.
    let process_batch = move |files: Vec<File>| {
        set_upload_error.set(None);
        let batch: Vec<FileCandidate> = files.iter().map(FileCandidate::from).collect();
        match evaluate_drop(&batch) {
            DropOutcome::Forward(index) => {
                log::info!("📄 Accepted file: {}", batch[index].name);
                on_file_upload.call(files[index].clone());
            }
            DropOutcome::Rejected => {
                log::warn!("⚠️ Drop rejected ({} file(s))", batch.len());
                set_upload_error.set(Some(INVALID_FILE_MESSAGE.to_string()));
            }
            DropOutcome::Empty => {}
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_state.set(DropZoneState::Idle);
        let files = ev
            .data_transfer()
            .map(|dt| file_list_to_vec(dt.files()))
            .unwrap_or_default();
        process_batch(files);
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        let state = ev
            .data_transfer()
            .map(|dt| {
                let items = dt.items();
                let types: Vec<String> = (0..items.length())
                    .filter_map(|index| items.get(index))
                    .map(|item| item.type_())
                    .collect();
                classify_drag(&types)
            })
            .unwrap_or(DropZoneState::DragAccept);
        set_drag_state.set(state);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_state.set(DropZoneState::Idle);
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        process_batch(file_list_to_vec(input.files()));
        // Allow picking the same file again
        input.set_value("");
    };

    // Click anywhere on the drop surface opens the file picker
    let trigger_file_input = move |_| {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(input) = document.get_element_by_id("fileInput") {
                    if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                        html_input.click();
                    }
                }
            }
        }
    };

    // Wrap the parent handler so the loading flag toggles around every
    // submission; the sub-widget awaits this and surfaces any error.
    let handler = on_url_upload.clone();
    let handle_url_submit: UrlUploadHandler = std::rc::Rc::new(move |request: UrlUploadRequest| {
        let handler = handler.clone();
        Box::pin(async move {
            submit_url(handler, request, move |loading| {
                set_url_loading.set(loading)
            })
            .await
        })
    });

    view! {
        <div class="card upload-card">
            <div class="upload-intro">
                <h2>"Upload Your Dataset"</h2>
                <p>"Upload your dataset file or provide a URL for large files"</p>
            </div>

            <div class="upload-tabs">
                <button
                    class="upload-tab"
                    class:active=move || active_tab.get() == UploadTab::File
                    on:click=move |_| set_active_tab.set(UploadTab::File)
                >
                    "Upload File"
                </button>
                <button
                    class="upload-tab"
                    class:active=move || active_tab.get() == UploadTab::Url
                    on:click=move |_| set_active_tab.set(UploadTab::Url)
                >
                    "From URL"
                </button>
            </div>

            {move || match active_tab.get() {
                UploadTab::File => view! {
                    <div
                        class=move || format!("drop-zone {}", drag_state.get().css_class())
                        on:click=trigger_file_input
                        on:dragover=on_drag_over
                        on:dragleave=on_drag_leave
                        on:drop=on_drop
                    >
                        <div class="drop-zone-icon">"📤"</div>
                        {move || match drag_state.get() {
                            DropZoneState::DragReject => view! {
                                <p class="drop-zone-text reject">"Invalid file type"</p>
                            }.into_view(),
                            DropZoneState::DragAccept => view! {
                                <p class="drop-zone-text accept">"Drop your file here"</p>
                            }.into_view(),
                            DropZoneState::Idle => view! {
                                <p class="drop-zone-text">
                                    "Drag & drop your file here, or click to browse"
                                </p>
                                <p class="drop-zone-hint">
                                    "Supports CSV, XLS, XLSX files up to 50MB"
                                </p>
                            }.into_view(),
                        }}

                        <input
                            type="file"
                            id="fileInput"
                            accept=".csv,.xls,.xlsx"
                            style="display:none"
                            on:change=on_file_change
                            // Programmatic clicks bubble back to the surface
                            on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                        />
                    </div>
                }.into_view(),
                UploadTab::Url => view! {
                    <UrlUpload
                        on_submit=handle_url_submit.clone()
                        is_loading=url_loading
                    />
                }.into_view(),
            }}

            // Tab switches never clear this; only the next drop attempt does
            <Show
                when=move || upload_error.get().is_some()
                fallback=|| view! { }
            >
                <div class="error-message">
                    {move || upload_error.get().unwrap_or_default()}
                </div>
            </Show>

            <div class="step-guide">
                <StepCard number=1 title="Upload" text="Select file or provide URL"/>
                <StepCard number=2 title="Configure" text="Set processing options"/>
                <StepCard number=3 title="Analyze" text="Get insights & reports"/>
            </div>
        </div>
    }
}

/// One entry of the static Upload → Configure → Analyze guide.
#[component]
fn StepCard(number: u8, title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="step-card">
            <div class="step-number">{number}</div>
            <h3 class="step-title">{title}</h3>
            <p class="step-text">{text}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AppError, UrlUploadOptions};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn request() -> UrlUploadRequest {
        UrlUploadRequest {
            url: "https://example.com/data.csv".to_string(),
            options: UrlUploadOptions::default(),
        }
    }

    #[tokio::test]
    async fn loading_flag_wraps_a_resolving_handler() {
        let loading = Rc::new(Cell::new(false));
        let seen_during_handler = Rc::new(Cell::new(false));

        let loading_in_handler = loading.clone();
        let seen = seen_during_handler.clone();
        let handler: UrlUploadHandler = Rc::new(move |_request| {
            let loading = loading_in_handler.clone();
            let seen = seen.clone();
            Box::pin(async move {
                seen.set(loading.get());
                Ok(())
            })
        });

        let flag = loading.clone();
        let result = submit_url(Some(handler), request(), move |v| flag.set(v)).await;

        assert_eq!(result, Ok(()));
        assert!(seen_during_handler.get(), "flag must be true while the handler runs");
        assert!(!loading.get(), "flag must reset after the handler resolves");
    }

    #[tokio::test]
    async fn loading_flag_resets_when_the_handler_fails() {
        let transitions = Rc::new(RefCell::new(Vec::new()));

        let handler: UrlUploadHandler = Rc::new(|_request| {
            Box::pin(async { Err(AppError::Upload("boom".to_string())) })
        });

        let recorder = transitions.clone();
        let result = submit_url(Some(handler), request(), move |v| {
            recorder.borrow_mut().push(v)
        })
        .await;

        assert_eq!(result, Err(AppError::Upload("boom".to_string())));
        assert_eq!(*transitions.borrow(), vec![true, false]);
    }

    #[tokio::test]
    async fn missing_handler_still_toggles_the_flag() {
        let transitions = Rc::new(RefCell::new(Vec::new()));

        let recorder = transitions.clone();
        let result = submit_url(None, request(), move |v| recorder.borrow_mut().push(v)).await;

        assert_eq!(result, Ok(()));
        assert_eq!(*transitions.borrow(), vec![true, false]);
    }
}
