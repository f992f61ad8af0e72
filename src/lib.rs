//! DataPolish - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading CSV/Excel datasets and previewing
//! them before cleaning and analysis.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (processing status)                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (file tab / URL tab, step guide)         │
//! │  └── PreviewSection (when a dataset is loaded)              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (upload state, preview response, errors)
//! - [`validation`] - Pure accepted-file and URL checks
//! - [`components`] - UI components (Header, Upload, Preview, etc.)
//! - [`services`] - Backend communication (preview endpoints)

use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Upload
    DropZoneState, UploadTab, UrlUploadHandler, UrlUploadOptions, UrlUploadRequest,
    // Preview
    ColumnInfo, PreviewResponse,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 DataPolish - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
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
    // Global state for the application
    let (preview, set_preview) = create_signal(None::<PreviewResponse>);
    let (is_busy, set_is_busy) = create_signal(false);
    let (status_error, set_status_error) = create_signal(None::<String>);

    // File path: the widget hands over one accepted file, we upload it and
    // show the preview when the backend answers.
    let on_file_upload = Callback::new(move |file: web_sys::File| {
        set_status_error.set(None);
        spawn_local(async move {
            set_is_busy.set(true);
            log::info!("📤 Uploading {} for preview...", file.name());
            match upload_preview(&file).await {
                Ok(response) => {
                    log::info!(
                        "✅ Preview ready: {} rows, {} columns",
                        response.total_rows,
                        response.columns.len()
                    );
                    set_preview.set(Some(response));
                }
                Err(e) => {
                    log::error!("❌ Upload failed: {}", e);
                    set_status_error.set(Some(e.to_string()));
                }
            }
            set_is_busy.set(false);
        });
    });

    // URL path: awaited by the widget so its loading flag brackets the whole
    // round trip; errors flow back to the URL sub-widget.
    let url_handler: UrlUploadHandler = Rc::new(move |request: UrlUploadRequest| {
        Box::pin(async move {
            set_is_busy.set(true);
            log::info!("📤 Requesting preview for {}", request.url);
            let result = upload_preview_url(&request).await;
            set_is_busy.set(false);
            let response = result?;
            log::info!("✅ Preview ready from URL: {} rows", response.total_rows);
            set_preview.set(Some(response));
            Ok(())
        })
    });

    view! {
        <Header is_busy=is_busy/>

        <div class="container">
            <Hero/>

            // Upload widget until a dataset is loaded
            <Show
                when=move || preview.get().is_none()
                fallback=|| view! { }
            >
                <UploadSection
                    on_file_upload=on_file_upload
                    on_url_upload=url_handler.clone()
                />

                <Show
                    when=move || status_error.get().is_some()
                    fallback=|| view! { }
                >
                    <div class="status-error">
                        {move || status_error.get().unwrap_or_default()}
                    </div>
                </Show>
            </Show>

            // Preview section (renders nothing while no dataset is loaded)
            <PreviewSection data=preview set_data=set_preview/>
        </div>

        <Footer/>
    }
}
