//! UI Components for the DataPolish frontend.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with processing status
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - Dataset upload widget (drag & drop, picker, URL tab)
//! - [`UrlUpload`] - URL-mode sub-widget
//! - [`PreviewSection`] - Column and sample-row preview after upload

mod footer;
mod header;
mod hero;
mod preview;
mod upload;
mod url_upload;

pub use footer::*;
pub use header::*;
pub use hero::*;
pub use preview::*;
pub use upload::*;
pub use url_upload::*;
