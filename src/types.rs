//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Upload Types** - Upload widget state and URL-mode payloads
//! - **Preview Types** - Backend preview response structures
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

// =============================================================================
// Upload Types
// =============================================================================

/// Which upload path is currently shown in the upload widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadTab {
    /// Local file via drag & drop or the file picker.
    File,
    /// Remote dataset fetched by the backend from a URL.
    Url,
}

/// Visual state of the drop surface.
///
/// Derived from drag events while a drag is in progress; mapped to CSS
/// classes through [`DropZoneState::css_class`] rather than ad-hoc string
/// building.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropZoneState {
    /// No drag in progress.
    Idle,
    /// A drag is hovering and the payload looks acceptable.
    DragAccept,
    /// A drag is hovering but the payload will be rejected.
    DragReject,
}

impl DropZoneState {
    /// Get CSS class for styling the drop surface.
    pub fn css_class(&self) -> &'static str {
        match self {
            DropZoneState::Idle => "drop-zone-idle",
            DropZoneState::DragAccept => "drop-zone-accept",
            DropZoneState::DragReject => "drop-zone-reject",
        }
    }
}

/// Options attached to a URL-mode upload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UrlUploadOptions {
    /// Whether the first row of the remote dataset is a header row.
    pub has_header: bool,
    /// Fetch only a sample of the remote dataset instead of the whole file.
    pub sample_only: bool,
}

impl Default for UrlUploadOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            sample_only: false,
        }
    }
}

/// Payload produced by the URL-mode sub-widget.
///
/// An explicit tagged structure instead of an opaque blob; the URL is
/// validated by [`crate::validation::validate_url`] before this is built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UrlUploadRequest {
    /// Remote location of the dataset (http/https).
    pub url: String,
    /// Fetch options.
    pub options: UrlUploadOptions,
}

/// Future returned by a URL upload handler.
pub type UrlUploadFuture = Pin<Box<dyn Future<Output = AppResult<()>>>>;

/// Async handler invoked with the URL-mode payload.
///
/// `Rc` because the handler is shared between the upload widget and the
/// URL sub-widget; futures are not `Send` since everything runs on the
/// single-threaded WASM event loop.
pub type UrlUploadHandler = Rc<dyn Fn(UrlUploadRequest) -> UrlUploadFuture>;

// =============================================================================
// Preview Types
// =============================================================================

/// Name and inferred dtype of a single dataset column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
    /// Column name as it appears in the file.
    pub name: String,
    /// Pandas-style dtype string ("int64", "object", ...).
    pub dtype: String,
}

/// Response from the backend `/api/preview` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PreviewResponse {
    /// All detected columns with their dtypes.
    pub columns: Vec<ColumnInfo>,
    /// Columns holding mixed types that need a cleaning decision.
    pub mixed_columns: Vec<String>,
    /// First rows of the dataset, one JSON object per row keyed by column.
    pub sample_rows: Vec<serde_json::Value>,
    /// Number of rows read for the preview.
    pub total_rows: usize,
    /// Whether the user must decide how to handle mixed columns.
    pub requires_decisions: bool,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// File or URL upload failed.
    Upload(String),
    /// Network/HTTP error.
    Network(String),
    /// Invalid input.
    Validation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Upload(msg) => write!(f, "Upload error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_zone_state_css_classes_are_distinct() {
        let classes = [
            DropZoneState::Idle.css_class(),
            DropZoneState::DragAccept.css_class(),
            DropZoneState::DragReject.css_class(),
        ];
        assert_eq!(classes[0], "drop-zone-idle");
        assert_ne!(classes[0], classes[1]);
        assert_ne!(classes[1], classes[2]);
        assert_ne!(classes[0], classes[2]);
    }

    #[test]
    fn url_request_serializes_with_explicit_fields() {
        let request = UrlUploadRequest {
            url: "https://example.com/data.csv".to_string(),
            options: UrlUploadOptions::default(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["url"], "https://example.com/data.csv");
        assert_eq!(json["options"]["has_header"], true);
        assert_eq!(json["options"]["sample_only"], false);
    }

    #[test]
    fn app_error_display_includes_context() {
        let err = AppError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }
}
