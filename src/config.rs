//! Application configuration.
//!
//! Centralized configuration for the DataPolish frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Backend API base URL.
///
/// The DataPolish backend server for dataset preview and cleaning.
pub const BACKEND_URL: &str = "http://localhost:5000";

/// Application name.
///
/// Used for the document title and header branding.
pub const APP_NAME: &str = "DataPolish";

/// Maximum file size for upload (in bytes).
///
/// 50 MiB limit.
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// File extensions the upload widget accepts, lowercase, without the dot.
pub const ALLOWED_EXTENSIONS: &[&str] = &["csv", "xls", "xlsx"];

/// MIME types the upload widget accepts, matching [`ALLOWED_EXTENSIONS`].
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "text/csv",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
];

/// Generic message shown when a drop attempt is rejected.
///
/// The same message covers wrong type, wrong count and oversized files.
pub const INVALID_FILE_MESSAGE: &str = "Please upload a valid CSV or Excel file";

/// Number of sample rows shown in the preview table.
pub const MAX_SAMPLE_ROWS: usize = 10;
