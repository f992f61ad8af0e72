//! Local input validation for the upload widget.
//!
//! All checks here are pure so they can be unit tested without a browser.
//! The upload component converts `web_sys::File` handles into
//! [`FileCandidate`]s and decides what to do from the returned
//! [`DropOutcome`]; no partial acceptance exists, a batch is forwarded
//! whole or rejected whole.

use crate::config::{ALLOWED_EXTENSIONS, ALLOWED_MIME_TYPES, MAX_FILE_SIZE};
use crate::types::DropZoneState;

/// Metadata of one file in a drop batch.
///
/// Extracted from `web_sys::File` before validation so the filter logic
/// stays independent of the DOM.
#[derive(Clone, Debug, PartialEq)]
pub struct FileCandidate {
    /// File name including extension.
    pub name: String,
    /// Browser-reported MIME type; often empty for CSV on some platforms.
    pub mime: String,
    /// File size in bytes.
    pub size: u64,
}

impl From<&web_sys::File> for FileCandidate {
    fn from(file: &web_sys::File) -> Self {
        Self {
            name: file.name(),
            mime: file.type_(),
            size: file.size() as u64,
        }
    }
}

/// Result of evaluating a drop batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// Forward the file at this index to the upload callback.
    Forward(usize),
    /// Reject the whole batch and show the generic error message.
    Rejected,
    /// Nothing was dropped; no error, no callback.
    Empty,
}

fn has_allowed_extension(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        ALLOWED_EXTENSIONS
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ext))
    })
}

fn has_allowed_mime(mime: &str) -> bool {
    ALLOWED_MIME_TYPES.iter().any(|allowed| *allowed == mime)
}

/// Whether a single file passes the type and size filter.
pub fn is_accepted(candidate: &FileCandidate) -> bool {
    (has_allowed_extension(&candidate.name) || has_allowed_mime(&candidate.mime))
        && candidate.size <= MAX_FILE_SIZE
}

/// Evaluate a drop batch against the accepted-file policy.
///
/// Exactly one file per attempt: multi-file drops are rejected as a whole,
/// as is a single file with a wrong type or a size above the limit.
pub fn evaluate_drop(batch: &[FileCandidate]) -> DropOutcome {
    if batch.is_empty() {
        return DropOutcome::Empty;
    }
    if batch.len() > 1 {
        return DropOutcome::Rejected;
    }
    if batch.iter().any(|candidate| !is_accepted(candidate)) {
        return DropOutcome::Rejected;
    }
    match batch.iter().position(is_accepted) {
        Some(index) => DropOutcome::Forward(index),
        None => DropOutcome::Rejected,
    }
}

/// Classify an in-progress drag from the MIME types the browser exposes.
///
/// File names and sizes are not visible until the drop happens, so this
/// only rejects what is provably wrong: more than one item, or an item
/// with a known-bad type. An empty type string stays acceptable since
/// browsers routinely hide types mid-drag.
pub fn classify_drag(types: &[String]) -> DropZoneState {
    if types.len() > 1 {
        return DropZoneState::DragReject;
    }
    let known_bad = types
        .iter()
        .any(|mime| !mime.is_empty() && !has_allowed_mime(mime));
    if known_bad {
        DropZoneState::DragReject
    } else {
        DropZoneState::DragAccept
    }
}

/// Validate a URL-mode input before building the request payload.
///
/// Only http/https with a non-empty host are accepted; everything else
/// gets a field-level message for the sub-widget to display.
pub fn validate_url(raw: &str) -> Result<(), String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Please enter a URL".to_string());
    }
    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .ok_or_else(|| "URL must start with http:// or https://".to_string())?;
    let host = rest.split('/').next().unwrap_or("");
    if host.is_empty() {
        return Err("URL is missing a host".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv(size: u64) -> FileCandidate {
        FileCandidate {
            name: "dataset.csv".to_string(),
            mime: "text/csv".to_string(),
            size,
        }
    }

    #[test]
    fn single_valid_csv_is_forwarded() {
        assert_eq!(evaluate_drop(&[csv(1024)]), DropOutcome::Forward(0));
    }

    #[test]
    fn two_files_are_rejected_as_a_whole() {
        assert_eq!(evaluate_drop(&[csv(1024), csv(2048)]), DropOutcome::Rejected);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let candidate = FileCandidate {
            name: "notes.txt".to_string(),
            mime: "text/plain".to_string(),
            size: 10,
        };
        assert_eq!(evaluate_drop(&[candidate]), DropOutcome::Rejected);
    }

    #[test]
    fn oversized_file_is_rejected_like_a_bad_type() {
        assert_eq!(
            evaluate_drop(&[csv(MAX_FILE_SIZE + 1)]),
            DropOutcome::Rejected
        );
        // Exactly at the limit is still fine.
        assert_eq!(evaluate_drop(&[csv(MAX_FILE_SIZE)]), DropOutcome::Forward(0));
    }

    #[test]
    fn empty_batch_does_nothing() {
        assert_eq!(evaluate_drop(&[]), DropOutcome::Empty);
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let candidate = FileCandidate {
            name: "EXPORT.XLSX".to_string(),
            mime: String::new(),
            size: 500,
        };
        assert_eq!(evaluate_drop(&[candidate]), DropOutcome::Forward(0));
    }

    #[test]
    fn mime_alone_is_enough_when_extension_is_missing() {
        let candidate = FileCandidate {
            name: "dataset".to_string(),
            mime: "application/vnd.ms-excel".to_string(),
            size: 500,
        };
        assert_eq!(evaluate_drop(&[candidate]), DropOutcome::Forward(0));
    }

    #[test]
    fn drag_with_unknown_type_is_not_rejected() {
        assert_eq!(
            classify_drag(&[String::new()]),
            DropZoneState::DragAccept
        );
        assert_eq!(classify_drag(&[]), DropZoneState::DragAccept);
    }

    #[test]
    fn drag_with_bad_type_or_extra_items_is_rejected() {
        assert_eq!(
            classify_drag(&["image/png".to_string()]),
            DropZoneState::DragReject
        );
        assert_eq!(
            classify_drag(&["text/csv".to_string(), "text/csv".to_string()]),
            DropZoneState::DragReject
        );
    }

    #[test]
    fn url_validation_accepts_http_and_https() {
        assert!(validate_url("https://example.com/data.csv").is_ok());
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("  https://example.com  ").is_ok());
    }

    #[test]
    fn url_validation_rejects_bad_input() {
        assert!(validate_url("").is_err());
        assert!(validate_url("   ").is_err());
        assert!(validate_url("ftp://example.com/data.csv").is_err());
        assert!(validate_url("example.com/data.csv").is_err());
        assert!(validate_url("https:///data.csv").is_err());
    }
}
