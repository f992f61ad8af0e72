//! HTTP service for sending datasets to the backend preview endpoint.

use gloo_net::http::{Request, Response};
use web_sys::{File, FormData};

use crate::config::BACKEND_URL;
use crate::types::{AppError, AppResult, PreviewResponse, UrlUploadRequest};

/// Upload a local dataset file and get the preview back.
///
/// Sends the file as multipart form data to `/api/preview`.
pub async fn upload_preview(file: &File) -> AppResult<PreviewResponse> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Upload(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob("file", file)
        .map_err(|e| AppError::Upload(format!("Failed to append file: {:?}", e)))?;

    let url = format!("{}/api/preview", BACKEND_URL);
    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| AppError::Upload(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    parse_preview_response(response).await
}

/// Ask the backend to fetch a remote dataset and preview it.
///
/// Sends the [`UrlUploadRequest`] as JSON to `/api/preview-url`.
pub async fn upload_preview_url(request: &UrlUploadRequest) -> AppResult<PreviewResponse> {
    let url = format!("{}/api/preview-url", BACKEND_URL);
    let response = Request::post(&url)
        .json(request)
        .map_err(|e| AppError::Upload(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    parse_preview_response(response).await
}

/// Turn a backend response into a [`PreviewResponse`] or an error.
///
/// Error bodies are `{"error": "..."}`; fall back to the raw text when the
/// body is not JSON.
async fn parse_preview_response(response: Response) -> AppResult<PreviewResponse> {
    if !response.ok() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| value.get("error")?.as_str().map(str::to_string))
            .unwrap_or(body);
        return Err(AppError::Upload(format!(
            "Server error ({}): {}",
            status, message
        )));
    }

    response
        .json::<PreviewResponse>()
        .await
        .map_err(|e| AppError::Network(format!("Failed to parse response: {}", e)))
}

#[cfg(test)]
mod tests {
    use crate::types::PreviewResponse;

    #[test]
    fn test_preview_deserialization() {
        // Shape returned by the backend /api/preview endpoint
        let json = r#"{
            "columns": [
                {"name": "id", "dtype": "int64"},
                {"name": "city", "dtype": "object"}
            ],
            "mixed_columns": ["city"],
            "sample_rows": [
                {"id": 1, "city": "Lyon"},
                {"id": 2, "city": 69000}
            ],
            "total_rows": 1000,
            "requires_decisions": true
        }"#;

        let response: PreviewResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.columns.len(), 2);
        assert_eq!(response.columns[1].name, "city");
        assert_eq!(response.columns[1].dtype, "object");
        assert_eq!(response.mixed_columns, vec!["city".to_string()]);
        assert_eq!(response.sample_rows.len(), 2);
        assert_eq!(response.total_rows, 1000);
        assert!(response.requires_decisions);
    }
}
