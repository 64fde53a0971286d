//! File Upload - HTTP transport

use async_trait::async_trait;
use contracts::usecases::u001_file_upload::{UploadErrorBody, UploadResponse, FILE_FIELD};
use gloo_net::http::Request;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::FormData;

use crate::system::auth::session::SessionError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error(transparent)]
    Session(#[from] SessionError),
    /// The request never got a response (CORS, offline, DNS...)
    #[error("{0}")]
    Network(String),
    #[error("Request failed with status code {status}")]
    Server { status: u16, message: Option<String> },
    /// The request could not be built
    #[error("{0}")]
    Request(String),
}

impl UploadError {
    /// Text shown after the "Upload failed: " prefix
    ///
    /// The server supplied message when there is one, the error text otherwise.
    pub fn display_reason(&self) -> String {
        match self {
            UploadError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// A picked file that can be named in logs
pub trait UploadFile {
    fn file_name(&self) -> String;
}

impl UploadFile for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }
}

/// Sends one file to the upload endpoint
#[async_trait(?Send)]
pub trait UploadTransport {
    type File;

    async fn post_file(
        &self,
        url: &str,
        bearer: &str,
        file: &Self::File,
    ) -> Result<UploadResponse, UploadError>;
}

/// Browser `fetch` transport sending `multipart/form-data`
///
/// The `Content-Type` header (with its boundary) is left to the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl UploadTransport for FetchTransport {
    type File = web_sys::File;

    async fn post_file(
        &self,
        url: &str,
        bearer: &str,
        file: &web_sys::File,
    ) -> Result<UploadResponse, UploadError> {
        let form_data = FormData::new().map_err(|e| UploadError::Request(js_error_text(&e)))?;
        form_data
            .append_with_blob_and_filename(FILE_FIELD, file, &file.name())
            .map_err(|e| UploadError::Request(js_error_text(&e)))?;

        let response = Request::post(url)
            .header("Authorization", &format!("Bearer {}", bearer))
            .header("Accept", "application/json")
            .body(form_data)
            .map_err(|e| UploadError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| UploadError::Network(e.to_string()))?;

        // An unreadable body is treated like an empty one
        let text = response.text().await.unwrap_or_default();

        if response.ok() {
            Ok(parse_success(&text))
        } else {
            Err(parse_failure(response.status(), &text))
        }
    }
}

/// Body of a 2xx response; anything but a JSON object means "no message"
pub fn parse_success(text: &str) -> UploadResponse {
    serde_json::from_str(text).unwrap_or_default()
}

/// Error for a non-2xx response, keeping the server message if it sent one
pub fn parse_failure(status: u16, text: &str) -> UploadError {
    let body: UploadErrorBody = serde_json::from_str(text).unwrap_or_default();
    UploadError::Server {
        status,
        message: body.reason().map(str::to_string),
    }
}

fn js_error_text(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success() {
        assert_eq!(parse_success(r#"{"message":"ok"}"#).message.as_deref(), Some("ok"));
        assert_eq!(parse_success(""), UploadResponse::default());
        assert_eq!(parse_success("<html>Created</html>"), UploadResponse::default());
    }

    #[test]
    fn test_parse_failure_with_message() {
        let error = parse_failure(413, r#"{"message":"too large"}"#);
        assert_eq!(
            error,
            UploadError::Server {
                status: 413,
                message: Some("too large".to_string())
            }
        );
        assert_eq!(error.display_reason(), "too large");
    }

    #[test]
    fn test_parse_failure_uses_message_only() {
        let error = parse_failure(400, r#"{"error":"File type not allowed"}"#);
        assert_eq!(error.display_reason(), "Request failed with status code 400");

        let error = parse_failure(413, r#"{"message":" too large "}"#);
        assert_eq!(error.display_reason(), " too large ");
    }

    #[test]
    fn test_parse_failure_without_body() {
        let error = parse_failure(502, "Bad Gateway");
        assert_eq!(error.display_reason(), "Request failed with status code 502");
    }

    #[test]
    fn test_display_reason_generic() {
        assert_eq!(
            UploadError::Network("Failed to fetch".to_string()).display_reason(),
            "Failed to fetch"
        );
        assert_eq!(
            UploadError::from(SessionError::NotAuthenticated).display_reason(),
            "Login required"
        );
    }
}
