//! Upload request shape.
//!
//! The request is a `multipart/form-data` body with a single part named
//! [`FILE_FIELD`], posted to [`UPLOAD_PATH`] with a bearer `Authorization`
//! header.

/// Path of the upload endpoint relative to the API base URL
pub const UPLOAD_PATH: &str = "/api/upload";

/// Multipart field carrying the file contents
pub const FILE_FIELD: &str = "file";

/// Build the absolute upload URL from the API base URL
///
/// A trailing `/` on the base is ignored so `https://api.example.com/` and
/// `https://api.example.com` produce the same URL.
pub fn upload_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), UPLOAD_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_url() {
        assert_eq!(
            upload_url("https://api.example.com"),
            "https://api.example.com/api/upload"
        );
        assert_eq!(
            upload_url("https://api.example.com/"),
            "https://api.example.com/api/upload"
        );
        assert_eq!(upload_url("http://localhost:5000"), "http://localhost:5000/api/upload");
    }
}
