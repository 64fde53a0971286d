use serde::{Deserialize, Serialize};

/// Body of a successful upload response
///
/// Every field is optional: the portal only relies on `message`, the rest is
/// informational and may be absent depending on the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub file_id: Option<i64>,
}

/// Body of a failed upload response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl UploadErrorBody {
    /// Server supplied reason, exactly as sent; an empty string counts as none
    pub fn reason(&self) -> Option<&str> {
        self.message.as_deref().filter(|s| !s.is_empty())
    }
}
