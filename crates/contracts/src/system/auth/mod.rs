use serde::{Deserialize, Serialize};

/// Token grant returned by the identity provider in the redirect URL fragment
///
/// `#access_token=...&token_type=Bearer&expires_in=86400&state=...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImplicitGrant {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime in seconds
    pub expires_in: u64,
    #[serde(default)]
    pub scope: Option<String>,
    pub state: String,
}

/// Error returned by the identity provider in the redirect URL fragment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorizeError {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}
