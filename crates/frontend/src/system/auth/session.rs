use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Login required")]
    NotAuthenticated,
    #[error("Session expired, please sign in again")]
    Expired,
    #[error("No access token for audience {0}")]
    AudienceMismatch(String),
    #[error("Sign-in was rejected: {0}")]
    Rejected(String),
    #[error("Could not redirect to the identity provider: {0}")]
    Redirect(String),
    #[error("Session storage unavailable: {0}")]
    Storage(String),
}

/// Source of the user's session and access credentials
///
/// The portal never talks to the identity provider directly. Any provider
/// able to answer these four calls can back the upload form.
#[async_trait(?Send)]
pub trait SessionProvider {
    fn is_authenticated(&self) -> bool;

    /// Start a session. Browser providers usually leave the page here.
    fn begin_session(&self) -> Result<(), SessionError>;

    fn end_session(&self) -> Result<(), SessionError>;

    /// Short-lived bearer token accepted by `audience`
    async fn get_credential(&self, audience: &str) -> Result<String, SessionError>;
}
