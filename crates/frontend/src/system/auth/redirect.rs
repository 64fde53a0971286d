//! Identity provider adapter using the browser redirect flow.
//!
//! Sign-in sends the whole page to the provider's `/authorize` endpoint and
//! the provider redirects back with the access token in the URL fragment.
//! Tokens are not refreshed silently: once the stored token expires the user
//! signs in again.

use async_trait::async_trait;
use contracts::system::auth::{AuthorizeError, ImplicitGrant};
use uuid::Uuid;

use super::session::{SessionError, SessionProvider};
use super::storage::{self, StoredToken};
use crate::shared::api_utils::{clear_page_fragment, navigate_to, page_fragment, page_origin};
use crate::shared::config::AuthConfig;

const SCOPE: &str = "openid profile email";

/// What the provider put in the fragment of the redirect back to the portal
#[derive(Debug, Clone, PartialEq)]
pub enum RedirectCallback {
    Granted(ImplicitGrant),
    Failed(AuthorizeError),
}

/// Parse a redirect fragment, `None` if it is not a provider callback
pub fn parse_fragment(fragment: &str) -> Option<RedirectCallback> {
    let fragment = fragment.trim_start_matches('#');
    let has_key = |key: &str| {
        fragment
            .split('&')
            .any(|pair| pair.split('=').next() == Some(key))
    };

    if has_key("access_token") {
        match serde_qs::from_str::<ImplicitGrant>(fragment) {
            Ok(grant) => Some(RedirectCallback::Granted(grant)),
            Err(e) => {
                log::warn!("Malformed sign-in callback: {}", e);
                None
            }
        }
    } else if has_key("error") {
        serde_qs::from_str::<AuthorizeError>(fragment)
            .ok()
            .map(RedirectCallback::Failed)
    } else {
        None
    }
}

/// Turn a provider callback into a token to store
///
/// `expected_state` is the value saved before leaving for the provider; a
/// grant carrying any other state is rejected.
pub fn accept_callback(
    callback: RedirectCallback,
    expected_state: Option<&str>,
    audience: &str,
    now: i64,
) -> Result<StoredToken, SessionError> {
    match callback {
        RedirectCallback::Granted(grant) => {
            if expected_state != Some(grant.state.as_str()) {
                return Err(SessionError::Rejected("state mismatch".to_string()));
            }
            Ok(StoredToken::from_grant(&grant, audience, now))
        }
        RedirectCallback::Failed(err) => Err(SessionError::Rejected(
            err.error_description.unwrap_or(err.error),
        )),
    }
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

pub struct RedirectSession {
    config: AuthConfig,
}

impl RedirectSession {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub fn authorize_url(&self, redirect_uri: &str, state: &str) -> String {
        format!(
            "https://{}/authorize?response_type=token&client_id={}&redirect_uri={}&audience={}&scope={}&state={}",
            self.config.domain,
            urlencoding::encode(&self.config.client_id),
            urlencoding::encode(redirect_uri),
            urlencoding::encode(&self.config.audience),
            urlencoding::encode(SCOPE),
            urlencoding::encode(state),
        )
    }

    pub fn logout_url(&self, return_to: &str) -> String {
        format!(
            "https://{}/v2/logout?client_id={}&returnTo={}",
            self.config.domain,
            urlencoding::encode(&self.config.client_id),
            urlencoding::encode(return_to),
        )
    }

    /// Consume a sign-in callback present in the page URL
    ///
    /// Returns `Ok(true)` when a token was stored, `Ok(false)` when the page
    /// was not loaded from a callback.
    pub fn complete_redirect(&self) -> Result<bool, SessionError> {
        let Some(callback) = page_fragment().and_then(|f| parse_fragment(&f)) else {
            return Ok(false);
        };
        clear_page_fragment();

        let expected_state = storage::take_auth_state();
        let token = accept_callback(
            callback,
            expected_state.as_deref(),
            &self.config.audience,
            now(),
        )?;
        storage::save_token(&token)?;
        log::info!("Signed in, token valid until {}", token.expires_at);
        Ok(true)
    }
}

#[async_trait(?Send)]
impl SessionProvider for RedirectSession {
    fn is_authenticated(&self) -> bool {
        storage::get_token().is_some_and(|t| !t.is_expired(now()))
    }

    fn begin_session(&self) -> Result<(), SessionError> {
        let state = Uuid::new_v4().to_string();
        storage::save_auth_state(&state)?;
        log::debug!("Redirecting to {} for sign-in", self.config.domain);
        navigate_to(&self.authorize_url(&page_origin(), &state)).map_err(SessionError::Redirect)
    }

    fn end_session(&self) -> Result<(), SessionError> {
        storage::clear_tokens();
        log::info!("Signed out");
        navigate_to(&self.logout_url(&page_origin())).map_err(SessionError::Redirect)
    }

    async fn get_credential(&self, audience: &str) -> Result<String, SessionError> {
        let token = storage::get_token().ok_or(SessionError::NotAuthenticated)?;
        token.credential_for(audience, now()).map(str::to_string)
    }
}
