use contracts::system::auth::ImplicitGrant;
use serde::{Deserialize, Serialize};
use web_sys::window;

use super::session::SessionError;

const ACCESS_TOKEN_KEY: &str = "portal_access_token";
const AUTH_STATE_KEY: &str = "portal_auth_state";

/// Tokens this close to their expiry are no longer handed out
pub const EXPIRY_LEEWAY_SECS: i64 = 30;

/// Access token kept in localStorage between page loads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredToken {
    pub access_token: String,
    pub audience: String,
    /// Unix timestamp in seconds
    pub expires_at: i64,
}

impl StoredToken {
    pub fn from_grant(grant: &ImplicitGrant, audience: &str, now: i64) -> Self {
        let lifetime = i64::try_from(grant.expires_in).unwrap_or(i64::MAX);
        Self {
            access_token: grant.access_token.clone(),
            audience: audience.to_string(),
            expires_at: now.saturating_add(lifetime),
        }
    }

    pub fn is_expired(&self, now: i64) -> bool {
        now.saturating_add(EXPIRY_LEEWAY_SECS) >= self.expires_at
    }

    /// The bearer token, if it may be presented to `audience` at `now`
    pub fn credential_for(&self, audience: &str, now: i64) -> Result<&str, SessionError> {
        if self.audience != audience {
            return Err(SessionError::AudienceMismatch(audience.to_string()));
        }
        if self.is_expired(now) {
            return Err(SessionError::Expired);
        }
        Ok(&self.access_token)
    }
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

/// Save access token to localStorage
pub fn save_token(token: &StoredToken) -> Result<(), SessionError> {
    let storage =
        get_local_storage().ok_or_else(|| SessionError::Storage("localStorage".to_string()))?;
    let json = serde_json::to_string(token).map_err(|e| SessionError::Storage(e.to_string()))?;
    storage
        .set_item(ACCESS_TOKEN_KEY, &json)
        .map_err(|e| SessionError::Storage(format!("{e:?}")))
}

/// Get access token from localStorage
pub fn get_token() -> Option<StoredToken> {
    let json = get_local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()??;
    match serde_json::from_str(&json) {
        Ok(token) => Some(token),
        Err(e) => {
            log::warn!("Discarding unreadable stored token: {}", e);
            clear_tokens();
            None
        }
    }
}

/// Clear all authentication tokens
pub fn clear_tokens() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    }
    if let Some(storage) = get_session_storage() {
        let _ = storage.remove_item(AUTH_STATE_KEY);
    }
}

/// Remember the `state` sent with a sign-in redirect
pub fn save_auth_state(state: &str) -> Result<(), SessionError> {
    let storage =
        get_session_storage().ok_or_else(|| SessionError::Storage("sessionStorage".to_string()))?;
    storage
        .set_item(AUTH_STATE_KEY, state)
        .map_err(|e| SessionError::Storage(format!("{e:?}")))
}

/// Read and forget the `state` of the pending sign-in redirect
pub fn take_auth_state() -> Option<String> {
    let storage = get_session_storage()?;
    let state = storage.get_item(AUTH_STATE_KEY).ok()?;
    let _ = storage.remove_item(AUTH_STATE_KEY);
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grant(expires_in: u64) -> ImplicitGrant {
        ImplicitGrant {
            access_token: "tok".to_string(),
            token_type: Some("Bearer".to_string()),
            expires_in,
            scope: None,
            state: "s".to_string(),
        }
    }

    #[test]
    fn test_from_grant() {
        let token = StoredToken::from_grant(&grant(3600), "https://upload-api", 1_000);
        assert_eq!(token.expires_at, 4_600);
        assert_eq!(token.audience, "https://upload-api");
    }

    #[test]
    fn test_credential_for() {
        let token = StoredToken::from_grant(&grant(3600), "https://upload-api", 1_000);
        assert_eq!(token.credential_for("https://upload-api", 2_000), Ok("tok"));
        assert_eq!(
            token.credential_for("https://other-api", 2_000),
            Err(SessionError::AudienceMismatch("https://other-api".to_string()))
        );
    }

    #[test]
    fn test_expiry_leeway() {
        let token = StoredToken::from_grant(&grant(3600), "a", 1_000);
        assert!(!token.is_expired(4_600 - EXPIRY_LEEWAY_SECS - 1));
        assert!(token.is_expired(4_600 - EXPIRY_LEEWAY_SECS));
        assert_eq!(token.credential_for("a", 4_600), Err(SessionError::Expired));
    }
}
