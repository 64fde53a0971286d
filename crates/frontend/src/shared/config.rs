//! Portal configuration
//!
//! Values are supplied by the build environment (the bundler exports them
//! before compiling the wasm module) and read with `option_env!`. Required
//! values have no defaults: a missing one is reported as [`ConfigError`] and
//! the app shows a configuration error instead of the form.

use crate::shared::presentation::Presentation;
use thiserror::Error;

pub const API_BASE_URL_KEY: &str = "UPLOAD_PORTAL_API_BASE_URL";
pub const AUTH_DOMAIN_KEY: &str = "UPLOAD_PORTAL_AUTH_DOMAIN";
pub const AUTH_CLIENT_ID_KEY: &str = "UPLOAD_PORTAL_AUTH_CLIENT_ID";
pub const AUTH_AUDIENCE_KEY: &str = "UPLOAD_PORTAL_AUTH_AUDIENCE";
pub const PRESENTATION_KEY: &str = "UPLOAD_PORTAL_PRESENTATION";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing configuration value {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Identity provider settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Tenant host name, without scheme (for example `tenant.eu.auth0.com`)
    pub domain: String,
    pub client_id: String,
    /// Audience the upload API expects in its access tokens
    pub audience: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Base URL of the upload API, without trailing `/`
    pub api_base_url: String,
    pub auth: AuthConfig,
    pub presentation: Presentation,
}

impl PortalConfig {
    /// Load the configuration baked in at build time
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                API_BASE_URL_KEY => option_env!("UPLOAD_PORTAL_API_BASE_URL"),
                AUTH_DOMAIN_KEY => option_env!("UPLOAD_PORTAL_AUTH_DOMAIN"),
                AUTH_CLIENT_ID_KEY => option_env!("UPLOAD_PORTAL_AUTH_CLIENT_ID"),
                AUTH_AUDIENCE_KEY => option_env!("UPLOAD_PORTAL_AUTH_AUDIENCE"),
                PRESENTATION_KEY => option_env!("UPLOAD_PORTAL_PRESENTATION"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    /// Build the configuration from an arbitrary key/value source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let api_base_url = required(API_BASE_URL_KEY)?;
        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                key: API_BASE_URL_KEY,
                value: api_base_url,
            });
        }
        let api_base_url = api_base_url.trim_end_matches('/').to_string();

        let domain = required(AUTH_DOMAIN_KEY)?;
        let domain = domain
            .trim_start_matches("https://")
            .trim_end_matches('/')
            .to_string();
        if domain.is_empty() || domain.contains('/') {
            return Err(ConfigError::Invalid {
                key: AUTH_DOMAIN_KEY,
                value: domain,
            });
        }

        let presentation = match lookup(PRESENTATION_KEY) {
            Some(raw) if !raw.trim().is_empty() => {
                Presentation::parse(raw.trim()).ok_or(ConfigError::Invalid {
                    key: PRESENTATION_KEY,
                    value: raw,
                })?
            }
            _ => Presentation::default(),
        };

        Ok(Self {
            api_base_url,
            auth: AuthConfig {
                domain,
                client_id: required(AUTH_CLIENT_ID_KEY)?,
                audience: required(AUTH_AUDIENCE_KEY)?,
            },
            presentation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn complete() -> Vec<(&'static str, &'static str)> {
        vec![
            (API_BASE_URL_KEY, "https://api.example.com/"),
            (AUTH_DOMAIN_KEY, "tenant.eu.auth0.com"),
            (AUTH_CLIENT_ID_KEY, "client-123"),
            (AUTH_AUDIENCE_KEY, "https://upload-api"),
        ]
    }

    #[test]
    fn test_complete_config_loads() {
        let config = PortalConfig::from_lookup(env(&complete())).unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.auth.domain, "tenant.eu.auth0.com");
        assert_eq!(config.auth.client_id, "client-123");
        assert_eq!(config.auth.audience, "https://upload-api");
        assert_eq!(config.presentation, Presentation::Classes);
    }

    #[test]
    fn test_missing_values_have_no_defaults() {
        for key in [
            API_BASE_URL_KEY,
            AUTH_DOMAIN_KEY,
            AUTH_CLIENT_ID_KEY,
            AUTH_AUDIENCE_KEY,
        ] {
            let pairs: Vec<_> = complete().into_iter().filter(|(k, _)| *k != key).collect();
            assert_eq!(
                PortalConfig::from_lookup(env(&pairs)),
                Err(ConfigError::Missing(key))
            );
        }
    }

    #[test]
    fn test_blank_value_is_missing() {
        let mut pairs = complete();
        pairs[2] = (AUTH_CLIENT_ID_KEY, "   ");
        assert_eq!(
            PortalConfig::from_lookup(env(&pairs)),
            Err(ConfigError::Missing(AUTH_CLIENT_ID_KEY))
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let mut pairs = complete();
        pairs[0] = (API_BASE_URL_KEY, "api.example.com");
        assert!(matches!(
            PortalConfig::from_lookup(env(&pairs)),
            Err(ConfigError::Invalid { key: API_BASE_URL_KEY, .. })
        ));
    }

    #[test]
    fn test_domain_scheme_is_stripped() {
        let mut pairs = complete();
        pairs[1] = (AUTH_DOMAIN_KEY, "https://tenant.eu.auth0.com/");
        let config = PortalConfig::from_lookup(env(&pairs)).unwrap();
        assert_eq!(config.auth.domain, "tenant.eu.auth0.com");
    }

    #[test]
    fn test_presentation_selection() {
        let mut pairs = complete();
        pairs.push((PRESENTATION_KEY, "inline"));
        let config = PortalConfig::from_lookup(env(&pairs)).unwrap();
        assert_eq!(config.presentation, Presentation::Inline);

        let mut pairs = complete();
        pairs.push((PRESENTATION_KEY, "fancy"));
        assert!(matches!(
            PortalConfig::from_lookup(env(&pairs)),
            Err(ConfigError::Invalid { key: PRESENTATION_KEY, .. })
        ));
    }
}
