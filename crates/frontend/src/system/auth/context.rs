use leptos::prelude::*;
use std::rc::Rc;

use super::redirect::RedirectSession;
use super::session::{SessionError, SessionProvider};
use crate::shared::config::AuthConfig;

/// Session handle shared with the component tree
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub is_authenticated: RwSignal<bool>,
    /// Last session error worth showing (rejected sign-in, failed redirect)
    pub error: RwSignal<Option<String>>,
    session: StoredValue<Rc<dyn SessionProvider>, LocalStorage>,
}

impl AuthContext {
    pub fn new(session: Rc<dyn SessionProvider>) -> Self {
        Self {
            is_authenticated: RwSignal::new(session.is_authenticated()),
            error: RwSignal::new(None),
            session: StoredValue::new_local(session),
        }
    }

    pub fn session(&self) -> Rc<dyn SessionProvider> {
        self.session.get_value()
    }

    pub fn sign_in(&self) {
        self.error.set(None);
        if let Err(e) = self.session().begin_session() {
            log::error!("Sign-in failed: {}", e);
            self.error.set(Some(e.to_string()));
        }
    }

    /// Re-read the session after it may have lapsed (token expiry)
    pub fn refresh(&self) {
        let authenticated = self.session().is_authenticated();
        if self.is_authenticated.get_untracked() && !authenticated {
            log::info!("Session lapsed, showing sign-in again");
            self.error.set(Some(SessionError::Expired.to_string()));
        }
        self.is_authenticated.set(authenticated);
    }

    pub fn sign_out(&self) {
        let result = self.session().end_session();
        self.is_authenticated.set(false);
        if let Err(e) = result {
            log::error!("Sign-out failed: {}", e);
            self.error.set(Some(e.to_string()));
        }
    }
}

/// Auth context provider component
///
/// Finishes a pending sign-in redirect before the children render, so the
/// upload form shows up right after the provider sends the user back.
#[component]
pub fn AuthProvider(config: AuthConfig, children: ChildrenFn) -> impl IntoView {
    let session = RedirectSession::new(config);
    let callback_error = match session.complete_redirect() {
        Ok(_) => None,
        Err(e) => {
            log::error!("Sign-in callback rejected: {}", e);
            Some(e.to_string())
        }
    };

    let auth = AuthContext::new(Rc::new(session));
    auth.error.set(callback_error);
    provide_context(auth);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::Cell;

    struct ExpiringSession {
        authenticated: Cell<bool>,
    }

    #[async_trait(?Send)]
    impl SessionProvider for ExpiringSession {
        fn is_authenticated(&self) -> bool {
            self.authenticated.get()
        }

        fn begin_session(&self) -> Result<(), SessionError> {
            Ok(())
        }

        fn end_session(&self) -> Result<(), SessionError> {
            Ok(())
        }

        async fn get_credential(&self, _audience: &str) -> Result<String, SessionError> {
            Err(SessionError::Expired)
        }
    }

    #[test]
    fn test_refresh_follows_session() {
        let session = Rc::new(ExpiringSession {
            authenticated: Cell::new(true),
        });
        let auth = AuthContext::new(session.clone());
        assert!(auth.is_authenticated.get_untracked());

        auth.refresh();
        assert!(auth.is_authenticated.get_untracked());
        assert_eq!(auth.error.get_untracked(), None);

        session.authenticated.set(false);
        auth.refresh();
        assert!(!auth.is_authenticated.get_untracked());
        assert_eq!(
            auth.error.get_untracked().as_deref(),
            Some("Session expired, please sign in again")
        );
    }

    #[test]
    fn test_refresh_when_already_signed_out() {
        let session = Rc::new(ExpiringSession {
            authenticated: Cell::new(false),
        });
        let auth = AuthContext::new(session);

        auth.refresh();
        assert!(!auth.is_authenticated.get_untracked());
        assert_eq!(auth.error.get_untracked(), None);
    }
}
