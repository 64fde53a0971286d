//! Authentication
//!
//! - session.rs: `SessionProvider` interface the portal depends on
//! - redirect.rs: identity provider adapter based on the browser redirect flow
//! - storage.rs: token persistence in web storage
//! - context.rs: `AuthProvider` component and `use_auth` hook
//! - guard.rs: `RequireAuth` component

pub mod context;
pub mod guard;
pub mod redirect;
pub mod session;
pub mod storage;
