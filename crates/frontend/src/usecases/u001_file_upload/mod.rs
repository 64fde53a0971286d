//! File Upload UI Module (MVVM Standard)
//!
//! Structure:
//! - form.rs: UploadForm state machine and status messages
//! - api.rs: UploadTransport and the fetch based implementation
//! - model.rs: submission flow tying session, transport and form together
//! - view_model.rs: UploadFormVm with RwSignals
//! - view.rs: Main component FileUploadPage

pub mod api;
pub mod form;
pub mod model;
mod view;
mod view_model;

pub use view::FileUploadPage;
pub use view_model::UploadFormVm;
