//! File Upload - Model (submission flow)

use contracts::usecases::u001_file_upload::{upload_url, UploadResponse};
use std::cell::RefCell;

use super::api::{UploadError, UploadFile, UploadTransport};
use super::form::UploadForm;
use crate::shared::config::PortalConfig;
use crate::system::auth::session::SessionProvider;

/// Where uploads go and which audience their token must be issued for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    pub url: String,
    pub audience: String,
}

impl UploadTarget {
    pub fn from_config(config: &PortalConfig) -> Self {
        Self {
            url: upload_url(&config.api_base_url),
            audience: config.auth.audience.clone(),
        }
    }
}

/// Somewhere the form state lives between suspension points
///
/// Access is scoped to the closure so no borrow is held across an `.await`.
/// Returns `None` when the state is gone (the view was unmounted).
pub trait FormStore<F> {
    fn with_form<R>(&self, f: impl FnOnce(&mut UploadForm<F>) -> R) -> Option<R>;
}

impl<F> FormStore<F> for RefCell<UploadForm<F>> {
    fn with_form<R>(&self, f: impl FnOnce(&mut UploadForm<F>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Run one submission of the form held in `store`
///
/// Validation failures only update the status line. Otherwise exactly one
/// credential request and one POST are made, and the form is settled once
/// with their outcome. Returns whether a request was issued.
pub async fn submit_upload<F, S, T, St>(
    store: &St,
    session: &S,
    transport: &T,
    target: &UploadTarget,
) -> bool
where
    F: UploadFile + Clone,
    S: SessionProvider + ?Sized,
    T: UploadTransport<File = F> + ?Sized,
    St: FormStore<F> + ?Sized,
{
    let authenticated = session.is_authenticated();
    let Some(file) = store
        .with_form(|form| form.begin_submit(authenticated))
        .flatten()
    else {
        return false;
    };

    log::info!("Uploading {} to {}", file.file_name(), target.url);
    let outcome = send_file(session, transport, target, &file).await;
    match &outcome {
        Ok(response) => log::info!(
            "Upload of {} finished: {:?}",
            file.file_name(),
            response.message
        ),
        Err(e) => log::error!("File upload failed: {:?}", e),
    }

    if store.with_form(|form| form.settle(&outcome)).is_none() {
        log::debug!("Upload form is gone, dropping upload outcome");
    }
    true
}

async fn send_file<F, S, T>(
    session: &S,
    transport: &T,
    target: &UploadTarget,
    file: &F,
) -> Result<UploadResponse, UploadError>
where
    S: SessionProvider + ?Sized,
    T: UploadTransport<File = F> + ?Sized,
{
    let token = session.get_credential(&target.audience).await?;
    transport.post_file(&target.url, &token, file).await
}
