//! File Upload - form state machine
//!
//! Pure state, no browser types: `F` is whatever handle the view uses for a
//! picked file (`web_sys::File` in the browser).

use contracts::usecases::u001_file_upload::UploadResponse;

use super::api::UploadError;

pub const NO_FILE_SELECTED: &str = "No file selected.";
pub const NOT_LOGGED_IN: &str = "You must be logged in to upload a file.";
pub const UPLOADING: &str = "Uploading...";
pub const UPLOAD_SUCCESSFUL: &str = "Upload successful!";
pub const UPLOAD_FAILED_PREFIX: &str = "Upload failed: ";

/// Lifecycle of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    Selected,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// Status line shown under the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    /// Status for a completed upload: the server message or the default one
    pub fn from_response(response: &UploadResponse) -> Self {
        let text = response
            .message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(UPLOAD_SUCCESSFUL);
        Self::success(text)
    }

    pub fn from_error(error: &UploadError) -> Self {
        Self::error(format!("{}{}", UPLOAD_FAILED_PREFIX, error.display_reason()))
    }
}

#[derive(Debug, Clone)]
pub struct UploadForm<F> {
    file: Option<F>,
    status: Option<StatusMessage>,
    phase: UploadPhase,
}

impl<F> Default for UploadForm<F> {
    fn default() -> Self {
        Self {
            file: None,
            status: None,
            phase: UploadPhase::Idle,
        }
    }
}

impl<F> UploadForm<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    /// In-flight flag
    pub fn is_uploading(&self) -> bool {
        self.phase == UploadPhase::Submitting
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.is_uploading()
    }

    /// Replace the current selection and clear the status line
    ///
    /// Ignored while an upload is in flight.
    pub fn select_file(&mut self, file: Option<F>) {
        if self.is_uploading() {
            return;
        }
        self.phase = if file.is_some() {
            UploadPhase::Selected
        } else {
            UploadPhase::Idle
        };
        self.file = file;
        self.status = None;
    }

    /// Validate a submission and enter `Submitting`
    ///
    /// Returns the file to send, or `None` when nothing must be sent: either
    /// validation failed (the status line says why) or an upload is already
    /// in flight.
    pub fn begin_submit(&mut self, authenticated: bool) -> Option<F>
    where
        F: Clone,
    {
        if self.is_uploading() {
            return None;
        }
        let Some(file) = self.file.clone() else {
            self.status = Some(StatusMessage::error(NO_FILE_SELECTED));
            return None;
        };
        if !authenticated {
            self.status = Some(StatusMessage::error(NOT_LOGGED_IN));
            return None;
        }

        self.phase = UploadPhase::Submitting;
        self.status = Some(StatusMessage::info(UPLOADING));
        Some(file)
    }

    /// Record the outcome of the in-flight upload
    ///
    /// Only the first outcome after `begin_submit` is applied; returns
    /// whether this call settled the form.
    pub fn settle(&mut self, outcome: &Result<UploadResponse, UploadError>) -> bool {
        if !self.is_uploading() {
            return false;
        }
        let (phase, status) = match outcome {
            Ok(response) => (UploadPhase::Succeeded, StatusMessage::from_response(response)),
            Err(error) => (UploadPhase::Failed, StatusMessage::from_error(error)),
        };
        self.phase = phase;
        self.status = Some(status);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected() -> UploadForm<&'static str> {
        let mut form = UploadForm::new();
        form.select_file(Some("report.pdf"));
        form
    }

    #[test]
    fn test_initial_state() {
        let form = UploadForm::<&str>::new();
        assert_eq!(form.phase(), UploadPhase::Idle);
        assert!(form.status().is_none());
        assert!(!form.is_uploading());
        assert!(!form.can_submit());
    }

    #[test]
    fn test_submit_without_file() {
        let mut form = UploadForm::<&str>::new();
        assert_eq!(form.begin_submit(true), None);
        assert_eq!(form.status(), Some(&StatusMessage::error(NO_FILE_SELECTED)));
        assert_eq!(form.phase(), UploadPhase::Idle);
        assert_eq!(form.status().unwrap().text, "No file selected.");
    }

    #[test]
    fn test_submit_not_authenticated() {
        let mut form = selected();
        assert_eq!(form.begin_submit(false), None);
        assert_eq!(
            form.status().unwrap().text,
            "You must be logged in to upload a file."
        );
        assert_eq!(form.status().unwrap().kind, StatusKind::Error);
        assert_eq!(form.phase(), UploadPhase::Selected);
        assert!(!form.is_uploading());
    }

    #[test]
    fn test_submit_enters_submitting() {
        let mut form = selected();
        assert_eq!(form.begin_submit(true), Some("report.pdf"));
        assert!(form.is_uploading());
        assert!(!form.can_submit());
        assert_eq!(form.status(), Some(&StatusMessage::info(UPLOADING)));

        // second submit while in flight sends nothing
        assert_eq!(form.begin_submit(true), None);
    }

    #[test]
    fn test_selection_clears_status() {
        let mut form = UploadForm::new();
        form.begin_submit(true);
        assert!(form.status().is_some());

        form.select_file(Some("a.txt"));
        assert!(form.status().is_none());
        assert_eq!(form.phase(), UploadPhase::Selected);

        form.select_file(None);
        assert_eq!(form.phase(), UploadPhase::Idle);
        assert!(form.file().is_none());
    }

    #[test]
    fn test_selection_ignored_while_uploading() {
        let mut form = selected();
        form.begin_submit(true);
        form.select_file(Some("other.txt"));
        assert_eq!(form.file(), Some(&"report.pdf"));
        assert_eq!(form.status(), Some(&StatusMessage::info(UPLOADING)));
    }

    #[test]
    fn test_settle_success_with_message() {
        let mut form = selected();
        form.begin_submit(true);
        let response = UploadResponse {
            message: Some("ok".to_string()),
            ..Default::default()
        };
        assert!(form.settle(&Ok(response)));
        assert_eq!(form.phase(), UploadPhase::Succeeded);
        assert_eq!(form.status(), Some(&StatusMessage::success("ok")));
        assert!(!form.is_uploading());
        // file stays selected for a manual resubmit
        assert!(form.can_submit());
    }

    #[test]
    fn test_settle_success_default_message() {
        let mut form = selected();
        form.begin_submit(true);
        form.settle(&Ok(UploadResponse::default()));
        assert_eq!(form.status().unwrap().text, "Upload successful!");
        assert_eq!(form.status().unwrap().kind, StatusKind::Success);
    }

    #[test]
    fn test_settle_failure() {
        let mut form = selected();
        form.begin_submit(true);
        let error = UploadError::Server {
            status: 413,
            message: Some("too large".to_string()),
        };
        form.settle(&Err(error));
        assert_eq!(form.phase(), UploadPhase::Failed);
        assert_eq!(form.status(), Some(&StatusMessage::error("Upload failed: too large")));
    }

    #[test]
    fn test_settle_applies_once() {
        let mut form = selected();
        form.begin_submit(true);
        assert!(form.settle(&Ok(UploadResponse::default())));
        assert!(!form.settle(&Err(UploadError::Network("late".to_string()))));
        assert_eq!(form.phase(), UploadPhase::Succeeded);
    }

    #[test]
    fn test_success_message_containing_failed_is_success() {
        let mut form = selected();
        form.begin_submit(true);
        let response = UploadResponse {
            message: Some("Nothing failed".to_string()),
            ..Default::default()
        };
        form.settle(&Ok(response));
        assert_eq!(form.status().unwrap().kind, StatusKind::Success);
    }
}
