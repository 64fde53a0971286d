//! File Upload - View Model

use leptos::prelude::*;

use super::form::UploadForm;
use super::model::FormStore;

#[derive(Clone, Copy)]
pub struct UploadFormVm {
    pub form: RwSignal<UploadForm<web_sys::File>, LocalStorage>,
    /// A file is being dragged over the drop zone
    pub is_dragging: RwSignal<bool>,
}

impl UploadFormVm {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new_local(UploadForm::new()),
            is_dragging: RwSignal::new(false),
        }
    }

    pub fn select_file(&self, file: Option<web_sys::File>) {
        self.form.update(|form| form.select_file(file));
    }

    pub fn is_uploading(&self) -> bool {
        self.form.with(|form| form.is_uploading())
    }

    pub fn can_submit(&self) -> bool {
        self.form.with(|form| form.can_submit())
    }
}

impl Default for UploadFormVm {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: 'static> FormStore<F> for RwSignal<UploadForm<F>, LocalStorage> {
    fn with_form<R>(&self, f: impl FnOnce(&mut UploadForm<F>) -> R) -> Option<R> {
        self.try_update(f)
    }
}
