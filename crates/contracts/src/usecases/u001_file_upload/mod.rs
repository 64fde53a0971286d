pub mod request;
pub mod response;

pub use request::{upload_url, FILE_FIELD, UPLOAD_PATH};
pub use response::{UploadErrorBody, UploadResponse};

use crate::usecases::common::UseCaseMetadata;

pub struct FileUpload;

impl UseCaseMetadata for FileUpload {
    fn display_name() -> &'static str {
        "File Upload Portal"
    }

    fn description() -> &'static str {
        "Upload a File to S3"
    }
}
