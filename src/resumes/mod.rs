pub mod extractor;
pub mod store;
pub mod types;
pub mod validation;

pub use extractor::{MockExtractor, ResumeExtractor};
pub use store::UploadStore;
pub use types::{ExtractedField, ExtractedResume, ResumeSummary, StoredResume};
pub use validation::{validate_upload, UploadValidationError, MAX_UPLOAD_BYTES};
