//! Upload validation: content type and size limit.

use thiserror::Error;

pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

pub const ALLOWED_CONTENT_TYPES: &[&str] = &["application/pdf", "image/jpeg", "image/png"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadValidationError {
    #[error(
        "unsupported file type \"{received}\"; allowed types are \
         application/pdf, image/jpeg, image/png"
    )]
    UnsupportedType { received: String },
    #[error("file exceeds the 5 MB size limit ({size} bytes received)")]
    TooLarge { size: u64 },
    #[error("uploaded file is empty")]
    Empty,
}

/// Validate an upload before anything is written to disk.
pub fn validate_upload(
    content_type: Option<&str>,
    size: u64,
) -> Result<(), UploadValidationError> {
    let received = content_type.unwrap_or("unknown");
    if !ALLOWED_CONTENT_TYPES.contains(&received) {
        return Err(UploadValidationError::UnsupportedType {
            received: received.to_string(),
        });
    }
    if size == 0 {
        return Err(UploadValidationError::Empty);
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadValidationError::TooLarge { size });
    }
    Ok(())
}
