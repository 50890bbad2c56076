//! Resume upload, listing, and file serving.

use std::sync::Arc;

use rocket::form::Form;
use rocket::fs::NamedFile;
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info, warn};

use crate::resumes::{validate_upload, ResumeExtractor, UploadStore};
use crate::utils::format_size;
use crate::web::types::{
    ErrorBody, ResumeListQuery, ResumeListResponse, ResumeUploadForm, ResumeUploadResponse,
};

pub async fn upload_resume_handler(
    mut upload: Form<ResumeUploadForm<'_>>,
    store: &State<UploadStore>,
    extractor: &State<Arc<dyn ResumeExtractor>>,
) -> Result<Json<ResumeUploadResponse>, Custom<Json<ErrorBody>>> {
    let content_type = upload
        .resume
        .content_type()
        .map(|ct| format!("{}/{}", ct.media_type().top(), ct.media_type().sub()));
    let file_size = upload.resume.len();

    if let Err(e) = validate_upload(content_type.as_deref(), file_size) {
        warn!(
            job_id = %upload.job_id,
            size = %format_size(file_size),
            "resume upload rejected: {}",
            e
        );
        return Err(Custom(Status::BadRequest, Json(ErrorBody::new(e.to_string()))));
    }

    let content_type = content_type.unwrap_or_default();
    let (stored, destination) = store.new_entry(&upload.job_id, &content_type);

    if let Err(e) = store.ensure_uploads_dir().await {
        error!("failed to prepare uploads directory: {:#}", e);
        return Err(Custom(
            Status::InternalServerError,
            Json(ErrorBody::new("failed to store uploaded file")),
        ));
    }

    if let Err(e) = upload.resume.persist_to(&destination).await {
        error!("failed to persist upload to {}: {}", destination.display(), e);
        return Err(Custom(
            Status::InternalServerError,
            Json(ErrorBody::new("failed to store uploaded file")),
        ));
    }

    info!(
        id = %stored.id,
        job_id = %stored.job_id,
        size = %format_size(file_size),
        "resume stored"
    );

    let extracted = extractor.extract(&stored).await;
    let response = ResumeUploadResponse {
        resume_id: stored.id.clone(),
        job_id: stored.job_id.clone(),
        file_name: stored.file_name.clone(),
        extracted,
    };
    store.register(stored).await;

    Ok(Json(response))
}

pub async fn list_resumes_handler(query: ResumeListQuery) -> Json<ResumeListResponse> {
    Json(ResumeListResponse {
        resumes: UploadStore::summaries(query.job_id.as_deref()),
    })
}

/// `None` falls through to the 404 catcher.
pub async fn resume_file_handler(id: &str, store: &State<UploadStore>) -> Option<NamedFile> {
    let path = store.file_path(id).await?;
    NamedFile::open(path).await.ok()
}
