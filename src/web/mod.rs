// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use types::*;

use std::sync::Arc;

use anyhow::Result;
use rocket::data::{Limits, ToByteUnit};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::form::Form;
use rocket::fs::NamedFile;
use rocket::http::{Header, Status};
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Request, Response, State};
use tracing::info;

use crate::environment::EnvironmentConfig;
use crate::interview::{InterviewResponder, ScriptedResponder};
use crate::job_analysis::{JobAnalysis, JobAnalysisRequest, JobAnalyzer};
use crate::resumes::{MockExtractor, ResumeExtractor, UploadStore};

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[post("/interview/chat", data = "<request>")]
pub async fn interview_chat(
    request: Json<ChatRequest>,
    responder: &State<Arc<dyn InterviewResponder>>,
) -> Result<Json<ChatResponse>, Custom<Json<ErrorBody>>> {
    handlers::chat_handler(request, responder).await
}

#[post("/jobs/analyze", data = "<request>")]
pub async fn analyze_job(
    request: Json<JobAnalysisRequest>,
    analyzer: &State<JobAnalyzer>,
) -> Result<Json<JobAnalysis>, Custom<Json<ErrorBody>>> {
    handlers::analyze_job_handler(request, analyzer).await
}

#[post("/resumes/upload", data = "<upload>")]
pub async fn upload_resume(
    upload: Form<ResumeUploadForm<'_>>,
    store: &State<UploadStore>,
    extractor: &State<Arc<dyn ResumeExtractor>>,
) -> Result<Json<ResumeUploadResponse>, Custom<Json<ErrorBody>>> {
    handlers::upload_resume_handler(upload, store, extractor).await
}

#[get("/resumes/upload?<query..>")]
pub async fn list_resumes(query: ResumeListQuery) -> Json<ResumeListResponse> {
    handlers::list_resumes_handler(query).await
}

#[get("/resumes/<id>/file")]
pub async fn resume_file(id: &str, store: &State<UploadStore>) -> Option<NamedFile> {
    handlers::resume_file_handler(id, store).await
}

#[get("/health")]
pub async fn health() -> Json<HealthResponse> {
    handlers::health_handler().await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<ErrorBody> {
    Json(ErrorBody::new("Invalid request format"))
}

#[rocket::catch(404)]
pub fn not_found() -> Json<ErrorBody> {
    Json(ErrorBody::new("Not found"))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorBody> {
    Json(ErrorBody::new("Internal server error"))
}

// Main server start function
pub async fn start_web_server(config: EnvironmentConfig, port: u16) -> Result<()> {
    let store = UploadStore::new(config.uploads_path.clone());
    store.ensure_uploads_dir().await?;

    let analyzer = JobAnalyzer::new(&config);
    let responder: Arc<dyn InterviewResponder> = Arc::new(ScriptedResponder::new());
    let extractor: Arc<dyn ResumeExtractor> = Arc::new(MockExtractor::new());

    // Uploads above the hard cap must reach our own validation, so the
    // transport limits sit well above 5 MB.
    let limits = Limits::default()
        .limit("file", 16.mebibytes())
        .limit("data-form", 16.mebibytes());

    let figment = rocket::Config::figment()
        .merge(("port", port))
        .merge(("address", "0.0.0.0"))
        .merge(("limits", limits));

    info!("Starting talentflow API server on port {}", port);
    info!("Uploads directory: {}", config.uploads_path.display());

    let _rocket = rocket::custom(figment)
        .attach(Cors)
        .manage(store)
        .manage(analyzer)
        .manage(responder)
        .manage(extractor)
        .register("/api", catchers![bad_request, not_found, internal_error])
        .mount(
            "/api",
            routes![
                interview_chat,
                analyze_job,
                upload_resume,
                list_resumes,
                resume_file,
                health,
                options,
            ],
        )
        .launch()
        .await?;

    Ok(())
}
