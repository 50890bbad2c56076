//! Job analysis endpoint handler.

use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

use crate::job_analysis::{JobAnalysis, JobAnalysisRequest, JobAnalyzer};
use crate::web::types::ErrorBody;

pub async fn analyze_job_handler(
    request: Json<JobAnalysisRequest>,
    analyzer: &State<JobAnalyzer>,
) -> Result<Json<JobAnalysis>, Custom<Json<ErrorBody>>> {
    let request = request.into_inner();

    if request.job_title.trim().is_empty() {
        return Err(Custom(
            Status::BadRequest,
            Json(ErrorBody::new("jobTitle is required")),
        ));
    }

    info!(title = %request.job_title, "job analysis requested");
    let analysis = analyzer.analyze(&request).await;
    Ok(Json(analysis))
}
