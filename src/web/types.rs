// src/web/types.rs - wire DTOs for the /api surface

use rocket::form::FromForm;
use rocket::fs::TempFile;
use rocket::serde::{Deserialize, Serialize};

use crate::interview::{Message, QuestionSource, RecruiterConfig, Reply};
use crate::resumes::{ExtractedResume, ResumeSummary};

/// The one error body every endpoint shares.
#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct ChatRequest {
    pub recruiter_config: RecruiterConfig,
    #[serde(default)]
    pub conversation_history: Vec<Message>,
    pub current_candidate_input: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct ChatDebugInfo {
    pub matched_keyword: Option<String>,
    pub question_source: QuestionSource,
    pub question_index: usize,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct ChatResponse {
    pub ai_response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_info: Option<ChatDebugInfo>,
}

impl From<Reply> for ChatResponse {
    fn from(reply: Reply) -> Self {
        Self {
            ai_response: reply.text,
            debug_info: Some(ChatDebugInfo {
                matched_keyword: reply.matched_keyword,
                question_source: reply.question_source,
                question_index: reply.question_index,
            }),
        }
    }
}

#[derive(FromForm)]
pub struct ResumeUploadForm<'f> {
    pub resume: TempFile<'f>,
    #[field(name = "jobId")]
    pub job_id: String,
}

#[derive(FromForm)]
pub struct ResumeListQuery {
    #[field(name = "jobId")]
    pub job_id: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct ResumeUploadResponse {
    pub resume_id: String,
    pub job_id: String,
    pub file_name: String,
    pub extracted: ExtractedResume,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct ResumeListResponse {
    pub resumes: Vec<ResumeSummary>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}
