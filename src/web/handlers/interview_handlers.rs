//! Chat endpoint handler.
//!
//! Stateless on the server: the reply is recomputed from the posted history,
//! nothing is persisted between calls.

use std::sync::Arc;

use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

use crate::interview::InterviewResponder;
use crate::web::types::{ChatRequest, ChatResponse, ErrorBody};

pub async fn chat_handler(
    request: Json<ChatRequest>,
    responder: &State<Arc<dyn InterviewResponder>>,
) -> Result<Json<ChatResponse>, Custom<Json<ErrorBody>>> {
    let request = request.into_inner();

    info!(
        role = %request.recruiter_config.job_role,
        history_len = request.conversation_history.len(),
        "chat exchange requested"
    );

    match responder
        .respond(
            &request.recruiter_config,
            &request.conversation_history,
            &request.current_candidate_input,
        )
        .await
    {
        Ok(reply) => Ok(Json(ChatResponse::from(reply))),
        Err(e) => {
            error!(error = %e, "responder failed");
            Err(Custom(
                Status::InternalServerError,
                Json(ErrorBody::new(format!("interview responder failed: {}", e))),
            ))
        }
    }
}
