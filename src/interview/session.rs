//! The interview flow state machine.
//!
//! Explicit state passed through the handlers that drive it: the transcript,
//! the single pending-reply flag, the current phase, and the active capture
//! stream. Transitions are linear (Lobby -> Interviewing -> ShowingResults)
//! with one backward edge (Interviewing -> Lobby) when the candidate aborts.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use super::config::RecruiterConfig;
use super::media::{MediaAccessError, MediaGateway, MediaStream, StreamKind};
use super::message::Message;
use super::responder::{InterviewResponder, Reply, ResponderError};
use super::results::{InterviewResults, ResultsPresenter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Lobby,
    Interviewing,
    ShowingResults,
}

/// Why a candidate submission was refused. Every variant is a no-op on the
/// transcript.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitRejection {
    #[error("message is empty")]
    EmptyMessage,
    #[error("a reply is already pending")]
    ReplyPending,
    #[error("the session is not in the interviewing phase")]
    WrongPhase,
}

#[derive(Debug, Error)]
pub enum PhaseError {
    #[error("cannot transition from {from:?}")]
    InvalidTransition { from: SessionPhase },
    #[error(transparent)]
    Media(#[from] MediaAccessError),
}

pub struct InterviewSession {
    config: RecruiterConfig,
    media: Arc<dyn MediaGateway>,
    responder: Arc<dyn InterviewResponder>,
    phase: SessionPhase,
    messages: Vec<Message>,
    awaiting_reply: bool,
    current_prompt: String,
    stream: Option<MediaStream>,
}

impl InterviewSession {
    pub fn new(
        config: RecruiterConfig,
        media: Arc<dyn MediaGateway>,
        responder: Arc<dyn InterviewResponder>,
    ) -> Self {
        Self {
            config,
            media,
            responder,
            phase: SessionPhase::Lobby,
            messages: Vec::new(),
            awaiting_reply: false,
            current_prompt: String::new(),
            stream: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    /// Latest interviewer text, shown outside the chat panel.
    pub fn current_prompt(&self) -> &str {
        &self.current_prompt
    }

    pub fn active_stream(&self) -> Option<MediaStream> {
        self.stream.clone()
    }

    /// Acquire the camera-only preview shown in the lobby. On failure the
    /// session stays in Lobby with no stream and the caller may simply try
    /// again; there is no automatic retry.
    pub async fn request_preview(&mut self) -> Result<(), PhaseError> {
        if self.phase != SessionPhase::Lobby {
            return Err(PhaseError::InvalidTransition { from: self.phase });
        }
        self.swap_stream(StreamKind::CameraPreview).await?;
        Ok(())
    }

    /// Move Lobby -> Interviewing. The preview stream is released before the
    /// interview stream is acquired, keeping at most one stream active. The
    /// interviewer speaks first; a responder failure becomes a synthetic
    /// transcript entry rather than a failed transition.
    pub async fn start_interview(&mut self) -> Result<(), PhaseError> {
        if self.phase != SessionPhase::Lobby {
            return Err(PhaseError::InvalidTransition { from: self.phase });
        }
        self.swap_stream(StreamKind::Interview).await?;
        self.phase = SessionPhase::Interviewing;
        info!(role = %self.config.job_role, "interview started");

        let outcome = self
            .responder
            .respond(&self.config, &self.messages, "")
            .await;
        self.append_reply(outcome);
        Ok(())
    }

    /// Submit candidate text and wait for the interviewer's reply.
    ///
    /// Rejected without touching the transcript when the text trims to
    /// empty, when a reply is already pending, or outside the interviewing
    /// phase. A responder failure is appended as a synthetic interviewer
    /// message; it never ends the session.
    pub async fn submit_candidate_message(&mut self, text: &str) -> Result<(), SubmitRejection> {
        let text = self.begin_exchange(text)?;
        let outcome = self
            .responder
            .respond(&self.config, &self.messages, &text)
            .await;
        self.complete_exchange(outcome);
        Ok(())
    }

    /// First half of a submission: validate, append the candidate message,
    /// and raise the pending flag. Split from `complete_exchange` so hosts
    /// that resolve replies out of band can drive the same invariant.
    pub fn begin_exchange(&mut self, text: &str) -> Result<String, SubmitRejection> {
        if self.phase != SessionPhase::Interviewing {
            return Err(SubmitRejection::WrongPhase);
        }
        if self.awaiting_reply {
            return Err(SubmitRejection::ReplyPending);
        }
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SubmitRejection::EmptyMessage);
        }

        let owned = trimmed.to_string();
        self.messages.push(Message::candidate(owned.clone()));
        self.awaiting_reply = true;
        Ok(owned)
    }

    /// Second half of a submission: append the reply (or a synthetic error
    /// message) and clear the pending flag.
    pub fn complete_exchange(&mut self, outcome: Result<Reply, ResponderError>) {
        self.append_reply(outcome);
        self.awaiting_reply = false;
    }

    /// Abort back to the lobby. Only valid while interviewing; the interview
    /// stream is released before the phase changes.
    pub fn abort_to_lobby(&mut self) -> Result<(), PhaseError> {
        if self.phase != SessionPhase::Interviewing {
            return Err(PhaseError::InvalidTransition { from: self.phase });
        }
        self.release_stream();
        self.phase = SessionPhase::Lobby;
        info!("interview aborted back to lobby");
        Ok(())
    }

    /// End the session and move to ShowingResults. Idempotent: a second call
    /// neither errors nor releases anything twice.
    pub fn end_session(&mut self) {
        self.release_stream();
        if self.phase != SessionPhase::ShowingResults {
            self.phase = SessionPhase::ShowingResults;
            info!(messages = self.messages.len(), "interview ended");
        }
    }

    pub fn results(&self) -> InterviewResults {
        InterviewResults::standard()
    }

    /// End the session and hand the flow over to the results presenter.
    pub fn finish(mut self) -> ResultsPresenter {
        self.end_session();
        ResultsPresenter::new(self.results(), None)
    }

    fn append_reply(&mut self, outcome: Result<Reply, ResponderError>) {
        let text = match outcome {
            Ok(reply) => reply.text,
            Err(e) => {
                warn!(error = %e, "responder failed, appending fallback message");
                format!(
                    "I'm having trouble responding right now ({}). \
                     Could you repeat that, or carry on with your next thought?",
                    e
                )
            }
        };
        self.current_prompt = text.clone();
        self.messages.push(Message::ai(text));
    }

    fn release_stream(&mut self) {
        if let Some(stream) = self.stream.take() {
            stream.stop();
        }
    }

    async fn swap_stream(&mut self, kind: StreamKind) -> Result<(), MediaAccessError> {
        self.release_stream();
        let stream = self.media.acquire(kind).await?;
        self.stream = Some(stream);
        Ok(())
    }
}
