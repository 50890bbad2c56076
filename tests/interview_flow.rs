//! End-to-end walk through the candidate interview flow: lobby preview,
//! live interview, chat exchanges, and the results hand-off.

use std::sync::Arc;

use hiring_platform::interview::{
    InterviewSession, InterviewStyle, LoopbackGateway, RecruiterConfig, ScriptedResponder,
    SessionPhase, Speaker, StreamKind, SubmitRejection,
};

fn session_with(gateway: Arc<LoopbackGateway>) -> InterviewSession {
    let config = RecruiterConfig::new("Senior Frontend Developer", "senior")
        .with_style(InterviewStyle::Mixed)
        .with_skills(vec!["React".into(), "TypeScript".into()])
        .with_custom_questions(vec!["What drew you to this company?".into()]);
    InterviewSession::new(config, gateway, Arc::new(ScriptedResponder::new()))
}

#[tokio::test]
async fn test_full_interview_walkthrough() {
    let gateway = Arc::new(LoopbackGateway::new());
    let mut session = session_with(gateway.clone());

    // Lobby: camera preview only.
    assert_eq!(session.phase(), SessionPhase::Lobby);
    session.request_preview().await.expect("preview");
    let preview = session.active_stream().expect("preview stream");
    assert_eq!(preview.kind(), StreamKind::CameraPreview);

    // Entering the interview swaps the preview for the live stream and the
    // interviewer opens with the recruiter's custom question.
    session.start_interview().await.expect("start");
    assert_eq!(session.phase(), SessionPhase::Interviewing);
    assert!(!preview.is_active());
    let live = session.active_stream().expect("live stream");
    assert_eq!(live.kind(), StreamKind::Interview);

    let opening = session.messages().first().expect("opening message");
    assert!(opening.is_from(Speaker::Ai));
    assert!(opening.text.contains("What drew you to this company?"));
    assert_eq!(session.current_prompt(), opening.text);

    // A normal exchange: candidate turn then interviewer turn.
    session
        .submit_candidate_message("I have years of experience building design systems.")
        .await
        .expect("exchange");
    assert_eq!(session.messages().len(), 3);
    assert!(!session.awaiting_reply());

    // Empty input never reaches the transcript.
    assert_eq!(
        session.submit_candidate_message("  ").await,
        Err(SubmitRejection::EmptyMessage)
    );
    assert_eq!(session.messages().len(), 3);

    // Ending the interview releases the stream and lands on the score card.
    session.end_session();
    assert_eq!(session.phase(), SessionPhase::ShowingResults);
    assert!(!live.is_active());

    let results = session.results();
    assert!(results.communication <= 100);
    assert!(!results.feedback.is_empty());

    // Exactly two streams were ever issued: preview and live.
    assert_eq!(gateway.issued(), 2);
}

#[tokio::test]
async fn test_abort_and_reenter() {
    let gateway = Arc::new(LoopbackGateway::new());
    let mut session = session_with(gateway.clone());

    session.start_interview().await.expect("start");
    let first_live = session.active_stream().expect("live stream");

    session.abort_to_lobby().expect("abort");
    assert_eq!(session.phase(), SessionPhase::Lobby);
    assert!(!first_live.is_active());
    assert!(session.active_stream().is_none());

    // The candidate can walk back in; the transcript keeps the earlier turns.
    let earlier = session.messages().len();
    session.start_interview().await.expect("restart");
    assert_eq!(session.phase(), SessionPhase::Interviewing);
    assert_eq!(session.messages().len(), earlier + 1);
}

#[tokio::test]
async fn test_finish_hands_over_to_presenter() {
    let gateway = Arc::new(LoopbackGateway::new());
    let mut session = session_with(gateway);

    session.start_interview().await.expect("start");
    session
        .submit_candidate_message("My team shipped a large migration last year.")
        .await
        .expect("exchange");

    let stream = session.active_stream().expect("live stream");
    let mut presenter = session.finish();
    assert!(!stream.is_active());

    assert_eq!(presenter.results().technical, 82);
    // Close is safe even though the session already released everything.
    presenter.close();
    presenter.close();
}
