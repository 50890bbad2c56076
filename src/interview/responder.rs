//! The interviewer boundary.
//!
//! The session controller assumes nothing about an implementation beyond
//! "a string arrives or an error occurs"; there are no latency or content
//! guarantees.
//! `ScriptedResponder` is the keyword/style-matching stand-in for a real
//! model-backed interviewer.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use super::config::{InterviewStyle, RecruiterConfig};
use super::message::{Message, Speaker};

#[derive(Debug, Error)]
pub enum ResponderError {
    #[error("interview service unreachable: {0}")]
    Transport(String),
    #[error("interview service returned status {0}")]
    Status(u16),
    #[error("interview service returned a malformed payload: {0}")]
    Malformed(String),
}

/// Where the question half of a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionSource {
    Greeting,
    Custom,
    Bank,
}

/// One interviewer utterance plus the selection trace exposed as `debugInfo`
/// on the chat endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub text: String,
    pub matched_keyword: Option<String>,
    pub question_source: QuestionSource,
    pub question_index: usize,
}

#[async_trait]
pub trait InterviewResponder: Send + Sync {
    /// Produce the next interviewer utterance. `history` holds the prior
    /// transcript; `input` is the candidate text being answered, empty when
    /// the interviewer speaks first.
    async fn respond(
        &self,
        config: &RecruiterConfig,
        history: &[Message],
        input: &str,
    ) -> Result<Reply, ResponderError>;
}

const ACKNOWLEDGEMENTS: &[(&str, &str)] = &[
    (
        "experience",
        "That experience sounds directly relevant to this role.",
    ),
    (
        "team",
        "Collaboration comes up a lot in this position, so that's good to hear.",
    ),
    (
        "challenge",
        "Working through challenges like that is exactly what I want to dig into.",
    ),
    ("learn", "A learning mindset goes a long way here."),
    ("project", "Concrete projects are the best way to talk about this."),
];

const TECHNICAL_QUESTIONS: &[&str] = &[
    "Walk me through a system you designed end to end. What trade-offs did you make?",
    "Tell me about a production incident you debugged. How did you narrow it down?",
    "How do you decide when code is ready to ship?",
    "Describe a time you had to improve the performance of something you did not write.",
    "What part of your technical toolkit would you most like to deepen next?",
];

const BEHAVIORAL_QUESTIONS: &[&str] = &[
    "Tell me about a time you disagreed with a teammate. How was it resolved?",
    "Describe a situation where you had to deliver with incomplete information.",
    "When have you had to push back on a deadline, and how did you handle it?",
    "Tell me about feedback that was hard to hear. What did you do with it?",
    "What does a great first ninety days in a new role look like to you?",
];

/// Deterministic keyword/style interviewer.
///
/// Question order: the recruiter's custom questions first, then the
/// style-appropriate bank, wrapping around when exhausted. The index is
/// derived from how many interviewer messages the history already holds, so
/// the same history always yields the same reply.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptedResponder;

impl ScriptedResponder {
    pub fn new() -> Self {
        Self
    }

    fn question_list(config: &RecruiterConfig) -> Vec<String> {
        let mut questions: Vec<String> = config.custom_questions.clone();

        let bank: Vec<&str> = match config.style {
            InterviewStyle::Technical => TECHNICAL_QUESTIONS.to_vec(),
            InterviewStyle::Behavioral => BEHAVIORAL_QUESTIONS.to_vec(),
            InterviewStyle::Mixed => TECHNICAL_QUESTIONS
                .iter()
                .zip(BEHAVIORAL_QUESTIONS.iter())
                .flat_map(|(t, b)| [*t, *b])
                .collect(),
        };
        questions.extend(bank.iter().map(|q| (*q).to_string()));

        if !config.skills.is_empty() {
            questions.push(format!(
                "This role leans on {}. Which of those are you strongest in, and why?",
                config.skills.join(", ")
            ));
        }

        questions
    }

    fn acknowledgement(input: &str) -> Option<(String, &'static str)> {
        let lowered = input.to_lowercase();
        ACKNOWLEDGEMENTS
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|(keyword, ack)| ((*keyword).to_string(), *ack))
    }
}

#[async_trait]
impl InterviewResponder for ScriptedResponder {
    async fn respond(
        &self,
        config: &RecruiterConfig,
        history: &[Message],
        input: &str,
    ) -> Result<Reply, ResponderError> {
        let questions = Self::question_list(config);
        let asked = history.iter().filter(|m| m.is_from(Speaker::Ai)).count();
        let index = asked % questions.len();
        let question = &questions[index];

        let custom_count = config.custom_questions.len();
        let source = if index < custom_count {
            QuestionSource::Custom
        } else {
            QuestionSource::Bank
        };

        if asked == 0 && input.trim().is_empty() {
            let role = if config.job_role.is_empty() {
                "this".to_string()
            } else {
                config.job_role.clone()
            };
            return Ok(Reply {
                text: format!(
                    "Hello! I'll be your interviewer for the {} position today. \
                     To get us started: {}",
                    role, question
                ),
                matched_keyword: None,
                question_source: QuestionSource::Greeting,
                question_index: index,
            });
        }

        let (matched_keyword, text) = match Self::acknowledgement(input) {
            Some((keyword, ack)) => (Some(keyword), format!("{} {}", ack, question)),
            None => (None, format!("Thanks for sharing that. {}", question)),
        };

        Ok(Reply {
            text,
            matched_keyword,
            question_source: source,
            question_index: index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RecruiterConfig {
        RecruiterConfig::new("Backend Engineer", "senior").with_style(InterviewStyle::Technical)
    }

    #[tokio::test]
    async fn test_empty_history_greets_with_first_question() {
        let reply = ScriptedResponder::new()
            .respond(&config(), &[], "")
            .await
            .expect("respond");
        assert_eq!(reply.question_source, QuestionSource::Greeting);
        assert!(reply.text.starts_with("Hello!"));
        assert!(reply.text.contains("Backend Engineer"));
    }

    #[tokio::test]
    async fn test_keyword_acknowledgement() {
        let history = vec![Message::ai("Q1"), Message::candidate("answer")];
        let reply = ScriptedResponder::new()
            .respond(&config(), &history, "I have ten years of experience with APIs")
            .await
            .expect("respond");
        assert_eq!(reply.matched_keyword.as_deref(), Some("experience"));
        assert!(reply.text.contains("relevant to this role"));
    }

    #[tokio::test]
    async fn test_custom_questions_come_first() {
        let config = config().with_custom_questions(vec!["Why us?".into()]);
        let reply = ScriptedResponder::new()
            .respond(&config, &[], "")
            .await
            .expect("respond");
        assert!(reply.text.contains("Why us?"));
    }

    #[tokio::test]
    async fn test_same_history_yields_same_reply() {
        let history = vec![
            Message::ai("Q1"),
            Message::candidate("first answer"),
            Message::ai("Q2"),
            Message::candidate("second answer"),
        ];
        let responder = ScriptedResponder::new();
        let a = responder
            .respond(&config(), &history, "same input")
            .await
            .expect("respond");
        let b = responder
            .respond(&config(), &history, "same input")
            .await
            .expect("respond");
        assert_eq!(a.text, b.text);
        assert_eq!(a.question_index, b.question_index);
    }

    #[tokio::test]
    async fn test_question_index_advances_with_ai_turns() {
        let responder = ScriptedResponder::new();
        let history = vec![Message::ai("Q1"), Message::candidate("answer one")];
        let reply = responder
            .respond(&config(), &history, "answer one")
            .await
            .expect("respond");
        assert_eq!(reply.question_index, 1);
        assert_eq!(reply.question_source, QuestionSource::Bank);
    }
}
