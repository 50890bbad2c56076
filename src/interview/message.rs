//! Conversation transcript types.
//!
//! Messages are append-only and insertion-ordered; once created they are
//! never mutated or deleted, and they live only as long as the session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Ai,
    Candidate,
}

/// A single entry in the interview transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub speaker: Speaker,
    pub text: String,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn candidate(text: impl Into<String>) -> Self {
        Self::new(Speaker::Candidate, text)
    }

    pub fn ai(text: impl Into<String>) -> Self {
        Self::new(Speaker::Ai, text)
    }

    fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            speaker,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn is_from(&self, speaker: Speaker) -> bool {
        self.speaker == speaker
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_speaker() {
        assert!(Message::candidate("hi").is_from(Speaker::Candidate));
        assert!(Message::ai("hello").is_from(Speaker::Ai));
    }

    #[test]
    fn test_speaker_serializes_lowercase() {
        let json = serde_json::to_string(&Speaker::Candidate).expect("serialize");
        assert_eq!(json, "\"candidate\"");
    }

    #[test]
    fn test_message_deserializes_without_id_or_timestamp() {
        let msg: Message =
            serde_json::from_str(r#"{"speaker":"ai","text":"Tell me about yourself."}"#)
                .expect("deserialize");
        assert_eq!(msg.text, "Tell me about yourself.");
        assert!(msg.is_from(Speaker::Ai));
    }
}
