//! Employer-supplied interview parameters. Read-only for the duration of a
//! session.

use serde::{Deserialize, Serialize};

/// How the interviewer weights its question bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewStyle {
    Technical,
    Behavioral,
    #[default]
    Mixed,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecruiterConfig {
    pub job_role: String,
    pub seniority: String,
    pub style: InterviewStyle,
    pub traits: Vec<String>,
    pub skills: Vec<String>,
    pub custom_questions: Vec<String>,
}

impl RecruiterConfig {
    pub fn new(job_role: impl Into<String>, seniority: impl Into<String>) -> Self {
        Self {
            job_role: job_role.into(),
            seniority: seniority.into(),
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: InterviewStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_skills(mut self, skills: Vec<String>) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_custom_questions(mut self, questions: Vec<String>) -> Self {
        self.custom_questions = questions;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_defaults_to_mixed() {
        let config: RecruiterConfig =
            serde_json::from_str(r#"{"jobRole":"Backend Engineer","seniority":"senior"}"#)
                .expect("deserialize");
        assert_eq!(config.style, InterviewStyle::Mixed);
        assert!(config.custom_questions.is_empty());
    }

    #[test]
    fn test_builder_chain() {
        let config = RecruiterConfig::new("Frontend Developer", "mid")
            .with_style(InterviewStyle::Technical)
            .with_skills(vec!["React".into(), "TypeScript".into()]);
        assert_eq!(config.style, InterviewStyle::Technical);
        assert_eq!(config.skills.len(), 2);
    }
}
