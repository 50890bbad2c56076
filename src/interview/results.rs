//! Score card shown once the candidate ends the interview.

use serde::Serialize;

use super::media::MediaStream;

/// Fixed results record. The scores are constants, not derived from the
/// transcript; a real scorer replaces `standard()` without touching the
/// session controller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewResults {
    pub technical: u8,
    pub communication: u8,
    pub problem_solving: u8,
    pub culture_fit: u8,
    pub confidence: u8,
    pub feedback: String,
}

impl InterviewResults {
    pub fn standard() -> Self {
        Self {
            technical: 82,
            communication: 88,
            problem_solving: 79,
            culture_fit: 91,
            confidence: 85,
            feedback: "Strong communication and a collaborative mindset. \
                       Answers would land even better with more concrete metrics \
                       behind the project stories."
                .to_string(),
        }
    }
}

/// Replaces the session view once the interview ends. `close` releases any
/// lingering capture stream and is safe to call more than once.
pub struct ResultsPresenter {
    results: InterviewResults,
    stream: Option<MediaStream>,
}

impl ResultsPresenter {
    pub fn new(results: InterviewResults, lingering: Option<MediaStream>) -> Self {
        Self {
            results,
            stream: lingering,
        }
    }

    pub fn results(&self) -> &InterviewResults {
        &self.results
    }

    pub fn close(&mut self) {
        if let Some(stream) = self.stream.take() {
            stream.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::media::StreamKind;

    #[test]
    fn test_close_releases_lingering_stream_once() {
        let stream = MediaStream::new(StreamKind::Interview, "t0");
        let observer = stream.clone();
        let mut presenter = ResultsPresenter::new(InterviewResults::standard(), Some(stream));
        presenter.close();
        assert!(!observer.is_active());
        presenter.close();
        assert!(!observer.is_active());
    }

    #[test]
    fn test_scores_are_percentages() {
        let results = InterviewResults::standard();
        for score in [
            results.technical,
            results.communication,
            results.problem_solving,
            results.culture_fit,
            results.confidence,
        ] {
            assert!(score <= 100);
        }
        assert!(!results.feedback.is_empty());
    }
}
