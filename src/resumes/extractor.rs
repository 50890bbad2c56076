//! Resume extraction boundary.
//!
//! The mock reports a fixed field set with randomized confidence scores.
//! A real OCR/vision backend implements the same trait and slots in without
//! touching the upload handler.

use async_trait::async_trait;
use rand::Rng;

use super::types::{ExtractedField, ExtractedResume, StoredResume};

#[async_trait]
pub trait ResumeExtractor: Send + Sync {
    async fn extract(&self, stored: &StoredResume) -> ExtractedResume;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MockExtractor;

impl MockExtractor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResumeExtractor for MockExtractor {
    async fn extract(&self, _stored: &StoredResume) -> ExtractedResume {
        let mut rng = rand::thread_rng();
        let mut confidence = || rng.gen_range(0.72..0.97f32);

        ExtractedResume {
            name: ExtractedField::new("Jordan Avery", confidence()),
            email: ExtractedField::new("jordan.avery@example.com", confidence()),
            phone: ExtractedField::new("+1 (555) 014-2830", confidence()),
            skills: vec![
                "JavaScript".to_string(),
                "React".to_string(),
                "Node.js".to_string(),
                "SQL".to_string(),
            ],
            experience_years: ExtractedField::new("6", confidence()),
            education: ExtractedField::new("B.Sc. Computer Science", confidence()),
            // Placeholder: real detection belongs behind this trait, not in
            // the mock.
            ai_generated: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> StoredResume {
        StoredResume {
            id: "res-test".to_string(),
            job_id: "job-1".to_string(),
            file_name: "res-test.pdf".to_string(),
            content_type: "application/pdf".to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_extraction_fields_are_fixed_and_nonempty() {
        let extracted = MockExtractor::new().extract(&stored()).await;
        assert_eq!(extracted.name.value, "Jordan Avery");
        assert!(!extracted.skills.is_empty());
        assert!(!extracted.ai_generated);
    }

    #[tokio::test]
    async fn test_mock_confidences_stay_in_range() {
        let extracted = MockExtractor::new().extract(&stored()).await;
        for field in [
            &extracted.name,
            &extracted.email,
            &extracted.phone,
            &extracted.experience_years,
            &extracted.education,
        ] {
            assert!(field.confidence >= 0.72 && field.confidence < 0.97);
        }
    }
}
