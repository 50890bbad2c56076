use serde::{Deserialize, Serialize};

/// One extracted value plus how sure the extractor is about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedField {
    pub value: String,
    pub confidence: f32,
}

impl ExtractedField {
    pub fn new(value: impl Into<String>, confidence: f32) -> Self {
        Self {
            value: value.into(),
            confidence,
        }
    }
}

/// The field set returned after an upload. Real extraction lives behind the
/// `ResumeExtractor` seam; the mock fills fixed values with randomized
/// confidences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedResume {
    pub name: ExtractedField,
    pub email: ExtractedField,
    pub phone: ExtractedField,
    pub skills: Vec<String>,
    pub experience_years: ExtractedField,
    pub education: ExtractedField,
    pub ai_generated: bool,
}

/// A file the platform is holding in the uploads directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredResume {
    pub id: String,
    pub job_id: String,
    pub file_name: String,
    pub content_type: String,
}

/// Row in the recruiter-facing resume list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSummary {
    pub id: String,
    pub job_id: String,
    pub candidate_name: String,
    pub file_name: String,
    pub uploaded_at: String,
    pub status: String,
    pub match_score: u8,
}
