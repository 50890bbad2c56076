//! Uploads directory plus the id -> file index that serves downloads.
//!
//! Nothing is persisted beyond the files themselves: the index lives in
//! memory, pre-seeded with the demo fixtures and extended as uploads land.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use super::types::{ResumeSummary, StoredResume};
use crate::utils::extension_for_mime;

const FIXTURE_RESUMES: &[(&str, &str, &str, &str, &str, u8)] = &[
    (
        "res-1001",
        "Amara Okafor",
        "amara_okafor_resume.pdf",
        "application/pdf",
        "2025-06-02T09:14:00Z",
        87,
    ),
    (
        "res-1002",
        "Diego Fernandez",
        "diego_fernandez_resume.pdf",
        "application/pdf",
        "2025-06-03T15:41:00Z",
        74,
    ),
    (
        "res-1003",
        "Mei Lin",
        "mei_lin_resume.png",
        "image/png",
        "2025-06-04T11:05:00Z",
        91,
    ),
];

pub struct UploadStore {
    uploads_dir: PathBuf,
    index: RwLock<HashMap<String, StoredResume>>,
}

impl UploadStore {
    pub fn new(uploads_dir: PathBuf) -> Self {
        let mut index = HashMap::new();
        for (id, _, file_name, content_type, _, _) in FIXTURE_RESUMES {
            index.insert(
                (*id).to_string(),
                StoredResume {
                    id: (*id).to_string(),
                    job_id: "job-demo".to_string(),
                    file_name: (*file_name).to_string(),
                    content_type: (*content_type).to_string(),
                },
            );
        }
        Self {
            uploads_dir,
            index: RwLock::new(index),
        }
    }

    pub fn uploads_dir(&self) -> &Path {
        &self.uploads_dir
    }

    /// Mint the identity and destination path for an incoming upload.
    pub fn new_entry(&self, job_id: &str, content_type: &str) -> (StoredResume, PathBuf) {
        let id = format!("res-{}", Uuid::new_v4());
        let extension = extension_for_mime(content_type).unwrap_or("bin");
        let file_name = format!("{}.{}", id, extension);
        let destination = self.uploads_dir.join(&file_name);
        let stored = StoredResume {
            id,
            job_id: job_id.to_string(),
            file_name,
            content_type: content_type.to_string(),
        };
        (stored, destination)
    }

    /// Add an upload to the index once its file is on disk.
    pub async fn register(&self, stored: StoredResume) {
        info!(id = %stored.id, file = %stored.file_name, "resume registered");
        self.index.write().await.insert(stored.id.clone(), stored);
    }

    pub async fn lookup(&self, id: &str) -> Option<StoredResume> {
        self.index.read().await.get(id).cloned()
    }

    /// Resolve an id to the file on disk; `None` when the id is unknown or
    /// the file is missing.
    pub async fn file_path(&self, id: &str) -> Option<PathBuf> {
        let stored = self.lookup(id).await?;
        let path = self.uploads_dir.join(&stored.file_name);
        if tokio::fs::metadata(&path).await.is_ok() {
            Some(path)
        } else {
            None
        }
    }

    pub async fn ensure_uploads_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.uploads_dir)
            .await
            .with_context(|| {
                format!(
                    "Failed to create uploads directory: {}",
                    self.uploads_dir.display()
                )
            })
    }

    /// The recruiter-facing list. Static demo data shaped around the
    /// requested job id.
    pub fn summaries(job_id: Option<&str>) -> Vec<ResumeSummary> {
        let job_id = job_id.unwrap_or("job-demo");
        FIXTURE_RESUMES
            .iter()
            .map(
                |(id, candidate, file_name, _, uploaded_at, match_score)| ResumeSummary {
                    id: (*id).to_string(),
                    job_id: job_id.to_string(),
                    candidate_name: (*candidate).to_string(),
                    file_name: (*file_name).to_string(),
                    uploaded_at: (*uploaded_at).to_string(),
                    status: if *match_score >= 80 {
                        "screened".to_string()
                    } else {
                        "pending".to_string()
                    },
                    match_score: *match_score,
                },
            )
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> UploadStore {
        UploadStore::new(std::env::temp_dir().join(format!("talentflow-{}", Uuid::new_v4())))
    }

    #[tokio::test]
    async fn test_fixtures_are_seeded_in_the_index() {
        let store = store();
        let stored = store.lookup("res-1001").await.expect("fixture present");
        assert_eq!(stored.file_name, "amara_okafor_resume.pdf");
        assert!(store.lookup("res-9999").await.is_none());
    }

    #[tokio::test]
    async fn test_register_and_lookup_roundtrip() {
        let store = store();
        let (entry, destination) = store.new_entry("job-42", "application/pdf");
        assert!(entry.file_name.ends_with(".pdf"));
        assert_eq!(destination, store.uploads_dir().join(&entry.file_name));

        let id = entry.id.clone();
        store.register(entry).await;
        let found = store.lookup(&id).await.expect("registered");
        assert_eq!(found.job_id, "job-42");
    }

    #[tokio::test]
    async fn test_file_path_requires_the_file_on_disk() {
        let store = store();
        store.ensure_uploads_dir().await.expect("mkdir");

        // Fixture id with no backing file.
        assert!(store.file_path("res-1001").await.is_none());

        let (entry, destination) = store.new_entry("job-42", "image/png");
        tokio::fs::write(&destination, b"png bytes").await.expect("write");
        let id = entry.id.clone();
        store.register(entry).await;
        assert_eq!(store.file_path(&id).await, Some(destination));
    }

    #[test]
    fn test_summaries_adopt_requested_job_id() {
        let rows = UploadStore::summaries(Some("job-7"));
        assert_eq!(rows.len(), FIXTURE_RESUMES.len());
        assert!(rows.iter().all(|r| r.job_id == "job-7"));
        assert!(rows.iter().any(|r| r.status == "screened"));
    }
}
