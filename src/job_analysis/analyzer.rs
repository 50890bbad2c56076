//! Analysis orchestration: prefer the provider, fall back on any failure.

use tracing::{info, warn};

use super::fallback;
use super::provider::ProviderClient;
use super::types::{JobAnalysis, JobAnalysisRequest};
use crate::environment::EnvironmentConfig;

pub struct JobAnalyzer {
    provider: Option<ProviderClient>,
}

impl JobAnalyzer {
    pub fn new(env: &EnvironmentConfig) -> Self {
        let provider = ProviderClient::from_env(&env.provider_base_url, &env.provider_model);
        match &provider {
            Some(_) => info!("job analysis provider configured"),
            None => info!("no provider key configured, job analysis uses the local fallback"),
        }
        Self { provider }
    }

    pub fn without_provider() -> Self {
        Self { provider: None }
    }

    /// Analyze a job posting. Provider trouble is never surfaced: any
    /// failure degrades to the deterministic local engine.
    pub async fn analyze(&self, request: &JobAnalysisRequest) -> JobAnalysis {
        if let Some(provider) = &self.provider {
            match provider.analyze(request).await {
                Ok(analysis) => return analysis,
                Err(e) => {
                    warn!(error = %format!("{:#}", e), "provider analysis failed, using fallback");
                }
            }
        }
        fallback::analyze(request)
    }
}
