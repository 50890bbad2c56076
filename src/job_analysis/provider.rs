//! Chat-completions client for provider-backed job analysis.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::types::{AnalysisSource, JobAnalysis, JobAnalysisRequest, SalaryRange};

const REQUEST_TIMEOUT_SECS: u64 = 60;

const SYSTEM_PROMPT: &str = "You are an HR analyst. Given a job posting, reply with a single \
JSON object and nothing else, using exactly these camelCase keys: scope (string), requirements \
(array of strings), responsibilities (array of strings), skills (array of strings), salaryRange \
(object with min, max, currency), confidence (number between 0 and 1).";

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageBody,
}

#[derive(Deserialize)]
struct ChatMessageBody {
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// The JSON shape the model is instructed to emit.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProviderPayload {
    scope: String,
    requirements: Vec<String>,
    responsibilities: Vec<String>,
    skills: Vec<String>,
    salary_range: ProviderSalaryRange,
    confidence: f32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProviderSalaryRange {
    min: u32,
    max: u32,
    #[serde(default = "default_currency")]
    currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

pub struct ProviderClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl ProviderClient {
    /// Build a client from the environment. Returns `None` when no API key
    /// is configured, in which case analysis uses the local fallback.
    pub fn from_env(base_url: &str, model: &str) -> Option<Self> {
        let api_key = std::env::var("TALENTFLOW_PROVIDER_KEY")
            .or_else(|_| std::env::var("OPENAI_API_KEY"))
            .ok()?;
        Self::new(base_url, model, api_key).ok()
    }

    pub fn new(base_url: &str, model: &str, api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model: model.to_string(),
        })
    }

    pub async fn analyze(&self, request: &JobAnalysisRequest) -> Result<JobAnalysis> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt(request),
                },
            ],
            max_tokens: 900,
            temperature: 0.2,
        };

        info!(model = %self.model, "calling analysis provider");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .context("Failed to send request to analysis provider")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("Provider returned status {}: {}", status, error_text);
        }

        let chat: ChatResponse = response
            .json()
            .await
            .context("Failed to parse provider response")?;
        let content = chat
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .context("Provider response contained no choices")?;

        let payload: ProviderPayload = serde_json::from_str(content.trim())
            .context("Provider content was not the requested JSON shape")?;

        Ok(JobAnalysis {
            scope: payload.scope,
            requirements: payload.requirements,
            responsibilities: payload.responsibilities,
            skills: payload.skills,
            salary_range: SalaryRange {
                min: payload.salary_range.min,
                max: payload.salary_range.max,
                currency: payload.salary_range.currency,
            },
            confidence: payload.confidence.clamp(0.0, 1.0),
            source: AnalysisSource::Provider,
        })
    }
}

fn user_prompt(request: &JobAnalysisRequest) -> String {
    let mut prompt = format!("Job title: {}", request.job_title);
    if let Some(department) = &request.department {
        prompt.push_str(&format!("\nDepartment: {}", department));
    }
    if let Some(location) = &request.location {
        prompt.push_str(&format!("\nLocation: {}", location));
    }
    if let Some(job_type) = &request.job_type {
        prompt.push_str(&format!("\nEmployment type: {}", job_type));
    }
    if let Some(description) = &request.job_description {
        prompt.push_str(&format!("\nDescription:\n{}", description));
    }
    prompt
}
