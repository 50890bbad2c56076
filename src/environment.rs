// src/environment.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub uploads_path: PathBuf,
    pub provider_base_url: String,
    pub provider_model: String,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: EnvironmentConfig,
    production: EnvironmentConfig,
}

impl EnvironmentConfig {
    /// Load configuration based on environment
    pub fn load() -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);
        Self::load_from_file(&environment)
    }

    fn get_environment() -> String {
        std::env::var("TALENTFLOW_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_from_file(environment: &str) -> Result<Self> {
        let config_path = PathBuf::from("config.yaml");
        if !config_path.exists() {
            anyhow::bail!(
                "config.yaml not found in current directory. Server cannot start without configuration."
            );
        }

        let config_content =
            std::fs::read_to_string(&config_path).context("Failed to read config.yaml")?;

        let config_file: ConfigFile =
            serde_yaml::from_str(&config_content).context("Failed to parse config.yaml")?;

        let env_config = match environment {
            "production" => config_file.production,
            _ => config_file.local,
        };

        Ok(Self {
            uploads_path: Self::resolve_path(&env_config.uploads_path)?,
            ..env_config
        })
    }

    fn resolve_path(path: &PathBuf) -> Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.clone())
        } else {
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            Ok(current_dir.join(path))
        }
    }

    /// Ensure the uploads directory exists
    pub async fn ensure_directories(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.uploads_path)
            .await
            .with_context(|| {
                format!(
                    "Failed to create uploads directory: {}",
                    self.uploads_path.display()
                )
            })?;

        info!("All configured directories ensured to exist");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_parses_both_sections() {
        let yaml = r#"
local:
  uploads_path: uploads
  provider_base_url: https://api.openai.com/v1
  provider_model: gpt-4o-mini
production:
  uploads_path: /var/lib/talentflow/uploads
  provider_base_url: https://api.openai.com/v1
  provider_model: gpt-4o
"#;
        let parsed: ConfigFile = serde_yaml::from_str(yaml).expect("parse");
        assert_eq!(parsed.local.uploads_path, PathBuf::from("uploads"));
        assert_eq!(parsed.production.provider_model, "gpt-4o");
    }
}
