pub mod analyzer;
pub mod fallback;
pub mod provider;
pub mod types;

pub use analyzer::JobAnalyzer;
pub use provider::ProviderClient;
pub use types::{AnalysisSource, JobAnalysis, JobAnalysisRequest, SalaryRange};
