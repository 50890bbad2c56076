pub mod environment;
pub mod interview;
pub mod job_analysis;
pub mod resumes;
pub mod utils;
pub mod web;

pub use environment::EnvironmentConfig;
pub use web::start_web_server;
