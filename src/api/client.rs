use std::path::{Path, PathBuf};

use anyhow::Result;
use async_trait::async_trait;

use crate::api::http::HttpApi;
use crate::api::models::{CandidateRecord, Evaluation};
use crate::config::Settings;
use crate::session::Question;

/// Resume upload request payload
pub struct ResumeUpload<'a> {
    pub candidate_id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub resume_path: &'a Path,
}

/// The remote interview service: question generation, answer evaluation,
/// and the candidate read paths
#[async_trait]
pub trait InterviewApi: Send + Sync {
    /// Submit a resume and receive the generated question set
    async fn upload_resume(&self, request: ResumeUpload<'_>) -> Result<Vec<Question>>;

    /// Submit every recorded answer, ordered by question position
    async fn submit_answers(&self, candidate_id: &str, artifacts: &[PathBuf]) -> Result<()>;

    /// Fetch the evaluation for one candidate
    async fn fetch_results(&self, candidate_id: &str) -> Result<Evaluation>;

    /// Fetch all candidate records (dashboard read path)
    async fn fetch_candidates(&self) -> Result<Vec<CandidateRecord>>;

    /// Fetch one candidate's full record
    async fn fetch_candidate(&self, candidate_id: &str) -> Result<CandidateRecord>;
}

/// Build an API client from runtime settings.
pub fn build_api(settings: &Settings) -> Result<Box<dyn InterviewApi>> {
    Ok(Box::new(HttpApi::from_settings(settings)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn build_api_rejects_blank_base_url() {
        let mut settings = Settings::default();
        settings.api.base_url = "   ".to_string();

        let err = match build_api(&settings) {
            Ok(_) => panic!("expected client creation to fail"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("api.base_url"));
    }
}
