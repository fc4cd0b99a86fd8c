use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;

use crate::api::client::{InterviewApi, ResumeUpload};
use crate::api::models::{
    CandidateDetailsResponse, CandidateRecord, CandidatesResponse, Evaluation, QuestionsResponse,
};
use crate::config::Settings;
use crate::session::Question;

/// reqwest-backed implementation of the interview API contract
pub struct HttpApi {
    http: Client,
    base_url: String,
}

impl HttpApi {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let base_url = settings.api.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            anyhow::bail!("api.base_url is empty. Set it in config or VETTA_API_URL.");
        }

        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(settings.api.timeout_secs))
                .build()
                .context("Failed to build HTTP client")?,
            base_url,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl InterviewApi for HttpApi {
    async fn upload_resume(&self, request: ResumeUpload<'_>) -> Result<Vec<Question>> {
        let file_name = request
            .resume_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resume".to_string());

        let bytes = tokio::fs::read(request.resume_path)
            .await
            .with_context(|| format!("Failed to read resume: {}", request.resume_path.display()))?;

        let form = Form::new()
            .text("candidate_id", request.candidate_id.to_string())
            .text("name", request.name.to_string())
            .text("email", request.email.to_string())
            .part("resume_file", Part::bytes(bytes).file_name(file_name));

        let response = self
            .http
            .post(self.url("/upload_resume"))
            .multipart(form)
            .send()
            .await
            .context("Resume upload request failed")?
            .error_for_status()
            .context("Resume upload returned an error status")?;

        let payload: QuestionsResponse = response
            .json()
            .await
            .context("Failed to parse question list")?;

        tracing::info!(
            "Received {} generated questions for {}",
            payload.questions.len(),
            request.candidate_id
        );

        Ok(payload
            .questions
            .into_iter()
            .enumerate()
            .map(|(i, text)| Question::new(i + 1, text))
            .collect())
    }

    async fn submit_answers(&self, candidate_id: &str, artifacts: &[PathBuf]) -> Result<()> {
        let mut form = Form::new().text("candidate_id", candidate_id.to_string());

        // One ordered part per question, named deterministically by position.
        for (i, path) in artifacts.iter().enumerate() {
            let bytes = tokio::fs::read(path)
                .await
                .with_context(|| format!("Failed to read answer: {}", path.display()))?;
            let name = format!("q{:02}.wav", i + 1);
            form = form.part(format!("answer_{}", i + 1), Part::bytes(bytes).file_name(name));
        }

        self.http
            .post(self.url("/submit_answers"))
            .multipart(form)
            .send()
            .await
            .context("Answer submission request failed")?
            .error_for_status()
            .context("Answer submission returned an error status")?;

        tracing::info!("Submitted {} answers for {}", artifacts.len(), candidate_id);
        Ok(())
    }

    async fn fetch_results(&self, candidate_id: &str) -> Result<Evaluation> {
        let response = self
            .http
            .get(self.url(&format!("/results/{}", candidate_id)))
            .send()
            .await
            .context("Results request failed")?
            .error_for_status()
            .context("Results request returned an error status")?;

        response.json().await.context("Failed to parse evaluation")
    }

    async fn fetch_candidates(&self) -> Result<Vec<CandidateRecord>> {
        let response = self
            .http
            .get(self.url("/all_candidate_details"))
            .send()
            .await
            .context("Candidate list request failed")?
            .error_for_status()
            .context("Candidate list request returned an error status")?;

        let payload: CandidatesResponse = response
            .json()
            .await
            .context("Failed to parse candidate list")?;
        Ok(payload.candidates)
    }

    async fn fetch_candidate(&self, candidate_id: &str) -> Result<CandidateRecord> {
        let response = self
            .http
            .get(self.url(&format!("/all_candidate_details/{}", candidate_id)))
            .send()
            .await
            .context("Candidate details request failed")?
            .error_for_status()
            .context("Candidate details request returned an error status")?;

        let payload: CandidateDetailsResponse = response
            .json()
            .await
            .context("Failed to parse candidate details")?;
        Ok(payload.details)
    }
}
