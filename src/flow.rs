//! Upload and submit flow
//!
//! Turns user-entered candidate fields plus a resume file into a populated
//! session, and a completed answer set into an evaluation request. Both
//! operations are single-attempt; all recovery is user-initiated.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{InterviewApi, ResumeUpload};
use crate::config::Settings;
use crate::recorder::AnswerSubmission;
use crate::session::{generate_candidate_id, Candidate, Session};

/// User-entered identity fields from the upload form
#[derive(Debug, Clone, Default)]
pub struct CandidateFields {
    pub name: String,
    pub email: String,
}

/// Completion metadata handed from the interview step to the results step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub candidate_id: String,
    pub completed_at: DateTime<Utc>,
    pub answers: usize,
}

/// Validate fields locally, upload the resume, and populate the session with
/// the new candidate plus the generated question set. On failure the session
/// is left untouched so the form can be retried.
pub async fn submit_resume(
    api: &dyn InterviewApi,
    session: &mut Session,
    fields: &CandidateFields,
    resume_path: &Path,
) -> Result<()> {
    if fields.name.trim().is_empty() || fields.email.trim().is_empty() {
        anyhow::bail!("Please fill in your name and email");
    }
    if !is_supported_resume(resume_path) {
        anyhow::bail!("Invalid file type. Please upload a PDF or DOCX resume");
    }
    if !resume_path.is_file() {
        anyhow::bail!("Resume file not found: {}", resume_path.display());
    }

    let candidate_id = generate_candidate_id();
    tracing::info!("Uploading resume for {}", candidate_id);

    let questions = api
        .upload_resume(ResumeUpload {
            candidate_id: &candidate_id,
            name: fields.name.trim(),
            email: fields.email.trim(),
            resume_path,
        })
        .await
        .context("Upload failed. Please try again later")?;

    if questions.is_empty() {
        anyhow::bail!("The interview service returned no questions");
    }

    session.set_candidate(Candidate {
        candidate_id,
        name: fields.name.trim().to_string(),
        email: fields.email.trim().to_string(),
        resume_url: None,
    });
    session.replace_questions(questions);

    Ok(())
}

/// Send every recorded artifact in one batched request and persist the
/// completion metadata for the results step. Artifacts on disk are never
/// touched, so a failed submission can be retried without re-recording.
pub async fn submit_answers(
    api: &dyn InterviewApi,
    settings: &Settings,
    submission: &AnswerSubmission,
) -> Result<CompletionRecord> {
    api.submit_answers(&submission.candidate_id, &submission.artifacts)
        .await
        .context("Submission failed. Your recordings are intact; please retry")?;

    let record = CompletionRecord {
        candidate_id: submission.candidate_id.clone(),
        completed_at: Utc::now(),
        answers: submission.artifacts.len(),
    };
    write_completion(settings, &record)?;

    Ok(record)
}

/// Only PDF and DOCX resumes are accepted by the interview service
fn is_supported_resume(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            e == "pdf" || e == "docx"
        })
        .unwrap_or(false)
}

/// Persist completion metadata to the data directory
pub fn write_completion(settings: &Settings, record: &CompletionRecord) -> Result<()> {
    settings.ensure_dirs()?;
    let path = settings.completion_path();
    let content = serde_json::to_string_pretty(record)?;
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write completion metadata: {}", path.display()))?;
    Ok(())
}

/// Read the last interview's completion metadata, if any
pub fn read_completion(settings: &Settings) -> Result<Option<CompletionRecord>> {
    let path = settings.completion_path();
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read completion metadata: {}", path.display()))?;
    let record = serde_json::from_str(&content)
        .with_context(|| format!("Malformed completion metadata: {}", path.display()))?;
    Ok(Some(record))
}
