//! CLI command implementations

use anyhow::{Context, Result};
use std::path::Path;

use crate::api::{build_api, CandidateRecord, FeedbackItem};
use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::flow::{self, CandidateFields};
use crate::score::{deserves_congrats, format_score, truncate, ScoreBand};
use crate::session::Session;

/// Upload a resume and print the generated question set
pub async fn upload_resume(
    settings: &Settings,
    name: &str,
    email: &str,
    resume: &Path,
) -> Result<()> {
    let api = build_api(settings)?;
    let mut session = Session::new();

    let fields = CandidateFields {
        name: name.to_string(),
        email: email.to_string(),
    };
    flow::submit_resume(api.as_ref(), &mut session, &fields, resume).await?;

    let candidate = session.require_candidate()?;
    println!("Resume processed for {} <{}>", candidate.name, candidate.email);
    println!("Candidate ID: {}", candidate.candidate_id);
    println!();
    println!("Generated questions:");
    for question in session.questions() {
        println!("  {}. {}", question.id, question.text);
    }
    println!();
    println!("Run `vetta tui` to record your answers.");

    Ok(())
}

/// Show the evaluation for a candidate
pub async fn show_results(settings: &Settings, candidate_id: Option<String>) -> Result<()> {
    let candidate_id = match candidate_id {
        Some(id) => id,
        None => flow::read_completion(settings)?
            .map(|record| record.candidate_id)
            .context("No completed interview found. Pass a candidate ID.")?,
    };

    let api = build_api(settings)?;
    let evaluation = api.fetch_results(&candidate_id).await?;

    let band = ScoreBand::for_score(evaluation.final_score);
    println!("Results for {}", evaluation.candidate_id);
    println!(
        "Final score: {} ({})",
        format_score(Some(evaluation.final_score)),
        band.label()
    );
    if deserves_congrats(evaluation.final_score) {
        println!("Congratulations! Strong performance.");
    }
    println!();

    for item in &evaluation.feedback {
        print_feedback_item(item);
    }

    Ok(())
}

/// List all candidates and their final scores
pub async fn list_candidates(settings: &Settings) -> Result<()> {
    let api = build_api(settings)?;
    let candidates = api.fetch_candidates().await?;

    if candidates.is_empty() {
        println!("No candidates found");
        return Ok(());
    }

    println!(
        "{:<12} {:<24} {:<28} {:<8} {:<10}",
        "ID", "Name", "Email", "Score", "Shortlist"
    );
    println!("{}", "-".repeat(84));

    for record in &candidates {
        println!(
            "{:<12} {:<24} {:<28} {:<8} {:<10}",
            record.candidate.candidate_id,
            truncate(&record.candidate.name, 22),
            truncate(&record.candidate.email, 26),
            format_score(record.final_score),
            if record.is_shortlisted { "Yes" } else { "No" }
        );
    }

    Ok(())
}

/// Show one candidate's full record
pub async fn show_candidate(settings: &Settings, candidate_id: &str) -> Result<()> {
    let api = build_api(settings)?;
    let record = api.fetch_candidate(candidate_id).await?;

    print_candidate_record(&record);
    Ok(())
}

fn print_candidate_record(record: &CandidateRecord) {
    println!("Candidate: {} <{}>", record.candidate.name, record.candidate.email);
    println!("ID: {}", record.candidate.candidate_id);
    if let Some(url) = record.candidate.resume_url.as_deref() {
        println!("Resume: {}", url);
    }
    println!(
        "Final score: {}{}",
        format_score(record.final_score),
        record
            .final_score
            .map(|s| format!(" ({})", ScoreBand::for_score(s).label()))
            .unwrap_or_default()
    );
    println!(
        "Shortlisted: {}",
        if record.is_shortlisted { "Yes" } else { "No" }
    );

    if !record.questions.is_empty() {
        println!();
        println!("Questions:");
        for q in &record.questions {
            println!("  {}. {}", q.question_no, q.question_text);
        }
    }

    if !record.evaluation_feedback.is_empty() {
        println!();
        for item in &record.evaluation_feedback {
            print_feedback_item(item);
        }
    }
}

fn print_feedback_item(item: &FeedbackItem) {
    println!(
        "Question {}: {} [{}]",
        item.question_no,
        format_score(Some(item.score)),
        ScoreBand::for_score(item.score).label()
    );
    println!("  Q: {}", item.question_text);
    if !item.answer_text.is_empty() {
        println!("  A: {}", item.answer_text);
    }
    println!("  Remark: {}", item.remark);
    println!("  Improve: {}", item.improvement);
    println!();
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}
