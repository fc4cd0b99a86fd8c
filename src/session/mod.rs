//! Interview session store
//!
//! In-memory, process-lifetime state shared by every view: the active
//! candidate, the generated question sequence, the current question pointer,
//! and the recorded answer artifacts. Owned by the application shell and
//! passed explicitly to views; all mutation goes through these methods.

use std::path::PathBuf;

use anyhow::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Candidate identity, created once at upload time and immutable thereafter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub candidate_id: String,
    pub name: String,
    pub email: String,
    pub resume_url: Option<String>,
}

/// One interview question, part of an ordered batch returned by the upload step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Position in the interview, starting at 1
    pub id: usize,
    pub text: String,
    pub category: String,
}

impl Question {
    pub fn new(id: usize, text: String) -> Self {
        Self {
            id,
            text,
            category: "General".to_string(),
        }
    }
}

/// Generate a client-side candidate identifier: `cd_` plus 6 decimal digits
pub fn generate_candidate_id() -> String {
    let n: u32 = rand::thread_rng().gen_range(100_000..1_000_000);
    format!("cd_{}", n)
}

/// Tab-lifetime interview state
///
/// Invariant: `answers`, `recorded`, and `questions` always have the same
/// length, and `recorded[i]` is true exactly when `answers[i]` is set.
#[derive(Debug, Default)]
pub struct Session {
    candidate: Option<Candidate>,
    questions: Vec<Question>,
    current_question_index: usize,
    answers: Vec<Option<PathBuf>>,
    recorded: Vec<bool>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active candidate record wholesale
    pub fn set_candidate(&mut self, candidate: Candidate) {
        self.candidate = Some(candidate);
    }

    pub fn candidate(&self) -> Option<&Candidate> {
        self.candidate.as_ref()
    }

    /// Get the active candidate, failing fast when the session is used
    /// before the upload step populated it
    pub fn require_candidate(&self) -> Result<&Candidate> {
        self.candidate
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("No candidate in session; complete the upload step first"))
    }

    /// Replace the question sequence and atomically reset all per-question
    /// progress: answers, recorded flags, and the current question pointer.
    pub fn replace_questions(&mut self, questions: Vec<Question>) {
        let n = questions.len();
        self.questions = questions;
        self.answers = vec![None; n];
        self.recorded = vec![false; n];
        self.current_question_index = 0;
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    pub fn set_current_question_index(&mut self, index: usize) {
        debug_assert!(index < self.questions.len() || self.questions.is_empty());
        self.current_question_index = index;
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_question_index)
    }

    /// Store the finished artifact for a question position, replacing any
    /// previous take wholesale
    pub fn store_answer(&mut self, index: usize, artifact: PathBuf) {
        if index < self.answers.len() {
            self.answers[index] = Some(artifact);
            self.recorded[index] = true;
        }
    }

    /// Discard the artifact for a question position (retake)
    pub fn clear_answer(&mut self, index: usize) {
        if index < self.answers.len() {
            self.answers[index] = None;
            self.recorded[index] = false;
        }
    }

    pub fn answer(&self, index: usize) -> Option<&PathBuf> {
        self.answers.get(index).and_then(|a| a.as_ref())
    }

    pub fn is_recorded(&self, index: usize) -> bool {
        self.recorded.get(index).copied().unwrap_or(false)
    }

    /// Number of questions with a recorded answer
    pub fn recorded_count(&self) -> usize {
        self.recorded.iter().filter(|r| **r).count()
    }

    /// Number of questions still missing an answer
    pub fn missing_count(&self) -> usize {
        self.recorded.iter().filter(|r| !**r).count()
    }

    /// Whether every question has a recorded answer
    pub fn is_complete(&self) -> bool {
        !self.questions.is_empty() && self.recorded.iter().all(|r| *r)
    }

    /// All artifacts ordered by question position, available only when the
    /// interview is complete
    pub fn ordered_artifacts(&self) -> Option<Vec<PathBuf>> {
        self.answers.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_questions() -> Vec<Question> {
        vec![
            Question::new(1, "Tell me about yourself.".to_string()),
            Question::new(2, "Why this role?".to_string()),
            Question::new(3, "Describe a hard project.".to_string()),
        ]
    }

    #[test]
    fn replace_questions_resets_progress_atomically() {
        let mut session = Session::new();
        session.replace_questions(three_questions());
        session.store_answer(1, PathBuf::from("/tmp/q02.wav"));
        session.set_current_question_index(2);

        session.replace_questions(three_questions());

        assert_eq!(session.question_count(), 3);
        assert_eq!(session.current_question_index(), 0);
        assert_eq!(session.recorded_count(), 0);
        for i in 0..3 {
            assert!(!session.is_recorded(i));
            assert!(session.answer(i).is_none());
        }
    }

    #[test]
    fn store_answer_touches_exactly_one_index() {
        let mut session = Session::new();
        session.replace_questions(three_questions());

        session.store_answer(1, PathBuf::from("/tmp/q02.wav"));

        assert!(!session.is_recorded(0));
        assert!(session.is_recorded(1));
        assert!(!session.is_recorded(2));
        assert_eq!(session.answer(1), Some(&PathBuf::from("/tmp/q02.wav")));
        assert_eq!(session.missing_count(), 2);
    }

    #[test]
    fn clear_answer_is_idempotent() {
        let mut session = Session::new();
        session.replace_questions(three_questions());
        session.store_answer(0, PathBuf::from("/tmp/q01.wav"));

        session.clear_answer(0);
        session.clear_answer(0);

        assert!(!session.is_recorded(0));
        assert!(session.answer(0).is_none());
    }

    #[test]
    fn complete_only_when_every_question_recorded() {
        let mut session = Session::new();
        session.replace_questions(three_questions());
        assert!(!session.is_complete());

        for i in 0..3 {
            session.store_answer(i, PathBuf::from(format!("/tmp/q{:02}.wav", i + 1)));
        }
        assert!(session.is_complete());
        assert_eq!(session.ordered_artifacts().unwrap().len(), 3);
    }

    #[test]
    fn empty_session_is_never_complete() {
        let session = Session::new();
        assert!(!session.is_complete());
    }

    #[test]
    fn candidate_id_matches_wire_format() {
        let id = generate_candidate_id();
        assert!(id.starts_with("cd_"));
        let digits = &id[3..];
        assert_eq!(digits.len(), 6);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn require_candidate_fails_fast_on_empty_session() {
        let session = Session::new();
        assert!(session.require_candidate().is_err());
    }
}
