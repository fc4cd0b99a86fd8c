//! Wire types for the interview API

use serde::{Deserialize, Serialize};

/// Per-question evaluation produced by the remote evaluator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub question_no: usize,
    pub question_text: String,
    #[serde(default)]
    pub answer_text: String,
    pub remark: String,
    pub improvement: String,
    pub score: f64,
}

/// Evaluation for one candidate: per-question feedback plus the aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub candidate_id: String,
    pub feedback: Vec<FeedbackItem>,
    pub final_score: f64,
}

/// Candidate identity as stored server-side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateInfo {
    pub candidate_id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRef {
    pub question_no: usize,
    pub question_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRef {
    pub question_no: usize,
    pub media_url: String,
}

/// Full candidate record as returned by the dashboard endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub candidate: CandidateInfo,
    #[serde(default)]
    pub questions: Vec<QuestionRef>,
    #[serde(default)]
    pub answers: Vec<AnswerRef>,
    #[serde(default)]
    pub evaluation_feedback: Vec<FeedbackItem>,
    /// Absent until the evaluator has run
    #[serde(default)]
    pub final_score: Option<f64>,
    #[serde(default)]
    pub is_shortlisted: bool,
}

/// Body of `POST /upload_resume` responses
#[derive(Debug, Deserialize)]
pub(crate) struct QuestionsResponse {
    #[serde(default)]
    pub questions: Vec<String>,
}

/// Body of `GET /all_candidate_details` responses
#[derive(Debug, Deserialize)]
pub(crate) struct CandidatesResponse {
    #[serde(default)]
    pub candidates: Vec<CandidateRecord>,
}

/// Body of `GET /all_candidate_details/{id}` responses
#[derive(Debug, Deserialize)]
pub(crate) struct CandidateDetailsResponse {
    pub details: CandidateRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_record_tolerates_missing_final_score() {
        let json = r#"{
            "candidate": {
                "candidate_id": "cd_123456",
                "name": "Jane Doe",
                "email": "jane@x.com"
            },
            "is_shortlisted": false
        }"#;
        let record: CandidateRecord = serde_json::from_str(json).unwrap();
        assert!(record.final_score.is_none());
        assert!(record.questions.is_empty());
    }

    #[test]
    fn evaluation_round_trips() {
        let json = r#"{
            "candidate_id": "cd_654321",
            "feedback": [{
                "question_no": 1,
                "question_text": "Tell me about yourself.",
                "answer_text": "I am a developer...",
                "remark": "Clear introduction.",
                "improvement": "Add quantifiable results.",
                "score": 8.5
            }],
            "final_score": 8.5
        }"#;
        let eval: Evaluation = serde_json::from_str(json).unwrap();
        assert_eq!(eval.feedback.len(), 1);
        assert_eq!(eval.feedback[0].question_no, 1);
        assert!((eval.final_score - 8.5).abs() < f64::EPSILON);
    }
}
