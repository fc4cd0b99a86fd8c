//! Interview API module
//!
//! The remote service that parses resumes, generates questions, and
//! evaluates recorded answers. Treated as opaque: this module only knows
//! the wire contract.

mod client;
mod http;
mod models;

pub use client::{build_api, InterviewApi, ResumeUpload};
pub use http::HttpApi;
pub use models::{AnswerRef, CandidateInfo, CandidateRecord, Evaluation, FeedbackItem, QuestionRef};
