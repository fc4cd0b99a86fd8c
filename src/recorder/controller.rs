//! Per-question recording state machine
//!
//! One canonical controller for the interview view: it owns the capture
//! backend, tracks the per-question phase, enforces the record-before-advance
//! rule, and packages completed answers for submission. Validation failures
//! are surfaced as recoverable errors and never change state.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;

use crate::session::Session;

use super::AnswerCapture;

/// Microphone acquisition state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MicState {
    /// Not probed yet
    Unchecked,
    /// Input device acquired, recording possible
    Ready,
    /// Device acquisition failed; sticky until the user retries
    Denied(String),
}

/// Capture phase for the current question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapturePhase {
    /// No capture session and no requirement satisfied yet
    Idle,
    /// Capture in progress
    Recording,
    /// Artifact exists for the current question
    Captured,
}

/// Submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitState {
    Editing,
    Submitting,
    Submitted,
}

/// Controller configuration
#[derive(Debug, Clone)]
pub struct RecorderConfig {
    /// Reject advancing past a question with no recorded answer
    pub require_recording_to_advance: bool,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            require_recording_to_advance: true,
        }
    }
}

/// A completed interview packaged for the submit flow: candidate identity
/// plus one artifact per question, ordered by position
#[derive(Debug, Clone)]
pub struct AnswerSubmission {
    pub candidate_id: String,
    pub artifacts: Vec<PathBuf>,
}

/// The interview recording controller
pub struct InterviewRecorder {
    capture: Box<dyn AnswerCapture>,
    answers_dir: PathBuf,
    config: RecorderConfig,
    mic: MicState,
    recording_since: Option<Instant>,
    submit: SubmitState,
}

impl InterviewRecorder {
    pub fn new(
        capture: Box<dyn AnswerCapture>,
        answers_dir: PathBuf,
        config: RecorderConfig,
    ) -> Self {
        Self {
            capture,
            answers_dir,
            config,
            mic: MicState::Unchecked,
            recording_since: None,
            submit: SubmitState::Editing,
        }
    }

    /// Probe the capture backend. Safe to call again after a denial.
    pub fn initialize(&mut self) -> Result<()> {
        match self.capture.available() {
            Ok(()) => {
                tracing::info!("Capture backend ready: {}", self.capture.backend_name());
                self.mic = MicState::Ready;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Capture backend unavailable: {:#}", e);
                self.mic = MicState::Denied(format!("{:#}", e));
                Err(e)
            }
        }
    }

    pub fn mic_state(&self) -> &MicState {
        &self.mic
    }

    /// Phase of the current question, derived from capture state and
    /// session progress
    pub fn phase(&self, session: &Session) -> CapturePhase {
        if self.recording_since.is_some() {
            CapturePhase::Recording
        } else if session.is_recorded(session.current_question_index()) {
            CapturePhase::Captured
        } else {
            CapturePhase::Idle
        }
    }

    /// Elapsed seconds of the in-progress capture, 0 when idle
    pub fn elapsed_secs(&self) -> u64 {
        self.recording_since
            .map(|t| t.elapsed().as_secs())
            .unwrap_or(0)
    }

    fn artifact_path(&self, question_index: usize) -> PathBuf {
        self.answers_dir.join(format!("q{:02}.wav", question_index + 1))
    }

    /// Start capturing the current question's answer
    pub fn start_recording(&mut self, session: &Session) -> Result<()> {
        if self.mic != MicState::Ready {
            anyhow::bail!("Microphone not available. Allow access and retry.");
        }
        if self.phase(session) != CapturePhase::Idle {
            anyhow::bail!("A recording already exists for this question. Retake it first.");
        }
        if self.submit != SubmitState::Editing {
            anyhow::bail!("Submission in progress");
        }
        session
            .current_question()
            .ok_or_else(|| anyhow::anyhow!("No question to answer"))?;

        let path = self.artifact_path(session.current_question_index());
        self.capture.start(&path)?;
        self.recording_since = Some(Instant::now());
        Ok(())
    }

    /// Stop the capture session, finalize the artifact, and store it at the
    /// current question position. Returns the finished artifact path.
    pub fn stop_recording(&mut self, session: &mut Session) -> Result<PathBuf> {
        if self.recording_since.is_none() {
            anyhow::bail!("Not recording");
        }

        self.capture.stop()?;
        self.recording_since = None;

        let index = session.current_question_index();
        let path = self.artifact_path(index);
        session.store_answer(index, path.clone());
        Ok(path)
    }

    /// Discard the current question's artifact and return it to idle.
    /// Idempotent when nothing is recorded.
    pub fn retake(&mut self, session: &mut Session) -> Result<()> {
        if self.recording_since.is_some() {
            anyhow::bail!("Stop the recording first");
        }
        session.clear_answer(session.current_question_index());
        Ok(())
    }

    /// Advance to the next question. Rejected while recording, past the last
    /// question, or (when configured) past an unrecorded question.
    pub fn next_question(&mut self, session: &mut Session) -> Result<()> {
        if self.recording_since.is_some() {
            anyhow::bail!("Stop the recording first");
        }

        let index = session.current_question_index();
        if self.config.require_recording_to_advance && !session.is_recorded(index) {
            anyhow::bail!("Record your answer before moving to the next question");
        }
        if index + 1 >= session.question_count() {
            anyhow::bail!("Already at the last question");
        }

        session.set_current_question_index(index + 1);
        Ok(())
    }

    /// Go back to the previous question. Always allowed down to the first.
    pub fn previous_question(&mut self, session: &mut Session) -> Result<()> {
        if self.recording_since.is_some() {
            anyhow::bail!("Stop the recording first");
        }

        let index = session.current_question_index();
        if index == 0 {
            anyhow::bail!("Already at the first question");
        }

        session.set_current_question_index(index - 1);
        Ok(())
    }

    /// Gate and package a submission. Rejected locally, with the count of
    /// missing answers, unless every question has a recorded artifact.
    /// Moves the controller into the submitting state on success.
    pub fn begin_submission(&mut self, session: &Session) -> Result<AnswerSubmission> {
        if self.recording_since.is_some() {
            anyhow::bail!("Stop the recording first");
        }
        match self.submit {
            SubmitState::Submitting => anyhow::bail!("Submission already in progress"),
            SubmitState::Submitted => anyhow::bail!("Interview already submitted"),
            SubmitState::Editing => {}
        }

        let missing = session.missing_count();
        if missing > 0 {
            anyhow::bail!(
                "Please answer all {} questions before submitting ({} missing)",
                session.question_count(),
                missing
            );
        }

        let candidate = session.require_candidate()?;
        let artifacts = session
            .ordered_artifacts()
            .ok_or_else(|| anyhow::anyhow!("Incomplete answer set"))?;

        self.submit = SubmitState::Submitting;
        Ok(AnswerSubmission {
            candidate_id: candidate.candidate_id.clone(),
            artifacts,
        })
    }

    /// Record a failed submission: back to the pre-submission state with
    /// every artifact intact so the user can retry without re-recording
    pub fn submission_failed(&mut self) {
        if self.submit == SubmitState::Submitting {
            self.submit = SubmitState::Editing;
        }
    }

    /// Record a successful submission. Terminal.
    pub fn submission_succeeded(&mut self) {
        self.submit = SubmitState::Submitted;
    }

    pub fn is_submitting(&self) -> bool {
        self.submit == SubmitState::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.submit == SubmitState::Submitted
    }
}

impl Drop for InterviewRecorder {
    fn drop(&mut self) {
        // Release the capture stream on every exit path
        if self.capture.is_recording() {
            let _ = self.capture.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Candidate, Question, Session};
    use anyhow::Result;
    use std::cell::RefCell;
    use std::path::Path;
    use std::rc::Rc;

    /// Capture double that tracks start/stop calls without touching audio
    struct FakeCapture {
        available: bool,
        recording: bool,
        started: Rc<RefCell<Vec<PathBuf>>>,
    }

    impl FakeCapture {
        fn new(available: bool) -> (Self, Rc<RefCell<Vec<PathBuf>>>) {
            let started = Rc::new(RefCell::new(Vec::new()));
            (
                Self {
                    available,
                    recording: false,
                    started: started.clone(),
                },
                started,
            )
        }
    }

    impl AnswerCapture for FakeCapture {
        fn available(&self) -> Result<()> {
            if self.available {
                Ok(())
            } else {
                anyhow::bail!("No input device available")
            }
        }

        fn start(&mut self, output_path: &Path) -> Result<()> {
            self.recording = true;
            self.started.borrow_mut().push(output_path.to_path_buf());
            Ok(())
        }

        fn stop(&mut self) -> Result<()> {
            self.recording = false;
            Ok(())
        }

        fn is_recording(&self) -> bool {
            self.recording
        }

        fn backend_name(&self) -> &'static str {
            "fake"
        }
    }

    fn session_with_questions(n: usize) -> Session {
        let mut session = Session::new();
        session.set_candidate(Candidate {
            candidate_id: "cd_123456".to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            resume_url: None,
        });
        session.replace_questions(
            (1..=n)
                .map(|i| Question::new(i, format!("Question {}", i)))
                .collect(),
        );
        session
    }

    fn ready_recorder() -> InterviewRecorder {
        let (capture, _) = FakeCapture::new(true);
        let mut recorder = InterviewRecorder::new(
            Box::new(capture),
            PathBuf::from("/tmp/vetta-test"),
            RecorderConfig::default(),
        );
        recorder.initialize().unwrap();
        recorder
    }

    #[test]
    fn denied_mic_blocks_recording_until_retry() {
        let (capture, _) = FakeCapture::new(false);
        let mut recorder = InterviewRecorder::new(
            Box::new(capture),
            PathBuf::from("/tmp/vetta-test"),
            RecorderConfig::default(),
        );
        assert!(recorder.initialize().is_err());
        assert!(matches!(recorder.mic_state(), MicState::Denied(_)));

        let session = session_with_questions(3);
        let err = recorder.start_recording(&session).unwrap_err();
        assert!(err.to_string().contains("Microphone not available"));
    }

    #[test]
    fn record_stop_marks_exactly_current_question() {
        let mut recorder = ready_recorder();
        let mut session = session_with_questions(3);

        recorder.start_recording(&session).unwrap();
        assert_eq!(recorder.phase(&session), CapturePhase::Recording);

        let path = recorder.stop_recording(&mut session).unwrap();
        assert_eq!(recorder.phase(&session), CapturePhase::Captured);
        assert!(path.ends_with("q01.wav"));
        assert!(session.is_recorded(0));
        assert!(!session.is_recorded(1));
        assert!(!session.is_recorded(2));
    }

    #[test]
    fn start_is_rejected_unless_idle() {
        let mut recorder = ready_recorder();
        let mut session = session_with_questions(2);

        recorder.start_recording(&session).unwrap();
        assert!(recorder.start_recording(&session).is_err());

        recorder.stop_recording(&mut session).unwrap();
        let err = recorder.start_recording(&session).unwrap_err();
        assert!(err.to_string().contains("Retake"));
    }

    #[test]
    fn retake_clears_current_question_and_is_idempotent() {
        let mut recorder = ready_recorder();
        let mut session = session_with_questions(3);

        recorder.start_recording(&session).unwrap();
        recorder.stop_recording(&mut session).unwrap();
        recorder.next_question(&mut session).unwrap();
        recorder.start_recording(&session).unwrap();
        recorder.stop_recording(&mut session).unwrap();

        recorder.retake(&mut session).unwrap();
        recorder.retake(&mut session).unwrap();

        assert!(session.is_recorded(0));
        assert!(!session.is_recorded(1));
        assert_eq!(recorder.phase(&session), CapturePhase::Idle);
    }

    #[test]
    fn advance_rejected_while_current_question_unrecorded() {
        let mut recorder = ready_recorder();
        let mut session = session_with_questions(3);

        let err = recorder.next_question(&mut session).unwrap_err();
        assert!(err.to_string().contains("Record your answer"));
        assert_eq!(session.current_question_index(), 0);

        recorder.start_recording(&session).unwrap();
        recorder.stop_recording(&mut session).unwrap();
        recorder.next_question(&mut session).unwrap();
        assert_eq!(session.current_question_index(), 1);
    }

    #[test]
    fn advance_allowed_when_requirement_disabled() {
        let (capture, _) = FakeCapture::new(true);
        let mut recorder = InterviewRecorder::new(
            Box::new(capture),
            PathBuf::from("/tmp/vetta-test"),
            RecorderConfig {
                require_recording_to_advance: false,
            },
        );
        recorder.initialize().unwrap();
        let mut session = session_with_questions(2);

        recorder.next_question(&mut session).unwrap();
        assert_eq!(session.current_question_index(), 1);
    }

    #[test]
    fn submission_rejected_with_missing_count() {
        let mut recorder = ready_recorder();
        let mut session = session_with_questions(3);

        recorder.start_recording(&session).unwrap();
        recorder.stop_recording(&mut session).unwrap();

        let err = recorder.begin_submission(&session).unwrap_err();
        assert!(err.to_string().contains("2 missing"));
        assert!(!recorder.is_submitting());
    }

    #[test]
    fn submission_packages_ordered_artifacts_and_blocks_repeat() {
        let mut recorder = ready_recorder();
        let mut session = session_with_questions(3);

        for _ in 0..3 {
            recorder.start_recording(&session).unwrap();
            recorder.stop_recording(&mut session).unwrap();
            let _ = recorder.next_question(&mut session);
        }

        let submission = recorder.begin_submission(&session).unwrap();
        assert_eq!(submission.candidate_id, "cd_123456");
        assert_eq!(submission.artifacts.len(), 3);
        for (i, path) in submission.artifacts.iter().enumerate() {
            assert!(path.ends_with(format!("q{:02}.wav", i + 1)));
        }

        assert!(recorder.is_submitting());
        assert!(recorder.begin_submission(&session).is_err());
    }

    #[test]
    fn failed_submission_keeps_artifacts_and_permits_retry() {
        let mut recorder = ready_recorder();
        let mut session = session_with_questions(3);

        for _ in 0..3 {
            recorder.start_recording(&session).unwrap();
            recorder.stop_recording(&mut session).unwrap();
            let _ = recorder.next_question(&mut session);
        }

        recorder.begin_submission(&session).unwrap();
        recorder.submission_failed();

        assert_eq!(session.recorded_count(), 3);
        let retry = recorder.begin_submission(&session).unwrap();
        assert_eq!(retry.artifacts.len(), 3);

        recorder.submission_succeeded();
        assert!(recorder.is_submitted());
        assert!(recorder.begin_submission(&session).is_err());
    }
}
