//! Application state and event handling

use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::prelude::*;

use crate::api::{build_api, InterviewApi};
use crate::config::Settings;
use crate::flow::{self, CandidateFields};
use crate::recorder::{create_capture, CapturePhase, InterviewRecorder, RecorderConfig};
use crate::session::Session;
use crate::tui::screens::{
    DashboardScreen, DetailScreen, InterviewScreen, LandingScreen, ResultsScreen, UploadAction,
    UploadScreen,
};
use crate::tui::widgets::HelpPopup;

/// Active view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Landing,
    Upload,
    Interview,
    Results,
    Dashboard,
    Detail,
}

/// Main application state
pub struct App {
    settings: Settings,
    api: Box<dyn InterviewApi>,
    session: Session,
    recorder: Option<InterviewRecorder>,
    current_screen: AppScreen,
    show_help: bool,
    notice: Option<String>,
    results_candidate: Option<String>,
    landing: LandingScreen,
    upload: UploadScreen,
    interview: InterviewScreen,
    results: ResultsScreen,
    dashboard: DashboardScreen,
    detail: DetailScreen,
}

impl App {
    pub fn new(settings: Settings) -> Result<Self> {
        let api = build_api(&settings)?;
        Ok(Self {
            settings,
            api,
            session: Session::new(),
            recorder: None,
            current_screen: AppScreen::Landing,
            show_help: false,
            notice: None,
            results_candidate: None,
            landing: LandingScreen::new(),
            upload: UploadScreen::new(),
            interview: InterviewScreen::new(),
            results: ResultsScreen::new(),
            dashboard: DashboardScreen::new(),
            detail: DetailScreen::new(),
        })
    }

    /// Whether keystrokes currently belong to a text field, in which case
    /// the global q/Esc/? shortcuts must not fire
    pub fn wants_text_input(&self) -> bool {
        self.current_screen == AppScreen::Upload && !self.show_help && !self.upload.uploading
    }

    /// Whether a back action from the current state should exit the app
    pub fn should_quit(&self) -> bool {
        self.current_screen == AppScreen::Landing && !self.show_help
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Navigate one level up the screen hierarchy
    pub fn handle_back(&mut self) {
        if self.show_help {
            self.show_help = false;
            return;
        }

        self.notice = None;
        match self.current_screen {
            AppScreen::Landing => {}
            AppScreen::Detail => {
                self.current_screen = AppScreen::Dashboard;
            }
            AppScreen::Interview => {
                // Release the microphone; progress stays in the session and
                // can be resumed from the landing screen
                self.recorder = None;
                self.current_screen = AppScreen::Landing;
            }
            _ => {
                self.current_screen = AppScreen::Landing;
            }
        }
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.size();

        match self.current_screen {
            AppScreen::Landing => self.landing.draw(frame, area, &self.session),
            AppScreen::Upload => self.upload.draw(frame, area, self.notice.as_deref()),
            AppScreen::Interview => {
                if let Some(recorder) = &self.recorder {
                    self.interview
                        .draw(frame, area, &self.session, recorder, self.notice.as_deref());
                }
            }
            AppScreen::Results => self.results.draw(frame, area),
            AppScreen::Dashboard => self.dashboard.draw(frame, area),
            AppScreen::Detail => self.detail.draw(frame, area),
        }

        if self.show_help {
            HelpPopup::draw(frame, area, self.current_screen);
        }
    }

    pub async fn handle_key(&mut self, key: KeyCode) -> Result<()> {
        if self.show_help {
            self.show_help = false;
            return Ok(());
        }

        match self.current_screen {
            AppScreen::Landing => self.handle_landing_key(key).await,
            AppScreen::Upload => self.handle_upload_key(key).await,
            AppScreen::Interview => self.handle_interview_key(key).await,
            AppScreen::Results => self.handle_results_key(key).await,
            AppScreen::Dashboard => self.handle_dashboard_key(key).await,
            AppScreen::Detail => self.handle_detail_key(key),
        }
    }

    async fn handle_landing_key(&mut self, key: KeyCode) -> Result<()> {
        match key {
            KeyCode::Char('u') => {
                self.notice = None;
                self.upload.uploading = false;
                self.current_screen = AppScreen::Upload;
            }
            KeyCode::Char('d') => {
                self.refresh_dashboard().await;
                self.current_screen = AppScreen::Dashboard;
            }
            KeyCode::Char('i') if self.session.question_count() > 0 => {
                self.notice = None;
                if self.recorder.is_none() {
                    match self.make_recorder() {
                        Ok(mut recorder) => {
                            // A denial is shown in the interview view, where
                            // the user can retry
                            let _ = recorder.initialize();
                            self.recorder = Some(recorder);
                        }
                        Err(e) => {
                            tracing::error!("Failed to create recorder: {:#}", e);
                            return Ok(());
                        }
                    }
                }
                self.current_screen = AppScreen::Interview;
            }
            _ => {}
        }
        Ok(())
    }

    async fn handle_upload_key(&mut self, key: KeyCode) -> Result<()> {
        if let Some(UploadAction::Submit) = self.upload.handle_key(key) {
            self.submit_upload().await;
        }
        Ok(())
    }

    async fn submit_upload(&mut self) {
        self.upload.uploading = true;
        self.notice = None;

        let fields = CandidateFields {
            name: self.upload.name.clone(),
            email: self.upload.email.clone(),
        };
        let resume_path = PathBuf::from(self.upload.resume_path.trim());

        match flow::submit_resume(self.api.as_ref(), &mut self.session, &fields, &resume_path).await
        {
            Ok(()) => {
                self.upload.uploading = false;
                match self.make_recorder() {
                    Ok(mut recorder) => {
                        let _ = recorder.initialize();
                        self.recorder = Some(recorder);
                        self.current_screen = AppScreen::Interview;
                    }
                    Err(e) => {
                        self.notice = Some(format!("{:#}", e));
                    }
                }
            }
            Err(e) => {
                self.upload.uploading = false;
                self.notice = Some(e.to_string());
            }
        }
    }

    /// Build a recorder for the session's candidate, with the answers
    /// directory created up front
    fn make_recorder(&self) -> Result<InterviewRecorder> {
        let candidate = self.session.require_candidate()?;
        let answers_dir = self.settings.answers_dir(&candidate.candidate_id);
        self.settings.ensure_dirs()?;
        std::fs::create_dir_all(&answers_dir)?;

        let capture = create_capture(&self.settings)?;
        Ok(InterviewRecorder::new(
            capture,
            answers_dir,
            RecorderConfig {
                require_recording_to_advance: self.settings.interview.require_recording_to_advance,
            },
        ))
    }

    async fn handle_interview_key(&mut self, key: KeyCode) -> Result<()> {
        let Some(recorder) = self.recorder.as_mut() else {
            return Ok(());
        };

        let outcome = match key {
            KeyCode::Char('r') => {
                if recorder.phase(&self.session) == CapturePhase::Recording {
                    recorder.stop_recording(&mut self.session).map(|_| ())
                } else {
                    recorder.start_recording(&self.session)
                }
            }
            KeyCode::Char('t') => recorder.retake(&mut self.session),
            KeyCode::Char('m') => {
                let _ = recorder.initialize();
                Ok(())
            }
            KeyCode::Left => recorder.previous_question(&mut self.session),
            KeyCode::Right => recorder.next_question(&mut self.session),
            KeyCode::Char('s') => {
                self.submit_interview().await;
                return Ok(());
            }
            _ => Ok(()),
        };

        self.notice = outcome.err().map(|e| e.to_string());
        Ok(())
    }

    async fn submit_interview(&mut self) {
        let submission = {
            let Some(recorder) = self.recorder.as_mut() else {
                return;
            };
            match recorder.begin_submission(&self.session) {
                Ok(submission) => submission,
                Err(e) => {
                    self.notice = Some(e.to_string());
                    return;
                }
            }
        };

        match flow::submit_answers(self.api.as_ref(), &self.settings, &submission).await {
            Ok(record) => {
                if let Some(recorder) = self.recorder.as_mut() {
                    recorder.submission_succeeded();
                }
                self.recorder = None;
                self.notice = None;
                self.results_candidate = Some(record.candidate_id.clone());
                // Short pause before switching to results
                tokio::time::sleep(std::time::Duration::from_millis(400)).await;
                self.load_results(&record.candidate_id).await;
                self.current_screen = AppScreen::Results;
            }
            Err(e) => {
                if let Some(recorder) = self.recorder.as_mut() {
                    recorder.submission_failed();
                }
                self.notice = Some(e.to_string());
            }
        }
    }

    async fn load_results(&mut self, candidate_id: &str) {
        self.results.set_loading();
        match self.api.fetch_results(candidate_id).await {
            Ok(evaluation) => self.results.set_evaluation(evaluation),
            Err(e) => self.results.set_error(e.to_string()),
        }
    }

    async fn handle_results_key(&mut self, key: KeyCode) -> Result<()> {
        match key {
            KeyCode::Up => self.results.scroll_up(),
            KeyCode::Down => self.results.scroll_down(),
            KeyCode::PageUp => self.results.page_up(),
            KeyCode::PageDown => self.results.page_down(),
            KeyCode::Char('r') => {
                if let Some(candidate_id) = self.results_candidate.clone() {
                    self.load_results(&candidate_id).await;
                }
            }
            _ => {}
        }
        Ok(())
    }

    async fn refresh_dashboard(&mut self) {
        match self.api.fetch_candidates().await {
            Ok(candidates) => self.dashboard.set_candidates(candidates),
            Err(e) => self.dashboard.set_error(e.to_string()),
        }
    }

    async fn handle_dashboard_key(&mut self, key: KeyCode) -> Result<()> {
        match key {
            KeyCode::Up => self.dashboard.previous(),
            KeyCode::Down => self.dashboard.next(),
            KeyCode::Char('r') => self.refresh_dashboard().await,
            KeyCode::Enter => {
                if let Some(candidate_id) = self.dashboard.selected_candidate_id() {
                    match self.api.fetch_candidate(&candidate_id).await {
                        Ok(record) => {
                            self.detail.set_record(record);
                            self.current_screen = AppScreen::Detail;
                        }
                        Err(e) => self.dashboard.set_error(e.to_string()),
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_detail_key(&mut self, key: KeyCode) -> Result<()> {
        match key {
            KeyCode::Up => self.detail.scroll_up(),
            KeyCode::Down => self.detail.scroll_down(),
            _ => {}
        }
        Ok(())
    }
}
