//! Interview screen - per-question answer recording

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

use crate::recorder::{CapturePhase, InterviewRecorder, MicState};
use crate::session::Session;

/// Interview screen state
pub struct InterviewScreen;

impl InterviewScreen {
    pub fn new() -> Self {
        Self
    }

    pub fn draw(
        &self,
        frame: &mut Frame,
        area: Rect,
        session: &Session,
        recorder: &InterviewRecorder,
        notice: Option<&str>,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title + progress counts
                Constraint::Length(3), // Progress gauge
                Constraint::Min(6),    // Question
                Constraint::Length(7), // Recording panel
                Constraint::Length(3), // Notice
                Constraint::Length(3), // Help
            ])
            .split(area);

        let total = session.question_count();
        let current = session.current_question_index();

        // Title
        let title = Paragraph::new(Line::from(vec![
            Span::styled("Interview Session", Style::default().fg(Color::Cyan).bold()),
            Span::raw("   "),
            Span::styled(
                format!("Question {} of {}", current + 1, total.max(1)),
                Style::default().fg(Color::White),
            ),
            Span::raw("  •  "),
            Span::styled(
                format!("{} completed", session.recorded_count()),
                Style::default().fg(Color::Green),
            ),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(title, chunks[0]);

        // Progress gauge
        let ratio = if total == 0 {
            0.0
        } else {
            (current + 1) as f64 / total as f64
        };
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL))
            .gauge_style(Style::default().fg(Color::Cyan))
            .ratio(ratio.clamp(0.0, 1.0));
        frame.render_widget(gauge, chunks[1]);

        // Question card
        let question_text = match session.current_question() {
            Some(question) => vec![
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(Color::Blue)),
                    Span::styled(&*question.category, Style::default().fg(Color::Blue)),
                    Span::raw("  "),
                    Span::styled(format!("#{}", question.id), Style::default().fg(Color::DarkGray)),
                ]),
                Line::from(""),
                Line::from(question.text.as_str()),
            ],
            None => vec![Line::from("No questions in session")],
        };
        let question_widget = Paragraph::new(question_text).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" Question ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        frame.render_widget(question_widget, chunks[2]);

        // Recording panel
        let status_lines = self.recording_lines(session, recorder);
        let status_widget = Paragraph::new(status_lines).block(
            Block::default()
                .title(" Record Your Answer ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        frame.render_widget(status_widget, chunks[3]);

        // Notice line for validation and submission messages
        let notice_widget = Paragraph::new(match notice {
            Some(msg) => Line::from(Span::styled(msg, Style::default().fg(Color::Yellow))),
            None => Line::from(""),
        })
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)));
        frame.render_widget(notice_widget, chunks[4]);

        // Help bar
        let help = Paragraph::new(Line::from(vec![
            Span::styled(" [r] ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Record/Stop  "),
            Span::styled(" [t] ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Retake  "),
            Span::styled(" ←/→ ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Prev/Next  "),
            Span::styled(" [s] ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Submit  "),
            Span::styled(" Esc ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Back"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[5]);
    }

    fn recording_lines(&self, session: &Session, recorder: &InterviewRecorder) -> Vec<Line<'static>> {
        if let MicState::Denied(reason) = recorder.mic_state() {
            return vec![
                Line::from(vec![
                    Span::raw("Status: "),
                    Span::styled("Microphone unavailable", Style::default().fg(Color::Red).bold()),
                ]),
                Line::from(Span::styled(reason.clone(), Style::default().fg(Color::DarkGray))),
                Line::from(""),
                Line::from(Span::styled(
                    "Press [m] to retry microphone access",
                    Style::default().fg(Color::DarkGray),
                )),
            ];
        }

        if recorder.is_submitting() {
            return vec![
                Line::from(vec![
                    Span::raw("Status: "),
                    Span::styled("Submitting...", Style::default().fg(Color::Yellow).bold()),
                ]),
                Line::from(""),
                Line::from(Span::styled(
                    "Sending your answers for evaluation",
                    Style::default().fg(Color::DarkGray),
                )),
            ];
        }

        match recorder.phase(session) {
            CapturePhase::Idle => vec![
                Line::from(vec![
                    Span::raw("Status: "),
                    Span::styled("Not recording", Style::default().fg(Color::Gray)),
                ]),
                Line::from(""),
                Line::from(Span::styled(
                    "Press [r] to start recording your answer",
                    Style::default().fg(Color::DarkGray),
                )),
            ],
            CapturePhase::Recording => {
                let elapsed = recorder.elapsed_secs();
                vec![
                    Line::from(vec![
                        Span::raw("Status: "),
                        Span::styled("● Recording", Style::default().fg(Color::Red).bold()),
                    ]),
                    Line::from(vec![
                        Span::raw("Elapsed: "),
                        Span::styled(
                            format!("{:02}:{:02}", elapsed / 60, elapsed % 60),
                            Style::default().fg(Color::Yellow),
                        ),
                    ]),
                    Line::from(""),
                    Line::from(Span::styled(
                        "Press [r] to stop recording",
                        Style::default().fg(Color::DarkGray),
                    )),
                ]
            }
            CapturePhase::Captured => vec![
                Line::from(vec![
                    Span::raw("Status: "),
                    Span::styled("✓ Recorded", Style::default().fg(Color::Green).bold()),
                ]),
                Line::from(""),
                Line::from(Span::styled(
                    "Press [t] to retake, or → for the next question",
                    Style::default().fg(Color::DarkGray),
                )),
            ],
        }
    }
}

impl Default for InterviewScreen {
    fn default() -> Self {
        Self::new()
    }
}
