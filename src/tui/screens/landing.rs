//! Landing screen - entry point with navigation

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::session::Session;

/// Landing screen state
pub struct LandingScreen;

impl LandingScreen {
    pub fn new() -> Self {
        Self
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect, session: &Session) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(5),    // Info
                Constraint::Length(3), // Help
            ])
            .split(area);

        // Title
        let title = Paragraph::new("vetta")
            .style(Style::default().fg(Color::Cyan).bold())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(title, chunks[0]);

        // Info section
        let mut info_text = vec![
            Line::from(Span::styled(
                "AI-assisted interviews from your terminal",
                Style::default().fg(Color::White).bold(),
            )),
            Line::from(""),
            Line::from("Upload your resume, answer the generated questions out loud,"),
            Line::from("and get AI-powered scoring and feedback."),
            Line::from(""),
            Line::from(vec![
                Span::raw("• Press "),
                Span::styled("[u]", Style::default().fg(Color::Cyan)),
                Span::raw(" to upload a resume and start an interview"),
            ]),
            Line::from(vec![
                Span::raw("• Press "),
                Span::styled("[d]", Style::default().fg(Color::Cyan)),
                Span::raw(" to open the candidate dashboard"),
            ]),
            Line::from(vec![
                Span::raw("• Press "),
                Span::styled("[?]", Style::default().fg(Color::Cyan)),
                Span::raw(" for help"),
            ]),
        ];

        if session.question_count() > 0 {
            info_text.push(Line::from(""));
            info_text.push(Line::from(vec![
                Span::raw("• Press "),
                Span::styled("[i]", Style::default().fg(Color::Cyan)),
                Span::raw(" to resume the interview in progress ("),
                Span::styled(
                    format!(
                        "{}/{} answered",
                        session.recorded_count(),
                        session.question_count()
                    ),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(")"),
            ]));
        }

        let info_widget = Paragraph::new(info_text).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" Welcome ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(info_widget, chunks[1]);

        // Help bar
        let help = Paragraph::new(Line::from(vec![
            Span::styled(" [u] ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Upload  "),
            Span::styled(" [d] ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Dashboard  "),
            Span::styled(" [?] ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Help  "),
            Span::styled(" [q] ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Quit"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[2]);
    }
}

impl Default for LandingScreen {
    fn default() -> Self {
        Self::new()
    }
}
