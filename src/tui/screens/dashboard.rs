//! Dashboard screen - list every candidate with score and shortlist status

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::api::CandidateRecord;
use crate::score::{format_score, truncate, ScoreBand};

/// Dashboard screen state
pub struct DashboardScreen {
    candidates: Vec<CandidateRecord>,
    state: ListState,
    error: Option<String>,
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
            state: ListState::default(),
            error: None,
        }
    }

    pub fn set_candidates(&mut self, candidates: Vec<CandidateRecord>) {
        self.state = ListState::default();
        if !candidates.is_empty() {
            self.state.select(Some(0));
        }
        self.candidates = candidates;
        self.error = None;
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(5),    // List
                Constraint::Length(3), // Help
            ])
            .split(area);

        let title = Paragraph::new("Candidate Dashboard")
            .style(Style::default().fg(Color::Cyan).bold())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(title, chunks[0]);

        if let Some(error) = self.error.as_deref() {
            let widget = Paragraph::new(vec![
                Line::from(Span::styled(
                    "Failed to fetch candidates",
                    Style::default().fg(Color::Red).bold(),
                )),
                Line::from(Span::styled(error.to_string(), Style::default().fg(Color::DarkGray))),
                Line::from(""),
                Line::from(Span::styled("Press [r] to retry", Style::default().fg(Color::DarkGray))),
            ])
            .block(Block::default().borders(Borders::ALL));
            frame.render_widget(widget, chunks[1]);
        } else if self.candidates.is_empty() {
            // Explicit empty state, never a bare table
            let widget = Paragraph::new(Line::from(Span::styled(
                "No candidates found.",
                Style::default().fg(Color::DarkGray),
            )))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(" All Candidates (0) ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            );
            frame.render_widget(widget, chunks[1]);
        } else {
            let items: Vec<ListItem> = self
                .candidates
                .iter()
                .map(|record| {
                    let score_span = match record.final_score {
                        Some(score) => Span::styled(
                            format!("{:<6}", format_score(Some(score))),
                            Style::default().fg(ScoreBand::for_score(score).color()),
                        ),
                        None => Span::styled("-     ", Style::default().fg(Color::DarkGray)),
                    };

                    let shortlist_span = if record.is_shortlisted {
                        Span::styled("Yes", Style::default().fg(Color::Green))
                    } else {
                        Span::styled("No ", Style::default().fg(Color::Red))
                    };

                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("{:<26}", truncate(&record.candidate.name, 24)),
                            Style::default().fg(Color::White),
                        ),
                        Span::styled(
                            format!("{:<30}", truncate(&record.candidate.email, 28)),
                            Style::default().fg(Color::DarkGray),
                        ),
                        score_span,
                        Span::raw("  "),
                        shortlist_span,
                    ]))
                })
                .collect();

            let list = List::new(items)
                .block(
                    Block::default()
                        .title(format!(" All Candidates ({}) ", self.candidates.len()))
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Blue)),
                )
                .highlight_style(
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("▶ ");

            frame.render_stateful_widget(list, chunks[1], &mut self.state);
        }

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" ↑/↓ ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Navigate  "),
            Span::styled(" Enter ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Details  "),
            Span::styled(" [r] ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Refresh  "),
            Span::styled(" Esc ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Back"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[2]);
    }

    pub fn next(&mut self) {
        if self.candidates.is_empty() {
            return;
        }

        let i = match self.state.selected() {
            Some(i) => {
                if i >= self.candidates.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.candidates.is_empty() {
            return;
        }

        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    self.candidates.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    /// Candidate identifier of the selected row, the routing parameter for
    /// the detail view
    pub fn selected_candidate_id(&self) -> Option<String> {
        self.state
            .selected()
            .and_then(|i| self.candidates.get(i))
            .map(|record| record.candidate.candidate_id.clone())
    }
}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CandidateInfo;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn record(id: &str, name: &str, score: Option<f64>) -> CandidateRecord {
        CandidateRecord {
            candidate: CandidateInfo {
                candidate_id: id.to_string(),
                name: name.to_string(),
                email: format!("{}@example.test", name.to_lowercase()),
                resume_url: None,
            },
            questions: Vec::new(),
            answers: Vec::new(),
            evaluation_feedback: Vec::new(),
            final_score: score,
            is_shortlisted: false,
        }
    }

    fn rendered_text(screen: &mut DashboardScreen) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| screen.draw(f, f.size())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn empty_dashboard_renders_explicit_empty_state() {
        let mut screen = DashboardScreen::new();
        screen.set_candidates(Vec::new());

        let text = rendered_text(&mut screen);
        assert!(text.contains("No candidates found."));
        assert!(text.contains("All Candidates (0)"));
    }

    #[test]
    fn missing_final_score_renders_as_dash() {
        let mut screen = DashboardScreen::new();
        screen.set_candidates(vec![record("cd_111111", "Pending", None)]);

        let text = rendered_text(&mut screen);
        assert!(text.contains("Pending"));
        assert!(text.contains("-"));
        assert!(!text.contains("0.0"));
    }

    #[test]
    fn selection_wraps_and_reports_candidate_id() {
        let mut screen = DashboardScreen::new();
        screen.set_candidates(vec![
            record("cd_111111", "Alice", Some(8.7)),
            record("cd_222222", "Bob", Some(6.1)),
        ]);

        assert_eq!(screen.selected_candidate_id().as_deref(), Some("cd_111111"));
        screen.next();
        assert_eq!(screen.selected_candidate_id().as_deref(), Some("cd_222222"));
        screen.next();
        assert_eq!(screen.selected_candidate_id().as_deref(), Some("cd_111111"));
        screen.previous();
        assert_eq!(screen.selected_candidate_id().as_deref(), Some("cd_222222"));
    }

    #[test]
    fn long_multibyte_names_render_truncated() {
        let mut screen = DashboardScreen::new();
        screen.set_candidates(vec![record(
            "cd_333333",
            "ééééééééééééééééééééééééééééé",
            Some(7.2),
        )]);

        let text = rendered_text(&mut screen);
        assert!(text.contains("..."));
        assert!(text.contains("7.2"));
    }

    #[test]
    fn selection_is_none_when_list_is_empty() {
        let mut screen = DashboardScreen::new();
        screen.set_candidates(Vec::new());
        screen.next();
        assert!(screen.selected_candidate_id().is_none());
    }
}
