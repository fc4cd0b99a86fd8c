//! Results screen - final score and per-question feedback

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
};

use crate::api::Evaluation;
use crate::score::{deserves_congrats, format_score, ScoreBand};

/// Results screen state
pub struct ResultsScreen {
    evaluation: Option<Evaluation>,
    error: Option<String>,
    loading: bool,
    scroll_offset: usize,
    content_height: usize,
}

impl ResultsScreen {
    pub fn new() -> Self {
        Self {
            evaluation: None,
            error: None,
            loading: false,
            scroll_offset: 0,
            content_height: 0,
        }
    }

    pub fn set_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn set_evaluation(&mut self, evaluation: Evaluation) {
        self.evaluation = Some(evaluation);
        self.error = None;
        self.loading = false;
        self.scroll_offset = 0;
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Score header
                Constraint::Min(5),    // Feedback
                Constraint::Length(3), // Help
            ])
            .split(area);

        // Score header
        let header_lines = if self.loading {
            vec![
                Line::from(Span::styled(
                    "Analyzing your interview...",
                    Style::default().fg(Color::Yellow).bold(),
                )),
                Line::from(Span::styled(
                    "The AI is evaluating your responses",
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        } else if let Some(error) = self.error.as_deref() {
            vec![
                Line::from(Span::styled(
                    "Could not load results",
                    Style::default().fg(Color::Red).bold(),
                )),
                Line::from(Span::styled(error.to_string(), Style::default().fg(Color::DarkGray))),
                Line::from(Span::styled(
                    "Press [r] to retry",
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        } else if let Some(eval) = &self.evaluation {
            let band = ScoreBand::for_score(eval.final_score);
            let mut lines = vec![
                Line::from(vec![
                    Span::raw("Final score: "),
                    Span::styled(
                        format!("{} ({})", format_score(Some(eval.final_score)), band.label()),
                        Style::default().fg(band.color()).bold(),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("Based on your responses across {} questions", eval.feedback.len()),
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            if deserves_congrats(eval.final_score) {
                lines.push(Line::from(Span::styled(
                    "🏆 Congratulations! Strong performance",
                    Style::default().fg(Color::Green).bold(),
                )));
            }
            lines
        } else {
            vec![Line::from("No results loaded")]
        };

        let header = Paragraph::new(header_lines).block(
            Block::default()
                .title(" Interview Results ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        frame.render_widget(header, chunks[0]);

        // Feedback list
        let feedback_lines: Vec<Line> = self
            .evaluation
            .iter()
            .flat_map(|eval| eval.feedback.iter())
            .flat_map(|item| {
                let band = ScoreBand::for_score(item.score);
                vec![
                    Line::from(vec![
                        Span::styled(
                            format!("Question {}", item.question_no),
                            Style::default().fg(Color::White).bold(),
                        ),
                        Span::raw("  "),
                        Span::styled(
                            format!("{} ({})", format_score(Some(item.score)), band.label()),
                            Style::default().fg(band.color()).bold(),
                        ),
                    ]),
                    Line::from(vec![
                        Span::styled("Q: ", Style::default().fg(Color::Magenta)),
                        Span::raw(item.question_text.clone()),
                    ]),
                    Line::from(vec![
                        Span::styled("Remark: ", Style::default().fg(Color::Blue)),
                        Span::raw(item.remark.clone()),
                    ]),
                    Line::from(vec![
                        Span::styled("Improve: ", Style::default().fg(Color::Green)),
                        Span::raw(item.improvement.clone()),
                    ]),
                    Line::from(""),
                ]
            })
            .collect();

        self.content_height = feedback_lines.len();

        let feedback_area = chunks[1];
        let visible_height = feedback_area.height.saturating_sub(2) as usize;

        let feedback = Paragraph::new(feedback_lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset as u16, 0))
            .block(
                Block::default()
                    .title(" Detailed Feedback ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            );
        frame.render_widget(feedback, feedback_area);

        // Scrollbar
        if self.content_height > visible_height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"));

            let mut scrollbar_state = ScrollbarState::new(self.content_height)
                .position(self.scroll_offset)
                .viewport_content_length(visible_height);

            frame.render_stateful_widget(
                scrollbar,
                feedback_area.inner(Margin {
                    horizontal: 0,
                    vertical: 1,
                }),
                &mut scrollbar_state,
            );
        }

        // Help bar
        let help = Paragraph::new(Line::from(vec![
            Span::styled(" ↑/↓ ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Scroll  "),
            Span::styled(" [r] ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Refresh  "),
            Span::styled(" Esc ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Back"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[2]);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll_offset < self.content_height.saturating_sub(1) {
            self.scroll_offset += 1;
        }
    }

    pub fn page_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(10);
    }

    pub fn page_down(&mut self) {
        self.scroll_offset = (self.scroll_offset + 10).min(self.content_height.saturating_sub(1));
    }
}

impl Default for ResultsScreen {
    fn default() -> Self {
        Self::new()
    }
}
