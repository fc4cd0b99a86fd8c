//! Candidate detail screen - one candidate's full record

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
};

use crate::api::CandidateRecord;
use crate::score::{format_score, ScoreBand};

/// Candidate detail screen state
pub struct DetailScreen {
    record: Option<CandidateRecord>,
    scroll_offset: usize,
    content_height: usize,
}

impl DetailScreen {
    pub fn new() -> Self {
        Self {
            record: None,
            scroll_offset: 0,
            content_height: 0,
        }
    }

    pub fn set_record(&mut self, record: CandidateRecord) {
        self.record = Some(record);
        self.scroll_offset = 0;
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Header
                Constraint::Min(5),    // Feedback
                Constraint::Length(3), // Help
            ])
            .split(area);

        // Header
        let header_lines = if let Some(record) = &self.record {
            vec![
                Line::from(vec![
                    Span::styled(
                        record.candidate.name.clone(),
                        Style::default().fg(Color::White).bold(),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        format!("<{}>", record.candidate.email),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(vec![
                    Span::styled(
                        record.candidate.candidate_id.clone(),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw("  •  Final score: "),
                    match record.final_score {
                        Some(score) => Span::styled(
                            format!("{} ({})", format_score(Some(score)), ScoreBand::for_score(score).label()),
                            Style::default().fg(ScoreBand::for_score(score).color()).bold(),
                        ),
                        None => Span::styled("-", Style::default().fg(Color::DarkGray)),
                    },
                    Span::raw("  •  Shortlisted: "),
                    if record.is_shortlisted {
                        Span::styled("Yes", Style::default().fg(Color::Green))
                    } else {
                        Span::styled("No", Style::default().fg(Color::Red))
                    },
                ]),
            ]
        } else {
            vec![Line::from("No candidate selected")]
        };

        let header = Paragraph::new(header_lines).block(
            Block::default()
                .title(" Candidate ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        frame.render_widget(header, chunks[0]);

        // Question-by-question feedback
        let body_lines: Vec<Line> = if let Some(record) = &self.record {
            if record.evaluation_feedback.is_empty() {
                record
                    .questions
                    .iter()
                    .map(|q| {
                        Line::from(vec![
                            Span::styled(
                                format!("{}. ", q.question_no),
                                Style::default().fg(Color::DarkGray),
                            ),
                            Span::raw(q.question_text.clone()),
                        ])
                    })
                    .collect()
            } else {
                record
                    .evaluation_feedback
                    .iter()
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
                                Span::styled("A: ", Style::default().fg(Color::Cyan)),
                                Span::raw(item.answer_text.clone()),
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
                    .collect()
            }
        } else {
            Vec::new()
        };

        self.content_height = body_lines.len();

        let body_area = chunks[1];
        let visible_height = body_area.height.saturating_sub(2) as usize;

        let body = Paragraph::new(body_lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset as u16, 0))
            .block(
                Block::default()
                    .title(" Evaluation ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            );
        frame.render_widget(body, body_area);

        if self.content_height > visible_height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"));

            let mut scrollbar_state = ScrollbarState::new(self.content_height)
                .position(self.scroll_offset)
                .viewport_content_length(visible_height);

            frame.render_stateful_widget(
                scrollbar,
                body_area.inner(Margin {
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
            Span::styled(" Esc ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Back to dashboard"),
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
}

impl Default for DetailScreen {
    fn default() -> Self {
        Self::new()
    }
}
