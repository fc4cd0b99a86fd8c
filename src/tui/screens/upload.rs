//! Upload screen - candidate form and resume selection

use crossterm::event::KeyCode;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Form field focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UploadField {
    Name,
    Email,
    Resume,
}

impl UploadField {
    fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Resume,
            Self::Resume => Self::Name,
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::Name => Self::Resume,
            Self::Email => Self::Name,
            Self::Resume => Self::Email,
        }
    }
}

/// Action requested by the upload form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadAction {
    Submit,
}

/// Upload screen state
pub struct UploadScreen {
    pub name: String,
    pub email: String,
    pub resume_path: String,
    focus: UploadField,
    pub uploading: bool,
}

impl UploadScreen {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            resume_path: String::new(),
            focus: UploadField::Name,
            uploading: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<UploadAction> {
        if self.uploading {
            return None;
        }

        match key {
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.previous();
            }
            KeyCode::Enter => {
                return Some(UploadAction::Submit);
            }
            KeyCode::Backspace => {
                self.field_mut().pop();
            }
            KeyCode::Char(c) => {
                self.field_mut().push(c);
            }
            _ => {}
        }
        None
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            UploadField::Name => &mut self.name,
            UploadField::Email => &mut self.email,
            UploadField::Resume => &mut self.resume_path,
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect, notice: Option<&str>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Name
                Constraint::Length(3), // Email
                Constraint::Length(3), // Resume path
                Constraint::Min(3),    // Notice
                Constraint::Length(3), // Help
            ])
            .split(area);

        let title = Paragraph::new("Upload Your Resume")
            .style(Style::default().fg(Color::Cyan).bold())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(title, chunks[0]);

        self.draw_field(frame, chunks[1], " Full Name ", &self.name, UploadField::Name);
        self.draw_field(frame, chunks[2], " Email ", &self.email, UploadField::Email);
        self.draw_field(
            frame,
            chunks[3],
            " Resume Path (PDF or DOCX) ",
            &self.resume_path,
            UploadField::Resume,
        );

        let notice_text = if self.uploading {
            Line::from(Span::styled(
                "Uploading and processing resume...",
                Style::default().fg(Color::Yellow),
            ))
        } else if let Some(msg) = notice {
            Line::from(Span::styled(msg, Style::default().fg(Color::Red)))
        } else {
            Line::from(Span::styled(
                "The interview service will generate personalized questions from your resume.",
                Style::default().fg(Color::DarkGray),
            ))
        };
        let notice_widget = Paragraph::new(notice_text).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(notice_widget, chunks[4]);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Tab ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Next field  "),
            Span::styled(" Enter ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Submit  "),
            Span::styled(" Esc ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Back"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[5]);
    }

    fn draw_field(&self, frame: &mut Frame, area: Rect, title: &str, value: &str, field: UploadField) {
        let focused = self.focus == field;
        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        let text = if focused {
            format!("{}█", value)
        } else {
            value.to_string()
        };

        let widget = Paragraph::new(text).style(style).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(if focused {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::DarkGray)
                }),
        );
        frame.render_widget(widget, area);
    }
}

impl Default for UploadScreen {
    fn default() -> Self {
        Self::new()
    }
}
