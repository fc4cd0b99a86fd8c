//! Help popup widget

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::tui::AppScreen;

/// Help popup that shows keyboard shortcuts
pub struct HelpPopup;

impl HelpPopup {
    pub fn draw(frame: &mut Frame, area: Rect, screen: AppScreen) {
        // Calculate popup area (centered, 60% width, 70% height)
        let popup_width = (area.width as f32 * 0.6) as u16;
        let popup_height = (area.height as f32 * 0.7) as u16;
        let popup_x = (area.width - popup_width) / 2;
        let popup_y = (area.height - popup_height) / 2;

        let popup_area = Rect {
            x: popup_x,
            y: popup_y,
            width: popup_width,
            height: popup_height,
        };

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let help_text = match screen {
            AppScreen::Landing => vec![
                Line::from(Span::styled(
                    "Landing Shortcuts",
                    Style::default().fg(Color::Cyan).bold(),
                )),
                Line::from(""),
                shortcut("u", "Upload a resume"),
                shortcut("i", "Resume interview in progress"),
                shortcut("d", "Open candidate dashboard"),
                shortcut("?", "Show this help"),
                shortcut("q", "Quit application"),
            ],
            AppScreen::Upload => vec![
                Line::from(Span::styled(
                    "Upload Shortcuts",
                    Style::default().fg(Color::Cyan).bold(),
                )),
                Line::from(""),
                shortcut("Tab", "Next field"),
                shortcut("Enter", "Submit resume"),
                shortcut("Esc", "Go back"),
            ],
            AppScreen::Interview => vec![
                Line::from(Span::styled(
                    "Interview Shortcuts",
                    Style::default().fg(Color::Cyan).bold(),
                )),
                Line::from(""),
                shortcut("r", "Start/stop recording"),
                shortcut("t", "Retake current answer"),
                shortcut("←/→", "Previous/next question"),
                shortcut("s", "Submit interview"),
                shortcut("m", "Retry microphone access"),
                shortcut("Esc", "Leave interview (answers kept)"),
            ],
            AppScreen::Results => vec![
                Line::from(Span::styled(
                    "Results Shortcuts",
                    Style::default().fg(Color::Cyan).bold(),
                )),
                Line::from(""),
                shortcut("↑/↓", "Scroll feedback"),
                shortcut("r", "Refresh results"),
                shortcut("Esc", "Go back"),
            ],
            AppScreen::Dashboard => vec![
                Line::from(Span::styled(
                    "Dashboard Shortcuts",
                    Style::default().fg(Color::Cyan).bold(),
                )),
                Line::from(""),
                shortcut("↑/↓", "Navigate candidates"),
                shortcut("Enter", "View candidate details"),
                shortcut("r", "Refresh list"),
                shortcut("Esc", "Go back"),
            ],
            AppScreen::Detail => vec![
                Line::from(Span::styled(
                    "Detail Shortcuts",
                    Style::default().fg(Color::Cyan).bold(),
                )),
                Line::from(""),
                shortcut("↑/↓", "Scroll"),
                shortcut("Esc", "Back to dashboard"),
            ],
        };

        let help = Paragraph::new(help_text).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(help, popup_area);
    }
}

fn shortcut(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<8}", key), Style::default().fg(Color::Yellow)),
        Span::raw(description.to_string()),
    ])
}
