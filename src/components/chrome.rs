//! Screen chrome: heading, status bar and help bar

use crate::model::modal::Modal;
use crate::model::{SeatStatus, StatusCounts};
use crate::theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const TITLE: &str = "オフィス座席表";

pub fn render_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(theme::PRIMARY)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

/// Per-status counts on the left, the last status message after them
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    counts: StatusCounts,
    status_message: Option<&str>,
) {
    let mut spans = Vec::new();
    for status in SeatStatus::all() {
        spans.push(Span::styled(
            format!(" {} {} ", status.label(), counts.get(status)),
            Style::default().fg(theme::badge_color(status)),
        ));
    }

    if let Some(message) = status_message {
        spans.push(Span::styled("│", Style::default().fg(theme::MUTED)));
        spans.push(Span::styled(
            format!(" {} ", message),
            Style::default().fg(theme::SECONDARY),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn key_span(key: &'static str, color: Color) -> Span<'static> {
    Span::styled(key, Style::default().fg(color).add_modifier(Modifier::BOLD))
}

/// Key hints for whatever currently has input
pub fn render_help_bar(frame: &mut Frame, area: Rect, top: Option<&Modal>) {
    let spans = match top {
        Some(Modal::SeatPopover { .. }) => vec![
            key_span(" ←→ ", Color::Cyan),
            Span::raw("Focus "),
            key_span(" Enter ", Color::Green),
            Span::raw("Apply "),
            key_span(" 1/2/3 ", Color::Green),
            Span::raw("空席/予約/使用 "),
            key_span(" i ", Color::Cyan),
            Span::raw("Details "),
            key_span(" Esc ", Color::Yellow),
            Span::raw("Close"),
        ],
        Some(Modal::SeatDialog { .. }) => vec![
            key_span(" Tab ", Color::Cyan),
            Span::raw("Focus "),
            key_span(" Enter ", Color::Green),
            Span::raw("Press "),
            key_span(" 1/2/3 ", Color::Green),
            Span::raw("空席/予約/使用 "),
            key_span(" Esc ", Color::Yellow),
            Span::raw("Close"),
        ],
        Some(Modal::QuitConfirm) | Some(Modal::Help) => vec![
            key_span(" Esc ", Color::Yellow),
            Span::raw("Close"),
        ],
        None => vec![
            key_span(" q ", Color::Yellow),
            Span::raw("Quit "),
            key_span(" ←↑↓→ ", Color::Cyan),
            Span::raw("Move "),
            key_span(" Enter ", Color::Green),
            Span::raw("Select "),
            key_span(" i ", Color::Cyan),
            Span::raw("Details "),
            key_span(" t ", Color::Magenta),
            Span::raw("Legend "),
            key_span(" ? ", Color::White),
            Span::raw("Help"),
        ],
    };

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::MUTED)),
    );
    frame.render_widget(paragraph, area);
}
