//! Selected seat panel

use crate::model::Seat;
use crate::theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the selected-seat snapshot, or a hint when nothing is selected
pub fn render_seat_info(frame: &mut Frame, area: Rect, selected: Option<&Seat>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::MUTED))
        .title(" 選択中の座席 ");

    let lines = match selected {
        Some(seat) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    format!("座席: {}", seat.id),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::raw("状態: "),
                    Span::styled(
                        format!(" {} ", seat.status.label()),
                        theme::badge_style(seat.status),
                    ),
                ]),
            ];
            if let Some(user) = &seat.user {
                lines.push(Line::from(format!("利用者: {}", user)));
            }
            lines
        }
        None => vec![Line::from(Span::styled(
            "座席を選択してください",
            Style::default().fg(theme::MUTED),
        ))],
    };

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_utils::buffer_text;
    use crate::model::{SeatId, SeatStatus};
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(selected: Option<&Seat>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(30, 6)).unwrap();
        terminal
            .draw(|frame| render_seat_info(frame, frame.area(), selected))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_placeholder_without_selection() {
        assert!(rendered(None).contains("座席を選択してください"));
    }

    #[test]
    fn test_selected_seat_details() {
        let seat = Seat::new(SeatId::new(4, 2), SeatStatus::Reserved, Some("鈴木花子".to_string()));
        let text = rendered(Some(&seat));
        assert!(text.contains("座席: 4-2"));
        assert!(text.contains("予約済み"));
        assert!(text.contains("利用者: 鈴木花子"));
    }
}
