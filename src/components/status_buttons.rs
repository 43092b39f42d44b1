//! Status-change buttons shared by the seat popover and the seat dialog
//!
//! Renders the three actions on one line, remembers where each button was
//! drawn for mouse hit-testing, and applies the "disabled when unavailable"
//! guard before any action leaves the component.

use crate::action::Action;
use crate::components::layout::contains;
use crate::model::{Seat, StatusAction};
use crate::theme;
use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Which caption set to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonCaptions {
    /// 空席 / 予約 / 使用
    Short,
    /// 空席にする / 予約する / 使用する
    Long,
}

/// A row of the three status-change buttons
#[derive(Debug, Clone)]
pub struct StatusButtons {
    captions: ButtonCaptions,
    areas: Vec<(Rect, StatusAction)>,
}

impl StatusButtons {
    pub fn new(captions: ButtonCaptions) -> Self {
        Self {
            captions,
            areas: Vec::new(),
        }
    }

    fn caption(&self, action: StatusAction) -> String {
        let label = match self.captions {
            ButtonCaptions::Short => action.short_label(),
            ButtonCaptions::Long => action.long_label(),
        };
        format!(" {} ", label)
    }

    /// Total display width of the row
    pub fn width(&self) -> u16 {
        let buttons: usize = StatusAction::all()
            .iter()
            .map(|a| self.caption(*a).width())
            .sum();
        (buttons + StatusAction::all().len() - 1) as u16
    }

    /// Draw the row into a one-line area
    ///
    /// `focused` is an index into `StatusAction::all()`; anything else
    /// highlights nothing.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, seat: &Seat, focused: Option<usize>) {
        self.areas.clear();
        let enabled = seat.status.is_editable();

        let mut spans = Vec::new();
        let mut x = area.x;
        for (index, action) in StatusAction::all().into_iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw(" "));
                x += 1;
            }
            let caption = self.caption(action);
            let width = caption.width() as u16;
            let style = theme::button_style(action.target(), focused == Some(index), enabled);
            spans.push(Span::styled(caption, style));

            let visible = width.min(area.right().saturating_sub(x));
            if visible > 0 {
                self.areas.push((Rect::new(x, area.y, visible, 1), action));
            }
            x = x.saturating_add(width);
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// The button under a mouse position, from the last render
    pub fn hit(&self, column: u16, row: u16) -> Option<StatusAction> {
        self.areas
            .iter()
            .find(|(rect, _)| contains(*rect, column, row))
            .map(|(_, action)| *action)
    }
}

/// Turn a requested status change into an Action, unless the seat is
/// unavailable and the buttons are disabled
pub fn status_action(seat: &Seat, action: StatusAction) -> Option<Action> {
    if seat.status.is_editable() {
        Some(Action::ChangeStatus(seat.id, action))
    } else {
        None
    }
}

/// Digit shortcuts: 1 = vacate, 2 = reserve, 3 = occupy
pub fn shortcut(code: KeyCode) -> Option<StatusAction> {
    match code {
        KeyCode::Char('1') => Some(StatusAction::Vacate),
        KeyCode::Char('2') => Some(StatusAction::Reserve),
        KeyCode::Char('3') => Some(StatusAction::Occupy),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SeatId, SeatStatus};
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_status_action_disabled_for_unavailable() {
        let seat = Seat::new(SeatId::new(2, 3), SeatStatus::Unavailable, None);
        for action in StatusAction::all() {
            assert_eq!(status_action(&seat, action), None);
        }

        let seat = Seat::available(SeatId::new(1, 1));
        assert_eq!(
            status_action(&seat, StatusAction::Reserve),
            Some(Action::ChangeStatus(seat.id, StatusAction::Reserve))
        );
    }

    #[test]
    fn test_width_counts_double_width_captions() {
        // " 空席 " is 6 columns wide, plus two single-column gaps
        assert_eq!(StatusButtons::new(ButtonCaptions::Short).width(), 6 * 3 + 2);
        assert_eq!(StatusButtons::new(ButtonCaptions::Long).width(), 12 + 10 + 10 + 2);
    }

    #[test]
    fn test_hit_areas_follow_render() {
        let mut buttons = StatusButtons::new(ButtonCaptions::Short);
        let seat = Seat::available(SeatId::new(1, 1));
        let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
        terminal
            .draw(|frame| buttons.render(frame, Rect::new(2, 0, 30, 1), &seat, Some(0)))
            .unwrap();

        assert_eq!(buttons.hit(2, 0), Some(StatusAction::Vacate));
        assert_eq!(buttons.hit(8, 0), None);
        assert_eq!(buttons.hit(9, 0), Some(StatusAction::Reserve));
        assert_eq!(buttons.hit(16, 0), Some(StatusAction::Occupy));
        assert_eq!(buttons.hit(30, 0), None);
    }

    #[test]
    fn test_digit_shortcuts() {
        assert_eq!(shortcut(KeyCode::Char('1')), Some(StatusAction::Vacate));
        assert_eq!(shortcut(KeyCode::Char('3')), Some(StatusAction::Occupy));
        assert_eq!(shortcut(KeyCode::Char('4')), None);
    }
}
