//! Seat popover component
//!
//! Small overlay anchored to a seat cell: seat id, status badge, occupant
//! and the three status buttons. Stays open after an action so the new
//! status is visible.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{anchored_popup, contains};
use crate::components::status_buttons::{self, ButtonCaptions, StatusButtons};
use crate::model::{Seat, StatusAction};
use crate::theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

const BUTTON_COUNT: usize = 3;

/// Popover for one seat
#[derive(Debug, Clone)]
pub struct SeatPopover {
    seat: Option<Seat>,
    focused: usize,
    buttons: StatusButtons,
    area: Option<Rect>,
}

impl Default for SeatPopover {
    fn default() -> Self {
        Self {
            seat: None,
            focused: 0,
            buttons: StatusButtons::new(ButtonCaptions::Short),
            area: None,
        }
    }
}

impl SeatPopover {
    /// Show the popover for a seat with focus on the first button
    pub fn show(&mut self, seat: &Seat) {
        self.seat = Some(seat.clone());
        self.focused = 0;
        self.area = None;
    }

    /// Pick up the latest state of the seat being shown
    pub fn refresh(&mut self, seat: &Seat) {
        if self.seat.as_ref().is_some_and(|s| s.id == seat.id) {
            self.seat = Some(seat.clone());
        }
    }

    #[cfg(test)]
    pub fn seat(&self) -> Option<&Seat> {
        self.seat.as_ref()
    }

    #[cfg(test)]
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Whether a screen position falls inside the last drawn popover
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.is_some_and(|area| contains(area, column, row))
    }

    fn activate(&self, action: StatusAction) -> Option<Action> {
        self.seat
            .as_ref()
            .and_then(|seat| status_buttons::status_action(seat, action))
    }

    /// Draw the popover next to `anchor` (the seat's cell)
    pub fn render(&mut self, frame: &mut Frame, area: Rect, anchor: Rect, seat: &Seat) {
        self.seat = Some(seat.clone());

        let width = self.buttons.width() + 4;
        let height = if seat.user.is_some() { 6 } else { 5 };
        let popup = anchored_popup(anchor, area, width, height);
        self.area = Some(popup);

        frame.render_widget(Clear, popup);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::PRIMARY));
        let inner = block.inner(popup).inner(ratatui::layout::Margin {
            vertical: 0,
            horizontal: 1,
        });
        frame.render_widget(block, popup);

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

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);
        frame.render_widget(Paragraph::new(lines), chunks[0]);
        self.buttons
            .render(frame, chunks[1], seat, Some(self.focused));
    }
}

impl Component for SeatPopover {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(action) = status_buttons::shortcut(key.code) {
            return Ok(self.activate(action));
        }

        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseModal),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
                self.focused = (self.focused + BUTTON_COUNT - 1) % BUTTON_COUNT;
                None
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
                self.focused = (self.focused + 1) % BUTTON_COUNT;
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.activate(StatusAction::all()[self.focused])
            }
            KeyCode::Char('i') => self.seat.as_ref().map(|s| Action::OpenSeatDialog(s.id)),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        Ok(self
            .buttons
            .hit(mouse.column, mouse.row)
            .and_then(|action| self.activate(action)))
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Needs the anchor cell; App calls `render` directly
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_utils::{buffer_text, key, mouse_down};
    use crate::model::{SeatId, SeatStatus};
    use ratatui::{backend::TestBackend, Terminal};

    fn reserved() -> Seat {
        Seat::new(SeatId::new(1, 2), SeatStatus::Reserved, Some("田中太郎".to_string()))
    }

    #[test]
    fn test_focus_wraps() {
        let mut popover = SeatPopover::default();
        popover.show(&reserved());

        popover.handle_key_event(key(KeyCode::Left)).unwrap();
        assert_eq!(popover.focused(), 2);
        popover.handle_key_event(key(KeyCode::Tab)).unwrap();
        assert_eq!(popover.focused(), 0);
    }

    #[test]
    fn test_enter_activates_focused_button() {
        let mut popover = SeatPopover::default();
        let seat = reserved();
        popover.show(&seat);
        popover.handle_key_event(key(KeyCode::Right)).unwrap();
        popover.handle_key_event(key(KeyCode::Right)).unwrap();

        let action = popover.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(action, Some(Action::ChangeStatus(seat.id, StatusAction::Occupy)));
    }

    #[test]
    fn test_unavailable_seat_buttons_do_nothing() {
        let mut popover = SeatPopover::default();
        popover.show(&Seat::new(SeatId::new(2, 3), SeatStatus::Unavailable, None));

        assert_eq!(popover.handle_key_event(key(KeyCode::Enter)).unwrap(), None);
        assert_eq!(popover.handle_key_event(key(KeyCode::Char('3'))).unwrap(), None);
    }

    #[test]
    fn test_escalate_to_dialog() {
        let mut popover = SeatPopover::default();
        popover.show(&reserved());
        let action = popover.handle_key_event(key(KeyCode::Char('i'))).unwrap();
        assert_eq!(action, Some(Action::OpenSeatDialog(SeatId::new(1, 2))));
    }

    #[test]
    fn test_render_and_click_button() {
        let mut popover = SeatPopover::default();
        let seat = reserved();
        popover.show(&seat);

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let anchor = Rect::new(10, 2, 10, 3);
        terminal
            .draw(|frame| popover.render(frame, frame.area(), anchor, &seat))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("座席: 1-2"));
        assert!(text.contains("予約済み"));
        assert!(text.contains("利用者: 田中太郎"));
        assert!(text.contains(" 空席   予約   使用 "));

        let area = popover.area.unwrap();
        assert!(popover.contains(area.x, area.y));
        assert!(!popover.contains(0, 0));

        // Button row is the last inner line; the first button starts two
        // columns in (border plus margin)
        let row = area.bottom() - 2;
        let action = popover
            .handle_mouse_event(mouse_down(MouseButton::Left, area.x + 2, row))
            .unwrap();
        assert_eq!(action, Some(Action::ChangeStatus(seat.id, StatusAction::Vacate)));
    }

    #[test]
    fn test_refresh_ignores_other_seats() {
        let mut popover = SeatPopover::default();
        popover.show(&reserved());
        popover.refresh(&Seat::available(SeatId::new(4, 4)));
        assert_eq!(popover.seat().unwrap().id, SeatId::new(1, 2));
    }
}
