//! Seat dialog component
//!
//! Centered modal with the seat's status, occupant, the three status
//! buttons and an explicit close button. Clicking the dimmed overlay
//! closes it.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{centered_popup, contains};
use crate::components::status_buttons::{self, ButtonCaptions, StatusButtons};
use crate::model::{Seat, StatusAction};
use crate::theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const DIALOG_WIDTH: u16 = 48;
const DIALOG_HEIGHT: u16 = 11;
const CLOSE_CAPTION: &str = " 閉じる ";

/// Focus slots: the three status buttons, then the close button
const FOCUS_SLOTS: usize = 4;
const CLOSE_SLOT: usize = 3;

/// Full dialog for one seat
#[derive(Debug, Clone)]
pub struct SeatDialog {
    seat: Option<Seat>,
    focused: usize,
    buttons: StatusButtons,
    area: Option<Rect>,
    close_area: Option<Rect>,
}

impl Default for SeatDialog {
    fn default() -> Self {
        Self {
            seat: None,
            focused: 0,
            buttons: StatusButtons::new(ButtonCaptions::Long),
            area: None,
            close_area: None,
        }
    }
}

impl SeatDialog {
    pub fn show(&mut self, seat: &Seat) {
        self.seat = Some(seat.clone());
        // Nothing to press on an unavailable seat except close
        self.focused = if seat.status.is_editable() { 0 } else { CLOSE_SLOT };
        self.area = None;
        self.close_area = None;
    }

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

    fn activate(&self, action: StatusAction) -> Option<Action> {
        self.seat
            .as_ref()
            .and_then(|seat| status_buttons::status_action(seat, action))
    }

    fn press_focused(&self) -> Option<Action> {
        match StatusAction::all().get(self.focused) {
            Some(action) => self.activate(*action),
            None => Some(Action::CloseModal),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, seat: &Seat) {
        self.seat = Some(seat.clone());

        // Overlay: dim everything underneath
        frame
            .buffer_mut()
            .set_style(area, Style::default().add_modifier(Modifier::DIM));

        let popup = centered_popup(area, DIALOG_WIDTH, DIALOG_HEIGHT);
        self.area = Some(popup);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::PRIMARY));
        let inner = block.inner(popup).inner(Margin {
            vertical: 0,
            horizontal: 1,
        });
        frame.render_widget(block, popup);
        if inner.height < 7 {
            return;
        }

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let mut lines = vec![
            Line::from(Span::styled(format!("座席情報: {}", seat.id), bold)),
            Line::from(""),
            Line::from(vec![
                Span::styled("状態: ", bold),
                Span::styled(
                    format!(" {} ", seat.status.label()),
                    theme::badge_style(seat.status),
                ),
            ]),
        ];
        if let Some(user) = &seat.user {
            lines.push(Line::from(vec![
                Span::styled("利用者: ", bold),
                Span::raw(user.clone()),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("状態を変更:", bold)));
        frame.render_widget(Paragraph::new(lines), inner);

        let buttons_row = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
        let focused = (self.focused < CLOSE_SLOT).then_some(self.focused);
        self.buttons.render(frame, buttons_row, seat, focused);

        let close_width = (CLOSE_CAPTION.width() as u16).min(inner.width);
        let close = Rect::new(inner.right() - close_width, inner.y, close_width, 1);
        let close_style = if self.focused == CLOSE_SLOT {
            Style::default().fg(theme::MUTED).add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default().fg(theme::MUTED)
        };
        frame.render_widget(Paragraph::new(Span::styled(CLOSE_CAPTION, close_style)), close);
        self.close_area = Some(close);
    }
}

impl Component for SeatDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(action) = status_buttons::shortcut(key.code) {
            return Ok(self.activate(action));
        }

        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseModal),
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                self.focused = (self.focused + 1) % FOCUS_SLOTS;
                None
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                self.focused = (self.focused + FOCUS_SLOTS - 1) % FOCUS_SLOTS;
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.press_focused(),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        let (column, row) = (mouse.column, mouse.row);

        if self.close_area.is_some_and(|r| contains(r, column, row)) {
            return Ok(Some(Action::CloseModal));
        }
        if let Some(action) = self.buttons.hit(column, row) {
            return Ok(self.activate(action));
        }
        if self.area.is_some_and(|r| !contains(r, column, row)) {
            return Ok(Some(Action::CloseModal));
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Needs the live seat; App calls `render` directly
        Ok(())
    }
}
