//! Seat grid component
//!
//! Draws one cell per seat, owns the keyboard cursor, and maps clicks on
//! cells back to seat ids.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::contains;
use crate::model::{Seat, SeatBoard, SeatId};
use crate::theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Seat grid with cursor and hit-testing state
#[derive(Debug, Clone)]
pub struct SeatGridComponent {
    /// Cursor position, 1-based (row, col)
    cursor: (u16, u16),
    /// Cells drawn in the last frame
    cell_areas: Vec<(Rect, SeatId)>,
}

impl Default for SeatGridComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SeatGridComponent {
    pub fn new() -> Self {
        Self {
            cursor: (1, 1),
            cell_areas: Vec::new(),
        }
    }

    pub fn cursor(&self) -> SeatId {
        SeatId::new(self.cursor.0, self.cursor.1)
    }

    /// Move the cursor, staying inside a grid of `rows` × `cols`
    pub fn move_cursor(&mut self, d_row: i32, d_col: i32, (rows, cols): (u16, u16)) {
        if rows == 0 || cols == 0 {
            return;
        }
        let row = (self.cursor.0 as i32 + d_row).clamp(1, rows as i32);
        let col = (self.cursor.1 as i32 + d_col).clamp(1, cols as i32);
        self.cursor = (row as u16, col as u16);
    }

    pub fn focus(&mut self, id: SeatId) {
        self.cursor = (id.row(), id.col());
    }

    /// Screen area of a seat's cell from the last frame
    pub fn cell_area(&self, id: &SeatId) -> Option<Rect> {
        self.cell_areas
            .iter()
            .find(|(_, cell)| cell == id)
            .map(|(rect, _)| *rect)
    }

    /// Seat under a mouse position from the last frame
    pub fn seat_at(&self, column: u16, row: u16) -> Option<SeatId> {
        self.cell_areas
            .iter()
            .find(|(rect, _)| contains(*rect, column, row))
            .map(|(_, id)| *id)
    }

    /// Render the grid for the given board
    pub fn render(&mut self, frame: &mut Frame, area: Rect, board: &SeatBoard) {
        self.cell_areas.clear();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::MUTED))
            .title(" 座席 ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if board.is_empty() {
            frame.render_widget(
                Paragraph::new("座席がありません").alignment(Alignment::Center),
                inner,
            );
            return;
        }

        let (_, cols) = board.dimensions();
        let cell_width = theme::cell_width(frame.area().width);
        let step_x = u32::from(cell_width + theme::CELL_GAP);
        let step_y = u32::from(theme::CELL_HEIGHT);
        let grid_width = u32::from(cols) * step_x - u32::from(theme::CELL_GAP);
        let offset_x =
            u32::from(inner.x) + u32::from(inner.width).saturating_sub(grid_width) / 2;

        let selected = board.selected().map(|s| s.id);

        for seat in board.seats() {
            // Cells past the edge of the area are skipped, not clipped
            let x = offset_x + u32::from(seat.id.col().saturating_sub(1)) * step_x;
            let y = u32::from(inner.y) + u32::from(seat.id.row().saturating_sub(1)) * step_y;
            if x + u32::from(cell_width) > u32::from(inner.right())
                || y + step_y > u32::from(inner.bottom())
            {
                continue;
            }
            let cell = Rect::new(x as u16, y as u16, cell_width, theme::CELL_HEIGHT);

            let is_cursor = seat.id == self.cursor();
            let is_selected = selected == Some(seat.id);
            render_cell(frame, cell, seat, is_cursor, is_selected);
            self.cell_areas.push((cell, seat.id));
        }
    }
}

fn render_cell(frame: &mut Frame, cell: Rect, seat: &Seat, is_cursor: bool, is_selected: bool) {
    let border_type = if is_cursor {
        BorderType::Thick
    } else if is_selected {
        BorderType::Double
    } else {
        BorderType::Rounded
    };

    let mut border_style = Style::default()
        .fg(theme::border_color(seat.status))
        .bg(theme::background_color(seat.status));
    let mut text_style = Style::default()
        .fg(theme::FOREGROUND)
        .bg(theme::background_color(seat.status));
    if is_cursor {
        border_style = border_style.fg(theme::PRIMARY);
    }
    if is_selected {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }
    if !seat.status.is_editable() {
        text_style = text_style.add_modifier(Modifier::DIM);
    }

    let paragraph = Paragraph::new(Line::from(seat.id.to_string()))
        .style(text_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style),
        );
    frame.render_widget(paragraph, cell);
}

impl Component for SeatGridComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ForceQuit)
            }
            KeyCode::Char('k') | KeyCode::Up => Some(Action::CursorUp),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::CursorDown),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::CursorLeft),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::CursorRight),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectSeat(self.cursor())),
            KeyCode::Char('i') => Some(Action::OpenSeatDialog(self.cursor())),
            KeyCode::Char('t') => Some(Action::CycleTooltip),
            KeyCode::Esc => Some(Action::ShowTooltip(None)),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let Some(id) = self.seat_at(mouse.column, mouse.row) else {
            return Ok(None);
        };
        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Action::SelectSeat(id)),
            MouseEventKind::Down(MouseButton::Right) => Some(Action::OpenSeatDialog(id)),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing needs the board; App calls `render` directly
        Ok(())
    }
}
