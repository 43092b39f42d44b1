//! Root application component
//!
//! The App owns the seat board and the modal stack, routes input to the
//! top overlay or the seat grid, and applies the resulting Actions. Child
//! components never touch the board; they only emit Actions.

use crate::action::Action;
use crate::component::Component;
use crate::components::chrome::{render_header, render_help_bar, render_status_bar};
use crate::components::{
    calculate_main_layout, render_seat_info, HelpDialog, LegendComponent, QuitDialog, SeatDialog,
    SeatGridComponent, SeatPopover,
};
use crate::model::modal::{Modal, ModalStack};
use crate::model::{SeatBoard, SeatId, SeatSource, StatusAction, StatusChange};
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Seat collection and selected seat
    pub board: SeatBoard,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Last status change, shown in the status bar
    pub status_message: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub grid: SeatGridComponent,
    pub legend: LegendComponent,
    pub popover: SeatPopover,
    pub seat_dialog: SeatDialog,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    pub fn new(board: SeatBoard) -> App {
        App {
            board,
            modals: ModalStack::new(),
            should_quit: false,
            status_message: None,
            grid: SeatGridComponent::new(),
            legend: LegendComponent::default(),
            popover: SeatPopover::default(),
            seat_dialog: SeatDialog::default(),
            quit_dialog: QuitDialog::default(),
            help_dialog: HelpDialog::default(),
        }
    }

    /// Load the seats once and build the app around them
    pub fn from_source(source: &mut dyn SeatSource) -> Result<App> {
        Ok(Self::new(SeatBoard::load(source)?))
    }

    /// Select a seat and open its popover, replacing any open popover
    fn open_popover(&mut self, id: SeatId) {
        if !self.board.select_seat(&id) {
            tracing::debug!(seat = %id, "No seat at position");
            return;
        }
        self.grid.focus(id);
        self.modals.dismiss_popovers();
        if let Some(seat) = self.board.seat(&id) {
            self.popover.show(seat);
        }
        self.modals.push(Modal::SeatPopover { seat_id: id });
    }

    /// Select a seat and open its full dialog
    fn open_dialog(&mut self, id: SeatId) {
        if !self.board.select_seat(&id) {
            tracing::debug!(seat = %id, "No seat at position");
            return;
        }
        self.grid.focus(id);
        self.modals.dismiss_popovers();
        if let Some(seat) = self.board.seat(&id) {
            self.seat_dialog.show(seat);
        }
        self.modals.push(Modal::SeatDialog { seat_id: id });
    }

    fn change_status(&mut self, id: SeatId, action: StatusAction) {
        match self.board.change_seat_status(&id, action) {
            StatusChange::Changed { from, to } => {
                self.status_message = Some(format!(
                    "[{}] {}: {} → {}",
                    Local::now().format("%H:%M:%S"),
                    id,
                    from.label(),
                    to.label()
                ));
                if let Some(seat) = self.board.seat(&id) {
                    self.popover.refresh(seat);
                    self.seat_dialog.refresh(seat);
                }
            }
            StatusChange::Unchanged => {
                self.status_message = Some(format!("{} は利用不可のため変更できません", id));
            }
            StatusChange::NotFound => {
                tracing::warn!(seat = %id, "Status change for unknown seat");
            }
        }
    }

    /// Route a click that landed outside any overlay
    fn handle_board_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind == MouseEventKind::Moved {
            return self.legend.handle_mouse_event(mouse);
        }
        self.grid.handle_mouse_event(mouse)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }

        match self.modals.top() {
            Some(Modal::SeatPopover { .. }) => self.popover.handle_key_event(key),
            Some(Modal::SeatDialog { .. }) => self.seat_dialog.handle_key_event(key),
            Some(Modal::QuitConfirm) => self.quit_dialog.handle_key_event(key),
            Some(Modal::Help) => self.help_dialog.handle_key_event(key),
            None => self.grid.handle_key_event(key),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        match self.modals.top().cloned() {
            Some(Modal::SeatPopover { seat_id }) => {
                if !matches!(mouse.kind, MouseEventKind::Down(_)) {
                    return Ok(None);
                }
                if self.popover.contains(mouse.column, mouse.row) {
                    return self.popover.handle_mouse_event(mouse);
                }
                // Outside click dismisses the popover; clicking its own seat
                // only closes it
                self.modals.pop();
                if self.grid.seat_at(mouse.column, mouse.row) == Some(seat_id) {
                    return Ok(None);
                }
                self.handle_board_mouse_event(mouse)
            }
            Some(Modal::SeatDialog { .. }) => self.seat_dialog.handle_mouse_event(mouse),
            Some(Modal::QuitConfirm) | Some(Modal::Help) => Ok(None),
            None => self.handle_board_mouse_event(mouse),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick | Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Grid Cursor
            // ─────────────────────────────────────────────────────────────────
            Action::CursorUp => self.grid.move_cursor(-1, 0, self.board.dimensions()),
            Action::CursorDown => self.grid.move_cursor(1, 0, self.board.dimensions()),
            Action::CursorLeft => self.grid.move_cursor(0, -1, self.board.dimensions()),
            Action::CursorRight => self.grid.move_cursor(0, 1, self.board.dimensions()),

            // ─────────────────────────────────────────────────────────────────
            // Seats
            // ─────────────────────────────────────────────────────────────────
            Action::SelectSeat(id) => self.open_popover(id),
            Action::OpenSeatDialog(id) => self.open_dialog(id),
            Action::ChangeStatus(id, status_action) => self.change_status(id, status_action),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.quit_dialog.open(self.board.counts());
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }

            // ─────────────────────────────────────────────────────────────────
            // Legend
            // ─────────────────────────────────────────────────────────────────
            Action::ShowTooltip(_) | Action::CycleTooltip => {
                self.legend.update(action)?;
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_main_layout(area);

        render_header(frame, layout.header);
        self.legend.render(frame, layout.legend);
        self.grid.render(frame, layout.grid, &self.board);
        render_seat_info(frame, layout.info, self.board.selected());
        render_status_bar(
            frame,
            layout.status,
            self.board.counts(),
            self.status_message.as_deref(),
        );
        render_help_bar(frame, layout.help, self.modals.top());

        let modals: Vec<Modal> = self.modals.iter().cloned().collect();
        for modal in &modals {
            self.draw_modal(frame, area, modal)?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::SeatPopover { seat_id } => {
                if let Some(seat) = self.board.seat(seat_id) {
                    // A clipped cell has no anchor; fall back to the middle
                    let anchor = self.grid.cell_area(seat_id).unwrap_or_else(|| {
                        Rect::new(area.x + area.width / 2, area.y + area.height / 2, 1, 1)
                    });
                    self.popover.render(frame, area, anchor, seat);
                }
            }
            Modal::SeatDialog { seat_id } => {
                if let Some(seat) = self.board.seat(seat_id) {
                    self.seat_dialog.render(frame, area, seat);
                }
            }
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::Help => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_utils::{buffer_text, key, mouse_down, mouse_move};
    use crate::model::{Seat, SeatStatus, StaticSeatSource, PLACEHOLDER_USER};
    use crossterm::event::MouseButton;
    use ratatui::{backend::TestBackend, Terminal};

    fn id(s: &str) -> SeatId {
        s.parse().unwrap()
    }

    /// 4 × 6 board with every seat available except 2-3
    fn app() -> App {
        let mut seats = Vec::new();
        for row in 1..=4 {
            for col in 1..=6 {
                let status = if (row, col) == (2, 3) {
                    SeatStatus::Unavailable
                } else {
                    SeatStatus::Available
                };
                seats.push(Seat::new(SeatId::new(row, col), status, None));
            }
        }
        App::from_source(&mut StaticSeatSource::new(seats)).unwrap()
    }

    /// Feed a key through the same path as the main loop
    fn press(app: &mut App, code: KeyCode) {
        if let Some(action) = app.handle_key_event(key(code)).unwrap() {
            dispatch(app, action);
        }
    }

    fn click(app: &mut App, button: MouseButton, column: u16, row: u16) {
        if let Some(action) = app.handle_mouse_event(mouse_down(button, column, row)).unwrap() {
            dispatch(app, action);
        }
    }

    fn dispatch(app: &mut App, action: Action) {
        let mut current = Some(action);
        while let Some(a) = current {
            current = app.update(a).unwrap();
        }
    }

    fn render(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.draw(frame, frame.area()).unwrap()).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_reserve_then_vacate_through_popover() {
        let mut app = app();

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.modals.top(), Some(&Modal::SeatPopover { seat_id: id("1-1") }));
        assert_eq!(app.board.selected().map(|s| s.id), Some(id("1-1")));

        press(&mut app, KeyCode::Char('2'));
        let seat = app.board.seat(&id("1-1")).unwrap();
        assert_eq!(seat.status, SeatStatus::Reserved);
        assert_eq!(seat.user.as_deref(), Some(PLACEHOLDER_USER));
        assert_eq!(app.board.selected().unwrap().status, SeatStatus::Reserved);
        assert_eq!(app.popover.seat().unwrap().status, SeatStatus::Reserved);

        press(&mut app, KeyCode::Char('1'));
        let seat = app.board.seat(&id("1-1")).unwrap();
        assert_eq!(seat.status, SeatStatus::Available);
        assert!(seat.user.is_none());
        assert!(app.board.selected().unwrap().user.is_none());
    }

    #[test]
    fn test_unavailable_seat_cannot_be_used() {
        let mut app = app();
        app.grid.focus(id("2-3"));

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);

        let seat = app.board.seat(&id("2-3")).unwrap();
        assert_eq!(seat.status, SeatStatus::Unavailable);
        assert!(seat.user.is_none());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_direct_change_on_unavailable_reports_message() {
        let mut app = app();
        dispatch(&mut app, Action::ChangeStatus(id("2-3"), StatusAction::Occupy));
        assert_eq!(app.board.seat(&id("2-3")).unwrap().status, SeatStatus::Unavailable);
        assert!(app.status_message.as_deref().unwrap().contains("2-3"));
    }

    #[test]
    fn test_change_other_seat_keeps_selection() {
        let mut app = app();
        dispatch(&mut app, Action::SelectSeat(id("1-1")));
        dispatch(&mut app, Action::CloseModal);

        dispatch(&mut app, Action::ChangeStatus(id("4-6"), StatusAction::Occupy));

        let selected = app.board.selected().unwrap();
        assert_eq!(selected.id, id("1-1"));
        assert_eq!(selected.status, SeatStatus::Available);
        assert_eq!(app.board.seat(&id("4-6")).unwrap().status, SeatStatus::Occupied);
    }

    #[test]
    fn test_cursor_then_dialog() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('i'));

        assert_eq!(app.modals.top(), Some(&Modal::SeatDialog { seat_id: id("2-2") }));
        assert_eq!(app.board.selected().map(|s| s.id), Some(id("2-2")));

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.board.seat(&id("2-2")).unwrap().status, SeatStatus::Occupied);
        assert_eq!(app.seat_dialog.seat().unwrap().status, SeatStatus::Occupied);

        press(&mut app, KeyCode::Esc);
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_popover_escalates_to_dialog() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('i'));

        assert_eq!(app.modals.top(), Some(&Modal::SeatDialog { seat_id: id("1-1") }));
        assert_eq!(app.modals.iter().count(), 1);
    }

    #[test]
    fn test_click_opens_popover_and_outside_click_closes() {
        let mut app = app();
        render(&mut app, 120, 40);

        let cell = app.grid.cell_area(&id("3-4")).unwrap();
        click(&mut app, MouseButton::Left, cell.x + 1, cell.y + 1);
        assert_eq!(app.modals.top(), Some(&Modal::SeatPopover { seat_id: id("3-4") }));
        assert_eq!(app.grid.cursor(), id("3-4"));

        let text = render(&mut app, 120, 40);
        assert!(text.contains("座席: 3-4"));

        click(&mut app, MouseButton::Left, 0, 0);
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_click_other_seat_moves_popover() {
        let mut app = app();
        render(&mut app, 120, 40);

        let first = app.grid.cell_area(&id("1-1")).unwrap();
        click(&mut app, MouseButton::Left, first.x + 1, first.y + 1);
        render(&mut app, 120, 40);

        let other = app.grid.cell_area(&id("1-6")).unwrap();
        click(&mut app, MouseButton::Left, other.x + 1, other.y + 1);

        assert_eq!(app.modals.top(), Some(&Modal::SeatPopover { seat_id: id("1-6") }));
        assert_eq!(app.modals.iter().count(), 1);
    }

    #[test]
    fn test_right_click_opens_dialog() {
        let mut app = app();
        render(&mut app, 120, 40);

        let cell = app.grid.cell_area(&id("4-1")).unwrap();
        click(&mut app, MouseButton::Right, cell.x + 1, cell.y + 1);
        assert_eq!(app.modals.top(), Some(&Modal::SeatDialog { seat_id: id("4-1") }));

        let text = render(&mut app, 120, 40);
        assert!(text.contains("座席情報: 4-1"));
    }

    #[test]
    fn test_legend_hover_and_cycle() {
        let mut app = app();
        render(&mut app, 120, 40);

        // Legend row sits under the one-line heading
        if let Some(action) = app.handle_mouse_event(mouse_move(7, 1)).unwrap() {
            dispatch(&mut app, action);
        }
        assert_eq!(app.legend.tooltip(), Some(SeatStatus::Available));
        assert!(render(&mut app, 120, 40).contains("予約可能な座席です"));

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.legend.tooltip(), Some(SeatStatus::Reserved));
    }

    #[test]
    fn test_full_screen_render() {
        let mut app = app();
        let text = render(&mut app, 120, 40);
        assert!(text.contains("オフィス座席表"));
        assert!(text.contains("凡例:"));
        assert!(text.contains("座席を選択してください"));
        assert!(text.contains("空席 23"));
        assert!(text.contains("利用不可 1"));
    }

    #[test]
    fn test_narrow_render_keeps_every_seat() {
        let mut app = app();
        render(&mut app, 70, 30);
        for seat in app.board.seats() {
            assert!(app.grid.cell_area(&seat.id).is_some(), "{} clipped", seat.id);
        }
    }

    #[test]
    fn test_quit_flow() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));
        assert!(render(&mut app, 120, 40).contains("予約済み 0 席 / 使用中 0 席"));
        press(&mut app, KeyCode::Char('n'));
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_any_overlay() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('i'));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let action = app.handle_key_event(ctrl_c).unwrap();
        assert_eq!(action, Some(Action::ForceQuit));
    }
}
