//! Layout calculations for the UI

use crate::theme;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Main screen layout areas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub header: Rect,
    pub legend: Rect,
    pub grid: Rect,
    pub info: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Height of the selected-seat panel when stacked under the grid
const STACKED_INFO_HEIGHT: u16 = 5;

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let popup_x = area.x + (area.width - width) / 2;
    let popup_y = area.y + (area.height - height) / 2;

    Rect::new(popup_x, popup_y, width, height)
}

/// Place a popup next to an anchor, preferring below it, then above,
/// and clamping horizontally so it stays inside `area`
pub fn anchored_popup(anchor: Rect, area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let below = anchor.bottom();
    let y = if below + height <= area.bottom() {
        below
    } else if anchor.y >= area.y + height {
        anchor.y - height
    } else {
        area.bottom() - height
    };

    let centered = (anchor.x + anchor.width / 2).saturating_sub(width / 2);
    let x = centered.clamp(area.x, area.right() - width);

    Rect::new(x, y, width, height)
}

/// Whether a terminal cell lies inside a rect
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}

/// Calculate main screen layout
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    let (grid, info) = if area.width >= theme::BREAKPOINT_WIDE {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(theme::INFO_PANEL_WIDTH),
            ])
            .split(rows[2]);
        (cols[0], cols[1])
    } else {
        let stacked = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(STACKED_INFO_HEIGHT)])
            .split(rows[2]);
        (stacked[0], stacked[1])
    };

    MainLayout {
        header: rows[0],
        legend: rows[1],
        grid,
        info,
        status: rows[3],
        help: rows[4],
    }
}
