//! Visual theme constants: palette, spacing and breakpoints

use crate::model::SeatStatus;
use ratatui::style::{Color, Modifier, Style};

// ═══════════════════════════════════════════════════════════════════════════════
// Palette
// ═══════════════════════════════════════════════════════════════════════════════

pub const FOREGROUND: Color = Color::Rgb(0x17, 0x17, 0x17);
pub const PRIMARY: Color = Color::Rgb(0x00, 0x70, 0xf3);
pub const SECONDARY: Color = Color::Rgb(0xff, 0x40, 0x81);
pub const MUTED: Color = Color::DarkGray;

/// Badge color for a status (green, amber, tomato, gray)
pub fn badge_color(status: SeatStatus) -> Color {
    match status {
        SeatStatus::Available => Color::Rgb(0x30, 0xa4, 0x6c),
        SeatStatus::Reserved => Color::Rgb(0xff, 0xc5, 0x3d),
        SeatStatus::Occupied => Color::Rgb(0xe5, 0x4d, 0x2e),
        SeatStatus::Unavailable => Color::Rgb(0x8b, 0x8d, 0x98),
    }
}

/// Cell border color for a status
pub fn border_color(status: SeatStatus) -> Color {
    match status {
        SeatStatus::Available => Color::Rgb(0x4c, 0xaf, 0x50),
        SeatStatus::Reserved => Color::Rgb(0xff, 0x98, 0x00),
        SeatStatus::Occupied => Color::Rgb(0xf4, 0x43, 0x36),
        SeatStatus::Unavailable => Color::Rgb(0x9e, 0x9e, 0x9e),
    }
}

/// Cell background color for a status
pub fn background_color(status: SeatStatus) -> Color {
    match status {
        SeatStatus::Available => Color::Rgb(0xe6, 0xf7, 0xe6),
        SeatStatus::Reserved => Color::Rgb(0xff, 0xf3, 0xe0),
        SeatStatus::Occupied => Color::Rgb(0xff, 0xeb, 0xee),
        SeatStatus::Unavailable => Color::Rgb(0xf5, 0xf5, 0xf5),
    }
}

/// Solid badge style: dark text on the status color
pub fn badge_style(status: SeatStatus) -> Style {
    Style::default()
        .fg(FOREGROUND)
        .bg(badge_color(status))
        .add_modifier(Modifier::BOLD)
}

/// Soft button style used by status actions
pub fn button_style(status: SeatStatus, focused: bool, enabled: bool) -> Style {
    if !enabled {
        return Style::default().fg(MUTED).add_modifier(Modifier::DIM);
    }
    let style = Style::default().fg(badge_color(status));
    if focused {
        style.add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        style
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Spacing & Breakpoints
// ═══════════════════════════════════════════════════════════════════════════════

/// Seat cell size including its border
pub const CELL_WIDTH: u16 = 10;
pub const CELL_HEIGHT: u16 = 3;
pub const COMPACT_CELL_WIDTH: u16 = 7;

/// Gap between seat cells
pub const CELL_GAP: u16 = 1;

/// Width of the selected-seat panel when shown beside the grid
pub const INFO_PANEL_WIDTH: u16 = 28;

/// Below this width, seat cells shrink
pub const BREAKPOINT_COMPACT: u16 = 60;
/// At or above this width, the info panel sits beside the grid
pub const BREAKPOINT_WIDE: u16 = 100;

/// Cell width for a terminal of the given width
pub fn cell_width(terminal_width: u16) -> u16 {
    if terminal_width < BREAKPOINT_COMPACT {
        COMPACT_CELL_WIDTH
    } else {
        CELL_WIDTH
    }
}
