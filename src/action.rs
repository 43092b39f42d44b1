//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::{SeatId, SeatStatus, StatusAction};
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick (no event within the poll timeout)
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Grid Cursor
    // ─────────────────────────────────────────────────────────────────────────
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,

    // ─────────────────────────────────────────────────────────────────────────
    // Seats
    // ─────────────────────────────────────────────────────────────────────────
    /// Select a seat and open its popover
    SelectSeat(SeatId),
    /// Open the full dialog for a seat
    OpenSeatDialog(SeatId),
    /// Change a seat's status
    ChangeStatus(SeatId, StatusAction),

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Legend
    // ─────────────────────────────────────────────────────────────────────────
    /// Show the tooltip for one status, or hide it
    ShowTooltip(Option<SeatStatus>),
    /// Step the legend tooltip to the next status
    CycleTooltip,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::CursorUp => write!(f, "CursorUp"),
            Action::CursorDown => write!(f, "CursorDown"),
            Action::CursorLeft => write!(f, "CursorLeft"),
            Action::CursorRight => write!(f, "CursorRight"),
            Action::SelectSeat(id) => write!(f, "SelectSeat({})", id),
            Action::OpenSeatDialog(id) => write!(f, "OpenSeatDialog({})", id),
            Action::ChangeStatus(id, action) => write!(f, "ChangeStatus({}, {})", id, action),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ShowTooltip(Some(status)) => write!(f, "ShowTooltip({:?})", status),
            Action::ShowTooltip(None) => write!(f, "ShowTooltip(None)"),
            Action::CycleTooltip => write!(f, "CycleTooltip"),
        }
    }
}
