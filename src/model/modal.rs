//! Modal stack for managing overlays
//!
//! The popover, the seat dialog, the quit confirmation and the help screen
//! are all overlays; only the top one receives input.

use super::seat::SeatId;

/// An overlay drawn on top of the seat map
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Lightweight status popover anchored to a seat cell
    SeatPopover { seat_id: SeatId },
    /// Full seat dialog
    SeatDialog { seat_id: SeatId },
    /// Quit confirmation dialog
    QuitConfirm,
    /// Keyboard shortcut reference
    Help,
}

/// A stack of modal overlays
///
/// Modals are rendered from bottom to top, with only the top modal
/// receiving input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Bottom-to-top iteration for drawing
    pub fn iter(&self) -> impl Iterator<Item = &Modal> {
        self.stack.iter()
    }

    /// Drop every seat popover from the stack
    ///
    /// Popovers are transient: opening a dialog or another popover replaces
    /// them rather than stacking.
    pub fn dismiss_popovers(&mut self) {
        self.stack.retain(|m| !matches!(m, Modal::SeatPopover { .. }));
    }
}
