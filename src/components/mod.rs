//! UI Components
//!
//! Each component encapsulates its own presentation state, event handling
//! and rendering. Components communicate through Actions rather than
//! mutating seats directly.

pub mod chrome;
pub mod help_dialog;
pub mod layout;
pub mod legend;
pub mod quit_dialog;
pub mod seat_dialog;
pub mod seat_grid;
pub mod seat_info;
pub mod seat_popover;
pub mod status_buttons;

#[cfg(test)]
pub mod test_utils;

pub use help_dialog::HelpDialog;
pub use layout::calculate_main_layout;
pub use legend::LegendComponent;
pub use quit_dialog::QuitDialog;
pub use seat_dialog::SeatDialog;
pub use seat_grid::SeatGridComponent;
pub use seat_info::render_seat_info;
pub use seat_popover::SeatPopover;
