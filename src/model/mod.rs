//! Model layer - centralized state management
//!
//! - `Seat` / `SeatStatus` - seat records and the status-change rule
//! - `SeatBoard` - the seat collection and the selected seat
//! - `SeatSource` - where the initial seats come from
//! - `ModalStack` - modal overlay management

pub mod board;
pub mod modal;
pub mod seat;
pub mod source;

pub use board::{SeatBoard, StatusChange, StatusCounts};
pub use seat::{Seat, SeatId, SeatStatus, StatusAction};
pub use source::{FixtureSeatSource, RandomSeatSource, SeatSource};

#[cfg(test)]
pub use seat::PLACEHOLDER_USER;
#[cfg(test)]
pub use source::StaticSeatSource;
