//! Seat board - the single owner of the seat collection
//!
//! Holds the authoritative seat list and the selected-seat snapshot as two
//! independent pieces of state. Children never mutate seats directly; they
//! emit actions that end up in `select_seat` or `change_seat_status`.

use super::seat::{Seat, SeatId, SeatStatus, StatusAction};
use super::source::SeatSource;
use anyhow::Result;

/// Outcome of a status change request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    /// The seat moved from one status to another (possibly the same one)
    Changed { from: SeatStatus, to: SeatStatus },
    /// The seat is unavailable and was left untouched
    Unchanged,
    /// No seat with that id exists
    NotFound,
}

/// Per-status seat counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub available: usize,
    pub reserved: usize,
    pub occupied: usize,
    pub unavailable: usize,
}

impl StatusCounts {
    pub fn get(&self, status: SeatStatus) -> usize {
        match status {
            SeatStatus::Available => self.available,
            SeatStatus::Reserved => self.reserved,
            SeatStatus::Occupied => self.occupied,
            SeatStatus::Unavailable => self.unavailable,
        }
    }
}

/// Seat collection plus the selected seat
#[derive(Debug, Clone, Default)]
pub struct SeatBoard {
    seats: Vec<Seat>,
    selected: Option<Seat>,
}

impl SeatBoard {
    pub fn new(seats: Vec<Seat>) -> Self {
        Self {
            seats,
            selected: None,
        }
    }

    /// Build a board from a seat source
    pub fn load(source: &mut dyn SeatSource) -> Result<Self> {
        let seats = source.load()?;
        tracing::info!(seats = seats.len(), source = source.name(), "Seat board loaded");
        Ok(Self::new(seats))
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn seat(&self, id: &SeatId) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == *id)
    }

    pub fn selected(&self) -> Option<&Seat> {
        self.selected.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Grid size as (rows, cols), taken from the largest row and column ids
    pub fn dimensions(&self) -> (u16, u16) {
        self.seats.iter().fold((0, 0), |(rows, cols), seat| {
            (rows.max(seat.id.row()), cols.max(seat.id.col()))
        })
    }

    pub fn counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for seat in &self.seats {
            match seat.status {
                SeatStatus::Available => counts.available += 1,
                SeatStatus::Reserved => counts.reserved += 1,
                SeatStatus::Occupied => counts.occupied += 1,
                SeatStatus::Unavailable => counts.unavailable += 1,
            }
        }
        counts
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Callbacks
    // ─────────────────────────────────────────────────────────────────────────

    /// Record a seat as the selected one
    ///
    /// Unknown ids leave the selection as it was.
    pub fn select_seat(&mut self, id: &SeatId) -> bool {
        match self.seat(id) {
            Some(seat) => {
                self.selected = Some(seat.clone());
                true
            }
            None => false,
        }
    }

    /// Change one seat's status, mirroring it into the selected snapshot
    pub fn change_seat_status(&mut self, id: &SeatId, action: StatusAction) -> StatusChange {
        let Some(seat) = self.seats.iter_mut().find(|s| s.id == *id) else {
            return StatusChange::NotFound;
        };

        let Some(from) = seat.apply(action) else {
            tracing::debug!(seat = %id, %action, "Ignored change on unavailable seat");
            return StatusChange::Unchanged;
        };
        let to = seat.status;

        if let Some(selected) = self.selected.as_mut().filter(|s| s.id == *id) {
            selected.apply(action);
        }

        tracing::info!(seat = %id, from = ?from, to = ?to, "Seat status changed");
        StatusChange::Changed { from, to }
    }
}
