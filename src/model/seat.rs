//! Seat records and the status-change rule

use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Occupant name assigned when a seat is reserved or occupied without one
pub const PLACEHOLDER_USER: &str = "新規ユーザー";

// ═══════════════════════════════════════════════════════════════════════════════
// Seat Identity
// ═══════════════════════════════════════════════════════════════════════════════

/// Seat identity derived from its 1-based grid position, written as `"row-col"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeatId {
    row: u16,
    col: u16,
}

impl SeatId {
    pub fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> u16 {
        self.row
    }

    pub fn col(&self) -> u16 {
        self.col
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl FromStr for SeatId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once('-')
            .ok_or_else(|| anyhow!("seat id '{}' is not in row-col form", s))?;
        let row: u16 = row
            .trim()
            .parse()
            .with_context(|| format!("invalid row in seat id '{}'", s))?;
        let col: u16 = col
            .trim()
            .parse()
            .with_context(|| format!("invalid column in seat id '{}'", s))?;
        if row == 0 || col == 0 {
            return Err(anyhow!("seat id '{}' must be 1-based", s));
        }
        Ok(Self { row, col })
    }
}

impl TryFrom<String> for SeatId {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SeatId> for String {
    fn from(id: SeatId) -> Self {
        id.to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Seat Status
// ═══════════════════════════════════════════════════════════════════════════════

/// Occupancy status of a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Reserved,
    Occupied,
    Unavailable,
}

impl SeatStatus {
    pub fn all() -> [SeatStatus; 4] {
        [
            SeatStatus::Available,
            SeatStatus::Reserved,
            SeatStatus::Occupied,
            SeatStatus::Unavailable,
        ]
    }

    /// Short label shown on badges
    pub fn label(&self) -> &'static str {
        match self {
            SeatStatus::Available => "空席",
            SeatStatus::Reserved => "予約済み",
            SeatStatus::Occupied => "使用中",
            SeatStatus::Unavailable => "利用不可",
        }
    }

    /// One-line description shown as the legend tooltip
    pub fn description(&self) -> &'static str {
        match self {
            SeatStatus::Available => "予約可能な座席です",
            SeatStatus::Reserved => "予約されている座席です",
            SeatStatus::Occupied => "現在使用されている座席です",
            SeatStatus::Unavailable => "使用できない座席です",
        }
    }

    /// Whether a seat in this status carries an occupant name
    pub fn has_occupant(&self) -> bool {
        matches!(self, SeatStatus::Reserved | SeatStatus::Occupied)
    }

    /// Whether the status-change actions are enabled for this status
    pub fn is_editable(&self) -> bool {
        *self != SeatStatus::Unavailable
    }
}

impl fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Status Actions
// ═══════════════════════════════════════════════════════════════════════════════

/// The three status changes a user can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusAction {
    Vacate,
    Reserve,
    Occupy,
}

impl StatusAction {
    pub fn all() -> [StatusAction; 3] {
        [StatusAction::Vacate, StatusAction::Reserve, StatusAction::Occupy]
    }

    pub fn target(&self) -> SeatStatus {
        match self {
            StatusAction::Vacate => SeatStatus::Available,
            StatusAction::Reserve => SeatStatus::Reserved,
            StatusAction::Occupy => SeatStatus::Occupied,
        }
    }

    /// Button caption in the popover
    pub fn short_label(&self) -> &'static str {
        match self {
            StatusAction::Vacate => "空席",
            StatusAction::Reserve => "予約",
            StatusAction::Occupy => "使用",
        }
    }

    /// Button caption in the dialog
    pub fn long_label(&self) -> &'static str {
        match self {
            StatusAction::Vacate => "空席にする",
            StatusAction::Reserve => "予約する",
            StatusAction::Occupy => "使用する",
        }
    }
}

impl fmt::Display for StatusAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusAction::Vacate => write!(f, "Vacate"),
            StatusAction::Reserve => write!(f, "Reserve"),
            StatusAction::Occupy => write!(f, "Occupy"),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Seat
// ═══════════════════════════════════════════════════════════════════════════════

/// A single bookable seat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: SeatId,
    pub status: SeatStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl Seat {
    pub fn new(id: SeatId, status: SeatStatus, user: Option<String>) -> Self {
        Self { id, status, user }
    }

    #[cfg(test)]
    pub fn available(id: SeatId) -> Self {
        Self::new(id, SeatStatus::Available, None)
    }

    /// Whether the occupant name agrees with the status
    pub fn is_consistent(&self) -> bool {
        let has_user = self.user.as_deref().is_some_and(|u| !u.is_empty());
        has_user == self.status.has_occupant()
    }

    /// Apply a status change in place
    ///
    /// Returns the previous status, or `None` when the seat is unavailable
    /// and nothing changed.
    pub fn apply(&mut self, action: StatusAction) -> Option<SeatStatus> {
        if !self.status.is_editable() {
            return None;
        }
        let previous = self.status;
        let target = action.target();
        self.status = target;
        self.user = if target.has_occupant() {
            Some(
                self.user
                    .take()
                    .filter(|u| !u.is_empty())
                    .unwrap_or_else(|| PLACEHOLDER_USER.to_string()),
            )
        } else {
            None
        };
        Some(previous)
    }
}
