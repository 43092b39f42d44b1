//! Seat sources - where the initial seat collection comes from
//!
//! The board is built once at startup from a `SeatSource`. The random source
//! produces demo data; fixtures and static seats give deterministic boards.

use super::seat::{Seat, SeatId, SeatStatus};
use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

/// Demo grid size
pub const DEFAULT_ROWS: u16 = 4;
pub const DEFAULT_COLS: u16 = 6;

/// Largest grid accepted from a fixture or the config
pub const MAX_ROWS: u16 = 50;
pub const MAX_COLS: u16 = 50;

/// Names handed out to randomly reserved or occupied seats
pub const DEFAULT_OCCUPANT_NAMES: [&str; 4] = ["田中太郎", "鈴木花子", "佐藤次郎", "山田優子"];

/// Provider of the initial seat collection
pub trait SeatSource {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Produce the seats, in rendering order
    fn load(&mut self) -> Result<Vec<Seat>>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// Random Source
// ═══════════════════════════════════════════════════════════════════════════════

/// Random demo seats on a fixed grid
pub struct RandomSeatSource {
    rows: u16,
    cols: u16,
    names: Vec<String>,
    rng: StdRng,
}

impl RandomSeatSource {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows: rows.min(MAX_ROWS),
            cols: cols.min(MAX_COLS),
            names: DEFAULT_OCCUPANT_NAMES.iter().map(|n| n.to_string()).collect(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Use a fixed seed so the same board comes out every time
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Replace the occupant name list; an empty list keeps the defaults
    pub fn with_names(mut self, names: Vec<String>) -> Self {
        let names: Vec<String> = names.into_iter().filter(|n| !n.is_empty()).collect();
        if !names.is_empty() {
            self.names = names;
        }
        self
    }
}

impl Default for RandomSeatSource {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl SeatSource for RandomSeatSource {
    fn name(&self) -> &'static str {
        "random"
    }

    fn load(&mut self) -> Result<Vec<Seat>> {
        let statuses = SeatStatus::all();
        let mut seats = Vec::with_capacity(self.rows as usize * self.cols as usize);

        for row in 1..=self.rows {
            for col in 1..=self.cols {
                let status = *statuses
                    .choose(&mut self.rng)
                    .context("status list is empty")?;
                let user = if status.has_occupant() {
                    self.names.choose(&mut self.rng).cloned()
                } else {
                    None
                };
                seats.push(Seat::new(SeatId::new(row, col), status, user));
            }
        }

        Ok(seats)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Fixture Source
// ═══════════════════════════════════════════════════════════════════════════════

/// Seats read from a JSON array such as
/// `[{"id": "1-1", "status": "reserved", "user": "田中太郎"}]`
pub struct FixtureSeatSource {
    path: PathBuf,
}

impl FixtureSeatSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SeatSource for FixtureSeatSource {
    fn name(&self) -> &'static str {
        "fixture"
    }

    fn load(&mut self) -> Result<Vec<Seat>> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read seat fixture {}", self.path.display()))?;
        parse_fixture(&contents)
            .with_context(|| format!("Invalid seat fixture {}", self.path.display()))
    }
}

/// Parse and validate fixture JSON
pub fn parse_fixture(contents: &str) -> Result<Vec<Seat>> {
    let seats: Vec<Seat> = serde_json::from_str(contents)?;
    validate_seats(&seats)?;
    Ok(seats)
}

/// Reject duplicate ids, ids outside the largest grid, and occupant names
/// that disagree with the status
pub fn validate_seats(seats: &[Seat]) -> Result<()> {
    let mut seen = HashSet::new();
    for seat in seats {
        if seat.id.row() > MAX_ROWS || seat.id.col() > MAX_COLS {
            bail!(
                "seat {} is outside the {}x{} grid limit",
                seat.id,
                MAX_ROWS,
                MAX_COLS
            );
        }
        if !seen.insert(seat.id) {
            bail!("duplicate seat id {}", seat.id);
        }
        if !seat.is_consistent() {
            if seat.status.has_occupant() {
                bail!("seat {} is {:?} but has no occupant", seat.id, seat.status);
            }
            bail!("seat {} is {:?} but has an occupant", seat.id, seat.status);
        }
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════════
// Static Source
// ═══════════════════════════════════════════════════════════════════════════════

/// Seats supplied directly in memory
#[cfg(test)]
pub struct StaticSeatSource {
    seats: Vec<Seat>,
}

#[cfg(test)]
impl StaticSeatSource {
    pub fn new(seats: Vec<Seat>) -> Self {
        Self { seats }
    }
}

#[cfg(test)]
impl SeatSource for StaticSeatSource {
    fn name(&self) -> &'static str {
        "static"
    }

    fn load(&mut self) -> Result<Vec<Seat>> {
        validate_seats(&self.seats)?;
        Ok(self.seats.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_random_source_fills_grid() {
        let mut source = RandomSeatSource::new(4, 6).with_seed(7);
        let seats = source.load().unwrap();

        assert_eq!(seats.len(), 24);
        assert_eq!(seats[0].id.to_string(), "1-1");
        assert_eq!(seats[23].id.to_string(), "4-6");
        assert!(validate_seats(&seats).is_ok());
    }

    #[test]
    fn test_random_source_names_come_from_list() {
        let mut source = RandomSeatSource::new(5, 5)
            .with_seed(42)
            .with_names(vec!["甲".to_string()]);
        for seat in source.load().unwrap() {
            match seat.user {
                Some(user) => assert_eq!(user, "甲"),
                None => assert!(!seat.status.has_occupant()),
            }
        }
    }

    #[test]
    fn test_random_source_is_deterministic_with_seed() {
        let a = RandomSeatSource::default().with_seed(1).load().unwrap();
        let b = RandomSeatSource::default().with_seed(1).load().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_name_list_keeps_defaults() {
        let source = RandomSeatSource::default().with_names(Vec::new());
        assert_eq!(source.names.len(), DEFAULT_OCCUPANT_NAMES.len());
    }

    #[test]
    fn test_parse_fixture() {
        let seats = parse_fixture(
            r#"[
                {"id": "1-1", "status": "available"},
                {"id": "1-2", "status": "occupied", "user": "山田優子"},
                {"id": "2-3", "status": "unavailable"}
            ]"#,
        )
        .unwrap();

        assert_eq!(seats.len(), 3);
        assert_eq!(seats[1].status, SeatStatus::Occupied);
        assert_eq!(seats[2].id, SeatId::new(2, 3));
    }

    #[test]
    fn test_fixture_rejects_duplicates() {
        let err = parse_fixture(
            r#"[{"id": "1-1", "status": "available"}, {"id": "1-1", "status": "available"}]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_fixture_rejects_missing_occupant() {
        assert!(parse_fixture(r#"[{"id": "1-1", "status": "reserved"}]"#).is_err());
        assert!(
            parse_fixture(r#"[{"id": "1-1", "status": "available", "user": "x"}]"#).is_err()
        );
    }

    #[test]
    fn test_fixture_rejects_ids_beyond_grid_limit() {
        let err = parse_fixture(r#"[{"id": "1-7000", "status": "available"}]"#).unwrap_err();
        assert!(err.to_string().contains("1-7000"));
        assert!(parse_fixture(r#"[{"id": "30000-1", "status": "available"}]"#).is_err());
        assert!(parse_fixture(r#"[{"id": "50-50", "status": "available"}]"#).is_ok());
    }

    #[test]
    fn test_random_source_caps_grid() {
        let mut source = RandomSeatSource::new(u16::MAX, 2).with_seed(3);
        assert_eq!(source.load().unwrap().len(), MAX_ROWS as usize * 2);
    }

    #[test]
    fn test_fixture_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"[{{"id": "3-4", "status": "reserved", "user": "佐藤次郎"}}]"#).unwrap();

        let mut source = FixtureSeatSource::new(file.path());
        let seats = source.load().unwrap();
        assert_eq!(seats.len(), 1);
        assert_eq!(seats[0].user.as_deref(), Some("佐藤次郎"));
    }

    #[test]
    fn test_missing_fixture_file_names_path() {
        let mut source = FixtureSeatSource::new("/nonexistent/seats.json");
        let err = source.load().unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/seats.json"));
    }
}
