//! Per-bay seat classification.
//!
//! A bay is a block of seat columns bounded on each side either by the
//! cabin wall (window side) or by an aisle. Which side is which depends
//! only on where the bay sits in the cabin:
//!
//! | Position | Column 1 | Column `columns` |
//! |----------|----------|------------------|
//! | First    | Window   | Aisle            |
//! | Interior | Aisle    | Aisle            |
//! | Last     | Aisle    | Window           |
//! | Sole     | Window   | Aisle            |
//!
//! Every column strictly between the two outer columns is a middle seat.
//!
//! ```
//! use seatplan_logic::bay::{classify_bay, BayDimensions, BayPosition};
//!
//! let seats = classify_bay(0, BayPosition::First, BayDimensions::new(3, 2));
//! assert_eq!(seats.window.len(), 2);
//! assert_eq!(seats.aisle.len(), 2);
//! assert_eq!(seats.middle.len(), 2);
//! ```

use crate::seat::{Seat, SeatCategory};
use serde::{Deserialize, Serialize};

/// Size of one bay. Serialized as a `[columns, rows]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct BayDimensions {
    pub columns: u32,
    pub rows: u32,
}

impl BayDimensions {
    pub fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    pub fn seat_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    pub fn is_valid(&self) -> bool {
        self.columns > 0 && self.rows > 0
    }
}

impl From<[u32; 2]> for BayDimensions {
    fn from([columns, rows]: [u32; 2]) -> Self {
        Self { columns, rows }
    }
}

impl From<BayDimensions> for [u32; 2] {
    fn from(dims: BayDimensions) -> Self {
        [dims.columns, dims.rows]
    }
}

/// Where a bay sits among all bays of the cabin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BayPosition {
    /// Leftmost of several bays.
    First,
    /// Between two other bays.
    Interior,
    /// Rightmost of several bays.
    Last,
    /// The only bay in the cabin.
    Sole,
}

impl BayPosition {
    /// Position of the bay at 0-based `index` among `count` bays.
    pub fn of(index: usize, count: usize) -> Self {
        match (index, count) {
            (0, 1) => BayPosition::Sole,
            (0, _) => BayPosition::First,
            (i, n) if i + 1 == n => BayPosition::Last,
            _ => BayPosition::Interior,
        }
    }

    /// Column holding the window seats, if this bay touches the wall.
    ///
    /// A sole bay keeps the first-bay orientation: window on the left,
    /// aisle on the right.
    pub fn window_column(self, columns: u32) -> Option<u32> {
        match self {
            BayPosition::First | BayPosition::Sole => Some(1),
            BayPosition::Last => Some(columns),
            BayPosition::Interior => None,
        }
    }

    /// Columns holding aisle seats, left to right, without duplicates and
    /// without the window column.
    pub fn aisle_columns(self, columns: u32) -> Vec<u32> {
        let sides = match self {
            BayPosition::First | BayPosition::Sole => vec![columns],
            BayPosition::Last => vec![1],
            BayPosition::Interior => vec![1, columns],
        };
        let window = self.window_column(columns);
        let mut out: Vec<u32> = Vec::with_capacity(sides.len());
        for c in sides {
            // Single-column bays: the window side takes the seat.
            if Some(c) != window && !out.contains(&c) {
                out.push(c);
            }
        }
        out
    }
}

/// Seats of one bay, split by category in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaySeats {
    pub window: Vec<Seat>,
    pub aisle: Vec<Seat>,
    pub middle: Vec<Seat>,
}

impl BaySeats {
    pub fn len(&self) -> usize {
        self.window.len() + self.aisle.len() + self.middle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Window seats, then aisle seats, then middle seats.
    pub fn into_seats(self) -> Vec<Seat> {
        let mut seats = self.window;
        seats.extend(self.aisle);
        seats.extend(self.middle);
        seats
    }
}

/// Window seats of the bay at 0-based `index`, one per row.
pub fn window_seats(index: usize, position: BayPosition, dims: BayDimensions) -> Vec<Seat> {
    let bay_index = index as u32 + 1;
    match position.window_column(dims.columns) {
        Some(column) => (1..=dims.rows)
            .map(|row| Seat::new(bay_index, row, column, SeatCategory::Window))
            .collect(),
        None => Vec::new(),
    }
}

/// Aisle seats of the bay at 0-based `index`. Interior bays emit the left
/// then the right aisle seat of each row.
pub fn aisle_seats(index: usize, position: BayPosition, dims: BayDimensions) -> Vec<Seat> {
    let bay_index = index as u32 + 1;
    let columns = position.aisle_columns(dims.columns);
    let mut seats = Vec::with_capacity(columns.len() * dims.rows as usize);
    for row in 1..=dims.rows {
        for &column in &columns {
            seats.push(Seat::new(bay_index, row, column, SeatCategory::Aisle));
        }
    }
    seats
}

/// Middle seats of the bay at 0-based `index`: every column strictly
/// between the two outer columns, row-major.
pub fn middle_seats(index: usize, dims: BayDimensions) -> Vec<Seat> {
    let bay_index = index as u32 + 1;
    let inner = dims.columns.saturating_sub(2) as usize;
    let mut seats = Vec::with_capacity(inner * dims.rows as usize);
    for row in 1..=dims.rows {
        for column in 2..dims.columns {
            seats.push(Seat::new(bay_index, row, column, SeatCategory::Middle));
        }
    }
    seats
}

/// Classify every seat of one bay.
pub fn classify_bay(index: usize, position: BayPosition, dims: BayDimensions) -> BaySeats {
    BaySeats {
        window: window_seats(index, position, dims),
        aisle: aisle_seats(index, position, dims),
        middle: middle_seats(index, dims),
    }
}
