//! Seat value type and seat categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Seat category. Declaration order is the boarding priority:
/// aisle seats board first, then window seats, then middle seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SeatCategory {
    Aisle,
    Window,
    Middle,
}

impl SeatCategory {
    /// Single-letter priority code. Codes sort in the same order as the
    /// categories themselves.
    pub fn code(self) -> char {
        match self {
            SeatCategory::Aisle => 'A',
            SeatCategory::Window => 'B',
            SeatCategory::Middle => 'M',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SeatCategory::Aisle => "aisle",
            SeatCategory::Window => "window",
            SeatCategory::Middle => "middle",
        }
    }
}

impl fmt::Display for SeatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified seat. Row and column are local to the seat's bay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seat {
    /// 1-based bay index.
    pub bay_index: u32,
    /// 1-based row within the bay.
    pub row: u32,
    /// 1-based column within the bay.
    pub column: u32,
    pub category: SeatCategory,
}

impl Seat {
    pub fn new(bay_index: u32, row: u32, column: u32, category: SeatCategory) -> Self {
        Self {
            bay_index,
            row,
            column,
            category,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bay {} row {} col {} ({})",
            self.bay_index, self.row, self.column, self.category
        )
    }
}
