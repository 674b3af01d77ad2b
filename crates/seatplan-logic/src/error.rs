//! Error types for seat planning.
//!
//! Every failure is a caller input error. Validation runs before any grid
//! is produced, so an `Err` never comes with partial output.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SeatPlanError>;

/// Seat planning errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatPlanError {
    /// No bays were supplied.
    #[error("cabin layout has no bays")]
    EmptyBayList,

    /// A bay has zero columns or zero rows. `bay` is 1-based.
    #[error("bay {bay} has invalid dimensions {columns}x{rows}: columns and rows must be positive")]
    InvalidDimension { bay: usize, columns: u32, rows: u32 },

    /// More seats would board than the two-digit grid can display.
    #[error("{boarded} seats would board but the grid can only number up to {max}")]
    BoardingNumberOverflow { boarded: usize, max: u32 },

    /// A seat does not fit the layout it is rendered against.
    #[error("seat at bay {bay}, row {row}, column {column} lies outside the cabin layout")]
    SeatOutOfBounds { bay: u32, row: u32, column: u32 },

    /// Two boarded seats resolved to the same grid cell (1-based).
    #[error("grid cell at row {row}, column {column} was assigned twice")]
    CellCollision { row: u32, column: u32 },
}
