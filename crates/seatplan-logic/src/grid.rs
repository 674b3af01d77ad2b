//! Boarding grid construction and text rendering.
//!
//! The grid spans the whole cabin: one row per seat row (up to the tallest
//! bay) and one column per global seat column. Each of the first
//! `queue_length` seats in priority order gets its 1-based boarding number;
//! every other cell stays 0.
//!
//! ```
//! use seatplan_logic::cabin::CabinLayout;
//! use seatplan_logic::grid::render;
//! use seatplan_logic::seat_map::compute_seat_map;
//!
//! let layout = CabinLayout::from_pairs(&[[2, 1]]);
//! let seats = compute_seat_map(&layout).unwrap();
//! assert_eq!(render(&seats, &layout, 2).unwrap(), "|02||01|\n");
//! ```

use crate::cabin::CabinLayout;
use crate::error::{Result, SeatPlanError};
use crate::seat::Seat;
use log::{debug, info};
use serde::Serialize;
use std::fmt;

/// Largest boarding number that fits the two-digit cell format.
pub const MAX_BOARDING_NUMBER: u32 = 99;

/// One seat with its boarding number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Boarding {
    /// 1-based boarding sequence number.
    pub number: u32,
    pub seat: Seat,
}

/// Pair the first `queue_length` seats with consecutive boarding numbers.
/// A queue longer than the seat list simply boards every seat.
pub fn boarding_order(seats: &[Seat], queue_length: usize) -> Vec<Boarding> {
    seats
        .iter()
        .take(queue_length)
        .zip(1u32..)
        .map(|(&seat, number)| Boarding { number, seat })
        .collect()
}

/// Occupancy grid, row-major, sized once from the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardingGrid {
    rows: u32,
    columns: u32,
    cells: Vec<u32>,
}

impl BoardingGrid {
    /// Build the grid for `seats` (already in boarding order).
    ///
    /// Fails before writing anything if the layout is invalid, if any seat
    /// does not fit the layout, or if more than [`MAX_BOARDING_NUMBER`]
    /// seats would board. A second write to an occupied cell is reported
    /// as [`SeatPlanError::CellCollision`].
    pub fn build(seats: &[Seat], layout: &CabinLayout, queue_length: usize) -> Result<Self> {
        layout.validate()?;
        if let Some(seat) = seats.iter().find(|s| !layout.contains(s)) {
            return Err(SeatPlanError::SeatOutOfBounds {
                bay: seat.bay_index,
                row: seat.row,
                column: seat.column,
            });
        }

        let boarded = queue_length.min(seats.len());
        if boarded > MAX_BOARDING_NUMBER as usize {
            return Err(SeatPlanError::BoardingNumberOverflow {
                boarded,
                max: MAX_BOARDING_NUMBER,
            });
        }
        if queue_length > seats.len() {
            debug!(
                "queue of {} exceeds {} seats; {} passengers left without a seat",
                queue_length,
                seats.len(),
                queue_length - seats.len()
            );
        }

        let rows = layout.max_rows();
        let columns = layout.total_columns();
        let mut grid = Self {
            rows,
            columns,
            cells: vec![0; rows as usize * columns as usize],
        };
        for boarding in boarding_order(seats, boarded) {
            let column = layout.global_column(&boarding.seat);
            grid.place(boarding.seat.row, column, boarding.number)?;
        }

        info!(
            "boarded {} of {} seats on a {}x{} grid",
            boarded,
            seats.len(),
            rows,
            columns
        );
        Ok(grid)
    }

    fn index(&self, row: u32, column: u32) -> usize {
        (row as usize - 1) * self.columns as usize + (column as usize - 1)
    }

    fn place(&mut self, row: u32, column: u32, number: u32) -> Result<()> {
        let idx = self.index(row, column);
        if self.cells[idx] != 0 {
            return Err(SeatPlanError::CellCollision { row, column });
        }
        self.cells[idx] = number;
        Ok(())
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Boarding number at a 1-based `(row, column)`; 0 when unassigned.
    /// `None` outside the grid.
    pub fn get(&self, row: u32, column: u32) -> Option<u32> {
        if row == 0 || column == 0 || row > self.rows || column > self.columns {
            return None;
        }
        Some(self.cells[self.index(row, column)])
    }

    /// Number of cells holding a boarding number.
    pub fn boarded(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    /// Cells of one 0-based row.
    pub fn row(&self, row: usize) -> &[u32] {
        let width = self.columns as usize;
        &self.cells[row * width..(row + 1) * width]
    }
}

impl fmt::Display for BoardingGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows as usize {
            for cell in self.row(r) {
                write!(f, "|{cell:02}|")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Render the boarding grid for `seats` as text, one line per row.
pub fn render(seats: &[Seat], layout: &CabinLayout, queue_length: usize) -> Result<String> {
    Ok(BoardingGrid::build(seats, layout, queue_length)?.to_string())
}
