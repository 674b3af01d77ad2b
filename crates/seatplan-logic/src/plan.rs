//! End-to-end boarding plan: classify, sort, number, grid.

use crate::cabin::CabinLayout;
use crate::error::Result;
use crate::grid::{boarding_order, Boarding, BoardingGrid};
use crate::seat::Seat;
use crate::seat_map::compute_seat_map;

/// Everything derived from one layout and queue length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardingPlan {
    /// All seats in boarding priority order.
    pub seats: Vec<Seat>,
    /// The seats that received a boarding number, in boarding order.
    pub boardings: Vec<Boarding>,
    pub grid: BoardingGrid,
}

/// Run the whole pipeline. Fails before producing anything if the layout
/// or the queue length cannot be planned.
pub fn plan_boarding(layout: &CabinLayout, queue_length: usize) -> Result<BoardingPlan> {
    let seats = compute_seat_map(layout)?;
    let grid = BoardingGrid::build(&seats, layout, queue_length)?;
    let boardings = boarding_order(&seats, queue_length);
    Ok(BoardingPlan {
        seats,
        boardings,
        grid,
    })
}
