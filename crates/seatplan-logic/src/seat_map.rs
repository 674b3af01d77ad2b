//! Cabin-wide seat map: every bay classified, in bay order.

use crate::bay::classify_bay;
use crate::cabin::CabinLayout;
use crate::error::Result;
use crate::priority::sort_by_priority;
use crate::seat::Seat;
use log::debug;

/// Classify every bay and concatenate the results in bay order. Within a
/// bay the order is window seats, aisle seats, middle seats.
///
/// Does not validate; see [`compute_seat_map`].
pub fn aggregate_seats(layout: &CabinLayout) -> Vec<Seat> {
    let mut seats = Vec::with_capacity(layout.total_seats());
    for (i, &dims) in layout.bays().iter().enumerate() {
        let position = layout.position(i);
        let bay = classify_bay(i, position, dims);
        debug!(
            "bay {} ({:?}, {}x{}): {} window, {} aisle, {} middle",
            i + 1,
            position,
            dims.columns,
            dims.rows,
            bay.window.len(),
            bay.aisle.len(),
            bay.middle.len()
        );
        seats.extend(bay.into_seats());
    }
    seats
}

/// Validate `layout`, classify every seat and return them in boarding
/// priority order.
pub fn compute_seat_map(layout: &CabinLayout) -> Result<Vec<Seat>> {
    layout.validate()?;
    let mut seats = aggregate_seats(layout);
    sort_by_priority(&mut seats);
    Ok(seats)
}
