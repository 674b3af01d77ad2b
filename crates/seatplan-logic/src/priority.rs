//! Boarding priority order.
//!
//! Seats board by category (aisle, window, middle), then row, then bay,
//! then column. The key is a plain tuple so the comparison is
//! lexicographic and the sort stays deterministic.

use crate::seat::{Seat, SeatCategory};

/// Sort key: `(category, row, bay_index, column)`.
pub type PriorityKey = (SeatCategory, u32, u32, u32);

pub fn priority_key(seat: &Seat) -> PriorityKey {
    (seat.category, seat.row, seat.bay_index, seat.column)
}

/// Sort seats into boarding order in place. Stable.
pub fn sort_by_priority(seats: &mut [Seat]) {
    seats.sort_by_key(priority_key);
}

/// Owned variant of [`sort_by_priority`].
pub fn sorted_by_priority(mut seats: Vec<Seat>) -> Vec<Seat> {
    sort_by_priority(&mut seats);
    seats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(bay: u32, row: u32, col: u32, cat: SeatCategory) -> Seat {
        Seat::new(bay, row, col, cat)
    }

    #[test]
    fn category_dominates_row() {
        let seats = sorted_by_priority(vec![
            seat(1, 1, 2, SeatCategory::Middle),
            seat(1, 1, 1, SeatCategory::Window),
            seat(1, 9, 3, SeatCategory::Aisle),
        ]);
        let cats: Vec<SeatCategory> = seats.iter().map(|s| s.category).collect();
        assert_eq!(
            cats,
            vec![
                SeatCategory::Aisle,
                SeatCategory::Window,
                SeatCategory::Middle
            ]
        );
    }

    #[test]
    fn row_before_bay_before_column() {
        let seats = sorted_by_priority(vec![
            seat(2, 1, 4, SeatCategory::Aisle),
            seat(1, 2, 3, SeatCategory::Aisle),
            seat(2, 1, 1, SeatCategory::Aisle),
            seat(1, 1, 3, SeatCategory::Aisle),
        ]);
        assert_eq!(
            seats,
            vec![
                seat(1, 1, 3, SeatCategory::Aisle),
                seat(2, 1, 1, SeatCategory::Aisle),
                seat(2, 1, 4, SeatCategory::Aisle),
                seat(1, 2, 3, SeatCategory::Aisle),
            ]
        );
    }

    #[test]
    fn sorting_is_idempotent() {
        let input = vec![
            seat(3, 2, 1, SeatCategory::Window),
            seat(1, 1, 2, SeatCategory::Middle),
            seat(2, 2, 1, SeatCategory::Aisle),
            seat(2, 1, 3, SeatCategory::Aisle),
        ];
        let once = sorted_by_priority(input);
        let twice = sorted_by_priority(once.clone());
        assert_eq!(once, twice);
    }
}
