//! Cabin layout and cabin-wide column resolution.
//!
//! Bays are laid out left to right; each occupies a contiguous block of
//! global columns as wide as the bay itself. Row numbering is shared by
//! every bay, so the cabin is as tall as its tallest bay.

use crate::bay::{BayDimensions, BayPosition};
use crate::error::{Result, SeatPlanError};
use crate::seat::Seat;
use serde::{Deserialize, Serialize};

/// Ordered list of bays, leftmost first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CabinLayout {
    bays: Vec<BayDimensions>,
}

impl CabinLayout {
    pub fn new(bays: Vec<BayDimensions>) -> Self {
        Self { bays }
    }

    /// Build a layout from `[columns, rows]` pairs.
    pub fn from_pairs(pairs: &[[u32; 2]]) -> Self {
        Self::new(pairs.iter().copied().map(BayDimensions::from).collect())
    }

    pub fn bays(&self) -> &[BayDimensions] {
        &self.bays
    }

    pub fn bay_count(&self) -> usize {
        self.bays.len()
    }

    /// Position of the bay at 0-based `index`.
    pub fn position(&self, index: usize) -> BayPosition {
        BayPosition::of(index, self.bays.len())
    }

    /// Reject empty layouts and bays with a zero dimension.
    pub fn validate(&self) -> Result<()> {
        if self.bays.is_empty() {
            return Err(SeatPlanError::EmptyBayList);
        }
        for (i, dims) in self.bays.iter().enumerate() {
            if !dims.is_valid() {
                return Err(SeatPlanError::InvalidDimension {
                    bay: i + 1,
                    columns: dims.columns,
                    rows: dims.rows,
                });
            }
        }
        Ok(())
    }

    /// Grid width: sum of all bay widths.
    pub fn total_columns(&self) -> u32 {
        self.bays.iter().map(|b| b.columns).sum()
    }

    /// Grid height: the tallest bay.
    pub fn max_rows(&self) -> u32 {
        self.bays.iter().map(|b| b.rows).max().unwrap_or(0)
    }

    pub fn total_seats(&self) -> usize {
        self.bays.iter().map(BayDimensions::seat_count).sum()
    }

    /// 1-based cabin-wide column of `seat`: the widths of every bay to its
    /// left plus its local column.
    pub fn global_column(&self, seat: &Seat) -> u32 {
        let left = (seat.bay_index as usize).saturating_sub(1);
        let offset: u32 = self.bays.iter().take(left).map(|b| b.columns).sum();
        offset + seat.column
    }

    /// Whether `seat` lies inside its bay in this layout.
    pub fn contains(&self, seat: &Seat) -> bool {
        if seat.bay_index == 0 || seat.row == 0 || seat.column == 0 {
            return false;
        }
        match self.bays.get(seat.bay_index as usize - 1) {
            Some(dims) => seat.row <= dims.rows && seat.column <= dims.columns,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seat::SeatCategory;

    fn layout() -> CabinLayout {
        CabinLayout::from_pairs(&[[3, 2], [4, 3], [2, 3], [3, 4]])
    }

    #[test]
    fn totals() {
        let l = layout();
        assert_eq!(l.bay_count(), 4);
        assert_eq!(l.total_columns(), 12);
        assert_eq!(l.max_rows(), 4);
        assert_eq!(l.total_seats(), 6 + 12 + 6 + 12);
    }

    #[test]
    fn global_column_adds_widths_to_the_left() {
        let l = layout();
        let s = |bay, column| Seat::new(bay, 1, column, SeatCategory::Middle);
        assert_eq!(l.global_column(&s(1, 1)), 1);
        assert_eq!(l.global_column(&s(1, 3)), 3);
        assert_eq!(l.global_column(&s(2, 1)), 4);
        assert_eq!(l.global_column(&s(3, 2)), 9);
        assert_eq!(l.global_column(&s(4, 3)), 12);
    }

    #[test]
    fn validate_rejects_empty_layout() {
        let l = CabinLayout::new(Vec::new());
        assert_eq!(l.validate(), Err(SeatPlanError::EmptyBayList));
    }

    #[test]
    fn validate_rejects_zero_dimension() {
        let l = CabinLayout::from_pairs(&[[2, 2], [3, 0]]);
        assert_eq!(
            l.validate(),
            Err(SeatPlanError::InvalidDimension {
                bay: 2,
                columns: 3,
                rows: 0
            })
        );
        let l = CabinLayout::from_pairs(&[[0, 2]]);
        assert!(matches!(
            l.validate(),
            Err(SeatPlanError::InvalidDimension { bay: 1, .. })
        ));
    }

    #[test]
    fn contains_checks_bay_bounds() {
        let l = CabinLayout::from_pairs(&[[2, 2], [3, 3]]);
        assert!(l.contains(&Seat::new(2, 3, 3, SeatCategory::Window)));
        assert!(!l.contains(&Seat::new(1, 3, 1, SeatCategory::Window)));
        assert!(!l.contains(&Seat::new(3, 1, 1, SeatCategory::Aisle)));
        assert!(!l.contains(&Seat::new(0, 1, 1, SeatCategory::Aisle)));
    }

    #[test]
    fn layout_serializes_as_pair_list() {
        let l = CabinLayout::from_pairs(&[[2, 2], [3, 3]]);
        assert_eq!(serde_json::to_string(&l).unwrap(), "[[2,2],[3,3]]");
    }
}
