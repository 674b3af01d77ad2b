//! Pure boarding-order logic for SeatPlan.
//!
//! This crate classifies the seats of a cabin split into bays, orders
//! them by boarding priority and renders the resulting boarding grid.
//! Functions take plain data and return results; nothing here touches
//! the terminal, the filesystem (apart from [`config::BoardingConfig::load`])
//! or global state.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`bay`] | Bay dimensions, bay position, per-bay seat classification |
//! | [`cabin`] | Cabin layout, validation, bay-local → global column |
//! | [`config`] | JSON cabin configuration and the built-in default cabin |
//! | [`error`] | `SeatPlanError` and the crate `Result` alias |
//! | [`grid`] | Boarding numbers, occupancy grid, `|NN|` text rendering |
//! | [`plan`] | One-call pipeline from layout to grid |
//! | [`priority`] | Boarding priority key and sorting |
//! | [`seat`] | `Seat` value type and seat categories |
//! | [`seat_map`] | Cabin-wide classification in bay order |
//!
//! ```
//! use seatplan_logic::{compute_seat_map, render, CabinLayout};
//!
//! let layout = CabinLayout::from_pairs(&[[2, 2], [3, 3]]);
//! let seats = compute_seat_map(&layout).unwrap();
//! let text = render(&seats, &layout, 13).unwrap();
//! assert_eq!(text.lines().next(), Some("|06||01||02||11||07|"));
//! ```

pub mod bay;
pub mod cabin;
pub mod config;
pub mod error;
pub mod grid;
pub mod plan;
pub mod priority;
pub mod seat;
pub mod seat_map;

pub use cabin::CabinLayout;
pub use error::{Result, SeatPlanError};
pub use grid::render;
pub use plan::{plan_boarding, BoardingPlan};
pub use seat::{Seat, SeatCategory};
pub use seat_map::compute_seat_map;
