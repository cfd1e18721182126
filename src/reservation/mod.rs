//! Reservation module providing table inventory and concurrent allocation.
//!
//! This module implements:
//! - Per-table exclusive availability guards (a claim can succeed exactly once
//!   per availability period, no matter how many threads race for it)
//! - First-fit availability search in table creation order
//! - The reservation lifecycle: pending, then confirmed or canceled
//! - Monotonic id sequences for tables and reservations
//! - An event queue the caller layer drains and formats
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use chrono::Utc;
//! use tablebook::reservation::{Customer, Restaurant};
//!
//! let restaurant = Restaurant::default();
//! restaurant.add_table(2).unwrap();
//! restaurant.add_table(6).unwrap();
//!
//! let customer = Arc::new(Customer::new(1, "Bob Ng", "bob@example.com", "555-0101"));
//!
//! // A party of four skips the two-top and lands on the six-top.
//! let reservation = restaurant
//!     .create_reservation(customer, 4, Utc::now())
//!     .unwrap()
//!     .expect("the six-top is free");
//! assert_eq!(reservation.table().capacity, 6);
//! ```

pub mod config;
pub mod constants;
pub mod errors;
pub mod manager;
pub mod models;

pub use config::RestaurantConfig;
pub use errors::{ReservationError, ReservationResult};
pub use manager::Restaurant;
pub use models::{
    Customer, CustomerId, Reservation, ReservationEvent, ReservationId, ReservationStatus, Seats,
    Table, TableId, TableInfo,
};
