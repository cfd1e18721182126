//! # Tablebook
//!
//! A table reservation engine for a single restaurant location.
//!
//! This library tracks table inventory, matches party sizes against available
//! seating capacity, and records the reservation lifecycle. The interesting
//! part is the concurrent allocation logic: any number of threads may request
//! reservations at once, and no two of them can ever claim the same physical
//! table.
//!
//! ## Architecture
//!
//! Allocation is split across two lock tiers:
//!
//! - **Restaurant**: owns the table collection behind a read-write guard and
//!   is the sole entry point for availability search and reservation creation
//! - **Table**: a unit of seating capacity whose availability flag sits behind
//!   its own exclusive guard, so claims on different tables never contend
//! - **Reservation**: a caller-held record linking a customer to a claimed
//!   table; confirming it keeps the table, canceling it releases the table
//!
//! The availability scan and the claim are two separate critical sections.
//! When a claim loses a race to a competing request, the scan is retried up to
//! a configured bound; allocation is best-effort beyond that. Business
//! failures (no matching table, claim lost) are reported as `None`, never as
//! errors; errors are reserved for invalid input.
//!
//! ## Core Modules
//!
//! - [`reservation`]: tables, customers, reservations, and the restaurant
//!   that coordinates them
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use chrono::Utc;
//! use tablebook::{Customer, Restaurant, ReservationStatus};
//!
//! let restaurant = Restaurant::default();
//! restaurant.add_table(4).unwrap();
//!
//! let customer = Arc::new(Customer::new(1, "Alice Smith", "alice@example.com", "555-0100"));
//! let mut reservation = restaurant
//!     .create_reservation(customer, 2, Utc::now())
//!     .unwrap()
//!     .expect("a table is free");
//! assert_eq!(reservation.status(), ReservationStatus::Pending);
//!
//! reservation.confirm();
//! assert_eq!(reservation.status(), ReservationStatus::Confirmed);
//! ```

/// Table inventory, reservation lifecycle, and the restaurant coordinator.
pub mod reservation;
pub use reservation::{
    Customer, CustomerId, Reservation, ReservationError, ReservationEvent, ReservationId,
    ReservationResult, ReservationStatus, Restaurant, RestaurantConfig, Seats, Table, TableId,
    TableInfo,
    constants::{self, DEFAULT_MAX_CLAIM_ATTEMPTS, DEFAULT_MAX_PARTY_SIZE, DEFAULT_MAX_TABLE_CAPACITY},
};
