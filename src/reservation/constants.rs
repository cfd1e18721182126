//! Reservation defaults and limits.

use super::models::{ReservationId, Seats, TableId};

/// Largest seating capacity a single table may be created with.
pub const DEFAULT_MAX_TABLE_CAPACITY: Seats = 20;

/// Largest party size an availability search will accept.
pub const DEFAULT_MAX_PARTY_SIZE: Seats = 20;

/// How many times a reservation request rescans for a table after losing
/// a claim race to a competing request.
pub const DEFAULT_MAX_CLAIM_ATTEMPTS: usize = 3;

/// First value of the table id sequence.
pub const FIRST_TABLE_ID: TableId = 1;

/// First value of the reservation id sequence.
pub const FIRST_RESERVATION_ID: ReservationId = 1;
