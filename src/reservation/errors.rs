//! Reservation error types.
//!
//! The error taxonomy is deliberately small. Business outcomes (no table
//! matches a party, a claim lost a race to a competing request) are reported
//! as `None` results, not errors, and are always recoverable by the caller.
//! Errors cover invalid input only.

use thiserror::Error;

use super::models::Seats;

/// Reservation errors
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ReservationError {
    /// Table capacity of zero, or above the configured cap
    #[error("invalid table capacity: {0}")]
    InvalidCapacity(Seats),

    /// Party size of zero, or above the configured cap
    #[error("invalid party size: {0}")]
    InvalidPartySize(Seats),

    /// Restaurant configuration rejected at construction
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for reservation operations
pub type ReservationResult<T> = Result<T, ReservationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_capacity_display() {
        let error = ReservationError::InvalidCapacity(0);
        assert_eq!(format!("{error}"), "invalid table capacity: 0");
    }

    #[test]
    fn test_invalid_party_size_display() {
        let error = ReservationError::InvalidPartySize(99);
        assert_eq!(format!("{error}"), "invalid party size: 99");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            ReservationError::InvalidCapacity(0),
            ReservationError::InvalidCapacity(0)
        );
        assert_ne!(
            ReservationError::InvalidCapacity(0),
            ReservationError::InvalidPartySize(0)
        );
    }
}
