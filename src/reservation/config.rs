//! Restaurant configuration models.

use serde::{Deserialize, Serialize};

use super::constants::{
    DEFAULT_MAX_CLAIM_ATTEMPTS, DEFAULT_MAX_PARTY_SIZE, DEFAULT_MAX_TABLE_CAPACITY,
};
use super::errors::{ReservationError, ReservationResult};
use super::models::Seats;

/// Restaurant configuration
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RestaurantConfig {
    /// Restaurant name (descriptive only)
    pub name: String,

    /// Restaurant location (descriptive only)
    pub location: String,

    /// Largest capacity accepted when adding a table
    pub max_table_capacity: Seats,

    /// Largest party size accepted by an availability search
    pub max_party_size: Seats,

    /// Rescan bound after a claim loses a race to a competing request
    pub max_claim_attempts: usize,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            name: "Default Restaurant".to_string(),
            location: "Downtown".to_string(),
            max_table_capacity: DEFAULT_MAX_TABLE_CAPACITY,
            max_party_size: DEFAULT_MAX_PARTY_SIZE,
            max_claim_attempts: DEFAULT_MAX_CLAIM_ATTEMPTS,
        }
    }
}

impl RestaurantConfig {
    /// Validate configuration
    pub fn validate(&self) -> ReservationResult<()> {
        if self.max_table_capacity == 0 {
            return Err(ReservationError::InvalidConfig(
                "max_table_capacity must be positive".to_string(),
            ));
        }
        if self.max_party_size == 0 {
            return Err(ReservationError::InvalidConfig(
                "max_party_size must be positive".to_string(),
            ));
        }
        if self.max_claim_attempts == 0 {
            return Err(ReservationError::InvalidConfig(
                "max_claim_attempts must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
