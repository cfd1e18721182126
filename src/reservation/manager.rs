//! Restaurant manager owning the table collection and coordinating
//! concurrent reservation requests.

use chrono::{DateTime, Utc};
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, PoisonError, RwLock},
};

use super::config::RestaurantConfig;
use super::constants::{FIRST_RESERVATION_ID, FIRST_TABLE_ID};
use super::errors::{ReservationError, ReservationResult};
use super::models::{
    Customer, Reservation, ReservationEvent, ReservationId, Seats, Table, TableId, TableInfo,
};

/// Restaurant coordinating table inventory and reservation creation.
///
/// The restaurant is the sole owner and mutator of the table collection and
/// the only way to create a [`Reservation`]. Structural access to the
/// collection goes through a read-write guard; each table's availability flag
/// sits behind that table's own guard. Lock order is fixed: the collection
/// guard is taken before any single table's guard, never the reverse.
///
/// The availability scan and the table claim are two separate critical
/// sections. A competing request can claim the scanned table first; when that
/// happens the scan is retried, bounded by
/// [`RestaurantConfig::max_claim_attempts`]. Allocation is therefore
/// best-effort: under heavy contention a request can come back empty within
/// its retry bound even though some table remained available.
pub struct Restaurant {
    config: RestaurantConfig,

    /// Owned tables, insertion order = creation order.
    tables: RwLock<Vec<Arc<Table>>>,

    /// Next table id. Advanced while holding the collection write guard so
    /// ids stay aligned with insertion order.
    next_table_id: Mutex<TableId>,

    /// Next reservation id. A dedicated sequence, independent of the table
    /// collection.
    next_reservation_id: Mutex<ReservationId>,

    /// Pending events for the caller layer to drain and format.
    events: Mutex<VecDeque<ReservationEvent>>,
}

impl Default for Restaurant {
    fn default() -> Self {
        Self::from_config(RestaurantConfig::default())
    }
}

impl Restaurant {
    /// Create a new restaurant from a validated configuration.
    pub fn new(config: RestaurantConfig) -> ReservationResult<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: RestaurantConfig) -> Self {
        Self {
            config,
            tables: RwLock::new(Vec::new()),
            next_table_id: Mutex::new(FIRST_TABLE_ID),
            next_reservation_id: Mutex::new(FIRST_RESERVATION_ID),
            events: Mutex::new(VecDeque::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn location(&self) -> &str {
        &self.config.location
    }

    pub fn config(&self) -> &RestaurantConfig {
        &self.config
    }

    /// Add a new table with the given capacity.
    ///
    /// The table starts available and receives the next id from the table
    /// sequence. Appending is serialized against concurrent adds and against
    /// availability scans through the collection guard.
    ///
    /// # Returns
    ///
    /// * `Ok(TableId)` - Id of the newly added table
    /// * `Err(ReservationError::InvalidCapacity)` - Capacity is zero or above
    ///   the configured cap
    pub fn add_table(&self, capacity: Seats) -> ReservationResult<TableId> {
        if capacity == 0 || capacity > self.config.max_table_capacity {
            return Err(ReservationError::InvalidCapacity(capacity));
        }

        let mut tables = self.write_tables();
        let mut next_id = self.next_table_id.lock().unwrap_or_else(PoisonError::into_inner);
        let table_id = *next_id;
        *next_id += 1;
        drop(next_id);
        tables.push(Arc::new(Table::new(table_id, capacity)));
        drop(tables);

        log::info!("added table {table_id} with capacity {capacity}");
        self.push_event(ReservationEvent::TableAdded(table_id, capacity));
        Ok(table_id)
    }

    /// Find a table for the given party size without claiming it.
    ///
    /// Scans the collection in creation order under the read guard and
    /// returns the first table that is currently available with capacity at
    /// least `party_size`. Lowest id wins, never best-fit. Returns
    /// `Ok(None)` when no table qualifies.
    ///
    /// The answer is a snapshot: a competing request can claim the returned
    /// table before this caller does. Only [`Table::reserve`] commits.
    pub fn check_availability(&self, party_size: Seats) -> ReservationResult<Option<Arc<Table>>> {
        if party_size == 0 || party_size > self.config.max_party_size {
            return Err(ReservationError::InvalidPartySize(party_size));
        }

        let tables = self.read_tables();
        Ok(tables
            .iter()
            .find(|table| table.capacity >= party_size && table.is_available())
            .cloned())
    }

    /// Attempt to reserve a table for a customer.
    ///
    /// Searches for a matching table, then claims it. When the claim loses a
    /// race to a competing request the search is retried, up to
    /// [`RestaurantConfig::max_claim_attempts`] in total. On success the
    /// returned reservation is [`Pending`](super::models::ReservationStatus::Pending)
    /// and holds the claimed table; confirming or canceling it is the
    /// caller's move.
    ///
    /// `Ok(None)` means no table matched the party size, or every attempt
    /// lost its claim race. Both are recoverable: retry, try a smaller
    /// party, or report to the end user.
    pub fn create_reservation(
        &self,
        customer: Arc<Customer>,
        party_size: Seats,
        requested_at: DateTime<Utc>,
    ) -> ReservationResult<Option<Reservation>> {
        for attempt in 1..=self.config.max_claim_attempts {
            let Some(table) = self.check_availability(party_size)? else {
                self.push_event(ReservationEvent::NoTableAvailable(party_size));
                return Ok(None);
            };

            if table.reserve() {
                let reservation_id = self.next_reservation_id();
                log::info!(
                    "reservation {reservation_id} created for {} at table {}",
                    customer.name,
                    table.id
                );
                self.push_event(ReservationEvent::ReservationCreated(
                    reservation_id,
                    customer.name.clone(),
                ));
                return Ok(Some(Reservation::new(
                    reservation_id,
                    customer,
                    table,
                    requested_at,
                )));
            }

            // Lost the claim race between the scan and the reserve.
            log::debug!(
                "table {} claimed by a competing request (attempt {attempt}), rescanning",
                table.id
            );
        }

        self.push_event(ReservationEvent::NoTableAvailable(party_size));
        Ok(None)
    }

    /// Snapshot of every table, in creation order.
    pub fn tables(&self) -> Vec<TableInfo> {
        let tables = self.read_tables();
        tables.iter().map(|table| TableInfo::from(table.as_ref())).collect()
    }

    pub fn table_count(&self) -> usize {
        self.read_tables().len()
    }

    /// Drain pending events for the caller layer to format.
    #[must_use]
    pub fn drain_events(&self) -> VecDeque<ReservationEvent> {
        let mut events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        events.drain(..).collect()
    }

    fn next_reservation_id(&self) -> ReservationId {
        let mut next_id = self
            .next_reservation_id
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let id = *next_id;
        *next_id += 1;
        id
    }

    fn push_event(&self, event: ReservationEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(event);
    }

    // Guarded state is structurally consistent at every guard release, so a
    // poisoned guard is recovered instead of propagating a panic.
    fn read_tables(&self) -> std::sync::RwLockReadGuard<'_, Vec<Arc<Table>>> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_tables(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Arc<Table>>> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }
}
