//! Reservation data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    sync::{Arc, Mutex, PoisonError},
};

/// Table ID type
pub type TableId = i64;

/// Reservation ID type
pub type ReservationId = i64;

/// Customer ID type
pub type CustomerId = i64;

/// Type alias for whole seats. Capacities and party sizes are counted in
/// seats; nobody books half a chair.
pub type Seats = u32;

/// Customer contact record. Immutable value data owned by the caller and
/// shared into reservations.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Customer {
    pub fn new(id: CustomerId, name: &str, email: &str, phone: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name.fmt(f)
    }
}

/// A unit of seating capacity with its own exclusive availability guard.
///
/// Capacity never changes after creation. The availability flag transitions
/// true to false only through a successful [`reserve`](Table::reserve) and
/// false to true only through [`release`](Table::release). Tables are created
/// by the restaurant and handed out as shared references.
#[derive(Debug)]
pub struct Table {
    pub id: TableId,
    pub capacity: Seats,
    available: Mutex<bool>,
}

impl Table {
    pub(crate) fn new(id: TableId, capacity: Seats) -> Self {
        Self {
            id,
            capacity,
            available: Mutex::new(true),
        }
    }

    /// Atomically claim the table.
    ///
    /// Checks availability under the table's guard; if available, clears the
    /// flag and returns `true`. Otherwise returns `false` with no side
    /// effect. Of any number of concurrent callers, exactly one observes
    /// `true` per availability period.
    pub fn reserve(&self) -> bool {
        let mut available = self.lock_availability();
        if *available {
            *available = false;
            true
        } else {
            false
        }
    }

    /// Make the table available again. Idempotent.
    pub fn release(&self) {
        *self.lock_availability() = true;
    }

    /// Snapshot of the availability flag. The answer can be stale by the time
    /// the caller acts on it; only [`reserve`](Table::reserve) claims.
    pub fn is_available(&self) -> bool {
        *self.lock_availability()
    }

    // The guarded state is a single bool, so a poisoned guard is still
    // consistent and can be recovered instead of propagating a panic.
    fn lock_availability(&self) -> std::sync::MutexGuard<'_, bool> {
        self.available.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// `Mutex<bool>` is not itself `PartialEq`, so the comparison is written by
// hand to mirror a full-field structural equality over the underlying state.
impl PartialEq for Table {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.capacity == other.capacity
            && self.is_available() == other.is_available()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "table {} ({} seats)", self.id, self.capacity)
    }
}

/// Serializable point-in-time snapshot of a table for callers.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TableInfo {
    pub id: TableId,
    pub capacity: Seats,
    pub available: bool,
}

impl From<&Table> for TableInfo {
    fn from(table: &Table) -> Self {
        Self {
            id: table.id,
            capacity: table.capacity,
            available: table.is_available(),
        }
    }
}

/// Reservation lifecycle status
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Canceled,
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservationStatus::Pending => write!(f, "pending"),
            ReservationStatus::Confirmed => write!(f, "confirmed"),
            ReservationStatus::Canceled => write!(f, "canceled"),
        }
    }
}

/// Events that occur as tables are added and reservations move through their
/// lifecycle. The caller layer drains and formats these; the library itself
/// prints nothing.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum ReservationEvent {
    TableAdded(TableId, Seats),
    ReservationCreated(ReservationId, String),
    NoTableAvailable(Seats),
    ReservationConfirmed(ReservationId, String),
    ReservationCanceled(ReservationId, String),
}

impl fmt::Display for ReservationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::TableAdded(table_id, capacity) => {
                format!("added table {table_id} with capacity {capacity}")
            }
            Self::ReservationCreated(reservation_id, name) => {
                format!("reservation {reservation_id} created for {name}")
            }
            Self::NoTableAvailable(party_size) => {
                format!("no table available for a party of {party_size}")
            }
            Self::ReservationConfirmed(reservation_id, name) => {
                format!("reservation {reservation_id} confirmed for {name}")
            }
            Self::ReservationCanceled(reservation_id, name) => {
                format!("reservation {reservation_id} canceled for {name}")
            }
        };
        write!(f, "{repr}")
    }
}

/// A customer's hold on a claimed table.
///
/// Created only through [`Restaurant::create_reservation`], with status
/// initialized to [`ReservationStatus::Pending`]. Terminal states are not
/// enforced: confirming after canceling (or the reverse) overwrites the
/// status, matching the permissive lifecycle this models.
///
/// [`Restaurant::create_reservation`]: super::manager::Restaurant::create_reservation
#[derive(Debug)]
pub struct Reservation {
    id: ReservationId,
    customer: Arc<Customer>,
    table: Arc<Table>,
    requested_at: DateTime<Utc>,
    status: ReservationStatus,
}

impl Reservation {
    pub(crate) fn new(
        id: ReservationId,
        customer: Arc<Customer>,
        table: Arc<Table>,
        requested_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            customer,
            table,
            requested_at,
            status: ReservationStatus::Pending,
        }
    }

    pub fn id(&self) -> ReservationId {
        self.id
    }

    pub fn customer(&self) -> &Arc<Customer> {
        &self.customer
    }

    pub fn table(&self) -> &Arc<Table> {
        &self.table
    }

    pub fn requested_at(&self) -> DateTime<Utc> {
        self.requested_at
    }

    pub fn status(&self) -> ReservationStatus {
        self.status
    }

    /// Mark the reservation confirmed. Has no effect on the table.
    pub fn confirm(&mut self) -> ReservationEvent {
        self.status = ReservationStatus::Confirmed;
        ReservationEvent::ReservationConfirmed(self.id, self.customer.name.clone())
    }

    /// Mark the reservation canceled and release the table, regardless of the
    /// current status. Canceling twice is harmless; release is idempotent.
    pub fn cancel(&mut self) -> ReservationEvent {
        self.status = ReservationStatus::Canceled;
        self.table.release();
        ReservationEvent::ReservationCanceled(self.id, self.customer.name.clone())
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reservation {} for {} at table {} ({})",
            self.id, self.customer.name, self.table.id, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(id: TableId, capacity: Seats) -> Arc<Table> {
        Arc::new(Table::new(id, capacity))
    }

    fn customer() -> Arc<Customer> {
        Arc::new(Customer::new(1, "John Doe", "john@example.com", "123-456-7890"))
    }

    // === Table Tests ===

    #[test]
    fn test_new_table_is_available() {
        let table = Table::new(1, 4);
        assert!(table.is_available());
    }

    #[test]
    fn test_reserve_claims_table() {
        let table = Table::new(1, 4);
        assert!(table.reserve());
        assert!(!table.is_available());
    }

    #[test]
    fn test_second_reserve_fails() {
        let table = Table::new(1, 4);
        assert!(table.reserve());
        assert!(!table.reserve());
    }

    #[test]
    fn test_release_makes_table_available() {
        let table = Table::new(1, 4);
        assert!(table.reserve());
        table.release();
        assert!(table.is_available());
        assert!(table.reserve());
    }

    #[test]
    fn test_release_is_idempotent() {
        let table = Table::new(1, 4);
        table.release();
        table.release();
        assert!(table.is_available());
        // Still exactly one successful claim afterwards.
        assert!(table.reserve());
        assert!(!table.reserve());
    }

    #[test]
    fn test_table_display() {
        let table = Table::new(3, 6);
        assert_eq!(format!("{table}"), "table 3 (6 seats)");
    }

    // === TableInfo Tests ===

    #[test]
    fn test_table_info_snapshot() {
        let table = Table::new(2, 4);
        let info = TableInfo::from(&table);
        assert_eq!(info, TableInfo { id: 2, capacity: 4, available: true });

        table.reserve();
        let info = TableInfo::from(&table);
        assert!(!info.available);
    }

    // === Status Tests ===

    #[test]
    fn test_status_display() {
        assert_eq!(format!("{}", ReservationStatus::Pending), "pending");
        assert_eq!(format!("{}", ReservationStatus::Confirmed), "confirmed");
        assert_eq!(format!("{}", ReservationStatus::Canceled), "canceled");
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&ReservationStatus::Confirmed).unwrap();
        assert_eq!(json, "\"confirmed\"");
        let status: ReservationStatus = serde_json::from_str("\"canceled\"").unwrap();
        assert_eq!(status, ReservationStatus::Canceled);
    }

    // === Reservation Tests ===

    #[test]
    fn test_new_reservation_is_pending() {
        let reservation = Reservation::new(1, customer(), table(1, 4), Utc::now());
        assert_eq!(reservation.status(), ReservationStatus::Pending);
    }

    #[test]
    fn test_confirm_keeps_table_claimed() {
        let table = table(1, 4);
        assert!(table.reserve());
        let mut reservation = Reservation::new(1, customer(), Arc::clone(&table), Utc::now());

        let event = reservation.confirm();
        assert_eq!(reservation.status(), ReservationStatus::Confirmed);
        assert!(!table.is_available());
        assert_eq!(
            format!("{event}"),
            "reservation 1 confirmed for John Doe"
        );
    }

    #[test]
    fn test_cancel_releases_table() {
        let table = table(1, 4);
        assert!(table.reserve());
        let mut reservation = Reservation::new(1, customer(), Arc::clone(&table), Utc::now());

        let event = reservation.cancel();
        assert_eq!(reservation.status(), ReservationStatus::Canceled);
        assert!(table.is_available());
        assert_eq!(format!("{event}"), "reservation 1 canceled for John Doe");
    }

    #[test]
    fn test_cancel_after_confirm_releases_table() {
        let table = table(1, 4);
        assert!(table.reserve());
        let mut reservation = Reservation::new(1, customer(), Arc::clone(&table), Utc::now());

        reservation.confirm();
        reservation.cancel();
        assert_eq!(reservation.status(), ReservationStatus::Canceled);
        assert!(table.is_available());
    }

    #[test]
    fn test_double_cancel_is_harmless() {
        let table = table(1, 4);
        assert!(table.reserve());
        let mut reservation = Reservation::new(1, customer(), Arc::clone(&table), Utc::now());

        reservation.cancel();
        reservation.cancel();
        assert_eq!(reservation.status(), ReservationStatus::Canceled);
        assert!(table.is_available());
    }

    #[test]
    fn test_reservation_display() {
        let reservation = Reservation::new(7, customer(), table(2, 4), Utc::now());
        assert_eq!(
            format!("{reservation}"),
            "reservation 7 for John Doe at table 2 (pending)"
        );
    }

    // === Event Tests ===

    #[test]
    fn test_event_display() {
        let event = ReservationEvent::TableAdded(1, 2);
        assert_eq!(format!("{event}"), "added table 1 with capacity 2");

        let event = ReservationEvent::NoTableAvailable(8);
        assert_eq!(format!("{event}"), "no table available for a party of 8");

        let event = ReservationEvent::ReservationCreated(3, "Alice Smith".to_string());
        assert_eq!(format!("{event}"), "reservation 3 created for Alice Smith");
    }

    // === Customer Tests ===

    #[test]
    fn test_customer_display_is_name() {
        let customer = Customer::new(2, "Alice Smith", "alice@example.com", "987-654-3210");
        assert_eq!(format!("{customer}"), "Alice Smith");
    }
}
