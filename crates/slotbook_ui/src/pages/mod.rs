// --- File: crates/slotbook_ui/src/pages/mod.rs ---
//! Page controllers.
//!
//! Each page keeps its state behind a `tokio::sync::Mutex` that is never held
//! across a booking API call: an operation records its intent under the lock,
//! awaits the API unlocked, then applies the response under the lock again.

pub mod customer;
pub mod manager;

pub use customer::{BookingOutcome, CustomerBookingPage, CustomerBookingState};
pub use manager::{SalesManagerPage, SalesManagerState};

/// Result of a slot fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Slot list replaced with this many slots
    Loaded(usize),
    /// Error banner set, previous list kept
    Failed,
    /// A newer fetch started meanwhile; the response was dropped
    Stale,
}

/// Result of a cancel action on either page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    Cancelled,
    Failed,
    /// A cancel for the same target is still running; no request was sent
    InFlight,
    /// Nothing was awaiting confirmation
    NothingPending,
}
