// --- File: crates/slotbook_api/src/lib.rs ---
pub mod client;
pub mod error;

pub use client::SlotApiClient;
pub use error::ClientError;
