// --- File: crates/slotbook_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Slot and wire envelope
pub mod routes; // Route definitions
pub mod services; // Booking API abstraction

pub use routes::routes;

// Re-export error types and utilities for easier access
pub use error::{config_error, external_service_error, Context, SlotbookError};

pub use http::client::create_client;

pub use logging::{init_from_config, init_with_level, log_result};

pub use models::{ApiEnvelope, Slot};
pub use services::{ApiError, SlotApi};

#[cfg(any(test, feature = "mocks"))]
pub use services::MockSlotApi;
