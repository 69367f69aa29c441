// --- File: crates/slotbook_common/src/services.rs ---
//! Service abstraction for the external booking API.
//!
//! Pages talk to the booking API only through [`SlotApi`], which keeps them
//! independent of the HTTP client and lets tests substitute mocks and fakes.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::models::Slot;

/// Why a booking API call did not produce data.
///
/// `Rejected` is an application-level refusal (`success: false`); every other
/// variant means the request or its response was unusable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never completed (connect, timeout, body read)
    #[error("booking API unreachable: {0}")]
    Transport(String),

    /// The API answered with a non-success HTTP status
    #[error("booking API returned status {0}")]
    Status(u16),

    /// The response body was not a valid envelope
    #[error("malformed booking API response: {0}")]
    Decode(String),

    /// The API answered `success: false`
    #[error("booking API rejected the request: {0}")]
    Rejected(String),
}

impl ApiError {
    /// True for an application-level refusal in an otherwise valid response.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected(_))
    }
}

/// Operations the front-end needs from the booking API.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait SlotApi: Send + Sync {
    /// All slots starting on `date` (UTC), in ascending start order.
    async fn slots_for_date(&self, date: NaiveDate) -> Result<Vec<Slot>, ApiError>;

    /// All booked slots, in no guaranteed order.
    async fn booked_slots(&self) -> Result<Vec<Slot>, ApiError>;

    /// Books `slot_id` for `name` and returns the updated slot.
    async fn book_slot(&self, slot_id: &str, name: &str) -> Result<Slot, ApiError>;

    /// Cancels the booking on `slot_id` and returns the now-unbooked slot.
    async fn cancel_booking(&self, slot_id: &str) -> Result<Slot, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[tokio::test]
    async fn test_mock_is_usable_as_trait_object() {
        let mut mock = MockSlotApi::new();
        mock.expect_cancel_booking().times(1).returning(|id| {
            Ok(Slot::available(
                id,
                Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
            ))
        });

        let api: Box<dyn SlotApi> = Box::new(mock);
        let slot = api.cancel_booking("s-1").await.unwrap();
        assert_eq!(slot.id, "s-1");
        assert!(!slot.is_booked);
    }

    #[test]
    fn test_only_rejected_is_rejection() {
        assert!(ApiError::Rejected("no".into()).is_rejection());
        assert!(!ApiError::Transport("refused".into()).is_rejection());
        assert!(!ApiError::Status(500).is_rejection());
        assert!(!ApiError::Decode("eof".into()).is_rejection());
    }
}
