// --- File: crates/slotbook_common/src/models.rs ---

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::services::ApiError;

/// A bookable time slot as served by the booking API.
///
/// Slots are created by the API; the front-end only books and cancels them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    /// Opaque identifier, unique per slot
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    /// Start of the slot, always interpreted as UTC
    pub start_date: DateTime<Utc>,

    /// Whether a customer has claimed this slot
    #[serde(default)]
    pub is_booked: bool,

    /// Display name of the customer, only present on booked slots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booked_customer_name: Option<String>,
}

impl Slot {
    /// Creates an unbooked slot.
    pub fn available(id: impl Into<String>, start_date: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            start_date,
            is_booked: false,
            booked_customer_name: None,
        }
    }

    /// Creates a slot booked by `customer`.
    pub fn booked(
        id: impl Into<String>,
        start_date: DateTime<Utc>,
        customer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            start_date,
            is_booked: true,
            booked_customer_name: Some(customer.into()),
        }
    }
}

// Some deployments of the booking API emit numeric ids.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

/// The `{ success, data }` wrapper every booking API response uses.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Collapses the envelope into a result.
    ///
    /// `success: false`, or a successful envelope without `data`, is a
    /// rejection.
    pub fn into_result(self) -> Result<T, ApiError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(ApiError::Rejected(
                "response reported success without data".to_string(),
            )),
            (false, _) => Err(ApiError::Rejected(
                self.message
                    .unwrap_or_else(|| "request was not successful".to_string()),
            )),
        }
    }
}
