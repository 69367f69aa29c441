//! Booking API client module
//!
//! Implements [`SlotApi`] on top of `reqwest`. Every endpoint answers with the
//! `{ success, data }` envelope; transport and status failures are reported as
//! [`ClientError`] and converted to [`ApiError`] at the trait boundary.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use slotbook_common::{
    create_client, log_result, ApiEnvelope, ApiError, Slot, SlotApi, SlotbookError,
};
use slotbook_config::ApiConfig;
use std::time::Duration;
use tracing::debug;

use crate::error::ClientError;

#[derive(Debug, Serialize)]
struct BookRequest<'a> {
    name: &'a str,
}

/// Client for the booking API rooted at a base URL such as
/// `http://localhost:5000/api`.
#[derive(Debug, Clone)]
pub struct SlotApiClient {
    client: Client,
    base_url: Url,
}

impl SlotApiClient {
    /// Creates a client from an existing `reqwest::Client`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidBaseUrl` when `base_url` does not parse or
    /// cannot carry path segments (e.g. `mailto:`).
    pub fn new(client: Client, base_url: &str) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|_| ClientError::InvalidBaseUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self { client, base_url })
    }

    /// Builds the HTTP client and the API client from the `[api]` section.
    pub fn from_config(config: &ApiConfig) -> Result<Self, SlotbookError> {
        let client = create_client(Duration::from_secs(config.timeout_secs), true)?;
        Ok(Self::new(client, &config.base_url)?)
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<ApiEnvelope<T>, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::StatusError {
                status_code: status.as_u16(),
            });
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn call<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        self.send::<T>(request).await?.into_result()
    }
}

#[async_trait]
impl SlotApi for SlotApiClient {
    async fn slots_for_date(&self, date: NaiveDate) -> Result<Vec<Slot>, ApiError> {
        let url = self.endpoint(&["slots"]);
        let day = date.format("%Y-%m-%d").to_string();
        debug!("GET {} date={}", url, day);
        self.call(self.client.get(url).query(&[("date", day)])).await
    }

    async fn booked_slots(&self) -> Result<Vec<Slot>, ApiError> {
        let url = self.endpoint(&["slots"]);
        debug!("GET {} booked=true", url);
        self.call(self.client.get(url).query(&[("booked", "true")]))
            .await
    }

    async fn book_slot(&self, slot_id: &str, name: &str) -> Result<Slot, ApiError> {
        let url = self.endpoint(&["slots", slot_id, "book"]);
        debug!("POST {}", url);
        let result = self
            .call(self.client.post(url).json(&BookRequest { name }))
            .await;
        log_result(
            result,
            &format!("Booked slot {}", slot_id),
            &format!("Booking slot {} failed", slot_id),
        )
    }

    async fn cancel_booking(&self, slot_id: &str) -> Result<Slot, ApiError> {
        let url = self.endpoint(&["slots", slot_id, "cancel-booking"]);
        debug!("POST {}", url);
        let result = self.call(self.client.post(url)).await;
        log_result(
            result,
            &format!("Cancelled booking on slot {}", slot_id),
            &format!("Cancelling booking on slot {} failed", slot_id),
        )
    }
}
