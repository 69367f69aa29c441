// --- File: crates/slotbook_ui/src/test_support.rs ---
//! In-memory booking API for page and router tests.
//!
//! Calls can be held at a gate until the test releases them, which is how the
//! stale-fetch and double-submit tests interleave requests deterministically.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use slotbook_common::{ApiError, Slot, SlotApi};
use tokio::sync::Notify;

pub fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, hour, minute, 0).unwrap()
}

pub fn march(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
}

/// A request parked until [`Gate::release`].
#[derive(Default)]
pub struct Gate {
    entered: Notify,
    release: Notify,
}

impl Gate {
    pub async fn entered(&self) {
        self.entered.notified().await;
    }

    pub fn release(&self) {
        self.release.notify_one();
    }
}

#[derive(Default)]
pub struct FakeSlotApi {
    slots: Mutex<Vec<Slot>>,
    failures: Mutex<HashMap<&'static str, ApiError>>,
    gates: Mutex<HashMap<String, Arc<Gate>>>,
    pub slots_for_date_calls: AtomicUsize,
    pub booked_slots_calls: AtomicUsize,
    pub book_slot_calls: AtomicUsize,
    pub cancel_booking_calls: AtomicUsize,
}

impl FakeSlotApi {
    pub fn with_slots(slots: Vec<Slot>) -> Self {
        Self {
            slots: Mutex::new(slots),
            ..Self::default()
        }
    }

    /// Makes every call to `operation` fail with `error` until [`recover`](Self::recover).
    pub fn fail(&self, operation: &'static str, error: ApiError) {
        self.failures.lock().unwrap().insert(operation, error);
    }

    pub fn recover(&self, operation: &'static str) {
        self.failures.lock().unwrap().remove(operation);
    }

    /// Parks the next call matching `key` (`date:2024-03-05`, `book:<id>`,
    /// `cancel:<id>`, `booked`).
    pub fn hold(&self, key: impl Into<String>) -> Arc<Gate> {
        let gate = Arc::new(Gate::default());
        self.gates.lock().unwrap().insert(key.into(), gate.clone());
        gate
    }

    pub fn slot(&self, id: &str) -> Option<Slot> {
        self.slots.lock().unwrap().iter().find(|s| s.id == id).cloned()
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    async fn pass(&self, key: &str, operation: &'static str) -> Result<(), ApiError> {
        let gate = self.gates.lock().unwrap().remove(key);
        if let Some(gate) = gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }
        match self.failures.lock().unwrap().get(operation) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn update(&self, id: &str, apply: impl FnOnce(&mut Slot) -> Result<(), ApiError>) -> Result<Slot, ApiError> {
        let mut slots = self.slots.lock().unwrap();
        let slot = slots
            .iter_mut()
            .find(|slot| slot.id == id)
            .ok_or_else(|| ApiError::Rejected("Slot not found".into()))?;
        apply(slot)?;
        Ok(slot.clone())
    }
}

#[async_trait]
impl SlotApi for FakeSlotApi {
    async fn slots_for_date(&self, date: NaiveDate) -> Result<Vec<Slot>, ApiError> {
        self.slots_for_date_calls.fetch_add(1, Ordering::SeqCst);
        self.pass(&format!("date:{}", date.format("%Y-%m-%d")), "slots_for_date")
            .await?;
        let mut day: Vec<Slot> = self
            .slots
            .lock()
            .unwrap()
            .iter()
            .filter(|slot| slot.start_date.date_naive() == date)
            .cloned()
            .collect();
        day.sort_by_key(|slot| slot.start_date);
        Ok(day)
    }

    async fn booked_slots(&self) -> Result<Vec<Slot>, ApiError> {
        self.booked_slots_calls.fetch_add(1, Ordering::SeqCst);
        self.pass("booked", "booked_slots").await?;
        Ok(self
            .slots
            .lock()
            .unwrap()
            .iter()
            .filter(|slot| slot.is_booked)
            .cloned()
            .collect())
    }

    async fn book_slot(&self, slot_id: &str, name: &str) -> Result<Slot, ApiError> {
        self.book_slot_calls.fetch_add(1, Ordering::SeqCst);
        self.pass(&format!("book:{}", slot_id), "book_slot").await?;
        self.update(slot_id, |slot| {
            if slot.is_booked {
                return Err(ApiError::Rejected("Slot is already booked".into()));
            }
            slot.is_booked = true;
            slot.booked_customer_name = Some(name.to_string());
            Ok(())
        })
    }

    async fn cancel_booking(&self, slot_id: &str) -> Result<Slot, ApiError> {
        self.cancel_booking_calls.fetch_add(1, Ordering::SeqCst);
        self.pass(&format!("cancel:{}", slot_id), "cancel_booking")
            .await?;
        self.update(slot_id, |slot| {
            slot.is_booked = false;
            slot.booked_customer_name = None;
            Ok(())
        })
    }
}
