// --- File: crates/slotbook_ui/src/pages/customer.rs ---
//! Customer booking page: pick a date, pick a slot, enter a name.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use slotbook_common::{Slot, SlotApi};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::{CancelOutcome, FetchOutcome};
use crate::booking_dialog::{BookingDialog, DialogActions};
use crate::format::format_iso_date;
use crate::markup::escape;
use crate::messages::Operation;
use crate::shell::alert;
use crate::slot_list::SlotListView;

pub const BOOKING_PATH: &str = "/booking";
pub const CLOSE_DIALOG_PATH: &str = "/booking/close";

/// Slot ids are opaque, so each is percent-encoded as a single path segment.
pub fn select_action(slot: &Slot) -> String {
    format!("/slots/{}/select", urlencoding::encode(&slot.id))
}

pub fn cancel_action(slot: &Slot) -> String {
    format!("/slots/{}/cancel", urlencoding::encode(&slot.id))
}

#[derive(Debug, Clone)]
pub struct CustomerBookingState {
    pub selected_date: NaiveDate,
    /// The day's slots in the order the API returned them
    pub slots: Vec<Slot>,
    pub error: Option<String>,
    pub dialog: Option<BookingDialog>,
    pub booking_in_flight: bool,
    /// Slot ids with a cancel request outstanding
    pub cancelling: HashSet<String>,
    fetch_generation: u64,
}

impl CustomerBookingState {
    fn new(selected_date: NaiveDate) -> Self {
        Self {
            selected_date,
            slots: Vec::new(),
            error: None,
            dialog: None,
            booking_in_flight: false,
            cancelling: HashSet::new(),
            fetch_generation: 0,
        }
    }

    // Every fetch supersedes all earlier ones.
    fn begin_fetch(&mut self) -> (NaiveDate, u64) {
        self.fetch_generation += 1;
        (self.selected_date, self.fetch_generation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingOutcome {
    /// Booked; dialog closed and the day re-fetched
    Booked,
    /// Blank name; nothing sent
    Invalid,
    /// API call failed; dialog left open
    Failed,
    /// A booking request is still running; nothing sent
    InFlight,
    /// No dialog was open
    NoDialog,
}

pub struct CustomerBookingPage {
    api: Arc<dyn SlotApi>,
    state: Mutex<CustomerBookingState>,
}

impl CustomerBookingPage {
    /// Creates the page without fetching. Call [`refresh`](Self::refresh) to
    /// load the initial day.
    pub fn new(api: Arc<dyn SlotApi>, selected_date: NaiveDate) -> Self {
        Self {
            api,
            state: Mutex::new(CustomerBookingState::new(selected_date)),
        }
    }

    /// Creates the page and loads `selected_date`.
    pub async fn mount(api: Arc<dyn SlotApi>, selected_date: NaiveDate) -> Self {
        let page = Self::new(api, selected_date);
        page.refresh().await;
        page
    }

    pub async fn snapshot(&self) -> CustomerBookingState {
        self.state.lock().await.clone()
    }

    /// Re-fetches the selected date.
    pub async fn refresh(&self) -> FetchOutcome {
        let (date, generation) = self.state.lock().await.begin_fetch();
        self.fetch(date, generation).await
    }

    pub async fn select_date(&self, date: NaiveDate) -> FetchOutcome {
        let generation = {
            let mut state = self.state.lock().await;
            state.selected_date = date;
            state.begin_fetch().1
        };
        self.fetch(date, generation).await
    }

    async fn fetch(&self, date: NaiveDate, generation: u64) -> FetchOutcome {
        debug!("Fetching slots for {} (generation {})", date, generation);
        let result = self.api.slots_for_date(date).await;

        let mut state = self.state.lock().await;
        if state.fetch_generation != generation {
            debug!(
                "Discarding slots for {} (generation {} superseded by {})",
                date, generation, state.fetch_generation
            );
            return FetchOutcome::Stale;
        }
        match result {
            Ok(slots) => {
                let count = slots.len();
                state.slots = slots;
                state.error = None;
                FetchOutcome::Loaded(count)
            }
            Err(err) => {
                warn!("Fetching slots for {} failed: {}", date, err);
                state.error = Some(Operation::FetchSlots.failure_message(&err));
                FetchOutcome::Failed
            }
        }
    }

    /// Opens the booking dialog for an available slot. Unknown and booked
    /// slots are ignored, as is any selection while a booking is in flight.
    pub async fn select_slot(&self, slot_id: &str) -> bool {
        let mut state = self.state.lock().await;
        if state.booking_in_flight {
            debug!("Booking in flight, ignoring selection of slot {}", slot_id);
            return false;
        }
        let Some(slot) = state
            .slots
            .iter()
            .find(|slot| slot.id == slot_id && !slot.is_booked)
            .cloned()
        else {
            debug!("Ignoring selection of unavailable slot {}", slot_id);
            return false;
        };
        state.dialog = Some(BookingDialog::new(slot));
        true
    }

    pub async fn close_dialog(&self) {
        self.state.lock().await.dialog = None;
    }

    /// Submits the open dialog with `name`.
    pub async fn submit_booking(&self, name: &str) -> BookingOutcome {
        let (slot_id, name) = {
            let mut state = self.state.lock().await;
            if state.booking_in_flight {
                debug!("Booking already in flight, ignoring submission");
                return BookingOutcome::InFlight;
            }
            let Some(dialog) = state.dialog.as_mut() else {
                return BookingOutcome::NoDialog;
            };
            let Some(name) = dialog.submit(name) else {
                return BookingOutcome::Invalid;
            };
            let slot_id = dialog.slot().id.clone();
            state.booking_in_flight = true;
            (slot_id, name)
        };

        let result = self.api.book_slot(&slot_id, &name).await;

        let (date, generation) = {
            let mut state = self.state.lock().await;
            state.booking_in_flight = false;
            match result {
                Ok(_) => {
                    state.dialog = None;
                    state.error = None;
                    state.begin_fetch()
                }
                Err(err) => {
                    warn!("Booking slot {} failed: {}", slot_id, err);
                    state.error = Some(Operation::BookSlot.failure_message(&err));
                    return BookingOutcome::Failed;
                }
            }
        };

        self.fetch(date, generation).await;
        BookingOutcome::Booked
    }

    /// Cancels the booking on `slot_id` and swaps in the returned record.
    pub async fn cancel_booking(&self, slot_id: &str) -> CancelOutcome {
        if !self
            .state
            .lock()
            .await
            .cancelling
            .insert(slot_id.to_string())
        {
            debug!("Cancel already in flight for slot {}", slot_id);
            return CancelOutcome::InFlight;
        }

        let result = self.api.cancel_booking(slot_id).await;

        let mut state = self.state.lock().await;
        state.cancelling.remove(slot_id);
        match result {
            Ok(updated) => {
                if let Some(slot) = state.slots.iter_mut().find(|slot| slot.id == updated.id) {
                    *slot = updated;
                }
                state.error = None;
                CancelOutcome::Cancelled
            }
            Err(err) => {
                warn!("Cancelling booking on slot {} failed: {}", slot_id, err);
                state.error = Some(Operation::CancelBooking.failure_message(&err));
                CancelOutcome::Failed
            }
        }
    }
}

/// Page body for a state snapshot.
pub fn render(state: &CustomerBookingState) -> String {
    let list = SlotListView::new(&state.slots, select_action)
        .with_cancel(cancel_action)
        .with_in_flight(&state.cancelling)
        .render();

    let dialog = match &state.dialog {
        Some(dialog) => dialog.render(
            &state.slots,
            DialogActions {
                confirm: BOOKING_PATH,
                close: CLOSE_DIALOG_PATH,
            },
            state.booking_in_flight,
        ),
        None => String::new(),
    };

    format!(
        r#"<section class="paper">
<h1>Book an Appointment</h1>
{alert}
<form method="get" action="/" class="date-picker">
<label for="date">Select Date</label>
<input type="date" id="date" name="date" value="{date}">
<button type="submit" class="button outlined">Show slots</button>
<p class="helper">Select any date to view available slots</p>
</form>
{list}
</section>
{dialog}"#,
        alert = alert(state.error.as_deref()),
        date = escape(&format_iso_date(state.selected_date)),
        list = list,
        dialog = dialog,
    )
}
