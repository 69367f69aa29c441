// --- File: crates/slotbook_ui/src/pages/manager.rs ---
//! Sales manager page: every booked appointment, with two-step cancellation.

use std::sync::Arc;

use slotbook_common::{Slot, SlotApi};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::{CancelOutcome, FetchOutcome};
use crate::format::{format_date, format_time};
use crate::markup::{disabled_if, escape};
use crate::messages::Operation;
use crate::shell::alert;

pub const CONFIRM_PATH: &str = "/manager/confirm";
pub const DISMISS_PATH: &str = "/manager/dismiss";

pub fn request_cancel_action(slot: &Slot) -> String {
    format!("/manager/slots/{}/cancel", urlencoding::encode(&slot.id))
}

#[derive(Debug, Clone)]
pub struct SalesManagerState {
    /// Booked slots, ascending by start
    pub booked_slots: Vec<Slot>,
    pub loading: bool,
    pub error: Option<String>,
    /// Slot awaiting confirmation in the cancel dialog
    pub pending_cancel: Option<String>,
    pub cancelling: bool,
}

impl Default for SalesManagerState {
    fn default() -> Self {
        Self {
            booked_slots: Vec::new(),
            loading: true,
            error: None,
            pending_cancel: None,
            cancelling: false,
        }
    }
}

pub struct SalesManagerPage {
    api: Arc<dyn SlotApi>,
    state: Mutex<SalesManagerState>,
}

impl SalesManagerPage {
    pub fn new(api: Arc<dyn SlotApi>) -> Self {
        Self {
            api,
            state: Mutex::new(SalesManagerState::default()),
        }
    }

    pub async fn mount(api: Arc<dyn SlotApi>) -> Self {
        let page = Self::new(api);
        page.load().await;
        page
    }

    pub async fn snapshot(&self) -> SalesManagerState {
        self.state.lock().await.clone()
    }

    /// Fetches all booked slots. Entries the API reports as unbooked are
    /// dropped and the rest sorted by start time.
    pub async fn load(&self) -> FetchOutcome {
        self.state.lock().await.loading = true;
        debug!("Fetching booked slots");
        let result = self.api.booked_slots().await;

        let mut state = self.state.lock().await;
        state.loading = false;
        match result {
            Ok(slots) => {
                let mut booked: Vec<Slot> = slots.into_iter().filter(|slot| slot.is_booked).collect();
                booked.sort_by_key(|slot| slot.start_date);
                let count = booked.len();
                state.booked_slots = booked;
                state.error = None;
                FetchOutcome::Loaded(count)
            }
            Err(err) => {
                warn!("Fetching booked slots failed: {}", err);
                state.error = Some(Operation::FetchBookedSlots.failure_message(&err));
                FetchOutcome::Failed
            }
        }
    }

    /// Opens the confirmation dialog for a listed slot.
    pub async fn request_cancel(&self, slot_id: &str) -> bool {
        let mut state = self.state.lock().await;
        if state.cancelling || !state.booked_slots.iter().any(|slot| slot.id == slot_id) {
            return false;
        }
        state.pending_cancel = Some(slot_id.to_string());
        true
    }

    /// "No, Keep it". Ignored while the confirmed cancel is running.
    pub async fn dismiss_cancel(&self) {
        let mut state = self.state.lock().await;
        if !state.cancelling {
            state.pending_cancel = None;
        }
    }

    /// "Yes, Cancel Appointment". The dialog closes whatever the outcome.
    pub async fn confirm_cancel(&self) -> CancelOutcome {
        let slot_id = {
            let mut state = self.state.lock().await;
            if state.cancelling {
                return CancelOutcome::InFlight;
            }
            let Some(slot_id) = state.pending_cancel.clone() else {
                return CancelOutcome::NothingPending;
            };
            state.cancelling = true;
            slot_id
        };

        let result = self.api.cancel_booking(&slot_id).await;

        let mut state = self.state.lock().await;
        state.cancelling = false;
        state.pending_cancel = None;
        match result {
            Ok(_) => {
                info!("Manager cancelled booking on slot {}", slot_id);
                state.booked_slots.retain(|slot| slot.id != slot_id);
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

pub fn render(state: &SalesManagerState) -> String {
    let content = if state.loading {
        r#"<p class="helper" role="status">Loading...</p>"#.to_string()
    } else if state.booked_slots.is_empty() {
        r#"<p class="helper">No booked appointments</p>"#.to_string()
    } else {
        let cards: String = state
            .booked_slots
            .iter()
            .map(|slot| appointment_card(slot, state.cancelling))
            .collect();
        format!(r#"<ul class="appointments">{}</ul>"#, cards)
    };

    let dialog = if state.pending_cancel.is_some() {
        confirm_dialog(state.cancelling)
    } else {
        String::new()
    };

    format!(
        r#"<section class="paper">
<h1>Booked Appointments</h1>
{alert}
{content}
</section>
{dialog}"#,
        alert = alert(state.error.as_deref()),
        content = content,
        dialog = dialog,
    )
}

fn appointment_card(slot: &Slot, cancelling: bool) -> String {
    format!(
        r#"<li data-slot-id="{id}"><div><span class="slot-time">{time}</span><span class="chip">UTC</span><p>{date}</p><p>{customer}</p></div><form method="post" action="{action}" class="inline"><button type="submit" class="button outlined" aria-label="Cancel booking"{disabled}>Cancel</button></form></li>"#,
        id = escape(&slot.id),
        time = format_time(&slot.start_date),
        date = format_date(&slot.start_date),
        customer = escape(slot.booked_customer_name.as_deref().unwrap_or_default()),
        action = escape(&request_cancel_action(slot)),
        disabled = disabled_if(cancelling),
    )
}

fn confirm_dialog(cancelling: bool) -> String {
    format!(
        r#"<div class="overlay"><div class="dialog" role="dialog" aria-labelledby="cancel-title">
<h2 id="cancel-title">Cancel Appointment</h2>
<p>Are you sure you want to cancel this appointment?</p>
<form method="post" action="{confirm}" class="dialog-actions">
<button type="submit" class="button outlined" formaction="{dismiss}"{disabled}>No, Keep it</button>
<button type="submit" class="button"{disabled}>Yes, Cancel Appointment</button>
</form>
</div></div>"#,
        confirm = CONFIRM_PATH,
        dismiss = DISMISS_PATH,
        disabled = disabled_if(cancelling),
    )
}
