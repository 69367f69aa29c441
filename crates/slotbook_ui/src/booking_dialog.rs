// --- File: crates/slotbook_ui/src/booking_dialog.rs ---
//! Booking dialog: collects the customer's name for one slot.

use slotbook_common::Slot;

use crate::duration::{duration_for_slot, slot_end};
use crate::format::{format_date, format_time};
use crate::markup::{disabled_if, escape};

pub const NAME_REQUIRED: &str = "Please enter your name";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDialog {
    slot: Slot,
    name: String,
    validation_error: Option<String>,
}

/// Form actions the dialog's buttons post to.
#[derive(Debug, Clone, Copy)]
pub struct DialogActions<'a> {
    pub confirm: &'a str,
    pub close: &'a str,
}

impl BookingDialog {
    pub fn new(slot: Slot) -> Self {
        Self {
            slot,
            name: String::new(),
            validation_error: None,
        }
    }

    pub fn slot(&self) -> &Slot {
        &self.slot
    }

    /// Name as last submitted, kept so a failed booking can be retried.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn validation_error(&self) -> Option<&str> {
        self.validation_error.as_deref()
    }

    /// Validates a submitted name. Returns the name to book with, exactly as
    /// entered, or `None` after recording the validation message.
    pub fn submit(&mut self, name: &str) -> Option<String> {
        self.name = name.to_string();
        if name.trim().is_empty() {
            self.validation_error = Some(NAME_REQUIRED.to_string());
            return None;
        }
        self.validation_error = None;
        Some(self.name.clone())
    }

    /// `all_slots` is the day's list the slot was picked from; it only feeds
    /// the duration.
    pub fn render(&self, all_slots: &[Slot], actions: DialogActions<'_>, submitting: bool) -> String {
        let duration = duration_for_slot(all_slots, &self.slot.id);
        let end = slot_end(all_slots, &self.slot);
        let helper = match &self.validation_error {
            Some(message) => format!(
                r#"<p class="helper error-text" id="name-error">{}</p>"#,
                escape(message)
            ),
            None => String::new(),
        };

        format!(
            r#"<div class="overlay"><div class="dialog" role="dialog" aria-labelledby="booking-title">
<h2 id="booking-title">Book an Appointment</h2>
<form method="post" action="{confirm}">
<label for="name">Your Name</label>
<input type="text" id="name" name="name" value="{name}" autofocus>
{helper}
<dl>
<dt>Date</dt><dd>{date}</dd>
<dt>Time <span class="chip">UTC</span></dt><dd>{start} - {end}</dd>
<dt>Duration</dt><dd>{duration} minutes</dd>
</dl>
<div class="dialog-actions">
<button type="submit" class="button outlined" formaction="{close}">Cancel</button>
<button type="submit" class="button"{disabled}>Confirm Booking</button>
</div>
</form>
</div></div>"#,
            confirm = escape(actions.confirm),
            close = escape(actions.close),
            name = escape(&self.name),
            helper = helper,
            date = format_date(&self.slot.start_date),
            start = format_time(&self.slot.start_date),
            end = format_time(&end),
            duration = duration,
            disabled = disabled_if(submitting),
        )
    }
}
