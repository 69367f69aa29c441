// --- File: crates/slotbook_ui/src/slot_list.rs ---
//! Slot list view.
//!
//! [`SlotListView`] turns a day's slots into typed [`SlotRow`]s and renders
//! them as a list of forms. Actions are route builders mapping a slot to the
//! URL its button posts to.

use std::collections::HashSet;

use slotbook_common::Slot;

use crate::duration::durations;
use crate::format::format_time;
use crate::markup::{disabled_if, escape};

pub const EMPTY_DAY_TEXT: &str = "No time slots available for this date.";

/// Builds the form action URL for a slot.
pub type SlotAction = fn(&Slot) -> String;

/// What a row's button does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowControl {
    /// "Book Appointment", posting to the select action
    Book { action: String },
    /// "Cancel Booking", posting to the cancel action
    Cancel { action: String, disabled: bool },
    /// Booked slot on a list without a cancel action
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRow {
    pub slot_id: String,
    pub time: String,
    pub duration_minutes: i64,
    pub is_booked: bool,
    pub booked_by: Option<String>,
    pub control: RowControl,
}

pub struct SlotListView<'a> {
    slots: &'a [Slot],
    select: SlotAction,
    cancel: Option<SlotAction>,
    in_flight: Option<&'a HashSet<String>>,
}

impl<'a> SlotListView<'a> {
    pub fn new(slots: &'a [Slot], select: SlotAction) -> Self {
        Self {
            slots,
            select,
            cancel: None,
            in_flight: None,
        }
    }

    /// Offers "Cancel Booking" on booked slots.
    pub fn with_cancel(mut self, cancel: SlotAction) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Slot ids whose cancel request is still running; their controls render
    /// disabled.
    pub fn with_in_flight(mut self, slot_ids: &'a HashSet<String>) -> Self {
        self.in_flight = Some(slot_ids);
        self
    }

    pub fn rows(&self) -> Vec<SlotRow> {
        self.slots
            .iter()
            .zip(durations(self.slots))
            .map(|(slot, duration_minutes)| SlotRow {
                slot_id: slot.id.clone(),
                time: format_time(&slot.start_date),
                duration_minutes,
                is_booked: slot.is_booked,
                booked_by: slot
                    .booked_customer_name
                    .clone()
                    .filter(|_| slot.is_booked),
                control: self.control_for(slot),
            })
            .collect()
    }

    fn control_for(&self, slot: &Slot) -> RowControl {
        if !slot.is_booked {
            return RowControl::Book {
                action: (self.select)(slot),
            };
        }
        match self.cancel {
            Some(cancel) => RowControl::Cancel {
                action: cancel(slot),
                disabled: self
                    .in_flight
                    .is_some_and(|ids| ids.contains(&slot.id)),
            },
            None => RowControl::None,
        }
    }

    pub fn render(&self) -> String {
        let rows = self.rows();
        if rows.is_empty() {
            return format!(r#"<p class="helper">{}</p>"#, EMPTY_DAY_TEXT);
        }

        let mut html = String::from(r#"<ul class="slot-list">"#);
        for row in &rows {
            html.push_str(&render_row(row));
        }
        html.push_str("</ul>");
        html
    }
}

fn render_row(row: &SlotRow) -> String {
    let booked = if row.is_booked {
        r#"<span class="chip filled">Booked</span>"#
    } else {
        ""
    };
    let booked_by = match &row.booked_by {
        Some(name) => format!(r#"<p class="helper">Booked by: {}</p>"#, escape(name)),
        None => String::new(),
    };
    let control = match &row.control {
        RowControl::Book { action } => format!(
            r#"<form method="post" action="{}" class="inline"><button type="submit" class="button">Book Appointment</button></form>"#,
            escape(action)
        ),
        RowControl::Cancel { action, disabled } => format!(
            r#"<form method="post" action="{}" class="inline"><button type="submit" class="button outlined"{}>Cancel Booking</button></form>"#,
            escape(action),
            disabled_if(*disabled)
        ),
        RowControl::None => String::new(),
    };

    format!(
        r#"<li data-slot-id="{id}"><div><span class="slot-time">{time}</span><span class="chip">UTC</span><span class="chip">{minutes} min</span>{booked}{booked_by}</div><div>{control}</div></li>"#,
        id = escape(&row.slot_id),
        time = row.time,
        minutes = row.duration_minutes,
        booked = booked,
        booked_by = booked_by,
        control = control,
    )
}
