// --- File: crates/slotbook_ui/src/duration.rs ---
//! Slot durations.
//!
//! The booking API only stores start times. A slot lasts until the next slot
//! in the same (start-ordered) list begins; the last slot, or a slot that
//! cannot be found, lasts [`DEFAULT_SLOT_MINUTES`].

use chrono::{DateTime, Duration, Utc};
use slotbook_common::Slot;

/// Duration assumed when there is no following slot.
pub const DEFAULT_SLOT_MINUTES: i64 = 30;

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Duration in minutes of the slot at `index` within `slots`.
pub fn slot_duration_minutes(slots: &[Slot], index: usize) -> i64 {
    let next = index.checked_add(1).and_then(|next| slots.get(next));
    match (slots.get(index), next) {
        (Some(current), Some(next)) => minutes_between(current.start_date, next.start_date),
        _ => DEFAULT_SLOT_MINUTES,
    }
}

/// Duration in minutes of the slot with id `slot_id` within `slots`.
pub fn duration_for_slot(slots: &[Slot], slot_id: &str) -> i64 {
    slots
        .iter()
        .position(|slot| slot.id == slot_id)
        .map_or(DEFAULT_SLOT_MINUTES, |index| {
            slot_duration_minutes(slots, index)
        })
}

/// Durations for every slot in list order.
pub fn durations(slots: &[Slot]) -> Vec<i64> {
    (0..slots.len())
        .map(|index| slot_duration_minutes(slots, index))
        .collect()
}

/// End of `slot`: its start plus its duration within `slots`.
pub fn slot_end(slots: &[Slot], slot: &Slot) -> DateTime<Utc> {
    slot.start_date + Duration::minutes(duration_for_slot(slots, &slot.id))
}

// Rounds half-minutes up, including for negative gaps.
fn minutes_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let millis = (end - start).num_milliseconds();
    (millis + MILLIS_PER_MINUTE / 2).div_euclid(MILLIS_PER_MINUTE)
}
