// --- File: crates/slotbook_ui/src/messages.rs ---
use slotbook_common::ApiError;

/// User-facing operations that can fail against the booking API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchSlots,
    BookSlot,
    CancelBooking,
    FetchBookedSlots,
}

impl Operation {
    fn description(self) -> &'static str {
        match self {
            Operation::FetchSlots => "fetch slots",
            Operation::BookSlot => "book slot",
            Operation::CancelBooking => "cancel booking",
            Operation::FetchBookedSlots => "fetch booked slots",
        }
    }

    /// Banner text for a failed call. A rejection gets the short form; a
    /// failure to reach or understand the API asks the user to retry.
    pub fn failure_message(self, error: &ApiError) -> String {
        if error.is_rejection() {
            format!("Failed to {}", self.description())
        } else {
            format!("Failed to {}. Please try again later.", self.description())
        }
    }
}
