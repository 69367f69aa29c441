// --- File: crates/slotbook_ui/src/lib.rs ---
// Declare modules within this crate
pub mod booking_dialog;
pub mod duration;
pub mod format;
pub mod handlers;
pub mod markup;
pub mod messages;
pub mod pages;
pub mod routes;
#[cfg(test)]
mod routes_test;
pub mod session;
pub mod shell;
pub mod slot_list;
#[cfg(test)]
mod test_support;

pub use routes::routes;
