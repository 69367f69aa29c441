// HTTP utilities shared by the SlotBook crates
pub mod client;
