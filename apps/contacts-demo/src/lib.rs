//! Headless contact list demo for swiperow.

pub mod contacts;
pub mod list;
pub mod script;

pub use contacts::{load_contacts, Contact};
pub use list::{ContactList, ContactRow, ROW_HEIGHT, ROW_WIDTH};
