//! Local accounts: a plain key-value store holding a JSON list of accounts
//! and the name of the logged-in user.
//!
//! Passwords are stored and compared as plain text.

mod accounts;
mod error;
mod store;

pub use accounts::*;
pub use error::{AccountError, StoreError};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
