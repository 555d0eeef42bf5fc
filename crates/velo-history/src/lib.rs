//! Per-user local history of past estimates.
//!
//! One JSON document per user under a store directory, newest entry
//! first. A corrupt or missing file reads as an empty history rather
//! than failing the caller; history is a convenience, not a ledger.

pub mod error;
pub mod store;

pub use error::HistoryError;
pub use store::{HistoryEntry, HistoryStore};
