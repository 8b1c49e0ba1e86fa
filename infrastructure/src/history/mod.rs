//! Client-local analysis history persisted as a JSON file

mod json_store;

pub use json_store::{HistoryError, JsonHistoryStore};
