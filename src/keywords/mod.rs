//! Keyword generation and bookkeeping: the Hebrew variation table, candidate
//! expansion, category assignment, and the de-duplicating keyword store.

pub mod categorize;
pub mod expand;
pub mod store;
mod variations;

pub use categorize::categorize;
pub use store::{KeywordStore, Summary};
