//! Trait definitions for Wordnik operations.

mod list;

pub use list::{List, DEFAULT_PAGE_SIZE};
