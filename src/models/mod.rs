//! Wordnik API model types and the endpoints that return them.

mod account;
mod word;
mod word_list;
mod words;

pub use account::*;
pub use word::*;
pub use word_list::*;
pub use words::*;
