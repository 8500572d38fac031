//! Wordnik API client library.
//!
//! A Rust library for the Wordnik v4 dictionary API: word lookups,
//! definitions, examples, related words, word lists and user accounts.
//!
//! # Quick Start
//!
//! ```no_run
//! use wordnik::{QueryOption, WordnikClient};
//!
//! #[tokio::main]
//! async fn main() -> wordnik::Result<()> {
//!     // Create client from environment variables
//!     let client = WordnikClient::from_env()?;
//!
//!     // Look up a word, resolving plurals to their canonical form
//!     let word = client.word("cats", &[QueryOption::use_canonical(true)]).await?;
//!     println!("Canonical form: {:?}", word.canonical_form);
//!
//!     // Fetch noun definitions from every dictionary
//!     let definitions = client
//!         .definitions(
//!             "potato",
//!             &[
//!                 QueryOption::source_dictionaries(&["all"]),
//!                 QueryOption::part_of_speech(&["noun"]),
//!             ],
//!         )
//!         .await?;
//!     println!("Found {} definitions", definitions.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Every endpoint is an async method on [`WordnikClient`]. Each one seeds
//! its own default query parameters, applies the caller's
//! [`QueryOption`]s on top (later options win), builds the request and
//! decodes the JSON response.
//!
//! Option values are checked against fixed allow-lists. Invalid values are
//! dropped rather than reported; see the [`query`] module.
//!
//! Required string arguments (words, queries, permalinks, auth tokens) are
//! checked before anything is sent; an empty one returns
//! [`WordnikError::InvalidArgument`].
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `WORDNIK_API_KEY` (required) - Your Wordnik API key
//! - `WORDNIK_API_URL` (optional) - Base URL (defaults to `https://api.wordnik.com/v4/`)

pub mod cli;
mod client;
mod error;
mod models;
pub mod output;
mod pagination;
pub mod query;
mod traits;

// Re-export core types
pub use client::{WordnikClient, API_KEY_HEADER, AUTH_TOKEN_HEADER};
pub use error::{Result, WordnikError};
pub use pagination::Page;
pub use query::{QueryOption, QueryParams};

// Re-export traits
pub use traits::{List, DEFAULT_PAGE_SIZE};

// Re-export models
pub use models::{
    // Word types
    AudioFile,
    Bigram,
    Citation,
    ContentProvider,
    Definition,
    Example,
    ExampleSearchResults,
    ExampleUsage,
    Facet,
    FacetValue,
    Frequency,
    FrequencySummary,
    Label,
    Note,
    RelatedWord,
    ScoredWord,
    Sentence,
    Syllable,
    TextPron,
    WordObject,
    // Words types
    DefinitionSearchResults,
    SimpleDefinition,
    SimpleExample,
    WordOfTheDay,
    WordSearchResult,
    WordSearchResults,
    WOTD_DATE_FORMAT,
    // Account types
    ApiTokenStatus,
    AuthenticationToken,
    User,
    // Word list types
    WordList,
    WordListWord,
    WordListWordsQuery,
};
