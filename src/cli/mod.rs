//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the wordnik binary.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::query::QueryOption;

/// Wordnik dictionary command-line interface.
#[derive(Parser, Debug)]
#[command(name = "wordnik", about = "Wordnik dictionary CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of text.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up a word.
    Word {
        word: String,

        /// Resolve the word to its canonical form (e.g. "cats" -> "cat").
        #[arg(long)]
        canonical: bool,
    },

    /// Show definitions for a word.
    #[command(alias = "define")]
    Definitions {
        word: String,

        /// Maximum number of definitions.
        #[arg(long)]
        limit: Option<i64>,

        /// Source dictionaries (ahd, century, wiktionary, webster, wordnet, all).
        #[arg(long = "dictionary", value_delimiter = ',')]
        dictionaries: Vec<String>,

        /// Parts of speech to keep.
        #[arg(long = "part-of-speech", value_delimiter = ',')]
        parts_of_speech: Vec<String>,
    },

    /// Show usage examples for a word.
    Examples {
        word: String,

        /// Maximum number of examples.
        #[arg(long)]
        limit: Option<i64>,
    },

    /// Show related words (synonyms, antonyms, rhymes, ...).
    Related {
        word: String,

        /// Relationship types to include.
        #[arg(long = "type", value_delimiter = ',')]
        types: Vec<String>,
    },

    /// Show pronunciations for a word.
    Pronunciations {
        word: String,

        /// Pronunciation format (ahd, arpabet, gcide-diacritical, IPA).
        #[arg(long)]
        format: Option<String>,
    },

    /// Search for words.
    Search {
        query: String,

        /// Maximum number of results.
        #[arg(long)]
        limit: Option<i64>,
    },

    /// Find words whose definitions match a phrase.
    Reverse {
        query: String,

        /// Maximum number of results.
        #[arg(long)]
        limit: Option<i64>,
    },

    /// Get a random word.
    Random {
        /// Minimum word length.
        #[arg(long)]
        min_length: Option<i64>,

        /// Maximum word length.
        #[arg(long)]
        max_length: Option<i64>,
    },

    /// Show the word of the day.
    Wotd {
        /// Date in yyyy-mm-dd format (defaults to today).
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List the word lists of an authenticated user.
    Lists {
        /// Auth token from the authenticate endpoint.
        #[arg(long, env = "WORDNIK_AUTH_TOKEN")]
        auth_token: String,
    },
}

impl Command {
    /// Query options implied by the command's flags.
    pub fn query_options(&self) -> Vec<QueryOption> {
        let mut options = Vec::new();
        match self {
            Command::Word { canonical, .. } => {
                if *canonical {
                    options.push(QueryOption::use_canonical(true));
                }
            }
            Command::Definitions {
                limit,
                dictionaries,
                parts_of_speech,
                ..
            } => {
                options.extend(limit.map(QueryOption::limit));
                if !dictionaries.is_empty() {
                    options.push(QueryOption::source_dictionaries(dictionaries));
                }
                if !parts_of_speech.is_empty() {
                    options.push(QueryOption::part_of_speech(parts_of_speech));
                }
            }
            Command::Examples { limit, .. }
            | Command::Search { limit, .. }
            | Command::Reverse { limit, .. } => {
                options.extend(limit.map(QueryOption::limit));
            }
            Command::Related { types, .. } => {
                if !types.is_empty() {
                    options.push(QueryOption::relationship_types(types));
                }
            }
            Command::Pronunciations { format, .. } => {
                options.extend(format.as_deref().map(QueryOption::type_format));
            }
            Command::Random {
                min_length,
                max_length,
            } => {
                options.extend(min_length.map(QueryOption::min_length));
                options.extend(max_length.map(QueryOption::max_length));
            }
            Command::Wotd { .. } | Command::Lists { .. } => {}
        }
        options
    }
}
