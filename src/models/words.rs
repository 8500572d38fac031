//! Models and endpoints for `words.json`: search, reverse dictionary,
//! random words and the word of the day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::client::WordnikClient;
use crate::error::{require, require_segment, Result};
use crate::models::word::{ContentProvider, Definition, WordObject};
use crate::query::{QueryOption, QueryParams};

/// Date format used by the word of the day endpoint.
pub const WOTD_DATE_FORMAT: &str = "%Y-%m-%d";

/// One hit from a word search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordSearchResult {
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub lexicality: f64,
    #[serde(default)]
    pub word: String,
}

/// Results of a word search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordSearchResults {
    #[serde(default)]
    pub search_results: Vec<WordSearchResult>,
    #[serde(default)]
    pub total_results: i64,
}

/// Results of a reverse dictionary search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionSearchResults {
    #[serde(default)]
    pub results: Vec<Definition>,
    #[serde(default)]
    pub total_results: i64,
}

/// The word of the day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordOfTheDay {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub content_provider: Option<ContentProvider>,
    #[serde(rename = "htmlExtra", default)]
    pub html_extra: Option<String>,
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub definitions: Vec<SimpleDefinition>,
    #[serde(default)]
    pub examples: Vec<SimpleExample>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub publish_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleDefinition {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub part_of_speech: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleExample {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl WordOfTheDay {
    /// The publish date, if present and well formed.
    ///
    /// The API sends a full timestamp (`2017-02-03T03:00:00.000+0000`);
    /// only the date part is read.
    pub fn published_on(&self) -> Option<NaiveDate> {
        let date = self.publish_date.as_deref()?.get(..10)?;
        NaiveDate::parse_from_str(date, WOTD_DATE_FORMAT).ok()
    }
}

impl WordSearchResults {
    /// Returns true if the search matched nothing.
    pub fn is_empty(&self) -> bool {
        self.total_results == 0 || self.search_results.is_empty()
    }
}

const RANDOM_WORD_DEFAULTS: &[(&str, &str)] = &[
    ("hasDictionaryDef", "false"),
    ("minCorpusCount", "0"),
    ("maxCorpusCount", "-1"),
    ("minDictionaryCount", "1"),
    ("maxDictionaryCount", "-1"),
    ("minLength", "5"),
    ("maxLength", "-1"),
];

impl WordnikClient {
    /// Get the word of the day for `date`.
    #[tracing::instrument(skip(self))]
    pub async fn word_of_the_day(&self, date: NaiveDate) -> Result<WordOfTheDay> {
        let date = date.format(WOTD_DATE_FORMAT).to_string();
        let params = QueryParams::with_defaults(&[("date", date.as_str())]);
        self.get_json("words.json/wordOfTheDay", params, &[]).await
    }

    /// Search for words matching `query`.
    ///
    /// Defaults: `caseSensitive=true`, `minCorpusCount=5`,
    /// `maxCorpusCount=-1`, `minDictionaryCount=1`, `maxDictionaryCount=-1`,
    /// `minLength=1`, `maxLength=-1`, `skip=0`, `limit=10`. Other parameter
    /// values are left to the API to judge.
    ///
    /// # Errors
    ///
    /// Returns [`crate::WordnikError::InvalidArgument`] for an empty query.
    #[tracing::instrument(skip(self, options))]
    pub async fn search_words(
        &self,
        query: &str,
        options: &[QueryOption],
    ) -> Result<WordSearchResults> {
        require_segment("query", query)?;
        let path = format!("words.json/search/{}", urlencoding::encode(query));
        let params = QueryParams::with_defaults(&[
            ("caseSensitive", "true"),
            ("minCorpusCount", "5"),
            ("maxCorpusCount", "-1"),
            ("minDictionaryCount", "1"),
            ("maxDictionaryCount", "-1"),
            ("minLength", "1"),
            ("maxLength", "-1"),
            ("skip", "0"),
            ("limit", "10"),
        ]);
        self.get_json(&path, params, options).await
    }

    /// Find words whose definitions match `query`.
    ///
    /// Defaults: `minCorpusCount=5`, `maxCorpusCount=-1`, `minLength=1`,
    /// `maxLength=-1`, `includeTags=false`, `skip=0`, `limit=10`.
    #[tracing::instrument(skip(self, options))]
    pub async fn reverse_dictionary(
        &self,
        query: &str,
        options: &[QueryOption],
    ) -> Result<DefinitionSearchResults> {
        require("query", query)?;
        let params = QueryParams::with_defaults(&[
            ("query", query),
            ("minCorpusCount", "5"),
            ("maxCorpusCount", "-1"),
            ("minLength", "1"),
            ("maxLength", "-1"),
            ("includeTags", "false"),
            ("skip", "0"),
            ("limit", "10"),
        ]);
        self.get_json("words.json/reverseDictionary", params, options)
            .await
    }

    /// Get one random word.
    ///
    /// Defaults: `hasDictionaryDef=false`, `minCorpusCount=0`,
    /// `maxCorpusCount=-1`, `minDictionaryCount=1`, `maxDictionaryCount=-1`,
    /// `minLength=5`, `maxLength=-1`. When nothing satisfies the
    /// constraints the result is an empty [`WordObject`].
    #[tracing::instrument(skip(self, options))]
    pub async fn random_word(&self, options: &[QueryOption]) -> Result<WordObject> {
        let params = QueryParams::with_defaults(RANDOM_WORD_DEFAULTS);
        self.get_json("words.json/randomWord", params, options)
            .await
    }

    /// Get several random words. Same defaults as
    /// [`random_word`](Self::random_word) plus `limit=10`.
    #[tracing::instrument(skip(self, options))]
    pub async fn random_words(&self, options: &[QueryOption]) -> Result<Vec<WordObject>> {
        let mut params = QueryParams::with_defaults(RANDOM_WORD_DEFAULTS);
        params.set("limit", "10");
        self.get_json("words.json/randomWords", params, options)
            .await
    }
}
