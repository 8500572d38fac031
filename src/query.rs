//! Query parameters and the options that configure them.
//!
//! Every endpoint seeds a [`QueryParams`] with its own defaults and then
//! applies caller-supplied [`QueryOption`]s in order. Each option names a
//! single parameter; applying it replaces any earlier value for that key.
//!
//! Options validate their input against fixed allow-lists. Invalid values
//! are never an error:
//!
//! - list options drop unknown tokens and always set their key, possibly to
//!   an empty string;
//! - single-value options with an unknown value leave the key untouched.
//!
//! # Example
//!
//! ```
//! use wordnik::{QueryOption, QueryParams};
//!
//! let mut params = QueryParams::new();
//! params.apply(&[
//!     QueryOption::include_part_of_speech(&["noun", "interjection"]),
//!     QueryOption::sort_by("length"),
//!     QueryOption::sort_order("sideways"),
//! ]);
//!
//! assert_eq!(
//!     params.encode(),
//!     "includePartOfSpeech=noun%2Cinterjection%2C&sortBy=length"
//! );
//! ```

use std::collections::BTreeMap;

use url::form_urlencoded;

/// Parts of speech accepted by the part-of-speech filters.
pub const PARTS_OF_SPEECH: &[&str] = &[
    "noun",
    "adjective",
    "verb",
    "adverb",
    "interjection",
    "pronoun",
    "preposition",
    "abbreviation",
    "affix",
    "article",
    "auxiliary-verb",
    "conjunction",
    "definite-article",
    "family-name",
    "given-name",
    "idiom",
    "imperative",
    "noun-plural",
    "noun-posessive",
    "past-participle",
    "phrasal-prefix",
    "proper-noun",
    "proper-noun-plural",
    "proper-noun-posessive",
    "suffix",
    "verb-intransitive",
    "verb-transitive",
];

/// Source dictionaries known to the API.
pub const SOURCE_DICTIONARIES: &[&str] =
    &["all", "ahd", "century", "wiktionary", "webster", "wordnet"];

/// Sort criteria. `createDate` only applies to word list words.
pub const SORT_CRITERIA: &[&str] = &["alpha", "count", "length", "createDate"];

/// Terms a reverse dictionary query may be expanded with.
pub const EXPAND_TERMS: &[&str] = &["synonym", "hypernym"];

/// Sort directions.
pub const SORT_ORDERS: &[&str] = &["asc", "desc"];

/// Relationship types for related word lookups.
pub const RELATIONSHIP_TYPES: &[&str] = &[
    "synonym",
    "antonym",
    "variant",
    "equivalent",
    "cross-reference",
    "related-word",
    "rhyme",
    "form",
    "etymologically-related-term",
    "hypernym",
    "hyponym",
    "inflected-form",
    "primary",
    "same-context",
    "verb-form",
    "verb-stem",
];

/// Pronunciation type formats.
pub const TYPE_FORMATS: &[&str] = &["ahd", "arpabet", "gcide-diacritical", "IPA"];

/// Join the tokens found in `allowed`, each followed by a comma.
///
/// Order and duplicates are preserved. The trailing comma after the last
/// token is part of the wire format the API has always been sent, so
/// `["noun", "verb"]` becomes `"noun,verb,"`. Nothing valid yields `""`.
pub fn join_valid<S: AsRef<str>>(candidates: &[S], allowed: &[&str]) -> String {
    let mut joined = String::new();
    for candidate in candidates {
        let candidate = candidate.as_ref();
        if allowed.contains(&candidate) {
            joined.push_str(candidate);
            joined.push(',');
        }
    }
    joined
}

/// A set of query parameters with one value per key.
///
/// Keys iterate (and encode) in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: BTreeMap<String, String>,
}

impl QueryParams {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parameter set seeded with endpoint defaults.
    #[must_use]
    pub fn with_defaults(defaults: &[(&str, &str)]) -> Self {
        let mut params = Self::new();
        for (key, value) in defaults {
            params.set(*key, *value);
        }
        params
    }

    /// Set `key` to `value`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Get the value for `key`, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns true if `key` is set (even to an empty string).
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns true if no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of parameters set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Apply options in order. Later options win.
    pub fn apply(&mut self, options: &[QueryOption]) {
        for option in options {
            option.apply(self);
        }
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encode as `application/x-www-form-urlencoded`, keys sorted.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

/// A single named query parameter mutation.
///
/// Built through the constructor functions, which format and validate the
/// value up front. An option whose value failed validation carries no value
/// and does nothing when applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOption {
    key: &'static str,
    value: Option<String>,
}

impl QueryOption {
    fn set(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: Some(value.into()),
        }
    }

    fn flag(key: &'static str, b: bool) -> Self {
        Self::set(key, b.to_string())
    }

    fn number(key: &'static str, n: i64) -> Self {
        Self::set(key, n.to_string())
    }

    fn list<S: AsRef<str>>(key: &'static str, items: &[S], allowed: &[&str]) -> Self {
        Self::set(key, join_valid(items, allowed))
    }

    fn one_of(key: &'static str, value: &str, allowed: &[&str]) -> Self {
        Self {
            key,
            value: allowed.contains(&value).then(|| value.to_string()),
        }
    }

    /// The parameter name this option controls.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// The value this option sets, or `None` if it was rejected.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Apply this option to `params`.
    pub fn apply(&self, params: &mut QueryParams) {
        if let Some(value) = &self.value {
            params.set(self.key, value.clone());
        }
    }

    /// Sets `caseSensitive`.
    pub fn case_sensitive(b: bool) -> Self {
        Self::flag("caseSensitive", b)
    }

    /// Sets `includePartOfSpeech` from the valid parts of speech.
    pub fn include_part_of_speech<S: AsRef<str>>(parts: &[S]) -> Self {
        Self::list("includePartOfSpeech", parts, PARTS_OF_SPEECH)
    }

    /// Sets `excludePartOfSpeech` from the valid parts of speech.
    pub fn exclude_part_of_speech<S: AsRef<str>>(parts: &[S]) -> Self {
        Self::list("excludePartOfSpeech", parts, PARTS_OF_SPEECH)
    }

    /// Sets `minCorpusCount`.
    pub fn min_corpus_count(n: i64) -> Self {
        Self::number("minCorpusCount", n)
    }

    /// Sets `maxCorpusCount`. `-1` means unbounded.
    pub fn max_corpus_count(n: i64) -> Self {
        Self::number("maxCorpusCount", n)
    }

    /// Sets `minDictionaryCount`.
    pub fn min_dictionary_count(n: i64) -> Self {
        Self::number("minDictionaryCount", n)
    }

    /// Sets `maxDictionaryCount`. `-1` means unbounded.
    pub fn max_dictionary_count(n: i64) -> Self {
        Self::number("maxDictionaryCount", n)
    }

    /// Sets `minLength`.
    pub fn min_length(n: i64) -> Self {
        Self::number("minLength", n)
    }

    /// Sets `maxLength`. `-1` means unbounded.
    pub fn max_length(n: i64) -> Self {
        Self::number("maxLength", n)
    }

    /// Sets `skip`.
    pub fn skip(n: i64) -> Self {
        Self::number("skip", n)
    }

    /// Sets `limit`.
    pub fn limit(n: i64) -> Self {
        Self::number("limit", n)
    }

    /// Sets `findSenseForWord`. Not validated.
    pub fn find_sense_for_word(sense: &str) -> Self {
        Self::set("findSenseForWord", sense)
    }

    /// Sets `includeSourceDictionaries` from the valid dictionaries.
    pub fn include_source_dictionaries<S: AsRef<str>>(dicts: &[S]) -> Self {
        Self::list("includeSourceDictionaries", dicts, SOURCE_DICTIONARIES)
    }

    /// Sets `excludeSourceDictionaries` from the valid dictionaries.
    pub fn exclude_source_dictionaries<S: AsRef<str>>(dicts: &[S]) -> Self {
        Self::list("excludeSourceDictionaries", dicts, SOURCE_DICTIONARIES)
    }

    /// Sets `expandTerms` if `term` is `synonym` or `hypernym`.
    pub fn expand_terms(term: &str) -> Self {
        Self::one_of("expandTerms", term, EXPAND_TERMS)
    }

    /// Sets `includeTags`, which controls whether markup tags are returned.
    pub fn include_tags(b: bool) -> Self {
        Self::flag("includeTags", b)
    }

    /// Sets `sortBy` if `criteria` is a known sort criterion.
    pub fn sort_by(criteria: &str) -> Self {
        Self::one_of("sortBy", criteria, SORT_CRITERIA)
    }

    /// Sets `sortOrder` if `direction` is `asc` or `desc`.
    pub fn sort_order(direction: &str) -> Self {
        Self::one_of("sortOrder", direction, SORT_ORDERS)
    }

    /// Sets `hasDictionaryDef`.
    pub fn has_dictionary_def(b: bool) -> Self {
        Self::flag("hasDictionaryDef", b)
    }

    /// Sets `useCanonical`. When true, "cats" resolves to "cat".
    pub fn use_canonical(b: bool) -> Self {
        Self::flag("useCanonical", b)
    }

    /// Sets `includeSuggestions`.
    pub fn include_suggestions(b: bool) -> Self {
        Self::flag("includeSuggestions", b)
    }

    /// Sets `includeDuplicates`.
    pub fn include_duplicates(b: bool) -> Self {
        Self::flag("includeDuplicates", b)
    }

    /// Sets `includeRelated`.
    pub fn include_related(b: bool) -> Self {
        Self::flag("includeRelated", b)
    }

    /// Sets `partOfSpeech` from the valid parts of speech.
    pub fn part_of_speech<S: AsRef<str>>(parts: &[S]) -> Self {
        Self::list("partOfSpeech", parts, PARTS_OF_SPEECH)
    }

    /// Sets `sourceDictionaries` from the valid dictionaries.
    ///
    /// For definitions this differs from `includeSourceDictionaries`: with
    /// `all`, results come from every source; with several dictionaries,
    /// results come from the first one listed that has definitions.
    pub fn source_dictionaries<S: AsRef<str>>(dicts: &[S]) -> Self {
        Self::list("sourceDictionaries", dicts, SOURCE_DICTIONARIES)
    }

    /// Sets `relationshipTypes` from the valid relationship types.
    ///
    /// Each type is capped by [`QueryOption::limit_relationship_type`].
    pub fn relationship_types<S: AsRef<str>>(types: &[S]) -> Self {
        Self::list("relationshipTypes", types, RELATIONSHIP_TYPES)
    }

    /// Sets `limitRelationshipType`, the per-type cap for related words.
    pub fn limit_relationship_type(n: i64) -> Self {
        Self::number("limitRelationshipType", n)
    }

    /// Sets `typeFormat` if `format` is a known pronunciation format.
    pub fn type_format(format: &str) -> Self {
        Self::one_of("typeFormat", format, TYPE_FORMATS)
    }

    /// Sets `sourceDictionary` if `dict` is a known dictionary.
    pub fn source_dictionary(dict: &str) -> Self {
        Self::one_of("sourceDictionary", dict, SOURCE_DICTIONARIES)
    }

    /// Sets `startYear`.
    pub fn start_year(n: i64) -> Self {
        Self::number("startYear", n)
    }

    /// Sets `endYear`.
    pub fn end_year(n: i64) -> Self {
        Self::number("endYear", n)
    }

    /// Sets `wlmi`, the minimum weighted mutual information for phrases.
    pub fn wlmi(n: i64) -> Self {
        Self::number("wlmi", n)
    }
}
