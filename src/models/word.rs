//! Word models and the `word.json` endpoints.

use serde::{Deserialize, Deserializer, Serialize};

use crate::client::WordnikClient;
use crate::error::{require_segment, Result};
use crate::query::{QueryOption, QueryParams};

/// A word as known to Wordnik.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordObject {
    #[serde(default)]
    pub id: i64,

    #[serde(default)]
    pub word: String,

    /// The word as it was requested, before canonicalization.
    #[serde(default)]
    pub original_word: Option<String>,

    /// Spelling suggestions (only with `includeSuggestions=true`).
    #[serde(default)]
    pub suggestions: Vec<String>,

    /// Canonical form (e.g. "cat" for "cats").
    #[serde(default)]
    pub canonical_form: Option<String>,

    #[serde(default)]
    pub vulgar: Option<String>,
}

/// A dictionary definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    #[serde(default)]
    pub extended_text: Option<String>,

    #[serde(default)]
    pub text: Option<String>,

    /// Dictionary this definition came from (e.g. "ahd-5", "wiktionary").
    #[serde(default)]
    pub source_dictionary: Option<String>,

    #[serde(default)]
    pub citations: Vec<Citation>,

    #[serde(default)]
    pub labels: Vec<Label>,

    /// Relevance score. The API sometimes sends `NaN` here, which reads
    /// back as `0.0`.
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: f64,

    #[serde(default)]
    pub example_uses: Vec<ExampleUsage>,

    #[serde(default)]
    pub attribution_url: Option<String>,

    #[serde(default)]
    pub seq_string: Option<String>,

    #[serde(default)]
    pub attribution_text: Option<String>,

    #[serde(default)]
    pub related_words: Vec<RelatedWord>,

    #[serde(default)]
    pub sequence: Option<String>,

    #[serde(default)]
    pub word: String,

    #[serde(default)]
    pub notes: Vec<Note>,

    #[serde(default)]
    pub text_prons: Vec<TextPron>,

    #[serde(default)]
    pub part_of_speech: Option<String>,
}

/// Read a score that may be a number, `null`, or a string such as `"NaN"`.
fn lenient_score<'de, D>(deserializer: D) -> core::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Score {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Score>::deserialize(deserializer)? {
        Some(Score::Number(n)) => n,
        Some(Score::Text(s)) => s.parse::<f64>().ok().filter(|n| n.is_finite()).unwrap_or(0.0),
        None => 0.0,
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    #[serde(default)]
    pub cite: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(rename = "type", default)]
    pub label_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleUsage {
    #[serde(default)]
    pub text: Option<String>,
}

/// A group of words related to a headword by one relationship type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedWord {
    #[serde(default)]
    pub label1: Option<String>,
    /// One of the relationship types (e.g. "synonym", "rhyme").
    #[serde(default)]
    pub relationship_type: String,
    #[serde(default)]
    pub label2: Option<String>,
    #[serde(default)]
    pub label3: Option<String>,
    #[serde(default)]
    pub words: Vec<String>,
    #[serde(default)]
    pub gram: Option<String>,
    #[serde(default)]
    pub label4: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(default)]
    pub note_type: Option<String>,
    #[serde(default)]
    pub applies_to: Vec<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub pos: i64,
}

/// A textual pronunciation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextPron {
    #[serde(default)]
    pub raw: String,
    #[serde(default)]
    pub seq: i64,
    /// Format of `raw` (e.g. "ahd-5", "arpabet", "IPA").
    #[serde(default)]
    pub raw_type: Option<String>,
}

/// The source a usage example was drawn from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentProvider {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
}

/// A usage example from the Wordnik corpus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub example_id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub score: Option<ScoredWord>,
    #[serde(default)]
    pub sentence: Option<Sentence>,
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub provider: Option<ContentProvider>,
    #[serde(default)]
    pub year: Option<i64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub document_id: Option<i64>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredWord {
    #[serde(default)]
    pub position: i64,
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub doc_term_count: i64,
    #[serde(default)]
    pub lemma: Option<String>,
    #[serde(default)]
    pub word_type: Option<String>,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub sentence_id: i64,
    #[serde(default)]
    pub stopword: bool,
    #[serde(default)]
    pub base_word_score: f64,
    #[serde(default)]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub word: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    #[serde(default)]
    pub has_scored_words: bool,
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub scored_words: Vec<ScoredWord>,
    #[serde(default)]
    pub display: Option<String>,
    #[serde(default)]
    pub rating: i64,
    #[serde(default)]
    pub document_metadata_id: i64,
}

/// Examples for a word, with the facets used to group them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExampleSearchResults {
    #[serde(default)]
    pub facets: Vec<Facet>,
    #[serde(default)]
    pub examples: Vec<Example>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facet {
    #[serde(default)]
    pub facet_values: Vec<FacetValue>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetValue {
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub value: Option<String>,
}

/// One syllable of a hyphenated word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllable {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub seq: i64,
    /// "stress" or "secondary stress" when the syllable carries stress.
    #[serde(rename = "type", default)]
    pub syllable_type: Option<String>,
}

/// Usage counts for a word over a range of years.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencySummary {
    #[serde(default)]
    pub unknown_year_count: i64,
    #[serde(default)]
    pub total_count: i64,
    #[serde(default)]
    pub frequency_string: Option<String>,
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub frequency: Vec<Frequency>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frequency {
    #[serde(default)]
    pub year: i64,
    #[serde(default)]
    pub count: i64,
}

/// A two-word phrase containing the requested word.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bigram {
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub gram1: String,
    #[serde(default)]
    pub gram2: String,
    #[serde(default)]
    pub wlmi: f64,
    #[serde(default)]
    pub mi: f64,
}

/// An audio pronunciation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioFile {
    #[serde(default)]
    pub attribution_url: Option<String>,
    #[serde(default)]
    pub comment_count: i64,
    #[serde(default)]
    pub vote_count: i64,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub audio_type: Option<String>,
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub attribution_text: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub vote_weighted_average: f64,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub word: Option<String>,
}

impl Definition {
    /// Returns true if this definition has text to show.
    pub fn has_text(&self) -> bool {
        self.text.as_deref().is_some_and(|t| !t.trim().is_empty())
    }
}

impl RelatedWord {
    /// Returns true if this group has the given relationship type.
    pub fn is(&self, relationship_type: &str) -> bool {
        self.relationship_type == relationship_type
    }
}

/// Build the path for a `word.json` resource; `word` is one path segment.
fn word_path(word: &str, resource: &str) -> String {
    format!("word.json/{}{}", urlencoding::encode(word), resource)
}

impl WordnikClient {
    /// Look up a word.
    ///
    /// Defaults: `useCanonical=false`, `includeSuggestions=false`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::WordnikError::InvalidArgument`] for an empty word, or
    /// one that is `.` or `..` and so cannot be a path segment.
    #[tracing::instrument(skip(self, options))]
    pub async fn word(&self, word: &str, options: &[QueryOption]) -> Result<WordObject> {
        require_segment("word", word)?;
        let params = QueryParams::with_defaults(&[
            ("useCanonical", "false"),
            ("includeSuggestions", "false"),
        ]);
        self.get_json(&word_path(word, ""), params, options).await
    }

    /// Get usage examples for a word.
    ///
    /// Defaults: `includeDuplicates=false`, `useCanonical=false`, `skip=0`,
    /// `limit=5`.
    #[tracing::instrument(skip(self, options))]
    pub async fn examples(
        &self,
        word: &str,
        options: &[QueryOption],
    ) -> Result<ExampleSearchResults> {
        require_segment("word", word)?;
        let params = QueryParams::with_defaults(&[
            ("includeDuplicates", "false"),
            ("useCanonical", "false"),
            ("skip", "0"),
            ("limit", "5"),
        ]);
        self.get_json(&word_path(word, "/examples"), params, options)
            .await
    }

    /// Get definitions for a word.
    ///
    /// Defaults: `limit=200`, `includeRelated=false`, `useCanonical=false`,
    /// `includeTags=false`. See [`QueryOption::source_dictionaries`] for how
    /// the dictionary filter behaves here.
    #[tracing::instrument(skip(self, options))]
    pub async fn definitions(
        &self,
        word: &str,
        options: &[QueryOption],
    ) -> Result<Vec<Definition>> {
        require_segment("word", word)?;
        let params = QueryParams::with_defaults(&[
            ("limit", "200"),
            ("includeRelated", "false"),
            ("useCanonical", "false"),
            ("includeTags", "false"),
        ]);
        self.get_json(&word_path(word, "/definitions"), params, options)
            .await
    }

    /// Get the single best usage example for a word.
    #[tracing::instrument(skip(self, options))]
    pub async fn top_example(&self, word: &str, options: &[QueryOption]) -> Result<Example> {
        require_segment("word", word)?;
        let params = QueryParams::with_defaults(&[("useCanonical", "false")]);
        self.get_json(&word_path(word, "/topExample"), params, options)
            .await
    }

    /// Get words related to a word, grouped by relationship type.
    ///
    /// Defaults: `useCanonical=false`, `limitRelationshipType=10`.
    #[tracing::instrument(skip(self, options))]
    pub async fn related_words(
        &self,
        word: &str,
        options: &[QueryOption],
    ) -> Result<Vec<RelatedWord>> {
        require_segment("word", word)?;
        let params = QueryParams::with_defaults(&[
            ("useCanonical", "false"),
            ("limitRelationshipType", "10"),
        ]);
        self.get_json(&word_path(word, "/relatedWords"), params, options)
            .await
    }

    /// Get text pronunciations for a word.
    #[tracing::instrument(skip(self, options))]
    pub async fn pronunciations(
        &self,
        word: &str,
        options: &[QueryOption],
    ) -> Result<Vec<TextPron>> {
        require_segment("word", word)?;
        let params = QueryParams::with_defaults(&[("useCanonical", "false"), ("limit", "50")]);
        self.get_json(&word_path(word, "/pronunciations"), params, options)
            .await
    }

    /// Get the syllables of a word.
    #[tracing::instrument(skip(self, options))]
    pub async fn hyphenation(
        &self,
        word: &str,
        options: &[QueryOption],
    ) -> Result<Vec<Syllable>> {
        require_segment("word", word)?;
        let params = QueryParams::with_defaults(&[("useCanonical", "false"), ("limit", "50")]);
        self.get_json(&word_path(word, "/hyphenation"), params, options)
            .await
    }

    /// Get yearly usage counts for a word.
    ///
    /// Defaults: `useCanonical=false`, `startYear=1800`, `endYear=2012`.
    #[tracing::instrument(skip(self, options))]
    pub async fn frequency(
        &self,
        word: &str,
        options: &[QueryOption],
    ) -> Result<FrequencySummary> {
        require_segment("word", word)?;
        let params = QueryParams::with_defaults(&[
            ("useCanonical", "false"),
            ("startYear", "1800"),
            ("endYear", "2012"),
        ]);
        self.get_json(&word_path(word, "/frequency"), params, options)
            .await
    }

    /// Get two-word phrases containing a word.
    #[tracing::instrument(skip(self, options))]
    pub async fn phrases(&self, word: &str, options: &[QueryOption]) -> Result<Vec<Bigram>> {
        require_segment("word", word)?;
        let params = QueryParams::with_defaults(&[
            ("limit", "5"),
            ("wlmi", "0"),
            ("useCanonical", "false"),
        ]);
        self.get_json(&word_path(word, "/phrases"), params, options)
            .await
    }

    /// Get etymologies for a word. Each entry is an XML fragment.
    #[tracing::instrument(skip(self, options))]
    pub async fn etymologies(&self, word: &str, options: &[QueryOption]) -> Result<Vec<String>> {
        require_segment("word", word)?;
        let params = QueryParams::with_defaults(&[("useCanonical", "false")]);
        self.get_json(&word_path(word, "/etymologies"), params, options)
            .await
    }

    /// Get audio pronunciations for a word.
    ///
    /// File URLs expire about ten minutes after they are issued.
    #[tracing::instrument(skip(self, options))]
    pub async fn audio(&self, word: &str, options: &[QueryOption]) -> Result<Vec<AudioFile>> {
        require_segment("word", word)?;
        let params = QueryParams::with_defaults(&[("useCanonical", "false"), ("limit", "50")]);
        self.get_json(&word_path(word, "/audio"), params, options)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_path_encodes_segment() {
        assert_eq!(word_path("cat", ""), "word.json/cat");
        assert_eq!(
            word_path("ice cream", "/definitions"),
            "word.json/ice%20cream/definitions"
        );
        assert_eq!(word_path("a/b", "/audio"), "word.json/a%2Fb/audio");
    }

    #[test]
    fn test_word_object_deserialize() {
        let json = r#"{"id": 0, "word": "cats", "canonicalForm": "cat", "suggestions": []}"#;
        let word: WordObject = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(word.word, "cats");
        assert_eq!(word.canonical_form.as_deref(), Some("cat"));
        assert!(word.original_word.is_none());
    }

    #[test]
    fn test_word_object_empty() {
        let word: WordObject = serde_json::from_str("{}").expect("Failed to deserialize");
        assert_eq!(word, WordObject::default());
    }

    #[test]
    fn test_definition_deserialize() {
        let json = r#"{
            "word": "potato",
            "text": "A perennial plant.",
            "sourceDictionary": "ahd-5",
            "partOfSpeech": "noun",
            "score": 0.5,
            "labels": [{"text": "botany", "type": "field"}],
            "textProns": [{"raw": "pə-tā′tō", "seq": 0, "rawType": "ahd-5"}]
        }"#;
        let def: Definition = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(def.word, "potato");
        assert_eq!(def.score, 0.5);
        assert_eq!(def.labels[0].label_type.as_deref(), Some("field"));
        assert_eq!(def.text_prons[0].raw_type.as_deref(), Some("ahd-5"));
        assert!(def.has_text());
    }

    #[test]
    fn test_definition_score_string_nan_is_zero() {
        let json = r#"{"word": "dog", "score": "NaN"}"#;
        let def: Definition = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(def.score, 0.0);
    }

    #[test]
    fn test_definition_score_null_or_missing_is_zero() {
        let def: Definition =
            serde_json::from_str(r#"{"score": null}"#).expect("Failed to deserialize");
        assert_eq!(def.score, 0.0);
        let def: Definition = serde_json::from_str("{}").expect("Failed to deserialize");
        assert_eq!(def.score, 0.0);
        assert!(!def.has_text());
    }

    #[test]
    fn test_example_search_results_deserialize() {
        let json = r#"{
            "examples": [{
                "exampleId": 635971537,
                "title": "A Book",
                "text": "He was recalcitrant.",
                "provider": {"id": 711, "name": "gutenberg"},
                "year": 1901
            }],
            "facets": [{"name": "pos", "facetValues": [{"count": 3, "value": "adj"}]}]
        }"#;
        let res: ExampleSearchResults = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(res.examples[0].example_id, 635971537);
        assert_eq!(res.examples[0].provider.as_ref().unwrap().id, 711);
        assert_eq!(res.facets[0].facet_values[0].count, 3);
    }

    #[test]
    fn test_related_word_is() {
        let related: RelatedWord = serde_json::from_str(
            r#"{"relationshipType": "synonym", "words": ["feline", "kitty"]}"#,
        )
        .expect("Failed to deserialize");
        assert!(related.is("synonym"));
        assert!(!related.is("antonym"));
        assert_eq!(related.words.len(), 2);
    }

    #[test]
    fn test_syllable_and_frequency_deserialize() {
        let syl: Syllable =
            serde_json::from_str(r#"{"text": "po", "seq": 0, "type": "stress"}"#).unwrap();
        assert_eq!(syl.syllable_type.as_deref(), Some("stress"));

        let freq: FrequencySummary = serde_json::from_str(
            r#"{"word": "cat", "totalCount": 7, "frequency": [{"year": 1900, "count": 7}]}"#,
        )
        .unwrap();
        assert_eq!(freq.total_count, 7);
        assert_eq!(freq.frequency[0].year, 1900);
    }
}
