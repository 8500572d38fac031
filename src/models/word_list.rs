//! Word list models and the `wordList.json` / `wordLists.json` endpoints.
//!
//! Every call here acts on behalf of a user and needs the token from
//! [`WordnikClient::authenticate`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::{json_body, WordnikClient};
use crate::error::{require, require_segment, Result};
use crate::pagination::Page;
use crate::query::{QueryOption, QueryParams};
use crate::traits::List;

/// A user's word list.
///
/// Also used as the request body when creating or updating a list; unset
/// fields are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordList {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: i64,

    /// Path-safe identifier used in list URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub user_id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub number_words_in_list: i64,

    /// "PUBLIC" or "PRIVATE".
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub list_type: Option<String>,
}

/// A word stored in a word list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordListWord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub number_comments_on_word: i64,
    #[serde(default)]
    pub number_lists: i64,
}

/// Body entry for adding or removing words.
#[derive(Debug, Serialize)]
struct WordEntry<'a> {
    #[serde(skip_serializing_if = "is_blank")]
    word: &'a str,
}

fn is_blank(word: &&str) -> bool {
    word.is_empty()
}

/// Query type for listing the words of a list: `(auth token, permalink)`.
pub type WordListWordsQuery = (String, String);

fn is_zero(n: &i64) -> bool {
    *n == 0
}

impl WordList {
    /// Create a new list description with a name and visibility.
    pub fn new(name: impl Into<String>, list_type: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            list_type: Some(list_type.into()),
            ..Default::default()
        }
    }

    /// Returns true if the list is private.
    pub fn is_private(&self) -> bool {
        self.list_type.as_deref() == Some("PRIVATE")
    }
}

fn list_path(permalink: &str, resource: &str) -> String {
    format!("wordList.json/{}{}", urlencoding::encode(permalink), resource)
}

fn words_body(words: &[&str]) -> Result<Vec<u8>> {
    let entries: Vec<WordEntry<'_>> = words.iter().map(|&word| WordEntry { word }).collect();
    json_body(&entries)
}

impl WordnikClient {
    /// Create a word list for the user owning `auth_token`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::WordnikError::InvalidArgument`] for an empty token.
    #[tracing::instrument(skip_all)]
    pub async fn create_word_list(&self, auth_token: &str, list: &WordList) -> Result<WordList> {
        require("auth token", auth_token)?;
        let request = self.form_user_request(
            "wordLists.json",
            &QueryParams::new(),
            "POST",
            Some(json_body(list)?),
            auth_token,
        )?;
        self.execute(request).await
    }

    /// Fetch a word list by permalink.
    #[tracing::instrument(skip(self, auth_token))]
    pub async fn word_list(&self, auth_token: &str, permalink: &str) -> Result<WordList> {
        require("auth token", auth_token)?;
        require_segment("permalink", permalink)?;
        let request = self.form_user_request(
            &list_path(permalink, ""),
            &QueryParams::new(),
            "GET",
            None,
            auth_token,
        )?;
        self.execute(request).await
    }

    /// Replace a word list's metadata.
    #[tracing::instrument(skip(self, auth_token, list))]
    pub async fn update_word_list(
        &self,
        auth_token: &str,
        permalink: &str,
        list: &WordList,
    ) -> Result<()> {
        require("auth token", auth_token)?;
        require_segment("permalink", permalink)?;
        let request = self.form_user_request(
            &list_path(permalink, ""),
            &QueryParams::new(),
            "PUT",
            Some(json_body(list)?),
            auth_token,
        )?;
        self.execute_unit(request).await
    }

    /// Delete a word list.
    #[tracing::instrument(skip(self, auth_token))]
    pub async fn delete_word_list(&self, auth_token: &str, permalink: &str) -> Result<()> {
        require("auth token", auth_token)?;
        require_segment("permalink", permalink)?;
        let request = self.form_user_request(
            &list_path(permalink, ""),
            &QueryParams::new(),
            "DELETE",
            None,
            auth_token,
        )?;
        self.execute_unit(request).await
    }

    /// Get the words in a list.
    ///
    /// Defaults: `sortBy=createDate`, `sortOrder=desc`, `skip=0`,
    /// `limit=100`.
    #[tracing::instrument(skip(self, auth_token, options))]
    pub async fn word_list_words(
        &self,
        auth_token: &str,
        permalink: &str,
        options: &[QueryOption],
    ) -> Result<Vec<WordListWord>> {
        require("auth token", auth_token)?;
        require_segment("permalink", permalink)?;
        let mut params = QueryParams::with_defaults(&[
            ("sortBy", "createDate"),
            ("sortOrder", "desc"),
            ("skip", "0"),
            ("limit", "100"),
        ]);
        params.apply(options);
        let request = self.form_user_request(
            &list_path(permalink, "/words"),
            &params,
            "GET",
            None,
            auth_token,
        )?;
        self.execute(request).await
    }

    /// Add words to a list.
    #[tracing::instrument(skip(self, auth_token))]
    pub async fn add_words_to_word_list(
        &self,
        auth_token: &str,
        permalink: &str,
        words: &[&str],
    ) -> Result<()> {
        require("auth token", auth_token)?;
        require_segment("permalink", permalink)?;
        let request = self.form_user_request(
            &list_path(permalink, "/words"),
            &QueryParams::new(),
            "POST",
            Some(words_body(words)?),
            auth_token,
        )?;
        self.execute_unit(request).await
    }

    /// Remove words from a list.
    #[tracing::instrument(skip(self, auth_token))]
    pub async fn delete_words_from_word_list(
        &self,
        auth_token: &str,
        permalink: &str,
        words: &[&str],
    ) -> Result<()> {
        require("auth token", auth_token)?;
        require_segment("permalink", permalink)?;
        let request = self.form_user_request(
            &list_path(permalink, "/deleteWords"),
            &QueryParams::new(),
            "POST",
            Some(words_body(words)?),
            auth_token,
        )?;
        self.execute_unit(request).await
    }
}

#[async_trait]
impl List for WordList {
    type Query = String; // Auth token

    #[tracing::instrument(skip(client, query))]
    async fn list_page(
        client: &WordnikClient,
        query: &Self::Query,
        skip: u32,
        limit: u32,
    ) -> Result<Page<Self>> {
        let lists = client
            .word_lists_for_user(
                query,
                &[
                    QueryOption::skip(i64::from(skip)),
                    QueryOption::limit(i64::from(limit)),
                ],
            )
            .await?;
        Ok(Page::new(lists, skip, limit))
    }
}

#[async_trait]
impl List for WordListWord {
    type Query = WordListWordsQuery;

    #[tracing::instrument(skip(client, query))]
    async fn list_page(
        client: &WordnikClient,
        query: &Self::Query,
        skip: u32,
        limit: u32,
    ) -> Result<Page<Self>> {
        let (auth_token, permalink) = query;
        let words = client
            .word_list_words(
                auth_token,
                permalink,
                &[
                    QueryOption::skip(i64::from(skip)),
                    QueryOption::limit(i64::from(limit)),
                ],
            )
            .await?;
        Ok(Page::new(words, skip, limit))
    }
}
