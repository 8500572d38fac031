//! List trait for fetching collections of entities.

use async_trait::async_trait;

use crate::client::WordnikClient;
use crate::error::Result;
use crate::pagination::Page;

/// Default page size for list operations.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Maximum pages to fetch (safety limit).
const MAX_PAGES: u32 = 1000;

/// Page through skip/limit collections.
///
/// # Example
///
/// ```ignore
/// use wordnik::{List, WordListWord, WordnikClient};
///
/// let client = WordnikClient::from_env()?;
/// let query = (auth.token.clone(), "my-list".to_string());
///
/// // Fetch a single page
/// let page = WordListWord::list_page(&client, &query, 0, 50).await?;
///
/// // Fetch all pages
/// let all_words = WordListWord::list_all(&client, &query).await?;
/// ```
#[async_trait]
pub trait List: Sized + Send {
    /// What to list (e.g. an auth token, or an auth token and permalink).
    type Query: Send + Sync;

    /// List entities matching the query (single page).
    ///
    /// # Arguments
    ///
    /// * `client` - The Wordnik API client
    /// * `query` - What to list
    /// * `skip` - Number of items to skip
    /// * `limit` - Number of items per page
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn list_page(
        client: &WordnikClient,
        query: &Self::Query,
        skip: u32,
        limit: u32,
    ) -> Result<Page<Self>>;

    /// List all entities matching the query (fetches all pages).
    ///
    /// Pages are fetched until one comes back short.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails.
    async fn list_all(client: &WordnikClient, query: &Self::Query) -> Result<Vec<Self>> {
        let mut all_items = Vec::new();
        let mut skip = 0;
        let mut pages = 0;

        loop {
            let result = Self::list_page(client, query, skip, DEFAULT_PAGE_SIZE).await?;
            let has_more = result.has_more;
            skip = result.next_skip();
            all_items.extend(result.items);

            if !has_more {
                break;
            }

            pages += 1;
            if pages >= MAX_PAGES {
                tracing::warn!("Reached pagination limit of {} pages, stopping", MAX_PAGES);
                break;
            }
        }

        Ok(all_items)
    }
}
