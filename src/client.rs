//! Wordnik API client.
//!
//! Low-level HTTP client that builds requests and decodes responses.
//! Endpoint wrappers live next to the models they return.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, Request};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::{Result, WordnikError};
use crate::query::{QueryOption, QueryParams};

const DEFAULT_API_URL: &str = "https://api.wordnik.com/v4/";
const USER_AGENT: &str = concat!("wordnik-rs/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "api_key";

/// Header carrying the user's auth token on account-scoped requests.
pub const AUTH_TOKEN_HEADER: &str = "auth_token";

/// Low-level Wordnik API client.
///
/// Holds the API key, the base URL and an HTTP client with a fixed
/// 10-second timeout. Nothing changes after construction, so one client can
/// serve concurrent calls.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use wordnik::WordnikClient;
///
/// # fn example() -> wordnik::Result<()> {
/// // Create from environment variables
/// let client = WordnikClient::from_env()?;
///
/// // Or configure manually
/// let client = WordnikClient::new("your-api-key")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct WordnikClient {
    http: Client,
    base_url: Arc<Url>,
    api_key: HeaderValue,
}

impl std::fmt::Debug for WordnikClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordnikClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl WordnikClient {
    /// Create a client from environment variables.
    ///
    /// Uses `WORDNIK_API_KEY` for authentication and optionally
    /// `WORDNIK_API_URL` for the base URL (defaults to
    /// `https://api.wordnik.com/v4/`).
    ///
    /// # Errors
    ///
    /// Returns an error if `WORDNIK_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("WORDNIK_API_KEY").map_err(|_| {
            WordnikError::ConfigMissing(
                "WORDNIK_API_KEY environment variable not set".to_string(),
            )
        })?;

        let base_url =
            env::var("WORDNIK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::with_base_url(&api_key, &base_url)
    }

    /// Create a client for the public Wordnik API.
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be sent as a header value.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_API_URL)
    }

    /// Create a client with the provided API key and base URL.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Wordnik API key
    /// * `base_url` - Base URL for the API (e.g., `https://api.wordnik.com/v4`)
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the key cannot be sent
    /// as a header value.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self> {
        // Ensure base URL ends with / so relative paths append
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let mut api_key = HeaderValue::from_str(api_key).map_err(|_| {
            WordnikError::InvalidArgument("API key is not a valid header value".to_string())
        })?;
        api_key.set_sensitive(true);

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            api_key,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a request without sending it.
    ///
    /// `path` is resolved against the base URL, `params` becomes the query
    /// string (keys sorted) and the `api_key` and `Content-Type` headers are
    /// set.
    ///
    /// # Errors
    ///
    /// Returns [`WordnikError::InvalidRequest`] if `method` is not an HTTP
    /// verb or the path cannot be resolved.
    pub fn form_request(
        &self,
        path: &str,
        params: &QueryParams,
        method: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Request> {
        let method = parse_method(method)?;

        let mut url = self.base_url.join(path)?;
        let query = params.encode();
        url.set_query((!query.is_empty()).then_some(query.as_str()));

        let mut request = Request::new(method, url);
        let headers = request.headers_mut();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), self.api_key.clone());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(body) = body {
            *request.body_mut() = Some(body.into());
        }

        Ok(request)
    }

    /// Execute a request and decode the JSON body into `T`.
    ///
    /// The status code is not inspected; an error payload that does not fit
    /// `T` surfaces as [`WordnikError::Decode`].
    #[tracing::instrument(
        skip(self, request),
        fields(method = %request.method(), path = request.url().path())
    )]
    pub async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        let response = self.http.execute(request).await?;
        tracing::debug!(status = %response.status(), "response received");

        let body = response.bytes().await?;
        decode_body(&body)
    }

    /// Execute a request whose response body is not needed.
    #[tracing::instrument(
        skip(self, request),
        fields(method = %request.method(), path = request.url().path())
    )]
    pub async fn execute_unit(&self, request: Request) -> Result<()> {
        let response = self.http.execute(request).await?;
        tracing::debug!(status = %response.status(), "response received");
        Ok(())
    }

    /// GET `path` with endpoint defaults overridden by `options`.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        mut params: QueryParams,
        options: &[QueryOption],
    ) -> Result<T> {
        params.apply(options);
        let request = self.form_request(path, &params, "GET", None)?;
        self.execute(request).await
    }

    /// Build a request scoped to the user owning `auth_token`.
    pub(crate) fn form_user_request(
        &self,
        path: &str,
        params: &QueryParams,
        method: &str,
        body: Option<Vec<u8>>,
        auth_token: &str,
    ) -> Result<Request> {
        let mut request = self.form_request(path, params, method, body)?;
        let mut token = HeaderValue::from_str(auth_token).map_err(|_| {
            WordnikError::InvalidArgument("auth token is not a valid header value".to_string())
        })?;
        token.set_sensitive(true);
        request
            .headers_mut()
            .insert(HeaderName::from_static(AUTH_TOKEN_HEADER), token);
        Ok(request)
    }
}

/// Serialize a request body as JSON.
pub(crate) fn json_body<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>> {
    serde_json::to_vec(body)
        .map_err(|e| WordnikError::InvalidRequest(format!("failed to encode body: {e}")))
}

fn parse_method(token: &str) -> Result<Method> {
    match token {
        "GET" => Ok(Method::GET),
        "HEAD" => Ok(Method::HEAD),
        "POST" => Ok(Method::POST),
        "PUT" => Ok(Method::PUT),
        "DELETE" => Ok(Method::DELETE),
        "PATCH" => Ok(Method::PATCH),
        "OPTIONS" => Ok(Method::OPTIONS),
        _ => Err(WordnikError::InvalidRequest(format!(
            "unrecognized HTTP method '{token}'"
        ))),
    }
}

/// Decode a response body, tolerating a bare `NaN` definition score.
///
/// The API sometimes emits `"score": NaN`, which is not JSON. When the
/// first parse fails on syntax, those values are rewritten to `null` (read
/// back as `0.0`) and the body is parsed once more.
pub(crate) fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    match serde_json::from_slice(body) {
        Ok(value) => Ok(value),
        Err(err) if err.is_syntax() => match scrub_nan_scores(body) {
            Some(scrubbed) => {
                tracing::debug!("replaced NaN score values before decoding");
                Ok(serde_json::from_slice(&scrubbed)?)
            }
            None => Err(err.into()),
        },
        Err(err) => Err(err.into()),
    }
}

fn scrub_nan_scores(body: &[u8]) -> Option<Vec<u8>> {
    const KEY: &[u8] = br#""score""#;

    let mut out = Vec::with_capacity(body.len());
    let mut replaced = false;
    let mut i = 0;

    while i < body.len() {
        if body[i..].starts_with(KEY) {
            let mut j = skip_whitespace(body, i + KEY.len());
            if body.get(j) == Some(&b':') {
                j = skip_whitespace(body, j + 1);
                if body[j..].starts_with(b"NaN") {
                    out.extend_from_slice(&body[i..j]);
                    out.extend_from_slice(b"null");
                    i = j + 3;
                    replaced = true;
                    continue;
                }
            }
        }
        out.push(body[i]);
        i += 1;
    }

    replaced.then_some(out)
}

fn skip_whitespace(body: &[u8], mut i: usize) -> usize {
    while body.get(i).is_some_and(u8::is_ascii_whitespace) {
        i += 1;
    }
    i
}
