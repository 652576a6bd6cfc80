//! Outbound port for fetching comments, plus its reqwest-backed adapter.
//!
//! The adapter owns transport details only: URL building, status mapping and
//! JSON decoding. Capping the result list is the controller's job.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::SearchError;
use crate::types::SearchResultItem;

const USER_AGENT: &str = concat!("comment-search/", env!("CARGO_PKG_VERSION"));

/// Characters left unescaped in a query component: alphanumerics plus `-_.!~*'()`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Anything that can answer a comment query.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentSource: Send + Sync {
    /// Fetch every comment matching `query`. `query` is already trimmed and validated.
    async fn fetch_comments(&self, query: &str) -> Result<Vec<SearchResultItem>, SearchError>;
}

/// Comment source backed by `GET <endpoint>/comments?q=<query>`.
#[derive(Debug, Clone)]
pub struct HttpCommentSource {
    client: Client,
    endpoint: Url,
}

impl HttpCommentSource {
    /// Build a source for `endpoint`. No request timeout is applied.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(client, endpoint))
    }

    /// Build a source around an existing client, e.g. one shared with other callers.
    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl CommentSource for HttpCommentSource {
    async fn fetch_comments(&self, query: &str) -> Result<Vec<SearchResultItem>, SearchError> {
        let url = comments_url(self.endpoint.as_str(), query);
        debug!(url = url.as_str(), "Fetching comments");

        let response = self.client.get(&url).send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        decode_response(status.as_u16(), &body)
    }
}

/// Full request URL for `query` against `endpoint`.
pub fn comments_url(endpoint: &str, query: &str) -> String {
    format!(
        "{}/comments?q={}",
        endpoint.trim_end_matches('/'),
        utf8_percent_encode(query, QUERY_COMPONENT)
    )
}

/// Classify a completed HTTP response.
///
/// Statuses outside 2xx fail without looking at the body. A 2xx body must be a
/// JSON array; its elements are passed through leniently.
pub fn decode_response(status: u16, body: &[u8]) -> Result<Vec<SearchResultItem>, SearchError> {
    if !(200..300).contains(&status) {
        warn!(status, "Comments API returned an error status");
        return Err(SearchError::HttpStatus { status });
    }
    let values = serde_json::from_slice::<Vec<Value>>(body).map_err(|e| {
        warn!(error = %e, "Comments payload is not a JSON array");
        SearchError::Parse { message: e.to_string() }
    })?;
    Ok(values.iter().map(SearchResultItem::from_json).collect())
}

fn map_transport_error(error: reqwest::Error) -> SearchError {
    warn!(error = %error, "Comments request failed");
    SearchError::Network { message: error.to_string() }
}
