//! The search widget's state machine: query text, typeahead panel and the
//! result/error status.
//!
//! The controller never touches the network itself. [`SearchController::begin_search`]
//! validates and returns a [`PendingSearch`]; the caller runs it against a
//! [`CommentSource`] and hands the outcome back to [`SearchController::complete`].
//! This keeps the controller a plain `&mut self` value that UI runtimes can hold
//! in a signal across the await point.
//!
//! Every issued request gets a ticket. Only the outcome carrying the latest
//! ticket is applied; anything older is dropped.

use tracing::{debug, info};

use crate::config::{SearchConfig, DEFAULT_MAX_RESULTS, DEFAULT_MIN_QUERY_CHARS};
use crate::error::SearchError;
use crate::source::CommentSource;
use crate::suggest::Vocabulary;
use crate::types::{SearchResultItem, SearchStatus};

/// What a finished request produced, before capping.
pub type SearchOutcome = Result<Vec<SearchResultItem>, SearchError>;

/// A validated request waiting to be run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    ticket: u64,
    query: String,
}

impl PendingSearch {
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    /// Trimmed query that will be sent.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Issue the request. Exactly one call to `source` per pending search.
    pub async fn run<S: CommentSource + ?Sized>(&self, source: &S) -> SearchOutcome {
        source.fetch_comments(&self.query).await
    }
}

pub struct SearchController {
    vocabulary: Vocabulary,
    min_query_chars: usize,
    max_results: usize,
    query: String,
    suggestions: Vec<String>,
    suggestions_visible: bool,
    status: SearchStatus,
    latest_ticket: u64,
}

impl SearchController {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
            max_results: DEFAULT_MAX_RESULTS,
            query: String::new(),
            suggestions: Vec::new(),
            suggestions_visible: false,
            status: SearchStatus::Idle,
            latest_ticket: 0,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        let mut controller = Self::new(config.vocabulary.clone());
        controller.min_query_chars = config.min_query_chars;
        controller.max_results = config.max_results;
        controller
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn suggestions_visible(&self) -> bool {
        self.suggestions_visible
    }

    pub fn status(&self) -> &SearchStatus {
        &self.status
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    // -----------------------------------------------------------------------
    // Typeahead
    // -----------------------------------------------------------------------

    /// Replace the query text and refresh suggestions, as the input binding does.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.on_input_change();
    }

    /// Recompute visible suggestions from the current query.
    ///
    /// Editing dismisses any error. An in-flight search or loaded results are kept.
    pub fn on_input_change(&mut self) {
        self.clear_error();

        if self.query.trim().is_empty() {
            self.suggestions.clear();
            self.suggestions_visible = false;
            return;
        }

        self.suggestions = self.vocabulary.matching(&self.query);
        self.suggestions_visible = !self.suggestions.is_empty();
        debug!(query = self.query.as_str(), matches = self.suggestions.len(), "Suggestions updated");
    }

    /// Adopt `term` as the query and start a search for it.
    ///
    /// Selection always triggers a search; the returned request (if validation
    /// passed) must be run and completed by the caller.
    pub fn select_suggestion(&mut self, term: &str) -> Option<PendingSearch> {
        self.query = term.to_string();
        self.suggestions_visible = false;
        self.clear_error();
        self.begin_search()
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Validate the query and move to `Loading`.
    ///
    /// Returns `None` when no request should be made: blank queries reset to
    /// `Idle`, short ones fail validation. Either way any in-flight request is
    /// superseded.
    pub fn begin_search(&mut self) -> Option<PendingSearch> {
        self.suggestions_visible = false;
        self.clear_error();
        self.latest_ticket += 1;

        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            self.status = SearchStatus::Idle;
            return None;
        }
        if trimmed.chars().count() <= self.min_query_chars {
            debug!(query = trimmed, "Query too short, not searching");
            self.status =
                SearchStatus::Failed(SearchError::Validation { min_chars: self.min_query_chars });
            return None;
        }

        let pending = PendingSearch { ticket: self.latest_ticket, query: trimmed.to_string() };
        info!(query = pending.query.as_str(), ticket = pending.ticket, "Searching comments");
        self.status = SearchStatus::Loading;
        Some(pending)
    }

    /// Apply the outcome of the request tagged `ticket`.
    ///
    /// Returns `false` and leaves state untouched when a newer search has been
    /// started since.
    pub fn complete(&mut self, ticket: u64, outcome: SearchOutcome) -> bool {
        if ticket != self.latest_ticket {
            debug!(ticket, latest = self.latest_ticket, "Dropping stale search result");
            return false;
        }

        self.status = match outcome {
            Ok(mut items) => {
                let received = items.len();
                items.truncate(self.max_results);
                debug!(received, kept = items.len(), "Search complete");
                SearchStatus::Loaded(items)
            }
            Err(err) => SearchStatus::Failed(err),
        };
        true
    }

    /// Run a whole search: validate, fetch once, apply.
    pub async fn search<S: CommentSource + ?Sized>(&mut self, source: &S) {
        if let Some(pending) = self.begin_search() {
            let outcome = pending.run(source).await;
            self.complete(pending.ticket, outcome);
        }
    }

    /// [`select_suggestion`](Self::select_suggestion) followed by the fetch.
    pub async fn select_suggestion_and_search<S: CommentSource + ?Sized>(
        &mut self,
        term: &str,
        source: &S,
    ) {
        if let Some(pending) = self.select_suggestion(term) {
            let outcome = pending.run(source).await;
            self.complete(pending.ticket, outcome);
        }
    }

    fn clear_error(&mut self) {
        if matches!(self.status, SearchStatus::Failed(_)) {
            self.status = SearchStatus::Idle;
        }
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(Vocabulary::default())
    }
}
