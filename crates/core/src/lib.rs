//! Comment Search: typeahead suggestions and a comment search controller.
//!
//! This crate holds everything the widget does apart from drawing it: the
//! suggestion filter, the search state machine, the HTTP adapter for the
//! comments API and config loading. Front-ends (CLI, desktop) own rendering.
//!
//! # Modules
//!
//! - [`controller`]: Query/suggestion/status state machine with request tickets
//! - [`suggest`]: Vocabulary and case-insensitive substring filtering
//! - [`source`]: `CommentSource` port and the reqwest adapter
//! - [`types`]: Result items and the widget status variant
//! - [`text`]: Character-count truncation for result bodies
//! - [`config`]: `.comment-search.toml` loading
//! - [`error`]: Search and config error types

pub mod config;
pub mod controller;
pub mod error;
pub mod source;
pub mod suggest;
pub mod text;
pub mod types;

pub use config::{load_search_config, read_search_config, SearchConfig};
pub use controller::{PendingSearch, SearchController, SearchOutcome};
pub use error::{ConfigError, SearchError};
pub use source::{CommentSource, HttpCommentSource};
pub use suggest::Vocabulary;
pub use text::truncate_text;
pub use types::{SearchResultItem, SearchStatus};

/// HTTP types re-exported so front-ends need no direct reqwest dependency.
pub use reqwest::{Error as HttpError, Url};
