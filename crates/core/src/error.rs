//! Error types for searching and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Why a search produced no results.
///
/// `Display` carries diagnostic detail for logs; [`SearchError::notice`] is the
/// fixed text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Query too short after trimming. Reported before any request is made.
    #[error("query must be longer than {min_chars} characters")]
    Validation { min_chars: usize },
    /// The API answered with a status outside 2xx.
    #[error("comments API returned status {status}")]
    HttpStatus { status: u16 },
    /// The API answered 2xx but the body was not a JSON array of comments.
    #[error("could not decode comments payload: {message}")]
    Parse { message: String },
    /// The request never produced a response.
    #[error("comments request failed: {message}")]
    Network { message: String },
}

impl SearchError {
    /// Fixed user-facing notice for this error.
    pub fn notice(&self) -> String {
        match self {
            SearchError::Validation { min_chars } => {
                format!("Please enter more than {min_chars} characters to search")
            }
            SearchError::HttpStatus { .. } => {
                "Error fetching search results. Please try again.".to_string()
            }
            SearchError::Parse { .. } => "Error processing search results.".to_string(),
            SearchError::Network { .. } => {
                "Network error fetching search results. Please try again.".to_string()
            }
        }
    }
}

/// Errors raised while loading an explicitly requested config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value for '{key}': {reason}")]
    InvalidValue { key: &'static str, reason: String },
}
