//! `.comment-search.toml` loading.
//!
//! ```toml
//! endpoint = "https://jsonplaceholder.typicode.com"
//! vocabulary = ["Rust", "Go", "Zig"]
//! max_results = 20
//! min_query_chars = 3
//! truncate_length = 64
//! ```

use std::path::Path;

use reqwest::Url;
use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::suggest::Vocabulary;
use crate::text::DEFAULT_TRUNCATE_LENGTH;

pub const CONFIG_FILE_NAME: &str = ".comment-search.toml";
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_MAX_RESULTS: usize = 20;
pub const DEFAULT_MIN_QUERY_CHARS: usize = 3;

/// Known keys in `.comment-search.toml` for config validation.
const KNOWN_CONFIG_KEYS: &[&str] =
    &["endpoint", "vocabulary", "max_results", "min_query_chars", "truncate_length"];

/// Effective settings for the widget and its front-ends.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Base URL; requests go to `<endpoint>/comments`.
    pub endpoint: Url,
    pub vocabulary: Vocabulary,
    /// Cap on the number of results kept from one response.
    pub max_results: usize,
    /// Queries this long or shorter (after trimming) are rejected.
    pub min_query_chars: usize,
    /// Character budget for result bodies in lists.
    pub truncate_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            vocabulary: Vocabulary::default(),
            max_results: DEFAULT_MAX_RESULTS,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
            truncate_length: DEFAULT_TRUNCATE_LENGTH,
        }
    }
}

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Load `.comment-search.toml` from `dir`, falling back to defaults.
///
/// A missing file is not an error. An unreadable or invalid file logs a warning
/// and yields the defaults.
pub fn load_search_config(dir: &Path) -> SearchConfig {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        debug!(path = %path.display(), "No config file, using defaults");
        return SearchConfig::default();
    }
    match read_search_config(&path) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "Ignoring {CONFIG_FILE_NAME}");
            SearchConfig::default()
        }
    }
}

/// Read a config file that must exist and be valid.
pub fn read_search_config(path: &Path) -> Result<SearchConfig, ConfigError> {
    debug!(path = %path.display(), "Loading config");
    let content = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
    let table = content
        .parse::<toml::Table>()
        .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
    config_from_table(&table)
}

/// Merge a parsed table over the defaults.
pub fn config_from_table(table: &toml::Table) -> Result<SearchConfig, ConfigError> {
    warn_unknown_keys(table);
    let mut config = SearchConfig::default();

    if let Some(value) = table.get("endpoint") {
        let raw = value.as_str().ok_or_else(|| invalid("endpoint", "expected a string"))?;
        config.endpoint = parse_endpoint(raw)?;
    }

    if let Some(value) = table.get("vocabulary") {
        let items = value.as_array().ok_or_else(|| invalid("vocabulary", "expected an array"))?;
        let terms = items
            .iter()
            .map(|v| v.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| invalid("vocabulary", "every entry must be a string"))?;
        config.vocabulary = Vocabulary::new(terms);
    }

    if let Some(n) = read_count(table, "max_results")? {
        if n == 0 {
            return Err(invalid("max_results", "must be at least 1"));
        }
        config.max_results = n;
    }
    if let Some(n) = read_count(table, "min_query_chars")? {
        config.min_query_chars = n;
    }
    if let Some(n) = read_count(table, "truncate_length")? {
        config.truncate_length = n;
    }

    Ok(config)
}

/// Parse an API base URL. Only `http` and `https` are accepted.
pub fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| invalid("endpoint", e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("endpoint", format!("unsupported scheme '{}'", url.scheme())));
    }
    Ok(url)
}

fn read_count(table: &toml::Table, key: &'static str) -> Result<Option<usize>, ConfigError> {
    let Some(value) = table.get(key) else {
        return Ok(None);
    };
    let n = value.as_integer().ok_or_else(|| invalid(key, "expected an integer"))?;
    usize::try_from(n).map(Some).map_err(|_| invalid(key, "must not be negative"))
}

fn invalid(key: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue { key, reason: reason.into() }
}

/// Closest known key within edit distance 3, for typo hints.
fn suggest_key(key: &str) -> Option<&'static str> {
    KNOWN_CONFIG_KEYS
        .iter()
        .copied()
        .min_by_key(|k| edit_distance(key, k))
        .filter(|k| edit_distance(key, k) <= 3)
}

/// Keys in `table` that this loader does not recognise.
fn unknown_keys(table: &toml::Table) -> Vec<&str> {
    table.keys().map(String::as_str).filter(|k| !KNOWN_CONFIG_KEYS.contains(k)).collect()
}

fn warn_unknown_keys(table: &toml::Table) {
    for key in unknown_keys(table) {
        match suggest_key(key) {
            Some(s) => {
                warn!(key, suggestion = s, "Unknown config key, did you mean '{s}'?");
            }
            None => {
                warn!(
                    key,
                    "Unknown config key (known keys: {})",
                    KNOWN_CONFIG_KEYS.join(", ")
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn table(src: &str) -> toml::Table {
        src.parse().unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.endpoint.as_str(), "https://jsonplaceholder.typicode.com/");
        assert_eq!(config.max_results, 20);
        assert_eq!(config.min_query_chars, 3);
        assert_eq!(config.truncate_length, 64);
        assert_eq!(config.vocabulary, Vocabulary::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from_table(&table(
            r#"
            endpoint = "http://localhost:8080/api"
            vocabulary = ["Rust", "Go"]
            max_results = 5
            min_query_chars = 1
            truncate_length = 32
            "#,
        ))
        .unwrap();
        assert_eq!(config.endpoint.as_str(), "http://localhost:8080/api");
        assert_eq!(config.vocabulary.terms(), ["Rust", "Go"]);
        assert_eq!(config.max_results, 5);
        assert_eq!(config.min_query_chars, 1);
        assert_eq!(config.truncate_length, 32);
    }

    #[test]
    fn test_unknown_keys_are_not_fatal() {
        let config = config_from_table(&table("max_result = 5")).unwrap();
        assert_eq!(config.max_results, DEFAULT_MAX_RESULTS);
    }

    #[test]
    fn test_unknown_keys_are_detected() {
        let t = table("max_result = 5\nendpoint = \"http://localhost\"\ncolour = \"red\"");
        let mut unknown = unknown_keys(&t);
        unknown.sort_unstable();
        assert_eq!(unknown, ["colour", "max_result"]);
    }

    #[test]
    fn test_suggest_key() {
        assert_eq!(suggest_key("max_result"), Some("max_results"));
        assert_eq!(suggest_key("endpiont"), Some("endpoint"));
        assert_eq!(suggest_key("vocab"), None);
        assert_eq!(suggest_key("completely_unrelated"), None);
    }

    #[test]
    fn test_parse_endpoint() {
        assert_eq!(parse_endpoint("https://example.com/api").unwrap().as_str(), "https://example.com/api");
        assert!(parse_endpoint("http://localhost:3000").is_ok());
        for raw in ["ftp://x", "file:///tmp/comments", "not a url"] {
            let err = parse_endpoint(raw).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { key: "endpoint", .. }), "{raw}: {err}");
        }
    }

    #[test]
    fn test_invalid_values() {
        for src in [
            "endpoint = 3",
            "endpoint = \"not a url\"",
            "endpoint = \"ftp://example.com\"",
            "vocabulary = \"Rust\"",
            "vocabulary = [\"Rust\", 1]",
            "max_results = 0",
            "max_results = -1",
            "min_query_chars = \"three\"",
        ] {
            let err = config_from_table(&table(src)).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { .. }), "{src}: {err}");
        }
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("max_result", "max_results"), 1);
        assert_eq!(edit_distance("endpoint", "endpoint"), 0);
        assert_eq!(edit_distance("", "abc"), 3);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_search_config(dir.path());
        assert_eq!(config.max_results, DEFAULT_MAX_RESULTS);
    }

    #[test]
    fn test_load_from_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "max_results = 7\n").unwrap();
        assert_eq!(load_search_config(dir.path()).max_results, 7);
    }

    #[test]
    fn test_load_broken_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "max_results = [").unwrap();
        assert_eq!(load_search_config(dir.path()).max_results, DEFAULT_MAX_RESULTS);
    }

    #[test]
    fn test_read_reports_errors() {
        let dir = TempDir::new().unwrap();
        let missing = read_search_config(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Read { .. }));

        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "= oops").unwrap();
        let bad = read_search_config(&path).unwrap_err();
        assert!(matches!(bad, ConfigError::Parse { .. }));
    }
}
