//! Comment Search CLI: query the comments API and preview typeahead
//! suggestions from the terminal.
//!
//! Drives `comment-search-core`'s controller exactly as the desktop widget does.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;

use comment_search_core::config::parse_endpoint;
use comment_search_core::{
    load_search_config, read_search_config, HttpCommentSource, SearchConfig, SearchController,
    SearchResultItem, SearchStatus,
};

/// Comment Search CLI: search comments with typeahead suggestions.
#[derive(Parser)]
#[command(name = "comment-search", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    /// Config file (default: .comment-search.toml in the current directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search comments matching a query
    Search {
        /// Search query (must be longer than the configured minimum)
        query: String,

        /// Override the API endpoint
        #[arg(long)]
        endpoint: Option<String>,

        /// Maximum number of results
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show typeahead suggestions for some input text
    Suggest {
        /// Input text
        text: String,
    },
    /// Print the effective configuration
    Config,
}

fn load_config(path: Option<PathBuf>) -> Result<SearchConfig, String> {
    match path {
        Some(path) => read_search_config(&path).map_err(|e| e.to_string()),
        None => {
            let cwd = std::env::current_dir()
                .map_err(|e| format!("could not determine current directory: {e}"))?;
            Ok(load_search_config(&cwd))
        }
    }
}

fn item_json(item: &SearchResultItem, truncate_length: usize) -> serde_json::Value {
    serde_json::json!({
        "id": item.id,
        "name": item.name,
        "email": item.email,
        "body": item.body_preview(truncate_length),
    })
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => error!(error = %e, "Could not serialize output"),
    }
}

/// Typeahead suggestions for `text`, or `None` when nothing matches.
fn suggestions_for(config: &SearchConfig, text: String) -> Option<Vec<String>> {
    let mut controller = SearchController::from_config(config);
    controller.set_query(text);
    let suggestions = controller.suggestions().to_vec();
    (!suggestions.is_empty()).then_some(suggestions)
}

async fn run_search(
    config: SearchConfig,
    query: String,
    endpoint: Option<String>,
    limit: Option<usize>,
    json: bool,
) -> ExitCode {
    let mut config = config;
    if let Some(raw) = endpoint {
        match parse_endpoint(&raw) {
            Ok(url) => config.endpoint = url,
            Err(e) => {
                error!(endpoint = raw.as_str(), error = %e, "Invalid endpoint");
                return ExitCode::FAILURE;
            }
        }
    }
    if let Some(limit) = limit {
        config.max_results = limit.clamp(1, config.max_results);
    }

    let source = match HttpCommentSource::new(config.endpoint.clone()) {
        Ok(s) => s,
        Err(e) => {
            error!(error = %e, "Could not build HTTP client");
            return ExitCode::FAILURE;
        }
    };

    let mut controller = SearchController::from_config(&config);
    controller.set_query(query.as_str());
    controller.search(&source).await;

    match controller.status() {
        SearchStatus::Loaded(items) => {
            if json {
                let items: Vec<_> =
                    items.iter().map(|i| item_json(i, config.truncate_length)).collect();
                print_json(&serde_json::Value::Array(items));
            } else if items.is_empty() {
                eprintln!("No results found for '{}'", query.trim());
            } else {
                for item in items {
                    println!("{} <{}>", item.name(), item.email());
                    println!("    {}", item.body_preview(config.truncate_length));
                }
                eprintln!("\n{} results", items.len());
            }
            ExitCode::SUCCESS
        }
        SearchStatus::Failed(err) => {
            if json {
                print_json(&serde_json::json!({ "error": err.notice(), "detail": err.to_string() }));
            } else {
                eprintln!("{}", err.notice());
            }
            ExitCode::FAILURE
        }
        // Blank query: nothing to search.
        SearchStatus::Idle | SearchStatus::Loading => {
            if json {
                print_json(&serde_json::Value::Array(Vec::new()));
            }
            ExitCode::SUCCESS
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("comment_search=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            error!(error = e.as_str(), "Could not load config");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Search { query, endpoint, limit } => {
            run_search(config, query, endpoint, limit, cli.json).await
        }
        Commands::Suggest { text } => {
            let found = suggestions_for(&config, text);
            let suggestions = found.as_deref().unwrap_or_default();

            if cli.json {
                print_json(&serde_json::json!(suggestions));
            } else if suggestions.is_empty() {
                eprintln!("No suggestions");
            } else {
                for s in suggestions {
                    println!("{s}");
                }
            }
            // No matches is a failure in both output modes.
            if found.is_some() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Commands::Config => {
            if cli.json {
                print_json(&serde_json::json!({
                    "endpoint": config.endpoint.as_str(),
                    "vocabulary": config.vocabulary.terms(),
                    "max_results": config.max_results,
                    "min_query_chars": config.min_query_chars,
                    "truncate_length": config.truncate_length,
                }));
            } else {
                println!("Endpoint:         {}", config.endpoint);
                println!("Max results:      {}", config.max_results);
                println!("Min query chars:  {}", config.min_query_chars);
                println!("Truncate length:  {}", config.truncate_length);
                println!("Vocabulary:       {}", config.vocabulary.terms().join(", "));
            }
            ExitCode::SUCCESS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use comment_search_core::Vocabulary;

    #[test]
    fn test_suggestions_for_match() {
        let config = SearchConfig::default();
        assert_eq!(suggestions_for(&config, "ang".to_string()), Some(vec!["Angular".to_string()]));
    }

    #[test]
    fn test_suggestions_for_no_match_is_none() {
        let config = SearchConfig::default();
        assert_eq!(suggestions_for(&config, "  ang".to_string()), None);
        assert_eq!(suggestions_for(&config, "nonexistentterm".to_string()), None);
        assert_eq!(suggestions_for(&config, String::new()), None);
    }

    #[test]
    fn test_suggestions_for_uses_configured_vocabulary() {
        let config = SearchConfig { vocabulary: Vocabulary::new(["Rust", "Go"]), ..SearchConfig::default() };
        assert_eq!(suggestions_for(&config, "ang".to_string()), None);
        assert_eq!(suggestions_for(&config, "ru".to_string()), Some(vec!["Rust".to_string()]));
    }
}
