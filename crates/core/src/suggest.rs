//! Typeahead vocabulary and case-insensitive substring filtering.

use std::sync::Arc;

/// Terms offered when no vocabulary is configured.
pub const DEFAULT_VOCABULARY: &[&str] = &[
    "Angular", "React", "Vue", "JavaScript", "TypeScript",
    "HTML", "CSS", "SCSS", "Node.js", "Express",
    "MongoDB", "MySQL", "PostgreSQL", "Python", "Lorem", "Java",
    "C#", "PHP", "Ruby", "Swift", "Kotlin",
];

/// Immutable, ordered list of suggestion terms. Cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Arc<[String]>,
    /// Lowercased copies, index-aligned with `terms`.
    folded: Arc<[String]>,
}

impl Vocabulary {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        let folded: Vec<String> = terms.iter().map(|t| t.to_lowercase()).collect();
        Self { terms: terms.into(), folded: folded.into() }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms containing `query` case-insensitively, in vocabulary order.
    ///
    /// A blank query (empty after trimming) matches nothing. A non-blank query is
    /// matched as typed, surrounding whitespace included.
    pub fn matching(&self, query: &str) -> Vec<String> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.terms
            .iter()
            .zip(self.folded.iter())
            .filter(|(_, folded)| folded.contains(&needle))
            .map(|(term, _)| term.clone())
            .collect()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_VOCABULARY.iter().copied())
    }
}
