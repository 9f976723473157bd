//! Whole-word relevance scoring.

use crate::rag::terms::TermSet;
use docqa_core::Document;
use regex::{Regex, RegexBuilder};

/// A document paired with its relevance score for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredDocument {
    pub document: Document,

    /// Total whole-word occurrences of all query terms
    pub score: usize,
}

/// Precompiled whole-word matchers for a term set.
///
/// Each term is escaped before it is embedded in a `\b...\b` pattern, so
/// user-controlled input never changes the pattern's meaning.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    patterns: Vec<Regex>,
}

impl TermMatcher {
    pub fn new(terms: &TermSet) -> Self {
        let patterns = terms
            .iter()
            .filter_map(|term| {
                RegexBuilder::new(&format!(r"\b{}\b", regex::escape(term)))
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| tracing::warn!("Skipping unmatchable term {:?}: {}", term, e))
                    .ok()
            })
            .collect();

        Self { patterns }
    }

    /// Sum of whole-word, case-insensitive occurrences of every term in `text`.
    pub fn score(&self, text: &str) -> usize {
        self.patterns
            .iter()
            .map(|pattern| pattern.find_iter(text).count())
            .sum()
    }

    /// Byte offset of the earliest whole-word occurrence of any term.
    pub fn first_match(&self, text: &str) -> Option<usize> {
        self.patterns
            .iter()
            .filter_map(|pattern| pattern.find(text).map(|m| m.start()))
            .min()
    }
}

/// Score `text` against `terms`. See [`TermMatcher`] for matching rules.
pub fn score(text: &str, terms: &TermSet) -> usize {
    TermMatcher::new(terms).score(text)
}
