//! Evidence selection policies.

use crate::rag::score::{ScoredDocument, TermMatcher};
use crate::rag::terms::TermSet;
use docqa_core::{Document, SelectionPolicy};

/// Choose the documents relevant to `terms` under `policy`.
///
/// - An empty term set selects nothing.
/// - `BestMatch` keeps the single highest-scoring document; the first-seen
///   document wins ties.
/// - `AllRelevant` keeps every document containing at least one term as a
///   whole word, in the order given.
///
/// A document scoring zero is never selected.
pub fn select(
    documents: &[Document],
    terms: &TermSet,
    policy: SelectionPolicy,
) -> Vec<ScoredDocument> {
    if terms.is_empty() {
        tracing::debug!("Empty term set, selecting no documents");
        return Vec::new();
    }

    let matcher = TermMatcher::new(terms);
    let scored = documents.iter().map(|document| ScoredDocument {
        document: document.clone(),
        score: matcher.score(&document.content),
    });

    let selected: Vec<ScoredDocument> = match policy {
        SelectionPolicy::BestMatch => {
            let mut best: Option<ScoredDocument> = None;
            for candidate in scored {
                let best_score = best.as_ref().map_or(0, |b| b.score);
                if candidate.score > best_score {
                    best = Some(candidate);
                }
            }
            best.into_iter().collect()
        }
        SelectionPolicy::AllRelevant => scored.filter(|s| s.score > 0).collect(),
    };

    tracing::debug!(
        "Policy {} selected {} of {} documents",
        policy,
        selected.len(),
        documents.len()
    );

    selected
}
