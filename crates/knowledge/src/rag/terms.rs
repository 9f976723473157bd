//! Question tokenization.

/// Tokens shorter than this many characters are dropped as noise.
pub const MIN_TERM_CHARS: usize = 3;

/// Ordered set of lowercase query terms.
///
/// Iteration order is first-appearance order in the question, which is also
/// the priority order used when anchoring snippets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermSet {
    terms: Vec<String>,
}

impl TermSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a term, lowercased. Returns false if it was already present.
    pub fn insert(&mut self, term: impl AsRef<str>) -> bool {
        let term = term.as_ref().to_lowercase();
        if term.is_empty() || self.terms.contains(&term) {
            return false;
        }
        self.terms.push(term);
        true
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for TermSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TermSet::new();
        for term in iter {
            set.insert(term);
        }
        set
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Normalize a question into query terms.
///
/// Splits on runs of non-word characters, lowercases, and drops tokens
/// shorter than [`MIN_TERM_CHARS`].
pub fn tokenize(question: &str) -> TermSet {
    question
        .split(|c: char| !is_word_char(c))
        .map(str::to_lowercase)
        .filter(|token| token.chars().count() >= MIN_TERM_CHARS)
        .collect()
}
