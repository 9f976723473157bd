//! Document store and question answering.
//!
//! Documents live in a [`DocumentStore`]; [`AnswerService`] retrieves the
//! ones relevant to a question and asks the LLM to answer from them alone.

pub mod rag;
pub mod store;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use rag::{AnswerOptions, AnswerOutcome, AnswerResult, AnswerService};
pub use store::{DocumentStore, MemoryStore, SqliteStore};
