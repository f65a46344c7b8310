//! Search module for the Gobang AI
//!
//! Contains:
//! - Candidate generation with forcing-move buckets
//! - Negamax search with alpha-beta pruning

pub mod candidates;
pub mod negamax;

pub use candidates::{generate, Candidate};
pub use negamax::{SearchResult, Searcher};
