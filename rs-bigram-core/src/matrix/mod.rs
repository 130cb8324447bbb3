//! Letter transition matrix construction.
//!
//! The matrix is built in three passes over a word list:
//! - Alphabet building (`Alphabet`, `AlphabetBuilder`)
//! - Adjacency counting (`AdjacencyCounter`, `CountMatrix`)
//! - Column normalization into percentages (`TransitionMatrix`)
//!
//! `pipeline` chains them for a file or an in-memory corpus.

/// Ordered symbol list framed by the `start` / `end` sentinels.
///
/// Provides the index mapping shared by every row and column of a matrix.
pub mod alphabet;

/// Raw adjacency counting, line by line.
pub mod counter;

/// Count-to-percentage conversion.
mod normalizer;

/// High-level entry points reading a corpus file or in-memory lines.
pub mod pipeline;

/// Character classification shared by the alphabet builder and the counter.
///
/// Letters, diacritic marks, compound words, and symbol resolution at a
/// given position of a word.
pub mod symbol;

/// Final percentage matrix, its lookups and its binary persistence.
pub mod transition_matrix;
