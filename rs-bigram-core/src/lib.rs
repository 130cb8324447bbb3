//! Letter bigram matrix library.
//!
//! This crate builds a character transition matrix from a word list:
//! - Alphabet extraction, with or without diacritic folding
//! - Position-aware adjacency counting with `start` / `end` sentinels
//! - Per-column normalization into percentages
//! - Binary persistence of the resulting matrix
//!
//! The matrix is meant as an input for letter-bigram text generators.

/// Alphabet, counting, normalization and the resulting matrix.
pub mod matrix;

/// Error type shared by the whole crate.
pub mod error;

/// I/O utilities (line streaming, path helpers).
///
/// Not exposed
pub(crate) mod io;

pub use error::MatrixError;
pub use matrix::alphabet::{Alphabet, END, START};
pub use matrix::pipeline::{create_matrix, create_matrix_from_lines, create_matrix_with_mode};
pub use matrix::symbol::Mode;
pub use matrix::transition_matrix::TransitionMatrix;
