use thiserror::Error;

/// Error type for alphabet building, counting and matrix persistence.
///
/// `SymbolNotFound` is never expected under correct sequencing: the alphabet
/// is built from the same corpus that is counted afterwards. When it shows up,
/// the builder and the counter disagree on what a symbol is, so it carries
/// the whole alphabet to make the mismatch visible.
#[derive(Debug, Error)]
pub enum MatrixError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("symbol {symbol:?} not found in alphabet {alphabet:?}")]
	SymbolNotFound { symbol: String, alphabet: Vec<String> },

	#[error("invalid alphabet: {0}")]
	InvalidAlphabet(String),

	#[error("matrix has {cells} cells, expected {expected} for its alphabet")]
	DimensionMismatch { cells: usize, expected: usize },

	#[error("serialization error: {0}")]
	Serialization(#[from] postcard::Error),
}
