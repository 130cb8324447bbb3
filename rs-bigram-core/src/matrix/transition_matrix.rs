use std::path::Path;

use serde::{Deserialize, Serialize};

use super::alphabet::Alphabet;
use super::counter::CountMatrix;
use super::normalizer::normalize;
use super::pipeline::create_matrix_with_mode;
use super::symbol::Mode;
use crate::error::MatrixError;
use crate::io::build_output_path;

/// Percentage transition matrix together with the alphabet labelling it.
///
/// Cell `(successor, predecessor)` holds the percentage of the predecessor's
/// transitions that lead to the successor. Every column sums to about 100,
/// or to 0 when its symbol never precedes anything (always the case for `end`).
///
/// The matrix is immutable once built.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TransitionMatrix {
	mode: Mode,
	alphabet: Alphabet,
	/// Row-major, `alphabet.len()` squared cells
	cells: Vec<f64>,
}

impl TransitionMatrix {
	/// Normalizes raw counts into the final matrix.
	pub(crate) fn from_counts(mode: Mode, alphabet: Alphabet, counts: &CountMatrix) -> Self {
		let cells = normalize(counts);
		Self { mode, alphabet, cells }
	}

	/// Builds the matrix for `corpus`, or loads it from the binary cache lying
	/// next to it (`<stem>.<mode>.bin`).
	///
	/// - Loads the cache if it exists.
	/// - Otherwise runs the full pipeline and writes the cache.
	///
	/// The cache is not invalidated when the corpus changes; delete it to rebuild.
	pub fn load_or_create<P: AsRef<Path>>(corpus: P, mode: Mode) -> Result<Self, MatrixError> {
		let cache_path = build_output_path(&corpus, &format!("{}.bin", mode.name()))?;
		if cache_path.exists() {
			log::debug!("loading cached matrix from {}", cache_path.display());
			let matrix = Self::load(&cache_path)?;
			if matrix.mode == mode {
				return Ok(matrix);
			}
			log::warn!("cached matrix {} was built in another mode, rebuilding", cache_path.display());
		}

		let matrix = create_matrix_with_mode(&corpus, mode)?;
		matrix.save(&cache_path)?;
		log::debug!("cached matrix written to {}", cache_path.display());
		Ok(matrix)
	}

	/// Serializes the matrix with `postcard`.
	pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), MatrixError> {
		let bytes = postcard::to_stdvec(self)?;
		std::fs::write(path, bytes)?;
		Ok(())
	}

	/// Deserializes a matrix written by `save`.
	///
	/// # Errors
	/// Besides I/O and decoding errors, fails with `DimensionMismatch` if the
	/// cell count does not match the alphabet.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, MatrixError> {
		let bytes = std::fs::read(path)?;
		let matrix: Self = postcard::from_bytes(&bytes)?;

		let expected = matrix.alphabet.len() * matrix.alphabet.len();
		if matrix.cells.len() != expected {
			return Err(MatrixError::DimensionMismatch { cells: matrix.cells.len(), expected });
		}
		Ok(matrix)
	}

	pub fn mode(&self) -> Mode {
		self.mode
	}

	pub fn alphabet(&self) -> &Alphabet {
		&self.alphabet
	}

	/// Side of the matrix, equal to the alphabet size.
	pub fn dimension(&self) -> usize {
		self.alphabet.len()
	}

	/// Percentage at `(successor, predecessor)`.
	///
	/// # Panics
	/// If either index is out of bounds.
	pub fn get(&self, successor: usize, predecessor: usize) -> f64 {
		let dimension = self.dimension();
		assert!(successor < dimension && predecessor < dimension, "index out of bounds");
		self.cells[successor * dimension + predecessor]
	}

	/// Percentage of `predecessor` being followed by `successor`, by symbol.
	pub fn probability(&self, successor: &str, predecessor: &str) -> Result<f64, MatrixError> {
		let row = self.alphabet.index_of(successor)?;
		let col = self.alphabet.index_of(predecessor)?;
		Ok(self.get(row, col))
	}

	/// All percentages for one predecessor, indexed by successor.
	pub fn column(&self, predecessor: usize) -> Vec<f64> {
		(0..self.dimension()).map(|row| self.get(row, predecessor)).collect()
	}

	/// Successors of `symbol` with a non-zero percentage, most likely first.
	///
	/// Ties keep alphabet order.
	pub fn successors(&self, symbol: &str) -> Result<Vec<(&str, f64)>, MatrixError> {
		let col = self.alphabet.index_of(symbol)?;
		let mut successors: Vec<(&str, f64)> = self
			.alphabet
			.symbols()
			.iter()
			.enumerate()
			.map(|(row, successor)| (successor.as_str(), self.get(row, col)))
			.filter(|(_, percentage)| *percentage > 0.0)
			.collect();
		successors.sort_by(|a, b| b.1.total_cmp(&a.1));
		Ok(successors)
	}

	/// The matrix as rows (successors) of columns (predecessors).
	pub fn rows(&self) -> Vec<Vec<f64>> {
		self.cells.chunks(self.dimension()).map(<[f64]>::to_vec).collect()
	}

	/// Splits the matrix into its alphabet and its rows.
	pub fn into_parts(self) -> (Alphabet, Vec<Vec<f64>>) {
		let rows = self.rows();
		(self.alphabet, rows)
	}
}
