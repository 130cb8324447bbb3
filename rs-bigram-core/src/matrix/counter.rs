use super::alphabet::Alphabet;
use super::symbol::{Mode, Successor, SymbolSpan, Word};
use crate::error::MatrixError;

/// Raw transition counts.
///
/// Cell `(row, col)` counts how many times the symbol at `col` was followed
/// by the symbol at `row`. Rows are successors, columns predecessors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountMatrix {
	dimension: usize,
	counts: Vec<u64>,
}

impl CountMatrix {
	/// Zero-filled square matrix.
	pub fn new(dimension: usize) -> Self {
		Self { dimension, counts: vec![0; dimension * dimension] }
	}

	pub fn dimension(&self) -> usize {
		self.dimension
	}

	/// Count at `(successor, predecessor)`.
	pub fn get(&self, row: usize, col: usize) -> u64 {
		self.counts[row * self.dimension + col]
	}

	/// Number of transitions leaving the predecessor `col`.
	pub fn column_sum(&self, col: usize) -> u64 {
		(0..self.dimension).map(|row| self.get(row, col)).sum()
	}

	fn increment(&mut self, row: usize, col: usize) {
		self.counts[row * self.dimension + col] += 1;
	}
}

/// Counts symbol adjacencies line by line against a fixed alphabet.
///
/// For every symbol of a non-compound word:
/// - at position 0, `start -> symbol` is counted, then `symbol -> successor`
///   (`end` if the word holds a single symbol);
/// - when its span reaches the end of the content, `symbol -> end`;
/// - otherwise `symbol -> successor`.
///
/// Every symbol is therefore counted once as a predecessor, and `start` once
/// per word beginning with a letter.
pub struct AdjacencyCounter<'a> {
	alphabet: &'a Alphabet,
	mode: Mode,
	matrix: CountMatrix,
	lines: usize,
	compound_lines: usize,
}

impl<'a> AdjacencyCounter<'a> {
	pub fn new(alphabet: &'a Alphabet, mode: Mode) -> Self {
		Self { alphabet, mode, matrix: CountMatrix::new(alphabet.len()), lines: 0, compound_lines: 0 }
	}

	/// Counts the transitions of one line (line ending allowed).
	///
	/// # Errors
	/// `MatrixError::SymbolNotFound` if a symbol of the line is missing from
	/// the alphabet. The counts of that line are left partially applied; the
	/// error is not meant to be recovered from.
	pub fn add_line(&mut self, line: &str) -> Result<(), MatrixError> {
		self.lines += 1;
		let word = Word::new(line);
		if word.is_compound() {
			self.compound_lines += 1;
			return Ok(());
		}

		for span in word.symbols(self.mode) {
			self.add_symbol(&word, &span)?;
		}
		Ok(())
	}

	fn add_symbol(&mut self, word: &Word, span: &SymbolSpan) -> Result<(), MatrixError> {
		let current = self.alphabet.index_of(&span.text)?;
		let next_position = span.position + span.width;

		if span.position == 0 {
			self.matrix.increment(current, self.alphabet.start_index());
			match word.successor_after(next_position, self.mode) {
				Successor::Symbol(text) => {
					let next = self.alphabet.index_of(&text)?;
					self.matrix.increment(next, current);
				}
				Successor::Terminator => self.matrix.increment(self.alphabet.end_index(), current),
			}
		} else if next_position == word.len() {
			self.matrix.increment(self.alphabet.end_index(), current);
		} else {
			match word.successor_after(next_position, self.mode) {
				Successor::Symbol(text) => {
					let next = self.alphabet.index_of(&text)?;
					self.matrix.increment(next, current);
				}
				// Only reachable when a skipped unit runs into the line ending.
				Successor::Terminator if self.mode == Mode::Simple => {
					self.matrix.increment(self.alphabet.end_index(), current);
				}
				// Unreachable: a successor only runs past the content when the span
				// itself ends the word, which the branch above already counts.
				// Complete mode records nothing here.
				Successor::Terminator => {}
			}
		}
		Ok(())
	}

	/// Returns the raw counts.
	pub fn finish(self) -> CountMatrix {
		log::debug!(
			"counting pass ({}): {} lines read, {} compound lines skipped",
			self.mode.name(),
			self.lines,
			self.compound_lines
		);
		self.matrix
	}
}
