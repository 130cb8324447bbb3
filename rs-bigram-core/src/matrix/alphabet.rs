use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::symbol::{Mode, Word};
use crate::error::MatrixError;

/// Sentinel standing for the virtual predecessor of a word's first symbol.
pub const START: &str = "start";
/// Sentinel standing for the virtual successor of a word's last symbol.
pub const END: &str = "end";

/// Ordered list of symbols labelling the rows and columns of a matrix.
///
/// # Invariants
/// - `START` is at index 0 and `END` at index `len() - 1`
/// - Interior symbols are unique and sorted by their raw text (code point
///   order, so `"e\u{301}"` sits right after `"e"`, before `"f"`)
/// - A symbol's position is its matrix index
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Alphabet {
	symbols: Vec<String>,
	indices: HashMap<String, usize>,
}

impl Alphabet {
	/// Builds an alphabet from in-memory lines.
	pub fn from_lines<I, S>(lines: I, mode: Mode) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut builder = AlphabetBuilder::new(mode);
		for line in lines {
			builder.add_line(line.as_ref());
		}
		builder.build()
	}

	/// Wraps sorted, deduplicated letters with the sentinels.
	fn with_letters<I: IntoIterator<Item = String>>(letters: I) -> Self {
		let symbols: Vec<String> = std::iter::once(START.to_owned())
			.chain(letters)
			.chain(std::iter::once(END.to_owned()))
			.collect();
		let indices = Self::index(&symbols);
		Self { symbols, indices }
	}

	fn index(symbols: &[String]) -> HashMap<String, usize> {
		symbols.iter().enumerate().map(|(i, s)| (s.clone(), i)).collect()
	}

	/// Number of symbols, sentinels included (always >= 2).
	pub fn len(&self) -> usize {
		self.symbols.len()
	}

	/// Always `false`: the sentinels are always there.
	pub fn is_empty(&self) -> bool {
		self.symbols.is_empty()
	}

	pub fn symbols(&self) -> &[String] {
		&self.symbols
	}

	/// Symbol at `index`, if any.
	pub fn symbol(&self, index: usize) -> Option<&str> {
		self.symbols.get(index).map(String::as_str)
	}

	pub fn start_index(&self) -> usize {
		0
	}

	pub fn end_index(&self) -> usize {
		self.symbols.len() - 1
	}

	/// Returns the matrix index of `symbol`.
	///
	/// # Errors
	/// `MatrixError::SymbolNotFound` with the full alphabet if the symbol is
	/// unknown. This means the corpus was not scanned the same way twice and
	/// must not be recovered from.
	pub fn index_of(&self, symbol: &str) -> Result<usize, MatrixError> {
		self.indices.get(symbol).copied().ok_or_else(|| MatrixError::SymbolNotFound {
			symbol: symbol.to_owned(),
			alphabet: self.symbols.clone(),
		})
	}
}

impl TryFrom<Vec<String>> for Alphabet {
	type Error = MatrixError;

	fn try_from(symbols: Vec<String>) -> Result<Self, Self::Error> {
		if symbols.len() < 2 || symbols[0] != START || symbols[symbols.len() - 1] != END {
			return Err(MatrixError::InvalidAlphabet(format!(
				"expected '{START}' first and '{END}' last, got {symbols:?}"
			)));
		}

		let mut seen = HashSet::new();
		if let Some(duplicate) = symbols.iter().find(|s| !seen.insert(s.as_str())) {
			return Err(MatrixError::InvalidAlphabet(format!("duplicate symbol {duplicate:?}")));
		}

		let indices = Self::index(&symbols);
		Ok(Self { symbols, indices })
	}
}

impl From<Alphabet> for Vec<String> {
	fn from(alphabet: Alphabet) -> Self {
		alphabet.symbols
	}
}

/// Collects the symbols of a corpus, one line at a time.
///
/// Compound words are ignored entirely, even when they hold letters found
/// nowhere else.
#[derive(Debug)]
pub struct AlphabetBuilder {
	mode: Mode,
	letters: BTreeSet<String>,
	lines: usize,
	compound_lines: usize,
}

impl AlphabetBuilder {
	pub fn new(mode: Mode) -> Self {
		Self { mode, letters: BTreeSet::new(), lines: 0, compound_lines: 0 }
	}

	/// Adds the symbols of one line (line ending allowed).
	pub fn add_line(&mut self, line: &str) {
		self.lines += 1;
		let word = Word::new(line);
		if word.is_compound() {
			self.compound_lines += 1;
			return;
		}

		for span in word.symbols(self.mode) {
			self.letters.insert(span.text);
		}
	}

	/// Sorts the collected symbols and frames them with `START` and `END`.
	pub fn build(self) -> Alphabet {
		log::debug!(
			"alphabet pass ({}): {} lines read, {} compound lines skipped",
			self.mode.name(),
			self.lines,
			self.compound_lines
		);
		Alphabet::with_letters(self.letters)
	}
}
