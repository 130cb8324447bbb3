use serde::{Deserialize, Serialize};

/// Combining marks folded into the preceding letter in `Mode::Complete`:
/// grave, circumflex, acute, cedilla and diaeresis.
pub const ACCENTS: [char; 5] = ['\u{0300}', '\u{0302}', '\u{0301}', '\u{0327}', '\u{0308}'];

/// How letters followed by a diacritic mark are handled.
///
/// - `Complete`: a letter immediately followed by one of the `ACCENTS` is one
///   symbol (two units wide).
/// - `Simple`: only ASCII base letters are symbols, marks are skipped.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
	#[default]
	Complete,
	Simple,
}

impl Mode {
	/// Short lowercase name, used in cache file names and logs.
	pub fn name(self) -> &'static str {
		match self {
			Mode::Complete => "complete",
			Mode::Simple => "simple",
		}
	}
}

impl From<bool> for Mode {
	fn from(complete: bool) -> Self {
		if complete { Mode::Complete } else { Mode::Simple }
	}
}

/// Base letter class, `[a-z]` case-insensitive.
pub fn is_letter(c: char) -> bool {
	c.is_ascii_alphabetic()
}

/// Whether `c` is one of the recognized combining marks.
pub fn is_accent(c: char) -> bool {
	ACCENTS.contains(&c)
}

/// A symbol found in a word: where it starts, its lowercased text and how many
/// units it spans.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolSpan {
	pub position: usize,
	pub text: String,
	pub width: usize,
}

/// What follows a symbol in a word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Successor {
	/// Text to resolve against the alphabet.
	Symbol(String),
	/// Nothing left but the line ending.
	Terminator,
}

/// One corpus line, line ending stripped, as random-access `char` units.
///
/// All index arithmetic over a line lives here so that the alphabet builder
/// and the adjacency counter agree on what a symbol is.
#[derive(Clone, Debug)]
pub struct Word {
	units: Vec<char>,
}

impl Word {
	/// Builds a word from a raw line. A trailing `\n`, `\r\n` or `\r` is dropped.
	pub fn new(line: &str) -> Self {
		let content = line.strip_suffix('\n').unwrap_or(line);
		let content = content.strip_suffix('\r').unwrap_or(content);
		Self { units: content.chars().collect() }
	}

	/// Number of units before the line ending.
	pub fn len(&self) -> usize {
		self.units.len()
	}

	pub fn is_empty(&self) -> bool {
		self.units.is_empty()
	}

	/// Peeks the unit at `position`, `None` once past the content.
	pub fn unit(&self, position: usize) -> Option<char> {
		self.units.get(position).copied()
	}

	/// A compound word has a hyphen joining two non-empty parts (`arc-en-ciel`).
	pub fn is_compound(&self) -> bool {
		let len = self.units.len();
		len >= 3 && self.units[1..len - 1].contains(&'-')
	}

	/// Resolves the symbol starting at `position`.
	///
	/// Returns `None` when the unit there is not a base letter. Marks are only
	/// ever consumed as the second unit of a symbol, never on their own.
	pub fn symbol_at(&self, position: usize, mode: Mode) -> Option<SymbolSpan> {
		let letter = self.unit(position).filter(|c| is_letter(*c))?;
		let mut text = String::with_capacity(4);
		text.push(letter.to_ascii_lowercase());

		let mut width = 1;
		if mode == Mode::Complete {
			if let Some(mark) = self.unit(position + 1).filter(|c| is_accent(*c)) {
				text.push(mark);
				width = 2;
			}
		}
		Some(SymbolSpan { position, text, width })
	}

	/// Iterates over every symbol of the word, in order.
	pub fn symbols(&self, mode: Mode) -> impl Iterator<Item = SymbolSpan> + '_ {
		(0..self.units.len()).filter_map(move |position| self.symbol_at(position, mode))
	}

	/// Resolves what comes at `position`, right after a symbol's span.
	///
	/// - a base letter resolves to that single lowercased letter, without the
	///   mark that may follow it;
	/// - anything else is skipped in `Mode::Simple` (the unit after it is used),
	///   and read as a two-unit pair in `Mode::Complete`;
	/// - running past the content is the line ending.
	///
	/// The returned text is not checked against any alphabet.
	pub fn successor_after(&self, position: usize, mode: Mode) -> Successor {
		let Some(unit) = self.unit(position) else {
			return Successor::Terminator;
		};

		// A letter stands alone here, even when a mark follows it
		if is_letter(unit) {
			return Successor::Symbol(unit.to_ascii_lowercase().to_string());
		}

		match mode {
			Mode::Simple => match self.unit(position + 1) {
				Some(next) => Successor::Symbol(next.to_lowercase().collect()),
				None => Successor::Terminator,
			},
			Mode::Complete => {
				let end = (position + 2).min(self.units.len());
				let pair: String = self.units[position..end]
					.iter()
					.flat_map(|c| c.to_lowercase())
					.collect();
				Successor::Symbol(pair)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const ACUTE: char = '\u{0301}';

	#[test]
	fn line_endings_are_stripped() {
		assert_eq!(Word::new("ab\n").len(), 2);
		assert_eq!(Word::new("ab\r\n").len(), 2);
		assert_eq!(Word::new("ab").len(), 2);
		assert!(Word::new("\n").is_empty());
	}

	#[test]
	fn compound_words_need_both_parts() {
		assert!(Word::new("arc-en-ciel\n").is_compound());
		assert!(Word::new("a-b").is_compound());
		assert!(!Word::new("-ab\n").is_compound());
		assert!(!Word::new("ab-\n").is_compound());
		assert!(!Word::new("-\n").is_compound());
		assert!(!Word::new("chat\n").is_compound());
	}

	#[test]
	fn symbol_at_folds_accents_in_complete_mode() {
		let word = Word::new("E\u{0301}t\n");

		let complete = word.symbol_at(0, Mode::Complete).unwrap();
		assert_eq!(complete.text, format!("e{ACUTE}"));
		assert_eq!(complete.width, 2);

		let simple = word.symbol_at(0, Mode::Simple).unwrap();
		assert_eq!(simple.text, "e");
		assert_eq!(simple.width, 1);

		// The mark is never a symbol on its own
		assert!(word.symbol_at(1, Mode::Complete).is_none());
	}

	#[test]
	fn symbols_skip_marks_and_punctuation() {
		let word = Word::new("l'e\u{0300}re\n");
		let texts: Vec<String> = word.symbols(Mode::Complete).map(|s| s.text).collect();
		assert_eq!(texts, vec!["l".to_owned(), "e\u{0300}".to_owned(), "r".to_owned(), "e".to_owned()]);

		let positions: Vec<usize> = word.symbols(Mode::Simple).map(|s| s.position).collect();
		assert_eq!(positions, vec![0, 2, 4, 5]);
	}

	#[test]
	fn successor_after_in_simple_mode_skips_one_unit() {
		let word = Word::new("e\u{0301}t\n");
		assert_eq!(word.successor_after(1, Mode::Simple), Successor::Symbol("t".to_owned()));

		let word = Word::new("ab'\n");
		assert_eq!(word.successor_after(2, Mode::Simple), Successor::Terminator);
		assert_eq!(word.successor_after(3, Mode::Simple), Successor::Terminator);
	}

	#[test]
	fn successor_after_in_complete_mode_reads_pairs() {
		let word = Word::new("tE\u{0301}\n");
		assert_eq!(word.successor_after(1, Mode::Complete), Successor::Symbol("e".to_owned()));
		assert_eq!(word.successor_after(1, Mode::Simple), Successor::Symbol("e".to_owned()));

		let word = Word::new("l'a\n");
		assert_eq!(word.successor_after(1, Mode::Complete), Successor::Symbol("'a".to_owned()));
		assert_eq!(word.successor_after(3, Mode::Complete), Successor::Terminator);
	}

	#[test]
	fn mode_from_flag() {
		assert_eq!(Mode::from(true), Mode::Complete);
		assert_eq!(Mode::from(false), Mode::Simple);
		assert_eq!(Mode::default(), Mode::Complete);
	}
}
