use std::path::Path;

use super::alphabet::{Alphabet, AlphabetBuilder};
use super::counter::AdjacencyCounter;
use super::symbol::Mode;
use super::transition_matrix::TransitionMatrix;
use crate::error::MatrixError;
use crate::io::read_lines;

/// Builds the transition matrix of a word list, one word per line.
///
/// `complete` selects `Mode::Complete` (letters and their diacritic marks are
/// folded into one symbol) or `Mode::Simple` (ASCII letters only).
///
/// # Errors
/// - `MatrixError::Io` if the file cannot be opened or is not valid UTF-8
/// - `MatrixError::SymbolNotFound` if counting meets a symbol the alphabet
///   pass did not collect
pub fn create_matrix<P: AsRef<Path>>(file_path: P, complete: bool) -> Result<TransitionMatrix, MatrixError> {
	create_matrix_with_mode(file_path, Mode::from(complete))
}

/// Same as `create_matrix`, with an explicit `Mode`.
///
/// The file is streamed twice: once to collect the alphabet, once to count.
pub fn create_matrix_with_mode<P: AsRef<Path>>(file_path: P, mode: Mode) -> Result<TransitionMatrix, MatrixError> {
	let file_path = file_path.as_ref();

	let mut builder = AlphabetBuilder::new(mode);
	for line in read_lines(file_path)? {
		builder.add_line(&line?);
	}
	let alphabet = builder.build();
	log::info!("{} alphabet of {} has {} symbols", mode.name(), file_path.display(), alphabet.len());

	let mut counter = AdjacencyCounter::new(&alphabet, mode);
	for line in read_lines(file_path)? {
		counter.add_line(&line?)?;
	}
	let counts = counter.finish();

	let matrix = TransitionMatrix::from_counts(mode, alphabet, &counts);
	log::info!("{}x{} matrix ready for {}", matrix.dimension(), matrix.dimension(), file_path.display());
	Ok(matrix)
}

/// Runs the pipeline over lines already in memory.
pub fn create_matrix_from_lines<I, S>(lines: I, mode: Mode) -> Result<TransitionMatrix, MatrixError>
where
	I: IntoIterator<Item = S>,
	I::IntoIter: Clone,
	S: AsRef<str>,
{
	let lines = lines.into_iter();
	let alphabet = Alphabet::from_lines(lines.clone(), mode);

	let mut counter = AdjacencyCounter::new(&alphabet, mode);
	for line in lines {
		counter.add_line(line.as_ref())?;
	}
	let counts = counter.finish();

	Ok(TransitionMatrix::from_counts(mode, alphabet, &counts))
}
