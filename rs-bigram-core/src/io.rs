use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

/// Opens a text file and streams its lines.
///
/// - Fails at open time if the file is missing or unreadable
/// - Each line is yielded without its `\n` / `\r\n`
/// - A line that is not valid UTF-8 is yielded as an error
pub(crate) fn read_lines<P: AsRef<Path>>(filename: P) -> io::Result<Lines<BufReader<File>>> {
	Ok(BufReader::new(File::open(filename)?).lines())
}

/// Builds an output path based on an input path and a new extension.
///
/// Example:
/// `data/french.dat` + `"complete.bin"` → `data/french.complete.bin`
pub(crate) fn build_output_path<P: AsRef<Path>>(
	input_path: P,
	output_extension: &str,
) -> io::Result<PathBuf> {
	let input_path = input_path.as_ref();

	let parent = input_path.parent().unwrap_or_else(|| Path::new("."));
	let file_stem = input_path
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Input path has no filename"))?;

	let mut output = PathBuf::from(parent);
	output.push(file_stem);
	output.set_extension(output_extension);

	Ok(output)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn output_path_replaces_extension() {
		let path = build_output_path("data/french.dat", "complete.bin").unwrap();
		assert_eq!(path, PathBuf::from("data/french.complete.bin"));
	}

	#[test]
	fn output_path_needs_a_filename() {
		assert!(build_output_path("/", "bin").is_err());
	}

	#[test]
	fn lines_are_streamed_without_endings() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "ab\r\nba\nc").unwrap();
		let lines: Vec<String> = read_lines(file.path()).unwrap().map(Result::unwrap).collect();
		assert_eq!(lines, vec!["ab", "ba", "c"]);
	}

	#[test]
	fn missing_file_fails_at_open() {
		assert!(read_lines("this/file/does/not/exist.dat").is_err());
	}
}
