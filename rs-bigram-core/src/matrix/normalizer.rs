use super::counter::CountMatrix;

/// Turns raw counts into per-column percentages, row-major.
///
/// Each cell becomes `raw / column_sum * 100`, rounded to two decimals (ties
/// to even). A column that was never a predecessor stays all zero. Because of
/// the rounding, a non-zero column sums to 100 only within a few hundredths.
pub fn normalize(counts: &CountMatrix) -> Vec<f64> {
	let dimension = counts.dimension();
	let mut cells = vec![0.0; dimension * dimension];

	for col in 0..dimension {
		let total = match counts.column_sum(col) {
			0 => 1.0,
			sum => sum as f64,
		};
		for row in 0..dimension {
			let raw = counts.get(row, col) as f64;
			cells[row * dimension + col] = (raw / total * 10000.0).round_ties_even() / 100.0;
		}
	}

	cells
}
