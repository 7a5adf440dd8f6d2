use lazy_static::lazy_static;
use std::collections::HashMap;

/// The constant 6x6 Geohash-36 symbol matrix.
///
/// The row index encodes a latitude band and the column index a longitude
/// band. Rows are numbered top to bottom while latitude bands are numbered
/// bottom to top, so `matrix[5 - lat_index][lon_index]` selects the symbol
/// for a pair of band indices.
pub const GEOCODE_MATRIX: [[char; 6]; 6] = [
	['2', '3', '4', '5', '6', '7'],
	['8', '9', 'b', 'B', 'C', 'd'],
	['D', 'F', 'g', 'G', 'h', 'H'],
	['j', 'J', 'K', 'l', 'L', 'M'],
	['n', 'N', 'P', 'q', 'Q', 'r'],
	['R', 't', 'T', 'V', 'W', 'X'],
];

/// Highest row/column index of the matrix.
pub(crate) const GEOMATRIX_MAX_INDEX: usize = 5;

/// Number of symbols in a full-precision geohash.
pub const GEOCODE_LENGTH: usize = 10;

/// Default number of decimal digits for decoded coordinates.
pub const DEFAULT_ACCURACY: u32 = 6;

lazy_static! {
	/// Reverse lookup from a symbol to its `(row, column)` matrix position.
	static ref SYMBOL_POSITIONS: HashMap<char, (usize, usize)> = GEOCODE_MATRIX
		.iter()
		.enumerate()
		.flat_map(|(row, symbols)| symbols.iter().enumerate().map(move |(col, &c)| (c, (row, col))))
		.collect();
}

/// Returns the `(row, column)` position of `c` in the matrix, if any.
pub(crate) fn symbol_position(c: char) -> Option<(usize, usize)> {
	SYMBOL_POSITIONS.get(&c).copied()
}

/// Tests whether `c` is one of the 36 Geohash-36 symbols.
pub(crate) fn is_geohash_symbol(c: char) -> bool {
	SYMBOL_POSITIONS.contains_key(&c)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn all_36_symbols_are_pairwise_distinct() {
		assert_eq!(SYMBOL_POSITIONS.len(), 36);
	}

	#[test]
	fn symbol_position_matches_the_matrix() {
		for (row, symbols) in GEOCODE_MATRIX.iter().enumerate() {
			for (col, &c) in symbols.iter().enumerate() {
				assert_eq!(symbol_position(c), Some((row, col)));
			}
		}
	}

	#[test]
	fn symbols_outside_the_alphabet_are_unknown() {
		for c in ['0', '1', 'a', 'A', 'Z', 'z', ' ', 'ö'] {
			assert_eq!(symbol_position(c), None);
			assert!(!is_geohash_symbol(c));
		}
	}
}
