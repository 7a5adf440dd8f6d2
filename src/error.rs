use std::{error::Error, fmt};

/// Errors produced by the Geohash-36 engine.
///
/// The first three variants are user-facing validation failures and are raised
/// before any interval narrowing happens. `EncodingInvariantBroken` and
/// `UnknownSymbol` indicate a bug in the partitioning logic and never occur
/// for input that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum GeohashError {
	/// Latitude or longitude outside `[-90, 90]` / `[-180, 180]`.
	InvalidCoordinateRange { latitude: f64, longitude: f64 },
	/// A coordinate sequence did not contain exactly two values.
	InvalidCoordinateKeys(usize),
	/// A geohash string containing a disallowed character or with a length
	/// outside `1..=10`.
	InvalidGeohashFormat(String),
	/// An interval was constructed with `lo > hi`.
	InvalidRange { lo: f64, hi: f64 },
	/// No band of the running interval contained the coordinate.
	EncodingInvariantBroken { axis: &'static str, value: f64 },
	/// A symbol that is not part of the 6x6 matrix.
	UnknownSymbol(char),
}

impl fmt::Display for GeohashError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			GeohashError::InvalidCoordinateRange { latitude, longitude } => {
				write!(
					f,
					"coordinates ({latitude}, {longitude}) must be within latitude [-90, 90] and longitude [-180, 180]"
				)
			}
			GeohashError::InvalidCoordinateKeys(count) => {
				write!(f, "coordinates must have exactly 2 values (latitude, longitude), got {count}")
			}
			GeohashError::InvalidGeohashFormat(geohash) => {
				write!(f, "\"{geohash}\" is not a Geohash-36 string (1 to 10 symbols of the 6x6 matrix)")
			}
			GeohashError::InvalidRange { lo, hi } => {
				write!(f, "interval lo ({lo}) must be <= hi ({hi})")
			}
			GeohashError::EncodingInvariantBroken { axis, value } => {
				write!(f, "no {axis} band contains {value}; the interval partition is broken")
			}
			GeohashError::UnknownSymbol(c) => {
				write!(f, "symbol '{c}' is not part of the Geohash-36 matrix")
			}
		}
	}
}

impl Error for GeohashError {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_messages_contain_offending_values() {
		let error = GeohashError::InvalidCoordinateRange {
			latitude: 91.0,
			longitude: 0.0,
		};
		assert!(error.to_string().contains("(91, 0)"));

		let error = GeohashError::InvalidGeohashFormat("Z2222".to_string());
		assert!(error.to_string().contains("\"Z2222\""));

		let error = GeohashError::InvalidRange { lo: 5.0, hi: 3.0 };
		assert_eq!(error.to_string(), "interval lo (5) must be <= hi (3)");

		let error = GeohashError::UnknownSymbol('Z');
		assert!(error.to_string().contains("'Z'"));
	}

	#[test]
	fn converts_into_anyhow_error() {
		fn fails() -> anyhow::Result<()> {
			Err(GeohashError::InvalidCoordinateKeys(3))?;
			Ok(())
		}
		let error = fails().unwrap_err();
		assert!(error.downcast_ref::<GeohashError>().is_some());
	}
}
