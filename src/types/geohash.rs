use crate::geocode::{self, DEFAULT_ACCURACY};
use crate::types::GeoPoint;
use anyhow::{Context, Result};

/// Input accepted by [`Geohash::new`]: either side of the mapping.
///
/// Resolving the input kind once at the call boundary replaces the runtime
/// type probing a dynamically typed caller would need.
#[derive(Debug, Clone, PartialEq)]
pub enum GeohashInput {
	/// A coordinate pair; the hash is computed from it.
	Point(GeoPoint),
	/// A Geohash-36 string; the coordinates are computed from it.
	Hash(String),
}

impl From<GeoPoint> for GeohashInput {
	fn from(point: GeoPoint) -> Self {
		GeohashInput::Point(point)
	}
}

impl From<&str> for GeohashInput {
	fn from(hash: &str) -> Self {
		GeohashInput::Hash(hash.to_string())
	}
}

impl From<String> for GeohashInput {
	fn from(hash: String) -> Self {
		GeohashInput::Hash(hash)
	}
}

/// A synchronized pair of a Geohash-36 string and its coordinates.
///
/// Reassigning either side recomputes the other, so the two representations
/// never drift apart. The accuracy setting controls the rounding of the
/// coordinate side and defaults to 6 decimal digits.
///
/// # Examples
///
/// ```
/// use geohash36::{GeoPoint, Geohash};
///
/// let mut geohash = Geohash::default();
/// assert_eq!(geohash.hash(), "l222222222");
///
/// geohash.set_point(GeoPoint::new(54.0, 32.0).unwrap()).unwrap();
/// assert_eq!(geohash.hash(), "BB99999999");
///
/// geohash.set_accuracy(2);
/// geohash.set_hash("BB99999999").unwrap();
/// assert_eq!(geohash.point().as_tuple(), (54.0, 32.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Geohash {
	hash: String,
	point: GeoPoint,
	accuracy: u32,
}

impl Geohash {
	/// Creates a `Geohash` from either a coordinate pair or a hash string.
	pub fn new(input: impl Into<GeohashInput>) -> Result<Geohash> {
		match input.into() {
			GeohashInput::Point(point) => Geohash::from_point(point),
			GeohashInput::Hash(hash) => Geohash::from_hash(&hash),
		}
	}

	/// Creates a `Geohash` from a coordinate pair, computing its hash.
	pub fn from_point(point: GeoPoint) -> Result<Geohash> {
		Ok(Geohash {
			hash: geocode::encode(&point)?,
			point,
			accuracy: DEFAULT_ACCURACY,
		})
	}

	/// Creates a `Geohash` from a hash string, computing its coordinates at
	/// the default accuracy.
	pub fn from_hash(hash: &str) -> Result<Geohash> {
		Ok(Geohash {
			point: geocode::decode(hash, DEFAULT_ACCURACY).with_context(|| format!("failed to decode \"{hash}\""))?,
			hash: hash.to_string(),
			accuracy: DEFAULT_ACCURACY,
		})
	}

	/// The current hash string.
	#[must_use]
	pub fn hash(&self) -> &str {
		&self.hash
	}

	/// The current coordinates, rounded to the current accuracy.
	#[must_use]
	pub fn point(&self) -> GeoPoint {
		self.point
	}

	/// The current accuracy in decimal digits.
	#[must_use]
	pub fn accuracy(&self) -> u32 {
		self.accuracy
	}

	/// Replaces the hash and recomputes the coordinates at the current
	/// accuracy.
	pub fn set_hash(&mut self, hash: &str) -> Result<()> {
		self.point = geocode::decode(hash, self.accuracy).with_context(|| format!("failed to decode \"{hash}\""))?;
		self.hash = hash.to_string();
		Ok(())
	}

	/// Replaces the coordinates and recomputes the hash.
	pub fn set_point(&mut self, point: GeoPoint) -> Result<()> {
		self.hash = geocode::encode(&point)?;
		self.point = point;
		Ok(())
	}

	/// Sets the accuracy used when the hash side is next reassigned.
	pub fn set_accuracy(&mut self, accuracy: u32) {
		self.accuracy = accuracy;
	}
}

impl Default for Geohash {
	/// The origin: coordinates `(0, 0)` and their hash `"l222222222"`.
	fn default() -> Geohash {
		Geohash {
			hash: String::from("l222222222"),
			point: GeoPoint::default(),
			accuracy: DEFAULT_ACCURACY,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn default_matches_the_encoded_origin() {
		let geohash = Geohash::default();
		assert_eq!(geohash.hash(), geocode::encode(&GeoPoint::default()).unwrap());
		assert_eq!(geohash.point().as_tuple(), (0.0, 0.0));
		assert_eq!(geohash.accuracy(), DEFAULT_ACCURACY);
	}

	#[test]
	fn new_dispatches_on_the_input_kind() {
		let from_point = Geohash::new(GeoPoint::new(54.0, 32.0).unwrap()).unwrap();
		assert_eq!(from_point.hash(), "BB99999999");

		let from_hash = Geohash::new("BB99999999").unwrap();
		assert_eq!(from_hash.hash(), "BB99999999");
		assert_eq!(from_hash.point().rounded(2).as_tuple(), (54.0, 32.0));
	}

	#[test]
	fn new_rejects_a_malformed_hash() {
		assert!(Geohash::new("Z2222").is_err());
		assert!(Geohash::from_hash("").is_err());
	}

	#[test]
	fn setting_the_hash_updates_the_point() {
		let mut geohash = Geohash::default();
		geohash.set_accuracy(2);
		geohash.set_hash("BB99999999").unwrap();
		assert_eq!(geohash.point().as_tuple(), (54.0, 32.0));
	}

	#[test]
	fn setting_the_point_updates_the_hash() {
		let mut geohash = Geohash::default();
		geohash.set_point(GeoPoint::new(54.0, 32.0).unwrap()).unwrap();
		assert_eq!(geohash.hash(), "BB99999999");
		assert_eq!(geohash.point().as_tuple(), (54.0, 32.0));
	}

	#[test]
	fn a_failed_hash_update_leaves_the_value_unchanged() {
		let mut geohash = Geohash::default();
		assert!(geohash.set_hash("not a hash").is_err());
		assert_eq!(geohash.hash(), "l222222222");
		assert_eq!(geohash.point().as_tuple(), (0.0, 0.0));
	}
}
