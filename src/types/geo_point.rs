use crate::GeohashError;
use std::fmt::{self, Debug, Display};

/// A geographic coordinate pair in degrees.
///
/// The constructor enforces latitude within `[-90, 90]` and longitude within
/// `[-180, 180]`, boundary-inclusive, so a `GeoPoint` value is always a valid
/// encoder input.
///
/// # Examples
///
/// ```
/// use geohash36::GeoPoint;
///
/// let point = GeoPoint::new(54.0, 32.0).unwrap();
/// assert_eq!(point.latitude, 54.0);
/// assert_eq!(point.longitude, 32.0);
///
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Default)]
#[allow(clippy::manual_non_exhaustive)]
pub struct GeoPoint {
	pub latitude: f64,
	pub longitude: f64,
	phantom: (),
}

impl GeoPoint {
	/// Creates a new `GeoPoint` from latitude and longitude in degrees.
	///
	/// # Errors
	/// Returns [`GeohashError::InvalidCoordinateRange`] if either value is
	/// outside its domain.
	pub fn new(latitude: f64, longitude: f64) -> Result<GeoPoint, GeohashError> {
		if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
			return Err(GeohashError::InvalidCoordinateRange { latitude, longitude });
		}
		Ok(GeoPoint {
			latitude,
			longitude,
			phantom: (),
		})
	}

	/// Returns the point as a `(latitude, longitude)` tuple.
	#[must_use]
	pub fn as_tuple(&self) -> (f64, f64) {
		(self.latitude, self.longitude)
	}

	/// Returns the point as a `[latitude, longitude]` array.
	#[must_use]
	pub fn as_array(&self) -> [f64; 2] {
		[self.latitude, self.longitude]
	}

	/// Returns a copy with both coordinates rounded to `accuracy` decimal
	/// digits.
	///
	/// # Examples
	/// ```
	/// use geohash36::GeoPoint;
	///
	/// let point = GeoPoint::new(53.9999992, 32.0000019).unwrap();
	/// assert_eq!(point.rounded(2).as_tuple(), (54.0, 32.0));
	/// ```
	#[must_use]
	pub fn rounded(&self, accuracy: u32) -> GeoPoint {
		let scale = 10f64.powi(accuracy as i32);
		GeoPoint {
			latitude: (self.latitude * scale).round() / scale,
			longitude: (self.longitude * scale).round() / scale,
			phantom: (),
		}
	}
}

impl Display for GeoPoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}, {}", self.latitude, self.longitude)
	}
}

impl Debug for GeoPoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "GeoPoint({}, {})", self.latitude, self.longitude)
	}
}

impl TryFrom<(f64, f64)> for GeoPoint {
	type Error = GeohashError;

	/// Converts a `(latitude, longitude)` tuple into a `GeoPoint`.
	fn try_from(input: (f64, f64)) -> Result<Self, Self::Error> {
		GeoPoint::new(input.0, input.1)
	}
}

impl TryFrom<[f64; 2]> for GeoPoint {
	type Error = GeohashError;

	/// Converts a `[latitude, longitude]` array into a `GeoPoint`.
	fn try_from(input: [f64; 2]) -> Result<Self, Self::Error> {
		GeoPoint::new(input[0], input[1])
	}
}

impl TryFrom<Vec<f64>> for GeoPoint {
	type Error = GeohashError;

	/// Converts a vector with exactly two elements `[latitude, longitude]`
	/// into a `GeoPoint`.
	///
	/// # Errors
	/// Returns [`GeohashError::InvalidCoordinateKeys`] if the length is not
	/// exactly two.
	///
	/// # Examples
	/// ```
	/// use geohash36::GeoPoint;
	///
	/// let point = GeoPoint::try_from(vec![54.0, 32.0]).unwrap();
	/// assert_eq!(point.as_tuple(), (54.0, 32.0));
	/// assert!(GeoPoint::try_from(vec![54.0, 32.0, 1.0]).is_err());
	/// ```
	fn try_from(input: Vec<f64>) -> Result<Self, Self::Error> {
		if input.len() != 2 {
			return Err(GeohashError::InvalidCoordinateKeys(input.len()));
		}
		GeoPoint::new(input[0], input[1])
	}
}
