use super::matrix::{GEOCODE_LENGTH, is_geohash_symbol};
use crate::GeohashError;

/// Checks that `geohash` is a well-formed Geohash-36 string: 1 to 10
/// characters, all of them symbols of the 6x6 matrix.
///
/// # Errors
/// Returns [`GeohashError::InvalidGeohashFormat`] otherwise.
///
/// # Examples
/// ```
/// use geohash36::geocode::validate_geohash;
///
/// assert!(validate_geohash("BB99999999").is_ok());
/// assert!(validate_geohash("").is_err());
/// assert!(validate_geohash("Z2222").is_err());
/// ```
pub fn validate_geohash(geohash: &str) -> Result<(), GeohashError> {
	let length = geohash.chars().count();
	if length == 0 || length > GEOCODE_LENGTH || !geohash.chars().all(is_geohash_symbol) {
		return Err(GeohashError::InvalidGeohashFormat(geohash.to_string()));
	}
	Ok(())
}
