use super::matrix::{GEOMATRIX_MAX_INDEX, symbol_position};
use super::{base_lat_interval, base_lon_interval, validate_geohash};
use crate::GeohashError;
use crate::types::{GeoPoint, SplitPolicy};

/// Decodes a Geohash-36 string of 1 to 10 symbols back into a coordinate
/// pair, rounded to `accuracy` decimal digits.
///
/// Every symbol narrows the running longitude and latitude intervals to the
/// band named by its matrix position; the result is the midpoint of the final
/// intervals. Strings shorter than 10 symbols stop narrowing early and yield
/// a coarser coordinate.
///
/// # Errors
/// Returns [`GeohashError::InvalidGeohashFormat`] for an empty, overlong or
/// misspelled input string.
///
/// # Examples
/// ```
/// use geohash36::geocode::decode;
///
/// let point = decode("BB99999999", 2).unwrap();
/// assert_eq!(point.as_tuple(), (54.0, 32.0));
///
/// // a single symbol covers a 30 by 60 degree cell
/// let coarse = decode("l", 6).unwrap();
/// assert_eq!(coarse.as_tuple(), (-15.0, 30.0));
/// ```
pub fn decode(geohash: &str, accuracy: u32) -> Result<GeoPoint, GeohashError> {
	validate_geohash(geohash)?;

	let mut lon = base_lon_interval();
	let mut lat = base_lat_interval();

	for c in geohash.chars() {
		// selection is driven by the symbol's matrix position, so no
		// boundary-ownership policy is needed here
		let lon_bands = lon.split_into_six(SplitPolicy::Closed);
		let lat_bands = lat.split_into_six(SplitPolicy::Closed);

		let (row, col) = symbol_position(c).ok_or(GeohashError::UnknownSymbol(c))?;

		lon = lon_bands[col];
		lat = lat_bands[GEOMATRIX_MAX_INDEX - row];
	}
	log::trace!("\"{geohash}\" narrowed to lon {lon:?}, lat {lat:?}");

	Ok(GeoPoint::new(lat.midpoint(), lon.midpoint())?.rounded(accuracy))
}
