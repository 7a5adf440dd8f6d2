use super::matrix::{GEOCODE_LENGTH, GEOCODE_MATRIX, GEOMATRIX_MAX_INDEX};
use super::{base_lat_interval, base_lon_interval};
use crate::types::{GeoPoint, Interval, SplitPolicy};
use crate::GeohashError;
use itertools::Itertools;

/// Encodes a coordinate pair as a 10-character Geohash-36 string.
///
/// At every step the running longitude and latitude intervals are split into
/// six bands, the bands containing the coordinates select a matrix symbol,
/// and both intervals narrow to their selected band.
///
/// # Errors
/// Returns [`GeohashError::EncodingInvariantBroken`] if no band contains a
/// coordinate. This cannot happen for a [`GeoPoint`], whose constructor
/// guarantees the domain.
///
/// # Examples
/// ```
/// use geohash36::{GeoPoint, geocode::encode};
///
/// let origin = GeoPoint::new(0.0, 0.0).unwrap();
/// assert_eq!(encode(&origin).unwrap(), "l222222222");
/// ```
pub fn encode(point: &GeoPoint) -> Result<String, GeohashError> {
	let mut lon = base_lon_interval();
	let mut lat = base_lat_interval();

	(0..GEOCODE_LENGTH)
		.map(|_| next_symbol(&mut lon, &mut lat, point))
		.collect()
}

/// Emits one symbol and narrows both running intervals to the selected bands.
///
/// Longitude bands drop their shared right boundaries, latitude bands their
/// shared left boundaries, so each axis has exactly one matching band.
fn next_symbol(lon: &mut Interval, lat: &mut Interval, point: &GeoPoint) -> Result<char, GeohashError> {
	let lon_bands = lon.split_into_six(SplitPolicy::RightExclusiveExceptLast);
	let lat_bands = lat.split_into_six(SplitPolicy::LeftExclusiveExceptFirst);

	let (lon_index, _) = lon_bands
		.iter()
		.find_position(|band| band.contains(point.longitude))
		.ok_or(GeohashError::EncodingInvariantBroken {
			axis: "longitude",
			value: point.longitude,
		})?;
	let (lat_index, _) = lat_bands
		.iter()
		.find_position(|band| band.contains(point.latitude))
		.ok_or(GeohashError::EncodingInvariantBroken {
			axis: "latitude",
			value: point.latitude,
		})?;

	*lon = lon_bands[lon_index];
	*lat = lat_bands[lat_index];
	log::trace!("narrowed to lon {lon:?}, lat {lat:?}");

	Ok(GEOCODE_MATRIX[GEOMATRIX_MAX_INDEX - lat_index][lon_index])
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geocode::matrix::is_geohash_symbol;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn encode_pair(latitude: f64, longitude: f64) -> String {
		encode(&GeoPoint::new(latitude, longitude).unwrap()).unwrap()
	}

	#[rstest]
	#[case(0.0, 0.0, "l222222222")]
	#[case(54.0, 32.0, "BB99999999")]
	fn known_vectors(#[case] latitude: f64, #[case] longitude: f64, #[case] expected: &str) {
		assert_eq!(encode_pair(latitude, longitude), expected);
	}

	#[test]
	fn output_is_always_ten_matrix_symbols() {
		for (latitude, longitude) in [
			(40.710489, -74.015612),
			(53.907095, 27.558915),
			(40.689167, -74.044444),
			(-33.868820, 151.209296),
		] {
			let geohash = encode_pair(latitude, longitude);
			assert_eq!(geohash.chars().count(), GEOCODE_LENGTH);
			assert!(geohash.chars().all(is_geohash_symbol), "bad symbol in {geohash}");
		}
	}

	#[rstest]
	#[case(90.0, 0.0)]
	#[case(-90.0, 0.0)]
	#[case(0.0, 180.0)]
	#[case(0.0, -180.0)]
	#[case(90.0, 180.0)]
	#[case(-90.0, -180.0)]
	fn outer_edges_of_the_domain_encode(#[case] latitude: f64, #[case] longitude: f64) {
		// the extreme bands stay closed on their outward-facing edge
		let geohash = encode_pair(latitude, longitude);
		assert_eq!(geohash.chars().count(), GEOCODE_LENGTH);
	}

	#[test]
	fn corner_coordinates_select_corner_symbols() {
		// the top-left matrix symbol is the north-west corner of the map
		assert_eq!(encode_pair(90.0, -180.0), "2222222222");
		// the bottom-right matrix symbol is the south-east corner
		assert_eq!(encode_pair(-90.0, 180.0), "XXXXXXXXXX");
	}

	#[test]
	fn first_symbol_reflects_the_coarse_bands() {
		// latitude 54 lies in band 4 of [-90, 90], longitude 32 in band 3 of
		// [-180, 180]; matrix[5 - 4][3] is 'B'
		assert_eq!(encode_pair(54.0, 32.0).chars().next(), Some('B'));
	}
}
