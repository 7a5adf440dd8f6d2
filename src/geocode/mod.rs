//! Geohash-36 encoding and decoding
//!
//! The stateless conversion entry points of the crate: [`encode`] turns a
//! validated coordinate pair into a 10-character string over the 36-symbol
//! alphabet, [`decode`] turns a string of 1 to 10 symbols back into an
//! approximate coordinate pair at a caller-chosen decimal accuracy.
//!
//! Both directions walk the same constant 6x6 symbol matrix while narrowing a
//! running longitude interval and a running latitude interval in lock-step.
//!
//! # Examples
//!
//! ```
//! use geohash36::{GeoPoint, geocode};
//!
//! let point = GeoPoint::new(54.0, 32.0).unwrap();
//! assert_eq!(geocode::encode(&point).unwrap(), "BB99999999");
//!
//! let decoded = geocode::decode("BB99999999", 2).unwrap();
//! assert_eq!(decoded.as_tuple(), (54.0, 32.0));
//! ```

mod decode;
mod encode;
mod matrix;
mod validate;

pub use decode::decode;
pub use encode::encode;
pub use matrix::{DEFAULT_ACCURACY, GEOCODE_LENGTH, GEOCODE_MATRIX};
pub use validate::validate_geohash;

use crate::types::Interval;

/// The full longitude domain, copied at the start of every conversion.
pub const LONGITUDE_RANGE: [f64; 2] = [-180.0, 180.0];

/// The full latitude domain, copied at the start of every conversion.
pub const LATITUDE_RANGE: [f64; 2] = [-90.0, 90.0];

/// A fresh longitude interval covering the whole domain.
fn base_lon_interval() -> Interval {
	Interval::closed(LONGITUDE_RANGE[0], LONGITUDE_RANGE[1])
}

/// A fresh latitude interval covering the whole domain.
fn base_lat_interval() -> Interval {
	Interval::closed(LATITUDE_RANGE[0], LATITUDE_RANGE[1])
}
