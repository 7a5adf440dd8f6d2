//! Geohash-36 coordinate encoding
//!
//! Converts `(latitude, longitude)` pairs into short strings over a fixed
//! 36-symbol alphabet and back. The encoder narrows the longitude and
//! latitude domains through ten 6-way subdivisions, picking one symbol of a
//! constant 6x6 matrix per step; the decoder mirrors the narrowing and
//! returns the midpoint of the final cell at a caller-chosen decimal
//! accuracy.
//!
//! The stateless conversion functions live in [`geocode`]; [`Geohash`] is a
//! convenience wrapper that keeps both representations synchronized.
//!
//! # Examples
//!
//! ```
//! use geohash36::{GeoPoint, geocode};
//!
//! let point = GeoPoint::new(54.0, 32.0).unwrap();
//! let hash = geocode::encode(&point).unwrap();
//! assert_eq!(hash, "BB99999999");
//!
//! let decoded = geocode::decode(&hash, 2).unwrap();
//! assert_eq!(decoded.as_tuple(), (54.0, 32.0));
//! ```

pub mod geocode;

mod error;
pub use error::GeohashError;

mod types;
pub use types::{GeoPoint, Geohash, GeohashInput, Interval, SplitPolicy};
