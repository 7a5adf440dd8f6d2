//! Core types: intervals, coordinate pairs and the geohash value object.

mod geo_point;
pub use geo_point::*;

mod geohash;
pub use geohash::*;

mod interval;
pub use interval::*;
