//! Numeric intervals with per-side boundary inclusion
//!
//! This module provides the [`Interval`] type used by the Geohash-36 engine to
//! narrow the longitude and latitude domains step by step. An interval knows
//! whether each of its two boundaries belongs to it, can test membership, and
//! can split itself into three or six consecutive bands.
//!
//! # Examples
//!
//! ```
//! use geohash36::{Interval, SplitPolicy};
//!
//! let interval = Interval::new(0.0, 6.0).unwrap();
//! assert_eq!(interval.midpoint(), 3.0);
//! assert_eq!(interval.third_width(), 2.0);
//!
//! let bands = interval.split_into_six(SplitPolicy::Closed);
//! assert_eq!(bands[0].midpoint(), 0.5);
//! assert_eq!(bands[5].midpoint(), 5.5);
//! ```

use crate::GeohashError;
use std::fmt::{self, Debug, Display};

/// Boundary-ownership policy applied when splitting an interval into six bands.
///
/// `Closed` keeps every band closed on both sides and is sufficient when band
/// selection is driven by a known matrix index. The two exclusive policies make
/// the six bands a true partition of the parent range: every point of the
/// parent belongs to exactly one band, including the two outer edges, so
/// membership testing is unambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitPolicy {
	/// Every band is closed on both sides.
	Closed,
	/// Bands are left-closed and right-open; the last band is also right-closed.
	RightExclusiveExceptLast,
	/// Bands are left-open and right-closed; the first band is also left-closed.
	LeftExclusiveExceptFirst,
}

/// A numeric range `[lo, hi]` with independently configurable inclusion of its
/// left and right boundary.
///
/// Intervals are immutable after construction; every narrowing step of the
/// Geohash-36 engine produces fresh interval values. The invariant `lo <= hi`
/// is enforced by the constructors.
///
/// # Examples
///
/// ```
/// use geohash36::Interval;
///
/// let interval = Interval::with_bounds(0.0, 6.0, true, false).unwrap();
/// assert!(interval.contains(0.0));
/// assert!(interval.contains(2.0));
/// assert!(!interval.contains(6.0));
/// assert_eq!(format!("{interval}"), "[0, 6)");
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Interval {
	lo: f64,
	hi: f64,
	include_left: bool,
	include_right: bool,
}

impl Interval {
	/// Creates a new interval closed on both sides.
	///
	/// # Errors
	/// Returns [`GeohashError::InvalidRange`] if `lo > hi`.
	pub fn new(lo: f64, hi: f64) -> Result<Interval, GeohashError> {
		Interval::with_bounds(lo, hi, true, true)
	}

	/// Creates a new interval with explicit boundary inclusion flags.
	///
	/// # Errors
	/// Returns [`GeohashError::InvalidRange`] if `lo > hi`.
	pub fn with_bounds(lo: f64, hi: f64, include_left: bool, include_right: bool) -> Result<Interval, GeohashError> {
		if lo > hi {
			return Err(GeohashError::InvalidRange { lo, hi });
		}
		Ok(Interval {
			lo,
			hi,
			include_left,
			include_right,
		})
	}

	/// Creates a closed interval without checking `lo <= hi`.
	///
	/// Only for callers that guarantee the invariant themselves, like the
	/// splitting methods below.
	pub(crate) const fn closed(lo: f64, hi: f64) -> Interval {
		Interval {
			lo,
			hi,
			include_left: true,
			include_right: true,
		}
	}

	/// The lower boundary.
	#[must_use]
	pub fn lo(&self) -> f64 {
		self.lo
	}

	/// The upper boundary.
	#[must_use]
	pub fn hi(&self) -> f64 {
		self.hi
	}

	/// Whether the lower boundary belongs to the interval.
	#[must_use]
	pub fn include_left(&self) -> bool {
		self.include_left
	}

	/// Whether the upper boundary belongs to the interval.
	#[must_use]
	pub fn include_right(&self) -> bool {
		self.include_right
	}

	/// Tests whether `x` lies within the interval, honoring the boundary
	/// inclusion flags.
	///
	/// # Examples
	/// ```
	/// use geohash36::Interval;
	///
	/// let interval = Interval::new(0.0, 6.0).unwrap();
	/// assert!(interval.contains(0.0));
	/// assert!(interval.contains(6.0));
	/// assert!(!interval.contains(9.0));
	/// ```
	#[must_use]
	pub fn contains(&self, x: f64) -> bool {
		let left_ok = if self.include_left { self.lo <= x } else { self.lo < x };
		let right_ok = if self.include_right { x <= self.hi } else { x < self.hi };
		left_ok && right_ok
	}

	/// The arithmetic middle of the interval.
	#[must_use]
	pub fn midpoint(&self) -> f64 {
		(self.lo + self.hi) / 2.0
	}

	/// One third of the interval width.
	#[must_use]
	pub fn third_width(&self) -> f64 {
		((self.hi - self.lo) / 3.0).abs()
	}

	/// Splits the interval into three consecutive ascending thirds.
	///
	/// The resulting intervals are closed on both sides; a boundary policy is
	/// applied by [`split_into_six`](Self::split_into_six).
	///
	/// # Examples
	/// ```
	/// use geohash36::Interval;
	///
	/// let thirds = Interval::new(0.0, 6.0).unwrap().split_into_three();
	/// assert_eq!(thirds[0].midpoint(), 1.0);
	/// assert_eq!(thirds[1].midpoint(), 3.0);
	/// assert_eq!(thirds[2].midpoint(), 5.0);
	/// ```
	#[must_use]
	pub fn split_into_three(&self) -> [Interval; 3] {
		let w = self.third_width();
		[
			Interval::closed(self.lo, self.lo + w),
			Interval::closed(self.lo + w, self.lo + 2.0 * w),
			Interval::closed(self.lo + 2.0 * w, self.hi),
		]
	}

	/// Splits the interval at its midpoint into two closed halves.
	fn split_in_two(&self) -> [Interval; 2] {
		let mid = self.midpoint();
		[Interval::closed(self.lo, mid), Interval::closed(mid, self.hi)]
	}

	/// Splits the interval into six equal consecutive bands under the given
	/// boundary-ownership policy.
	///
	/// The bands are built by splitting each third in half, so adjacent bands
	/// share bitwise-identical boundary values. Under the two exclusive
	/// policies exactly one shared boundary is open on each side, which makes
	/// the six bands a gap-free, overlap-free partition of the parent range.
	///
	/// # Examples
	/// ```
	/// use geohash36::{Interval, SplitPolicy};
	///
	/// let bands = Interval::new(0.0, 6.0)
	///     .unwrap()
	///     .split_into_six(SplitPolicy::RightExclusiveExceptLast);
	///
	/// // 3.0 is owned by the fourth band only
	/// let owners: Vec<usize> = (0..6).filter(|&i| bands[i].contains(3.0)).collect();
	/// assert_eq!(owners, vec![3]);
	/// // the outer edges stay covered
	/// assert!(bands[0].contains(0.0));
	/// assert!(bands[5].contains(6.0));
	/// ```
	#[must_use]
	pub fn split_into_six(&self, policy: SplitPolicy) -> [Interval; 6] {
		let thirds = self.split_into_three();
		let mut bands = [*self; 6];
		for (i, third) in thirds.iter().enumerate() {
			let [left, right] = third.split_in_two();
			bands[2 * i] = left;
			bands[2 * i + 1] = right;
		}

		match policy {
			SplitPolicy::Closed => {}
			SplitPolicy::RightExclusiveExceptLast => {
				for band in &mut bands {
					band.include_right = false;
				}
				bands[5].include_right = true;
			}
			SplitPolicy::LeftExclusiveExceptFirst => {
				for band in &mut bands {
					band.include_left = false;
				}
				bands[0].include_left = true;
			}
		}

		bands
	}
}

impl Display for Interval {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let left = if self.include_left { '[' } else { '(' };
		let right = if self.include_right { ']' } else { ')' };
		write!(f, "{left}{}, {}{right}", self.lo, self.hi)
	}
}

impl Debug for Interval {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Interval{self}")
	}
}
