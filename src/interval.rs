use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    ops::{BitOr, Range, RangeInclusive},
};

use crate::{error::InvalidIntervalError, pair::Pair};

/// Endpoint inclusivity flags of an [`Interval`].
///
/// Both endpoints are included (closed) unless the corresponding open flag is
/// set.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "u8", into = "u8")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Bounds(u8);

impl Bounds {
    /// Both endpoints included: `[begin, end]`.
    pub const CLOSED: Self = Self(0x00);
    /// The begin point is excluded: `(begin, end]`.
    pub const OPEN_BEGIN: Self = Self(0x01);
    /// The end point is excluded: `[begin, end)`.
    pub const OPEN_END: Self = Self(0x02);
    /// Both endpoints excluded: `(begin, end)`.
    pub const OPEN: Self = Self(0x03);

    /// Construct from raw flag bits, discarding unknown bits.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::OPEN.0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn includes_begin(self) -> bool {
        self.0 & Self::OPEN_BEGIN.0 == 0
    }

    pub const fn includes_end(self) -> bool {
        self.0 & Self::OPEN_END.0 == 0
    }
}

impl From<u8> for Bounds {
    fn from(v: u8) -> Self {
        Self::from_bits(v)
    }
}

impl From<Bounds> for u8 {
    fn from(v: Bounds) -> Self {
        v.bits()
    }
}

impl BitOr for Bounds {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

/// A range of totally-ordered endpoints where `begin <= end`, with per-side
/// open/closed inclusivity.
///
/// Intervals are ordered by their begin point, tie-broken by their end point
/// (the [`Pair`] ordering), and finally by their [`Bounds`] so that the
/// ordering stays consistent with equality.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "RawInterval<E>",
        bound(deserialize = "E: serde::Deserialize<'de> + Ord + Debug")
    )
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval<E> {
    begin: E,
    end: E,
    bounds: Bounds,
}

/// A concrete integer interval, typically a character or token offset span.
pub type IntInterval = Interval<i32>;

impl<E> Interval<E>
where
    E: Ord,
{
    /// Construct a closed interval `[begin, end]`.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidIntervalError`] if `begin > end`.
    pub fn new(begin: E, end: E) -> Result<Self, InvalidIntervalError<E>> {
        Self::with_bounds(begin, end, Bounds::CLOSED)
    }

    /// Construct an interval with the given endpoint inclusivity.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidIntervalError`] if `begin > end`.
    pub fn with_bounds(begin: E, end: E, bounds: Bounds) -> Result<Self, InvalidIntervalError<E>> {
        if begin > end {
            return Err(InvalidIntervalError { begin, end });
        }

        Ok(Self { begin, end, bounds })
    }

    /// Construct a closed interval from two endpoints given in any order.
    pub fn valid(a: E, b: E) -> Self {
        Self::valid_with_bounds(a, b, Bounds::CLOSED)
    }

    /// Construct an interval from two endpoints given in any order, swapping
    /// them if needed. Never fails.
    pub fn valid_with_bounds(a: E, b: E, bounds: Bounds) -> Self {
        let (begin, end) = if a <= b { (a, b) } else { (b, a) };
        Self { begin, end, bounds }
    }

    /// Returns true if `p` lies within this interval, honouring the open /
    /// closed state of each endpoint.
    pub fn contains(&self, p: &E) -> bool {
        let after_begin = if self.includes_begin() {
            self.begin <= *p
        } else {
            self.begin < *p
        };

        let before_end = if self.includes_end() {
            self.end >= *p
        } else {
            self.end > *p
        };

        after_begin && before_end
    }

    /// Returns true if `p` lies within `[begin, end]`, treating both
    /// endpoints as included regardless of the configured [`Bounds`].
    ///
    /// This is not the same test as [`Interval::contains()`].
    pub fn contains_open(&self, p: &E) -> bool {
        self.begin <= *p && self.end >= *p
    }

    /// Returns true if every point of `other` lies within this interval.
    ///
    /// Each endpoint of `other` is tested with [`Interval::contains()`] when
    /// `other` includes it, and with [`Interval::contains_open()`] when it
    /// is excluded.
    pub fn contains_interval(&self, other: &Self) -> bool {
        let begin = if other.includes_begin() {
            self.contains(&other.begin)
        } else {
            self.contains_open(&other.begin)
        };

        let end = if other.includes_end() {
            self.contains(&other.end)
        } else {
            self.contains_open(&other.end)
        };

        begin && end
    }

    /// Returns true if this interval and `other` share at least one point.
    ///
    /// When this interval ends where `other` begins (or vice versa), the two
    /// overlap only if both of them include that shared point.
    pub fn overlaps(&self, other: &Self) -> bool {
        let begin_end = self.begin.cmp(&other.end);
        let end_begin = self.end.cmp(&other.begin);

        if begin_end == Ordering::Greater || end_begin == Ordering::Less {
            return false;
        }

        if begin_end == Ordering::Equal && !(self.includes_begin() && other.includes_end()) {
            return false;
        }

        if end_begin == Ordering::Equal && !(self.includes_end() && other.includes_begin()) {
            return false;
        }

        true
    }

    /// Returns the intersection of this interval and `other` as a closed
    /// interval, or [`None`] if they are disjoint.
    pub fn intersect(&self, other: &Self) -> Option<Self>
    where
        E: Clone,
    {
        let begin = (&self.begin).max(&other.begin).clone();
        let end = (&self.end).min(&other.end).clone();
        Self::new(begin, end).ok()
    }

    /// Returns the smallest closed interval covering both this interval and
    /// `other`.
    pub fn expand(&self, other: &Self) -> Self
    where
        E: Clone,
    {
        Self {
            begin: (&self.begin).min(&other.begin).clone(),
            end: (&self.end).max(&other.end).clone(),
            bounds: Bounds::CLOSED,
        }
    }

    /// As [`Interval::expand()`], returning a copy of `self` when `other` is
    /// [`None`].
    pub fn expand_opt(&self, other: Option<&Self>) -> Self
    where
        E: Clone,
    {
        match other {
            Some(other) => self.expand(other),
            None => self.clone(),
        }
    }
}

impl<E> Interval<E> {
    /// The degenerate closed interval `[p, p]`.
    pub fn point(p: E) -> Self
    where
        E: Clone,
    {
        Self {
            begin: p.clone(),
            end: p,
            bounds: Bounds::CLOSED,
        }
    }

    pub fn begin(&self) -> &E {
        &self.begin
    }

    pub fn end(&self) -> &E {
        &self.end
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn includes_begin(&self) -> bool {
        self.bounds.includes_begin()
    }

    pub fn includes_end(&self) -> bool {
        self.bounds.includes_end()
    }

    /// A [`Pair`] view of the `(begin, end)` endpoints.
    pub fn as_pair(&self) -> Pair<&E, &E> {
        Pair::new(&self.begin, &self.end)
    }

    pub fn into_pair(self) -> Pair<E, E> {
        Pair::new(self.begin, self.end)
    }

    /// Order by the `(begin, end)` endpoints only, ignoring [`Bounds`].
    pub(crate) fn cmp_endpoints(&self, other: &Self) -> Ordering
    where
        E: Ord,
    {
        match self.begin.cmp(&other.begin) {
            Ordering::Equal => self.end.cmp(&other.end),
            v => v,
        }
    }
}

/// Endpoint types with a distance between any two values.
///
/// The distance is unsigned, so it cannot overflow even for an interval
/// spanning the whole domain (`[i32::MIN, i32::MAX]` has length `u32::MAX`).
pub trait Length {
    type Output: Ord + Copy + Debug;

    /// The distance from `begin` to `end`.
    fn length(begin: &Self, end: &Self) -> Self::Output;
}

macro_rules! impl_length {
    ($($t:ty => $out:ty),* $(,)?) => {
        $(
            impl Length for $t {
                type Output = $out;

                fn length(begin: &Self, end: &Self) -> Self::Output {
                    end.abs_diff(*begin)
                }
            }
        )*
    };
}

impl_length!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    u128 => u128,
    usize => usize,
);

impl<E> Interval<E>
where
    E: Length,
{
    /// The distance from the begin point to the end point.
    pub fn length(&self) -> E::Output {
        E::length(&self.begin, &self.end)
    }
}

impl<E> Interval<E>
where
    E: Copy + Into<f64>,
{
    pub fn mid_point(&self) -> f64 {
        (self.begin.into() + self.end.into()) / 2.0
    }

    /// Half of the interval length.
    pub fn radius(&self) -> f64 {
        (self.end.into() - self.begin.into()) / 2.0
    }
}

/// Convert a half-open [`Range`] into an interval that excludes its end.
impl<E> TryFrom<Range<E>> for Interval<E>
where
    E: Ord,
{
    type Error = InvalidIntervalError<E>;

    fn try_from(value: Range<E>) -> Result<Self, Self::Error> {
        Self::with_bounds(value.start, value.end, Bounds::OPEN_END)
    }
}

impl<E> TryFrom<RangeInclusive<E>> for Interval<E>
where
    E: Ord,
{
    type Error = InvalidIntervalError<E>;

    fn try_from(value: RangeInclusive<E>) -> Result<Self, Self::Error> {
        let (begin, end) = value.into_inner();
        Self::new(begin, end)
    }
}

impl<E> Display for Interval<E>
where
    E: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let open = if self.includes_begin() { '[' } else { '(' };
        let close = if self.includes_end() { ']' } else { ')' };
        write!(f, "{}{},{}{}", open, self.begin, self.end, close)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawInterval<E> {
    begin: E,
    end: E,
    bounds: Bounds,
}

#[cfg(feature = "serde")]
impl<E> TryFrom<RawInterval<E>> for Interval<E>
where
    E: Ord,
{
    type Error = InvalidIntervalError<E>;

    fn try_from(v: RawInterval<E>) -> Result<Self, Self::Error> {
        Self::with_bounds(v.begin, v.end, v.bounds)
    }
}
