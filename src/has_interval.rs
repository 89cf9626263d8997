use std::cmp::Ordering;

use crate::{
    interval::{Interval, Length},
    relation::RelType,
};

/// A value that covers an [`Interval`].
///
/// Implement this for a payload type (a mention, a token span, ...) to index
/// it in an [`IntervalTree`] or relate it to other spans, without wrapping it
/// in a [`ValuedInterval`].
///
/// [`IntervalTree`]: crate::IntervalTree
pub trait HasInterval<E> {
    fn interval(&self) -> &Interval<E>;
}

impl<E> HasInterval<E> for Interval<E> {
    fn interval(&self) -> &Interval<E> {
        self
    }
}

impl<E, T> HasInterval<E> for &T
where
    T: HasInterval<E> + ?Sized,
{
    fn interval(&self) -> &Interval<E> {
        (**self).interval()
    }
}

/// An arbitrary payload `T` paired with the [`Interval`] it covers.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: serde::Serialize, E: serde::Serialize",
        deserialize = "T: serde::Deserialize<'de>, E: serde::Deserialize<'de> + Ord + std::fmt::Debug"
    ))
)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValuedInterval<T, E> {
    value: T,
    interval: Interval<E>,
}

impl<T, E> ValuedInterval<T, E> {
    pub fn new(value: T, interval: Interval<E>) -> Self {
        Self { value, interval }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn into_parts(self) -> (T, Interval<E>) {
        (self.value, self.interval)
    }
}

impl<T, E> HasInterval<E> for ValuedInterval<T, E> {
    fn interval(&self) -> &Interval<E> {
        &self.interval
    }
}

/// Order by interval length, longest first.
///
/// Lengths are compared as [`Length::Output`], so intervals spanning most of
/// the endpoint domain order correctly.
pub fn length_cmp<E, A, B>(a: &A, b: &B) -> Ordering
where
    E: Length + Ord,
    A: HasInterval<E> + ?Sized,
    B: HasInterval<E> + ?Sized,
{
    b.interval().length().cmp(&a.interval().length())
}

/// Order by interval endpoints (begin, then end, then bounds).
pub fn endpoints_cmp<E, A, B>(a: &A, b: &B) -> Ordering
where
    E: Ord,
    A: HasInterval<E> + ?Sized,
    B: HasInterval<E> + ?Sized,
{
    a.interval().cmp(b.interval())
}

/// Order nested intervals before the intervals that contain them, falling
/// back to [`endpoints_cmp`].
///
/// This is not a total order over arbitrary sets of overlapping intervals.
pub fn nested_first_cmp<E, A, B>(a: &A, b: &B) -> Ordering
where
    E: Ord,
    A: HasInterval<E> + ?Sized,
    B: HasInterval<E> + ?Sized,
{
    match a.interval().relation(b.interval()) {
        RelType::Contain => Ordering::Greater,
        RelType::Inside => Ordering::Less,
        _ => endpoints_cmp(a, b),
    }
}

/// Order containing intervals before the intervals nested within them,
/// falling back to [`endpoints_cmp`].
pub fn contains_first_cmp<E, A, B>(a: &A, b: &B) -> Ordering
where
    E: Ord,
    A: HasInterval<E> + ?Sized,
    B: HasInterval<E> + ?Sized,
{
    match a.interval().relation(b.interval()) {
        RelType::Contain => Ordering::Less,
        RelType::Inside => Ordering::Greater,
        _ => endpoints_cmp(a, b),
    }
}

/// [`length_cmp`], tie-broken by [`endpoints_cmp`].
pub fn length_endpoints_cmp<E, A, B>(a: &A, b: &B) -> Ordering
where
    E: Length + Ord,
    A: HasInterval<E> + ?Sized,
    B: HasInterval<E> + ?Sized,
{
    length_cmp(a, b).then_with(|| endpoints_cmp(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(label: &'static str, a: i32, b: i32) -> ValuedInterval<&'static str, i32> {
        ValuedInterval::new(label, Interval::new(a, b).unwrap())
    }

    fn labels(v: &[ValuedInterval<&'static str, i32>]) -> Vec<&'static str> {
        v.iter().map(|v| *v.value()).collect()
    }

    #[test]
    fn test_valued_interval() {
        let v = span("mention", 3, 7);
        assert_eq!(v.value(), &"mention");
        assert_eq!(v.interval(), &Interval::new(3, 7).unwrap());

        let (value, interval) = v.clone().into_parts();
        assert_eq!(value, "mention");
        assert_eq!(interval.length(), 4);
        assert_eq!(v.into_value(), "mention");
    }

    #[test]
    fn test_length_cmp() {
        let mut v = vec![span("a", 0, 2), span("b", 5, 15), span("c", 1, 6), span("d", 0, 5)];

        v.sort_by(length_cmp);
        assert_eq!(labels(&v), ["b", "c", "d", "a"]);

        // Equal lengths fall back to endpoint order.
        v.sort_by(length_endpoints_cmp);
        assert_eq!(labels(&v), ["b", "d", "c", "a"]);
    }

    #[test]
    fn test_length_cmp_full_domain() {
        let wide = span("wide", i32::MIN, i32::MAX);
        let negative = span("negative", i32::MIN, -1);
        let short = span("short", 0, 5);

        assert_eq!(length_cmp(&wide, &short), Ordering::Less);
        assert_eq!(length_cmp(&short, &negative), Ordering::Greater);

        let mut v = vec![short, negative, wide];
        v.sort_by(length_endpoints_cmp);
        assert_eq!(labels(&v), ["wide", "negative", "short"]);
    }

    #[test]
    fn test_nesting_cmp() {
        let outer = span("outer", 0, 10);
        let inner = span("inner", 0, 4);
        let other = span("other", 12, 14);

        assert_eq!(nested_first_cmp(&inner, &outer), Ordering::Less);
        assert_eq!(nested_first_cmp(&outer, &inner), Ordering::Greater);
        assert_eq!(contains_first_cmp(&outer, &inner), Ordering::Less);
        assert_eq!(contains_first_cmp(&inner, &outer), Ordering::Greater);

        // Unrelated intervals use the endpoint order.
        assert_eq!(nested_first_cmp(&outer, &other), Ordering::Less);
        assert_eq!(contains_first_cmp(&other, &outer), Ordering::Greater);

        let mut v = vec![outer.clone(), inner.clone()];
        v.sort_by(nested_first_cmp);
        assert_eq!(labels(&v), ["inner", "outer"]);

        v.sort_by(contains_first_cmp);
        assert_eq!(labels(&v), ["outer", "inner"]);
    }

    #[test]
    fn test_has_interval_refs() {
        let v = span("a", 1, 2);
        let r = &v;
        assert_eq!(HasInterval::interval(&r), v.interval());

        let i = Interval::new(1, 2).unwrap();
        assert_eq!(endpoints_cmp(&v, &i), Ordering::Equal);
    }
}
