//! Selection of mutually compatible spans from a set of candidates.
//!
//! Each helper indexes the spans chosen so far in an [`IntervalTree`] and
//! returns the selected items in endpoint order.

use std::cmp::Ordering;

use crate::{
    has_interval::{endpoints_cmp, HasInterval, ValuedInterval},
    interval::Interval,
    tree::IntervalTree,
};

/// Select items that do not overlap one another, greedily from the left.
///
/// Items are considered in endpoint order; each is kept if it does not
/// overlap any previously kept item.
pub fn non_overlapping<E, T, I>(items: I) -> Vec<T>
where
    E: Ord + Clone,
    T: HasInterval<E>,
    I: IntoIterator<Item = T>,
{
    non_overlapping_by(items, endpoints_cmp)
}

/// Select items that do not overlap one another, considering them in the
/// order given by `cmp`.
///
/// Ordering by [`length_endpoints_cmp`] prefers longer spans over the shorter
/// spans they overlap. The result is returned in endpoint order.
///
/// [`length_endpoints_cmp`]: crate::length_endpoints_cmp
pub fn non_overlapping_by<E, T, I, F>(items: I, mut cmp: F) -> Vec<T>
where
    E: Ord + Clone,
    T: HasInterval<E>,
    I: IntoIterator<Item = T>,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut items = items.into_iter().collect::<Vec<_>>();
    items.sort_by(|a, b| cmp(a, b));

    let mut taken = IntervalTree::<E, Interval<E>>::new();
    let mut out = Vec::new();

    for v in items {
        if taken.overlaps_any(v.interval()) {
            continue;
        }
        taken.insert(v.interval().clone());
        out.push(v);
    }

    out.sort_by(endpoints_cmp);
    out
}

/// Drop every item whose interval lies within the interval of another item.
///
/// Of a group of items with identical intervals, only the first is kept.
pub fn non_nested<E, T, I>(items: I) -> Vec<T>
where
    E: Ord + Clone,
    T: HasInterval<E>,
    I: IntoIterator<Item = T>,
{
    let mut items = items.into_iter().collect::<Vec<_>>();

    // An enclosing interval begins no later and ends no earlier than the
    // intervals within it, so visit them first.
    items.sort_by(|a, b| {
        let (a, b) = (a.interval(), b.interval());
        a.begin()
            .cmp(b.begin())
            .then_with(|| b.end().cmp(a.end()))
            .then_with(|| a.bounds().bits().cmp(&b.bounds().bits()))
    });

    // Kept intervals are indexed by their closed hull: an empty open interval
    // such as (5,5) overlaps nothing, yet still lies within [5,5].
    let mut taken = IntervalTree::<E, ValuedInterval<Interval<E>, E>>::new();
    let mut out = Vec::new();

    for v in items {
        let iv = v.interval();
        let hull = Interval::valid(iv.begin().clone(), iv.end().clone());

        // An empty interval such as (5,5] does not contain itself, so
        // identical intervals are matched explicitly.
        let nested = taken
            .overlapping(&hull)
            .any(|k| k.value() == iv || k.value().contains_interval(iv));
        if nested {
            continue;
        }
        taken.insert(ValuedInterval::new(iv.clone(), hull));
        out.push(v);
    }

    out.sort_by(endpoints_cmp);
    out
}
