use crate::interval::Interval;

use super::pruning_iter::PruningOracle;

/// Yields values whose interval overlaps the query.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlapsPruner;

impl<E> PruningOracle<E> for OverlapsPruner
where
    E: Ord,
{
    fn visit_subtree(&self, subtree_max: &E, query: &Interval<E>) -> bool {
        // All intervals in a subtree with a max end before the query begin
        // are strictly before the query.
        *subtree_max >= *query.begin()
    }

    fn visit_right(&self, interval: &Interval<E>, query: &Interval<E>) -> bool {
        // All values in the right subtree begin at or after this node; once
        // this node begins after the query ends, none of them can overlap.
        *interval.begin() <= *query.end()
    }

    fn filter_yield(&self, interval: &Interval<E>, query: &Interval<E>) -> bool {
        interval.overlaps(query)
    }
}

/// Yields values whose interval is contained within the query.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnclosedPruner;

impl<E> PruningOracle<E> for EnclosedPruner
where
    E: Ord,
{
    fn visit_subtree(&self, subtree_max: &E, query: &Interval<E>) -> bool {
        *subtree_max >= *query.begin()
    }

    fn visit_right(&self, interval: &Interval<E>, query: &Interval<E>) -> bool {
        *interval.begin() <= *query.end()
    }

    fn filter_yield(&self, interval: &Interval<E>, query: &Interval<E>) -> bool {
        query.contains_interval(interval)
    }
}
