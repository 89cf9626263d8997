//! Error types returned by interval construction and tree validation.

use thiserror::Error;

/// Returned by the strict [`Interval`] constructors when `begin > end`.
///
/// Both endpoints are handed back so the caller can recover them, for
/// example by swapping them into a valid interval.
///
/// [`Interval`]: crate::Interval
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid interval: begin {begin:?} is after end {end:?}")]
pub struct InvalidIntervalError<E> {
    pub(crate) begin: E,
    pub(crate) end: E,
}

impl<E> InvalidIntervalError<E> {
    /// The rejected begin point.
    pub fn begin(&self) -> &E {
        &self.begin
    }

    /// The rejected end point.
    pub fn end(&self) -> &E {
        &self.end
    }

    /// Take back ownership of the rejected `(begin, end)` endpoints.
    pub fn into_endpoints(self) -> (E, E) {
        (self.begin, self.end)
    }
}

/// A structural inconsistency found by [`IntervalTree::check()`].
///
/// [`IntervalTree::check()`]: crate::IntervalTree::check
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// A left child is ordered after its parent, or a right child before it.
    #[error("binary search order violated at {interval}")]
    Order {
        /// Debug rendering of the offending node's interval.
        interval: String,
    },

    /// The cached subtree maximum does not match the subtree contents.
    #[error("subtree max for {interval} is {got}, want {want}")]
    SubtreeMax {
        interval: String,
        got: String,
        want: String,
    },

    /// The cached AVL height does not match the child heights.
    #[error("height for {interval} is {got}, want {want}")]
    Height {
        interval: String,
        got: u8,
        want: u8,
    },

    /// The child subtree heights differ by more than one.
    #[error("balance factor {balance} at {interval}")]
    Balance { interval: String, balance: i16 },

    /// The number of reachable nodes differs from the tracked length.
    #[error("tree tracks {tracked} values but {reachable} are reachable")]
    Len { tracked: usize, reachable: usize },
}
