//! Interval algebra and an augmented AVL interval tree for span overlap
//! queries.
//!
//! An [`Interval`] is an ordered `[begin, end]` range over any [`Ord`]
//! endpoint type, where either endpoint may be open. Intervals answer point
//! and interval predicates ([`Interval::contains()`],
//! [`Interval::overlaps()`], [`Interval::contains_interval()`]) and classify
//! how two intervals relate ([`Interval::relation()`],
//! [`Interval::relation_flags()`]).
//!
//! An [`IntervalTree`] indexes any value implementing [`HasInterval`],
//! answering overlap, stabbing and enclosure queries in `O(log n + m)` time
//! for `m` matches.
//!
//! ```
//! use interspan::{Interval, IntervalTree, RelType};
//!
//! let a = Interval::new(1, 10).unwrap();
//! let b = Interval::new(2, 9).unwrap();
//! assert_eq!(a.relation(&b), RelType::Contain);
//!
//! let t = [a, b, Interval::new(15, 20).unwrap()]
//!     .into_iter()
//!     .collect::<IntervalTree<i32, _>>();
//!
//! assert_eq!(t.stab(&9).count(), 2);
//! ```
//!
//! # Features
//!
//! * `serde`: derive `Serialize` / `Deserialize` for [`Pair`], [`Bounds`],
//!   [`Interval`] and [`ValuedInterval`].

#![deny(rustdoc::broken_intra_doc_links, rust_2018_idioms)]
#![warn(clippy::dbg_macro, clippy::todo, missing_debug_implementations)]

mod arena;
mod error;
mod has_interval;
mod interval;
mod iter;
mod node;
mod pair;
mod relation;
mod select;
mod tree;

#[cfg(test)]
mod test_utils;

pub use error::*;
pub use has_interval::*;
pub use interval::*;
pub use iter::*;
pub use pair::*;
pub use relation::*;
pub use select::*;
pub use tree::*;
