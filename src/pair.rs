use std::{cmp::Ordering, fmt::Display};

/// An immutable, totally-ordered two-element tuple.
///
/// A [`Pair`] is ordered by its first element, tie-broken by the second.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pair<A, B> {
    first: A,
    second: B,
}

impl<A, B> Pair<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn second(&self) -> &B {
        &self.second
    }

    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}

impl<A, B> Display for Pair<A, B>
where
    A: Display,
    B: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.first, self.second)
    }
}

/// Order pairs by their first element only.
pub fn by_first<A: Ord, B>(a: &Pair<A, B>, b: &Pair<A, B>) -> Ordering {
    a.first.cmp(&b.first)
}

/// Order pairs by their first element only, descending.
pub fn by_first_reverse<A: Ord, B>(a: &Pair<A, B>, b: &Pair<A, B>) -> Ordering {
    by_first(a, b).reverse()
}

/// Order pairs by their second element only.
pub fn by_second<A, B: Ord>(a: &Pair<A, B>, b: &Pair<A, B>) -> Ordering {
    a.second.cmp(&b.second)
}

/// Order pairs by their second element only, descending.
pub fn by_second_reverse<A, B: Ord>(a: &Pair<A, B>, b: &Pair<A, B>) -> Ordering {
    by_second(a, b).reverse()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_comparators() {
        let mut v = vec![Pair::new(2, "b"), Pair::new(1, "c"), Pair::new(3, "a")];

        v.sort_by(by_first);
        assert_eq!(v.iter().map(|p| *p.first()).collect::<Vec<_>>(), [1, 2, 3]);

        v.sort_by(by_first_reverse);
        assert_eq!(v.iter().map(|p| *p.first()).collect::<Vec<_>>(), [3, 2, 1]);

        v.sort_by(by_second);
        assert_eq!(
            v.iter().map(|p| *p.second()).collect::<Vec<_>>(),
            ["a", "b", "c"]
        );

        v.sort_by(by_second_reverse);
        assert_eq!(
            v.iter().map(|p| *p.second()).collect::<Vec<_>>(),
            ["c", "b", "a"]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Pair::new(1, 10).to_string(), "(1,10)");
    }

    proptest! {
        /// Pairs order lexicographically, matching tuple ordering.
        #[test]
        fn prop_pair_ord(a in any::<(u8, u8)>(), b in any::<(u8, u8)>()) {
            let got = Pair::from(a).cmp(&Pair::from(b));
            assert_eq!(got, a.cmp(&b));

            // Ordering is consistent with equality.
            assert_eq!(got == Ordering::Equal, Pair::from(a) == Pair::from(b));
        }
    }
}
