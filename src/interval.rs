use std::{
    fmt::{self, Display},
    ops::{Range, RangeInclusive},
};

/// How endpoints take part in overlap tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Bounds {
    /// `[low, high]`, intervals touching at an endpoint overlap.
    #[default]
    Closed,
    /// `[low, high)`, touching intervals do not overlap.
    HalfOpen,
}

impl Bounds {
    /// Whether an endpoint `high` reaches as far as `low`.
    ///
    /// Used both for overlap tests and for pruning: a subtree whose max
    /// endpoint does not reach `query.low` holds nothing overlapping `query`.
    #[inline]
    pub fn reaches<K: Ord>(self, high: &K, low: &K) -> bool {
        match self {
            Bounds::Closed => high >= low,
            Bounds::HalfOpen => high > low,
        }
    }

    #[inline]
    pub fn overlaps<K: Ord>(self, a: &Interval<K>, b: &Interval<K>) -> bool {
        self.reaches(&b.high, &a.low) && self.reaches(&a.high, &b.low)
    }
}

/// An interval `(low, high)` over a totally ordered key.
///
/// `low <= high` is not enforced, inverted intervals are stored as given and
/// simply overlap less.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval<K> {
    pub low: K,
    pub high: K,
}

impl<K> Interval<K> {
    pub fn new(low: K, high: K) -> Self {
        Self { low, high }
    }
}

impl<K: Ord + Copy> Interval<K> {
    /// The degenerate interval `[k, k]`.
    pub fn point(k: K) -> Self {
        Self { low: k, high: k }
    }

    /// Closed overlap test, `self.low <= other.high && other.low <= self.high`.
    pub fn overlaps(&self, other: &Self) -> bool {
        Bounds::Closed.overlaps(self, other)
    }

    pub fn overlaps_with(&self, other: &Self, bounds: Bounds) -> bool {
        bounds.overlaps(self, other)
    }

    /// The smallest interval covering both `self` and `other`.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            low: self.low.min(other.low),
            high: self.high.max(other.high),
        }
    }
}

impl<K> From<(K, K)> for Interval<K> {
    fn from((low, high): (K, K)) -> Self {
        Self { low, high }
    }
}

impl<K> From<Range<K>> for Interval<K> {
    fn from(range: Range<K>) -> Self {
        Self {
            low: range.start,
            high: range.end,
        }
    }
}

impl<K> From<RangeInclusive<K>> for Interval<K> {
    fn from(range: RangeInclusive<K>) -> Self {
        let (low, high) = range.into_inner();
        Self { low, high }
    }
}

impl<K: Display> Display for Interval<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_overlap() {
        let a = Interval::new(1, 3);
        assert!(a.overlaps(&Interval::new(3, 6)));
        assert!(a.overlaps(&Interval::new(0, 1)));
        assert!(a.overlaps(&Interval::new(2, 2)));
        assert!(!a.overlaps(&Interval::new(4, 6)));
        assert!(!Interval::new(4, 6).overlaps(&a));
    }

    #[test]
    fn half_open_overlap() {
        let a = Interval::new(1, 3);
        assert!(!a.overlaps_with(&Interval::new(3, 6), Bounds::HalfOpen));
        assert!(!Interval::new(3, 6).overlaps_with(&a, Bounds::HalfOpen));
        assert!(a.overlaps_with(&Interval::new(2, 6), Bounds::HalfOpen));
        assert!(Bounds::HalfOpen.reaches(&3, &2));
        assert!(!Bounds::HalfOpen.reaches(&3, &3));
        assert!(Bounds::Closed.reaches(&3, &3));
    }

    #[test]
    fn inverted_intervals_are_tolerated() {
        let inverted = Interval::new(5, 2);
        assert!(!inverted.overlaps(&Interval::new(3, 4)));
        assert!(inverted.overlaps(&Interval::new(1, 5)));
        assert_eq!(
            inverted.overlaps(&Interval::new(1, 5)),
            Interval::new(1, 5).overlaps(&inverted)
        );
    }

    #[test]
    fn union_covers_both() {
        let u = Interval::new(2, 3).union(&Interval::new(1, 2));
        assert_eq!(u, Interval::new(1, 3));
        assert_eq!(Interval::point(7).union(&Interval::new(1, 9)), Interval::new(1, 9));
    }

    #[test]
    fn conversions() {
        assert_eq!(Interval::from((1, 4)), Interval::new(1, 4));
        assert_eq!(Interval::from(1..4), Interval::new(1, 4));
        assert_eq!(Interval::from(1..=4), Interval::new(1, 4));
        assert_eq!(Interval::new(-2, 8).to_string(), "-2 8");
    }
}
