use std::cmp::Ordering;

use super::Matcher;

/// Create a matcher for values equal to `expected`.
pub fn eq<T>(expected: T) -> Equals<T> {
    Equals {
        expected,
        equal: true,
    }
}

/// Create a matcher for values not equal to `expected`.
pub fn ne<T>(expected: T) -> Equals<T> {
    Equals {
        expected,
        equal: false,
    }
}

/// Create a matcher for values less than `bound`.
pub fn lt<T>(bound: T) -> Ordered<T> {
    Ordered::new(bound, Ordering::is_lt)
}

/// Create a matcher for values less than or equal to `bound`.
pub fn le<T>(bound: T) -> Ordered<T> {
    Ordered::new(bound, Ordering::is_le)
}

/// Create a matcher for values greater than `bound`.
pub fn gt<T>(bound: T) -> Ordered<T> {
    Ordered::new(bound, Ordering::is_gt)
}

/// Create a matcher for values greater than or equal to `bound`.
pub fn ge<T>(bound: T) -> Ordered<T> {
    Ordered::new(bound, Ordering::is_ge)
}

/// Matches by (in)equality with an expected value, see [`eq`] and [`ne`].
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct Equals<T> {
    expected: T,
    equal: bool,
}

impl<T, X> Matcher<X> for Equals<T>
where
    X: PartialEq<T>,
{
    fn matches(&self, value: &X) -> bool {
        (*value == self.expected) == self.equal
    }
}

/// Matches by the ordering of a value relative to a bound, see [`lt`], [`le`],
/// [`gt`] and [`ge`].
///
/// Values that are not comparable with the bound (`NaN`) never match.
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct Ordered<T> {
    bound: T,
    accept: fn(Ordering) -> bool,
}

impl<T> Ordered<T> {
    fn new(bound: T, accept: fn(Ordering) -> bool) -> Self {
        Self { bound, accept }
    }
}

impl<T, X> Matcher<X> for Ordered<T>
where
    X: PartialOrd<T>,
{
    fn matches(&self, value: &X) -> bool {
        value.partial_cmp(&self.bound).is_some_and(self.accept)
    }
}
