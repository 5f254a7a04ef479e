use std::ops::RangeBounds;

use super::Matcher;

/// Create a matcher for values inside `bounds`, which is any range expression
/// (`a..b`, `a..=b`, `..b`, `a..`).
pub fn range<R>(bounds: R) -> Within<R> {
    Within(bounds)
}

/// Matches values contained in the wrapped range, see [`range`].
#[must_use]
#[derive(Debug, Clone)]
pub struct Within<R>(R);

impl<R, T> Matcher<T> for Within<R>
where
    R: RangeBounds<T>,
    T: PartialOrd,
{
    fn matches(&self, value: &T) -> bool {
        self.0.contains(value)
    }
}
