//! The [`matcher`](self) module contains the predicates that select which
//! conditional stub of a [`ReturnValueResolver`](crate::ReturnValueResolver)
//! handles a call.
//!
//! Any closure `Fn(&T) -> bool` is a matcher, so the predefined matchers are
//! only a shorthand for the common cases:
//!
//! ```
//! use mokka::matcher::{eq, range, Matcher};
//! use mokka::ReturnValueResolver;
//!
//! let lookup = ReturnValueResolver::<String, u32>::new("lookup(key)");
//! lookup.returns_when(1, eq("one"));
//! lookup.returns_when(2, |key: &String| key.len() == 3);
//! lookup.returns_when(3, |key: &String| range(5..).matches(&key.len()));
//!
//! assert_eq!(lookup.record_call_and_return("one".into()), 1);
//! assert_eq!(lookup.record_call_and_return("two".into()), 2);
//! assert_eq!(lookup.record_call_and_return("three".into()), 3);
//! ```

mod compare;
mod range;

pub use compare::{eq, ge, gt, le, lt, ne, Equals, Ordered};
pub use range::{range, Within};

/// A matcher decides whether the arguments of a call are handled by a stub.
pub trait Matcher<T> {
    /// Returns `true` if the passed `value` matches, `false` otherwise.
    fn matches(&self, value: &T) -> bool;
}

impl<T, F> Matcher<T> for F
where
    F: Fn(&T) -> bool,
{
    fn matches(&self, value: &T) -> bool {
        self(value)
    }
}
