use crate::matcher::Matcher;

/// One conditional (or unconditional) rule that produces a return value.
pub(crate) struct Stub<A, V> {
    matcher: Option<Box<dyn Matcher<A>>>,
    behavior: Behavior<A, V>,
}

/// How a [`Stub`] produces its value.
pub(crate) enum Behavior<A, V> {
    /// Returns a clone of the stored value.
    Value(V),

    /// Computes the value from the arguments of the call.
    Function(Box<dyn Fn(A) -> V>),
}

impl<A, V> Stub<A, V> {
    pub(crate) fn new(behavior: Behavior<A, V>, matcher: Option<Box<dyn Matcher<A>>>) -> Self {
        Self { matcher, behavior }
    }

    /// Returns `true` if this stub is responsible for a call with `args`.
    pub(crate) fn handles(&self, args: &A) -> bool {
        self.matcher
            .as_ref()
            .map_or(true, |matcher| matcher.matches(args))
    }

    pub(crate) fn is_conditional(&self) -> bool {
        self.matcher.is_some()
    }
}

impl<A, V> Stub<A, V>
where
    V: Clone,
{
    pub(crate) fn call(&self, args: A) -> V {
        match &self.behavior {
            Behavior::Value(value) => value.clone(),
            Behavior::Function(function) => function(args),
        }
    }
}
