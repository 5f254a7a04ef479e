//! The [`returns`](self) module implements the [`ReturnValueResolver`] type.

mod stub;

use std::cell::RefCell;
use std::convert::Infallible;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::ops::Deref;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::call::CallRecorder;
use crate::error::{violated, Unarranged};
use crate::matcher::Matcher;
use crate::misc::Recorder;

use self::stub::{Behavior, Stub};

/// Records the calls to a function that returns a value and resolves the
/// value to return from a list of stubs.
///
/// Call accounting, side effects and failure injection are provided by the
/// wrapped [`CallRecorder`], which the resolver dereferences to.
///
/// Stubs are tried in the order they were added and the first one whose
/// matcher accepts the arguments produces the value. If no stub matches, the
/// [default value](Self::set_default_value) is returned. If there is no default
/// value either, the resolver is unarranged and the call fails the test.
///
/// ```
/// use mokka::ReturnValueResolver;
///
/// let do_something = ReturnValueResolver::<String, i32>::new("do_something(arg)");
/// do_something.returns_when(66, |arg: &String| arg == "foo");
/// do_something.returns_when(42, |arg: &String| arg == "bar");
/// do_something.set_default_value(0);
///
/// assert_eq!(do_something.record_call_and_return("bar".into()), 42);
/// assert_eq!(do_something.record_call_and_return("baz".into()), 0);
/// assert_eq!(do_something.call_count(), 2);
/// assert_eq!(do_something.argument(), Some("baz".into()));
/// ```
pub struct ReturnValueResolver<A, V, E = Infallible> {
    calls: CallRecorder<A, E>,
    default_value: RefCell<Option<V>>,
    stubs: RefCell<Vec<Rc<Stub<A, V>>>>,
}

impl<A, V, E> ReturnValueResolver<A, V, E> {
    /// Create a new resolver for the function with the passed `name`.
    ///
    /// The name is only used in log events and diagnostics.
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self::from_calls(CallRecorder::new(name))
    }

    /// Create a new resolver without a name.
    pub fn unnamed() -> Self {
        Self::from_calls(CallRecorder::unnamed())
    }

    fn from_calls(calls: CallRecorder<A, E>) -> Self {
        Self {
            calls,
            default_value: RefCell::new(None),
            stubs: RefCell::new(Vec::new()),
        }
    }

    /// Add a stub that returns `value` for every call.
    pub fn returns(&self, value: V) {
        self.push(Behavior::Value(value), None);
    }

    /// Add a stub that returns `value` for every call whose arguments are
    /// accepted by `matcher`.
    pub fn returns_when<M>(&self, value: V, matcher: M)
    where
        M: Matcher<A> + 'static,
    {
        self.push(Behavior::Value(value), Some(Box::new(matcher)));
    }

    /// Add a stub that computes the return value from the arguments of each
    /// call.
    pub fn returns_with<F>(&self, handler: F)
    where
        F: Fn(A) -> V + 'static,
    {
        self.push(Behavior::Function(Box::new(handler)), None);
    }

    /// Add a stub that computes the return value from the arguments of each
    /// call whose arguments are accepted by `matcher`.
    pub fn returns_with_when<F, M>(&self, handler: F, matcher: M)
    where
        F: Fn(A) -> V + 'static,
        M: Matcher<A> + 'static,
    {
        self.push(
            Behavior::Function(Box::new(handler)),
            Some(Box::new(matcher)),
        );
    }

    fn push(&self, behavior: Behavior<A, V>, matcher: Option<Box<dyn Matcher<A>>>) {
        let stub = Stub::new(behavior, matcher);
        let mut stubs = self.stubs.borrow_mut();

        debug!(
            recorder = %self.calls.label(),
            position = stubs.len(),
            conditional = stub.is_conditional(),
            "stub added"
        );

        stubs.push(Rc::new(stub));
    }

    /// Number of stubs added since construction or the last reset.
    pub fn stub_count(&self) -> usize {
        self.stubs.borrow().len()
    }

    /// Set the value that is returned if no stub matches a call.
    pub fn set_default_value(&self, value: V) {
        *self.default_value.borrow_mut() = Some(value);
    }

    /// Remove the default value.
    pub fn clear_default_value(&self) {
        self.default_value.borrow_mut().take();
    }

    /// Reset the resolver to its initial state.
    ///
    /// In addition to [`CallRecorder::reset`] this removes all stubs and the
    /// default value.
    pub fn reset(&self) {
        self.calls.reset();
        self.default_value.borrow_mut().take();
        self.stubs.borrow_mut().clear();
    }
}

impl<A, V, E> ReturnValueResolver<A, V, E>
where
    V: Clone,
{
    /// The value that is returned if no stub matches a call, if any.
    pub fn default_value(&self) -> Option<V> {
        self.default_value.borrow().clone()
    }
}

impl<A, V, E> ReturnValueResolver<A, V, E>
where
    A: Clone,
    V: Clone,
{
    /// Record a call with the passed `args` and return the stubbed value.
    ///
    /// # Panics
    /// Panics if no stub matches and no default value is set. The call is
    /// recorded before.
    #[track_caller]
    pub fn record_call_and_return(&self, args: A) -> V {
        self.calls.record_call(args.clone());

        match self.resolve(args) {
            Ok(value) => value,
            Err(err) => violated(err),
        }
    }

    /// Record a call with the passed `args` and return the configured failure
    /// if there is one, or the stubbed value otherwise.
    ///
    /// # Errors
    /// Returns the error set by [`CallRecorder::configure_failure`].
    ///
    /// # Panics
    /// Panics if no failure is configured, no stub matches and no default value
    /// is set.
    #[track_caller]
    pub fn record_call_and_return_or_fail(&self, args: A) -> Result<V, E> {
        self.calls.record_call(args.clone());

        if let Some(error) = self.calls.failure() {
            return Err(error);
        }

        match self.resolve(args) {
            Ok(value) => Ok(value),
            Err(err) => violated(err),
        }
    }

    fn resolve(&self, args: A) -> Result<V, Unarranged> {
        let matched = self
            .stubs
            .borrow()
            .iter()
            .enumerate()
            .find(|(_, stub)| stub.handles(&args))
            .map(|(position, stub)| (position, stub.clone()));

        if let Some((position, stub)) = matched {
            trace!(recorder = %self.calls.label(), position, "stub matched");

            return Ok(stub.call(args));
        }

        if let Some(value) = self.default_value() {
            trace!(recorder = %self.calls.label(), "no stub matched, using default value");

            return Ok(value);
        }

        Err(Unarranged::ReturnValue {
            name: self.calls.name().map(Into::into),
        })
    }
}

impl<V, E> ReturnValueResolver<(), V, E>
where
    V: Clone,
{
    /// Record a call of a function without arguments and return the stubbed
    /// value.
    ///
    /// # Panics
    /// Panics if no stub matches and no default value is set.
    #[track_caller]
    pub fn record_call_no_args_and_return(&self) -> V {
        self.record_call_and_return(())
    }

    /// Record a call of a function without arguments and return the configured
    /// failure or the stubbed value.
    ///
    /// # Errors
    /// Returns the configured failure.
    ///
    /// # Panics
    /// Panics if no failure is configured, no stub matches and no default value
    /// is set.
    #[track_caller]
    pub fn record_call_no_args_and_return_or_fail(&self) -> Result<V, E> {
        self.record_call_and_return_or_fail(())
    }
}

impl<A, V, E> Deref for ReturnValueResolver<A, V, E> {
    type Target = CallRecorder<A, E>;

    fn deref(&self) -> &Self::Target {
        &self.calls
    }
}

impl<A, V, E> Default for ReturnValueResolver<A, V, E> {
    fn default() -> Self {
        Self::unnamed()
    }
}

impl<A, V, E> Debug for ReturnValueResolver<A, V, E>
where
    A: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ReturnValueResolver")
            .field("calls", &self.calls)
            .field("default_value", &self.default_value.borrow())
            .field("stub_count", &self.stub_count())
            .finish()
    }
}

impl<A, V, E> Recorder for ReturnValueResolver<A, V, E> {
    fn name(&self) -> Option<&str> {
        self.calls.name()
    }

    fn reset(&self) {
        ReturnValueResolver::reset(self);
    }
}
