//! The [`call`](self) module implements the [`CallRecorder`] type.

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::rc::Rc;

use tracing::{debug, trace};

use crate::misc::{Label, Recorder};

type SideEffect<A> = Rc<dyn Fn(A)>;
type Failure<E> = Rc<dyn Fn() -> E>;

/// Records the calls to a function-shaped member of a fake: how often it was
/// called and with which arguments it was called the last time.
///
/// If the faked function returns a value you probably want to use
/// [`ReturnValueResolver`](crate::ReturnValueResolver) instead.
///
/// The recorder is generic over the arguments `A` of the function, which are
///   - a unit `()` for no arguments
///   - a single type `T` for one argument
///   - or a tuple `(T1, T2, ...)` of many arguments
///
/// and over the error type `E` that can be injected with
/// [`configure_failure`](Self::configure_failure).
///
/// Every operation takes `&self`, so a fake can implement a trait whose
/// methods take `&self`. The recorder is not [`Sync`] and is meant to be
/// used from the thread of the test that owns it.
///
/// ```
/// use mokka::CallRecorder;
///
/// trait Engine {
///     fn set_speed(&self, value: f32);
/// }
///
/// #[derive(Default)]
/// struct EngineFake {
///     set_speed: CallRecorder<f32>,
/// }
///
/// impl Engine for EngineFake {
///     fn set_speed(&self, value: f32) {
///         self.set_speed.record_call(value);
///     }
/// }
///
/// let engine = EngineFake::default();
/// engine.set_speed(42.0);
///
/// assert!(engine.set_speed.called_once());
/// assert_eq!(engine.set_speed.argument(), Some(42.0));
/// ```
pub struct CallRecorder<A, E = Infallible> {
    name: Option<String>,
    call_count: Cell<usize>,
    last_arguments: RefCell<Option<A>>,
    side_effect: RefCell<Option<SideEffect<A>>>,
    failure: RefCell<Option<Failure<E>>>,
}

impl<A, E> CallRecorder<A, E> {
    /// Create a new recorder for the function with the passed `name`.
    ///
    /// The name is only used in log events and diagnostics.
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self::with_name(Some(name.into()))
    }

    /// Create a new recorder without a name.
    pub fn unnamed() -> Self {
        Self::with_name(None)
    }

    fn with_name(name: Option<String>) -> Self {
        Self {
            name,
            call_count: Cell::new(0),
            last_arguments: RefCell::new(None),
            side_effect: RefCell::new(None),
            failure: RefCell::new(None),
        }
    }

    /// Name of the recorded function, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Number of times the function has been called.
    pub fn call_count(&self) -> usize {
        self.call_count.get()
    }

    /// Returns `true` if the function has been called at least once.
    pub fn called(&self) -> bool {
        self.call_count() >= 1
    }

    /// Returns `true` if the function has been called exactly once.
    pub fn called_once(&self) -> bool {
        self.call_count() == 1
    }

    /// Install a handler that is executed with the arguments of every recorded
    /// call. A previously installed handler is replaced.
    pub fn stub<F>(&self, handler: F)
    where
        F: Fn(A) + 'static,
    {
        debug!(recorder = %self.label(), "side effect installed");

        *self.side_effect.borrow_mut() = Some(Rc::new(handler));
    }

    /// Configure the error that is returned by
    /// [`record_call_and_maybe_fail`](Self::record_call_and_maybe_fail) from
    /// now on. Each failing call returns a clone of `error`.
    pub fn configure_failure(&self, error: E)
    where
        E: Clone + 'static,
    {
        self.configure_failure_with(move || error.clone());
    }

    /// Like [`configure_failure`](Self::configure_failure), but the error is
    /// built by `factory` for each failing call. Use this for error types that
    /// do not implement [`Clone`].
    pub fn configure_failure_with<F>(&self, factory: F)
    where
        F: Fn() -> E + 'static,
    {
        debug!(recorder = %self.label(), "failure configured");

        *self.failure.borrow_mut() = Some(Rc::new(factory));
    }

    /// Reset the recorder to its initial state.
    ///
    /// This sets the call count to zero and removes the recorded arguments,
    /// the configured failure and the installed side effect.
    pub fn reset(&self) {
        debug!(recorder = %self.label(), "reset");

        self.call_count.set(0);
        self.last_arguments.borrow_mut().take();
        self.side_effect.borrow_mut().take();
        self.failure.borrow_mut().take();
    }

    pub(crate) fn label(&self) -> Label<'_> {
        Label(self.name())
    }

    /// Build the configured failure, if there is one.
    pub(crate) fn failure(&self) -> Option<E> {
        let factory = self.failure.borrow().clone()?;

        debug!(recorder = %self.label(), "raising configured failure");

        Some(factory())
    }
}

impl<A, E> CallRecorder<A, E>
where
    A: Clone,
{
    /// Arguments of the last call, or `None` if the function was never called.
    pub fn last_arguments(&self) -> Option<A> {
        self.last_arguments.borrow().clone()
    }

    /// Same as [`last_arguments`](Self::last_arguments). Reads better for
    /// functions with a single argument.
    pub fn argument(&self) -> Option<A> {
        self.last_arguments()
    }

    /// Record a call of the function with the passed `args` and execute the
    /// installed side effect, if any.
    pub fn record_call(&self, args: A) {
        let call_count = self.call_count.get() + 1;
        self.call_count.set(call_count);
        *self.last_arguments.borrow_mut() = Some(args.clone());

        trace!(recorder = %self.label(), call_count, "call recorded");

        let side_effect = self.side_effect.borrow().clone();
        if let Some(side_effect) = side_effect {
            side_effect(args);
        }
    }

    /// Record a call like [`record_call`](Self::record_call) and return the
    /// configured failure afterwards, if there is one.
    ///
    /// # Errors
    /// Returns the error set by [`configure_failure`](Self::configure_failure)
    /// or [`configure_failure_with`](Self::configure_failure_with).
    pub fn record_call_and_maybe_fail(&self, args: A) -> Result<(), E> {
        self.record_call(args);

        match self.failure() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl<E> CallRecorder<(), E> {
    /// Record a call of a function without arguments.
    pub fn record_call_no_args(&self) {
        self.record_call(());
    }

    /// Record a call of a function without arguments and return the
    /// configured failure, if there is one.
    ///
    /// # Errors
    /// Returns the configured failure.
    pub fn record_call_no_args_and_maybe_fail(&self) -> Result<(), E> {
        self.record_call_and_maybe_fail(())
    }
}

impl<A, E> Default for CallRecorder<A, E> {
    fn default() -> Self {
        Self::unnamed()
    }
}

impl<A, E> Debug for CallRecorder<A, E>
where
    A: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CallRecorder")
            .field("name", &self.name)
            .field("call_count", &self.call_count.get())
            .field("last_arguments", &self.last_arguments.borrow())
            .field("has_side_effect", &self.side_effect.borrow().is_some())
            .field("has_failure", &self.failure.borrow().is_some())
            .finish()
    }
}

impl<A, E> Recorder for CallRecorder<A, E> {
    fn name(&self) -> Option<&str> {
        CallRecorder::name(self)
    }

    fn reset(&self) {
        CallRecorder::reset(self);
    }
}
