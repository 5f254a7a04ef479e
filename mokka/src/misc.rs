//! The [`misc`](self) module contains different helper types and traits that
//! are shared by all recorders.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Common interface of all recorders that may be embedded in a fake.
///
/// A fake usually owns one recorder per member of the faked trait. Exposing
/// them as `&dyn Recorder` allows to tear down the whole fake in one loop:
///
/// ```
/// use mokka::{CallRecorder, PropertyRecorder, Recorder};
///
/// let turn_on = CallRecorder::<()>::new("turn_on()");
/// let is_on = PropertyRecorder::<bool>::new("is_on");
///
/// turn_on.record_call_no_args();
/// is_on.set(true);
///
/// for recorder in [&turn_on as &dyn Recorder, &is_on] {
///     recorder.reset();
/// }
///
/// assert!(!turn_on.called());
/// assert!(!is_on.has_been_written());
/// ```
pub trait Recorder {
    /// Returns the name of the recorded member, if one was given.
    fn name(&self) -> Option<&str>;

    /// Reset the recorder to the state it had right after construction.
    fn reset(&self);
}

/// Helper to display the optional name of a recorder in log events.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Label<'a>(pub(crate) Option<&'a str>);

impl Display for Label<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.0 {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "<unnamed>"),
        }
    }
}
