//! The [`property`](self) module implements the [`PropertyRecorder`] type.

use std::cell::{Cell, RefCell};
use std::fmt::{Debug, Formatter, Result as FmtResult};

use tracing::trace;

use crate::error::{violated, Unarranged};
use crate::misc::{Label, Recorder};

/// Provides the value of a faked property and records whether the system
/// under test has read or written it.
///
/// Rust traits have no properties, so a property is usually modelled as a
/// getter/setter pair:
///
/// ```
/// use mokka::PropertyRecorder;
///
/// trait Battery {
///     fn capacity(&self) -> f64;
///     fn set_capacity(&self, value: f64);
/// }
///
/// #[derive(Default)]
/// struct BatteryFake {
///     capacity: PropertyRecorder<f64>,
/// }
///
/// impl Battery for BatteryFake {
///     fn capacity(&self) -> f64 {
///         self.capacity.get()
///     }
///
///     fn set_capacity(&self, value: f64) {
///         self.capacity.set(value);
///     }
/// }
///
/// let battery = BatteryFake::default();
/// battery.capacity.set_current_value(90.0);
///
/// assert_eq!(battery.capacity(), 90.0);
/// assert!(battery.capacity.has_been_read());
/// assert!(!battery.capacity.has_been_written());
/// ```
///
/// Test code arranges the value with [`set_current_value`](Self::set_current_value);
/// only the fake's setter should call [`set`](Self::set).
pub struct PropertyRecorder<T> {
    name: Option<String>,
    value: RefCell<Option<T>>,
    has_been_read: Cell<bool>,
    has_been_written: Cell<bool>,
}

impl<T> PropertyRecorder<T> {
    /// Create a new recorder for the property with the passed `name`.
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
            value: RefCell::new(None),
            has_been_read: Cell::new(false),
            has_been_written: Cell::new(false),
        }
    }

    /// Name of the recorded property, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns `true` once the property was read through [`get`](Self::get).
    pub fn has_been_read(&self) -> bool {
        self.has_been_read.get()
    }

    /// Returns `true` once the property was written through [`set`](Self::set).
    pub fn has_been_written(&self) -> bool {
        self.has_been_written.get()
    }

    /// Record that the system under test wrote `value` to the property.
    ///
    /// Use this in the setter of the fake. To fake a value from test code
    /// use [`set_current_value`](Self::set_current_value) instead.
    pub fn set(&self, value: T) {
        trace!(recorder = %self.label(), "property written");

        self.has_been_written.set(true);
        *self.value.borrow_mut() = Some(value);
    }

    /// Arrange the value of the property without marking it as written.
    pub fn set_current_value(&self, value: T) {
        *self.value.borrow_mut() = Some(value);
    }

    /// Reset the recorder to its initial state.
    ///
    /// This removes the value and clears the read and written flags.
    pub fn reset(&self) {
        self.value.borrow_mut().take();
        self.has_been_read.set(false);
        self.has_been_written.set(false);
    }

    fn label(&self) -> Label<'_> {
        Label(self.name())
    }
}

impl<T> PropertyRecorder<T>
where
    T: Clone,
{
    /// Read the property from the system under test.
    ///
    /// Use this in the getter of the fake.
    ///
    /// # Panics
    /// Panics if no value has been set. The property is marked as read before.
    #[track_caller]
    pub fn get(&self) -> T {
        trace!(recorder = %self.label(), "property read");

        self.has_been_read.set(true);

        match self.current_value() {
            Some(value) => value,
            None => violated(Unarranged::PropertyValue {
                name: self.name.clone(),
            }),
        }
    }

    /// The current value of the property, without marking it as read.
    pub fn current_value(&self) -> Option<T> {
        self.value.borrow().clone()
    }
}

impl<T> Default for PropertyRecorder<T> {
    fn default() -> Self {
        Self::unnamed()
    }
}

impl<T> Debug for PropertyRecorder<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("PropertyRecorder")
            .field("name", &self.name)
            .field("value", &self.value.borrow())
            .field("has_been_read", &self.has_been_read.get())
            .field("has_been_written", &self.has_been_written.get())
            .finish()
    }
}

impl<T> Recorder for PropertyRecorder<T> {
    fn name(&self) -> Option<&str> {
        PropertyRecorder::name(self)
    }

    fn reset(&self) {
        PropertyRecorder::reset(self);
    }
}
