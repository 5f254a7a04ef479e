//! Recorders for hand-written fakes.
//!
//! A fake implements the trait of a real dependency and delegates each of its
//! members to a recorder:
//!
//! - [`CallRecorder`] counts the calls of a function and keeps the arguments of
//!   the last call. It can execute a side effect and inject a failure.
//! - [`ReturnValueResolver`] does the same for functions that return a value
//!   and picks the value from an ordered list of (conditional) stubs.
//! - [`PropertyRecorder`] holds the fake value of a property and records
//!   whether it was read or written.
//!
//! ```
//! use mokka::{CallRecorder, PropertyRecorder, ReturnValueResolver};
//!
//! trait Foo {
//!     fn baz(&self) -> i32;
//!     fn do_something(&self, arg: &str) -> i32;
//!     fn notify(&self);
//! }
//!
//! #[derive(Default)]
//! struct FooFake {
//!     baz: PropertyRecorder<i32>,
//!     do_something: ReturnValueResolver<String, i32>,
//!     notify: CallRecorder<()>,
//! }
//!
//! impl Foo for FooFake {
//!     fn baz(&self) -> i32 {
//!         self.baz.get()
//!     }
//!
//!     fn do_something(&self, arg: &str) -> i32 {
//!         self.do_something.record_call_and_return(arg.to_owned())
//!     }
//!
//!     fn notify(&self) {
//!         self.notify.record_call_no_args();
//!     }
//! }
//!
//! fn multiply(foo: &impl Foo) -> i32 {
//!     foo.notify();
//!     foo.do_something("abc") * foo.baz()
//! }
//!
//! let foo = FooFake::default();
//! foo.baz.set_current_value(2);
//! foo.do_something.returns(21);
//!
//! assert_eq!(multiply(&foo), 42);
//! assert!(foo.notify.called_once());
//! assert_eq!(foo.do_something.argument(), Some("abc".to_owned()));
//! ```
//!
//! Recorders use interior mutability without locking. They are not [`Sync`]
//! and belong to the thread of the test that created them.

pub mod matcher;
pub mod misc;

mod call;
mod error;
mod property;
mod returns;

pub use call::CallRecorder;
pub use matcher::Matcher;
pub use misc::Recorder;
pub use property::PropertyRecorder;
pub use returns::ReturnValueResolver;
