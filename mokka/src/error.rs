//! The [`error`](self) module contains the contract violations a recorder
//! reports when it is used before it was arranged.

use thiserror::Error;
use tracing::error;

use crate::misc::Label;

/// A recorder was asked for a value it was never given.
///
/// This is a mistake in the test setup, not a failure of the system under
/// test, so it is never handed out: [`violated`] turns it into a panic that
/// fails the running test.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub(crate) enum Unarranged {
    /// No stub matched the call and no default value is set.
    #[error("No return value for function{}", quoted(.name))]
    ReturnValue {
        /// Name of the function recorder.
        name: Option<String>,
    },

    /// The property was read before a value was assigned.
    #[error("No value for property{}", quoted(.name))]
    PropertyValue {
        /// Name of the property recorder.
        name: Option<String>,
    },
}

impl Unarranged {
    /// Name of the recorder that reported the violation.
    pub(crate) fn name(&self) -> Option<&str> {
        match self {
            Self::ReturnValue { name } | Self::PropertyValue { name } => name.as_deref(),
        }
    }
}

/// Fail the running test because of the passed contract violation.
#[track_caller]
pub(crate) fn violated(err: Unarranged) -> ! {
    error!(recorder = %Label(err.name()), "{err}");

    panic!("{err}");
}

fn quoted(name: &Option<String>) -> String {
    name.as_ref()
        .map(|name| format!(" '{name}'"))
        .unwrap_or_default()
}
