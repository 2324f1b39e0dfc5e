//! Programmer-error faults.
//!
//! A [`Fault`] is never returned as a value. It is the message carried by the panic
//! raised when code breaks the contract of an extraction operation, for example
//! calling [`Outcome::unwrap`](crate::Outcome::unwrap) on a `Failure`. Domain
//! failures travel through `Outcome::Failure` instead.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    /// A success value was demanded from a `Failure`.
    #[error("{context}: value absent, outcome is `Failure({payload})`")]
    ValueAbsent {
        context: &'static str,
        payload: String,
    },
    /// A failure value was demanded from a `Success`.
    #[error("{context}: error absent, outcome is `Success({payload})`")]
    ErrorAbsent {
        context: &'static str,
        payload: String,
    },
    /// Code marked unreachable was executed.
    #[error("{0}")]
    Unreachable(String),
}

impl Fault {
    pub(crate) fn value_absent(context: &'static str, payload: &dyn fmt::Debug) -> Self {
        Fault::ValueAbsent {
            context,
            payload: format!("{payload:?}"),
        }
    }

    pub(crate) fn error_absent(context: &'static str, payload: &dyn fmt::Debug) -> Self {
        Fault::ErrorAbsent {
            context,
            payload: format!("{payload:?}"),
        }
    }

    /// Panics with this fault as the message.
    #[track_caller]
    pub fn raise(self) -> ! {
        panic!("{self}")
    }
}
