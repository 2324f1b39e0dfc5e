//! Conversions into and out of [`Outcome`].
//!
//! [`IntoOutcome`] is how evaluators normalize a final value: an `Outcome` or a
//! `Result` is taken as-is (no double wrapping), and a plain value marked with
//! [`Pure`] becomes a `Success`.

use crate::outcome::Outcome::{self, Failure, Success};

/// Values that can stand in for an [`Outcome`] failing with `E`.
pub trait IntoOutcome<E> {
    type Success;

    fn into_outcome(self) -> Outcome<Self::Success, E>;
}

/// A plain value treated as an outcome that has already succeeded.
///
/// ```rust
/// use outcome::{ensure_outcome, failure, success, Outcome, Pure};
///
/// let plain: Outcome<i32, &str> = ensure_outcome(Pure(3));
/// assert_eq!(plain, success(3));
///
/// let already: Outcome<i32, &str> = ensure_outcome(failure::<i32, &str>("e"));
/// assert_eq!(already, failure("e"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pure<T>(pub T);

impl<T, E> IntoOutcome<E> for Outcome<T, E> {
    type Success = T;

    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        self
    }
}

impl<T, E> IntoOutcome<E> for Result<T, E> {
    type Success = T;

    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        self.into()
    }
}

impl<T, E> IntoOutcome<E> for Pure<T> {
    type Success = T;

    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Success(self.0)
    }
}

/// Normalizes `value` into an [`Outcome`], leaving an existing outcome untouched.
#[inline]
pub fn ensure_outcome<E, R: IntoOutcome<E>>(value: R) -> Outcome<R::Success, E> {
    value.into_outcome()
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => Success(v),
            Err(e) => Failure(e),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

/// Collects success values, stopping at the first failure.
///
/// Items after the first failure are never pulled from the iterator, so lazily
/// produced outcomes behind it are never computed.
impl<C, T, E> FromIterator<Outcome<T, E>> for Outcome<C, E>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        let mut failed = None;
        let collected: C = iter
            .into_iter()
            .map_while(|outcome| match outcome {
                Success(v) => Some(v),
                Failure(e) => {
                    failed = Some(e);
                    None
                }
            })
            .collect();

        match failed {
            Some(e) => Failure(e),
            None => Success(collected),
        }
    }
}
