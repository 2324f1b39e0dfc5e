//! The two-variant success/failure value and its elementary combinators.
//!
//! Every combinator consumes the receiver and returns a new [`Outcome`] (or passes
//! the receiver through unchanged). Nothing here mutates an existing value.
//!
//! # Examples
//!
//! ```rust
//! use outcome::{failure, success, Outcome};
//!
//! fn halve(n: i32) -> Outcome<i32, &'static str> {
//!     if n % 2 == 0 { success(n / 2) } else { failure("odd") }
//! }
//!
//! assert_eq!(success(8).chain(halve).chain(halve), success(2));
//! assert_eq!(success(6).chain(halve).chain(halve), failure("odd"));
//! assert_eq!(halve(3).unwrap_or(0), 0);
//! ```

use std::fmt;

use either::Either;

use crate::fault::Fault;
use crate::step::Step;

/// A value that is either a `Success(T)` or a `Failure(E)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use = "this `Outcome` may be a `Failure` variant, which should be handled"]
pub enum Outcome<T, E> {
    /// The operation succeeded with a value
    Success(T),
    /// The operation failed with an error
    Failure(E),
}

use Outcome::{Failure, Success};

/// Wraps a value in `Success`.
#[inline]
pub fn success<T, E>(value: T) -> Outcome<T, E> {
    Success(value)
}

/// Wraps an error in `Failure`.
#[inline]
pub fn failure<T, E>(error: E) -> Outcome<T, E> {
    Failure(error)
}

/// Free-function form of [`Outcome::is_success`], usable as a filter predicate.
pub fn is_success<T, E>(outcome: &Outcome<T, E>) -> bool {
    outcome.is_success()
}

/// Free-function form of [`Outcome::is_failure`], usable as a filter predicate.
pub fn is_failure<T, E>(outcome: &Outcome<T, E>) -> bool {
    outcome.is_failure()
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if the outcome is `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    /// Returns `true` if the outcome is `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Failure(_))
    }

    /// Returns `true` if the outcome is `Success` and the value matches a predicate.
    #[inline]
    pub fn is_success_and(&self, f: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Success(v) => f(v),
            Failure(_) => false,
        }
    }

    /// Returns `true` if the outcome is `Failure` and the error matches a predicate.
    #[inline]
    pub fn is_failure_and(&self, f: impl FnOnce(&E) -> bool) -> bool {
        match self {
            Success(_) => false,
            Failure(e) => f(e),
        }
    }

    /// The success value, if any.
    #[inline]
    pub fn success_value(self) -> Option<T> {
        match self {
            Success(v) => Some(v),
            Failure(_) => None,
        }
    }

    /// The failure value, if any.
    #[inline]
    pub fn failure_value(self) -> Option<E> {
        match self {
            Success(_) => None,
            Failure(e) => Some(e),
        }
    }

    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Success(v) => Success(v),
            Failure(e) => Failure(e),
        }
    }

    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Success(v) => Success(v),
            Failure(e) => Failure(e),
        }
    }

    /// Transforms the success value, passing a failure through.
    ///
    /// ```rust
    /// use outcome::{failure, success, Outcome};
    ///
    /// assert_eq!(success::<i32, ()>(2).map(|x| x * 10), success(20));
    /// let failed: Outcome<i32, &str> = failure("no");
    /// assert_eq!(failed.map(|x| x * 10), failure("no"));
    /// ```
    #[inline]
    pub fn map<S, F>(self, f: F) -> Outcome<S, E>
    where
        F: FnOnce(T) -> S,
    {
        match self {
            Success(v) => Success(f(v)),
            Failure(e) => Failure(e),
        }
    }

    /// Transforms the failure value, passing a success through.
    #[inline]
    pub fn map_err<F2, G>(self, g: G) -> Outcome<T, F2>
    where
        G: FnOnce(E) -> F2,
    {
        match self {
            Success(v) => Success(v),
            Failure(e) => Failure(g(e)),
        }
    }

    /// Continues with `f` on success. A failure is passed through.
    ///
    /// The continuation keeps the error type; widen it first with
    /// [`err_into`](Outcome::err_into) when steps fail with different types.
    #[inline]
    pub fn chain<S, F>(self, f: F) -> Outcome<S, E>
    where
        F: FnOnce(T) -> Outcome<S, E>,
    {
        match self {
            Success(v) => f(v),
            Failure(e) => Failure(e),
        }
    }

    /// Recovers with `g` on failure. A success is passed through.
    #[inline]
    pub fn chain_err<F2, G>(self, g: G) -> Outcome<T, F2>
    where
        G: FnOnce(E) -> Outcome<T, F2>,
    {
        match self {
            Success(v) => Success(v),
            Failure(e) => g(e),
        }
    }

    /// Applies `f` to a success or `g` to a failure.
    #[inline]
    pub fn bi_map<S, F2, F, G>(self, f: F, g: G) -> Outcome<S, F2>
    where
        F: FnOnce(T) -> S,
        G: FnOnce(E) -> F2,
    {
        match self {
            Success(v) => Success(f(v)),
            Failure(e) => Failure(g(e)),
        }
    }

    /// Continues with `f` on success or `g` on failure.
    #[inline]
    pub fn bi_chain<S, F2, F, G>(self, f: F, g: G) -> Outcome<S, F2>
    where
        F: FnOnce(T) -> Outcome<S, F2>,
        G: FnOnce(E) -> Outcome<S, F2>,
    {
        match self {
            Success(v) => f(v),
            Failure(e) => g(e),
        }
    }

    /// Widens the success type through `Into`.
    #[inline]
    pub fn success_into<S>(self) -> Outcome<S, E>
    where
        T: Into<S>,
    {
        self.map(Into::into)
    }

    /// Widens the error type through `Into`.
    ///
    /// ```rust
    /// use outcome::{failure, Outcome};
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum AppError { Parse(&'static str) }
    /// impl From<&'static str> for AppError {
    ///     fn from(e: &'static str) -> Self { AppError::Parse(e) }
    /// }
    ///
    /// let parsed: Outcome<i32, &'static str> = failure("bad digit");
    /// let widened: Outcome<i32, AppError> = parsed.err_into();
    /// assert_eq!(widened, failure(AppError::Parse("bad digit")));
    /// ```
    #[inline]
    pub fn err_into<F2>(self) -> Outcome<T, F2>
    where
        E: Into<F2>,
    {
        self.map_err(Into::into)
    }

    /// Calls `on_success` or `on_failure` and returns what it returns.
    #[inline]
    pub fn match_with<R, F, G>(self, on_success: F, on_failure: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Success(v) => on_success(v),
            Failure(e) => on_failure(e),
        }
    }

    /// Calls `f` with the success value, then returns the outcome unchanged.
    #[inline]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Success(v) = &self {
            f(v);
        }
        self
    }

    /// Calls `g` with the failure value, then returns the outcome unchanged.
    #[inline]
    pub fn tap_err<G>(self, g: G) -> Self
    where
        G: FnOnce(&E),
    {
        if let Failure(e) = &self {
            g(e);
        }
        self
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with [`Fault::ValueAbsent`] carrying the error if the outcome is a `Failure`.
    ///
    /// ```should_panic
    /// use outcome::{failure, Outcome};
    ///
    /// let x: Outcome<i32, &str> = failure("emergency failure");
    /// x.unwrap(); // panics with `value absent, outcome is `Failure("emergency failure")``
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Success(v) => v,
            Failure(e) => Fault::value_absent("called `Outcome::unwrap()`", &e).raise(),
        }
    }

    /// Returns the success value, panicking with `msg` and the error otherwise.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &'static str) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Success(v) => v,
            Failure(e) => Fault::value_absent(msg, &e).raise(),
        }
    }

    /// Returns the success value or `fallback`.
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Success(v) => v,
            Failure(_) => fallback,
        }
    }

    /// Returns the success value or computes one from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Success(v) => v,
            Failure(e) => f(e),
        }
    }

    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }

    /// Returns the failure value.
    ///
    /// # Panics
    ///
    /// Panics with [`Fault::ErrorAbsent`] carrying the value if the outcome is a `Success`.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Success(v) => Fault::error_absent("called `Outcome::unwrap_err()`", &v).raise(),
            Failure(e) => e,
        }
    }

    #[inline]
    #[track_caller]
    pub fn expect_err(self, msg: &'static str) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Success(v) => Fault::error_absent(msg, &v).raise(),
            Failure(e) => e,
        }
    }

    /// Returns the failure value or `fallback`.
    #[inline]
    pub fn unwrap_err_or(self, fallback: E) -> E {
        match self {
            Success(_) => fallback,
            Failure(e) => e,
        }
    }

    /// Returns the failure value or computes one from the success value.
    #[inline]
    pub fn unwrap_err_or_else<F>(self, f: F) -> E
    where
        F: FnOnce(T) -> E,
    {
        match self {
            Success(v) => f(v),
            Failure(e) => e,
        }
    }

    /// Converts into a std `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Success(v) => Ok(v),
            Failure(e) => Err(e),
        }
    }

    /// Unwraps this outcome inside an [`attempt`](crate::attempt) body, or stops it.
    ///
    /// Use with `?`: a failure returns from the body early, converted through `From`
    /// into the body's error type.
    ///
    /// ```rust
    /// use outcome::{attempt, failure, success, Outcome};
    ///
    /// let total: Outcome<i32, String> = attempt(|| {
    ///     let a = success::<i32, String>(1).bind()?;
    ///     let b = success::<i32, String>(2).bind()?;
    ///     Ok(a + b)
    /// });
    /// assert_eq!(total, success(3));
    /// ```
    #[inline]
    pub fn bind(self) -> Result<T, E> {
        self.into_result()
    }

    /// The single-step protocol value of this outcome.
    ///
    /// A failure suspends exactly once, producing its error. A success completes,
    /// producing its value.
    #[inline]
    pub fn into_step(self) -> Step<E, T> {
        match self {
            Success(v) => Step::Complete(v),
            Failure(e) => Step::Yielded(e),
        }
    }

    #[inline]
    pub fn into_either(self) -> Either<E, T> {
        match self {
            Success(v) => Either::Right(v),
            Failure(e) => Either::Left(e),
        }
    }

    /// An iterator over the success value, if any.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().success_value().into_iter()
    }
}

impl<T> Outcome<T, T> {
    /// Returns whichever value is held.
    #[inline]
    pub fn unpack(self) -> T {
        match self {
            Success(v) | Failure(v) => v,
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.chain(|inner| inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn ok(v: i32) -> Outcome<i32, &'static str> {
        Success(v)
    }

    fn err(e: &'static str) -> Outcome<i32, &'static str> {
        Failure(e)
    }

    #[test]
    fn test_predicates() {
        assert!(ok(1).is_success());
        assert!(!ok(1).is_failure());
        assert!(err("e").is_failure());
        assert!(ok(2).is_success_and(|v| *v == 2));
        assert!(!err("e").is_success_and(|_| true));
        assert!(err("e").is_failure_and(|e| *e == "e"));
        assert!(is_success(&ok(1)));
        assert!(is_failure(&err("e")));
    }

    #[test]
    fn test_map_and_map_err() {
        assert_eq!(ok(2).map(|x| x + 1), Success(3));
        assert_eq!(err("e").map(|x| x + 1), Failure("e"));
        assert_eq!(ok(2).map_err(str::len), Success(2));
        assert_eq!(err("abc").map_err(str::len), Failure(3));
    }

    #[test]
    fn test_chain_and_chain_err() {
        let halve = |x: i32| if x % 2 == 0 { ok(x / 2) } else { err("odd") };

        assert_eq!(ok(4).chain(halve), Success(2));
        assert_eq!(ok(3).chain(halve), Failure("odd"));
        assert_eq!(err("first").chain(halve), Failure("first"));

        let recover = |e: &'static str| -> Outcome<i32, usize> {
            if e == "soft" { Success(0) } else { Failure(e.len()) }
        };
        assert_eq!(err("soft").chain_err(recover), Success(0));
        assert_eq!(err("hard!").chain_err(recover), Failure(5));
        assert_eq!(ok(9).chain_err(recover), Success(9));
    }

    #[test]
    fn test_chain_does_not_call_continuation_on_failure() {
        let calls = Cell::new(0);
        let _ = err("e").chain(|x| {
            calls.set(calls.get() + 1);
            ok(x)
        });
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_bi_map_and_bi_chain() {
        assert_eq!(ok(1).bi_map(|x| x * 2, str::len), Success(2));
        assert_eq!(err("ab").bi_map(|x| x * 2, str::len), Failure(2));

        let on_ok = |x: i32| -> Outcome<String, usize> { Success(x.to_string()) };
        let on_err = |e: &str| -> Outcome<String, usize> { Failure(e.len()) };
        assert_eq!(ok(7).bi_chain(on_ok, on_err), Success("7".to_string()));
        assert_eq!(err("abc").bi_chain(on_ok, on_err), Failure(3));
    }

    #[test]
    fn test_unwrap_family() {
        assert_eq!(ok(1).unwrap(), 1);
        assert_eq!(ok(1).unwrap_or(5), 1);
        assert_eq!(err("e").unwrap_or(5), 5);
        assert_eq!(err("abcd").unwrap_or_else(|e| e.len() as i32), 4);
        assert_eq!(err("e").unwrap_or_default(), 0);
        assert_eq!(err("e").unwrap_err(), "e");
        assert_eq!(ok(1).unwrap_err_or("fallback"), "fallback");
        assert_eq!(err("e").unwrap_err_or("fallback"), "e");
        assert_eq!(ok(1).unwrap_err_or_else(|_| "from value"), "from value");
    }

    #[test]
    #[should_panic(expected = "called `Outcome::unwrap()`: value absent, outcome is `Failure(\"boom\")`")]
    fn test_unwrap_on_failure_panics_with_payload() {
        err("boom").unwrap();
    }

    #[test]
    #[should_panic(expected = "called `Outcome::unwrap_err()`: error absent, outcome is `Success(42)`")]
    fn test_unwrap_err_on_success_panics_with_payload() {
        ok(42).unwrap_err();
    }

    #[test]
    #[should_panic(expected = "config missing: value absent")]
    fn test_expect_uses_message() {
        err("nope").expect("config missing");
    }

    #[test]
    fn test_match_with() {
        assert_eq!(ok(3).match_with(|v| v * 2, |e| e.len() as i32), 6);
        assert_eq!(err("ab").match_with(|v| v * 2, |e| e.len() as i32), 2);
    }

    #[test]
    fn test_tap_returns_self_and_runs_side_effect_on_matching_variant() {
        let seen = Cell::new(0);
        assert_eq!(ok(5).tap(|v| seen.set(*v)), Success(5));
        assert_eq!(seen.get(), 5);

        assert_eq!(err("e").tap(|v| seen.set(*v + 1)), Failure("e"));
        assert_eq!(seen.get(), 5);

        let seen_err = Cell::new("");
        assert_eq!(err("bad").tap_err(|e| seen_err.set(e)), Failure("bad"));
        assert_eq!(seen_err.get(), "bad");
        assert_eq!(ok(1).tap_err(|_| seen_err.set("never")), Success(1));
        assert_eq!(seen_err.get(), "bad");
    }

    #[test]
    fn test_into_step_protocol() {
        assert_eq!(ok(1).into_step(), Step::Complete(1));
        assert_eq!(err("e").into_step(), Step::Yielded("e"));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(ok(1).into_result(), Ok(1));
        assert_eq!(err("e").bind(), Err("e"));
        assert_eq!(ok(1).into_either(), Either::Right(1));
        assert_eq!(err("e").into_either(), Either::Left("e"));
        assert_eq!(ok(1).success_value(), Some(1));
        assert_eq!(ok(1).failure_value(), None);
        assert_eq!(ok(1).iter().collect::<Vec<_>>(), vec![&1]);
        assert_eq!(err("e").iter().count(), 0);
    }

    #[test]
    fn test_unpack_and_flatten() {
        let same: Outcome<i32, i32> = Failure(3);
        assert_eq!(same.unpack(), 3);

        let nested: Outcome<Outcome<i32, &str>, &str> = Success(Failure("inner"));
        assert_eq!(nested.flatten(), Failure("inner"));
        let nested: Outcome<Outcome<i32, &str>, &str> = Success(Success(1));
        assert_eq!(nested.flatten(), Success(1));
    }

    #[test]
    fn test_widening() {
        let narrow: Outcome<u8, u8> = Failure(7);
        let wide: Outcome<u8, u32> = narrow.err_into();
        assert_eq!(wide, Failure(7u32));

        let narrow: Outcome<u8, u8> = Success(7);
        let wide: Outcome<u64, u8> = narrow.success_into();
        assert_eq!(wide, Success(7u64));
    }
}
