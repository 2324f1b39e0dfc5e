//! Curried forms of the [`Outcome`] methods.
//!
//! Each function takes the operation's arguments and returns a closure that takes
//! the outcome, so the operations can be lined up in [`pipe!`](crate::pipe) or
//! passed to iterator adapters.
//!
//! ```rust
//! use outcome::{failure, ops, success, Outcome};
//!
//! let outcomes: Vec<Outcome<i32, &str>> = vec![success(1), failure("bad"), success(3)];
//! let doubled: Vec<i32> = outcomes
//!     .into_iter()
//!     .map(ops::map(|n: i32| n * 2))
//!     .map(ops::unwrap_or(0))
//!     .collect();
//! assert_eq!(doubled, vec![2, 0, 6]);
//! ```
//!
//! Closures returned for fallbacks that are moved out (`unwrap_or`,
//! `unwrap_err_or`) clone the fallback on each call, so they can be reused.

use crate::{
    apply::Apply,
    outcome::Outcome::{self, Failure, Success},
};
use std::fmt;

pub fn map<T, S, E, F>(f: F) -> impl FnMut(Outcome<T, E>) -> Outcome<S, E>
where
    F: FnMut(T) -> S,
{
    let mut f = f;
    move |outcome| match outcome {
        Success(v) => Success(f(v)),
        Failure(e) => Failure(e),
    }
}

pub fn map_err<T, E, F2, G>(g: G) -> impl FnMut(Outcome<T, E>) -> Outcome<T, F2>
where
    G: FnMut(E) -> F2,
{
    let mut g = g;
    move |outcome| match outcome {
        Success(v) => Success(v),
        Failure(e) => Failure(g(e)),
    }
}

pub fn chain<T, S, E, F>(f: F) -> impl FnMut(Outcome<T, E>) -> Outcome<S, E>
where
    F: FnMut(T) -> Outcome<S, E>,
{
    let mut f = f;
    move |outcome| match outcome {
        Success(v) => f(v),
        Failure(e) => Failure(e),
    }
}

pub fn chain_err<T, E, F2, G>(g: G) -> impl FnMut(Outcome<T, E>) -> Outcome<T, F2>
where
    G: FnMut(E) -> Outcome<T, F2>,
{
    let mut g = g;
    move |outcome| match outcome {
        Success(v) => Success(v),
        Failure(e) => g(e),
    }
}

pub fn bi_map<T, S, E, F2, F, G>(f: F, g: G) -> impl FnMut(Outcome<T, E>) -> Outcome<S, F2>
where
    F: FnMut(T) -> S,
    G: FnMut(E) -> F2,
{
    let (mut f, mut g) = (f, g);
    move |outcome| match outcome {
        Success(v) => Success(f(v)),
        Failure(e) => Failure(g(e)),
    }
}

pub fn bi_chain<T, S, E, F2, F, G>(f: F, g: G) -> impl FnMut(Outcome<T, E>) -> Outcome<S, F2>
where
    F: FnMut(T) -> Outcome<S, F2>,
    G: FnMut(E) -> Outcome<S, F2>,
{
    let (mut f, mut g) = (f, g);
    move |outcome| match outcome {
        Success(v) => f(v),
        Failure(e) => g(e),
    }
}

pub fn match_with<T, E, R, F, G>(on_success: F, on_failure: G) -> impl FnMut(Outcome<T, E>) -> R
where
    F: FnMut(T) -> R,
    G: FnMut(E) -> R,
{
    let (mut on_success, mut on_failure) = (on_success, on_failure);
    move |outcome| match outcome {
        Success(v) => on_success(v),
        Failure(e) => on_failure(e),
    }
}

pub fn tap<T, E, F>(f: F) -> impl FnMut(Outcome<T, E>) -> Outcome<T, E>
where
    F: FnMut(&T),
{
    let mut f = f;
    move |outcome| {
        if let Success(v) = &outcome {
            f(v);
        }
        outcome
    }
}

pub fn tap_err<T, E, G>(g: G) -> impl FnMut(Outcome<T, E>) -> Outcome<T, E>
where
    G: FnMut(&E),
{
    let mut g = g;
    move |outcome| {
        if let Failure(e) = &outcome {
            g(e);
        }
        outcome
    }
}

pub fn unwrap_or<T: Clone, E>(fallback: T) -> impl Fn(Outcome<T, E>) -> T {
    move |outcome| match outcome {
        Success(v) => v,
        Failure(_) => fallback.clone(),
    }
}

pub fn unwrap_or_else<T, E, F>(f: F) -> impl FnMut(Outcome<T, E>) -> T
where
    F: FnMut(E) -> T,
{
    let mut f = f;
    move |outcome| match outcome {
        Success(v) => v,
        Failure(e) => f(e),
    }
}

pub fn unwrap_err_or<T, E: Clone>(fallback: E) -> impl Fn(Outcome<T, E>) -> E {
    move |outcome| match outcome {
        Success(_) => fallback.clone(),
        Failure(e) => e,
    }
}

pub fn unwrap_err_or_else<T, E, F>(f: F) -> impl FnMut(Outcome<T, E>) -> E
where
    F: FnMut(T) -> E,
{
    let mut f = f;
    move |outcome| match outcome {
        Success(v) => f(v),
        Failure(e) => e,
    }
}

/// Curried [`Outcome::unwrap`]. Usable directly as a function value.
#[track_caller]
pub fn unwrap<T, E: fmt::Debug>(outcome: Outcome<T, E>) -> T {
    outcome.unwrap()
}

/// Curried [`Outcome::unwrap_err`].
#[track_caller]
pub fn unwrap_err<T: fmt::Debug, E>(outcome: Outcome<T, E>) -> E {
    outcome.unwrap_err()
}

pub fn unpack<T>(outcome: Outcome<T, T>) -> T {
    outcome.unpack()
}

/// Curried [`Apply::apply`]: fixes the arguments, takes the function outcome.
///
/// ```rust
/// use outcome::{ops, success, Outcome};
///
/// let add = |a: i32, b: i32| a + b;
/// let applied = ops::apply((success(1), success(2)))(success::<_, ()>(add));
/// assert_eq!(applied, Outcome::Success(3));
/// ```
pub fn apply<Func, Args, E>(args: Args) -> impl FnOnce(Outcome<Func, E>) -> <Outcome<Func, E> as Apply<Args>>::Output
where
    Outcome<Func, E>: Apply<Args>,
{
    move |outcome| outcome.apply(args)
}
