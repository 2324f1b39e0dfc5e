//! Builders for programs with a first request.

use super::func::{from_fn, once, FromFn, Once};
use crate::{Program, Step};

/// Pair a first request with the program that handles its answer.
///
/// ```rust
/// use outcome::prelude::*;
///
/// let program = init(
///     success::<i32, &str>(10),
///     once(|x: i32| success(x * 2)).map_return(Pure),
/// );
/// assert_eq!(run(program), success(20));
/// ```
pub fn init<I, O, S>(first: O, continuation: S) -> (O, S)
where
    S: Program<I, O>,
{
    (first, continuation)
}

/// Make a first request, then one more built from its answer.
pub fn init_once<I, O, F: FnOnce(I) -> O>(first: O, f: F) -> (O, Once<F>) {
    (first, once(f))
}

/// Make a first request, then continue with a closure-driven program.
///
/// ```rust
/// use outcome::prelude::*;
///
/// let mut total = 0;
/// let (first, mut rest) = init_from_fn(1, move |x: i32| {
///     total += x;
///     if total < 3 { Step::Yielded(total) } else { Step::Complete(total) }
/// });
/// assert_eq!(first, 1);
/// assert_eq!(rest.next(1).unwrap_yielded(), 1);
/// assert_eq!(rest.next(2).unwrap_complete(), 3);
/// ```
pub fn init_from_fn<I, O, D, F>(first: O, f: F) -> (O, FromFn<F>)
where
    F: FnMut(I) -> Step<O, D>,
{
    (first, from_fn(f))
}
