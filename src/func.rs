//! A small function toolkit for pipeline-style code.
//!
//! [`pipe!`](crate::pipe) threads a value left to right through unary functions;
//! [`compose!`](crate::compose) builds the right-to-left composition. Together with
//! the curried functions in [`ops`](crate::ops) they let outcome transformations be
//! written as a flat list of steps.
//!
//! ```rust
//! use outcome::{ops, pipe, success, Outcome};
//!
//! let label = pipe!(
//!     success::<i32, &str>(20),
//!     ops::map(|n: i32| n + 1),
//!     ops::chain(|n: i32| if n > 0 { success(n) } else { Outcome::Failure("negative") }),
//!     ops::unwrap_or(0),
//! );
//! assert_eq!(label, 21);
//! ```

use crate::fault::Fault;
use std::convert::Infallible;

/// Returns its argument.
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// A closure that returns a clone of `value` every time it is called.
pub fn constant<T: Clone>(value: T) -> impl Fn() -> T {
    move || value.clone()
}

/// A closure that hands back `value` once.
pub fn lazy<T>(value: T) -> impl FnOnce() -> T {
    move || value
}

/// `compose(f, g)` is `|x| f(g(x))`.
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |x| f(g(x))
}

/// Exhaustiveness helper for the statically impossible side of an outcome.
///
/// ```rust
/// use outcome::func::absurd;
/// use outcome::{success, Outcome};
/// use std::convert::Infallible;
///
/// let cannot_fail: Outcome<i32, Infallible> = success(3);
/// let n = cannot_fail.unwrap_or_else(absurd);
/// assert_eq!(n, 3);
/// ```
#[inline]
pub fn absurd<T>(never: Infallible) -> T {
    match never {}
}

/// Marks code that must never run. Panics with [`Fault::Unreachable`].
#[track_caller]
pub fn unreachable(message: Option<&str>) -> ! {
    let message = message.unwrap_or("Unreachable code reached");
    Fault::Unreachable(message.to_string()).raise()
}

/// Method-call form of function application: `value.pipe(f)` is `f(value)`.
pub trait Pipe: Sized {
    #[inline]
    fn pipe<R, F>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }
}

impl<T> Pipe for T {}

/// Threads a value through unary functions, left to right.
///
/// `pipe!(x, f, g, h)` is `h(g(f(x)))`.
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };
    ($value:expr, $($f:expr),+ $(,)?) => {{
        let value = $value;
        $(
            let value = ($f)(value);
        )+
        value
    }};
}

/// Composes unary functions right to left into one closure.
///
/// `compose!(h, g, f)` is `|x| h(g(f(x)))`.
#[macro_export]
macro_rules! compose {
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {{
        let outer = $f;
        let inner = $crate::compose!($($rest),+);
        move |value| outer(inner(value))
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Outcome::{self, Success};

    #[test]
    fn test_identity_and_constant() {
        assert_eq!(identity(4), 4);
        let always = constant(String::from("x"));
        assert_eq!(always(), "x");
        assert_eq!(always(), "x");
        assert_eq!(lazy(vec![1])(), vec![1]);
    }

    #[test]
    fn test_compose_applies_right_to_left() {
        let add_then_double = compose(|x: i32| x * 2, |x: i32| x + 1);
        assert_eq!(add_then_double(3), 8);

        let three = compose!(|x: i32| x - 1, |x: i32| x * 2, |x: i32| x + 1);
        assert_eq!(three(3), 7);
    }

    #[test]
    fn test_pipe_applies_left_to_right() {
        assert_eq!(pipe!(3), 3);
        assert_eq!(pipe!(3, |x: i32| x + 1, |x: i32| x * 2), 8);
        assert_eq!(3_i32.pipe(|x| x.to_string()), "3");
    }

    #[test]
    fn test_absurd_unifies_with_any_type() {
        let o: Outcome<&str, Infallible> = Success("ok");
        assert_eq!(o.unwrap_or_else(absurd), "ok");
    }

    #[test]
    #[should_panic(expected = "Unreachable code reached")]
    fn test_unreachable_default_message() {
        unreachable(None)
    }

    #[test]
    #[should_panic(expected = "Custom message")]
    fn test_unreachable_custom_message() {
        unreachable(Some("Custom message"))
    }
}
