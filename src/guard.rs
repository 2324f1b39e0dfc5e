//! Predicate-guarded constructors.

use crate::outcome::Outcome::{self, Failure, Success};

/// `Success(value)` if `predicate` accepts it, otherwise `Failure(fallback(value))`.
///
/// ```rust
/// use outcome::{failure, success, success_if};
///
/// assert_eq!(success_if(4, |n| n % 2 == 0, |n| format!("{n} is odd")), success(4));
/// assert_eq!(success_if(3, |n| n % 2 == 0, |n| format!("{n} is odd")), failure("3 is odd".to_string()));
/// ```
pub fn success_if<T, E, P, F>(value: T, predicate: P, fallback: F) -> Outcome<T, E>
where
    P: FnOnce(&T) -> bool,
    F: FnOnce(T) -> E,
{
    if predicate(&value) {
        Success(value)
    } else {
        Failure(fallback(value))
    }
}

/// `Success` for a present value, `Failure(fallback())` for an absent one.
pub fn success_if_some<T, E, F>(value: Option<T>, fallback: F) -> Outcome<T, E>
where
    F: FnOnce() -> E,
{
    match value {
        Some(v) => Success(v),
        None => Failure(fallback()),
    }
}

/// Curried [`success_if`]: builds a reusable checker.
///
/// ```rust
/// use outcome::{failure, guard, success};
///
/// let positive = guard(|n: &i32| *n > 0, |_| "not positive");
/// assert_eq!(positive(5), success(5));
/// assert_eq!(positive(-1), failure("not positive"));
/// ```
pub fn guard<T, E, P, F>(predicate: P, fallback: F) -> impl Fn(T) -> Outcome<T, E>
where
    P: Fn(&T) -> bool,
    F: Fn(T) -> E,
{
    move |value| success_if(value, &predicate, &fallback)
}

/// Curried [`success_if_some`].
pub fn guard_some<T, E, F>(fallback: F) -> impl Fn(Option<T>) -> Outcome<T, E>
where
    F: Fn() -> E,
{
    move |value| success_if_some(value, &fallback)
}
