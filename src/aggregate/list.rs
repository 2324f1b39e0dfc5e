use crate::outcome::Outcome::{self, Failure, Success};
use std::convert::Infallible;

/// Left-fold the success values, stopping at the first failure.
///
/// The reducer receives the accumulator, the value and its index. It is never
/// called for the failing element or anything after it.
///
/// ```rust
/// use outcome::aggregate::reduce;
/// use outcome::{failure, success, Outcome};
///
/// let total = reduce([success(1), success(2), success(3)], |acc, v, _| acc + v, 0);
/// assert_eq!(total, Outcome::<i32, &str>::Success(6));
///
/// let total = reduce([success(1), failure("e"), success(3)], |acc, v, _| acc + v, 0);
/// assert_eq!(total, failure("e"));
/// ```
pub fn reduce<I, T, E, S, F>(outcomes: I, mut reducer: F, initial: S) -> Outcome<S, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
    F: FnMut(S, T, usize) -> S,
{
    let mut acc = initial;
    for (index, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Success(value) => acc = reducer(acc, value, index),
            Failure(error) => {
                log::trace!("reduce short-circuited at index {index}");
                return Failure(error);
            }
        }
    }
    Success(acc)
}

/// Dual of [`reduce`]: fold the failure values, stopping at the first success.
pub fn reduce_err<I, T, E, S, F>(outcomes: I, mut reducer: F, initial: S) -> Outcome<T, S>
where
    I: IntoIterator<Item = Outcome<T, E>>,
    F: FnMut(S, E, usize) -> S,
{
    let mut acc = initial;
    for (index, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Failure(error) => acc = reducer(acc, error, index),
            Success(value) => {
                log::trace!("reduce_err short-circuited at index {index}");
                return Success(value);
            }
        }
    }
    Failure(acc)
}

/// All success values in order, or the first failure.
pub fn collect<I, T, E>(outcomes: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    reduce(
        outcomes,
        |mut values, value, _| {
            values.push(value);
            values
        },
        Vec::new(),
    )
}

/// All failure values in order, or the first success.
pub fn collect_err<I, T, E>(outcomes: I) -> Outcome<T, Vec<E>>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    reduce_err(
        outcomes,
        |mut errors, error, _| {
            errors.push(error);
            errors
        },
        Vec::new(),
    )
}

/// Split outcomes into every success value and every failure value, in one pass.
///
/// Unlike [`collect`] this looks at every element. Either side may be empty.
///
/// ```rust
/// use outcome::aggregate::separate;
/// use outcome::{failure, success};
///
/// let (successes, failures) = separate([success(1), failure("x"), success(2)]);
/// assert_eq!(successes, success(vec![1, 2]));
/// assert_eq!(failures, failure(vec!["x"]));
/// ```
#[allow(clippy::type_complexity)]
pub fn separate<I, T, E>(outcomes: I) -> (Outcome<Vec<T>, Infallible>, Outcome<Infallible, Vec<E>>)
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let mut successes = Vec::new();
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome {
            Success(value) => successes.push(value),
            Failure(error) => failures.push(error),
        }
    }
    (Success(successes), Failure(failures))
}

/// Split any sequence by `predicate`, keeping relative order on both sides.
///
/// Returns `(matching, rest)`.
pub fn partition<I, T, P>(items: I, mut predicate: P) -> (Vec<T>, Vec<T>)
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> bool,
{
    items.into_iter().partition(|item| predicate(item))
}

/// Invoke tasks one at a time, collecting their success values.
///
/// The first task to fail ends the sequence; tasks after it are never invoked.
///
/// ```rust
/// use outcome::aggregate::sequence;
/// use outcome::{failure, success, Outcome};
///
/// let tasks: Vec<Box<dyn FnOnce() -> Outcome<i32, &'static str>>> = vec![
///     Box::new(|| success(1)),
///     Box::new(|| failure("second")),
///     Box::new(|| panic!("never invoked")),
/// ];
/// assert_eq!(sequence(tasks), failure("second"));
/// ```
pub fn sequence<I, F, T, E>(tasks: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Outcome<T, E>,
{
    let mut values = Vec::new();
    for (index, task) in tasks.into_iter().enumerate() {
        match task() {
            Success(value) => values.push(value),
            Failure(error) => {
                log::trace!("sequence short-circuited at task {index}");
                return Failure(error);
            }
        }
    }
    Success(values)
}
