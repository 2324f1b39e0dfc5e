//! Aggregates over keyed entries.
//!
//! Entries are `(key, outcome)` pairs from any iterator: a `BTreeMap` (sorted by
//! key), a `Vec` of pairs (insertion order), a `HashMap` (its own order). The
//! first failure is the first one the iterator yields.

use crate::outcome::Outcome::{self, Failure, Success};

/// Fold success values along with their keys, stopping at the first failure.
pub fn reduce_keyed<I, K, T, E, S, F>(entries: I, mut reducer: F, initial: S) -> Outcome<S, E>
where
    I: IntoIterator<Item = (K, Outcome<T, E>)>,
    F: FnMut(S, K, T) -> S,
{
    let mut acc = initial;
    for (key, outcome) in entries {
        match outcome {
            Success(value) => acc = reducer(acc, key, value),
            Failure(error) => {
                log::trace!("reduce_keyed short-circuited");
                return Failure(error);
            }
        }
    }
    Success(acc)
}

/// Dual of [`reduce_keyed`]: fold failure values, stopping at the first success.
pub fn reduce_keyed_err<I, K, T, E, S, F>(entries: I, mut reducer: F, initial: S) -> Outcome<T, S>
where
    I: IntoIterator<Item = (K, Outcome<T, E>)>,
    F: FnMut(S, K, E) -> S,
{
    let mut acc = initial;
    for (key, outcome) in entries {
        match outcome {
            Failure(error) => acc = reducer(acc, key, error),
            Success(value) => {
                log::trace!("reduce_keyed_err short-circuited");
                return Success(value);
            }
        }
    }
    Failure(acc)
}

/// Same keys mapped to their success values, or the first failure.
///
/// ```rust
/// use outcome::aggregate::collect_keyed;
/// use outcome::{failure, success, Outcome};
/// use std::collections::BTreeMap;
///
/// let entries = BTreeMap::from([("a", success(1)), ("b", success(2))]);
/// let collected: Outcome<BTreeMap<_, _>, &str> = collect_keyed(entries);
/// assert_eq!(collected, success(BTreeMap::from([("a", 1), ("b", 2)])));
///
/// let entries = BTreeMap::from([("a", success(1)), ("b", failure("bad b")), ("c", failure("bad c"))]);
/// let collected: Outcome<BTreeMap<_, _>, &str> = collect_keyed(entries);
/// assert_eq!(collected, failure("bad b"));
/// ```
pub fn collect_keyed<I, K, T, E, C>(entries: I) -> Outcome<C, E>
where
    I: IntoIterator<Item = (K, Outcome<T, E>)>,
    C: Default + Extend<(K, T)>,
{
    reduce_keyed(
        entries,
        |mut collected: C, key, value| {
            collected.extend(Some((key, value)));
            collected
        },
        C::default(),
    )
}

/// Same keys mapped to their failure values, or the first success.
pub fn collect_keyed_err<I, K, T, E, C>(entries: I) -> Outcome<T, C>
where
    I: IntoIterator<Item = (K, Outcome<T, E>)>,
    C: Default + Extend<(K, E)>,
{
    reduce_keyed_err(
        entries,
        |mut collected: C, key, error| {
            collected.extend(Some((key, error)));
            collected
        },
        C::default(),
    )
}
