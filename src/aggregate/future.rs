//! Aggregates over futures of outcomes.

use super::{collect, collect_keyed};
use crate::outcome::Outcome::{self, Failure, Success};
use futures::future::join_all;
use std::future::Future;

/// Await every future concurrently, then collect in index order.
///
/// All inputs are awaited even when one of them fails early. The failure
/// reported is the first by position, not the first to finish.
///
/// ```rust
/// use outcome::aggregate::collect_async;
/// use outcome::{failure, success, Outcome};
/// use std::future::ready;
///
/// let all = futures::executor::block_on(collect_async([ready(success(1)), ready(success(2))]));
/// assert_eq!(all, Outcome::<_, &str>::Success(vec![1, 2]));
/// ```
pub async fn collect_async<I, Fut, T, E>(futures: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Outcome<T, E>>,
{
    collect(join_all(futures).await)
}

/// Keyed form of [`collect_async`]: await every entry, then collect in the
/// entries' iteration order.
pub async fn collect_keyed_async<I, K, Fut, T, E, C>(entries: I) -> Outcome<C, E>
where
    I: IntoIterator<Item = (K, Fut)>,
    Fut: Future<Output = Outcome<T, E>>,
    C: Default + Extend<(K, T)>,
{
    let (keys, futures): (Vec<K>, Vec<Fut>) = entries.into_iter().unzip();
    let outcomes = join_all(futures).await;
    collect_keyed(keys.into_iter().zip(outcomes))
}

/// Invoke and await tasks strictly one after another.
///
/// A task is not invoked until the previous one has resolved to a success. The
/// first failure ends the sequence.
pub async fn sequence_async<I, F, Fut, T, E>(tasks: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Outcome<T, E>>,
{
    let mut values = Vec::new();
    for (index, task) in tasks.into_iter().enumerate() {
        match task().await {
            Success(value) => values.push(value),
            Failure(error) => {
                log::trace!("sequence_async short-circuited at task {index}");
                return Failure(error);
            }
        }
    }
    Success(values)
}
