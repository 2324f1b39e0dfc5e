//! Combinators on futures of outcomes.
//!
//! [`OutcomeFutureExt`] mirrors the [`Outcome`] methods one step later: each
//! `then_*` method awaits the outcome and applies the matching operation.
//! `Outcome` itself implements [`IntoFuture`], so an already-available outcome can
//! be awaited, and continuations passed to [`then_chain`](OutcomeFutureExt::then_chain)
//! may return either an outcome or a future of one.
//!
//! ```rust
//! use futures::executor::block_on;
//! use outcome::{success, Outcome, OutcomeFutureExt};
//!
//! async fn fetch(id: u32) -> Outcome<u32, String> {
//!     success(id * 100)
//! }
//!
//! let label = block_on(
//!     fetch(4)
//!         .then_chain(|n| async move { success(n + 1) })
//!         .then_chain(|n| if n > 0 { success(n) } else { Outcome::Failure("zero".to_string()) })
//!         .then_map(|n| format!("#{n}"))
//!         .then_unwrap_or_else(|e| e),
//! );
//! assert_eq!(label, "#401");
//! ```

use crate::outcome::Outcome::{self, Failure, Success};
use std::fmt;
use std::future::{ready, Future, IntoFuture, Ready};

impl<T, E> IntoFuture for Outcome<T, E> {
    type Output = Self;
    type IntoFuture = Ready<Self>;

    fn into_future(self) -> Self::IntoFuture {
        ready(self)
    }
}

/// `then_*` combinators for any future that resolves to an [`Outcome`].
pub trait OutcomeFutureExt<T, E>: Future<Output = Outcome<T, E>> + Sized {
    /// Async [`Outcome::map`].
    fn then_map<S, F>(self, f: F) -> impl Future<Output = Outcome<S, E>>
    where
        F: FnOnce(T) -> S,
    {
        async move { self.await.map(f) }
    }

    /// Async [`Outcome::map_err`].
    fn then_map_err<F2, G>(self, g: G) -> impl Future<Output = Outcome<T, F2>>
    where
        G: FnOnce(E) -> F2,
    {
        async move { self.await.map_err(g) }
    }

    /// Async [`Outcome::chain`]. `f` may return an outcome or a future of one.
    fn then_chain<S, F, Next>(self, f: F) -> impl Future<Output = Outcome<S, E>>
    where
        F: FnOnce(T) -> Next,
        Next: IntoFuture<Output = Outcome<S, E>>,
    {
        async move {
            match self.await {
                Success(v) => f(v).await,
                Failure(e) => Failure(e),
            }
        }
    }

    /// Async [`Outcome::chain_err`]. `g` may return an outcome or a future of one.
    fn then_chain_err<F2, G, Next>(self, g: G) -> impl Future<Output = Outcome<T, F2>>
    where
        G: FnOnce(E) -> Next,
        Next: IntoFuture<Output = Outcome<T, F2>>,
    {
        async move {
            match self.await {
                Success(v) => Success(v),
                Failure(e) => g(e).await,
            }
        }
    }

    /// Async [`Outcome::match_with`].
    fn then_match<R, F, G>(self, on_success: F, on_failure: G) -> impl Future<Output = R>
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        async move { self.await.match_with(on_success, on_failure) }
    }

    /// Async [`Outcome::unwrap`]. The returned future panics on `Failure`.
    fn then_unwrap(self) -> impl Future<Output = T>
    where
        E: fmt::Debug,
    {
        async move { self.await.unwrap() }
    }

    fn then_unwrap_or(self, fallback: T) -> impl Future<Output = T> {
        async move { self.await.unwrap_or(fallback) }
    }

    fn then_unwrap_or_else<F>(self, f: F) -> impl Future<Output = T>
    where
        F: FnOnce(E) -> T,
    {
        async move { self.await.unwrap_or_else(f) }
    }

    /// Async [`Outcome::unwrap_err`]. The returned future panics on `Success`.
    fn then_unwrap_err(self) -> impl Future<Output = E>
    where
        T: fmt::Debug,
    {
        async move { self.await.unwrap_err() }
    }

    fn then_unwrap_err_or(self, fallback: E) -> impl Future<Output = E> {
        async move { self.await.unwrap_err_or(fallback) }
    }

    fn then_unwrap_err_or_else<F>(self, f: F) -> impl Future<Output = E>
    where
        F: FnOnce(T) -> E,
    {
        async move { self.await.unwrap_err_or_else(f) }
    }

    /// Async [`Outcome::tap`].
    fn then_tap<F>(self, f: F) -> impl Future<Output = Outcome<T, E>>
    where
        F: FnOnce(&T),
    {
        async move { self.await.tap(f) }
    }

    /// Async [`Outcome::tap_err`].
    fn then_tap_err<G>(self, g: G) -> impl Future<Output = Outcome<T, E>>
    where
        G: FnOnce(&E),
    {
        async move { self.await.tap_err(g) }
    }

    /// Like [`then_tap`](Self::then_tap), but waits for the future `f` returns
    /// before handing the outcome on.
    fn then_tap_and_wait<F, Wait>(self, f: F) -> impl Future<Output = Outcome<T, E>>
    where
        F: FnOnce(&T) -> Wait,
        Wait: Future<Output = ()>,
    {
        async move {
            let outcome = self.await;
            if let Success(v) = &outcome {
                f(v).await;
            }
            outcome
        }
    }

    /// Like [`then_tap_err`](Self::then_tap_err), but waits for the future `g`
    /// returns before handing the outcome on.
    fn then_tap_err_and_wait<G, Wait>(self, g: G) -> impl Future<Output = Outcome<T, E>>
    where
        G: FnOnce(&E) -> Wait,
        Wait: Future<Output = ()>,
    {
        async move {
            let outcome = self.await;
            if let Failure(e) = &outcome {
                g(e).await;
            }
            outcome
        }
    }

    /// Resolves to whichever value the outcome holds, with the error converted
    /// into the success type.
    fn then_unpack(self) -> impl Future<Output = T>
    where
        E: Into<T>,
    {
        async move {
            match self.await {
                Success(v) => v,
                Failure(e) => e.into(),
            }
        }
    }

    /// Resolves to a `Result`, so the caller can continue with `?`.
    fn then_into_result(self) -> impl Future<Output = Result<T, E>> {
        async move { self.await.into_result() }
    }
}

impl<T, E, Fut> OutcomeFutureExt<T, E> for Fut where Fut: Future<Output = Outcome<T, E>> {}

/// Awaits whichever side of the outcome holds a future.
///
/// ```rust
/// use futures::executor::block_on;
/// use outcome::{failure, flip, success, Outcome};
/// use std::future::{ready, Ready};
///
/// let pending: Outcome<Ready<i32>, Ready<&str>> = success(ready(1));
/// assert_eq!(block_on(flip(pending)), success(1));
///
/// let pending: Outcome<Ready<i32>, Ready<&str>> = failure(ready("late"));
/// assert_eq!(block_on(flip(pending)), failure("late"));
/// ```
pub async fn flip<T, E, FT, FE>(outcome: Outcome<FT, FE>) -> Outcome<T, E>
where
    FT: IntoFuture<Output = T>,
    FE: IntoFuture<Output = E>,
{
    match outcome {
        Success(pending) => Success(pending.await),
        Failure(pending) => Failure(pending.await),
    }
}

/// `Success` of the value `value` resolves to.
pub async fn success_async<T, E, Fut>(value: Fut) -> Outcome<T, E>
where
    Fut: IntoFuture<Output = T>,
{
    Success(value.await)
}

/// `Failure` of the error `error` resolves to.
pub async fn failure_async<T, E, Fut>(error: Fut) -> Outcome<T, E>
where
    Fut: IntoFuture<Output = E>,
{
    Failure(error.await)
}
