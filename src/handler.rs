//! Evaluating do-blocks.
//!
//! A do-block is a sequence of steps, each producing an outcome whose success
//! value feeds the next step. Two forms are supported:
//!
//! - **Program form**: the block is an [`InitProgram`] whose requests are outcomes
//!   ([`run`]) or futures of outcomes ([`run_async`]). The evaluator answers each
//!   request with its success value and stops at the first failure.
//! - **Closure form**: the block is a closure returning `Result`, where `?` on
//!   [`Outcome::bind`] is the early exit ([`attempt`], [`attempt_async`]).
//!
//! In both forms a failing step is final: no later step runs, and the failure is
//! returned as-is. A block that runs to the end has its final value normalized
//! through [`IntoOutcome`], so returning an outcome never double-wraps it.
//!
//! [`handle`] and [`handle_async`] are the underlying drivers. They answer each
//! request with a responder and know nothing about outcomes.

use crate::{
    convert::IntoOutcome,
    outcome::Outcome::{self, Failure},
    short_circuit::init_short_circuit,
    InitProgram, Program, Step,
};
#[cfg(feature = "async")]
use std::future::Future;

/// Final value of a do-block program: the normalized return of its continuation.
pub type Finished<P, I, O, E> =
    Outcome<<<<P as InitProgram<I, O>>::Next as Program<I, O>>::Return as IntoOutcome<E>>::Success, E>;

/// Drive a program to completion, answering each request with `responder`.
///
/// ```rust
/// use outcome::prelude::*;
///
/// let program = chain(init_once(10, |x: i32| x * 2), once(|x: i32| x + 1));
/// let done = handle(program, |request| request + 5);
/// assert_eq!(done, 41);
/// ```
pub fn handle<P, I, O, R>(program: P, mut responder: R) -> <P::Next as Program<I, O>>::Return
where
    P: InitProgram<I, O>,
    R: FnMut(O) -> I,
{
    match program.init() {
        Step::Yielded((request, mut rest)) => {
            let mut input = responder(request);
            loop {
                match rest.next(input) {
                    Step::Yielded(request) => input = responder(request),
                    Step::Complete(done) => return done,
                }
            }
        }
        Step::Complete(done) => done,
    }
}

/// Async version of [`handle`]: the responder returns a future of the next input.
#[cfg(feature = "async")]
pub async fn handle_async<P, I, O, R, Fut>(program: P, mut responder: R) -> <P::Next as Program<I, O>>::Return
where
    P: InitProgram<I, O>,
    R: FnMut(O) -> Fut,
    Fut: Future<Output = I>,
{
    match program.init() {
        Step::Yielded((request, mut rest)) => {
            let mut input = responder(request).await;
            loop {
                match rest.next(input) {
                    Step::Yielded(request) => input = responder(request).await,
                    Step::Complete(done) => return done,
                }
            }
        }
        Step::Complete(done) => done,
    }
}

/// Evaluate a do-block program whose requests are outcomes.
///
/// Each `Success(v)` request is answered with `v`. The first `Failure(e)` ends the
/// block with `Failure(e)`; the program is not resumed again.
///
/// ```rust
/// use outcome::prelude::*;
///
/// fn halve(n: i32) -> Outcome<i32, &'static str> {
///     if n % 2 == 0 { success(n / 2) } else { failure("odd") }
/// }
///
/// let quarter = |n: i32| run(init(halve(n), once(halve).map_return(Pure)));
/// assert_eq!(quarter(12), success(3));
/// assert_eq!(quarter(6), failure("odd"));
/// assert_eq!(quarter(7), failure("odd"));
/// ```
pub fn run<P, I, E>(program: P) -> Finished<P, I, Outcome<I, E>, E>
where
    P: InitProgram<I, Outcome<I, E>>,
    <P::Next as Program<I, Outcome<I, E>>>::Return: IntoOutcome<E>,
{
    handle(init_short_circuit(program), |value| value)
}

/// Evaluate a do-block program whose requests are futures of outcomes.
///
/// Requests are awaited one at a time, in the order the program makes them. The
/// first failure ends the block before the program is resumed.
///
/// ```rust
/// use outcome::prelude::*;
/// use std::future::ready;
///
/// let program = init(
///     ready(success::<i32, &str>(20)),
///     once(|x: i32| ready(success(x + 1))).map_return(Pure),
/// );
/// assert_eq!(futures::executor::block_on(run_async(program)), success(21));
/// ```
#[cfg(feature = "async")]
pub async fn run_async<P, I, E, Fut>(program: P) -> Finished<P, I, Fut, E>
where
    P: InitProgram<I, Fut>,
    <P::Next as Program<I, Fut>>::Return: IntoOutcome<E>,
    Fut: Future<Output = Outcome<I, E>>,
{
    let (mut request, mut rest) = match program.init() {
        Step::Yielded(first) => first,
        Step::Complete(done) => return done.into_outcome(),
    };
    let mut step = 0_usize;
    loop {
        let value = match request.await.into_step() {
            Step::Complete(value) => value,
            Step::Yielded(error) => {
                log::trace!("short-circuited at step {step}");
                return Failure(error);
            }
        };
        step += 1;
        match rest.next(value) {
            Step::Yielded(next) => request = next,
            Step::Complete(done) => return done.into_outcome(),
        }
    }
}

/// Evaluate a closure-form do-block.
///
/// Inside the body, `outcome.bind()?` yields the success value or returns the
/// failure, converting it into the block's error type through `From`.
///
/// ```rust
/// use outcome::{attempt, failure, success, Outcome};
///
/// fn parse(s: &str) -> Outcome<i32, String> {
///     s.parse::<i32>().map_err(|_| format!("not a number: {s}")).into()
/// }
///
/// let sum = |a: &str, b: &str| -> Outcome<i32, String> {
///     attempt(|| Ok(parse(a).bind()? + parse(b).bind()?))
/// };
/// assert_eq!(sum("1", "2"), success(3));
/// assert_eq!(sum("1", "x"), failure("not a number: x".to_string()));
/// ```
pub fn attempt<T, E, F>(body: F) -> Outcome<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    match body() {
        Ok(value) => Outcome::Success(value),
        Err(error) => {
            log::trace!("do-block short-circuited");
            Failure(error)
        }
    }
}

/// Async version of [`attempt`]: the body is an async block, and awaited steps
/// use the same `bind()?` early exit.
#[cfg(feature = "async")]
pub async fn attempt_async<T, E, F, Fut>(body: F) -> Outcome<T, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    match body().await {
        Ok(value) => Outcome::Success(value),
        Err(error) => {
            log::trace!("async do-block short-circuited");
            Failure(error)
        }
    }
}
