//! # Outcome: Explicit Success-or-Failure Values
//!
//! An [`Outcome<T, E>`] is either `Success(T)` or `Failure(E)`. Errors travel as
//! values through every combinator, never as panics; panics are reserved for
//! programmer errors such as calling [`unwrap`](Outcome::unwrap) on a `Failure`.
//!
//! ## Core Types
//!
//! - **[`Outcome<T, E>`]**: The two-variant container and its combinators
//! - **[`Program<I, O>`]**: A resumable step sequence, the basis of do-blocks
//! - **[`InitProgram<I, O>`]**: A program whose first request is ready before any input
//!
//! ## Key Features
//!
//! - **Composable**: `map`, `chain`, `bi_map`, `tap`, and friends, as methods or as
//!   curried functions in [`ops`]
//! - **Short-circuiting do-blocks**: [`run`] and [`attempt`] stop at the first failure
//! - **Async Support**: [`run_async`], [`attempt_async`], and [`OutcomeFutureExt`]
//!   (behind the default `async` feature)
//! - **Aggregates**: collect, reduce, and sequence lists, keyed entries, and tuples
//!   in [`aggregate`]
//!
//! ## Example
//!
//! ```
//! use outcome::prelude::*;
//!
//! fn divide(a: f64, b: f64) -> Outcome<f64, &'static str> {
//!     if b == 0.0 { failure("DIV_BY_ZERO") } else { success(a / b) }
//! }
//!
//! fn sqrt(x: f64) -> Outcome<f64, &'static str> {
//!     if x < 0.0 { failure("NEGATIVE") } else { success(x.sqrt()) }
//! }
//!
//! // Request `divide`, feed its value to `sqrt`, finish with `sqrt`'s value.
//! let root = |a, b| run(init(divide(a, b), once(sqrt).map_return(Pure)));
//!
//! assert_eq!(root(18.0, 2.0), success(3.0));
//! assert_eq!(root(1.0, 0.0), failure("DIV_BY_ZERO"));
//! assert_eq!(root(-9.0, 1.0), failure("NEGATIVE"));
//!
//! // The same block written with `?`.
//! let root = |a, b| -> Outcome<f64, &'static str> { attempt(|| Ok(sqrt(divide(a, b).bind()?).bind()?)) };
//! assert_eq!(root(18.0, 2.0), success(3.0));
//! ```
//!
//! ## Common Functions
//!
//! **Building Outcomes:**
//! - [`success(v)`](success), [`failure(e)`](failure) - The two constructors
//! - [`success_if(v, pred, fallback)`](success_if) - Succeed when `pred` accepts `v`
//! - [`success_if_some(option, fallback)`](success_if_some) - Succeed on `Some`
//!
//! **Do-blocks:**
//! - [`run(program)`](run) / [`run_async(program)`](run_async) - Evaluate a program of requests
//! - [`attempt(body)`](attempt) / [`attempt_async(body)`](attempt_async) - Evaluate a closure using `bind()?`

pub mod aggregate;
mod apply;
pub mod build;
pub mod compose;
mod convert;
pub mod fault;
pub mod func;
#[cfg(feature = "async")]
mod future;
mod guard;
mod handler;
mod init;
pub mod ops;
mod outcome;
pub mod prelude;
mod program;
pub mod short_circuit;
mod step;

pub use apply::{lift, Apply};
pub use convert::{ensure_outcome, IntoOutcome, Pure};
#[cfg(feature = "async")]
pub use future::{failure_async, flip, success_async, OutcomeFutureExt};
pub use guard::{guard, guard_some, success_if, success_if_some};
pub use handler::{attempt, handle, run, Finished};
#[cfg(feature = "async")]
pub use handler::{attempt_async, handle_async, run_async};
pub use init::InitProgram;
pub use outcome::{failure, is_failure, is_success, success, Outcome, Outcome::Failure, Outcome::Success};
pub use program::Program;
pub use step::Step;
