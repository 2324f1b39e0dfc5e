//! Stopping a program at its first failed request.
//!
//! [`ShortCircuit`] turns a program that yields outcomes into one that yields the
//! plain success values. The first `Failure` it sees ends the program: the wrapped
//! program is dropped, the failure becomes the final value, and resuming the
//! adapter afterwards panics instead of reaching the wrapped program.
//!
//! # Examples
//!
//! ```
//! use outcome::prelude::*;
//! use outcome::short_circuit::short_circuit;
//!
//! let program = from_fn(|x: i32| -> Step<Outcome<i32, &'static str>, Pure<i32>> {
//!     if x < 0 { Step::Yielded(failure("negative")) } else { Step::Yielded(success(x * 2)) }
//! });
//! let mut guarded = short_circuit(program);
//!
//! assert_eq!(guarded.next(5).unwrap_yielded(), 10);
//! assert_eq!(guarded.next(-1).unwrap_complete(), failure("negative"));
//! ```

use crate::{
    convert::IntoOutcome,
    outcome::Outcome::{self, Failure},
    InitProgram, Program, Step,
};
use std::marker::PhantomData;

/// Short-circuits on the first `Failure` among the requests of a program.
///
/// Converts `Program<I, Outcome<O, E>, Return = R>` into
/// `Program<I, O, Return = Outcome<R::Success, E>>`, where the final value `R` is
/// normalized through [`IntoOutcome`].
pub struct ShortCircuit<S, E> {
    program: Option<S>,
    step: usize,
    _phantom: PhantomData<fn() -> E>,
}

/// Wrap a program so it stops at the first failed request.
pub fn short_circuit<I, O, E, S>(program: S) -> ShortCircuit<S, E>
where
    S: Program<I, Outcome<O, E>>,
{
    ShortCircuit {
        program: Some(program),
        step: 0,
        _phantom: PhantomData,
    }
}

/// [`short_circuit`] for a program that has its first request ready.
pub fn init_short_circuit<I, O, E, S>(program: S) -> ShortCircuit<S, E>
where
    S: InitProgram<I, Outcome<O, E>>,
{
    ShortCircuit {
        program: Some(program),
        step: 0,
        _phantom: PhantomData,
    }
}

impl<S, E> ShortCircuit<S, E> {
    fn resolve<O, D>(&mut self, request: Outcome<O, E>) -> Step<O, Outcome<D, E>> {
        let step = self.step;
        self.step += 1;
        match request.into_step() {
            Step::Complete(value) => Step::Yielded(value),
            Step::Yielded(error) => {
                log::trace!("short-circuited at step {step}");
                self.program = None;
                Step::Complete(Failure(error))
            }
        }
    }
}

impl<I, O, E, S> Program<I, O> for ShortCircuit<S, E>
where
    S: Program<I, Outcome<O, E>>,
    S::Return: IntoOutcome<E>,
{
    type Return = Outcome<<S::Return as IntoOutcome<E>>::Success, E>;

    fn next(&mut self, input: I) -> Step<O, Self::Return> {
        let Some(program) = self.program.as_mut() else {
            panic!("ShortCircuit resumed after completion");
        };
        match program.next(input) {
            Step::Yielded(request) => self.resolve(request),
            Step::Complete(done) => {
                self.program = None;
                Step::Complete(done.into_outcome())
            }
        }
    }
}

impl<I, O, E, S> InitProgram<I, O> for ShortCircuit<S, E>
where
    S: InitProgram<I, Outcome<O, E>>,
    <S::Next as Program<I, Outcome<O, E>>>::Return: IntoOutcome<E>,
{
    type Next = ShortCircuit<S::Next, E>;

    #[allow(clippy::type_complexity)]
    fn init(
        self,
    ) -> Step<(O, Self::Next), Outcome<<<S::Next as Program<I, Outcome<O, E>>>::Return as IntoOutcome<E>>::Success, E>>
    {
        let Some(program) = self.program else {
            unreachable!("ShortCircuit::init called after completion")
        };
        match program.init() {
            Step::Yielded((request, next)) => {
                let mut next = ShortCircuit {
                    program: Some(next),
                    step: self.step,
                    _phantom: PhantomData,
                };
                match next.resolve(request) {
                    Step::Yielded(value) => Step::Yielded((value, next)),
                    Step::Complete(failed) => Step::Complete(failed),
                }
            }
            Step::Complete(done) => Step::Complete(done.into_outcome()),
        }
    }
}
