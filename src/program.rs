//! Resumable step sequences.
//!
//! A [`Program`] is the caller side of a do-block: each call to
//! [`next`](Program::next) hands it the value of the previous request and gets back
//! either the next request or the final value. The evaluators in
//! [`handler`](crate::handler) drive programs whose requests are outcomes (or
//! futures of outcomes) and stop at the first failure.
//!
//! # Examples
//!
//! ```rust
//! use outcome::prelude::*;
//!
//! // Request one value, then finish with whatever comes back.
//! let mut program = once(|x: i32| x * 2);
//! assert_eq!(program.next(5).unwrap_yielded(), 10);
//! assert_eq!(program.next(3).unwrap_complete(), 3);
//! ```

use crate::{
    build::{once, Once},
    compose::{chain, map_return, map_yield, Chain, MapReturn, MapYield},
    step::Step,
};

/// A stateful step sequence that takes `I`, yields requests of type `O`, and
/// eventually completes with `Return`.
pub trait Program<I, O> {
    /// Type of final value when the sequence completes
    type Return;

    /// Resume with `input`, returning the next request or the final value.
    fn next(&mut self, input: I) -> Step<O, Self::Return>;

    fn boxed(self) -> Box<dyn Program<I, O, Return = Self::Return>>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }

    /// Run this program, then feed its final value to `r`.
    fn chain<R>(self, r: R) -> Chain<Self, R>
    where
        Self: Sized + Program<I, O, Return = I>,
        R: Program<I, O>,
    {
        chain(self, r)
    }

    /// Run this program, then make one more request from its final value.
    fn chain_once<F>(self, f: F) -> Chain<Self, Once<F>>
    where
        Self: Sized + Program<I, O, Return = I>,
        F: FnOnce(Self::Return) -> O,
    {
        chain(self, once(f))
    }

    /// Transform requests before they leave this program.
    fn map_yield<O2, F>(self, f: F) -> MapYield<Self, F, I, O>
    where
        Self: Sized,
        F: FnMut(O) -> O2,
    {
        map_yield(f, self)
    }

    /// Transform the final value.
    fn map_return<D2, F>(self, f: F) -> MapReturn<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Return) -> D2,
    {
        map_return(f, self)
    }
}

impl<I, O, L, R> Program<I, O> for either::Either<L, R>
where
    L: Program<I, O>,
    R: Program<I, O, Return = L::Return>,
{
    type Return = L::Return;
    fn next(&mut self, input: I) -> Step<O, Self::Return> {
        match self {
            either::Either::Left(l) => l.next(input),
            either::Either::Right(r) => r.next(input),
        }
    }
}

impl<I, O, D> Program<I, O> for Box<dyn Program<I, O, Return = D>> {
    type Return = D;

    fn next(&mut self, input: I) -> Step<O, Self::Return> {
        (**self).next(input)
    }
}

impl<I, O, D> Program<I, O> for &'_ mut dyn Program<I, O, Return = D> {
    type Return = D;

    fn next(&mut self, input: I) -> Step<O, Self::Return> {
        (*self).next(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::from_fn;
    use either::Either;

    #[test]
    fn test_chain_feeds_return_into_second_program() {
        let mut program = once(|val: u32| val + 1).chain(once(|val: u32| val * 2));

        assert_eq!(program.next(2).unwrap_yielded(), 3);
        assert_eq!(program.next(3).unwrap_yielded(), 6);
        assert_eq!(program.next(4).unwrap_complete(), 4);
    }

    #[test]
    fn test_map_return_applies_after_completion() {
        let mut program = once(|val: u32| val + 1)
            .chain_once(|val: u32| val * 2)
            .map_return(|done: u32| format!("done={done}"));

        assert_eq!(program.next(5).unwrap_yielded(), 6);
        assert_eq!(program.next(6).unwrap_yielded(), 12);
        assert_eq!(program.next(7).unwrap_complete(), "done=7".to_string());
    }

    #[test]
    fn test_boxed_and_either_dispatch() {
        let mut boxed = once(|x: i32| x - 1).boxed();
        assert_eq!(boxed.next(1).unwrap_yielded(), 0);
        assert_eq!(boxed.next(9).unwrap_complete(), 9);

        let countdown = from_fn(|x: i32| {
            if x > 0 { Step::Yielded(x - 1) } else { Step::Complete(x) }
        });
        let mut picked: Either<Once<fn(i32) -> i32>, _> = Either::Right(countdown);
        assert_eq!(picked.next(2).unwrap_yielded(), 1);
        assert_eq!(picked.next(0).unwrap_complete(), 0);
    }
}
