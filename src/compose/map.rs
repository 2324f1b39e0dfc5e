//! Rewriting the requests and final value of a program.

use crate::{InitProgram, Program, Step};
use std::marker::PhantomData;

/// Rewrites each request before it leaves the wrapped program.
///
/// The evaluator uses this to turn a synchronous program into one whose requests
/// are already-resolved futures.
pub struct MapYield<S, F, I, O1> {
    f: F,
    program: S,
    _phantom: PhantomData<fn(I) -> O1>,
}

/// Wrap `program` so every request passes through `f`.
///
/// # Examples
///
/// ```
/// use outcome::prelude::*;
///
/// let program = once(|x: i32| x * 2);
/// let mut mapped = map_yield(|y: i32| y.to_string(), program);
///
/// assert_eq!(mapped.next(5).unwrap_yielded(), "10");
/// assert_eq!(mapped.next(1).unwrap_complete(), 1);
/// ```
pub fn map_yield<I, O1, O2, S, F>(f: F, program: S) -> MapYield<S, F, I, O1>
where
    S: Program<I, O1>,
    F: FnMut(O1) -> O2,
{
    MapYield {
        f,
        program,
        _phantom: PhantomData,
    }
}

/// [`map_yield`] for a program that has its first request ready.
pub fn init_map_yield<I, O1, O2, S, F>(f: F, program: S) -> MapYield<S, F, I, O1>
where
    S: InitProgram<I, O1>,
    F: FnMut(O1) -> O2,
{
    MapYield {
        f,
        program,
        _phantom: PhantomData,
    }
}

impl<I, O1, O2, S, F> Program<I, O2> for MapYield<S, F, I, O1>
where
    S: Program<I, O1>,
    F: FnMut(O1) -> O2,
{
    type Return = S::Return;
    fn next(&mut self, input: I) -> Step<O2, Self::Return> {
        match self.program.next(input) {
            Step::Yielded(o1) => Step::Yielded((self.f)(o1)),
            Step::Complete(d) => Step::Complete(d),
        }
    }
}

impl<I, O1, O2, S, F> InitProgram<I, O2> for MapYield<S, F, I, O1>
where
    S: InitProgram<I, O1>,
    F: FnMut(O1) -> O2,
{
    type Next = MapYield<S::Next, F, I, O1>;

    fn init(self) -> Step<(O2, Self::Next), <S::Next as Program<I, O1>>::Return> {
        match self.program.init() {
            Step::Yielded((o1, next)) => {
                let mut f = self.f;
                let o2 = f(o1);
                Step::Yielded((o2, map_yield(f, next)))
            }
            Step::Complete(d) => Step::Complete(d),
        }
    }
}

/// Rewrites the final value of the wrapped program. Requests pass through untouched.
pub struct MapReturn<S, F> {
    f: F,
    program: S,
}

/// Wrap `program` so its final value passes through `f`.
///
/// ```
/// use outcome::prelude::*;
///
/// let mut mapped = map_return(|r: i32| r * 10, once(|x: i32| x + 5));
///
/// assert_eq!(mapped.next(10).unwrap_yielded(), 15);
/// assert_eq!(mapped.next(20).unwrap_complete(), 200);
/// ```
pub fn map_return<S, F>(f: F, program: S) -> MapReturn<S, F> {
    MapReturn { f, program }
}

/// [`map_return`] for a program that has its first request ready.
pub fn init_map_return<I, O, D1, D2, S, F>(f: F, program: S) -> MapReturn<S, F>
where
    S: InitProgram<I, O>,
    S::Next: Program<I, O, Return = D1>,
    F: FnMut(D1) -> D2,
{
    MapReturn { f, program }
}

impl<I, O, D1, D2, S, F> Program<I, O> for MapReturn<S, F>
where
    S: Program<I, O, Return = D1>,
    F: FnMut(D1) -> D2,
{
    type Return = D2;
    fn next(&mut self, input: I) -> Step<O, Self::Return> {
        match self.program.next(input) {
            Step::Yielded(o) => Step::Yielded(o),
            Step::Complete(d1) => Step::Complete((self.f)(d1)),
        }
    }
}

impl<I, O, D1, D2, S, F> InitProgram<I, O> for MapReturn<S, F>
where
    S: InitProgram<I, O>,
    S::Next: Program<I, O, Return = D1>,
    F: FnMut(D1) -> D2,
{
    type Next = MapReturn<S::Next, F>;

    fn init(self) -> Step<(O, Self::Next), D2> {
        match self.program.init() {
            Step::Yielded((o, next)) => Step::Yielded((o, map_return(self.f, next))),
            Step::Complete(d1) => {
                let mut f = self.f;
                Step::Complete(f(d1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_fn, init_once, once};

    #[test]
    fn test_map_yield_leaves_return_alone() {
        let mut mapped = map_yield(|y: i32| f64::from(y), once(|x: i32| x * 2));

        assert_eq!(mapped.next(5).unwrap_yielded(), 10.0);
        assert_eq!(mapped.next(7).unwrap_complete(), 7);
    }

    #[test]
    fn test_map_yield_rewrites_first_request_on_init() {
        let program = init_map_yield(|y: i32| format!("req={y}"), init_once(3, |x: i32| x + 1));
        let (first, mut rest) = program.init().unwrap_yielded();

        assert_eq!(first, "req=3");
        assert_eq!(rest.next(9).unwrap_yielded(), "req=10");
        assert_eq!(rest.next(0).unwrap_complete(), 0);
    }

    #[test]
    fn test_map_return_counts_only_completion() {
        let mut calls = 0;
        let mut mapped = map_return(
            |r: i32| {
                calls += 1;
                r.to_string()
            },
            from_fn(|x: i32| if x < 3 { Step::Yielded(x) } else { Step::Complete(x) }),
        );

        assert_eq!(mapped.next(1).unwrap_yielded(), 1);
        assert_eq!(mapped.next(2).unwrap_yielded(), 2);
        assert_eq!(mapped.next(3).unwrap_complete(), "3");
        drop(mapped);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_map_return_on_immediate_completion() {
        let program: Step<(i32, crate::build::Once<fn(i32) -> i32>), i32> = Step::Complete(4);
        let mapped = init_map_return(|r: i32| r * 100, program);

        assert_eq!(mapped.init().unwrap_complete(), 400);
    }
}
