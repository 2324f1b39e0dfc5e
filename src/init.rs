use crate::{Program, Step};

/// A program whose first request is available before any input arrives.
///
/// Do-block evaluators start here: [`init`](InitProgram::init) produces the first
/// request together with the program that handles its answer, or finishes at once.
///
/// ```rust
/// use outcome::prelude::*;
///
/// let program = init_once(success::<i32, ()>(42), |x: i32| success(x + 1));
/// let (first, mut rest) = program.init().unwrap_yielded();
/// assert_eq!(first, success(42));
/// assert_eq!(rest.next(42).unwrap_yielded(), success(43));
/// ```
pub trait InitProgram<I, O> {
    type Next: Program<I, O>;

    /// Produce the first request, or complete immediately.
    #[allow(clippy::type_complexity)]
    fn init(self) -> Step<(O, Self::Next), <Self::Next as Program<I, O>>::Return>;
}

impl<I, O, S> InitProgram<I, O> for (O, S)
where
    S: Program<I, O>,
{
    type Next = S;
    fn init(self) -> Step<(O, S), S::Return> {
        Step::Yielded(self)
    }
}

impl<I, O, S> InitProgram<I, O> for Step<(O, S), S::Return>
where
    S: Program<I, O>,
{
    type Next = S;
    fn init(self) -> Step<(O, S), S::Return> {
        self
    }
}

impl<I, O, L, R> InitProgram<I, O> for either::Either<L, R>
where
    L: InitProgram<I, O>,
    R: InitProgram<I, O>,
    R::Next: Program<I, O, Return = <L::Next as Program<I, O>>::Return>,
{
    type Next = either::Either<L::Next, R::Next>;
    fn init(self) -> Step<(O, Self::Next), <Self::Next as Program<I, O>>::Return> {
        match self {
            either::Either::Left(l) => l.init().map_yielded(|(o, next)| (o, either::Either::Left(next))),
            either::Either::Right(r) => r.init().map_yielded(|(o, next)| (o, either::Either::Right(next))),
        }
    }
}
