use crate::{InitProgram, Program, Step};

/// Run the first program to completion, then feed its final value to the second.
///
/// Both programs must make the same kind of request.
pub fn chain<I, O, L, R>(l: L, r: R) -> Chain<L, R>
where
    R: Program<I, O>,
{
    Chain(Some(l), r)
}

/// Sequences two programs. Created via [`chain`] or [`Program::chain`].
///
/// The first program is dropped once it completes.
pub struct Chain<L, R>(Option<L>, R);

impl<I, O, L, R> Program<I, O> for Chain<L, R>
where
    L: Program<I, O, Return = I>,
    R: Program<I, O>,
{
    type Return = R::Return;
    fn next(&mut self, input: I) -> Step<O, Self::Return> {
        match self.0 {
            Some(ref mut l) => match l.next(input) {
                Step::Yielded(o) => Step::Yielded(o),
                Step::Complete(a) => {
                    self.0 = None;
                    self.1.next(a)
                }
            },
            None => self.1.next(input),
        }
    }
}

impl<I, O, L, R> InitProgram<I, O> for Chain<L, R>
where
    L: InitProgram<I, O>,
    L::Next: Program<I, O, Return = I>,
    R: Program<I, O>,
{
    type Next = Chain<L::Next, R>;

    fn init(self) -> Step<(O, Self::Next), R::Return> {
        let Chain(Some(first), mut second) = self else {
            unreachable!("Chain::init called after the first program completed")
        };
        match first.init() {
            Step::Yielded((o, next)) => Step::Yielded((o, Chain(Some(next), second))),
            Step::Complete(a) => match second.next(a) {
                Step::Yielded(o) => Step::Yielded((o, Chain(None, second))),
                Step::Complete(d) => Step::Complete(d),
            },
        }
    }
}
