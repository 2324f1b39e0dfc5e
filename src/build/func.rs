use crate::{Program, Step};

/// A program driven by a closure that decides, per input, whether to request more.
pub struct FromFn<F>(F);

/// Create a program from a closure.
///
/// ```rust
/// use outcome::prelude::*;
///
/// let mut toggle = from_fn(|x: bool| {
///     if x { Step::Yielded(!x) } else { Step::Complete(x) }
/// });
/// assert_eq!(toggle.next(true).unwrap_yielded(), false);
/// assert_eq!(toggle.next(false).unwrap_complete(), false);
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<I, O, D, F> Program<I, O> for FromFn<F>
where
    F: FnMut(I) -> Step<O, D>,
{
    type Return = D;
    fn next(&mut self, input: I) -> Step<O, D> {
        (self.0)(input)
    }
}

/// Makes one request from its first input, then completes with the next input.
pub struct Once<F>(Option<F>);

/// Create a program that makes a single request.
///
/// ```rust
/// use outcome::prelude::*;
///
/// let mut program = once(|x: i32| x + 10);
/// assert_eq!(program.next(5).unwrap_yielded(), 15);
/// assert_eq!(program.next(3).unwrap_complete(), 3);
/// ```
pub fn once<F>(f: F) -> Once<F> {
    Once(Some(f))
}

impl<I, O, F> Program<I, O> for Once<F>
where
    F: FnOnce(I) -> O,
{
    type Return = I;
    fn next(&mut self, input: I) -> Step<O, I> {
        match self.0.take() {
            Some(f) => Step::Yielded(f(input)),
            None => Step::Complete(input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_keeps_state_between_inputs() {
        let mut seen = Vec::new();
        let mut program = from_fn(move |x: u8| {
            seen.push(x);
            if seen.len() < 3 { Step::Yielded(seen.len()) } else { Step::Complete(seen.clone()) }
        });

        assert_eq!(program.next(1).unwrap_yielded(), 1);
        assert_eq!(program.next(2).unwrap_yielded(), 2);
        assert_eq!(program.next(3).unwrap_complete(), vec![1, 2, 3]);
    }

    #[test]
    fn test_once_completes_with_second_input() {
        let mut program = once(|x: u32| x * 3);
        assert_eq!(program.next(2).unwrap_yielded(), 6);
        assert_eq!(program.next(7).unwrap_complete(), 7);
    }
}
