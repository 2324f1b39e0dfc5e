use crate::outcome::Outcome::{self, Failure, Success};

/// One advance of a program: either a request that suspends it, or its final value.
///
/// Programs driven by [`run`](crate::run) and [`run_async`](crate::run_async) answer
/// every call to [`Program::next`](crate::Program::next) with a `Step`. The same shape
/// is the do-step protocol of a single [`Outcome`]: see [`Outcome::into_step`], where
/// a failure suspends exactly once with its error and a success completes with its
/// value. Converting a protocol step back with `Outcome::from` inverts it.
///
/// ```rust
/// use outcome::{failure, success, Outcome, Step};
///
/// let stopped = failure::<i32, &str>("DIV_BY_ZERO").into_step();
/// assert_eq!(stopped, Step::Yielded("DIV_BY_ZERO"));
/// assert_eq!(Outcome::from(stopped), failure("DIV_BY_ZERO"));
///
/// let finished = success::<i32, &str>(3).into_step();
/// assert!(finished.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<Y, D> {
    /// Suspend with a request
    Yielded(Y),
    /// Finish with a final value
    Complete(D),
}

impl<Y, D> Step<Y, D> {
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }

    /// Rewrites the request, leaving a final value alone.
    #[inline]
    pub fn map_yielded<Y2, F>(self, f: F) -> Step<Y2, D>
    where
        F: FnOnce(Y) -> Y2,
    {
        match self {
            Step::Yielded(request) => Step::Yielded(f(request)),
            Step::Complete(done) => Step::Complete(done),
        }
    }

    /// Rewrites the final value, leaving a request alone.
    #[inline]
    pub fn map_complete<D2, F>(self, f: F) -> Step<Y, D2>
    where
        F: FnOnce(D) -> D2,
    {
        match self {
            Step::Yielded(request) => Step::Yielded(request),
            Step::Complete(done) => Step::Complete(f(done)),
        }
    }

    /// The pending request.
    ///
    /// # Panics
    ///
    /// Panics if the program has already finished.
    #[inline]
    #[track_caller]
    pub fn unwrap_yielded(self) -> Y {
        match self {
            Step::Yielded(request) => request,
            Step::Complete(_) => panic!("called `Step::unwrap_yielded()` on a finished program"),
        }
    }

    /// The final value.
    ///
    /// # Panics
    ///
    /// Panics if the program is still waiting on a request.
    #[inline]
    #[track_caller]
    pub fn unwrap_complete(self) -> D {
        match self {
            Step::Yielded(_) => panic!("called `Step::unwrap_complete()` on a suspended program"),
            Step::Complete(done) => done,
        }
    }
}

impl<T, E> From<Step<E, T>> for Outcome<T, E> {
    #[inline]
    fn from(step: Step<E, T>) -> Self {
        match step {
            Step::Yielded(error) => Failure(error),
            Step::Complete(value) => Success(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_round_trips_through_outcome() {
        let stopped: Step<&str, i32> = Step::Yielded("NEGATIVE");
        assert!(stopped.is_yielded());
        assert_eq!(Outcome::from(stopped), Failure("NEGATIVE"));
        assert_eq!(Outcome::from(stopped).into_step(), stopped);

        let done: Step<&str, i32> = Step::Complete(3);
        assert_eq!(Outcome::from(done), Success(3));
    }

    #[test]
    fn test_maps_rewrite_one_side() {
        let request: Step<u8, String> = Step::Yielded(2);
        let done: Step<u8, String> = Step::Complete("ok".to_string());

        assert_eq!(request.clone().map_yielded(|n| n * 10), Step::Yielded(20));
        assert_eq!(request.map_complete(|s| s.len()), Step::Yielded(2));
        assert_eq!(done.map_complete(|s| s.len()), Step::Complete(2));
    }

    #[test]
    #[should_panic(expected = "on a finished program")]
    fn test_unwrap_yielded_on_finished_program() {
        Step::<u8, u8>::Complete(1).unwrap_yielded();
    }

    #[test]
    #[should_panic(expected = "on a suspended program")]
    fn test_unwrap_complete_on_suspended_program() {
        Step::<u8, u8>::Yielded(1).unwrap_complete();
    }
}
