//! Applicative lifting of n-ary functions over outcomes.
//!
//! An `Outcome<F, E>` holding a function is applied to a tuple of argument outcomes.
//! The receiver is scanned first, then the arguments left to right; the first
//! `Failure` met is returned unchanged and the function is never called.
//!
//! ```rust
//! use outcome::{failure, success, Apply, Outcome};
//!
//! let pair: Outcome<_, &str> = success(|a: i32, b: &'static str| (a, b));
//! assert_eq!(pair.apply((success(1), success("a"))), success((1, "a")));
//!
//! let pair: Outcome<_, &str> = success(|a: i32, b: &'static str| (a, b));
//! let bad: Outcome<&str, &str> = failure("no b");
//! assert_eq!(pair.apply((success(1), bad)), failure("no b"));
//! ```

use crate::outcome::Outcome::{self, Failure, Success};

/// Applies the function held by an outcome to a tuple of argument outcomes.
pub trait Apply<Args> {
    type Output;

    fn apply(self, args: Args) -> Self::Output;
}

macro_rules! impl_apply {
    ($($arg:ident : $ty:ident),+) => {
        impl<Func, Ret, E, $($ty),+> Apply<($(Outcome<$ty, E>,)+)> for Outcome<Func, E>
        where
            Func: FnOnce($($ty),+) -> Ret,
        {
            type Output = Outcome<Ret, E>;

            fn apply(self, ($($arg,)+): ($(Outcome<$ty, E>,)+)) -> Outcome<Ret, E> {
                let func = match self {
                    Success(func) => func,
                    Failure(e) => return Failure(e),
                };
                $(
                    let $arg = match $arg {
                        Success(v) => v,
                        Failure(e) => return Failure(e),
                    };
                )+
                Success(func($($arg),+))
            }
        }
    };
}

impl_apply!(a: A1);
impl_apply!(a: A1, b: A2);
impl_apply!(a: A1, b: A2, c: A3);
impl_apply!(a: A1, b: A2, c: A3, d: A4);
impl_apply!(a: A1, b: A2, c: A3, d: A4, e: A5);
impl_apply!(a: A1, b: A2, c: A3, d: A4, e: A5, f: A6);
impl_apply!(a: A1, b: A2, c: A3, d: A4, e: A5, f: A6, g: A7);
impl_apply!(a: A1, b: A2, c: A3, d: A4, e: A5, f: A6, g: A7, h: A8);

/// Lifts a plain function over argument outcomes.
///
/// Same as `success(func).apply(args)`.
pub fn lift<Func, Args, E>(func: Func, args: Args) -> <Outcome<Func, E> as Apply<Args>>::Output
where
    Outcome<Func, E>: Apply<Args>,
{
    Outcome::Success(func).apply(args)
}
