use crate::outcome::Outcome::{self, Failure, Success};

/// A fixed-size tuple of outcomes that collects into a tuple of success values.
///
/// Each position keeps its own success type. Each position's error only needs to
/// convert into the shared error type `E`, which the caller chooses.
///
/// ```rust
/// use outcome::aggregate::OutcomeTuple;
/// use outcome::{failure, success, Outcome};
///
/// #[derive(Debug, PartialEq)]
/// enum Error {
///     Parse(String),
///     Range(u8),
/// }
/// impl From<String> for Error {
///     fn from(e: String) -> Self { Error::Parse(e) }
/// }
/// impl From<u8> for Error {
///     fn from(e: u8) -> Self { Error::Range(e) }
/// }
///
/// let name: Outcome<&str, String> = success("ada");
/// let age: Outcome<u32, u8> = success(36);
/// let both: Outcome<(&str, u32), Error> = (name, age).collect_tuple();
/// assert_eq!(both, success(("ada", 36)));
///
/// let name: Outcome<&str, String> = success("ada");
/// let age: Outcome<u32, u8> = failure(200);
/// let both: Outcome<(&str, u32), Error> = (name, age).collect_tuple();
/// assert_eq!(both, failure(Error::Range(200)));
/// ```
pub trait OutcomeTuple<E> {
    type Success;

    /// Success values in position order, or the first failure converted into `E`.
    fn collect_tuple(self) -> Outcome<Self::Success, E>;
}

/// Free-function form of [`OutcomeTuple::collect_tuple`].
pub fn collect_tuple<E, Tuple>(outcomes: Tuple) -> Outcome<Tuple::Success, E>
where
    Tuple: OutcomeTuple<E>,
{
    outcomes.collect_tuple()
}

macro_rules! impl_outcome_tuple {
    ($($value:ident : $ty:ident / $err:ident),+) => {
        impl<E, $($ty, $err),+> OutcomeTuple<E> for ($(Outcome<$ty, $err>,)+)
        where
            $($err: Into<E>),+
        {
            type Success = ($($ty,)+);

            fn collect_tuple(self) -> Outcome<Self::Success, E> {
                let ($($value,)+) = self;
                $(
                    let $value = match $value {
                        Success(v) => v,
                        Failure(e) => {
                            log::trace!("collect_tuple short-circuited at `{}`", stringify!($value));
                            return Failure(e.into());
                        }
                    };
                )+
                Success(($($value,)+))
            }
        }
    };
}

impl_outcome_tuple!(a: T1 / E1);
impl_outcome_tuple!(a: T1 / E1, b: T2 / E2);
impl_outcome_tuple!(a: T1 / E1, b: T2 / E2, c: T3 / E3);
impl_outcome_tuple!(a: T1 / E1, b: T2 / E2, c: T3 / E3, d: T4 / E4);
impl_outcome_tuple!(a: T1 / E1, b: T2 / E2, c: T3 / E3, d: T4 / E4, e: T5 / E5);
impl_outcome_tuple!(a: T1 / E1, b: T2 / E2, c: T3 / E3, d: T4 / E4, e: T5 / E5, f: T6 / E6);
impl_outcome_tuple!(a: T1 / E1, b: T2 / E2, c: T3 / E3, d: T4 / E4, e: T5 / E5, f: T6 / E6, g: T7 / E7);
impl_outcome_tuple!(a: T1 / E1, b: T2 / E2, c: T3 / E3, d: T4 / E4, e: T5 / E5, f: T6 / E6, g: T7 / E7, h: T8 / E8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_tuple_keeps_position_types() {
        let collected: Outcome<(i32, &str, bool), ()> =
            collect_tuple((Success::<_, ()>(1), Success::<_, ()>("a"), Success::<_, ()>(true)));
        assert_eq!(collected, Success((1, "a", true)));
    }

    #[test]
    fn test_collect_tuple_returns_first_failure_by_position() {
        let collected: Outcome<(i32, i32, i32), String> = (
            Success::<i32, String>(1),
            Failure::<i32, &str>("second"),
            Failure::<i32, String>("third".to_string()),
        )
            .collect_tuple();
        assert_eq!(collected, Failure("second".to_string()));
    }

    #[test]
    fn test_collect_single_and_eight() {
        let one: Outcome<(u8,), ()> = (Success::<u8, ()>(1),).collect_tuple();
        assert_eq!(one, Success((1,)));

        let eight: Outcome<(u8, u8, u8, u8, u8, u8, u8, u8), &str> = (
            Success::<u8, &str>(1),
            Success::<u8, &str>(2),
            Success::<u8, &str>(3),
            Success::<u8, &str>(4),
            Success::<u8, &str>(5),
            Success::<u8, &str>(6),
            Success::<u8, &str>(7),
            Failure::<u8, &str>("eighth"),
        )
            .collect_tuple();
        assert_eq!(eight, Failure("eighth"));
    }
}
