//! Mock responses that assert on their arguments
//!
//! Each helper returns a closure for `mockall`'s `returning`, so the expected
//! arguments and the response are declared together. A mismatch fails the
//! test at the offending call rather than at a later `checkpoint`.
//!
//! Arguments are compared as one value; methods taking several arguments
//! compare them as a tuple:
//!
//! ```rust
//! use mocks::assert_args_and_return;
//!
//! let mut boil = assert_args_and_return("two eggs", ("two bottles".to_string(), 50));
//! assert_eq!(boil(("two bottles".to_string(), 50)), "two eggs");
//! ```

use std::fmt::Debug;

/// Return `retval` when called with `expected`, fail the test otherwise
pub fn assert_args_and_return<A, R>(retval: R, expected: A) -> impl FnMut(A) -> R + Send + 'static
where
    A: PartialEq + Debug + Send + 'static,
    R: Clone + Send + 'static,
{
    move |args: A| {
        assert_eq!(args, expected, "mock called with unexpected arguments");
        retval.clone()
    }
}

/// Return `Err(error)` when called with `expected`, fail the test otherwise
pub fn assert_args_and_raise<A, T, E>(error: E, expected: A) -> impl FnMut(A) -> Result<T, E> + Send + 'static
where
    A: PartialEq + Debug + Send + 'static,
    E: Clone + Send + 'static,
{
    move |args: A| {
        assert_eq!(args, expected, "mock called with unexpected arguments");
        Err(error.clone())
    }
}

/// `Ok(retval)` when called with `expected`, `Err(error)` for anything else
pub fn assert_args_and_return_or_raise<A, T, E>(
    retval: T,
    error: E,
    expected: A,
) -> impl FnMut(A) -> Result<T, E> + Send + 'static
where
    A: PartialEq + Send + 'static,
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    move |args: A| {
        if args == expected {
            Ok(retval.clone())
        } else {
            Err(error.clone())
        }
    }
}

/// A fresh iterator over `items` for every call with `expected`; fails the
/// test otherwise
pub fn assert_args_and_return_iter_over<A, I>(items: I, expected: A) -> impl FnMut(A) -> I::IntoIter + Send + 'static
where
    A: PartialEq + Debug + Send + 'static,
    I: IntoIterator + Clone + Send + 'static,
{
    move |args: A| {
        assert_eq!(args, expected, "mock called with unexpected arguments");
        items.clone().into_iter()
    }
}
