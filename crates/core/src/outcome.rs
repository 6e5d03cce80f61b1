//! Outcome type definition and extension traits for Railway-Oriented Programming.
//!
//! `Outcome<T, E>` is the crate's name for `Result<T, E>`: exactly one of a
//! success payload or a failure payload. The extension traits add the
//! combinators the standard library leaves out, so fallible steps can be
//! chained without unwrap/expect/panic.

use std::fmt;

use either::Either;

use crate::error::Error;

/// The standard fallible return type for Bedrock operations.
///
/// The error parameter defaults to [`Error`], so `Outcome<Integer>` reads as
/// "an integer or a structured Bedrock error".
///
/// # Examples
///
/// ```
/// use bedrock_core::{Integer, Outcome};
///
/// fn halve(x: Integer) -> Outcome<Integer> {
///     x.checked_div(Integer::new(2))
/// }
///
/// assert_eq!(halve(Integer::new(8)), Ok(Integer::new(4)));
/// ```
pub type Outcome<T, E = Error> = std::result::Result<T, E>;

/// Wrap a success value.
#[inline]
pub const fn ok<T, E>(value: T) -> Outcome<T, E> {
    Ok(value)
}

/// Wrap a failure value.
#[inline]
pub const fn err<T, E>(error: E) -> Outcome<T, E> {
    Err(error)
}

/// Generic extension trait for any `Outcome`.
///
/// `map`, `map_err`, `and_then`, `unwrap_or`, `is_ok` and `is_err` come from
/// the standard library; these fill in the rest.
pub trait OutcomeExt<T, E>: Sized {
    /// Total elimination: exactly one of the two closures runs.
    fn match_with<U, F, G>(self, on_ok: F, on_err: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> U;

    /// Map both Ok and Err in a single operation.
    fn bimap<U, E2, F, G>(self, ok_fn: F, err_fn: G) -> Outcome<U, E2>
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> E2;

    /// Perform a side effect on the Ok value without consuming the Outcome.
    #[must_use]
    fn tap_ok<F: FnOnce(&T)>(self, f: F) -> Self;

    /// Perform a side effect on the Err value without consuming the Outcome.
    #[must_use]
    fn tap_err<F: FnOnce(&E)>(self, f: F) -> Self;

    /// Run a fallible check on the Ok value, keeping the value if it passes.
    ///
    /// # Errors
    ///
    /// Returns the original error, or the error produced by `f`.
    fn and_then_do<F: FnOnce(&T) -> Outcome<(), E>>(self, f: F) -> Outcome<T, E>;

    /// Prefix the error with a lazily built context message.
    ///
    /// # Errors
    ///
    /// Returns `"{context}: {error}"` when the Outcome is an Err.
    fn with_context<C: fmt::Display, F: FnOnce() -> C>(self, context: F) -> Outcome<T, String>
    where
        E: fmt::Display;

    /// Drop the error, keeping only presence of the success value.
    fn into_optional(self) -> Option<T>;

    /// Convert to `Either`, with the success value on the right.
    fn into_either(self) -> Either<E, T>;
}

impl<T, E> OutcomeExt<T, E> for Outcome<T, E> {
    fn match_with<U, F, G>(self, on_ok: F, on_err: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> U,
    {
        match self {
            Ok(value) => on_ok(value),
            Err(error) => on_err(error),
        }
    }

    fn bimap<U, E2, F, G>(self, ok_fn: F, err_fn: G) -> Outcome<U, E2>
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> E2,
    {
        match self {
            Ok(v) => Ok(ok_fn(v)),
            Err(e) => Err(err_fn(e)),
        }
    }

    fn tap_ok<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Ok(ref v) = self {
            f(v);
        }
        self
    }

    fn tap_err<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Err(ref e) = self {
            f(e);
        }
        self
    }

    fn and_then_do<F: FnOnce(&T) -> Outcome<(), E>>(self, f: F) -> Outcome<T, E> {
        self.and_then(|v| f(&v).map(|()| v))
    }

    fn with_context<C: fmt::Display, F: FnOnce() -> C>(self, context: F) -> Outcome<T, String>
    where
        E: fmt::Display,
    {
        self.map_err(|e| format!("{}: {}", context(), e))
    }

    fn into_optional(self) -> Option<T> {
        self.ok()
    }

    fn into_either(self) -> Either<E, T> {
        Either::from(self)
    }
}

/// Opt-in logging combinators.
///
/// Core operations never log. These exist for callers that want to collapse a
/// failure into a default and leave a trace of it behind.
pub trait LoggedOutcomeExt<T, E> {
    /// Convert to an Optional, logging the error if present.
    fn into_optional_logged(self) -> Option<T>;

    /// Get the value or a default, logging the error if present.
    fn or_default_logged(self, default: T) -> T;

    /// Inspect the error without consuming the Outcome.
    #[must_use]
    fn inspect_error<F: FnOnce(&E)>(self, f: F) -> Self;
}

impl<T, E: fmt::Display> LoggedOutcomeExt<T, E> for Outcome<T, E> {
    fn into_optional_logged(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("Operation failed: {}", e);
                None
            }
        }
    }

    fn or_default_logged(self, default: T) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Operation failed, using default: {}", e);
                default
            }
        }
    }

    fn inspect_error<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Err(ref e) = self {
            f(e);
        }
        self
    }
}
