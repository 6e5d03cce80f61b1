//! Optional values: zero or one `T`, never a null sentinel.
//!
//! `Optional<T>` is `Option<T>`. `map`, `filter`, `unwrap_or` and friends are
//! the standard library's; [`OptionalExt`] adds total elimination and the
//! Railway-style taps.

use crate::outcome::Outcome;

/// A value that may be absent.
pub type Optional<T> = Option<T>;

/// Wrap a present value.
#[inline]
pub const fn some<T>(value: T) -> Optional<T> {
    Some(value)
}

/// The absent value.
#[inline]
pub const fn none<T>() -> Optional<T> {
    None
}

/// Extension trait for Optional values.
pub trait OptionalExt<T>: Sized {
    /// True when a value is held.
    fn is_present(&self) -> bool;

    /// True when no value is held.
    fn is_absent(&self) -> bool;

    /// Total elimination: `on_some` runs for a present value, `on_none` otherwise.
    fn match_with<U, F, G>(self, on_some: F, on_none: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce() -> U;

    /// Convert to an Outcome with a lazy error.
    ///
    /// # Errors
    ///
    /// Returns the error built by `err` when the value is absent.
    fn ok_or_else_lazy<E, F: FnOnce() -> E>(self, err: F) -> Outcome<T, E>;

    /// Convert to an Outcome with an eager error.
    ///
    /// # Errors
    ///
    /// Returns `error` when the value is absent.
    fn into_outcome<E>(self, error: E) -> Outcome<T, E>;

    /// Tap into a present value without consuming the Optional.
    #[must_use]
    fn tap_some<F: FnOnce(&T)>(self, f: F) -> Self;

    /// Tap into absence without consuming the Optional.
    #[must_use]
    fn tap_none<F: FnOnce()>(self, f: F) -> Self;
}

impl<T> OptionalExt<T> for Optional<T> {
    fn is_present(&self) -> bool {
        self.is_some()
    }

    fn is_absent(&self) -> bool {
        self.is_none()
    }

    fn match_with<U, F, G>(self, on_some: F, on_none: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce() -> U,
    {
        match self {
            Some(value) => on_some(value),
            None => on_none(),
        }
    }

    fn ok_or_else_lazy<E, F: FnOnce() -> E>(self, err: F) -> Outcome<T, E> {
        self.ok_or_else(err)
    }

    fn into_outcome<E>(self, error: E) -> Outcome<T, E> {
        self.ok_or(error)
    }

    fn tap_some<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Some(ref v) = self {
            f(v);
        }
        self
    }

    fn tap_none<F: FnOnce()>(self, f: F) -> Self {
        if self.is_none() {
            f();
        }
        self
    }
}
