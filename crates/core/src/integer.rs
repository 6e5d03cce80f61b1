//! Bounded signed integer with explicit overflow families.
//!
//! Every arithmetic operation comes in three flavours, and the caller picks
//! one at the call site:
//!
//! - `wrapping_*`: reduce modulo 2^64, never fail.
//! - `saturating_*`: clamp to `[MIN, MAX]`, never fail.
//! - `checked_*`: return [`Outcome`], `Err` on overflow.
//!
//! Division and remainder by zero have no wrapped or saturated meaning, so
//! those entry points return [`Outcome`] in every family.
//!
//! # Examples
//!
//! ```
//! use bedrock_core::Integer;
//!
//! assert_eq!(Integer::MAX.saturating_add(Integer::ONE), Integer::MAX);
//! assert!(Integer::MAX.checked_add(Integer::ONE).is_err());
//! assert!(Integer::new(10).wrapping_div(Integer::ZERO).is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Operation};
use crate::outcome::Outcome;

/// Which arithmetic family to use when the choice is made at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArithmeticPolicy {
    /// Report overflow as an error.
    #[default]
    Checked,
    /// Clamp to the representable range.
    Saturating,
    /// Reduce modulo the representable range.
    Wrapping,
}

impl ArithmeticPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Checked => "checked",
            Self::Saturating => "saturating",
            Self::Wrapping => "wrapping",
        }
    }
}

impl fmt::Display for ArithmeticPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A signed 64-bit integer whose arithmetic never traps.
///
/// Comparison goes through [`Ord`], which yields a [`std::cmp::Ordering`]
/// token (`is_lt`, `is_le`, `is_eq`, `is_ge`, `is_gt`) rather than a
/// subtraction result.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Integer(i64);

impl Integer {
    pub const MIN: Self = Self(i64::MIN);
    pub const MAX: Self = Self(i64::MAX);
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);
    pub const BITS: u32 = i64::BITS;

    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The raw value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0.is_positive()
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0.is_negative()
    }

    /// `-1`, `0` or `1` according to the sign.
    #[must_use]
    pub const fn signum(self) -> Self {
        Self(self.0.signum())
    }

    /// Magnitude as an unsigned value; total, including for `MIN`.
    #[must_use]
    pub const fn unsigned_abs(self) -> u64 {
        self.0.unsigned_abs()
    }

    // ── Checked family ──────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns [`Error::Overflow`] when the sum is out of range.
    pub fn checked_add(self, rhs: Self) -> Outcome<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or_else(|| Error::overflow(Operation::Add, self.0, rhs.0))
    }

    /// # Errors
    ///
    /// Returns [`Error::Overflow`] when the difference is out of range.
    pub fn checked_sub(self, rhs: Self) -> Outcome<Self> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or_else(|| Error::overflow(Operation::Sub, self.0, rhs.0))
    }

    /// # Errors
    ///
    /// Returns [`Error::Overflow`] when the product is out of range.
    pub fn checked_mul(self, rhs: Self) -> Outcome<Self> {
        self.0
            .checked_mul(rhs.0)
            .map(Self)
            .ok_or_else(|| Error::overflow(Operation::Mul, self.0, rhs.0))
    }

    /// Truncating division.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] for a zero divisor and
    /// [`Error::Overflow`] for `MIN / -1`.
    pub fn checked_div(self, rhs: Self) -> Outcome<Self> {
        self.nonzero_divisor(rhs, Operation::Div).and_then(|()| {
            self.0
                .checked_div(rhs.0)
                .map(Self)
                .ok_or_else(|| Error::overflow(Operation::Div, self.0, rhs.0))
        })
    }

    /// Remainder with the sign of the dividend.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] for a zero divisor and
    /// [`Error::Overflow`] for `MIN % -1`.
    pub fn checked_rem(self, rhs: Self) -> Outcome<Self> {
        self.nonzero_divisor(rhs, Operation::Rem).and_then(|()| {
            self.0
                .checked_rem(rhs.0)
                .map(Self)
                .ok_or_else(|| Error::overflow(Operation::Rem, self.0, rhs.0))
        })
    }

    /// # Errors
    ///
    /// Returns [`Error::UnaryOverflow`] for `MIN`.
    pub fn checked_neg(self) -> Outcome<Self> {
        self.0
            .checked_neg()
            .map(Self)
            .ok_or_else(|| Error::unary_overflow(Operation::Neg, self.0))
    }

    /// # Errors
    ///
    /// Returns [`Error::UnaryOverflow`] for `MIN`, whose magnitude is not
    /// representable.
    pub fn checked_abs(self) -> Outcome<Self> {
        self.0
            .checked_abs()
            .map(Self)
            .ok_or_else(|| Error::unary_overflow(Operation::Abs, self.0))
    }

    /// # Errors
    ///
    /// Returns [`Error::Overflow`] when the power is out of range.
    pub fn checked_pow(self, exp: u32) -> Outcome<Self> {
        self.0
            .checked_pow(exp)
            .map(Self)
            .ok_or_else(|| Error::overflow(Operation::Pow, self.0, i64::from(exp)))
    }

    /// Absolute value through the checked family.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnaryOverflow`] for `MIN`.
    pub fn abs(self) -> Outcome<Self> {
        self.checked_abs()
    }

    /// Negation through the checked family.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnaryOverflow`] for `MIN`.
    pub fn neg(self) -> Outcome<Self> {
        self.checked_neg()
    }

    // ── Wrapping family ─────────────────────────────────────────────────

    #[must_use]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }

    #[must_use]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }

    #[must_use]
    pub const fn wrapping_mul(self, rhs: Self) -> Self {
        Self(self.0.wrapping_mul(rhs.0))
    }

    /// `MIN / -1` wraps to `MIN`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] for a zero divisor.
    pub fn wrapping_div(self, rhs: Self) -> Outcome<Self> {
        self.nonzero_divisor(rhs, Operation::Div)
            .map(|()| Self(self.0.wrapping_div(rhs.0)))
    }

    /// `MIN % -1` is `0`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] for a zero divisor.
    pub fn wrapping_rem(self, rhs: Self) -> Outcome<Self> {
        self.nonzero_divisor(rhs, Operation::Rem)
            .map(|()| Self(self.0.wrapping_rem(rhs.0)))
    }

    #[must_use]
    pub const fn wrapping_neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }

    /// `MIN` stays `MIN`.
    #[must_use]
    pub const fn wrapping_abs(self) -> Self {
        Self(self.0.wrapping_abs())
    }

    #[must_use]
    pub const fn wrapping_pow(self, exp: u32) -> Self {
        Self(self.0.wrapping_pow(exp))
    }

    // ── Saturating family ───────────────────────────────────────────────

    #[must_use]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    #[must_use]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    #[must_use]
    pub const fn saturating_mul(self, rhs: Self) -> Self {
        Self(self.0.saturating_mul(rhs.0))
    }

    /// `MIN / -1` saturates to `MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] for a zero divisor.
    pub fn saturating_div(self, rhs: Self) -> Outcome<Self> {
        self.nonzero_divisor(rhs, Operation::Div)
            .map(|()| Self(self.0.saturating_div(rhs.0)))
    }

    /// The remainder always fits, so this only differs from checked on `MIN % -1`, which is `0`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] for a zero divisor.
    pub fn saturating_rem(self, rhs: Self) -> Outcome<Self> {
        self.wrapping_rem(rhs)
    }

    #[must_use]
    pub const fn saturating_neg(self) -> Self {
        Self(self.0.saturating_neg())
    }

    #[must_use]
    pub const fn saturating_abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    #[must_use]
    pub const fn saturating_pow(self, exp: u32) -> Self {
        Self(self.0.saturating_pow(exp))
    }

    // ── Policy dispatch ─────────────────────────────────────────────────

    /// Apply `op` using the family selected by `policy`.
    ///
    /// Unary operations (`Neg`, `Abs`) act on `self` and ignore `rhs`. For
    /// `Pow`, `rhs` is the exponent.
    ///
    /// # Errors
    ///
    /// Division by zero fails under every policy. Overflow fails only under
    /// [`ArithmeticPolicy::Checked`]. A `Pow` exponent outside `u32` fails
    /// with [`Error::OutOfRange`].
    pub fn apply(self, op: Operation, rhs: Self, policy: ArithmeticPolicy) -> Outcome<Self> {
        use ArithmeticPolicy::{Checked, Saturating, Wrapping};

        match (op, policy) {
            (Operation::Add, Checked) => self.checked_add(rhs),
            (Operation::Add, Saturating) => Ok(self.saturating_add(rhs)),
            (Operation::Add, Wrapping) => Ok(self.wrapping_add(rhs)),
            (Operation::Sub, Checked) => self.checked_sub(rhs),
            (Operation::Sub, Saturating) => Ok(self.saturating_sub(rhs)),
            (Operation::Sub, Wrapping) => Ok(self.wrapping_sub(rhs)),
            (Operation::Mul, Checked) => self.checked_mul(rhs),
            (Operation::Mul, Saturating) => Ok(self.saturating_mul(rhs)),
            (Operation::Mul, Wrapping) => Ok(self.wrapping_mul(rhs)),
            (Operation::Div, Checked) => self.checked_div(rhs),
            (Operation::Div, Saturating) => self.saturating_div(rhs),
            (Operation::Div, Wrapping) => self.wrapping_div(rhs),
            (Operation::Rem, Checked) => self.checked_rem(rhs),
            (Operation::Rem, Saturating) => self.saturating_rem(rhs),
            (Operation::Rem, Wrapping) => self.wrapping_rem(rhs),
            (Operation::Neg, Checked) => self.checked_neg(),
            (Operation::Neg, Saturating) => Ok(self.saturating_neg()),
            (Operation::Neg, Wrapping) => Ok(self.wrapping_neg()),
            (Operation::Abs, Checked) => self.checked_abs(),
            (Operation::Abs, Saturating) => Ok(self.saturating_abs()),
            (Operation::Abs, Wrapping) => Ok(self.wrapping_abs()),
            (Operation::Pow, policy) => {
                let exp = u32::try_from(rhs.0).map_err(|_| Error::out_of_range(rhs, "u32"))?;
                match policy {
                    Checked => self.checked_pow(exp),
                    Saturating => Ok(self.saturating_pow(exp)),
                    Wrapping => Ok(self.wrapping_pow(exp)),
                }
            }
        }
    }

    // ── Aggregation ─────────────────────────────────────────────────────

    /// Sum an iterator, stopping at the first overflow.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] from the first addition that overflows.
    pub fn checked_sum<I: IntoIterator<Item = Self>>(items: I) -> Outcome<Self> {
        items
            .into_iter()
            .try_fold(Self::ZERO, |acc, x| acc.checked_add(x))
    }

    /// Multiply an iterator, stopping at the first overflow.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] from the first multiplication that overflows.
    pub fn checked_product<I: IntoIterator<Item = Self>>(items: I) -> Outcome<Self> {
        items
            .into_iter()
            .try_fold(Self::ONE, |acc, x| acc.checked_mul(x))
    }

    /// Sum an iterator, clamping at the bounds.
    #[must_use]
    pub fn saturating_sum<I: IntoIterator<Item = Self>>(items: I) -> Self {
        items
            .into_iter()
            .fold(Self::ZERO, |acc, x| acc.saturating_add(x))
    }

    fn nonzero_divisor(self, rhs: Self, op: Operation) -> Outcome<()> {
        if rhs.is_zero() {
            Err(Error::division_by_zero(op, self.0))
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Integer {
    type Err = Error;

    fn from_str(s: &str) -> Outcome<Self> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|e| Error::parse_integer(s, e.to_string()))
    }
}

macro_rules! lossless_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Integer {
                #[inline]
                fn from(value: $t) -> Self {
                    Self(i64::from(value))
                }
            }
        )*
    };
}

macro_rules! fallible_from {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for Integer {
                type Error = Error;

                #[inline]
                fn try_from(value: $t) -> Outcome<Self> {
                    i64::try_from(value)
                        .map(Self)
                        .map_err(|_| Error::out_of_range(value, "Integer"))
                }
            }
        )*
    };
}

lossless_from!(i8, i16, i32, i64, u8, u16, u32);
fallible_from!(u64, usize, isize, i128, u128);

impl From<Integer> for i64 {
    fn from(value: Integer) -> Self {
        value.0
    }
}

impl From<Integer> for i128 {
    fn from(value: Integer) -> Self {
        Self::from(value.0)
    }
}
