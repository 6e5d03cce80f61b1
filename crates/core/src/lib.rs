//! # Bedrock Core
//!
//! Immutable value and collection primitives with explicit outcome types.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` / `expect()` - returns `Outcome` instead
//! - No `panic!()` - returns `Outcome` instead
//! - No unchecked arithmetic - `checked_*`, `saturating_*`, `wrapping_*` only
//! - No unchecked indexing - `get` returns `Outcome`
//! - No `unsafe` - safe Rust only
//!
//! ## Building Blocks
//!
//! - [`Optional`] - zero or one value, never a null sentinel
//! - [`Outcome`] - success or a structured [`Error`]
//! - [`Integer`] - 64-bit signed integer with wrapping, saturating and
//!   checked arithmetic families
//! - [`Sequence`] - immutable ordered collection
//! - [`Set`] - immutable collection of unique values built on [`Sequence`]
//!
//! ## Error Handling
//!
//! All fallible operations return `Outcome<T, Error>`. Use:
//! - `?` operator for propagation
//! - `map`, `and_then`, `match_with` combinators for transformation
//! - `unwrap_or`, `unwrap_or_default` for defaults

pub mod config;
mod error;
pub mod integer;
mod macros;
pub mod optional;
pub mod outcome;
pub mod sequence;
pub mod set;

pub use config::{ArithmeticConfig, Config};
pub use error::{Error, Operation};
pub use integer::{ArithmeticPolicy, Integer};
pub use optional::{Optional, OptionalExt, none, some};
pub use outcome::{LoggedOutcomeExt, Outcome, OutcomeExt, err, ok};
pub use sequence::Sequence;
pub use set::Set;
