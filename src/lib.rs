#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # Bedrock
//!
//! Immutable value and collection primitives with explicit outcome types.
//!
//! This library re-exports the Bedrock workspace crates for convenience.
//! Most callers only need the prelude:
//!
//! ```
//! use bedrock::prelude::*;
//!
//! let totals = Sequence::of([1, 2, 3].map(Integer::new))
//!     .try_fold(Integer::ZERO, |acc, x| acc.checked_add(*x));
//!
//! assert_eq!(totals, Ok(Integer::new(6)));
//! ```

// Re-export all crates
pub use bedrock_core;
pub use bedrock_core::{
    ArithmeticConfig, ArithmeticPolicy, Config, Error, Integer, LoggedOutcomeExt, Operation,
    Optional, OptionalExt, Outcome, OutcomeExt, Sequence, Set, err, none, ok, sequence, set, some,
};

pub mod prelude;
