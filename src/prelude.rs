//! Prelude module - common imports for Bedrock
//!
//! Import this module to get all common types and traits:
//! ```rust
//! use bedrock::prelude::*;
//! ```

// Re-export functional utilities
pub use itertools::Itertools;

// Re-export error types
pub use bedrock_core::{Error, Operation};

// Re-export outcome types and their combinators
pub use bedrock_core::{
    LoggedOutcomeExt, Optional, OptionalExt, Outcome, OutcomeExt, err, none, ok, some,
};

// Re-export value and collection types
pub use bedrock_core::{ArithmeticPolicy, Config, Integer, Sequence, Set, sequence, set};
