//! # Tideline
//!
//! Declarative validation rule builders.
//!
//! Tideline turns requests like "these fields must be present", "these two
//! fields must match", or "this value must be one of a list" into canonical
//! [`Rule`] descriptors. An evaluator elsewhere runs the descriptors against
//! a record; this crate only builds and normalizes them.
//!
//! ## Philosophy
//!
//! - **Pure**: every builder is a referentially transparent function of its
//!   arguments. No I/O, no shared state, nothing to lock.
//! - **Canonical**: several phrasings collapse to one descriptor. Absence is
//!   rewritten as bounded presence, and `numericality` is `compare`.
//! - **Loud**: malformed input fails at construction with an error naming
//!   the argument, never as a half-built descriptor.
//!
//! ## Quick Example
//!
//! ```rust
//! use tideline::prelude::*;
//!
//! // Every listed field must be present
//! let rule = present(["email", "name"], PresenceOptions::new()).unwrap();
//! assert_eq!(rule.quantifier(), Some(&Quantifier::exactly(2)));
//!
//! // "At least one absent" is "at most two present"
//! let rule = absent(["a", "b", "c"], AbsenceOptions::new().at_least(1)).unwrap();
//! assert_eq!(
//!     rule.quantifier(),
//!     Some(&Quantifier { exactly: None, at_least: Some(0), at_most: Some(2) })
//! );
//!
//! // Malformed input names the argument
//! let err = confirm("password", "").unwrap_err();
//! assert_eq!(err.argument(), "confirmation");
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for descriptors and options
//! - `tracing`: trace events for built descriptors and rejected input
//! - `proptest`: `Arbitrary` impls in [`testing`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod builtins;
pub mod entry;
pub mod error;
pub mod ident;
pub mod options;
pub mod rule;
pub mod testing;
pub mod value;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use entry::{ActionType, ValidationEntry};
pub use error::BuildError;
pub use ident::{FieldSet, Ident, OneOrMany};
pub use options::{
    AbsenceOptions, ChangingOptions, CompareOptions, LengthOptions, Passthrough, PresenceOptions,
    Quantifier,
};
pub use rule::{Rule, RuleKind};
pub use value::{Operand, Pattern, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::builtins::*;
    pub use crate::entry::{ActionType, ValidationEntry};
    pub use crate::error::BuildError;
    pub use crate::ident::{Ident, OneOrMany};
    pub use crate::options::{
        AbsenceOptions, ChangingOptions, CompareOptions, LengthOptions, PresenceOptions, Quantifier,
    };
    pub use crate::rule::{Rule, RuleKind};
    pub use crate::value::{Operand, Pattern, Value};
}
