//! Builder functions, one per validation family
//!
//! Every builder is a pure function from its arguments to exactly one
//! [`Rule`](crate::Rule). Builders check identifiers and patterns and fail
//! with a [`BuildError`](crate::BuildError) naming the offending argument;
//! they never look at records, actions, or any other outside state.
//!
//! # Families
//!
//! - Single field: [`one_of`], [`changing`], [`confirm`],
//!   [`attribute_equals`], [`attribute_does_not_equal`], [`attribute_in`],
//!   [`argument_equals`], [`argument_does_not_equal`], [`argument_in`]
//! - Bounds: [`string_length`], [`compare`], [`numericality`]
//! - Patterns: [`matches`], [`matches_regex`]
//! - Actions: [`action_is`]
//! - Counting: [`present`], [`absent`], [`attributes_present`],
//!   [`attributes_absent`]
//! - Combinators: [`negate`]
//!
//! # Example
//!
//! ```rust
//! use tideline::builtins::*;
//! use tideline::{AbsenceOptions, LengthOptions, PresenceOptions, RuleKind};
//!
//! let rules = vec![
//!     present(["email", "name"], PresenceOptions::new()).unwrap(),
//!     absent("deleted_at", AbsenceOptions::new()).unwrap(),
//!     string_length("name", LengthOptions::new().max(80)).unwrap(),
//!     negate(action_is("destroy").unwrap()),
//! ];
//!
//! let kinds: Vec<RuleKind> = rules.iter().map(|r| r.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     vec![RuleKind::Present, RuleKind::Present, RuleKind::StringLength, RuleKind::Negate]
//! );
//! ```

mod action;
mod attribute;
mod bounds;
mod combinators;
mod pattern;
mod presence;

pub use action::action_is;
pub use attribute::{
    argument_does_not_equal, argument_equals, argument_in, attribute_does_not_equal,
    attribute_equals, attribute_in, changing, confirm, one_of,
};
pub use bounds::{compare, numericality, string_length};
pub use combinators::negate;
pub use pattern::{match_message, matches, matches_regex};
pub use presence::{absent, attributes_absent, attributes_present, present};
