//! Per-builder option structures.
//!
//! Options are plain data with named optional fields. Every struct is
//! `Default` (nothing set) and has chaining setters, so a call site reads
//! like the request it encodes:
//!
//! ```rust
//! use tideline::{LengthOptions, PresenceOptions};
//!
//! let len = LengthOptions::new().min(3).max(20);
//! assert_eq!((len.min, len.max, len.exact), (Some(3), Some(20), None));
//!
//! let presence = PresenceOptions::new().at_least(1);
//! assert_eq!(presence.quantifier.at_least, Some(1));
//! assert!(presence.quantifier.at_most.is_none());
//! ```
//!
//! Keys a builder does not recognize go into the `passthrough` map and reach
//! the evaluator untouched.

use std::collections::BTreeMap;

use crate::value::{Operand, Value};

/// Option keys carried opaquely to the evaluator.
pub type Passthrough = BTreeMap<String, Value>;

/// Options for [`changing`](crate::builtins::changing).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChangingOptions {
    /// Whether merely touching the field (writing the same value) counts.
    #[cfg_attr(
        feature = "serde",
        serde(default, rename = "touching?", skip_serializing_if = "Option::is_none")
    )]
    pub touching: Option<bool>,
    /// Unrecognized keys.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub passthrough: Passthrough,
}

impl ChangingOptions {
    /// No options set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `touching?`.
    pub fn touching(mut self, touching: bool) -> Self {
        self.touching = Some(touching);
        self
    }

    /// Carry an extra key to the evaluator.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.passthrough.insert(key.into(), value.into());
        self
    }
}

/// Bounds for [`string_length`](crate::builtins::string_length).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LengthOptions {
    /// Minimum length.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub min: Option<usize>,
    /// Maximum length.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub max: Option<usize>,
    /// Exact length.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub exact: Option<usize>,
    /// Unrecognized keys.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub passthrough: Passthrough,
}

impl LengthOptions {
    /// No bounds set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum length.
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the maximum length.
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Set the exact length.
    pub fn exact(mut self, exact: usize) -> Self {
        self.exact = Some(exact);
        self
    }

    /// Carry an extra key to the evaluator.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.passthrough.insert(key.into(), value.into());
        self
    }
}

/// Bounds for [`compare`](crate::builtins::compare) and
/// [`numericality`](crate::builtins::numericality).
///
/// Each bound is either a literal or a reference to another field:
///
/// ```rust
/// use tideline::{CompareOptions, Operand};
///
/// let opts = CompareOptions::new()
///     .greater_than(Operand::field("starts_at").unwrap())
///     .less_than_or_equal_to(100);
/// assert!(opts.greater_than.is_some());
/// assert!(opts.less_than.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompareOptions {
    /// Strict lower bound.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub greater_than: Option<Operand>,
    /// Inclusive lower bound.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub greater_than_or_equal_to: Option<Operand>,
    /// Strict upper bound.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub less_than: Option<Operand>,
    /// Inclusive upper bound.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub less_than_or_equal_to: Option<Operand>,
    /// Unrecognized keys.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub passthrough: Passthrough,
}

impl CompareOptions {
    /// No bounds set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the strict lower bound.
    pub fn greater_than(mut self, bound: impl Into<Operand>) -> Self {
        self.greater_than = Some(bound.into());
        self
    }

    /// Set the inclusive lower bound.
    pub fn greater_than_or_equal_to(mut self, bound: impl Into<Operand>) -> Self {
        self.greater_than_or_equal_to = Some(bound.into());
        self
    }

    /// Set the strict upper bound.
    pub fn less_than(mut self, bound: impl Into<Operand>) -> Self {
        self.less_than = Some(bound.into());
        self
    }

    /// Set the inclusive upper bound.
    pub fn less_than_or_equal_to(mut self, bound: impl Into<Operand>) -> Self {
        self.less_than_or_equal_to = Some(bound.into());
        self
    }

    /// Carry an extra key to the evaluator.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.passthrough.insert(key.into(), value.into());
        self
    }
}

/// How many fields of a set must be present.
///
/// Bounds are signed: rewriting an absence bound as a presence bound
/// subtracts from the field count, and out-of-range requests are carried as
/// computed rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quantifier {
    /// Exactly this many.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub exactly: Option<i64>,
    /// At least this many.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub at_least: Option<i64>,
    /// At most this many.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub at_most: Option<i64>,
}

impl Quantifier {
    /// Only `exactly` set.
    pub fn exactly(n: i64) -> Self {
        Self {
            exactly: Some(n),
            ..Self::default()
        }
    }

    /// Returns true if no bound is set.
    pub fn is_empty(&self) -> bool {
        self.exactly.is_none() && self.at_least.is_none() && self.at_most.is_none()
    }
}

/// Options for [`present`](crate::builtins::present) and
/// [`attributes_present`](crate::builtins::attributes_present).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PresenceOptions {
    /// Requested bounds; empty means "all of them".
    pub quantifier: Quantifier,
    /// Unrecognized keys.
    pub passthrough: Passthrough,
}

impl PresenceOptions {
    /// No options set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require exactly `n` present.
    pub fn exactly(mut self, n: i64) -> Self {
        self.quantifier.exactly = Some(n);
        self
    }

    /// Require at least `n` present.
    pub fn at_least(mut self, n: i64) -> Self {
        self.quantifier.at_least = Some(n);
        self
    }

    /// Require at most `n` present.
    pub fn at_most(mut self, n: i64) -> Self {
        self.quantifier.at_most = Some(n);
        self
    }

    /// Carry an extra key to the evaluator.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.passthrough.insert(key.into(), value.into());
        self
    }
}

/// Options for [`absent`](crate::builtins::absent) and
/// [`attributes_absent`](crate::builtins::attributes_absent).
///
/// Bounds here count *absent* fields; the builders rewrite them as presence
/// bounds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AbsenceOptions {
    /// At least this many absent.
    pub at_least: Option<i64>,
    /// At most this many absent.
    pub at_most: Option<i64>,
    /// Unrecognized keys.
    pub passthrough: Passthrough,
}

impl AbsenceOptions {
    /// No options set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require at least `n` absent.
    pub fn at_least(mut self, n: i64) -> Self {
        self.at_least = Some(n);
        self
    }

    /// Require at most `n` absent.
    pub fn at_most(mut self, n: i64) -> Self {
        self.at_most = Some(n);
        self
    }

    /// Carry an extra key to the evaluator.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.passthrough.insert(key.into(), value.into());
        self
    }

    /// Returns true if no bound and no passthrough key is set.
    pub fn is_empty(&self) -> bool {
        self.at_least.is_none() && self.at_most.is_none() && self.passthrough.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_empty() {
        assert_eq!(ChangingOptions::new().touching, None);
        assert_eq!(LengthOptions::new(), LengthOptions::default());
        assert!(Quantifier::default().is_empty());
        assert!(AbsenceOptions::new().is_empty());
    }

    #[test]
    fn test_passthrough_keeps_unknown_keys() {
        let opts = ChangingOptions::new()
            .touching(true)
            .with_option("message", "must change");
        assert_eq!(opts.touching, Some(true));
        assert_eq!(
            opts.passthrough.get("message"),
            Some(&Value::Str("must change".to_string()))
        );
    }

    #[test]
    fn test_presence_setters_fill_quantifier() {
        let opts = PresenceOptions::new().at_least(1).at_most(2);
        assert_eq!(
            opts.quantifier,
            Quantifier {
                exactly: None,
                at_least: Some(1),
                at_most: Some(2)
            }
        );
        assert!(!opts.quantifier.is_empty());
    }

    #[test]
    fn test_absence_passthrough_makes_options_non_empty() {
        let opts = AbsenceOptions::new().with_option("message", "leave blank");
        assert!(!opts.is_empty());
        assert_eq!(opts.at_least, None);
        assert_eq!(opts.at_most, None);
    }

    #[test]
    fn test_quantifier_exactly() {
        assert_eq!(Quantifier::exactly(3).exactly, Some(3));
        assert_eq!(Quantifier::exactly(3).at_least, None);
    }
}
