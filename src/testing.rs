//! Testing utilities for code that builds rules
//!
//! Assertion macros for builder results, and `proptest` strategies for
//! identifiers and quantifiers behind the `proptest` feature.
//!
//! # Examples
//!
//! ```rust
//! use tideline::builtins::{confirm, present};
//! use tideline::{assert_built, assert_kind, assert_malformed, PresenceOptions, RuleKind};
//!
//! let rule = assert_built!(present(["a", "b"], PresenceOptions::new()));
//! assert_kind!(rule, RuleKind::Present);
//!
//! assert_malformed!(confirm("password", ""), "confirmation");
//! ```

/// Assert that a builder succeeded and evaluate to the built rule.
///
/// # Example
///
/// ```rust
/// use tideline::assert_built;
/// use tideline::builtins::one_of;
///
/// let rule = assert_built!(one_of("status", ["open"]));
/// assert_eq!(rule.fields().len(), 1);
/// ```
#[macro_export]
macro_rules! assert_built {
    ($result:expr) => {
        match $result {
            ::std::result::Result::Ok(rule) => rule,
            ::std::result::Result::Err(e) => {
                panic!("Expected a built rule, got error: {}", e);
            }
        }
    };
}

/// Assert that a rule has the given kind.
///
/// # Example
///
/// ```rust
/// use tideline::{assert_kind, RuleKind};
/// use tideline::builtins::{negate, one_of};
///
/// let rule = negate(one_of("status", ["open"]).unwrap());
/// assert_kind!(rule, RuleKind::Negate);
/// ```
#[macro_export]
macro_rules! assert_kind {
    ($rule:expr, $kind:expr) => {{
        let actual = $rule.kind();
        if actual != $kind {
            panic!("Expected rule kind {}, got {}", $kind, actual);
        }
    }};
}

/// Assert that a builder rejected the named argument.
///
/// # Example
///
/// ```rust
/// use tideline::assert_malformed;
/// use tideline::builtins::attribute_equals;
///
/// assert_malformed!(attribute_equals("not valid", 1), "attribute");
/// ```
#[macro_export]
macro_rules! assert_malformed {
    ($result:expr, $argument:expr) => {
        match $result {
            ::std::result::Result::Err(e) => {
                assert_eq!(
                    e.argument(),
                    $argument,
                    "Expected argument `{}` to be rejected, got: {}",
                    $argument,
                    e
                );
            }
            ::std::result::Result::Ok(rule) => {
                panic!(
                    "Expected argument `{}` to be rejected, got rule: {:?}",
                    $argument, rule
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::{Ident, Quantifier};

/// Strategy producing well-formed identifier text.
#[cfg(feature = "proptest")]
pub fn ident_text() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,11}[?!]?"
}

#[cfg(feature = "proptest")]
impl Arbitrary for Ident {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        ident_text()
            .prop_filter_map("well-formed identifier", |raw| Ident::new(raw).ok())
            .boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for Quantifier {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        let bound = || proptest::option::of(0i64..16);
        (bound(), bound(), bound())
            .prop_map(|(exactly, at_least, at_most)| Quantifier {
                exactly,
                at_least,
                at_most,
            })
            .boxed()
    }
}
