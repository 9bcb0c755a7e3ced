//! Rule descriptors
//!
//! A [`Rule`] is the value handed to the external evaluator: one variant per
//! evaluator rule kind, carrying exactly the parameters that kind needs.
//! Descriptors are immutable, compare structurally, and can be shared
//! across threads freely.
//!
//! # Example
//!
//! ```rust
//! use tideline::builtins::{negate, one_of};
//! use tideline::{Rule, RuleKind, Value};
//!
//! let rule = negate(one_of("status", [Value::symbol("closed")]).unwrap());
//! assert_eq!(rule.kind(), RuleKind::Negate);
//!
//! match &rule {
//!     Rule::Negate { validation } => assert_eq!(validation.kind(), RuleKind::OneOf),
//!     _ => unreachable!(),
//! }
//! ```

use std::fmt;

use crate::ident::{Ident, OneOrMany};
use crate::options::{ChangingOptions, CompareOptions, LengthOptions, Passthrough, Quantifier};
use crate::value::{Operand, Pattern, Value};

/// A canonical, parameterized validation rule.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Rule {
    /// The attribute's value is a member of `values`.
    OneOf {
        /// Attribute to check.
        field: Ident,
        /// Allowed values.
        values: Vec<Value>,
    },
    /// The field is being changed.
    Changing {
        /// Attribute or relationship to check.
        field: Ident,
        /// `touching?` and passthrough keys.
        #[cfg_attr(feature = "serde", serde(flatten))]
        options: ChangingOptions,
    },
    /// Two fields carry the same value.
    Confirm {
        /// Field being confirmed.
        field: Ident,
        /// Field holding the confirmation.
        confirmation: Ident,
    },
    /// The attribute equals `value`.
    AttributeEquals {
        /// Attribute to check.
        attribute: Ident,
        /// Expected value.
        value: Value,
    },
    /// The attribute does not equal `value`.
    AttributeDoesNotEqual {
        /// Attribute to check.
        attribute: Ident,
        /// Rejected value.
        value: Value,
    },
    /// The attribute's value is in `list`.
    AttributeIn {
        /// Attribute to check.
        attribute: Ident,
        /// Allowed values.
        list: Vec<Value>,
    },
    /// The argument equals `value`.
    ArgumentEquals {
        /// Argument to check.
        argument: Ident,
        /// Expected value.
        value: Value,
    },
    /// The argument does not equal `value`.
    ArgumentDoesNotEqual {
        /// Argument to check.
        argument: Ident,
        /// Rejected value.
        value: Value,
    },
    /// The argument's value is in `list`.
    ArgumentIn {
        /// Argument to check.
        argument: Ident,
        /// Allowed values.
        list: Vec<Value>,
    },
    /// Inverts the nested rule's verdict.
    Negate {
        /// The wrapped rule.
        validation: Box<Rule>,
    },
    /// The running action is `action`, or any of them for a list.
    ActionIs {
        /// Action name or names.
        action: OneOrMany<Ident>,
    },
    /// The attribute's string length is within bounds.
    StringLength {
        /// Attribute to check.
        attribute: Ident,
        /// `min`, `max`, `exact`, and passthrough keys.
        #[cfg_attr(feature = "serde", serde(flatten))]
        options: LengthOptions,
    },
    /// The attribute compares within bounds.
    Compare {
        /// Attribute to check.
        attribute: Ident,
        /// Comparison bounds and passthrough keys.
        #[cfg_attr(feature = "serde", serde(flatten))]
        options: CompareOptions,
    },
    /// The attribute matches a regular expression.
    Match {
        /// Attribute to check.
        attribute: Ident,
        /// Pattern to match.
        #[cfg_attr(feature = "serde", serde(rename = "match"))]
        pattern: Pattern,
        /// Failure message.
        message: String,
    },
    /// A count of attributes or arguments is present.
    Present {
        /// Attributes or arguments to count.
        attributes: Vec<Ident>,
        /// How many must be present.
        #[cfg_attr(feature = "serde", serde(flatten))]
        quantifier: Quantifier,
        /// Unrecognized keys.
        #[cfg_attr(feature = "serde", serde(flatten))]
        passthrough: Passthrough,
    },
    /// A count of attributes is present.
    AttributesPresent {
        /// Attributes to count.
        attributes: Vec<Ident>,
        /// How many must be present.
        #[cfg_attr(feature = "serde", serde(flatten))]
        quantifier: Quantifier,
        /// Unrecognized keys.
        #[cfg_attr(feature = "serde", serde(flatten))]
        passthrough: Passthrough,
    },
}

/// The tag identifying which evaluator rule a [`Rule`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleKind {
    /// [`Rule::OneOf`]
    OneOf,
    /// [`Rule::Changing`]
    Changing,
    /// [`Rule::Confirm`]
    Confirm,
    /// [`Rule::AttributeEquals`]
    AttributeEquals,
    /// [`Rule::AttributeDoesNotEqual`]
    AttributeDoesNotEqual,
    /// [`Rule::AttributeIn`]
    AttributeIn,
    /// [`Rule::ArgumentEquals`]
    ArgumentEquals,
    /// [`Rule::ArgumentDoesNotEqual`]
    ArgumentDoesNotEqual,
    /// [`Rule::ArgumentIn`]
    ArgumentIn,
    /// [`Rule::Negate`]
    Negate,
    /// [`Rule::ActionIs`]
    ActionIs,
    /// [`Rule::StringLength`]
    StringLength,
    /// [`Rule::Compare`]
    Compare,
    /// [`Rule::Match`]
    Match,
    /// [`Rule::Present`]
    Present,
    /// [`Rule::AttributesPresent`]
    AttributesPresent,
}

impl RuleKind {
    /// Snake-case name, as used in the serialized `kind` tag.
    pub fn name(self) -> &'static str {
        match self {
            RuleKind::OneOf => "one_of",
            RuleKind::Changing => "changing",
            RuleKind::Confirm => "confirm",
            RuleKind::AttributeEquals => "attribute_equals",
            RuleKind::AttributeDoesNotEqual => "attribute_does_not_equal",
            RuleKind::AttributeIn => "attribute_in",
            RuleKind::ArgumentEquals => "argument_equals",
            RuleKind::ArgumentDoesNotEqual => "argument_does_not_equal",
            RuleKind::ArgumentIn => "argument_in",
            RuleKind::Negate => "negate",
            RuleKind::ActionIs => "action_is",
            RuleKind::StringLength => "string_length",
            RuleKind::Compare => "compare",
            RuleKind::Match => "match",
            RuleKind::Present => "present",
            RuleKind::AttributesPresent => "attributes_present",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl Rule {
    /// The rule's kind tag.
    pub fn kind(&self) -> RuleKind {
        match self {
            Rule::OneOf { .. } => RuleKind::OneOf,
            Rule::Changing { .. } => RuleKind::Changing,
            Rule::Confirm { .. } => RuleKind::Confirm,
            Rule::AttributeEquals { .. } => RuleKind::AttributeEquals,
            Rule::AttributeDoesNotEqual { .. } => RuleKind::AttributeDoesNotEqual,
            Rule::AttributeIn { .. } => RuleKind::AttributeIn,
            Rule::ArgumentEquals { .. } => RuleKind::ArgumentEquals,
            Rule::ArgumentDoesNotEqual { .. } => RuleKind::ArgumentDoesNotEqual,
            Rule::ArgumentIn { .. } => RuleKind::ArgumentIn,
            Rule::Negate { .. } => RuleKind::Negate,
            Rule::ActionIs { .. } => RuleKind::ActionIs,
            Rule::StringLength { .. } => RuleKind::StringLength,
            Rule::Compare { .. } => RuleKind::Compare,
            Rule::Match { .. } => RuleKind::Match,
            Rule::Present { .. } => RuleKind::Present,
            Rule::AttributesPresent { .. } => RuleKind::AttributesPresent,
        }
    }

    /// Wrap this rule in [`Rule::Negate`].
    ///
    /// Method form of [`negate`](crate::builtins::negate).
    ///
    /// # Example
    ///
    /// ```rust
    /// use tideline::builtins::attribute_equals;
    /// use tideline::RuleKind;
    ///
    /// let rule = attribute_equals("archived", true).unwrap().negate();
    /// assert_eq!(rule.kind(), RuleKind::Negate);
    /// ```
    pub fn negate(self) -> Rule {
        crate::builtins::negate(self)
    }

    /// The presence bounds, for the two presence kinds.
    pub fn quantifier(&self) -> Option<&Quantifier> {
        match self {
            Rule::Present { quantifier, .. } | Rule::AttributesPresent { quantifier, .. } => {
                Some(quantifier)
            }
            _ => None,
        }
    }

    /// Every field identifier this rule reads, nested rules included.
    ///
    /// Action names are not fields and are not listed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tideline::builtins::{compare, confirm, negate};
    /// use tideline::{CompareOptions, Operand};
    ///
    /// let rule = negate(confirm("password", "password_confirmation").unwrap());
    /// let names: Vec<&str> = rule.fields().iter().map(|f| f.as_str()).collect();
    /// assert_eq!(names, vec!["password", "password_confirmation"]);
    ///
    /// let rule = compare(
    ///     "ends_at",
    ///     CompareOptions::new().greater_than(Operand::field("starts_at").unwrap()),
    /// )
    /// .unwrap();
    /// assert_eq!(rule.fields().len(), 2);
    /// ```
    pub fn fields(&self) -> Vec<&Ident> {
        let mut out = Vec::new();
        self.collect_fields(&mut out);
        out
    }

    fn collect_fields<'a>(&'a self, out: &mut Vec<&'a Ident>) {
        match self {
            Rule::AttributeEquals { attribute, .. }
            | Rule::AttributeDoesNotEqual { attribute, .. }
            | Rule::AttributeIn { attribute, .. }
            | Rule::StringLength { attribute, .. }
            | Rule::Match { attribute, .. } => out.push(attribute),
            Rule::ArgumentEquals { argument, .. }
            | Rule::ArgumentDoesNotEqual { argument, .. }
            | Rule::ArgumentIn { argument, .. } => out.push(argument),
            Rule::OneOf { field, .. } | Rule::Changing { field, .. } => out.push(field),
            Rule::Confirm {
                field,
                confirmation,
            } => {
                out.push(field);
                out.push(confirmation);
            }
            Rule::Compare { attribute, options } => {
                out.push(attribute);
                let bounds = [
                    &options.greater_than,
                    &options.greater_than_or_equal_to,
                    &options.less_than,
                    &options.less_than_or_equal_to,
                ];
                out.extend(bounds.into_iter().filter_map(|bound| match bound {
                    Some(Operand::Field(field)) => Some(field),
                    _ => None,
                }));
            }
            Rule::Present { attributes, .. } | Rule::AttributesPresent { attributes, .. } => {
                out.extend(attributes.iter())
            }
            Rule::Negate { validation } => validation.collect_fields(out),
            Rule::ActionIs { .. } => {}
        }
    }

    /// Log the finished descriptor and hand it back.
    pub(crate) fn built(self) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(kind = %self.kind(), "built rule descriptor");
        self
    }
}
