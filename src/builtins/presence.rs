//! Counting rules: presence and absence over a set of fields.
//!
//! All four entry points end in one of two constructors that differ only in
//! the resulting kind:
//!
//! | Entry point | Result kind |
//! |---|---|
//! | [`present`], [`absent`] | [`Rule::Present`] (attributes or arguments) |
//! | [`attributes_present`], [`attributes_absent`] | [`Rule::AttributesPresent`] (attributes only) |
//!
//! Absence is never its own rule kind. "At least K absent" out of `n` fields
//! is "at most `n − K` present", and "at most K absent" is "at least `n − K`
//! present":
//!
//! ```rust
//! use tideline::builtins::absent;
//! use tideline::{AbsenceOptions, Quantifier};
//!
//! let rule = absent(["a", "b", "c"], AbsenceOptions::new().at_least(1)).unwrap();
//! assert_eq!(
//!     rule.quantifier(),
//!     Some(&Quantifier { exactly: None, at_least: Some(0), at_most: Some(2) })
//! );
//! ```
//!
//! Bounds are not range checked. A request the field set cannot satisfy is
//! rewritten like any other and the evaluator reports it.

use crate::error::BuildError;
use crate::ident::{FieldSet, OneOrMany};
use crate::options::{AbsenceOptions, Passthrough, PresenceOptions, Quantifier};
use crate::rule::Rule;

#[derive(Clone, Copy)]
enum Namespace {
    AttributesOrArguments,
    Attributes,
}

/// Fields that must be present.
///
/// With no quantifier, every field must be present (`exactly = |fields|`).
/// Otherwise the quantifier is passed through as given.
///
/// # Example
///
/// ```rust
/// use tideline::builtins::present;
/// use tideline::{PresenceOptions, Quantifier};
///
/// let rule = present(["a", "b", "c"], PresenceOptions::new()).unwrap();
/// assert_eq!(rule.quantifier(), Some(&Quantifier::exactly(3)));
///
/// let rule = present(["a", "b"], PresenceOptions::new().at_most(1)).unwrap();
/// assert_eq!(
///     rule.quantifier(),
///     Some(&Quantifier { exactly: None, at_least: None, at_most: Some(1) })
/// );
/// ```
pub fn present(
    attributes_or_arguments: impl Into<OneOrMany<String>>,
    opts: PresenceOptions,
) -> Result<Rule, BuildError> {
    let fields = FieldSet::coerce("present", "attributes", attributes_or_arguments)?;
    Ok(presence(Namespace::AttributesOrArguments, fields, opts))
}

/// Fields that must be absent, rewritten as a [`Rule::Present`].
///
/// # Example
///
/// ```rust
/// use tideline::builtins::absent;
/// use tideline::{AbsenceOptions, Quantifier, RuleKind};
///
/// let rule = absent(["a", "b", "c"], AbsenceOptions::new()).unwrap();
/// assert_eq!(rule.kind(), RuleKind::Present);
/// assert_eq!(rule.quantifier(), Some(&Quantifier::exactly(0)));
/// ```
pub fn absent(
    attributes_or_arguments: impl Into<OneOrMany<String>>,
    opts: AbsenceOptions,
) -> Result<Rule, BuildError> {
    let fields = FieldSet::coerce("absent", "attributes", attributes_or_arguments)?;
    Ok(absence(Namespace::AttributesOrArguments, fields, opts))
}

/// Attributes that must be present.
///
/// Same normalization as [`present`], producing [`Rule::AttributesPresent`].
pub fn attributes_present(
    attributes: impl Into<OneOrMany<String>>,
    opts: PresenceOptions,
) -> Result<Rule, BuildError> {
    let fields = FieldSet::coerce("attributes_present", "attributes", attributes)?;
    Ok(presence(Namespace::Attributes, fields, opts))
}

/// Attributes that must be absent.
///
/// Same rewrite as [`absent`], producing [`Rule::AttributesPresent`].
///
/// # Example
///
/// ```rust
/// use tideline::builtins::attributes_absent;
/// use tideline::{AbsenceOptions, Quantifier, RuleKind};
///
/// let rule = attributes_absent(["a", "b", "c"], AbsenceOptions::new().at_most(1)).unwrap();
/// assert_eq!(rule.kind(), RuleKind::AttributesPresent);
/// assert_eq!(
///     rule.quantifier(),
///     Some(&Quantifier { exactly: None, at_least: Some(2), at_most: Some(0) })
/// );
/// ```
pub fn attributes_absent(
    attributes: impl Into<OneOrMany<String>>,
    opts: AbsenceOptions,
) -> Result<Rule, BuildError> {
    let fields = FieldSet::coerce("attributes_absent", "attributes", attributes)?;
    Ok(absence(Namespace::Attributes, fields, opts))
}

fn presence(namespace: Namespace, fields: FieldSet, opts: PresenceOptions) -> Rule {
    let PresenceOptions {
        mut quantifier,
        passthrough,
    } = opts;
    if quantifier.is_empty() {
        quantifier.exactly = Some(count(&fields));
    }
    finish(namespace, fields, quantifier, passthrough)
}

fn absence(namespace: Namespace, fields: FieldSet, opts: AbsenceOptions) -> Rule {
    if opts.is_empty() {
        return finish(namespace, fields, Quantifier::exactly(0), opts.passthrough);
    }

    let count = count(&fields);
    // Each bound reads the caller's options, never the other derived bound.
    let at_most = opts.at_least.map_or(0, |k| count.saturating_sub(k));
    let at_least = opts.at_most.map_or(0, |k| count.saturating_sub(k));

    let quantifier = Quantifier {
        exactly: None,
        at_least: Some(at_least),
        at_most: Some(at_most),
    };
    finish(namespace, fields, quantifier, opts.passthrough)
}

fn count(fields: &FieldSet) -> i64 {
    i64::try_from(fields.len()).unwrap_or(i64::MAX)
}

fn finish(
    namespace: Namespace,
    fields: FieldSet,
    quantifier: Quantifier,
    passthrough: Passthrough,
) -> Rule {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        fields = fields.len(),
        exactly = ?quantifier.exactly,
        at_least = ?quantifier.at_least,
        at_most = ?quantifier.at_most,
        "normalized presence quantifier"
    );

    let attributes = fields.into_vec();
    match namespace {
        Namespace::AttributesOrArguments => Rule::Present {
            attributes,
            quantifier,
            passthrough,
        },
        Namespace::Attributes => Rule::AttributesPresent {
            attributes,
            quantifier,
            passthrough,
        },
    }
    .built()
}
