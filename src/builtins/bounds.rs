//! Length and comparison bounds.

use crate::error::BuildError;
use crate::ident::Ident;
use crate::options::{CompareOptions, LengthOptions};
use crate::rule::Rule;

/// The attribute's string length must be within `opts`.
///
/// # Example
///
/// ```rust
/// use tideline::builtins::string_length;
/// use tideline::{LengthOptions, Rule};
///
/// let rule = string_length("username", LengthOptions::new().min(3).max(20)).unwrap();
/// match rule {
///     Rule::StringLength { attribute, options } => {
///         assert_eq!(attribute, "username");
///         assert_eq!(options.min, Some(3));
///         assert_eq!(options.max, Some(20));
///         assert_eq!(options.exact, None);
///     }
///     _ => unreachable!(),
/// }
/// ```
pub fn string_length(
    attribute: impl Into<String>,
    opts: LengthOptions,
) -> Result<Rule, BuildError> {
    let attribute = Ident::parse("string_length", "attribute", attribute)?;
    Ok(Rule::StringLength {
        attribute,
        options: opts,
    }
    .built())
}

/// The attribute must compare within `opts`.
///
/// # Example
///
/// ```rust
/// use tideline::builtins::compare;
/// use tideline::{CompareOptions, RuleKind};
///
/// let rule = compare("age", CompareOptions::new().greater_than_or_equal_to(18)).unwrap();
/// assert_eq!(rule.kind(), RuleKind::Compare);
/// ```
pub fn compare(attribute: impl Into<String>, opts: CompareOptions) -> Result<Rule, BuildError> {
    compare_as("compare", attribute, opts)
}

/// Alias of [`compare`]; produces an identical descriptor.
///
/// # Example
///
/// ```rust
/// use tideline::builtins::{compare, numericality};
/// use tideline::CompareOptions;
///
/// let opts = CompareOptions::new().less_than(100);
/// assert_eq!(
///     numericality("score", opts.clone()).unwrap(),
///     compare("score", opts).unwrap()
/// );
/// ```
pub fn numericality(
    attribute: impl Into<String>,
    opts: CompareOptions,
) -> Result<Rule, BuildError> {
    compare_as("numericality", attribute, opts)
}

// Only the builder name used in errors differs between the two entry points.
fn compare_as(
    builder: &'static str,
    attribute: impl Into<String>,
    opts: CompareOptions,
) -> Result<Rule, BuildError> {
    let attribute = Ident::parse(builder, "attribute", attribute)?;
    Ok(Rule::Compare {
        attribute,
        options: opts,
    }
    .built())
}
