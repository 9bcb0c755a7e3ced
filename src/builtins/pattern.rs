//! Regular expression matching.
//!
//! This is the one builder that derives content instead of only passing its
//! arguments through: it attaches a failure message built from the
//! pattern's source text by [`match_message`].

use regex::Regex;

use crate::error::BuildError;
use crate::ident::Ident;
use crate::rule::Rule;
use crate::value::Pattern;

/// The attribute must match `pattern`.
///
/// # Example
///
/// ```rust
/// use tideline::builtins::matches;
/// use tideline::Rule;
///
/// let rule = matches("zip", r"^\d{5}$").unwrap();
/// match rule {
///     Rule::Match { message, .. } => assert_eq!(message, r"must match /^\d{5}$/"),
///     _ => unreachable!(),
/// }
///
/// let err = matches("zip", r"(\d{5}").unwrap_err();
/// assert_eq!(err.argument(), "pattern");
/// ```
pub fn matches(attribute: impl Into<String>, pattern: &str) -> Result<Rule, BuildError> {
    let attribute = Ident::parse("matches", "attribute", attribute)?;
    let pattern = Pattern::parse("matches", "pattern", pattern)?;
    Ok(match_rule(attribute, pattern))
}

/// Like [`matches`], for an already compiled expression.
pub fn matches_regex(attribute: impl Into<String>, regex: Regex) -> Result<Rule, BuildError> {
    let attribute = Ident::parse("matches", "attribute", attribute)?;
    Ok(match_rule(attribute, Pattern::from(regex)))
}

fn match_rule(attribute: Ident, pattern: Pattern) -> Rule {
    let message = match_message(&pattern);
    Rule::Match {
        attribute,
        pattern,
        message,
    }
    .built()
}

/// Default failure message for a pattern: `must match /<source>/`.
///
/// # Example
///
/// ```rust
/// use tideline::builtins::match_message;
/// use tideline::Pattern;
///
/// let p = Pattern::new("^[a-z]+$").unwrap();
/// assert_eq!(match_message(&p), "must match /^[a-z]+$/");
/// ```
pub fn match_message(pattern: &Pattern) -> String {
    format!("must match /{}/", pattern.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_builds_descriptor() {
        let rule = matches("slug", "^[a-z-]+$").unwrap();
        assert_eq!(
            rule,
            Rule::Match {
                attribute: Ident::new("slug").unwrap(),
                pattern: Pattern::new("^[a-z-]+$").unwrap(),
                message: "must match /^[a-z-]+$/".to_string(),
            }
        );
    }

    #[test]
    fn test_matches_regex_equals_matches() {
        let compiled = Regex::new("^x+$").unwrap();
        assert_eq!(
            matches_regex("code", compiled).unwrap(),
            matches("code", "^x+$").unwrap()
        );
    }

    #[test]
    fn test_message_keeps_inline_flags() {
        let p = Pattern::new("(?i)^abc$").unwrap();
        assert_eq!(match_message(&p), "must match /(?i)^abc$/");
    }

    #[test]
    fn test_attribute_checked_before_pattern() {
        let err = matches("", "(").unwrap_err();
        assert_eq!(err.argument(), "attribute");
    }

    #[test]
    fn test_bad_pattern_reports_source() {
        match matches("code", "(").unwrap_err() {
            BuildError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "("),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
