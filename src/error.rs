//! Construction-time errors for rule builders.
//!
//! A builder either returns a complete [`Rule`](crate::Rule) or a
//! [`BuildError`] naming the builder and the argument it rejected. There is
//! no partially built descriptor and nothing to retry: every builder is a
//! pure function of its inputs.
//!
//! Quantifier consistency (for example `at_least` larger than the field set)
//! is *not* checked here. Those descriptors are emitted as computed and the
//! evaluator decides what they mean.

use std::fmt;

/// Error returned when a builder receives malformed input.
///
/// # Examples
///
/// ```rust
/// use tideline::builtins::one_of;
/// use tideline::BuildError;
///
/// let err = one_of("", ["open"]).unwrap_err();
/// assert_eq!(
///     err,
///     BuildError::EmptyIdentifier { builder: "one_of", argument: "field" }
/// );
/// assert_eq!(err.to_string(), "one_of: argument `field` must not be empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// An identifier argument was the empty string.
    EmptyIdentifier {
        /// Builder that rejected the input.
        builder: &'static str,
        /// Argument that was invalid.
        argument: &'static str,
    },
    /// An identifier argument was not shaped like an identifier.
    InvalidIdentifier {
        /// Builder that rejected the input.
        builder: &'static str,
        /// Argument that was invalid.
        argument: &'static str,
        /// The offending text.
        value: String,
    },
    /// A field set or action list contained no identifiers.
    EmptyFieldSet {
        /// Builder that rejected the input.
        builder: &'static str,
        /// Argument that was invalid.
        argument: &'static str,
    },
    /// A pattern argument did not compile as a regular expression.
    InvalidPattern {
        /// Builder that rejected the input.
        builder: &'static str,
        /// Argument that was invalid.
        argument: &'static str,
        /// The pattern source text.
        pattern: String,
        /// Compiler diagnostic.
        reason: String,
    },
}

impl BuildError {
    /// Name of the builder that rejected its input.
    pub fn builder(&self) -> &'static str {
        match self {
            Self::EmptyIdentifier { builder, .. }
            | Self::InvalidIdentifier { builder, .. }
            | Self::EmptyFieldSet { builder, .. }
            | Self::InvalidPattern { builder, .. } => builder,
        }
    }

    /// Name of the argument that was invalid.
    pub fn argument(&self) -> &'static str {
        match self {
            Self::EmptyIdentifier { argument, .. }
            | Self::InvalidIdentifier { argument, .. }
            | Self::EmptyFieldSet { argument, .. }
            | Self::InvalidPattern { argument, .. } => argument,
        }
    }

    /// Log the rejection and hand the error back.
    pub(crate) fn logged(self) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            builder = self.builder(),
            argument = self.argument(),
            error = %self,
            "rejected malformed builder input"
        );
        self
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyIdentifier { builder, argument } => {
                write!(f, "{}: argument `{}` must not be empty", builder, argument)
            }
            Self::InvalidIdentifier {
                builder,
                argument,
                value,
            } => write!(
                f,
                "{}: argument `{}` is not a valid identifier: {:?}",
                builder, argument, value
            ),
            Self::EmptyFieldSet { builder, argument } => write!(
                f,
                "{}: argument `{}` must name at least one identifier",
                builder, argument
            ),
            Self::InvalidPattern {
                builder,
                argument,
                pattern,
                reason,
            } => write!(
                f,
                "{}: argument `{}` is not a valid pattern {:?}: {}",
                builder, argument, pattern, reason
            ),
        }
    }
}

impl std::error::Error for BuildError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_name_builder_and_argument() {
        let err = BuildError::InvalidIdentifier {
            builder: "confirm",
            argument: "confirmation",
            value: "pass word".to_string(),
        };
        assert_eq!(err.builder(), "confirm");
        assert_eq!(err.argument(), "confirmation");
    }

    #[test]
    fn test_display_invalid_identifier() {
        let err = BuildError::InvalidIdentifier {
            builder: "confirm",
            argument: "confirmation",
            value: "pass word".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "confirm: argument `confirmation` is not a valid identifier: \"pass word\""
        );
    }

    #[test]
    fn test_display_empty_field_set() {
        let err = BuildError::EmptyFieldSet {
            builder: "present",
            argument: "attributes",
        };
        assert_eq!(
            err.to_string(),
            "present: argument `attributes` must name at least one identifier"
        );
    }

    #[test]
    fn test_display_invalid_pattern() {
        let err = BuildError::InvalidPattern {
            builder: "matches",
            argument: "pattern",
            pattern: "(".to_string(),
            reason: "unclosed group".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "matches: argument `pattern` is not a valid pattern \"(\": unclosed group"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&BuildError::EmptyIdentifier {
            builder: "one_of",
            argument: "field",
        });
    }
}
