//! Rule combinators.

use crate::rule::Rule;

/// Invert `rule`'s verdict.
///
/// The rule is moved into the wrapper unchanged and never inspected; what
/// inversion means for pass, fail, and error is up to the evaluator.
///
/// # Example
///
/// ```rust
/// use tideline::builtins::{negate, one_of};
/// use tideline::{Rule, Value};
///
/// let inner = one_of("status", [Value::symbol("closed")]).unwrap();
/// let rule = negate(inner.clone());
/// assert_eq!(rule, Rule::Negate { validation: Box::new(inner) });
/// ```
pub fn negate(rule: Rule) -> Rule {
    Rule::Negate {
        validation: Box::new(rule),
    }
    .built()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::{absent, present};
    use crate::options::{AbsenceOptions, PresenceOptions};

    #[test]
    fn test_negate_wraps_any_kind() {
        let inner = absent(["a", "b"], AbsenceOptions::new()).unwrap();
        match negate(inner.clone()) {
            Rule::Negate { validation } => assert_eq!(*validation, inner),
            other => panic!("unexpected rule: {other:?}"),
        }
    }

    #[test]
    fn test_double_negate_nests() {
        let inner = present("a", PresenceOptions::new()).unwrap();
        let rule = negate(negate(inner.clone()));
        assert_eq!(
            rule,
            Rule::Negate {
                validation: Box::new(Rule::Negate {
                    validation: Box::new(inner),
                }),
            }
        );
    }

    #[test]
    fn test_method_form_matches_function() {
        let inner = present("a", PresenceOptions::new()).unwrap();
        assert_eq!(inner.clone().negate(), negate(inner));
    }
}
