//! Action guards.

use crate::error::BuildError;
use crate::ident::{Ident, OneOrMany};
use crate::rule::Rule;

/// The running action must be `action`, or any of them when given a list.
///
/// The shape is kept: a bare name stays [`OneOrMany::One`], a list stays
/// [`OneOrMany::Many`].
///
/// # Example
///
/// ```rust
/// use tideline::builtins::action_is;
/// use tideline::{OneOrMany, Rule};
///
/// let rule = action_is(["create", "update"]).unwrap();
/// match rule {
///     Rule::ActionIs { action: OneOrMany::Many(actions) } => assert_eq!(actions.len(), 2),
///     _ => unreachable!(),
/// }
///
/// let rule = action_is("publish").unwrap();
/// assert!(matches!(rule, Rule::ActionIs { action: OneOrMany::One(_) }));
/// ```
pub fn action_is(action: impl Into<OneOrMany<String>>) -> Result<Rule, BuildError> {
    let action = action.into();
    if action.is_empty() {
        return Err(BuildError::EmptyFieldSet {
            builder: "action_is",
            argument: "action",
        }
        .logged());
    }
    let action = action.try_map(|raw| Ident::parse("action_is", "action", raw))?;
    Ok(Rule::ActionIs { action }.built())
}
