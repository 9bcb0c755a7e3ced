//! Validation entries: a rule plus when it applies
//!
//! A [`ValidationEntry`] is what a resource declares. It pairs one
//! [`Rule`] with the guards deciding whether the rule runs at all:
//!
//! - `where` guards: a list of rules the combinator runtime evaluates as an
//!   implicit AND before running the main rule,
//! - the action types the entry is attached to,
//! - an optional message template that replaces the evaluator's default.
//!
//! # Example
//!
//! ```rust
//! use tideline::builtins::{action_is, present};
//! use tideline::{ActionType, PresenceOptions, ValidationEntry};
//!
//! let entry = ValidationEntry::new(present("published_at", PresenceOptions::new()).unwrap())
//!     .when(action_is("publish").unwrap())
//!     .on([ActionType::Update])
//!     .with_message("a published post needs a date");
//!
//! assert!(entry.applies_to(ActionType::Update));
//! assert!(!entry.applies_to(ActionType::Create));
//! assert_eq!(entry.conditions().len(), 1);
//! ```

use std::fmt;

use crate::rule::Rule;

/// The kind of action a validation entry can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActionType {
    /// Record creation.
    Create,
    /// Record update.
    Update,
    /// Record destruction.
    Destroy,
    /// Reads.
    Read,
    /// Generic actions.
    Action,
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionType::Create => "create",
            ActionType::Update => "update",
            ActionType::Destroy => "destroy",
            ActionType::Read => "read",
            ActionType::Action => "action",
        };
        f.write_str(name)
    }
}

/// A rule with its guards, action types, and message.
///
/// Defaults: no guards, runs on [`ActionType::Create`] and
/// [`ActionType::Update`], no message, `only_when_valid` and
/// `before_action` both false.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationEntry {
    rule: Rule,
    #[cfg_attr(feature = "serde", serde(rename = "where"))]
    conditions: Vec<Rule>,
    on: Vec<ActionType>,
    message: Option<String>,
    description: Option<String>,
    only_when_valid: bool,
    before_action: bool,
}

impl ValidationEntry {
    /// Attach `rule` with default settings.
    pub fn new(rule: Rule) -> Self {
        Self {
            rule,
            conditions: Vec::new(),
            on: vec![ActionType::Create, ActionType::Update],
            message: None,
            description: None,
            only_when_valid: false,
            before_action: false,
        }
    }

    /// Add a `where` guard. Guards accumulate and are ANDed.
    pub fn when(mut self, condition: Rule) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Replace the action types this entry runs on.
    pub fn on(mut self, action_types: impl IntoIterator<Item = ActionType>) -> Self {
        self.on = action_types.into_iter().collect();
        self
    }

    /// Set a message template for failures.
    pub fn with_message(mut self, template: impl Into<String>) -> Self {
        self.message = Some(template.into());
        self
    }

    /// Set a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Only run when every earlier validation passed.
    pub fn only_when_valid(mut self, only_when_valid: bool) -> Self {
        self.only_when_valid = only_when_valid;
        self
    }

    /// Run inside the action instead of before it starts.
    pub fn before_action(mut self, before_action: bool) -> Self {
        self.before_action = before_action;
        self
    }

    /// Returns true if this entry is attached to `action_type`.
    pub fn applies_to(&self, action_type: ActionType) -> bool {
        self.on.contains(&action_type)
    }

    /// The main rule.
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// The `where` guards, in declaration order.
    pub fn conditions(&self) -> &[Rule] {
        &self.conditions
    }

    /// Action types this entry runs on.
    pub fn action_types(&self) -> &[ActionType] {
        &self.on
    }

    /// Message template, if set.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Description, if set.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Whether the entry waits for earlier validations to pass.
    pub fn is_only_when_valid(&self) -> bool {
        self.only_when_valid
    }

    /// Whether the entry runs before the action.
    pub fn is_before_action(&self) -> bool {
        self.before_action
    }

    /// Consume into the main rule and its guards.
    pub fn into_parts(self) -> (Rule, Vec<Rule>) {
        (self.rule, self.conditions)
    }
}

impl From<Rule> for ValidationEntry {
    fn from(rule: Rule) -> Self {
        Self::new(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::{attribute_equals, changing, confirm, negate};
    use crate::options::ChangingOptions;

    fn rule() -> Rule {
        confirm("password", "password_confirmation").unwrap()
    }

    #[test]
    fn test_defaults() {
        let entry = ValidationEntry::new(rule());
        assert_eq!(entry.rule(), &rule());
        assert!(entry.conditions().is_empty());
        assert_eq!(
            entry.action_types(),
            &[ActionType::Create, ActionType::Update]
        );
        assert_eq!(entry.message(), None);
        assert_eq!(entry.description(), None);
        assert!(!entry.is_only_when_valid());
        assert!(!entry.is_before_action());
    }

    #[test]
    fn test_conditions_accumulate_in_order() {
        let first = changing("password", ChangingOptions::new()).unwrap();
        let second = negate(attribute_equals("locked", true).unwrap());
        let entry = ValidationEntry::new(rule())
            .when(first.clone())
            .when(second.clone());
        assert_eq!(entry.conditions(), &[first, second]);
    }

    #[test]
    fn test_on_replaces_action_types() {
        let entry = ValidationEntry::new(rule()).on([ActionType::Destroy]);
        assert!(entry.applies_to(ActionType::Destroy));
        assert!(!entry.applies_to(ActionType::Create));
        assert!(!entry.applies_to(ActionType::Update));
    }

    #[test]
    fn test_flags_and_text() {
        let entry = ValidationEntry::from(rule())
            .with_message("passwords must match")
            .with_description("confirmation check")
            .only_when_valid(true)
            .before_action(true);
        assert_eq!(entry.message(), Some("passwords must match"));
        assert_eq!(entry.description(), Some("confirmation check"));
        assert!(entry.is_only_when_valid());
        assert!(entry.is_before_action());
    }

    #[test]
    fn test_into_parts() {
        let guard = changing("password", ChangingOptions::new()).unwrap();
        let (main, guards) = ValidationEntry::new(rule()).when(guard.clone()).into_parts();
        assert_eq!(main, rule());
        assert_eq!(guards, vec![guard]);
    }

    #[test]
    fn test_action_type_display() {
        assert_eq!(ActionType::Destroy.to_string(), "destroy");
    }
}
