//! Direct pass-through builders over a single attribute or argument.

use crate::error::BuildError;
use crate::ident::Ident;
use crate::options::ChangingOptions;
use crate::rule::Rule;
use crate::value::Value;

/// The attribute's value must be one of `values`.
///
/// # Example
///
/// ```rust
/// use tideline::builtins::one_of;
/// use tideline::{Rule, Value};
///
/// let rule = one_of("status", [Value::symbol("open"), Value::symbol("closed")]).unwrap();
/// match rule {
///     Rule::OneOf { field, values } => {
///         assert_eq!(field, "status");
///         assert_eq!(values.len(), 2);
///     }
///     _ => unreachable!(),
/// }
/// ```
pub fn one_of<V>(
    field: impl Into<String>,
    values: impl IntoIterator<Item = V>,
) -> Result<Rule, BuildError>
where
    V: Into<Value>,
{
    let field = Ident::parse("one_of", "field", field)?;
    Ok(Rule::OneOf {
        field,
        values: values.into_iter().map(Into::into).collect(),
    }
    .built())
}

/// The field must be changing.
///
/// The options are stored as given with `field` added; nothing is defaulted.
///
/// # Example
///
/// ```rust
/// use tideline::builtins::changing;
/// use tideline::{ChangingOptions, Rule};
///
/// let rule = changing("email", ChangingOptions::new().touching(true)).unwrap();
/// match rule {
///     Rule::Changing { field, options } => {
///         assert_eq!(field, "email");
///         assert_eq!(options.touching, Some(true));
///     }
///     _ => unreachable!(),
/// }
/// ```
pub fn changing(field: impl Into<String>, opts: ChangingOptions) -> Result<Rule, BuildError> {
    let field = Ident::parse("changing", "field", field)?;
    Ok(Rule::Changing {
        field,
        options: opts,
    }
    .built())
}

/// `field` and `confirmation_field` must carry the same value.
///
/// # Example
///
/// ```rust
/// use tideline::builtins::confirm;
///
/// let rule = confirm("password", "password_confirmation").unwrap();
/// assert_eq!(rule.fields().len(), 2);
///
/// let err = confirm("password", "password confirmation").unwrap_err();
/// assert_eq!(err.argument(), "confirmation");
/// ```
pub fn confirm(
    field: impl Into<String>,
    confirmation_field: impl Into<String>,
) -> Result<Rule, BuildError> {
    let field = Ident::parse("confirm", "field", field)?;
    let confirmation = Ident::parse("confirm", "confirmation", confirmation_field)?;
    Ok(Rule::Confirm {
        field,
        confirmation,
    }
    .built())
}

/// The attribute must equal `value`.
pub fn attribute_equals(
    attribute: impl Into<String>,
    value: impl Into<Value>,
) -> Result<Rule, BuildError> {
    let attribute = Ident::parse("attribute_equals", "attribute", attribute)?;
    Ok(Rule::AttributeEquals {
        attribute,
        value: value.into(),
    }
    .built())
}

/// The attribute must not equal `value`.
pub fn attribute_does_not_equal(
    attribute: impl Into<String>,
    value: impl Into<Value>,
) -> Result<Rule, BuildError> {
    let attribute = Ident::parse("attribute_does_not_equal", "attribute", attribute)?;
    Ok(Rule::AttributeDoesNotEqual {
        attribute,
        value: value.into(),
    }
    .built())
}

/// The attribute's value must be in `list`.
///
/// # Example
///
/// ```rust
/// use tideline::builtins::attribute_in;
/// use tideline::{Rule, Value};
///
/// let rule = attribute_in("priority", [1, 2, 3]).unwrap();
/// assert_eq!(
///     rule,
///     Rule::AttributeIn {
///         attribute: tideline::Ident::new("priority").unwrap(),
///         list: vec![Value::Int(1), Value::Int(2), Value::Int(3)],
///     }
/// );
/// ```
pub fn attribute_in<V>(
    attribute: impl Into<String>,
    list: impl IntoIterator<Item = V>,
) -> Result<Rule, BuildError>
where
    V: Into<Value>,
{
    let attribute = Ident::parse("attribute_in", "attribute", attribute)?;
    Ok(Rule::AttributeIn {
        attribute,
        list: list.into_iter().map(Into::into).collect(),
    }
    .built())
}

/// The argument must equal `value`.
pub fn argument_equals(
    argument: impl Into<String>,
    value: impl Into<Value>,
) -> Result<Rule, BuildError> {
    let argument = Ident::parse("argument_equals", "argument", argument)?;
    Ok(Rule::ArgumentEquals {
        argument,
        value: value.into(),
    }
    .built())
}

/// The argument must not equal `value`.
pub fn argument_does_not_equal(
    argument: impl Into<String>,
    value: impl Into<Value>,
) -> Result<Rule, BuildError> {
    let argument = Ident::parse("argument_does_not_equal", "argument", argument)?;
    Ok(Rule::ArgumentDoesNotEqual {
        argument,
        value: value.into(),
    }
    .built())
}

/// The argument's value must be in `list`.
pub fn argument_in<V>(
    argument: impl Into<String>,
    list: impl IntoIterator<Item = V>,
) -> Result<Rule, BuildError>
where
    V: Into<Value>,
{
    let argument = Ident::parse("argument_in", "argument", argument)?;
    Ok(Rule::ArgumentIn {
        argument,
        list: list.into_iter().map(Into::into).collect(),
    }
    .built())
}
