//! Identifiers and field sets
//!
//! Builders name attributes, arguments, and actions by identifier. Raw text
//! is checked once, at construction time, and carried as an [`Ident`] from
//! then on.
//!
//! # Examples
//!
//! ```rust
//! use tideline::{FieldSet, Ident, OneOrMany};
//!
//! let ident = Ident::new("email").unwrap();
//! assert_eq!(ident.as_str(), "email");
//!
//! // A bare identifier is coerced to a one-element set
//! let set = FieldSet::coerce("present", "attributes", "email").unwrap();
//! assert_eq!(set.len(), 1);
//!
//! // A list is used as is, order preserved
//! let set = FieldSet::coerce("present", "attributes", ["b", "a"]).unwrap();
//! assert_eq!(set.names(), vec!["b", "a"]);
//! ```

use std::fmt;

use crate::error::BuildError;

/// A validated field, argument, or action identifier.
///
/// Well-formed identifiers start with an ASCII letter or `_`, continue with
/// ASCII alphanumerics or `_`, and may end in a single `?` or `!`.
///
/// # Example
///
/// ```rust
/// use tideline::Ident;
///
/// assert!(Ident::new("confirmed?").is_ok());
/// assert!(Ident::new("_internal").is_ok());
/// assert!(Ident::new("2fa").is_err());
/// assert!(Ident::new("first name").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ident(String);

impl Ident {
    /// Check `raw` and wrap it as an identifier.
    ///
    /// Errors are attributed to a generic `ident` builder; builders use
    /// [`Ident::parse`] to name themselves in the error.
    pub fn new(raw: impl Into<String>) -> Result<Self, BuildError> {
        Self::parse("ident", "value", raw)
    }

    /// Check `raw`, attributing any error to `builder`'s `argument`.
    pub fn parse(
        builder: &'static str,
        argument: &'static str,
        raw: impl Into<String>,
    ) -> Result<Self, BuildError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(BuildError::EmptyIdentifier { builder, argument }.logged());
        }
        if !is_identifier(&raw) {
            return Err(BuildError::InvalidIdentifier {
                builder,
                argument,
                value: raw,
            }
            .logged());
        }
        Ok(Ident(raw))
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the identifier text.
    pub fn into_string(self) -> String {
        self.0
    }
}

fn is_identifier(raw: &str) -> bool {
    let body = raw
        .strip_suffix('?')
        .or_else(|| raw.strip_suffix('!'))
        .unwrap_or(raw);

    let mut chars = body.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Ident {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Ident> for String {
    fn from(ident: Ident) -> Self {
        ident.0
    }
}

impl PartialEq<str> for Ident {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Ident {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A single item or a list of items, shape preserved.
///
/// This is the input shape for field sets and action lists: callers pass a
/// bare name or a list of names and builders decide how to normalize it.
///
/// # Example
///
/// ```rust
/// use tideline::OneOrMany;
///
/// let one: OneOrMany<String> = "create".into();
/// assert!(one.is_one());
///
/// let many: OneOrMany<String> = vec!["create", "update"].into();
/// assert_eq!(many.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum OneOrMany<T> {
    /// A bare item.
    One(T),
    /// A list of items.
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Returns true for the bare-item shape.
    pub fn is_one(&self) -> bool {
        matches!(self, OneOrMany::One(_))
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        match self {
            OneOrMany::One(_) => 1,
            OneOrMany::Many(items) => items.len(),
        }
    }

    /// Returns true if this is an empty list.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the items as a slice.
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(item) => std::slice::from_ref(item),
            OneOrMany::Many(items) => items,
        }
    }

    /// Flatten into a list; a bare item becomes a one-element list.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }

    /// Apply a fallible conversion to every item, keeping the shape.
    pub fn try_map<U, E, F>(self, mut f: F) -> Result<OneOrMany<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        match self {
            OneOrMany::One(item) => f(item).map(OneOrMany::One),
            OneOrMany::Many(items) => items
                .into_iter()
                .map(f)
                .collect::<Result<Vec<_>, _>>()
                .map(OneOrMany::Many),
        }
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(value: &str) -> Self {
        OneOrMany::One(value.to_string())
    }
}

impl From<String> for OneOrMany<String> {
    fn from(value: String) -> Self {
        OneOrMany::One(value)
    }
}

impl From<&String> for OneOrMany<String> {
    fn from(value: &String) -> Self {
        OneOrMany::One(value.clone())
    }
}

impl From<Vec<&str>> for OneOrMany<String> {
    fn from(values: Vec<&str>) -> Self {
        OneOrMany::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for OneOrMany<String> {
    fn from(values: Vec<String>) -> Self {
        OneOrMany::Many(values)
    }
}

impl From<&[&str]> for OneOrMany<String> {
    fn from(values: &[&str]) -> Self {
        OneOrMany::Many(values.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OneOrMany<String> {
    fn from(values: [&str; N]) -> Self {
        OneOrMany::Many(values.iter().map(|s| s.to_string()).collect())
    }
}

impl From<Ident> for OneOrMany<String> {
    fn from(value: Ident) -> Self {
        OneOrMany::One(value.into_string())
    }
}

impl From<Vec<Ident>> for OneOrMany<String> {
    fn from(values: Vec<Ident>) -> Self {
        OneOrMany::Many(values.into_iter().map(Ident::into_string).collect())
    }
}

/// The ordered identifiers a presence rule counts over.
///
/// Always built by [`FieldSet::coerce`], so it is never empty and every
/// member is a well-formed [`Ident`]. Duplicates are kept; the evaluator
/// counts membership, not position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSet(Vec<Ident>);

impl FieldSet {
    /// Coerce a bare identifier or a list into a field set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tideline::{BuildError, FieldSet};
    ///
    /// let set = FieldSet::coerce("absent", "attributes", vec!["a", "b", "c"]).unwrap();
    /// assert_eq!(set.len(), 3);
    ///
    /// let err = FieldSet::coerce("absent", "attributes", Vec::<&str>::new()).unwrap_err();
    /// assert_eq!(err, BuildError::EmptyFieldSet { builder: "absent", argument: "attributes" });
    /// ```
    pub fn coerce(
        builder: &'static str,
        argument: &'static str,
        input: impl Into<OneOrMany<String>>,
    ) -> Result<Self, BuildError> {
        let input = input.into();
        if input.is_empty() {
            return Err(BuildError::EmptyFieldSet { builder, argument }.logged());
        }
        let idents = input
            .into_vec()
            .into_iter()
            .map(|raw| Ident::parse(builder, argument, raw))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FieldSet(idents))
    }

    /// Number of identifiers, duplicates included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a coerced set; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The identifiers as text, in order.
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(Ident::as_str).collect()
    }

    /// Borrow the identifiers.
    pub fn as_slice(&self) -> &[Ident] {
        &self.0
    }

    /// Consume into the identifier list.
    pub fn into_vec(self) -> Vec<Ident> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_accepts_plain_names() {
        for raw in ["a", "email", "first_name", "_private", "accepted?", "force!", "v2"] {
            assert!(Ident::new(raw).is_ok(), "{raw} should be accepted");
        }
    }

    #[test]
    fn test_ident_rejects_malformed_names() {
        for raw in ["1st", "first name", "a-b", "?", "a??", "a?b", "é", "a.b"] {
            assert!(
                matches!(Ident::new(raw), Err(BuildError::InvalidIdentifier { .. })),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_ident_empty_is_its_own_error() {
        assert_eq!(
            Ident::parse("confirm", "field", ""),
            Err(BuildError::EmptyIdentifier {
                builder: "confirm",
                argument: "field"
            })
        );
    }

    #[test]
    fn test_ident_compares_with_str() {
        let ident = Ident::new("status").unwrap();
        assert_eq!(ident, "status");
        assert_eq!(ident.to_string(), "status");
    }

    #[test]
    fn test_one_or_many_preserves_shape() {
        let one: OneOrMany<String> = "create".into();
        assert_eq!(one, OneOrMany::One("create".to_string()));

        let many: OneOrMany<String> = ["create"].into();
        assert_eq!(many, OneOrMany::Many(vec!["create".to_string()]));
    }

    #[test]
    fn test_one_or_many_try_map_stops_at_first_error() {
        let many: OneOrMany<String> = vec!["ok", "not ok", "also bad"].into();
        let result = many.try_map(|raw| Ident::parse("action_is", "action", raw));
        assert_eq!(
            result,
            Err(BuildError::InvalidIdentifier {
                builder: "action_is",
                argument: "action",
                value: "not ok".to_string()
            })
        );
    }

    #[test]
    fn test_field_set_coerces_bare_identifier() {
        let set = FieldSet::coerce("present", "attributes", "name").unwrap();
        assert_eq!(set.names(), vec!["name"]);
    }

    #[test]
    fn test_field_set_keeps_order_and_duplicates() {
        let set = FieldSet::coerce("present", "attributes", vec!["c", "a", "c"]).unwrap();
        assert_eq!(set.names(), vec!["c", "a", "c"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_field_set_rejects_empty_list() {
        let err = FieldSet::coerce("present", "attributes", Vec::<String>::new()).unwrap_err();
        assert_eq!(
            err,
            BuildError::EmptyFieldSet {
                builder: "present",
                argument: "attributes"
            }
        );
    }

    #[test]
    fn test_field_set_names_bad_member() {
        let err = FieldSet::coerce("present", "attributes", ["a", ""]).unwrap_err();
        assert_eq!(err.argument(), "attributes");
        assert!(matches!(err, BuildError::EmptyIdentifier { .. }));
    }
}
