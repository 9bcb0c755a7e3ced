//! Serde support for identifiers, patterns, and literal values (feature-gated)
//!
//! [`Ident`] and [`Pattern`] serialize as their text and are checked again
//! on the way in, so a deserialized descriptor is as well-formed as a built
//! one. [`Value`] serializes as plain JSON-style data: a symbol is written
//! as its name and reads back as [`Value::Str`]. Everything else derives
//! its impls.
//!
//! # Example
//!
//! ```rust,ignore
//! use tideline::builtins::present;
//! use tideline::PresenceOptions;
//!
//! let rule = present(["a", "b", "c"], PresenceOptions::new()).unwrap();
//! let json = serde_json::to_string(&rule).unwrap();
//! assert_eq!(json, r#"{"kind":"present","attributes":["a","b","c"],"exactly":3}"#);
//! ```

use std::fmt;

use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ident::Ident;
use crate::value::{Pattern, Value};

impl Serialize for Ident {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Ident {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ident::new(raw).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Pattern::new(&source).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Nil => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::Str(s) | Value::Symbol(s) => serializer.serialize_str(s),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("null, a boolean, a number, a string, or a list of values")
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Value, E> {
        Ok(Value::Nil)
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<Value, E> {
        Ok(Value::Nil)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_bool<E: serde::de::Error>(self, b: bool) -> Result<Value, E> {
        Ok(Value::Bool(b))
    }

    fn visit_i64<E: serde::de::Error>(self, n: i64) -> Result<Value, E> {
        Ok(Value::Int(n))
    }

    fn visit_u64<E: serde::de::Error>(self, n: u64) -> Result<Value, E> {
        i64::try_from(n)
            .map(Value::Int)
            .map_err(|_| E::custom(format!("integer {} does not fit in i64", n)))
    }

    fn visit_f64<E: serde::de::Error>(self, x: f64) -> Result<Value, E> {
        Ok(Value::Float(x))
    }

    fn visit_str<E: serde::de::Error>(self, s: &str) -> Result<Value, E> {
        Ok(Value::Str(s.to_string()))
    }

    fn visit_string<E: serde::de::Error>(self, s: String) -> Result<Value, E> {
        Ok(Value::Str(s))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::List(items))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use crate::builtins::{
        absent, action_is, changing, compare, matches, negate, one_of, present, string_length,
    };
    use crate::options::{
        AbsenceOptions, ChangingOptions, CompareOptions, LengthOptions, PresenceOptions,
    };
    use crate::value::{Operand, Value};
    use crate::{Ident, Pattern, Rule};
    use serde_json::json;

    #[test]
    fn test_present_shape() {
        let rule = present(["a", "b", "c"], PresenceOptions::new()).unwrap();
        assert_eq!(
            serde_json::to_value(&rule).unwrap(),
            json!({"kind": "present", "attributes": ["a", "b", "c"], "exactly": 3})
        );
    }

    #[test]
    fn test_absent_shape_has_both_bounds() {
        let rule = absent(["a", "b", "c"], AbsenceOptions::new().at_least(1)).unwrap();
        assert_eq!(
            serde_json::to_value(&rule).unwrap(),
            json!({"kind": "present", "attributes": ["a", "b", "c"], "at_least": 0, "at_most": 2})
        );
    }

    #[test]
    fn test_negate_shape_nests() {
        let rule = negate(one_of("status", [Value::symbol("closed")]).unwrap());
        assert_eq!(
            serde_json::to_value(&rule).unwrap(),
            json!({
                "kind": "negate",
                "validation": {
                    "kind": "one_of",
                    "field": "status",
                    "values": ["closed"]
                }
            })
        );
    }

    #[test]
    fn test_options_flatten_with_passthrough() {
        let opts = ChangingOptions::new()
            .touching(true)
            .with_option("message", "must change");
        let rule = changing("email", opts).unwrap();
        assert_eq!(
            serde_json::to_value(&rule).unwrap(),
            json!({
                "kind": "changing",
                "field": "email",
                "touching?": true,
                "message": "must change"
            })
        );
    }

    #[test]
    fn test_absent_passthrough_only_shape() {
        let opts = AbsenceOptions::new().with_option("message", "x");
        let rule = absent(["a", "b"], opts).unwrap();
        assert_eq!(
            serde_json::to_value(&rule).unwrap(),
            json!({
                "kind": "present",
                "attributes": ["a", "b"],
                "at_least": 0,
                "at_most": 0,
                "message": "x"
            })
        );
    }

    #[test]
    fn test_values_serialize_as_plain_data() {
        let value = Value::List(vec![
            Value::Nil,
            Value::Bool(true),
            Value::Int(-3),
            Value::Float(1.5),
            Value::from("draft"),
            Value::symbol("closed"),
        ]);
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!([null, true, -3, 1.5, "draft", "closed"])
        );
    }

    #[test]
    fn test_values_read_back_from_plain_data() {
        let value: Value = serde_json::from_str(r#"[null, false, 7, 2.5, "open"]"#).unwrap();
        assert_eq!(
            value,
            Value::List(vec![
                Value::Nil,
                Value::Bool(false),
                Value::Int(7),
                Value::Float(2.5),
                Value::from("open"),
            ])
        );
    }

    #[test]
    fn test_passthrough_round_trip() {
        let opts = ChangingOptions::new()
            .touching(false)
            .with_option("message", "must change")
            .with_option("limit", 3);
        let rule = changing("email", opts).unwrap();
        let json = serde_json::to_string(&rule).unwrap();
        let back: Rule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rule);
    }

    #[test]
    fn test_compare_field_operand_shape() {
        let opts = CompareOptions::new().greater_than(Operand::field("starts_at").unwrap());
        let rule = compare("ends_at", opts).unwrap();
        assert_eq!(
            serde_json::to_value(&rule).unwrap(),
            json!({
                "kind": "compare",
                "attribute": "ends_at",
                "greater_than": {"field": "starts_at"}
            })
        );
    }

    #[test]
    fn test_match_shape() {
        let rule = matches("zip", "^[0-9]{5}$").unwrap();
        assert_eq!(
            serde_json::to_value(&rule).unwrap(),
            json!({
                "kind": "match",
                "attribute": "zip",
                "match": "^[0-9]{5}$",
                "message": "must match /^[0-9]{5}$/"
            })
        );
    }

    #[test]
    fn test_action_is_keeps_shape() {
        let one = action_is("create").unwrap();
        let many = action_is(["create"]).unwrap();
        assert_eq!(serde_json::to_value(&one).unwrap()["action"], json!("create"));
        assert_eq!(serde_json::to_value(&many).unwrap()["action"], json!(["create"]));
    }

    #[test]
    fn test_negate_round_trip() {
        let rule = negate(string_length("name", LengthOptions::new().max(80)).unwrap());
        let json = serde_json::to_string(&rule).unwrap();
        let back: Rule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rule);
    }

    #[test]
    fn test_deserialize_rejects_bad_ident() {
        let result: Result<Ident, _> = serde_json::from_str(r#""not an ident""#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("not a valid identifier"));
    }

    #[test]
    fn test_deserialize_rejects_bad_pattern() {
        let result: Result<Pattern, _> = serde_json::from_str(r#""(""#);
        assert!(result.is_err());
    }
}
