//! Lenient decoding of person input fields.
//!
//! Callers send loosely typed JSON. Values are cast the way a document
//! store would cast them into the `name: string` / `age: number` schema;
//! anything that cannot be cast is a decoding error.
//!
//! The decoders are meant for `Option` fields annotated with
//! `#[serde(default, deserialize_with = "...")]`. For inserts JSON `null`
//! decodes to `None`, the same as an absent field. The `patch_*` variants
//! keep the two apart: an absent field is `None`, an explicit `null` is
//! `Some(None)`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// Largest integer an IEEE double represents exactly (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Decode a `name`-style field: strings pass through, numbers and
/// booleans become their textual form.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "cannot cast {other} to a string"
        ))),
    }
}

/// Decode an `age`-style field: numbers pass through, numeric strings are
/// parsed, booleans become `1` / `0`, and an empty string is `None`.
pub fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(None),
        Some(v) => v,
    };

    let number = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if s.trim().is_empty() => return Ok(None),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };

    match number {
        Some(n) if n.is_finite() => Ok(Some(n)),
        _ => Err(D::Error::custom(format!("cannot cast {value} to a number"))),
    }
}

/// [`lenient_string`] for update bodies. Only called for present fields,
/// so the outer `Some` marks the field as set (possibly to null).
pub fn patch_string<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_string(deserializer).map(Some)
}

/// [`lenient_number`] for update bodies.
pub fn patch_number<'de, D>(deserializer: D) -> Result<Option<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_number(deserializer).map(Some)
}

/// Encode an optional number the way JSON clients expect: integral values
/// without a fractional part (`30`, not `30.0`).
pub fn serialize_number<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        None => serializer.serialize_none(),
        Some(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
            serializer.serialize_i64(*n as i64)
        }
        Some(n) => serializer.serialize_f64(*n),
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Input {
        #[serde(default, deserialize_with = "lenient_string")]
        name: Option<String>,
        #[serde(default, deserialize_with = "lenient_number")]
        age: Option<f64>,
    }

    fn decode(json: &str) -> Result<Input, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn absent_and_null_are_none() {
        let input = decode("{}").unwrap();
        assert_eq!(input.name, None);
        assert_eq!(input.age, None);

        let input = decode(r#"{"name": null, "age": null}"#).unwrap();
        assert_eq!(input.name, None);
        assert_eq!(input.age, None);
    }

    #[test]
    fn well_typed_values_pass_through() {
        let input = decode(r#"{"name": "John Doe", "age": 30}"#).unwrap();
        assert_eq!(input.name.as_deref(), Some("John Doe"));
        assert_eq!(input.age, Some(30.0));
    }

    #[test]
    fn scalars_cast_to_string() {
        assert_eq!(decode(r#"{"name": 42}"#).unwrap().name.as_deref(), Some("42"));
        assert_eq!(decode(r#"{"name": true}"#).unwrap().name.as_deref(), Some("true"));
    }

    #[test]
    fn numeric_strings_cast_to_number() {
        assert_eq!(decode(r#"{"age": "35"}"#).unwrap().age, Some(35.0));
        assert_eq!(decode(r#"{"age": " 2.5 "}"#).unwrap().age, Some(2.5));
        assert_eq!(decode(r#"{"age": ""}"#).unwrap().age, None);
        assert_eq!(decode(r#"{"age": false}"#).unwrap().age, Some(0.0));
    }

    #[test]
    fn uncastable_values_are_errors() {
        let err = decode(r#"{"age": "thirty"}"#).unwrap_err();
        assert!(err.to_string().contains("cannot cast \"thirty\" to a number"));

        assert!(decode(r#"{"age": [1]}"#).is_err());
        assert!(decode(r#"{"age": "NaN"}"#).is_err());
        assert!(decode(r#"{"name": {"first": "John"}}"#).is_err());
    }

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "patch_string")]
        name: Option<Option<String>>,
        #[serde(default, deserialize_with = "patch_number")]
        age: Option<Option<f64>>,
    }

    fn decode_patch(json: &str) -> Result<Patch, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn patch_distinguishes_absent_from_null() {
        let patch = decode_patch("{}").unwrap();
        assert_eq!(patch.name, None);
        assert_eq!(patch.age, None);

        let patch = decode_patch(r#"{"name": null, "age": 31}"#).unwrap();
        assert_eq!(patch.name, Some(None));
        assert_eq!(patch.age, Some(Some(31.0)));
    }

    #[test]
    fn patch_casts_like_insert() {
        let patch = decode_patch(r#"{"name": 7, "age": "12"}"#).unwrap();
        assert_eq!(patch.name, Some(Some("7".to_string())));
        assert_eq!(patch.age, Some(Some(12.0)));

        assert!(decode_patch(r#"{"age": "old"}"#).is_err());
    }

    #[derive(Serialize)]
    struct Output {
        #[serde(serialize_with = "serialize_number")]
        age: Option<f64>,
    }

    #[test]
    fn integral_numbers_serialize_without_fraction() {
        let json = |age| serde_json::to_string(&Output { age }).unwrap();
        assert_eq!(json(Some(30.0)), r#"{"age":30}"#);
        assert_eq!(json(Some(-4.0)), r#"{"age":-4}"#);
        assert_eq!(json(Some(2.5)), r#"{"age":2.5}"#);
        assert_eq!(json(None), r#"{"age":null}"#);
    }
}
