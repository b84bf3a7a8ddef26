//! Request validation for brand ids and names.

use crate::error::AppError;
use serde_json::Value;

pub const INVALID_NAME: &str =
    "Invalid input: 'name' is required and must be a non-empty string.";
pub const INVALID_PATH_ID: &str = "Invalid 'id' parameter in URL. Must be an integer.";
pub const INVALID_QUERY_ID: &str = "Invalid 'id' query parameter. Must be an integer.";

/// Where an id came from; only changes the error message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdSource {
    Path,
    Query,
}

pub struct RequestValidator;

impl RequestValidator {
    /// Parse an id from its leading decimal integer: leading whitespace and an
    /// optional sign are accepted and anything after the digits is ignored, so
    /// `"12abc"` and `"1.5"` read as 12 and 1. No leading digits, or a value
    /// outside `i32`, is rejected.
    pub fn id(raw: &str, source: IdSource) -> Result<i32, AppError> {
        leading_integer(raw).ok_or_else(|| {
            let message = match source {
                IdSource::Path => INVALID_PATH_ID,
                IdSource::Query => INVALID_QUERY_ID,
            };
            AppError::BadRequest(message.into())
        })
    }

    /// Extract `name` from a JSON body and return it trimmed. Missing, non-string
    /// and whitespace-only values are rejected.
    pub fn brand_name(body: &Value) -> Result<String, AppError> {
        body.get("name")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .ok_or_else(|| AppError::BadRequest(INVALID_NAME.into()))
    }
}

fn leading_integer(raw: &str) -> Option<i32> {
    let s = raw.trim_start();
    let sign = usize::from(s.starts_with(|c: char| c == '+' || c == '-'));
    let digits = s[sign..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    s[..sign + digits].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn name_is_trimmed() {
        let name = RequestValidator::brand_name(&json!({ "name": "  Toyota \n" })).unwrap();
        assert_eq!(name, "Toyota");
    }

    #[test]
    fn rejects_missing_empty_and_non_string_names() {
        for body in [
            json!({}),
            json!({ "name": "" }),
            json!({ "name": "   " }),
            json!({ "name": 42 }),
            json!({ "name": null }),
            json!(["name"]),
            json!("Toyota"),
        ] {
            let err = RequestValidator::brand_name(&body).unwrap_err();
            assert_eq!(err.to_string(), INVALID_NAME, "body: {body}");
        }
    }

    #[test]
    fn ids_use_the_leading_integer() {
        let cases = [
            ("17", 17),
            ("-3", -3),
            ("+4", 4),
            (" 1", 1),
            ("12abc", 12),
            ("1.5", 1),
            ("1.0", 1),
            ("007", 7),
        ];
        for (raw, expected) in cases {
            assert_eq!(RequestValidator::id(raw, IdSource::Path).unwrap(), expected, "raw: {raw:?}");
        }
    }

    #[test]
    fn ids_without_a_usable_integer_are_rejected() {
        for raw in ["abc", "", "   ", "-", "+x", ".5", "a1", "99999999999"] {
            assert!(RequestValidator::id(raw, IdSource::Path).is_err(), "raw: {raw:?}");
        }
    }

    #[test]
    fn message_depends_on_source() {
        let path = RequestValidator::id("x", IdSource::Path).unwrap_err();
        let query = RequestValidator::id("x", IdSource::Query).unwrap_err();
        assert_eq!(path.to_string(), INVALID_PATH_ID);
        assert_eq!(query.to_string(), INVALID_QUERY_ID);
    }
}
