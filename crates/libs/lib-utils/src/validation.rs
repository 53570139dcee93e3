//! # Schema Validation
//!
//! A small declarative rule evaluator for raw JSON input records.
//!
//! A [`Schema`] lists the fields a request may carry and the rules each one
//! must satisfy. Validation evaluates every field before returning, so the
//! caller sees all violations at once, and produces a normalized record:
//! configured fields trimmed, scalar values coerced to strings, unknown
//! fields dropped. Unknown input never reaches persistence and is never
//! echoed back.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Mapping from field name to a human-readable violation message.
///
/// Ordered so error payloads are deterministic.
pub type FieldErrors = BTreeMap<String, String>;

/// A single validation rule with its user-facing message.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Field must be present as a non-empty string (after trimming).
    Required(&'static str),
    /// String length must be at least the given number of characters.
    MinLength(usize, &'static str),
    /// Value must equal another field's value exactly (confirmation fields).
    EqualsField(&'static str, &'static str),
}

#[derive(Debug)]
struct Field {
    name: &'static str,
    trim: bool,
    rules: Vec<Rule>,
}

/// A declarative input schema: an ordered list of fields and their rules.
#[derive(Debug, Default)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field whose string value is trimmed before any checks.
    pub fn field(mut self, name: &'static str, rules: Vec<Rule>) -> Self {
        self.fields.push(Field { name, trim: true, rules });
        self
    }

    /// Declare a field taken verbatim (passwords keep their whitespace).
    pub fn field_untrimmed(mut self, name: &'static str, rules: Vec<Rule>) -> Self {
        self.fields.push(Field { name, trim: false, rules });
        self
    }

    /// Validate a raw input record against this schema.
    ///
    /// Returns the normalized record, or a non-empty error mapping with one
    /// message per violated field (the first violated rule wins). A non-object
    /// input simply has every field absent.
    pub fn validate(&self, input: &Value) -> Result<Map<String, Value>, FieldErrors> {
        let object = input.as_object();
        let mut normalized = Map::new();
        let mut errors = FieldErrors::new();

        for field in &self.fields {
            let value = normalize(object.and_then(|o| o.get(field.name)), field.trim);

            if let Some(message) = self.first_violation(field, &value, object) {
                errors.insert(field.name.to_string(), message.to_string());
            } else if let Some(value) = value {
                normalized.insert(field.name.to_string(), value);
            }
        }

        if errors.is_empty() {
            Ok(normalized)
        } else {
            Err(errors)
        }
    }

    fn first_violation(
        &self,
        field: &Field,
        value: &Option<Value>,
        object: Option<&Map<String, Value>>,
    ) -> Option<&'static str> {
        for rule in &field.rules {
            match rule {
                Rule::Required(message) => match value {
                    Some(Value::String(s)) if !s.is_empty() => {}
                    _ => return Some(message),
                },
                Rule::MinLength(min, message) => {
                    if let Some(Value::String(s)) = value {
                        if s.chars().count() < *min {
                            return Some(message);
                        }
                    }
                }
                Rule::EqualsField(other, message) => {
                    let other_trim = self
                        .fields
                        .iter()
                        .find(|f| f.name == *other)
                        .map_or(false, |f| f.trim);
                    let other_value = normalize(object.and_then(|o| o.get(*other)), other_trim);
                    if *value != other_value {
                        return Some(message);
                    }
                }
            }
        }
        None
    }
}

/// Normalize a raw value: trim strings where configured, stringify scalars
/// the way a form submission would, treat `null` as absent.
fn normalize(raw: Option<&Value>, trim: bool) -> Option<Value> {
    match raw {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => {
            let s = if trim { s.trim() } else { s.as_str() };
            Some(Value::String(s.to_string()))
        }
        Some(Value::Number(n)) => Some(Value::String(n.to_string())),
        Some(Value::Bool(b)) => Some(Value::String(b.to_string())),
        Some(other) => Some(other.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_schema() -> Schema {
        Schema::new()
            .field("fullname", vec![Rule::Required("Full name is required")])
            .field(
                "username",
                vec![
                    Rule::Required("Username is required"),
                    Rule::MinLength(3, "Username must be at least 3 characters"),
                ],
            )
            .field_untrimmed(
                "password",
                vec![
                    Rule::Required("Password is required"),
                    Rule::MinLength(6, "Password must be at least 6 characters"),
                ],
            )
    }

    #[test]
    fn test_all_violations_reported_at_once() {
        let errors = sample_schema()
            .validate(&json!({}))
            .expect_err("empty input should fail validation");

        assert_eq!(errors.len(), 3);
        assert_eq!(errors["fullname"], "Full name is required");
        assert_eq!(errors["username"], "Username is required");
        assert_eq!(errors["password"], "Password is required");
    }

    #[test]
    fn test_first_violated_rule_wins_per_field() {
        let errors = sample_schema()
            .validate(&json!({"fullname": "Ann Lee", "username": "ab", "password": "short"}))
            .expect_err("short values should fail validation");

        assert_eq!(errors["username"], "Username must be at least 3 characters");
        assert_eq!(errors["password"], "Password must be at least 6 characters");
    }

    #[test]
    fn test_trims_before_length_checks() {
        // "  ab  " trims to "ab": too short even though the raw string is not.
        let errors = sample_schema()
            .validate(&json!({"fullname": "Ann Lee", "username": "  ab  ", "password": "secret1"}))
            .expect_err("trimmed username should be too short");
        assert_eq!(errors["username"], "Username must be at least 3 characters");

        let normalized = sample_schema()
            .validate(&json!({"fullname": "  Ann Lee  ", "username": " annlee ", "password": "secret1"}))
            .expect("trimmed input should validate");
        assert_eq!(normalized["fullname"], "Ann Lee");
        assert_eq!(normalized["username"], "annlee");
    }

    #[test]
    fn test_password_is_not_trimmed() {
        let normalized = sample_schema()
            .validate(&json!({"fullname": "Ann Lee", "username": "annlee", "password": " secret "}))
            .expect("padded password should validate");
        assert_eq!(normalized["password"], " secret ");
    }

    #[test]
    fn test_unknown_fields_are_dropped() {
        let normalized = sample_schema()
            .validate(&json!({
                "fullname": "Ann Lee",
                "username": "annlee",
                "password": "secret1",
                "role": "admin"
            }))
            .expect("valid input should validate");

        assert!(normalized.get("role").is_none());
        assert_eq!(normalized.len(), 3);
    }

    #[test]
    fn test_whitespace_only_required_field_is_missing() {
        let errors = sample_schema()
            .validate(&json!({"fullname": "   ", "username": "annlee", "password": "secret1"}))
            .expect_err("blank fullname should fail validation");
        assert_eq!(errors["fullname"], "Full name is required");
    }

    #[test]
    fn test_confirmation_field_equality() {
        let schema = Schema::new()
            .field_untrimmed("password", vec![Rule::Required("Password is required")])
            .field_untrimmed(
                "confirm_password",
                vec![Rule::EqualsField("password", "Passwords do not match")],
            );

        let errors = schema
            .validate(&json!({"password": "secret1", "confirm_password": "secret2"}))
            .expect_err("mismatched confirmation should fail validation");
        assert_eq!(errors["confirm_password"], "Passwords do not match");

        let normalized = schema
            .validate(&json!({"password": "secret1", "confirm_password": "secret1"}))
            .expect("matching confirmation should validate");
        assert_eq!(normalized["confirm_password"], "secret1");
    }

    #[test]
    fn test_non_object_input_reports_every_required_field() {
        let errors = sample_schema()
            .validate(&json!("not an object"))
            .expect_err("non-object input should fail validation");
        assert_eq!(errors.len(), 3);
    }
}
