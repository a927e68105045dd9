//! Declarative request validation
//!
//! Each request type declares a table of [`FieldRule`]s. The table is
//! evaluated against the raw JSON body or query map before any typed
//! deserialization happens, so a handler only ever sees input that passed
//! every rule.

use serde::Serialize;
use serde_json::{Map, Number, Value};
use utoipa::ToSchema;

/// Where a field was read from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Query,
    Body,
}

/// A single constraint on a field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Present and not null. Fields without it are optional.
    Required,
    /// JSON string
    String,
    /// JSON integer, a float with no fractional part, or a string holding a
    /// base-10 `i64`; floats and strings are coerced
    Integer,
    /// Integer value greater than or equal to the bound
    Min(i64),
    /// String with at least this many characters
    MinLength(usize),
}

/// Rules applied, in order, to one field
#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub field: &'static str,
    pub rules: &'static [Rule],
}

/// One rejected field, as returned to the caller
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct Violation {
    #[schema(example = "id")]
    pub field: String,
    pub location: Location,
    #[schema(example = "doit être un entier supérieur ou égal à 1")]
    pub message: String,
}

impl Violation {
    pub fn new(location: Location, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            location,
            message: message.into(),
        }
    }
}

impl Rule {
    /// Check `value` against this rule, returning the (possibly coerced)
    /// value or the violation message.
    fn apply(&self, value: Value) -> Result<Value, String> {
        match self {
            Rule::Required => Ok(value),
            Rule::String => match value {
                Value::String(_) => Ok(value),
                _ => Err("doit être une chaîne de caractères".to_string()),
            },
            Rule::Integer => {
                if value.as_i64().is_some() {
                    return Ok(value);
                }
                if let Some(whole) = value.as_f64().and_then(whole_number) {
                    return Ok(Value::Number(Number::from(whole)));
                }
                match value.as_str().map(|text| text.trim().parse::<i64>()) {
                    Some(Ok(parsed)) => Ok(Value::Number(Number::from(parsed))),
                    _ => Err("doit être un entier".to_string()),
                }
            }
            Rule::Min(min) => match value.as_i64() {
                Some(number) if number >= *min => Ok(value),
                Some(_) => Err(format!("doit être supérieur ou égal à {min}")),
                None => Err("doit être un entier".to_string()),
            },
            Rule::MinLength(min) => {
                let length = value.as_str().map(|text| text.chars().count());
                match length {
                    Some(length) if length >= *min => Ok(value),
                    Some(_) if *min == 1 => Err("ne doit pas être vide".to_string()),
                    Some(_) => Err(format!("doit contenir au moins {min} caractères")),
                    None => Err("doit être une chaîne de caractères".to_string()),
                }
            }
        }
    }
}

fn whole_number(number: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is out of range
    let in_range = number >= i64::MIN as f64 && number < i64::MAX as f64;
    (number.fract() == 0.0 && in_range).then_some(number as i64)
}

/// Evaluate `rules` against `input`.
///
/// Every field is checked; a field stops at its first failing rule. On
/// success the returned object carries coerced values and can be
/// deserialized into the typed request.
pub fn validate(
    location: Location,
    input: Value,
    rules: &[FieldRule],
) -> Result<Value, Vec<Violation>> {
    let mut object = match input {
        Value::Object(object) => object,
        Value::Null => Map::new(),
        _ => {
            return Err(vec![Violation::new(
                location,
                "body",
                "doit être un objet JSON",
            )]);
        }
    };

    let mut violations = Vec::new();

    for field_rule in rules {
        let value = match object.remove(field_rule.field) {
            Some(Value::Null) | None => {
                if field_rule.rules.contains(&Rule::Required) {
                    violations.push(Violation::new(location, field_rule.field, "est requis"));
                }
                continue;
            }
            Some(value) => value,
        };

        let checked = field_rule
            .rules
            .iter()
            .try_fold(value, |value, rule| rule.apply(value));

        match checked {
            Ok(value) => {
                object.insert(field_rule.field.to_string(), value);
            }
            Err(message) => violations.push(Violation::new(location, field_rule.field, message)),
        }
    }

    if violations.is_empty() {
        Ok(Value::Object(object))
    } else {
        Err(violations)
    }
}

/// Escape HTML special characters so the value is inert in any markup
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '/' => escaped.push_str("&#x2F;"),
            _ => escaped.push(c),
        }
    }

    escaped
}
