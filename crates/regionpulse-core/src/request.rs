//! Telemetry request contract and body validation.
//!
//! The body is parsed into a loose `serde_json::Value` first and then checked
//! field by field, so a rejection can name every failing field instead of
//! stopping at the first serde error. Strings are never coerced: `"250"` is
//! not an integer and `[1, 2]` is not a list of region names. A number counts
//! as an integer when it has no fractional part, so `250.0` is accepted.

use std::fmt;

use serde::Serialize;
use serde_json::{Number, Value};

/// Validated request body for `POST /api`.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryRequest {
    /// Region identifiers in request order; may be empty, may repeat.
    pub regions: Vec<String>,
    /// Latency breach threshold in milliseconds. Always integer-valued; held
    /// as `f64` so integers beyond `i64` compare like any other.
    pub threshold_ms: f64,
}

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub reason: String,
}

impl FieldError {
    fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Every field check that failed for one body, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// A rejection naming one field.
    pub fn single(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self(vec![FieldError::new(field, reason)])
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `field` is among the failures.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    fn push(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.0.push(FieldError::new(field, reason));
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", e.field, e.reason)?;
        }
        Ok(())
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Integer-valued JSON number as `f64`: any `i64`/`u64`, or a finite float
/// with no fractional part (`250.0`, or integers too wide for `u64`).
fn integral_value(n: &Number) -> Option<f64> {
    if let Some(i) = n.as_i64() {
        return Some(i as f64);
    }
    if let Some(u) = n.as_u64() {
        return Some(u as f64);
    }
    n.as_f64().filter(|f| f.is_finite() && f.fract() == 0.0)
}

impl TelemetryRequest {
    /// Validate a decoded JSON body. Unknown fields are ignored.
    pub fn from_value(body: &Value) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let Some(obj) = body.as_object() else {
            errors.push(
                "body",
                format!("expected a JSON object, got {}", json_kind(body)),
            );
            return Err(errors);
        };

        let regions = match obj.get("regions") {
            None => {
                errors.push("regions", "field required");
                None
            }
            Some(Value::Array(items)) => {
                let mut out = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    match item {
                        Value::String(s) => out.push(s.clone()),
                        other => errors.push(
                            format!("regions[{i}]"),
                            format!("expected a string, got {}", json_kind(other)),
                        ),
                    }
                }
                Some(out)
            }
            Some(other) => {
                errors.push(
                    "regions",
                    format!("expected a list of strings, got {}", json_kind(other)),
                );
                None
            }
        };

        let threshold_ms = match obj.get("threshold_ms") {
            None => {
                errors.push("threshold_ms", "field required");
                None
            }
            Some(Value::Number(n)) => {
                let v = integral_value(n);
                if v.is_none() {
                    errors.push("threshold_ms", "expected an integer, got number");
                }
                v
            }
            Some(other) => {
                errors.push(
                    "threshold_ms",
                    format!("expected an integer, got {}", json_kind(other)),
                );
                None
            }
        };

        match (regions, threshold_ms) {
            (Some(regions), Some(threshold_ms)) if errors.is_empty() => Ok(Self {
                regions,
                threshold_ms,
            }),
            _ => Err(errors),
        }
    }
}
