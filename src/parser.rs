//! Chord JSON parser — converts an untyped chord description into a `ChordDescription`.
//!
//! Accepted shape:
//!
//! ```json
//! {
//!   "title": "C",
//!   "statusPerString": ["closed", "open", null, "open", null, "closed"],
//!   "marks": [
//!     {"fret": 1, "string": 2},
//!     {"fret": 3, "barre": {"from": 1, "to": 6}}
//!   ]
//! }
//! ```
//!
//! `statusString` and `chord` are accepted as older spellings of
//! `statusPerString` and `marks`.

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::model::*;
use crate::validate::{check_fret, check_string, ChordConfig};

/// Parse a JSON chord description string.
pub fn parse_chord_json(json: &str, config: &ChordConfig) -> crate::error::Result<ChordDescription> {
    let value: Value = serde_json::from_str(json)?;
    Ok(parse_chord_value(&value, config)?)
}

/// Convert an already-decoded JSON value into a `ChordDescription`.
///
/// Field checks (number, integer, string range) happen here because they
/// decide which mark shape an object belongs to.
pub fn parse_chord_value(value: &Value, config: &ChordConfig) -> Result<ChordDescription, ValidationError> {
    let obj = value.as_object().ok_or(ValidationError::TypeMismatch {
        expected: "object",
        found: json_type(value),
    })?;

    let mut chord = ChordDescription::new();

    if let Some(title) = lookup(obj, "title", None) {
        chord.title = coerce_title(title);
    }

    if let Some(statuses) = lookup(obj, "statusPerString", Some("statusString")) {
        chord.status_per_string = Some(parse_statuses(statuses, config.string_count)?);
    }

    if let Some(marks) = lookup(obj, "marks", Some("chord")) {
        let list = marks.as_array().ok_or(ValidationError::TypeMismatch {
            expected: "array of marks",
            found: json_type(marks),
        })?;
        chord.marks = list
            .iter()
            .enumerate()
            .map(|(index, mark)| parse_mark(index, mark, config.string_count))
            .collect::<Result<_, _>>()?;
    }

    Ok(chord)
}

// ─── Top-level fields ────────────────────────────────────────────────

/// Look up a key (or its older alias). `null` counts as absent.
fn lookup<'a>(obj: &'a Map<String, Value>, key: &str, alias: Option<&str>) -> Option<&'a Value> {
    obj.get(key)
        .or_else(|| alias.and_then(|a| obj.get(a)))
        .filter(|v| !v.is_null())
}

fn coerce_title(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn parse_statuses(value: &Value, string_count: usize) -> Result<Vec<StringStatus>, ValidationError> {
    let list = value.as_array().ok_or_else(|| ValidationError::InvalidStringStatus {
        index: None,
        reason: format!("expected an array, found {}", json_type(value)),
    })?;

    if list.len() != string_count {
        return Err(ValidationError::InvalidStringStatus {
            index: None,
            reason: format!("expected {string_count} entries, found {}", list.len()),
        });
    }

    list.iter()
        .enumerate()
        .map(|(index, entry)| {
            let status = match entry {
                Value::Null => Some(StringStatus::None),
                Value::String(name) => StringStatus::from_name(name),
                _ => None,
            };
            status.ok_or_else(|| ValidationError::InvalidStringStatus {
                index: Some(index),
                reason: format!("unknown status {entry}"),
            })
        })
        .collect()
}

// ─── Marks ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Clamp,
    Barre,
}

/// Shapes are tried in this order; the first one that matches wins.
const SHAPE_PRIORITY: [Shape; 2] = [Shape::Clamp, Shape::Barre];

impl Shape {
    /// `Ok(None)` when a required field is missing, `Err` when all fields are
    /// there but one of them fails its checks.
    fn try_match(
        self,
        index: usize,
        obj: &Map<String, Value>,
        string_count: usize,
    ) -> Result<Option<Mark>, ValidationError> {
        match self {
            Shape::Clamp => {
                let (Some(fret), Some(string)) = (obj.get("fret"), obj.get("string")) else {
                    return Ok(None);
                };
                let fret = integer_field(index, "fret", fret)?;
                check_fret(index, fret)?;
                let string = integer_field(index, "string", string)?;
                check_string(index, "string", string, string_count)?;
                Ok(Some(Mark::Clamp { fret, string }))
            }
            Shape::Barre => {
                let (Some(fret), Some(Value::Object(span))) = (obj.get("fret"), obj.get("barre")) else {
                    return Ok(None);
                };
                let (Some(from), Some(to)) = (span.get("from"), span.get("to")) else {
                    return Ok(None);
                };
                let fret = integer_field(index, "fret", fret)?;
                check_fret(index, fret)?;
                let from = integer_field(index, "barre.from", from)?;
                check_string(index, "barre.from", from, string_count)?;
                let to = integer_field(index, "barre.to", to)?;
                check_string(index, "barre.to", to, string_count)?;
                Ok(Some(Mark::Barre { fret, from, to }))
            }
        }
    }
}

fn parse_mark(index: usize, value: &Value, string_count: usize) -> Result<Mark, ValidationError> {
    let Some(obj) = value.as_object() else {
        return Err(ValidationError::UnknownMarkShape { index });
    };

    let mut matched: Option<Mark> = None;
    let mut first_failure: Option<ValidationError> = None;

    for shape in SHAPE_PRIORITY {
        match shape.try_match(index, obj, string_count) {
            Ok(Some(mark)) => match matched {
                None => matched = Some(mark),
                Some(kept) => log::warn!(
                    "mark {index} also matches the {:?} shape; keeping {}",
                    shape,
                    kept.shape()
                ),
            },
            Ok(None) => {}
            Err(err) => {
                first_failure.get_or_insert(err);
            }
        }
    }

    match (matched, first_failure) {
        (Some(mark), _) => {
            log::debug!("mark {index} parsed as {}", mark.shape());
            Ok(mark)
        }
        (None, Some(err)) => Err(err),
        (None, None) => Err(ValidationError::UnknownMarkShape { index }),
    }
}

/// Read a numeric field that must hold a whole number.
fn integer_field(index: usize, field: &'static str, value: &Value) -> Result<i64, ValidationError> {
    let invalid = |reason: String| ValidationError::InvalidFieldValue { index, field, reason };

    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    if let Some(n) = value.as_u64() {
        return Err(invalid(format!("{n} is out of range")));
    }

    let n = value
        .as_f64()
        .ok_or_else(|| invalid(format!("expected a number, found {}", json_type(value))))?;

    if !is_number(n) {
        return Err(invalid(format!("{n} is not a finite number")));
    }
    if !is_integer(n) {
        return Err(invalid(format!("{n} is not an integer")));
    }
    // `i64::MAX as f64` rounds up to 2^63, which no i64 can hold.
    if n < i64::MIN as f64 || n >= i64::MAX as f64 {
        return Err(invalid(format!("{n} is out of range")));
    }
    Ok(n as i64)
}

pub(crate) fn is_number(n: f64) -> bool {
    n.is_finite()
}

pub(crate) fn is_integer(n: f64) -> bool {
    n.floor() == n
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
