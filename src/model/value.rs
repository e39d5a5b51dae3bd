//! Property value type matching Neo4j's property type system.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A value that can be stored as a property.
///
/// Covers the property-storable part of the Neo4j type system:
/// - Scalars: Bool, Int, Float, String, Bytes
/// - Arrays: List
/// - Temporal: Date, DateTime, LocalDateTime
/// - Spatial: Point2D
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),

    // Temporal types
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    LocalDateTime(NaiveDateTime),

    // Spatial types
    Point2D { srid: i32, x: f64, y: f64 },
}

// ============================================================================
// Text encoding
// ============================================================================

impl Value {
    /// Text encoding used by immutable snapshots.
    ///
    /// Strings come out verbatim (unlike `Display`, which quotes them) and
    /// arrays as `[a, b, c]`. Floats always keep a fractional part, so
    /// `Float(2.0)` and `Int(2)` encode differently.
    pub fn to_text(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Float(v) => format!("{v:?}"),
            Value::List(l) => {
                let items: Vec<String> = l.iter().map(Value::to_text).collect();
                format!("[{}]", items.join(", "))
            }
            Value::Bytes(b) => {
                let items: Vec<String> = b.iter().map(u8::to_string).collect();
                format!("[{}]", items.join(", "))
            }
            other => other.to_string(),
        }
    }
}

// ============================================================================
// Conversions (From impls)
// ============================================================================

impl From<bool> for Value { fn from(v: bool) -> Self { Value::Bool(v) } }
impl From<i32> for Value { fn from(v: i32) -> Self { Value::Int(v as i64) } }
impl From<i64> for Value { fn from(v: i64) -> Self { Value::Int(v) } }
impl From<f64> for Value { fn from(v: f64) -> Self { Value::Float(v) } }
impl From<String> for Value { fn from(v: String) -> Self { Value::String(v) } }
impl From<&str> for Value { fn from(v: &str) -> Self { Value::String(v.to_owned()) } }
impl From<NaiveDate> for Value { fn from(v: NaiveDate) -> Self { Value::Date(v) } }
impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self { Value::List(v.into_iter().map(Into::into).collect()) }
}
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self { v.map(Into::into).unwrap_or(Value::Null) }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::String(s) => write!(f, "\"{}\"", s.replace('"', "\\\"")),
            Value::Bytes(b) => write!(f, "<bytes[{}]>", b.len()),
            Value::List(l) => {
                write!(f, "[")?;
                for (i, v) in l.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
            Value::Date(d) => write!(f, "{d}"),
            Value::DateTime(dt) => write!(f, "{dt}"),
            Value::LocalDateTime(dt) => write!(f, "{dt}"),
            Value::Point2D { x, y, srid } => write!(f, "point({{srid: {srid}, x: {x}, y: {y}}})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_from() {
        assert_eq!(Value::from("hello"), Value::String("hello".into()));
        assert_eq!(Value::from(42), Value::Int(42));
        assert_eq!(Value::from(3.5), Value::Float(3.5));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(None::<i64>), Value::Null);
    }

    #[test]
    fn test_to_text_scalars() {
        assert_eq!(Value::from("Michal").to_text(), "Michal");
        assert_eq!(Value::from(2013).to_text(), "2013");
        assert_eq!(Value::from(false).to_text(), "false");
        assert_eq!(Value::from(2.5).to_text(), "2.5");
        assert_eq!(Value::Null.to_text(), "null");
    }

    #[test]
    fn test_to_text_arrays() {
        assert_eq!(Value::from(vec!["a", "b"]).to_text(), "[a, b]");
        assert_eq!(Value::from(vec![1, 2, 3]).to_text(), "[1, 2, 3]");
        assert_eq!(Value::Bytes(vec![7, 8]).to_text(), "[7, 8]");
        assert_eq!(Value::List(Vec::new()).to_text(), "[]");
    }

    #[test]
    fn test_to_text_float_keeps_fraction() {
        assert_eq!(Value::from(2.0).to_text(), "2.0");
        assert_ne!(Value::from(2.0).to_text(), Value::from(2).to_text());
        assert_eq!(Value::from(vec![1.0, 0.5]).to_text(), "[1.0, 0.5]");
    }

    #[test]
    fn test_to_text_null_inside_list() {
        let list = Value::List(vec![Value::from("a"), Value::Null, Value::from(3)]);
        assert_eq!(list.to_text(), "[a, null, 3]");
        assert_eq!(Value::from(vec![None, Some(1)]).to_text(), "[null, 1]");
    }

    #[test]
    fn test_to_text_temporal() {
        let date = NaiveDate::from_ymd_opt(2013, 5, 1).unwrap();
        let local = date.and_hms_opt(9, 30, 0).unwrap();
        let utc = local.and_utc();

        assert_eq!(Value::from(date).to_text(), "2013-05-01");
        assert_eq!(Value::LocalDateTime(local).to_text(), "2013-05-01 09:30:00");
        assert_eq!(Value::DateTime(utc).to_text(), "2013-05-01 09:30:00 UTC");
    }

    #[test]
    fn test_to_text_point() {
        let point = Value::Point2D { srid: 7203, x: 1.5, y: -0.25 };
        assert_eq!(point.to_text(), "point({srid: 7203, x: 1.5, y: -0.25})");
    }

    #[test]
    fn test_display_quotes_strings() {
        assert_eq!(Value::from("x").to_string(), "\"x\"");
    }
}
