use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;

/// A single column value. The service checks it against the column type
/// defined in the project, so nothing is validated locally.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LogValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Timestamp(DateTime<Utc>),
    Json(Value),
}

impl From<bool> for LogValue {
    fn from(value: bool) -> Self {
        LogValue::Bool(value)
    }
}

macro_rules! integer_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for LogValue {
                fn from(value: $t) -> Self {
                    LogValue::Integer(i64::from(value))
                }
            }
        )*
    };
}

integer_value!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for LogValue {
    fn from(value: f32) -> Self {
        LogValue::Float(f64::from(value))
    }
}

impl From<f64> for LogValue {
    fn from(value: f64) -> Self {
        LogValue::Float(value)
    }
}

impl From<&str> for LogValue {
    fn from(value: &str) -> Self {
        LogValue::Text(value.to_string())
    }
}

impl From<String> for LogValue {
    fn from(value: String) -> Self {
        LogValue::Text(value)
    }
}

impl From<DateTime<Utc>> for LogValue {
    fn from(value: DateTime<Utc>) -> Self {
        LogValue::Timestamp(value)
    }
}

// Dates travel as ISO 8601 text, same as the service's date columns expect
impl From<NaiveDate> for LogValue {
    fn from(value: NaiveDate) -> Self {
        LogValue::Text(value.format("%Y-%m-%d").to_string())
    }
}

impl From<Value> for LogValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => LogValue::Null,
            other => LogValue::Json(other),
        }
    }
}

impl<T: Into<LogValue>> From<Option<T>> for LogValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(LogValue::Null)
    }
}

/// One named column of a row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogItem {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Value")]
    pub value: LogValue,
}

impl LogItem {
    pub fn new(name: impl Into<String>, value: impl Into<LogValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One record. Items keep their insertion order on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LogRow(Vec<LogItem>);

impl LogRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<LogValue>) -> Self {
        self.push(LogItem::new(name, value));
        self
    }

    pub fn push(&mut self, item: LogItem) {
        self.0.push(item);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn items(&self) -> &[LogItem] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogItem> {
        self.0.iter()
    }
}

impl From<Vec<LogItem>> for LogRow {
    fn from(items: Vec<LogItem>) -> Self {
        Self(items)
    }
}

impl FromIterator<LogItem> for LogRow {
    fn from_iter<I: IntoIterator<Item = LogItem>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for LogRow {
    type Item = LogItem;
    type IntoIter = std::vec::IntoIter<LogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a LogRow {
    type Item = &'a LogItem;
    type IntoIter = std::slice::Iter<'a, LogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
