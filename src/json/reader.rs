//! Purpose: Token-level JSON reader used by the record decoder.
//! Exports: `JsonReader`, `JsonKind`.
//! Role: Pull-style cursor over a parsed document (object/array scopes, names, scalars).
//! Invariants: Every value is consumed exactly once (read or skipped).
//! Invariants: Out-of-order calls fail with `ErrorKind::Client`; nothing panics.
#![allow(clippy::result_large_err)]

use super::parse;
use crate::core::error::{Error, ErrorKind};
use serde_json::Value;
use std::fmt;
use std::iter::Peekable;

type ReadResult<T> = Result<T, Error>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub(crate) fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        };
        f.write_str(label)
    }
}

enum Frame {
    Object(Peekable<serde_json::map::IntoIter>),
    Array(Peekable<std::vec::IntoIter<Value>>),
}

pub struct JsonReader {
    current: Option<Value>,
    stack: Vec<Frame>,
}

impl JsonReader {
    pub fn new(value: Value) -> Self {
        Self {
            current: Some(value),
            stack: Vec::new(),
        }
    }

    /// Parses `input` through the crate parse boundary.
    pub fn from_slice(input: &[u8]) -> ReadResult<Self> {
        if parse::exceeds_depth(input, parse::MAX_DEPTH) {
            return Err(Error::new(ErrorKind::Client)
                .with_message(format!(
                    "json document nests deeper than {}",
                    parse::MAX_DEPTH
                ))
                .with_hint(parse::hint_for_category(
                    parse::ParseFailureCategory::DepthLimit,
                    "json.reader",
                )));
        }
        let value: Value = parse::from_slice(input).map_err(|err| {
            let hint = parse::hint_for_error(&err, "json.reader");
            Error::new(ErrorKind::Client)
                .with_message("invalid json document")
                .with_hint(hint)
                .with_source(err)
        })?;
        Ok(Self::new(value))
    }

    /// Kind of the next value without consuming it.
    pub fn peek(&mut self) -> ReadResult<JsonKind> {
        self.load();
        match &self.current {
            Some(value) => Ok(JsonKind::of(value)),
            None => Err(misuse("no value available to peek")),
        }
    }

    pub fn is_container(&mut self) -> ReadResult<bool> {
        Ok(matches!(self.peek()?, JsonKind::Object | JsonKind::Array))
    }

    pub fn begin_object(&mut self) -> ReadResult<()> {
        match self.take()? {
            Value::Object(map) => {
                self.stack.push(Frame::Object(map.into_iter().peekable()));
                Ok(())
            }
            other => Err(mismatch(JsonKind::Object, &other)),
        }
    }

    pub fn end_object(&mut self) -> ReadResult<()> {
        if self.current.is_some() {
            return Err(misuse("end_object before the last value was consumed"));
        }
        let exhausted = match self.stack.last_mut() {
            Some(Frame::Object(entries)) => entries.peek().is_none(),
            _ => return Err(misuse("end_object outside an object")),
        };
        if !exhausted {
            return Err(misuse("end_object with unread entries"));
        }
        self.stack.pop();
        Ok(())
    }

    pub fn begin_array(&mut self) -> ReadResult<()> {
        match self.take()? {
            Value::Array(items) => {
                self.stack.push(Frame::Array(items.into_iter().peekable()));
                Ok(())
            }
            other => Err(mismatch(JsonKind::Array, &other)),
        }
    }

    pub fn end_array(&mut self) -> ReadResult<()> {
        if self.current.is_some() {
            return Err(misuse("end_array before the last element was consumed"));
        }
        let exhausted = match self.stack.last_mut() {
            Some(Frame::Array(items)) => items.peek().is_none(),
            _ => return Err(misuse("end_array outside an array")),
        };
        if !exhausted {
            return Err(misuse("end_array with unread elements"));
        }
        self.stack.pop();
        Ok(())
    }

    /// Whether the innermost object or array has more entries.
    pub fn has_next(&mut self) -> ReadResult<bool> {
        match self.stack.last_mut() {
            Some(Frame::Object(entries)) => {
                if self.current.is_some() {
                    return Err(misuse("value for the previous name was not consumed"));
                }
                Ok(entries.peek().is_some())
            }
            Some(Frame::Array(items)) => Ok(self.current.is_some() || items.peek().is_some()),
            None => Err(misuse("has_next outside an object or array")),
        }
    }

    pub fn next_name(&mut self) -> ReadResult<String> {
        if self.current.is_some() {
            return Err(misuse("value for the previous name was not consumed"));
        }
        match self.stack.last_mut() {
            Some(Frame::Object(entries)) => match entries.next() {
                Some((name, value)) => {
                    self.current = Some(value);
                    Ok(name)
                }
                None => Err(misuse("next_name past the end of an object")),
            },
            _ => Err(misuse("next_name outside an object")),
        }
    }

    pub fn skip_value(&mut self) -> ReadResult<()> {
        self.take().map(drop)
    }

    pub fn next_null(&mut self) -> ReadResult<()> {
        match self.take()? {
            Value::Null => Ok(()),
            other => Err(mismatch(JsonKind::Null, &other)),
        }
    }

    pub fn next_string(&mut self) -> ReadResult<String> {
        match self.take()? {
            Value::String(text) => Ok(text),
            other => Err(mismatch(JsonKind::String, &other)),
        }
    }

    pub fn next_bool(&mut self) -> ReadResult<bool> {
        match self.take()? {
            Value::Bool(flag) => Ok(flag),
            other => Err(mismatch(JsonKind::Bool, &other)),
        }
    }

    pub fn next_i64(&mut self) -> ReadResult<i64> {
        match self.take()? {
            Value::Number(number) => number.as_i64().ok_or_else(|| {
                Error::new(ErrorKind::Client)
                    .with_message(format!("number {number} is not a 64-bit integer"))
            }),
            other => Err(mismatch(JsonKind::Number, &other)),
        }
    }

    pub fn next_f64(&mut self) -> ReadResult<f64> {
        match self.take()? {
            Value::Number(number) => number.as_f64().ok_or_else(|| {
                Error::new(ErrorKind::Client)
                    .with_message(format!("number {number} is not representable as f64"))
            }),
            other => Err(mismatch(JsonKind::Number, &other)),
        }
    }

    /// Takes the next value whole; used for scalars whose decoding is lenient.
    pub fn next_value(&mut self) -> ReadResult<Value> {
        self.take()
    }

    fn load(&mut self) {
        if self.current.is_some() {
            return;
        }
        if let Some(Frame::Array(items)) = self.stack.last_mut() {
            self.current = items.next();
        }
    }

    fn take(&mut self) -> ReadResult<Value> {
        self.load();
        self.current.take().ok_or_else(|| match self.stack.last() {
            Some(Frame::Object(_)) => misuse("value read before next_name"),
            Some(Frame::Array(_)) => misuse("value read past the end of an array"),
            None => misuse("document already consumed"),
        })
    }
}

fn misuse(message: &str) -> Error {
    Error::new(ErrorKind::Client).with_message(format!("json reader misuse: {message}"))
}

fn mismatch(expected: JsonKind, found: &Value) -> Error {
    Error::new(ErrorKind::Client).with_message(format!(
        "expected {expected}, found {}",
        JsonKind::of(found)
    ))
}

#[cfg(test)]
mod tests {
    use super::{JsonKind, JsonReader};
    use serde_json::json;

    #[test]
    fn walks_object_and_array() {
        let mut reader = JsonReader::new(json!({"Name": "Q1", "Ids": [1, 2]}));
        reader.begin_object().unwrap();
        let mut seen = Vec::new();
        while reader.has_next().unwrap() {
            let name = reader.next_name().unwrap();
            match name.as_str() {
                "Name" => seen.push(reader.next_string().unwrap()),
                "Ids" => {
                    reader.begin_array().unwrap();
                    while reader.has_next().unwrap() {
                        seen.push(reader.next_i64().unwrap().to_string());
                    }
                    reader.end_array().unwrap();
                }
                _ => reader.skip_value().unwrap(),
            }
        }
        reader.end_object().unwrap();
        seen.sort();
        assert_eq!(seen, vec!["1", "2", "Q1"]);
    }

    #[test]
    fn peek_does_not_consume() {
        let mut reader = JsonReader::new(json!(42));
        assert_eq!(reader.peek().unwrap(), JsonKind::Number);
        assert!(!reader.is_container().unwrap());
        assert_eq!(reader.next_i64().unwrap(), 42);
        assert!(reader.peek().is_err());
    }

    #[test]
    fn kind_mismatch_is_an_error() {
        let mut reader = JsonReader::new(json!("text"));
        let err = reader.begin_object().expect_err("err");
        assert_eq!(err.message(), Some("expected object, found string"));
    }

    #[test]
    fn unconsumed_value_blocks_next_name() {
        let mut reader = JsonReader::new(json!({"A": 1, "B": 2}));
        reader.begin_object().unwrap();
        reader.next_name().unwrap();
        assert!(reader.next_name().is_err());
    }

    #[test]
    fn malformed_bytes_carry_parse_hint() {
        let err = JsonReader::from_slice(br#"{"A":"#).err().expect("err");
        let hint = err.hint().expect("hint");
        assert!(hint.contains("context: json.reader"));
    }
}
