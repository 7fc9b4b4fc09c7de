//! Purpose: Built-in codecs for scalars, timestamps, and the generic containers.
//! Role: Leaf layer under the record engine; records compose these through their field tables.
//! Invariants: `null` decodes to absent for every type.
//! Invariants: Numbers and booleans accept their string forms; strings accept scalar text.
//! Invariants: Timestamps are epoch seconds on the wire, fractional only when needed.
//! Invariants: Timestamp wire precision is milliseconds; finer digits are truncated.
#![allow(clippy::result_large_err)]

use super::{CodecResult, Decode, Describe, Encode, Shape};
use crate::core::error::{Error, ErrorKind};
use crate::json::{JsonKind, JsonReader, JsonWriter};
use serde_json::Value;
use std::collections::BTreeMap;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

fn decode_scalar<T>(
    reader: &mut JsonReader,
    expected: &str,
    convert: impl FnOnce(&Value) -> Option<T>,
) -> CodecResult<Option<T>> {
    let value = reader.next_value()?;
    if value.is_null() {
        return Ok(None);
    }
    match convert(&value) {
        Some(decoded) => Ok(Some(decoded)),
        None => Err(Error::new(ErrorKind::Client).with_message(format!(
            "cannot decode {} as {expected}",
            JsonKind::of(&value)
        ))),
    }
}

impl Encode for String {
    fn encode(&self, writer: &mut JsonWriter<'_>) -> CodecResult<()> {
        writer.string_value(self)
    }

    fn to_param(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl Decode for String {
    fn decode(reader: &mut JsonReader) -> CodecResult<Option<Self>> {
        decode_scalar(reader, "string", |value| match value {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            _ => None,
        })
    }
}

impl Describe for String {
    fn shape() -> Shape {
        Shape::String
    }
}

impl Encode for i32 {
    fn encode(&self, writer: &mut JsonWriter<'_>) -> CodecResult<()> {
        writer.i64_value(i64::from(*self))
    }

    fn to_param(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl Decode for i32 {
    fn decode(reader: &mut JsonReader) -> CodecResult<Option<Self>> {
        decode_scalar(reader, "integer", |value| match value {
            Value::Number(number) => number.as_i64().and_then(|n| i32::try_from(n).ok()),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        })
    }
}

impl Describe for i32 {
    fn shape() -> Shape {
        Shape::Integer
    }
}

impl Encode for i64 {
    fn encode(&self, writer: &mut JsonWriter<'_>) -> CodecResult<()> {
        writer.i64_value(*self)
    }

    fn to_param(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl Decode for i64 {
    fn decode(reader: &mut JsonReader) -> CodecResult<Option<Self>> {
        decode_scalar(reader, "long", |value| match value {
            Value::Number(number) => number.as_i64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        })
    }
}

impl Describe for i64 {
    fn shape() -> Shape {
        Shape::Long
    }
}

impl Encode for bool {
    fn encode(&self, writer: &mut JsonWriter<'_>) -> CodecResult<()> {
        writer.bool_value(*self)
    }

    fn to_param(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl Decode for bool {
    fn decode(reader: &mut JsonReader) -> CodecResult<Option<Self>> {
        decode_scalar(reader, "boolean", |value| match value {
            Value::Bool(flag) => Some(*flag),
            Value::String(text) if text.eq_ignore_ascii_case("true") => Some(true),
            Value::String(text) if text.eq_ignore_ascii_case("false") => Some(false),
            _ => None,
        })
    }
}

impl Describe for bool {
    fn shape() -> Shape {
        Shape::Boolean
    }
}

impl Encode for f64 {
    fn encode(&self, writer: &mut JsonWriter<'_>) -> CodecResult<()> {
        writer.f64_value(*self)
    }

    fn to_param(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl Decode for f64 {
    fn decode(reader: &mut JsonReader) -> CodecResult<Option<Self>> {
        decode_scalar(reader, "double", |value| match value {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        })
    }
}

impl Describe for f64 {
    fn shape() -> Shape {
        Shape::Double
    }
}

fn from_epoch_seconds(seconds: f64) -> Option<OffsetDateTime> {
    if !seconds.is_finite() {
        return None;
    }
    let millis = (seconds * 1000.0).round() as i128;
    OffsetDateTime::from_unix_timestamp_nanos(millis * 1_000_000).ok()
}

impl Encode for OffsetDateTime {
    fn encode(&self, writer: &mut JsonWriter<'_>) -> CodecResult<()> {
        let millis = self.unix_timestamp_nanos() / 1_000_000;
        if millis % 1000 == 0 {
            writer.i64_value((millis / 1000) as i64)
        } else {
            writer.f64_value(millis as f64 / 1000.0)
        }
    }

    fn to_param(&self) -> Option<String> {
        self.format(&Rfc3339).ok()
    }
}

impl Decode for OffsetDateTime {
    fn decode(reader: &mut JsonReader) -> CodecResult<Option<Self>> {
        decode_scalar(reader, "timestamp", |value| match value {
            Value::Number(number) => number.as_f64().and_then(from_epoch_seconds),
            Value::String(text) => OffsetDateTime::parse(text, &Rfc3339).ok().or_else(|| {
                text.trim()
                    .parse::<f64>()
                    .ok()
                    .and_then(from_epoch_seconds)
            }),
            _ => None,
        })
    }
}

impl Describe for OffsetDateTime {
    fn shape() -> Shape {
        Shape::Timestamp
    }
}

impl<T: Encode> Encode for Option<T> {
    fn encode(&self, writer: &mut JsonWriter<'_>) -> CodecResult<()> {
        match self {
            Some(value) => value.encode(writer),
            None => writer.null_value(),
        }
    }

    fn is_absent(&self) -> bool {
        self.is_none()
    }

    fn to_param(&self) -> Option<String> {
        self.as_ref().and_then(Encode::to_param)
    }

    fn to_params(&self) -> Vec<String> {
        self.as_ref().map(Encode::to_params).unwrap_or_default()
    }
}

/// Keeps explicit nulls so `Vec<Option<T>>` can observe them.
impl<T: Decode> Decode for Option<T> {
    fn decode(reader: &mut JsonReader) -> CodecResult<Option<Self>> {
        Ok(Some(T::decode(reader)?))
    }
}

impl<T: Describe> Describe for Option<T> {
    fn shape() -> Shape {
        T::shape()
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, writer: &mut JsonWriter<'_>) -> CodecResult<()> {
        writer.begin_array()?;
        for item in self.iter().filter(|item| !item.is_absent()) {
            item.encode(writer)?;
        }
        writer.end_array()
    }

    fn to_params(&self) -> Vec<String> {
        self.iter().filter_map(Encode::to_param).collect()
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(reader: &mut JsonReader) -> CodecResult<Option<Self>> {
        match reader.peek()? {
            JsonKind::Null => {
                reader.next_null()?;
                return Ok(None);
            }
            JsonKind::Array => {}
            other => {
                return Err(Error::new(ErrorKind::Client)
                    .with_message(format!("cannot decode {other} as list")));
            }
        }
        reader.begin_array()?;
        let mut items = Vec::new();
        while reader.has_next()? {
            if let Some(item) = T::decode(reader)? {
                items.push(item);
            }
        }
        reader.end_array()?;
        Ok(Some(items))
    }
}

impl<T: Describe> Describe for Vec<T> {
    fn shape() -> Shape {
        Shape::List(Box::new(T::shape()))
    }
}

impl<T: Encode> Encode for BTreeMap<String, T> {
    fn encode(&self, writer: &mut JsonWriter<'_>) -> CodecResult<()> {
        writer.begin_object()?;
        for (key, value) in self.iter().filter(|(_, value)| !value.is_absent()) {
            writer.name(key)?;
            value.encode(writer)?;
        }
        writer.end_object()
    }
}

impl<T: Decode> Decode for BTreeMap<String, T> {
    fn decode(reader: &mut JsonReader) -> CodecResult<Option<Self>> {
        match reader.peek()? {
            JsonKind::Null => {
                reader.next_null()?;
                return Ok(None);
            }
            JsonKind::Object => {}
            other => {
                return Err(Error::new(ErrorKind::Client)
                    .with_message(format!("cannot decode {other} as map")));
            }
        }
        reader.begin_object()?;
        let mut entries = BTreeMap::new();
        while reader.has_next()? {
            let key = reader.next_name()?;
            if let Some(value) = T::decode(reader)? {
                entries.insert(key, value);
            }
        }
        reader.end_object()?;
        Ok(Some(entries))
    }
}

impl<T: Describe> Describe for BTreeMap<String, T> {
    fn shape() -> Shape {
        Shape::Map(Box::new(T::shape()))
    }
}
