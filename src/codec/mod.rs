//! Purpose: Generic record encoder/decoder driven by per-record field tables.
//! Exports: `Encode`, `Decode`, `encode_record`, `decode_record`, document helpers, schema types.
//! Role: The one codec engine behind every request, response, and nested record.
//! Invariants: Absent fields are omitted on encode, never written as `null`.
//! Invariants: Unknown keys are skipped on decode; non-object records decode to `None`.
//! Invariants: Codecs are stateless functions; there is no per-type codec instance.
#![allow(clippy::result_large_err)]

mod primitive;
mod schema;

pub use schema::{Describe, Field, Location, Record, Shape};

use crate::core::error::{Error, ErrorKind};
use crate::json::{JsonKind, JsonReader, JsonWriter};
use tracing::trace;

pub type CodecResult<T> = Result<T, Error>;

/// Writes a value onto a JSON token stream.
pub trait Encode {
    fn encode(&self, writer: &mut JsonWriter<'_>) -> CodecResult<()>;

    /// True for values that collections skip (a `None` list element or map value).
    fn is_absent(&self) -> bool {
        false
    }

    /// Text form used for path and header slots. Containers have none.
    fn to_param(&self) -> Option<String> {
        None
    }

    /// Query values; lists expand to one value per element.
    fn to_params(&self) -> Vec<String> {
        self.to_param().into_iter().collect()
    }
}

/// Reads a value from a JSON token stream. `Ok(None)` means absent.
pub trait Decode: Sized {
    fn decode(reader: &mut JsonReader) -> CodecResult<Option<Self>>;
}

pub fn encode_record<R: Record>(record: &R, writer: &mut JsonWriter<'_>) -> CodecResult<()> {
    writer.begin_object()?;
    for field in R::fields() {
        if field.location != Location::Body {
            continue;
        }
        if let Some(value) = (field.get)(record) {
            writer.name(field.name)?;
            value.encode(writer)?;
        }
    }
    writer.end_object()
}

pub fn decode_record<R: Record>(reader: &mut JsonReader) -> CodecResult<Option<R>> {
    if reader.peek()? != JsonKind::Object {
        reader.skip_value()?;
        return Ok(None);
    }
    reader.begin_object()?;
    let mut record = R::default();
    while reader.has_next()? {
        let name = reader.next_name()?;
        match R::field(&name) {
            Some(field) => (field.set)(&mut record, reader).map_err(|err| {
                if err.hint().is_some() {
                    err
                } else {
                    err.with_hint(format!("while decoding {}.{}", R::TYPE_NAME, field.name))
                }
            })?,
            None => {
                trace!(record = R::TYPE_NAME, field = %name, "skipping unknown field");
                reader.skip_value()?;
            }
        }
    }
    reader.end_object()?;
    Ok(Some(record))
}

/// Encodes a whole document. Errors are returned as raised by the writer.
pub fn to_vec<T: Encode + ?Sized>(value: &T) -> CodecResult<Vec<u8>> {
    let mut out = Vec::new();
    write_document(value, &mut out)?;
    Ok(out)
}

pub fn to_string<T: Encode + ?Sized>(value: &T) -> CodecResult<String> {
    let bytes = to_vec(value)?;
    String::from_utf8(bytes).map_err(|err| {
        Error::new(ErrorKind::Client)
            .with_message("encoded json is not utf-8")
            .with_source(err)
    })
}

pub fn from_slice<T: Decode>(input: &[u8]) -> CodecResult<Option<T>> {
    let mut reader = JsonReader::from_slice(input)?;
    T::decode(&mut reader)
}

pub fn from_value<T: Decode>(value: serde_json::Value) -> CodecResult<Option<T>> {
    let mut reader = JsonReader::new(value);
    T::decode(&mut reader)
}

fn write_document<T: Encode + ?Sized>(value: &T, out: &mut Vec<u8>) -> CodecResult<()> {
    let mut writer = JsonWriter::new(out);
    value.encode(&mut writer)?;
    writer.close()
}
