//! Purpose: Streaming JSON writer used by the record encoder.
//! Exports: `JsonWriter`.
//! Role: Token-level sink (`begin_object`/`name`/value/`end_object`/arrays/`close`).
//! Invariants: Output is compact JSON; one root value per writer.
//! Invariants: Escaping and number formatting are delegated to serde_json.
#![allow(clippy::result_large_err)]

use crate::core::error::{Error, ErrorKind};
use std::io::Write;

type WriteResult = Result<(), Error>;

#[derive(Clone, Copy, Debug)]
enum Scope {
    Object { first: bool, named: bool },
    Array { first: bool },
}

pub struct JsonWriter<'a> {
    out: &'a mut dyn Write,
    stack: Vec<Scope>,
    root_written: bool,
}

impl<'a> JsonWriter<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self {
            out,
            stack: Vec::new(),
            root_written: false,
        }
    }

    pub fn begin_object(&mut self) -> WriteResult {
        self.before_value()?;
        self.raw(b"{")?;
        self.stack.push(Scope::Object {
            first: true,
            named: false,
        });
        Ok(())
    }

    pub fn name(&mut self, name: &str) -> WriteResult {
        let needs_comma = match self.stack.last_mut() {
            Some(Scope::Object { first, named }) => {
                if *named {
                    return Err(misuse("name written twice without a value"));
                }
                let needs_comma = !*first;
                *first = false;
                *named = true;
                needs_comma
            }
            _ => return Err(misuse("name written outside an object")),
        };
        if needs_comma {
            self.raw(b",")?;
        }
        self.escaped(name)?;
        self.raw(b":")
    }

    pub fn end_object(&mut self) -> WriteResult {
        match self.stack.last() {
            Some(Scope::Object { named: false, .. }) => {
                self.stack.pop();
                self.raw(b"}")
            }
            Some(Scope::Object { named: true, .. }) => {
                Err(misuse("object closed after a name with no value"))
            }
            _ => Err(misuse("end_object without a matching begin_object")),
        }
    }

    pub fn begin_array(&mut self) -> WriteResult {
        self.before_value()?;
        self.raw(b"[")?;
        self.stack.push(Scope::Array { first: true });
        Ok(())
    }

    pub fn end_array(&mut self) -> WriteResult {
        match self.stack.last() {
            Some(Scope::Array { .. }) => {
                self.stack.pop();
                self.raw(b"]")
            }
            _ => Err(misuse("end_array without a matching begin_array")),
        }
    }

    pub fn string_value(&mut self, value: &str) -> WriteResult {
        self.before_value()?;
        self.escaped(value)
    }

    pub fn bool_value(&mut self, value: bool) -> WriteResult {
        self.before_value()?;
        self.raw(if value { b"true" } else { b"false" })
    }

    pub fn i64_value(&mut self, value: i64) -> WriteResult {
        self.before_value()?;
        serde_json::to_writer(&mut *self.out, &value).map_err(write_failed)
    }

    pub fn f64_value(&mut self, value: f64) -> WriteResult {
        if !value.is_finite() {
            return Err(Error::new(ErrorKind::Client)
                .with_message(format!("cannot encode non-finite number {value}")));
        }
        self.before_value()?;
        serde_json::to_writer(&mut *self.out, &value).map_err(write_failed)
    }

    pub fn null_value(&mut self) -> WriteResult {
        self.before_value()?;
        self.raw(b"null")
    }

    /// Checks that every scope is closed and flushes the sink.
    pub fn close(self) -> WriteResult {
        if !self.stack.is_empty() {
            return Err(misuse("writer closed with unterminated scopes"));
        }
        self.out.flush().map_err(|err| {
            Error::new(ErrorKind::Io)
                .with_message("failed to flush json output")
                .with_source(err)
        })
    }

    fn before_value(&mut self) -> WriteResult {
        let needs_comma = match self.stack.last_mut() {
            Some(Scope::Object { named, .. }) => {
                if !*named {
                    return Err(misuse("value written inside an object without a name"));
                }
                *named = false;
                false
            }
            Some(Scope::Array { first }) => {
                let needs_comma = !*first;
                *first = false;
                needs_comma
            }
            None => {
                if self.root_written {
                    return Err(misuse("more than one root value"));
                }
                self.root_written = true;
                false
            }
        };
        if needs_comma {
            self.raw(b",")?;
        }
        Ok(())
    }

    fn escaped(&mut self, value: &str) -> WriteResult {
        serde_json::to_writer(&mut *self.out, value).map_err(write_failed)
    }

    fn raw(&mut self, bytes: &[u8]) -> WriteResult {
        self.out.write_all(bytes).map_err(|err| {
            Error::new(ErrorKind::Io)
                .with_message("failed to write json output")
                .with_source(err)
        })
    }
}

fn misuse(message: &str) -> Error {
    Error::new(ErrorKind::Client).with_message(format!("json writer misuse: {message}"))
}

fn write_failed(err: serde_json::Error) -> Error {
    Error::new(ErrorKind::Io)
        .with_message("failed to write json output")
        .with_source(err)
}
