//! Purpose: JSON token streams shared by the codec engine and the CLI.
//! Exports: `parse` decode helpers, `JsonWriter`, `JsonReader`, `JsonKind`.
//! Role: Single seam for parser and writer details so codecs stay format-agnostic.
//! Invariants: Runtime JSON decoding goes through `parse`.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub mod parse;
mod reader;
mod writer;

pub use reader::{JsonKind, JsonReader};
pub use writer::JsonWriter;
