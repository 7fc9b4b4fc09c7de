//! Purpose: Schema-driven JSON marshalling for a cloud contact-center management API.
//! Exports: `json` token streams, the generic `codec`, request marshalling (`api`), `model`, `catalog`.
//! Role: Library behind the `switchboard` CLI and tests.
//! Invariants: Every record is encoded and decoded by one generic engine driven by field tables.
//! Invariants: Marshalling is deterministic and performs no I/O.

pub mod api;
pub mod catalog;
pub mod codec;
pub mod core;
pub mod json;
pub mod model;
