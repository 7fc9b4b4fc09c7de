//! Purpose: Request marshalling and dispatch for the contact-center API.
//! Exports: Operation metadata, the marshaller, client configuration, and the client.
//! Role: Public boundary between typed records and a pluggable HTTP transport.
//! Invariants: Marshalling is pure; only `Client::call` touches a transport.

mod client;
mod config;
mod operation;
mod request;

#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::error::{Error, ErrorKind};
pub use client::{
    Client, ERROR_TYPE_HEADER, HttpResponse, REQUEST_ID_HEADER, ServiceErrorCode, Transport,
    decode_output, service_error,
};
pub use config::{ClientConfig, DEFAULT_REGION, ENDPOINT_ENV, REGION_ENV};
pub use operation::{Method, Operation};
pub use request::{CONTENT_TYPE, HttpRequest, marshall, resolve_path};
