//! Purpose: Dispatch marshalled requests through a pluggable transport and decode replies.
//! Exports: `Client`, `Transport`, `HttpResponse`, `ServiceErrorCode`, `decode_output`, `service_error`.
//! Role: Thin synchronous client; HTTP, signing, and retries live behind `Transport`.
//! Invariants: Non-2xx replies always become `ErrorKind::Service` errors.
//! Invariants: An empty or non-object success body decodes to the default output record.
#![allow(clippy::result_large_err)]

use super::config::ClientConfig;
use super::operation::Operation;
use super::request::{HttpRequest, marshall};
use crate::codec::{self, Record};
use crate::core::error::{Error, ErrorKind};
use std::collections::BTreeMap;
use tracing::{debug, warn};
use url::Url;

type ClientResult<T> = Result<T, Error>;

pub const REQUEST_ID_HEADER: &str = "x-amzn-RequestId";
pub const ERROR_TYPE_HEADER: &str = "x-amzn-ErrorType";

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: BTreeMap::new(),
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns the raw reply.
pub trait Transport {
    fn send(&self, url: &Url, request: &HttpRequest) -> ClientResult<HttpResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, url: &Url, request: &HttpRequest) -> ClientResult<HttpResponse> {
        (**self).send(url, request)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ServiceErrorCode {
    ContactNotFound,
    DestinationNotAllowed,
    DuplicateResource,
    InternalService,
    InvalidParameter,
    InvalidRequest,
    LimitExceeded,
    OutboundContactNotPermitted,
    ResourceNotFound,
    Throttling,
    UserNotFound,
    Unknown,
}

impl ServiceErrorCode {
    pub fn from_code(code: &str) -> Self {
        match code {
            "ContactNotFoundException" => ServiceErrorCode::ContactNotFound,
            "DestinationNotAllowedException" => ServiceErrorCode::DestinationNotAllowed,
            "DuplicateResourceException" => ServiceErrorCode::DuplicateResource,
            "InternalServiceException" => ServiceErrorCode::InternalService,
            "InvalidParameterException" => ServiceErrorCode::InvalidParameter,
            "InvalidRequestException" => ServiceErrorCode::InvalidRequest,
            "LimitExceededException" => ServiceErrorCode::LimitExceeded,
            "OutboundContactNotPermittedException" => {
                ServiceErrorCode::OutboundContactNotPermitted
            }
            "ResourceNotFoundException" => ServiceErrorCode::ResourceNotFound,
            "ThrottlingException" => ServiceErrorCode::Throttling,
            "UserNotFoundException" => ServiceErrorCode::UserNotFound,
            _ => ServiceErrorCode::Unknown,
        }
    }

    /// Transient failures a caller may retry.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ServiceErrorCode::InternalService
                | ServiceErrorCode::LimitExceeded
                | ServiceErrorCode::Throttling
        )
    }
}

crate::record! {
    struct ErrorBody {
        "__type" => error_type: String,
        "message" => message: String,
        "Message" => message_title: String,
    }
}

/// Builds the service error for a non-2xx reply.
///
/// The error code is read from the `x-amzn-ErrorType` header when present,
/// otherwise from the body's `__type` (the part after `#`).
pub fn service_error(operation: &str, response: &HttpResponse) -> Error {
    let body = if response.body.iter().all(u8::is_ascii_whitespace) {
        ErrorBody::default()
    } else {
        codec::from_slice::<ErrorBody>(&response.body)
            .ok()
            .flatten()
            .unwrap_or_default()
    };

    let code = response
        .header(ERROR_TYPE_HEADER)
        .and_then(|value| value.split(':').next())
        .filter(|code| !code.trim().is_empty())
        .or_else(|| {
            body.error_type
                .as_deref()
                .map(|value| value.rsplit_once('#').map_or(value, |(_, code)| code))
        })
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string);
    let message = body
        .message
        .or(body.message_title)
        .unwrap_or_else(|| format!("service returned status {}", response.status));

    warn!(
        operation,
        status = response.status,
        code = code.as_deref().unwrap_or("unknown"),
        "service returned an error"
    );

    let mut err = Error::new(ErrorKind::Service)
        .with_message(message)
        .with_operation(operation)
        .with_status(response.status);
    if let Some(code) = code {
        if ServiceErrorCode::from_code(&code).is_retryable() {
            err = err.with_hint("transient service error; retry with backoff");
        }
        err = err.with_code(code);
    }
    if let Some(request_id) = response.header(REQUEST_ID_HEADER) {
        err = err.with_request_id(request_id);
    }
    err
}

/// Decodes a success body into an output record.
pub fn decode_output<R: Record>(body: &[u8]) -> ClientResult<R> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(R::default());
    }
    Ok(codec::from_slice::<R>(body)?.unwrap_or_default())
}

pub struct Client<T> {
    config: ClientConfig,
    transport: T,
}

impl<T: Transport> Client<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn call<O: Operation>(&self, input: &O::Input) -> ClientResult<O::Output> {
        let mut request = marshall::<O>(Some(input))?;
        if request.header("User-Agent").is_none() {
            request
                .headers
                .insert("User-Agent".to_string(), self.config.user_agent().to_string());
        }
        let url = self.config.request_url(&request);
        debug!(operation = O::NAME, method = O::METHOD.as_str(), url = %url, "sending request");

        let response = self.transport.send(&url, &request).map_err(|err| {
            if err.operation().is_some() {
                err
            } else {
                err.with_operation(O::NAME)
            }
        })?;
        if !response.is_success() {
            return Err(service_error(O::NAME, &response));
        }
        debug!(operation = O::NAME, status = response.status, "received response");
        decode_output::<O::Output>(&response.body).map_err(|err| {
            if err.operation().is_some() {
                err
            } else {
                err.with_operation(O::NAME)
            }
        })
    }
}
