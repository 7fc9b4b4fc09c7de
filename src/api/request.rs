//! Purpose: Turn a typed request record into a transport-neutral HTTP request.
//! Exports: `HttpRequest`, `resolve_path`, `marshall`, `CONTENT_TYPE`.
//! Role: Per-operation marshaller shared by every operation through `Operation`.
//! Invariants: An absent request fails before any work is done.
//! Invariants: Path values are inserted verbatim (no escaping); absent ones become "".
//! Invariants: `Content-Length` equals the byte length of the encoded body.
#![allow(clippy::result_large_err)]

use super::operation::{Method, Operation};
use crate::codec::{self, Location, Record};
use crate::core::error::{Error, ErrorKind};
use std::collections::BTreeMap;
use tracing::debug;

pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HttpRequest {
    pub operation: &'static str,
    pub method: Method,
    pub resource_path: String,
    pub query: Vec<(String, String)>,
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// Header lookup, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Substitutes every path field of `record` into `template`.
pub fn resolve_path<R: Record>(template: &str, record: &R) -> String {
    let mut path = template.to_string();
    for field in R::fields() {
        if field.location != Location::Path {
            continue;
        }
        let placeholder = format!("{{{}}}", field.name);
        let value = (field.get)(record)
            .and_then(|value| value.to_param())
            .unwrap_or_default();
        path = path.replace(&placeholder, &value);
    }
    path
}

pub fn marshall<O: Operation>(request: Option<&O::Input>) -> Result<HttpRequest, Error> {
    let Some(input) = request else {
        return Err(Error::new(ErrorKind::InvalidArgument)
            .with_message(format!("Invalid argument passed to marshall({}Request)", O::NAME))
            .with_operation(O::NAME));
    };

    let resource_path = resolve_path(O::URI, input);
    let mut query = Vec::new();
    let mut headers = BTreeMap::new();
    for field in <O::Input as Record>::fields() {
        let Some(value) = (field.get)(input) else {
            continue;
        };
        match field.location {
            Location::Query => query.extend(
                value
                    .to_params()
                    .into_iter()
                    .map(|param| (field.name.to_string(), param)),
            ),
            Location::Header => {
                if let Some(text) = value.to_param() {
                    headers.insert(field.name.to_string(), text);
                }
            }
            Location::Body | Location::Path => {}
        }
    }

    let mut body = Vec::new();
    if O::METHOD.has_body() {
        body = codec::to_vec(input).map_err(|err| {
            let detail = err.message().unwrap_or("unknown error").to_string();
            Error::new(ErrorKind::Client)
                .with_message(format!("Unable to marshall request to JSON: {detail}"))
                .with_operation(O::NAME)
                .with_source(err)
        })?;
        headers.insert("Content-Length".to_string(), body.len().to_string());
        if !headers
            .keys()
            .any(|key| key.eq_ignore_ascii_case("Content-Type"))
        {
            headers.insert("Content-Type".to_string(), CONTENT_TYPE.to_string());
        }
    }

    debug!(
        operation = O::NAME,
        method = O::METHOD.as_str(),
        path = %resource_path,
        query = query.len(),
        body_len = body.len(),
        "marshalled request"
    );

    Ok(HttpRequest {
        operation: O::NAME,
        method: O::METHOD,
        resource_path,
        query,
        headers,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::{marshall, resolve_path};
    use crate::api::Method;
    use crate::core::error::ErrorKind;

    crate::record! {
        struct PingRequest {
            "Target" in path => target: String,
            "Trace" in header => trace: String,
            "Note" => note: String,
        }
    }

    crate::operation! {
        Ping: Post "/ping/{Target}", PingRequest => PingRequest
    }

    crate::operation! {
        Peek: Get "/ping/{Target}", PingRequest => PingRequest
    }

    #[test]
    fn unknown_placeholders_are_left_alone() {
        let request = PingRequest {
            target: Some("t1".to_string()),
            ..PingRequest::default()
        };
        assert_eq!(resolve_path("/a/{Target}/{Other}", &request), "/a/t1/{Other}");
    }

    #[test]
    fn header_fields_override_nothing_else() {
        let request = PingRequest {
            target: Some("t1".to_string()),
            trace: Some("abc".to_string()),
            note: Some("hi".to_string()),
        };
        let http = marshall::<Ping>(Some(&request)).expect("marshall");
        assert_eq!(http.method, Method::Post);
        assert_eq!(http.header("trace"), Some("abc"));
        assert_eq!(http.header("content-type"), Some(super::CONTENT_TYPE));
        assert_eq!(http.body_text(), Some(r#"{"Note":"hi"}"#));
    }

    #[test]
    fn get_requests_have_no_body_headers() {
        let request = PingRequest {
            note: Some("ignored".to_string()),
            ..PingRequest::default()
        };
        let http = marshall::<Peek>(Some(&request)).expect("marshall");
        assert!(http.body.is_empty());
        assert_eq!(http.header("Content-Length"), None);
        assert_eq!(http.resource_path, "/ping/");
    }

    #[test]
    fn missing_request_names_the_operation() {
        let err = marshall::<Ping>(None).expect_err("err");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.operation(), Some("Ping"));
    }
}
