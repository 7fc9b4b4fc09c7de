//! Purpose: Client configuration (region, endpoint, user agent).
//! Exports: `ClientConfig`, `DEFAULT_REGION`, `REGION_ENV`, `ENDPOINT_ENV`.
//! Role: Resolves where marshalled requests are sent.
//! Invariants: Endpoints are http(s) origins with no path, query, or fragment.
#![allow(clippy::result_large_err)]

use super::request::HttpRequest;
use crate::core::error::{Error, ErrorKind};
use url::Url;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const REGION_ENV: &str = "SWITCHBOARD_REGION";
pub const ENDPOINT_ENV: &str = "SWITCHBOARD_ENDPOINT";

type ConfigResult<T> = Result<T, Error>;

#[derive(Clone, Debug)]
pub struct ClientConfig {
    region: String,
    endpoint: Url,
    user_agent: String,
}

impl ClientConfig {
    pub fn new(region: impl Into<String>) -> ConfigResult<Self> {
        let region = region.into();
        if region.is_empty()
            || !region
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '-')
        {
            return Err(Error::new(ErrorKind::Usage)
                .with_message(format!("invalid region '{region}'"))
                .with_hint("regions look like us-east-1"));
        }
        let endpoint = normalize_endpoint(&format!("https://connect.{region}.amazonaws.com"))?;
        Ok(Self {
            region,
            endpoint,
            user_agent: format!("switchboard/{}", env!("CARGO_PKG_VERSION")),
        })
    }

    /// Reads `SWITCHBOARD_REGION` and `SWITCHBOARD_ENDPOINT`.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let region = lookup(REGION_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());
        let config = Self::new(region)?;
        match lookup(ENDPOINT_ENV).filter(|value| !value.trim().is_empty()) {
            Some(endpoint) => config.with_endpoint(endpoint.trim()),
            None => Ok(config),
        }
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> ConfigResult<Self> {
        self.endpoint = normalize_endpoint(endpoint)?;
        Ok(self)
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Absolute URL for a marshalled request.
    ///
    /// `.` and `..` segments of the resource path are resolved by URL
    /// parsing; `HttpRequest::resource_path` keeps the verbatim form.
    pub fn request_url(&self, request: &HttpRequest) -> Url {
        let mut url = self.endpoint.clone();
        url.set_path(&request.resource_path);
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(
                request
                    .query
                    .iter()
                    .map(|(name, value)| (name.as_str(), value.as_str())),
            );
        }
        url
    }
}

fn normalize_endpoint(raw: &str) -> ConfigResult<Url> {
    let mut url = Url::parse(raw).map_err(|err| {
        Error::new(ErrorKind::Usage)
            .with_message("invalid endpoint url")
            .with_source(err)
    })?;
    let scheme = url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(
            Error::new(ErrorKind::Usage).with_message("endpoint url must use http or https scheme")
        );
    }
    if url.path() != "/" && !url.path().is_empty() {
        return Err(Error::new(ErrorKind::Usage).with_message("endpoint url must not include a path"));
    }
    url.set_path("/");
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::{ClientConfig, ENDPOINT_ENV, REGION_ENV, normalize_endpoint};
    use crate::api::{HttpRequest, Method};
    use crate::core::error::ErrorKind;
    use std::collections::BTreeMap;

    #[test]
    fn default_endpoint_follows_region() {
        let config = ClientConfig::new("eu-west-2").expect("config");
        assert_eq!(config.endpoint().as_str(), "https://connect.eu-west-2.amazonaws.com/");
        assert!(config.user_agent().starts_with("switchboard/"));
    }

    #[test]
    fn lookup_overrides_region_and_endpoint() {
        let config = ClientConfig::from_lookup(|key| match key {
            REGION_ENV => Some("ap-southeast-2".to_string()),
            ENDPOINT_ENV => Some("http://localhost:9000".to_string()),
            _ => None,
        })
        .expect("config");
        assert_eq!(config.region(), "ap-southeast-2");
        assert_eq!(config.endpoint().as_str(), "http://localhost:9000/");
    }

    #[test]
    fn empty_lookup_uses_defaults() {
        let config = ClientConfig::from_lookup(|_| None).expect("config");
        assert_eq!(config.region(), "us-east-1");
    }

    #[test]
    fn endpoint_rejects_paths_and_schemes() {
        let err = normalize_endpoint("http://localhost:9000/base").expect_err("err");
        assert_eq!(err.kind(), ErrorKind::Usage);
        assert!(normalize_endpoint("ftp://localhost").is_err());
        assert!(ClientConfig::new("us east").is_err());
    }

    #[test]
    fn request_url_appends_path_and_repeated_query() {
        let config = ClientConfig::new("us-east-1").expect("config");
        let request = HttpRequest {
            operation: "ListQueues",
            method: Method::Get,
            resource_path: "/queues-summary/i1".to_string(),
            query: vec![
                ("queueTypes".to_string(), "STANDARD".to_string()),
                ("queueTypes".to_string(), "AGENT".to_string()),
            ],
            headers: BTreeMap::new(),
            body: Vec::new(),
        };
        let url = config.request_url(&request);
        assert_eq!(
            url.as_str(),
            "https://connect.us-east-1.amazonaws.com/queues-summary/i1?queueTypes=STANDARD&queueTypes=AGENT"
        );
    }
}
