//! Request and response model types.

use std::collections::HashMap;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use url::Url;

use crate::endpoint::{Endpoint, QueryParameter};
use crate::error::Error;

/// HTTP method for requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => http::Method::GET,
            Method::Post => http::Method::POST,
            Method::Put => http::Method::PUT,
            Method::Patch => http::Method::PATCH,
            Method::Delete => http::Method::DELETE,
        }
    }
}

/// Immutable description of one call: method, query parameters, headers and
/// body bytes.
///
/// A default spec is a bare GET. Build one up with the `with_*` methods and
/// hand it to [`Client::fetch_with`](crate::Client::fetch_with) or
/// [`Client::stream_with`](crate::Client::stream_with).
///
/// ```ignore
/// let spec = RequestSpec::new(Method::Post)
///     .with_header("Content-Type", "application/json")
///     .with_body(br#"{"name":"Charlie Parker"}"#.to_vec());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestSpec {
    method: Method,
    query_parameters: Vec<(String, String)>,
    headers: HashMap<String, String>,
    body: Option<Vec<u8>>,
}

impl RequestSpec {
    /// Create a spec for the given method with no parameters, headers or body.
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    /// Set the HTTP method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Append one query item. Items are sent in insertion order, after any
    /// query items already present on the endpoint URL.
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_parameters.push((name.into(), value.into()));
        self
    }

    /// Append one query item from a [`QueryParameter`] capability.
    pub fn with_parameter(mut self, parameter: &impl QueryParameter) -> Self {
        self.query_parameters.push(parameter.query_item());
        self
    }

    /// Set a header. Setting the same name again overwrites the earlier value.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Attach body bytes. No `Content-Type` is inferred; set one explicitly
    /// with [`with_header`](Self::with_header) if the server needs it.
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// Build the transport request for an endpoint.
    ///
    /// Fails with [`Error::MalformedRequest`] if the endpoint path is not an
    /// absolute URL or a header name/value cannot be encoded. Pure
    /// transformation, performs no I/O.
    pub fn build<E: Endpoint + ?Sized>(&self, endpoint: &E) -> Result<reqwest::Request, Error> {
        let mut url = Url::parse(&endpoint.path()).map_err(|_| Error::MalformedRequest)?;

        if !self.query_parameters.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.query_parameters {
                pairs.append_pair(name, value);
            }
        }

        let mut request = reqwest::Request::new(self.method.into(), url);

        for (name, value) in &self.headers {
            let name = HeaderName::try_from(name.as_str()).map_err(|_| Error::MalformedRequest)?;
            let value =
                HeaderValue::try_from(value.as_str()).map_err(|_| Error::MalformedRequest)?;
            request.headers_mut().insert(name, value);
        }

        if let Some(body) = &self.body {
            *request.body_mut() = Some(body.clone().into());
        }

        Ok(request)
    }
}

/// Successful terminal outcome of a call.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code.
    pub status_code: u16,

    /// Response body, `None` when the server sent nothing.
    pub body: Option<Bytes>,

    /// Response headers. Lookups are case-insensitive.
    pub headers: HeaderMap,
}

impl Response {
    /// Whether the status indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Whether the status indicates a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }

    /// Whether the status indicates a server error (5xx).
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code)
    }

    /// Decode the body as JSON.
    ///
    /// Body decoding is the caller's concern; errors from here never flow
    /// through the request pipeline.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(self.body.as_deref().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_is_bare_get() {
        let spec = RequestSpec::default();
        let request = spec.build("https://example.com").unwrap();

        assert_eq!(request.method(), &http::Method::GET);
        assert_eq!(request.url().as_str(), "https://example.com/");
        assert!(request.headers().is_empty());
        assert!(request.body().is_none());
    }

    #[test]
    fn query_parameters_append_to_existing_items() {
        let spec = RequestSpec::default().with_query("page", "2");
        let request = spec.build("https://example.com/search?q=rust").unwrap();

        assert_eq!(
            request.url().as_str(),
            "https://example.com/search?q=rust&page=2"
        );
    }

    #[test]
    fn query_parameters_keep_insertion_order() {
        let spec = RequestSpec::default()
            .with_query("a", "1")
            .with_parameter(&("b", "2"))
            .with_query("a", "3");
        let request = spec.build("https://example.com/").unwrap();

        assert_eq!(request.url().query(), Some("a=1&b=2&a=3"));
    }

    #[test]
    fn relative_url_is_malformed() {
        let spec = RequestSpec::default();
        assert_eq!(spec.build("users/123").unwrap_err(), Error::MalformedRequest);
    }

    #[test]
    fn invalid_header_name_is_malformed() {
        let spec = RequestSpec::default().with_header("bad header\n", "value");
        assert_eq!(
            spec.build("https://example.com").unwrap_err(),
            Error::MalformedRequest
        );
    }

    #[test]
    fn duplicate_header_last_write_wins() {
        let spec = RequestSpec::default()
            .with_header("Authorization", "Bearer first")
            .with_header("Authorization", "Bearer second");
        let request = spec.build("https://example.com").unwrap();

        assert_eq!(
            request.headers().get("authorization").unwrap(),
            "Bearer second"
        );
        assert_eq!(request.headers().len(), 1);
    }

    #[test]
    fn body_is_attached_verbatim() {
        let spec = RequestSpec::new(Method::Post).with_body(b"raw bytes".to_vec());
        let request = spec.build("https://example.com/users").unwrap();

        assert_eq!(request.method(), &http::Method::POST);
        assert_eq!(request.body().unwrap().as_bytes(), Some(&b"raw bytes"[..]));
        // No implicit Content-Type.
        assert!(request.headers().get("content-type").is_none());
    }

    #[test]
    fn method_conversions() {
        assert_eq!(http::Method::from(Method::Get), http::Method::GET);
        assert_eq!(http::Method::from(Method::Post), http::Method::POST);
        assert_eq!(http::Method::from(Method::Put), http::Method::PUT);
        assert_eq!(http::Method::from(Method::Patch), http::Method::PATCH);
        assert_eq!(http::Method::from(Method::Delete), http::Method::DELETE);
    }

    #[test]
    fn response_predicates() {
        let response = Response {
            status_code: 204,
            body: None,
            headers: HeaderMap::new(),
        };
        assert!(response.is_success());
        assert!(!response.is_client_error());
        assert!(!response.is_server_error());
    }

    #[test]
    fn response_json_decodes_body() {
        let response = Response {
            status_code: 200,
            body: Some(Bytes::from_static(br#"{"id":7}"#)),
            headers: HeaderMap::new(),
        };
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["id"], 7);
    }

    #[test]
    fn response_json_fails_on_missing_body() {
        let response = Response {
            status_code: 204,
            body: None,
            headers: HeaderMap::new(),
        };
        assert!(response.json::<serde_json::Value>().is_err());
    }
}
