//! Parsed HTTP/1.1 requests.

use bytes::Bytes;

use crate::protocol::{Headers, Method, Version};

/// A complete request as produced by [`RequestDecoder`](crate::codec::RequestDecoder).
///
/// The request owns its target, headers and body. Header names are lowercase and the
/// body is exactly `content-length` bytes long, or empty when the header was absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    target: String,
    version: Version,
    headers: Headers,
    body: Bytes,
}

impl Request {
    pub(crate) fn from_parts(method: Method, target: String, version: Version, headers: Headers, body: Bytes) -> Self {
        Self { method, target, version, headers, body }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// The request target exactly as it appeared on the wire, path and query included.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Shortcut for `self.headers().get(name)`.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// Converts into an [`http::Request`], e.g. to hand it to a `tower` style service.
    ///
    /// # Errors
    ///
    /// Fails when the target is not a valid URI or a header is not representable by
    /// the `http` crate.
    pub fn into_http(self) -> Result<http::Request<Bytes>, http::Error> {
        let mut builder = http::Request::builder()
            .method(http::Method::from(self.method))
            .uri(self.target.as_str())
            .version(self.version.into());

        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }

        builder.body(self.body)
    }
}
