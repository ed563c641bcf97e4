//! HTTP/1.1 responses: parsed on the client side, built and serialized on the
//! server side.
//!
//! A [`Response`] built with [`Response::new`] starts from a [`ResponseConfig`] and is
//! filled in through its setters:
//!
//! ```
//! use micro_h1::protocol::{Response, ResponseConfig};
//!
//! let mut response = Response::new(ResponseConfig::new(201, "Created"));
//! response.set_header("Content-Type", "application/json");
//! response.set_body("{}");
//!
//! assert_eq!(response.header("content-length"), Some("2"));
//! assert!(response.to_bytes().starts_with(b"HTTP/1.1 201 Created\r\n"));
//! ```

use std::io;

use bytes::{Bytes, BytesMut};

use crate::codec::ResponseEncoder;
use crate::protocol::{Headers, Version};

/// Initial values for a response built with [`Response::new`].
///
/// Defaults to `HTTP/1.1 200 OK`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseConfig {
    pub version: Version,
    pub status_code: u16,
    pub status_text: String,
}

impl ResponseConfig {
    pub fn new<S: Into<String>>(status_code: u16, status_text: S) -> Self {
        Self { status_code, status_text: status_text.into(), ..Default::default() }
    }
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self { version: Version::Http11, status_code: 200, status_text: "OK".to_string() }
    }
}

/// An owned HTTP/1.1 response.
///
/// Status codes set through [`Response::set_status_code`] are not range checked;
/// only parsed responses are guaranteed to carry a code in `100..=599`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    version: Version,
    status_code: u16,
    status_text: String,
    headers: Headers,
    body: Bytes,
}

impl Response {
    pub fn new(config: ResponseConfig) -> Self {
        let ResponseConfig { version, status_code, status_text } = config;
        Self { version, status_code, status_text, headers: Headers::new(), body: Bytes::new() }
    }

    pub(crate) fn from_parts(version: Version, status_code: u16, status_text: String, headers: Headers, body: Bytes) -> Self {
        Self { version, status_code, status_text, headers, body }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The reason phrase, e.g. `"Not Found"`.
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn into_body(self) -> Bytes {
        self.body
    }

    pub fn set_status_code(&mut self, status_code: u16) {
        self.status_code = status_code;
    }

    pub fn set_status_text<S: Into<String>>(&mut self, status_text: S) {
        self.status_text = status_text.into();
    }

    /// Sets a header with the same case folding and replace semantics as
    /// [`Headers::set`].
    ///
    /// Setting `content-length` here overrides the value derived by
    /// [`Response::set_body`] without any check against the body.
    pub fn set_header<N, V>(&mut self, name: N, value: V)
    where
        N: AsRef<str>,
        V: Into<String>,
    {
        self.headers.set(name, value);
    }

    /// Replaces the body and sets `content-length` to its length.
    pub fn set_body<B: Into<Bytes>>(&mut self, body: B) {
        self.body = body.into();
        self.headers.set("content-length", self.body.len().to_string());
    }

    /// Appends the wire form of this response to `dst`.
    pub fn encode(&self, dst: &mut BytesMut) {
        ResponseEncoder::encode_response(self, dst);
    }

    /// Serializes into a fresh buffer.
    pub fn to_bytes(&self) -> Bytes {
        let mut dst = BytesMut::new();
        self.encode(&mut dst);
        dst.freeze()
    }

    /// Serializes and writes the whole response to `writer`.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying writer.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(&self.to_bytes())?;
        writer.flush()
    }

    /// Converts into an [`http::Response`]. The reason phrase is not carried over.
    ///
    /// # Errors
    ///
    /// Fails when the status code is outside `100..=999` or a header is not
    /// representable by the `http` crate.
    pub fn into_http(self) -> Result<http::Response<Bytes>, http::Error> {
        let mut builder = http::Response::builder().status(self.status_code).version(self.version.into());

        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }

        builder.body(self.body)
    }
}

impl Default for Response {
    fn default() -> Self {
        Response::new(ResponseConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let response = Response::default();

        assert_eq!(response.version(), Version::Http11);
        assert_eq!(response.status_code(), 200);
        assert_eq!(response.status_text(), "OK");
        assert!(response.headers().is_empty());
        assert!(response.body().is_empty());
    }

    #[test]
    fn set_body_derives_content_length() {
        let mut response = Response::default();

        let bodies: [&[u8]; 3] = [b"", b"Hellow", &[0u8; 1024]];
        for body in bodies {
            response.set_body(body.to_vec());
            assert_eq!(response.header("Content-Length"), Some(body.len().to_string().as_str()));
        }
        assert_eq!(response.headers().len(), 1);
    }

    #[test]
    fn explicit_content_length_overrides_derived() {
        let mut response = Response::default();
        response.set_body("Hellow");
        response.set_header("Content-Length", "99");

        assert_eq!(response.header("content-length"), Some("99"));
        assert_eq!(response.body().len(), 6);
    }

    #[test]
    fn status_code_is_not_validated() {
        let mut response = Response::default();
        response.set_status_code(42);
        response.set_status_text("Whatever");

        assert_eq!(response.status_code(), 42);
        assert_eq!(response.status_text(), "Whatever");
        assert!(response.to_bytes().starts_with(b"HTTP/1.1 42 Whatever\r\n"));
    }

    #[test]
    fn into_http_response() {
        let mut response = Response::new(ResponseConfig::new(404, "Not Found"));
        response.set_header("Content-Type", "text/plain");
        response.set_body("missing");

        let response = response.into_http().unwrap();
        assert_eq!(response.status(), http::StatusCode::NOT_FOUND);
        assert_eq!(response.headers().get(http::header::CONTENT_LENGTH).unwrap(), "7");
        assert_eq!(response.body().as_ref(), b"missing");

        let mut invalid = Response::default();
        invalid.set_status_code(42);
        assert!(invalid.into_http().is_err());
    }

    #[test]
    fn write_to_writer() {
        let mut response = Response::default();
        response.set_body("ok");

        let mut out = Vec::new();
        response.write_to(&mut out).unwrap();
        assert_eq!(out, b"HTTP/1.1 200 OK\r\ncontent-length: 2\r\n\r\nok");
    }
}
