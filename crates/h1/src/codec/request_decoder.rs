//! HTTP request decoder module
//!
//! [`RequestDecoder`] turns bytes into a complete [`Request`] in two phases:
//!
//! 1. Header block: bytes are collected up to `CRLF CRLF` (at most
//!    [`Limits::max_header_bytes`]), then the request line and header fields are
//!    decoded
//! 2. Body: exactly `content-length` bytes are taken as the body, or none when the
//!    header is absent
//!
//! A parse either yields the whole request or a single [`ParseError`]; there is no
//! partial result and nothing to resume.
//!
//! # Example
//!
//! ```
//! use micro_h1::codec::RequestDecoder;
//! use micro_h1::protocol::Method;
//!
//! let mut stream = &b"POST /echo HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello"[..];
//! let request = RequestDecoder::new().parse(&mut stream).unwrap();
//!
//! assert_eq!(request.method(), Method::Post);
//! assert_eq!(request.target(), "/echo");
//! assert_eq!(&request.body()[..], b"hello");
//! ```

use std::io::Read;
use std::str;

use bytes::BytesMut;
use tokio_util::codec::Decoder;
use tracing::{debug, trace};

use crate::codec::body::LengthDecoder;
use crate::codec::header::{self, HeaderDecoder, HEAD_TERMINATOR};
use crate::codec::Limits;
use crate::ensure;
use crate::protocol::{Headers, Method, ParseError, Request, Version};

/// Parser for HTTP/1.1 requests.
///
/// Use [`RequestDecoder::parse`] on a blocking [`Read`] source, or plug the decoder
/// into a `tokio_util::codec::FramedRead` through its [`Decoder`] implementation.
#[derive(Debug, Clone, Default)]
pub struct RequestDecoder {
    limits: Limits,
}

/// Everything a header block tells about a request.
struct RequestHead {
    method: Method,
    target: String,
    version: Version,
    headers: Headers,
    body: LengthDecoder,
}

impl RequestDecoder {
    /// Creates a `RequestDecoder` with the default [`Limits`].
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Reads one complete request from `src`.
    ///
    /// The header block is read one byte at a time and the body with a bounded read,
    /// so no byte after the request is consumed. Wrap unbuffered sources such as a
    /// `TcpStream` in a `BufReader`.
    ///
    /// # Errors
    ///
    /// - [`ParseError::HeadersTooLarge`] if no `CRLF CRLF` shows up within the header
    ///   limit
    /// - [`ParseError::NoRequestLine`] if the block starts with an empty line
    /// - [`ParseError::UnrecognizedRequestFormat`] unless the request line is
    ///   exactly three space separated tokens
    /// - [`ParseError::MethodNotFound`] and [`ParseError::InvalidHttpVersion`] for
    ///   unknown method and version tokens
    /// - [`ParseError::InvalidHeader`] for header fields that are not UTF-8
    /// - [`ParseError::InvalidContentLength`] and [`ParseError::BodyTooLarge`] for
    ///   a bad or oversized `content-length`
    /// - [`ParseError::EndOfStream`] if the source ends early, [`ParseError::Io`]
    ///   for any other read failure
    pub fn parse<R: Read>(&self, mut src: R) -> Result<Request, ParseError> {
        let head = header::read_head(&mut src, self.limits.max_header_bytes)?;
        let RequestHead { method, target, version, headers, body } = self.decode_head(&head)?;

        let body = body.read_from(&mut src)?;

        Ok(Request::from_parts(method, target, version, headers, body))
    }

    fn decode_head(&self, head: &[u8]) -> Result<RequestHead, ParseError> {
        let (request_line, lines) = HeaderDecoder::split_start_line(head);
        ensure!(!request_line.is_empty(), ParseError::NoRequestLine);

        let (method, target, version) = parse_request_line(request_line)?;
        let headers = HeaderDecoder::decode_fields(lines)?;
        let body = LengthDecoder::from_headers(&headers, Some(self.limits.max_request_body))?;

        trace!(%method, request_target = %target, header_count = headers.len(), body_size = body.length(), "decoded request head");
        Ok(RequestHead { method, target, version, headers, body })
    }
}

/// Tokenizes `METHOD SP TARGET SP VERSION`.
fn parse_request_line(line: &[u8]) -> Result<(Method, String, Version), ParseError> {
    let mut tokens = line.split(|b| *b == b' ');

    let (Some(method), Some(target), Some(version), None) = (tokens.next(), tokens.next(), tokens.next(), tokens.next())
    else {
        debug!(request_line = %String::from_utf8_lossy(line), "request line is not three tokens");
        return Err(ParseError::UnrecognizedRequestFormat);
    };

    let method = Method::from_bytes(method).ok_or_else(|| ParseError::method_not_found(String::from_utf8_lossy(method)))?;
    let version =
        Version::from_bytes(version).ok_or_else(|| ParseError::invalid_http_version(String::from_utf8_lossy(version)))?;
    let target = str::from_utf8(target).map_err(|e| {
        debug!(cause = %e, "request target is not utf-8");
        ParseError::UnrecognizedRequestFormat
    })?;

    Ok((method, target.to_owned(), version))
}

impl Decoder for RequestDecoder {
    type Item = Request;
    type Error = ParseError;

    /// Attempts to decode one request from the buffered bytes.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(request))`: a whole request was buffered and has been split off `src`
    /// - `Ok(None)`: need more data, `src` is left untouched
    /// - `Err(_)`: the bytes can never form a valid request
    ///
    /// Header and body limits are checked as soon as the header block is buffered,
    /// before waiting for the body.
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let Some(head_len) = header::find_head_end(&src[..], self.limits.max_header_bytes)? else {
            return Ok(None);
        };

        let RequestHead { method, target, version, headers, body } =
            self.decode_head(&src[..head_len - HEAD_TERMINATOR.len()])?;

        let Some(body) = body.split_from(src, head_len)? else {
            return Ok(None);
        };

        Ok(Some(Request::from_parts(method, target, version, headers, body)))
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        match self.decode(buf)? {
            Some(request) => Ok(Some(request)),
            None if buf.is_empty() => Ok(None),
            None => {
                debug!(remaining = buf.len(), "stream ended inside a request");
                Err(ParseError::EndOfStream)
            }
        }
    }
}
