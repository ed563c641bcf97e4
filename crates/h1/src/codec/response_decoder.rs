//! HTTP response decoder module, for the client side of a connection.
//!
//! [`ResponseDecoder`] shares header block handling with the request decoder and
//! differs at the first line: a status line is split at its first two spaces and
//! everything after the second space is the reason phrase.
//!
//! By default no bound applies to the body length; see [`Limits`].

use std::io::Read;
use std::str;

use bytes::BytesMut;
use tokio_util::codec::Decoder;
use tracing::{debug, trace};

use crate::codec::body::LengthDecoder;
use crate::codec::header::{self, HeaderDecoder, HEAD_TERMINATOR};
use crate::codec::Limits;
use crate::ensure;
use crate::protocol::{Headers, ParseError, Response, Version};

/// Parser for HTTP/1.1 responses.
#[derive(Debug, Clone, Default)]
pub struct ResponseDecoder {
    limits: Limits,
}

struct ResponseHead {
    version: Version,
    status_code: u16,
    status_text: String,
    headers: Headers,
    body: LengthDecoder,
}

impl ResponseDecoder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Reads one complete response from `src`.
    ///
    /// # Errors
    ///
    /// - [`ParseError::NoResponseLine`] if the block starts with an empty line
    /// - [`ParseError::UnrecognizedResponseFormat`] if the status line has fewer than
    ///   two spaces
    /// - [`ParseError::InvalidHttpVersion`] unless the version is `HTTP/1.1`
    /// - [`ParseError::InvalidStatusCode`] unless the code is an integer in
    ///   `100..=599`
    /// - the header, body and stream errors of
    ///   [`RequestDecoder::parse`](crate::codec::RequestDecoder::parse)
    pub fn parse<R: Read>(&self, mut src: R) -> Result<Response, ParseError> {
        let head = header::read_head(&mut src, self.limits.max_header_bytes)?;
        let ResponseHead { version, status_code, status_text, headers, body } = self.decode_head(&head)?;

        let body = body.read_from(&mut src)?;

        Ok(Response::from_parts(version, status_code, status_text, headers, body))
    }

    fn decode_head(&self, head: &[u8]) -> Result<ResponseHead, ParseError> {
        let (status_line, lines) = HeaderDecoder::split_start_line(head);
        ensure!(!status_line.is_empty(), ParseError::NoResponseLine);

        let (version, status_code, status_text) = parse_status_line(status_line)?;
        let headers = HeaderDecoder::decode_fields(lines)?;
        let body = LengthDecoder::from_headers(&headers, self.limits.max_response_body)?;

        trace!(status_code, header_count = headers.len(), body_size = body.length(), "decoded response head");
        Ok(ResponseHead { version, status_code, status_text, headers, body })
    }
}

/// Splits `bytes` around its first space.
fn split_at_space(bytes: &[u8]) -> Option<(&[u8], &[u8])> {
    let position = bytes.iter().position(|b| *b == b' ')?;
    Some((&bytes[..position], &bytes[position + 1..]))
}

/// Tokenizes `VERSION SP STATUS SP REASON-PHRASE`.
fn parse_status_line(line: &[u8]) -> Result<(Version, u16, String), ParseError> {
    let Some((version, rest)) = split_at_space(line) else {
        return Err(ParseError::UnrecognizedResponseFormat);
    };
    let Some((status, reason)) = split_at_space(rest) else {
        return Err(ParseError::UnrecognizedResponseFormat);
    };

    let version =
        Version::from_bytes(version).ok_or_else(|| ParseError::invalid_http_version(String::from_utf8_lossy(version)))?;

    let status_code = str::from_utf8(status)
        .ok()
        .filter(|code| !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|code| code.parse::<u16>().ok())
        .filter(|code| (100..=599).contains(code))
        .ok_or_else(|| ParseError::invalid_status_code(String::from_utf8_lossy(status)))?;

    let reason = str::from_utf8(reason).map_err(|e| {
        debug!(cause = %e, "reason phrase is not utf-8");
        ParseError::UnrecognizedResponseFormat
    })?;

    Ok((version, status_code, reason.to_owned()))
}

impl Decoder for ResponseDecoder {
    type Item = Response;
    type Error = ParseError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let Some(head_len) = header::find_head_end(&src[..], self.limits.max_header_bytes)? else {
            return Ok(None);
        };

        let ResponseHead { version, status_code, status_text, headers, body } =
            self.decode_head(&src[..head_len - HEAD_TERMINATOR.len()])?;

        let Some(body) = body.split_from(src, head_len)? else {
            return Ok(None);
        };

        Ok(Some(Response::from_parts(version, status_code, status_text, headers, body)))
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        match self.decode(buf)? {
            Some(response) => Ok(Some(response)),
            None if buf.is_empty() => Ok(None),
            None => {
                debug!(remaining = buf.len(), "stream ended inside a response");
                Err(ParseError::EndOfStream)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::limits::MAX_HEADER_BYTES;
    use futures::StreamExt;
    use indoc::indoc;
    use tokio_util::codec::FramedRead;

    fn parse(input: &[u8]) -> Result<Response, ParseError> {
        ResponseDecoder::new().parse(input)
    }

    #[test]
    fn from_server() {
        let input = indoc! {r#"
            HTTP/1.1 200 OK
            Content-Type: application/json
            Content-Length: 15
            Server: micro-h1

            {"status":"up"}"#}
        .replace('\n', "\r\n");

        let response = parse(input.as_bytes()).unwrap();

        assert_eq!(response.version(), Version::Http11);
        assert_eq!(response.status_code(), 200);
        assert_eq!(response.status_text(), "OK");
        assert_eq!(response.headers().len(), 3);
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(&response.body()[..], br#"{"status":"up"}"#);
    }

    #[test]
    fn reason_phrase_keeps_spaces() {
        let response = parse(b"HTTP/1.1 404 Not  Found at all\r\n\r\n").unwrap();
        assert_eq!(response.status_code(), 404);
        assert_eq!(response.status_text(), "Not  Found at all");

        let response = parse(b"HTTP/1.1 204 \r\n\r\n").unwrap();
        assert_eq!(response.status_text(), "");
        assert!(response.body().is_empty());
    }

    #[test]
    fn status_code_bounds() {
        assert_eq!(parse(b"HTTP/1.1 100 Continue\r\n\r\n").unwrap().status_code(), 100);
        assert_eq!(parse(b"HTTP/1.1 599 Custom\r\n\r\n").unwrap().status_code(), 599);

        for code in ["42", "700", "99", "600", "abc", "", "+200", "70000"] {
            let input = format!("HTTP/1.1 {code} Reason\r\n\r\n");
            assert!(matches!(parse(input.as_bytes()), Err(ParseError::InvalidStatusCode { .. })), "{code}");
        }
    }

    #[test]
    fn unrecognized_response_format() {
        for input in ["HTTP/1.1\r\n\r\n", "HTTP/1.1 200\r\n\r\n"] {
            assert!(matches!(parse(input.as_bytes()), Err(ParseError::UnrecognizedResponseFormat)), "{input}");
        }
    }

    #[test]
    fn no_response_line() {
        assert!(matches!(parse(b"\r\n\r\n"), Err(ParseError::NoResponseLine)));
    }

    #[test]
    fn invalid_http_version() {
        assert!(matches!(parse(b"HTTP/1.0 200 OK\r\n\r\n"), Err(ParseError::InvalidHttpVersion { .. })));
        assert!(matches!(parse(b"HTTP/2 200 OK\r\n\r\n"), Err(ParseError::InvalidHttpVersion { .. })));
    }

    #[test]
    fn headers_too_large() {
        let mut input = b"HTTP/1.1 200 OK\r\nX-Big: ".to_vec();
        input.resize(MAX_HEADER_BYTES + 1, b'a');

        assert!(matches!(parse(&input), Err(ParseError::HeadersTooLarge { .. })));
    }

    #[test]
    fn invalid_content_length() {
        let result = parse(b"HTTP/1.1 200 OK\r\nContent-Length: 12abc\r\n\r\n");
        assert!(matches!(result, Err(ParseError::InvalidContentLength { .. })));
    }

    #[test]
    fn body_unbounded_by_default() {
        let length = 11 * 1024 * 1024;
        let mut input = format!("HTTP/1.1 200 OK\r\nContent-Length: {length}\r\n\r\n").into_bytes();
        input.resize(input.len() + length, b'x');

        let response = parse(&input).unwrap();
        assert_eq!(response.body().len(), length);
    }

    #[test]
    fn optional_body_limit() {
        let decoder = ResponseDecoder::with_limits(Limits { max_response_body: Some(4), ..Limits::default() });

        let result = decoder.parse(&b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\n\r\nhello"[..]);
        assert!(matches!(result, Err(ParseError::BodyTooLarge { length: 5, max_size: 4 })));
    }

    #[test]
    fn truncated_body() {
        let result = parse(b"HTTP/1.1 200 OK\r\nContent-Length: 6\r\n\r\nHell");
        assert!(matches!(result, Err(ParseError::EndOfStream)));
    }

    #[test]
    fn decode_from_buffer() {
        let mut decoder = ResponseDecoder::new();
        let mut buffer = BytesMut::from(&b"HTTP/1.1 201 Created\r\nContent-Length: 6\r\n"[..]);

        assert!(decoder.decode(&mut buffer).unwrap().is_none());

        buffer.extend_from_slice(b"\r\nHellow");
        let response = decoder.decode(&mut buffer).unwrap().unwrap();

        assert_eq!(response.status_code(), 201);
        assert_eq!(&response.body()[..], b"Hellow");
        assert!(buffer.is_empty());
    }

    #[test]
    fn decode_eof_with_truncated_response() {
        let mut decoder = ResponseDecoder::new();
        let mut buffer = BytesMut::from(&b"HTTP/1.1 200 OK\r\nContent-Length: 6\r\n\r\nHel"[..]);

        assert!(decoder.decode(&mut buffer).unwrap().is_none());
        assert!(matches!(decoder.decode_eof(&mut buffer), Err(ParseError::EndOfStream)));

        let mut buffer = BytesMut::from(&b"HTTP/1.1 200 OK\r\n"[..]);
        assert!(matches!(decoder.decode_eof(&mut buffer), Err(ParseError::EndOfStream)));

        let mut buffer = BytesMut::new();
        assert!(decoder.decode_eof(&mut buffer).unwrap().is_none());
    }

    #[tokio::test]
    async fn framed_read_truncated_response() {
        let input: &[u8] = b"HTTP/1.1 200 OK\r\nContent-Length: 10\r\n\r\nabc";
        let mut framed = FramedRead::new(input, ResponseDecoder::new());

        assert!(matches!(framed.next().await, Some(Err(ParseError::EndOfStream))));
    }

    #[tokio::test]
    async fn framed_read_responses() {
        let input: &[u8] = b"HTTP/1.1 100 Continue\r\n\r\nHTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\nok";
        let mut framed = FramedRead::new(input, ResponseDecoder::new());

        assert_eq!(framed.next().await.unwrap().unwrap().status_code(), 100);

        let response = framed.next().await.unwrap().unwrap();
        assert_eq!(response.status_code(), 200);
        assert_eq!(&response.body()[..], b"ok");

        assert!(framed.next().await.is_none());
    }
}
