//! Decoding of a header block into its start line and header fields.
//!
//! The block is split on `CRLF`. The first line is returned untouched for the
//! request or response codec to tokenize; every following line is a header field
//! of the form `NAME ":" OWS VALUE OWS`.
//!
//! Field lines are handled leniently:
//!
//! - a line without a colon is skipped
//! - the name is trimmed and lowercased, the value is trimmed; an empty name is
//!   stored as `""`
//! - a repeated name replaces the earlier value
//!
//! Names and values must be UTF-8; anything else is rejected as
//! [`ParseError::InvalidHeader`].

use std::str;

use tracing::debug;

use crate::protocol::{Headers, ParseError};
use crate::utils::trim_ows;

/// Decoder for header blocks that have already been stripped of their terminator.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct HeaderDecoder;

impl HeaderDecoder {
    /// Splits `head` into its start line and the remaining field lines.
    ///
    /// The start line is empty when the block is empty or begins with `CRLF`.
    pub(crate) fn split_start_line(head: &[u8]) -> (&[u8], Lines<'_>) {
        let mut lines = Lines { rest: Some(head) };
        let start_line = lines.next().unwrap_or_default();
        (start_line, lines)
    }

    /// Decodes every field line into a [`Headers`] map.
    pub(crate) fn decode_fields(lines: Lines<'_>) -> Result<Headers, ParseError> {
        let mut headers = Headers::new();

        for line in lines {
            let Some(colon) = line.iter().position(|b| *b == b':') else {
                debug!(line = %String::from_utf8_lossy(line), "skip header line without colon");
                continue;
            };

            let name = str::from_utf8(trim_ows(&line[..colon]))
                .map_err(|e| ParseError::invalid_header(format!("header name is not utf-8: {e}")))?;
            let value = str::from_utf8(trim_ows(&line[colon + 1..]))
                .map_err(|e| ParseError::invalid_header(format!("value of {name} is not utf-8: {e}")))?;

            headers.set(name, value);
        }

        Ok(headers)
    }
}

/// Iterator over the `CRLF` separated lines of a header block.
///
/// Like `split`, an empty block yields a single empty line.
#[derive(Debug, Clone)]
pub(crate) struct Lines<'a> {
    rest: Option<&'a [u8]>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;

        match rest.windows(2).position(|window| window == b"\r\n") {
            Some(end) => {
                self.rest = Some(&rest[end + 2..]);
                Some(&rest[..end])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn crlf(text: &str) -> String {
        text.replace('\n', "\r\n")
    }

    #[test]
    fn split_lines() {
        let (start_line, lines) = HeaderDecoder::split_start_line(b"GET / HTTP/1.1\r\nA: 1\r\n\r\nB: 2");

        assert_eq!(start_line, b"GET / HTTP/1.1");
        let expected: [&[u8]; 3] = [b"A: 1", b"", b"B: 2"];
        assert_eq!(lines.collect::<Vec<_>>(), expected);

        let (start_line, mut lines) = HeaderDecoder::split_start_line(b"");
        assert_eq!(start_line, b"");
        assert_eq!(lines.next(), None);

        let (start_line, lines) = HeaderDecoder::split_start_line(b"\r\nHost: a");
        assert_eq!(start_line, b"");
        assert_eq!(lines.count(), 1);
    }

    #[test]
    fn from_curl() {
        let head = crlf(indoc! {r##"
        GET /index.html HTTP/1.1
        Host: 127.0.0.1:8080
        User-Agent: curl/7.79.1
        Accept: */*"##});

        let (_, lines) = HeaderDecoder::split_start_line(head.as_bytes());
        let headers = HeaderDecoder::decode_fields(lines).unwrap();

        assert_eq!(headers.len(), 3);
        assert_eq!(headers.get("host"), Some("127.0.0.1:8080"));
        assert_eq!(headers.get("User-Agent"), Some("curl/7.79.1"));
        assert_eq!(headers.get("ACCEPT"), Some("*/*"));
        assert_eq!(headers.get("Encoding"), None);
    }

    #[test]
    fn from_edge() {
        let head = crlf(indoc! {r##"
        GET /index/?a=1&b=2&a=3 HTTP/1.1
        Host: 127.0.0.1:8080
        Connection: keep-alive
        Cache-Control: max-age=0
        sec-ch-ua: "#Not_A Brand";v="99", "Microsoft Edge";v="109", "Chromium";v="109"
        sec-ch-ua-mobile: ?0
        sec-ch-ua-platform: "macOS"
        Upgrade-Insecure-Requests: 1
        User-Agent: Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/109.0.0.0 Safari/537.36 Edg/109.0.1518.52
        Accept: text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.9
        Sec-Fetch-Site: none
        Sec-Fetch-Mode: navigate
        Sec-Fetch-User: ?1
        Sec-Fetch-Dest: document
        Accept-Encoding: gzip, deflate, br
        Accept-Language: zh-CN,zh;q=0.9,en-US;q=0.8,en;q=0.7"##});

        let (start_line, lines) = HeaderDecoder::split_start_line(head.as_bytes());
        let headers = HeaderDecoder::decode_fields(lines).unwrap();

        assert_eq!(start_line, b"GET /index/?a=1&b=2&a=3 HTTP/1.1");
        assert_eq!(headers.len(), 15);
        assert_eq!(headers.get("connection"), Some("keep-alive"));
        assert_eq!(headers.get("sec-ch-ua"), Some(r##""#Not_A Brand";v="99", "Microsoft Edge";v="109", "Chromium";v="109""##));
        assert_eq!(headers.get("sec-ch-ua-platform"), Some("\"macOS\""));
        assert_eq!(headers.get("Sec-Fetch-User"), Some("?1"));
        assert_eq!(headers.get("accept-language"), Some("zh-CN,zh;q=0.9,en-US;q=0.8,en;q=0.7"));
        assert!(headers.iter().all(|(name, _)| name.bytes().all(|b| !b.is_ascii_uppercase())));
    }

    #[test]
    fn lenient_field_lines() {
        let head = b"HTTP/1.1 200 OK\r\nno colon here\r\n: empty name\r\n \tX-Pad \t:  padded value\t \r\nX-Pad: second\r\nEmpty:\r\nUrl: http://a:1/";

        let (_, lines) = HeaderDecoder::split_start_line(head);
        let headers = HeaderDecoder::decode_fields(lines).unwrap();

        assert_eq!(headers.len(), 4);
        assert_eq!(headers.get(""), Some("empty name"));
        assert_eq!(headers.get("x-pad"), Some("second"));
        assert_eq!(headers.get("empty"), Some(""));
        assert_eq!(headers.get("url"), Some("http://a:1/"));
    }

    #[test]
    fn rejects_non_utf8_value() {
        let (_, lines) = HeaderDecoder::split_start_line(b"GET / HTTP/1.1\r\nX-Bin: \xff\xfe");

        let error = HeaderDecoder::decode_fields(lines).unwrap_err();
        assert!(matches!(error, ParseError::InvalidHeader { .. }));
    }
}
