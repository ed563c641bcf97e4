//! Decoder for message bodies framed by the `Content-Length` header, as defined in
//! [RFC 9112 Section 6.3](https://www.rfc-editor.org/rfc/rfc9112#section-6.3).

use std::io::Read;

use bytes::{Buf, Bytes, BytesMut};
use tracing::trace;

use crate::ensure;
use crate::protocol::{Headers, ParseError};

/// Upper bound of the buffer allocated before any body byte has been read
const INIT_BODY_CAPACITY: u64 = 64 * 1024;

/// Reads a body of exactly `length` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LengthDecoder {
    length: u64,
}

impl LengthDecoder {
    pub(crate) fn new(length: u64) -> Self {
        Self { length }
    }

    /// Builds the decoder for the `content-length` of `headers`, checked against
    /// `max_size`. A missing header means an empty body.
    ///
    /// # Errors
    ///
    /// - [`ParseError::InvalidContentLength`] if the value is not a decimal integer
    /// - [`ParseError::BodyTooLarge`] if it exceeds `max_size`
    pub(crate) fn from_headers(headers: &Headers, max_size: Option<u64>) -> Result<Self, ParseError> {
        let length = content_length(headers)?.unwrap_or(0);

        if let Some(max_size) = max_size {
            ensure!(length <= max_size, ParseError::body_too_large(length, max_size));
        }

        Ok(Self::new(length))
    }

    pub(crate) fn length(&self) -> u64 {
        self.length
    }

    /// Reads the whole body from `src`.
    ///
    /// The buffer grows with the bytes actually received, so a large declared
    /// length alone does not allocate.
    ///
    /// # Errors
    ///
    /// [`ParseError::EndOfStream`] if `src` ends before `length` bytes.
    pub(crate) fn read_from<R: Read>(&self, src: R) -> Result<Bytes, ParseError> {
        if self.length == 0 {
            return Ok(Bytes::new());
        }

        let capacity = usize::try_from(self.length.min(INIT_BODY_CAPACITY)).unwrap_or_default();
        let mut body = Vec::with_capacity(capacity);
        src.take(self.length).read_to_end(&mut body)?;

        trace!(expected = self.length, read = body.len(), "read body");
        ensure!(body.len() as u64 == self.length, ParseError::EndOfStream);

        Ok(Bytes::from(body))
    }

    /// Splits the head and the body off `src` once both are buffered.
    ///
    /// `head_len` is the size of the header block including its terminator. Returns
    /// `Ok(None)` and leaves `src` untouched while the body is incomplete.
    pub(crate) fn split_from(&self, src: &mut BytesMut, head_len: usize) -> Result<Option<Bytes>, ParseError> {
        let length = usize::try_from(self.length).map_err(|e| ParseError::invalid_content_length(e.to_string()))?;

        match head_len.checked_add(length) {
            Some(total) if src.len() >= total => {
                src.advance(head_len);
                Ok(Some(src.split_to(length).freeze()))
            }
            Some(_) => Ok(None),
            None => Err(ParseError::invalid_content_length(format!("value {length} overflows the buffer"))),
        }
    }
}

/// Parses the `content-length` header, if present.
fn content_length(headers: &Headers) -> Result<Option<u64>, ParseError> {
    let Some(value) = headers.get("content-length") else {
        return Ok(None);
    };

    ensure!(
        !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()),
        ParseError::invalid_content_length(format!("value {value} is not a non-negative integer"))
    );

    value.parse::<u64>().map(Some).map_err(|e| ParseError::invalid_content_length(format!("value {value}: {e}")))
}
