//! Accumulation of the header block, bounded by the header size limit.

use std::io::{self, Read};

use bytes::{BufMut, BytesMut};
use tracing::{debug, trace};

use crate::ensure;
use crate::protocol::ParseError;

/// Marks the end of a header block.
pub(crate) const HEAD_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Initial buffer size allocated for the header block
const INIT_HEAD_CAPACITY: usize = 1024;

/// Reads from `src` one byte at a time until `CRLF CRLF`.
///
/// Returns the header block without its terminator. Nothing past the terminator is
/// consumed, so the body can be read from the same source afterwards.
///
/// # Errors
///
/// - [`ParseError::HeadersTooLarge`] once `max_size` bytes were read without a
///   terminator
/// - [`ParseError::EndOfStream`] if the source ends first
pub(crate) fn read_head<R: Read>(mut src: R, max_size: usize) -> Result<BytesMut, ParseError> {
    let mut head = BytesMut::with_capacity(INIT_HEAD_CAPACITY.min(max_size));
    let mut byte = [0u8; 1];

    while !head.ends_with(HEAD_TERMINATOR) {
        ensure!(head.len() < max_size, ParseError::headers_too_large(head.len(), max_size));

        match src.read(&mut byte) {
            Ok(0) => {
                debug!(read = head.len(), "stream ended inside header block");
                return Err(ParseError::EndOfStream);
            }
            Ok(_) => head.put_u8(byte[0]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }

    trace!(head_size = head.len(), "read header block");
    head.truncate(head.len() - HEAD_TERMINATOR.len());
    Ok(head)
}

/// Locates the end of the header block inside `buf`.
///
/// Returns the offset just past `CRLF CRLF`, or `None` when more bytes are needed.
///
/// # Errors
///
/// [`ParseError::HeadersTooLarge`] when the first `max_size` bytes hold no
/// terminator.
pub(crate) fn find_head_end(buf: &[u8], max_size: usize) -> Result<Option<usize>, ParseError> {
    let searchable = &buf[..buf.len().min(max_size)];

    if let Some(position) = searchable.windows(HEAD_TERMINATOR.len()).position(|window| window == HEAD_TERMINATOR) {
        return Ok(Some(position + HEAD_TERMINATOR.len()));
    }

    ensure!(buf.len() < max_size, ParseError::headers_too_large(buf.len(), max_size));
    Ok(None)
}
