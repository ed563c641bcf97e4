//! Serialization of a response status line and header fields.

use bytes::{BufMut, BytesMut};

use crate::protocol::Response;

/// Initial buffer size reserved for the status line and headers
const INIT_HEADER_SIZE: usize = 4 * 1024;

/// Writes `VERSION SP CODE SP TEXT CRLF`, one `name: value CRLF` per header in
/// iteration order, and the blank line that ends the block.
///
/// No header is added, removed or validated here: what the [`Response`] holds is
/// what goes on the wire.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct HeaderEncoder;

impl HeaderEncoder {
    pub(crate) fn encode(self, response: &Response, dst: &mut BytesMut) {
        dst.reserve(INIT_HEADER_SIZE);

        dst.put_slice(response.version().as_str().as_bytes());
        dst.put_u8(b' ');
        dst.put_slice(response.status_code().to_string().as_bytes());
        dst.put_u8(b' ');
        dst.put_slice(response.status_text().as_bytes());
        dst.put_slice(b"\r\n");

        for (name, value) in response.headers() {
            dst.put_slice(name.as_bytes());
            dst.put_slice(b": ");
            dst.put_slice(value.as_bytes());
            dst.put_slice(b"\r\n");
        }
        dst.put_slice(b"\r\n");
    }
}
