//! Serialization of [`Response`] values into wire bytes.

use bytes::{BufMut, BytesMut};
use tokio_util::codec::Encoder;
use tracing::trace;

use crate::codec::header::HeaderEncoder;
use crate::protocol::{Response, SendError};

/// Encoder writing a whole response: status line, headers, blank line, body.
///
/// The response is read, never modified; the `content-length` it carries is the one
/// maintained by [`Response::set_body`] or set by the caller.
#[derive(Debug, Clone, Default)]
pub struct ResponseEncoder {
    header_encoder: HeaderEncoder,
}

impl ResponseEncoder {
    pub fn new() -> Self {
        Default::default()
    }

    pub(crate) fn encode_response(response: &Response, dst: &mut BytesMut) {
        Self::new().encode_into(response, dst);
    }

    fn encode_into(&self, response: &Response, dst: &mut BytesMut) {
        let start = dst.len();

        self.header_encoder.encode(response, dst);
        dst.put_slice(response.body());

        trace!(status_code = response.status_code(), encoded_size = dst.len() - start, "encoded response");
    }
}

impl Encoder<&Response> for ResponseEncoder {
    type Error = SendError;

    fn encode(&mut self, item: &Response, dst: &mut BytesMut) -> Result<(), Self::Error> {
        self.encode_into(item, dst);
        Ok(())
    }
}

impl Encoder<Response> for ResponseEncoder {
    type Error = SendError;

    fn encode(&mut self, item: Response, dst: &mut BytesMut) -> Result<(), Self::Error> {
        self.encode_into(&item, dst);
        Ok(())
    }
}
