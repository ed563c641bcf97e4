//! HTTP/1.1 codec module for decoding and encoding whole messages
//!
//! # Architecture
//!
//! - Request handling:
//!   - [`RequestDecoder`]: parses a request from a blocking reader or a buffer
//! - Response handling:
//!   - [`ResponseDecoder`]: parses a response, for client side use
//!   - [`ResponseEncoder`]: serializes a [`Response`](crate::protocol::Response)
//! - Shared parts:
//!   - header block reading, field decoding and encoding in `header`
//!   - `content-length` body framing in `body`
//!   - [`Limits`]: header and body size bounds
//!
//! Each decoder works in two ways. `parse` reads exactly one message from a
//! blocking [`std::io::Read`] source and never reads past its end. The
//! [`tokio_util::codec::Decoder`] implementation serves transports that buffer
//! input themselves: it returns `None` until a whole message is buffered, then
//! parses it in one pass with the same rules.
//!
//! # Example
//!
//! ```
//! use micro_h1::codec::{RequestDecoder, ResponseEncoder};
//! use micro_h1::protocol::{Response, ResponseConfig};
//! use tokio_util::codec::{Decoder, Encoder};
//! use bytes::BytesMut;
//!
//! let mut buffer = BytesMut::from(&b"GET /ping HTTP/1.1\r\nHost: localhost\r\n\r\n"[..]);
//! let request = RequestDecoder::new().decode(&mut buffer).unwrap().unwrap();
//! assert_eq!(request.target(), "/ping");
//!
//! let mut response = Response::new(ResponseConfig::default());
//! response.set_body("pong");
//!
//! let mut out = BytesMut::new();
//! ResponseEncoder::new().encode(&response, &mut out).unwrap();
//! assert!(out.ends_with(b"\r\n\r\npong"));
//! ```

mod body;
mod header;
pub(crate) mod limits;
mod request_decoder;
mod response_decoder;
mod response_encoder;

pub use limits::{Limits, MAX_HEADER_BYTES, MAX_REQUEST_BODY};
pub use request_decoder::RequestDecoder;
pub use response_decoder::ResponseDecoder;
pub use response_encoder::ResponseEncoder;
