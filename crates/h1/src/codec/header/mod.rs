//! Header block handling shared by the request and response codecs.
//!
//! - [`read_head`] / [`find_head_end`]: collect the bytes up to `CRLF CRLF` from a
//!   reader or locate them in a buffer, enforcing the header size limit
//! - [`HeaderDecoder`]: splits a header block into its start line and a [`Headers`]
//!   map
//! - [`HeaderEncoder`]: writes a response status line and header fields
//!
//! [`Headers`]: crate::protocol::Headers

mod head_reader;
mod header_decoder;
mod header_encoder;

pub(crate) use head_reader::{find_head_end, read_head, HEAD_TERMINATOR};
pub(crate) use header_decoder::HeaderDecoder;
pub(crate) use header_encoder::HeaderEncoder;
