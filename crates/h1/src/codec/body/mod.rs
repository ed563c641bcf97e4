//! Message body framing.
//!
//! Only `Content-Length` framing exists: a message either declares its exact body
//! length or has no body. [`LengthDecoder`] reads that many bytes from a reader or
//! splits them off a buffered frame.

mod length_decoder;

pub(crate) use length_decoder::LengthDecoder;
