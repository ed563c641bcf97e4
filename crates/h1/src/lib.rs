//! A small, blocking HTTP/1.1 message codec
//!
//! This crate turns raw bytes into complete [`Request`](protocol::Request) and
//! [`Response`](protocol::Response) values and turns responses back into wire bytes.
//! It is meant to sit below a transport layer: sockets, TLS, keep-alive and routing
//! live in the code that uses it.
//!
//! # Features
//!
//! - HTTP/1.1 only, with exact request-line and status-line tokenization
//! - Case-insensitive header map with lowercase names and replace-on-set semantics
//! - `Content-Length` framed bodies
//! - Header block limit of 8 KiB and request body limit of 10 MiB, configurable
//!   through [`codec::Limits`]
//! - Blocking parsing from any [`std::io::Read`], plus `tokio-util` codec adapters
//!   for buffered transports
//!
//! # Example
//!
//! ```
//! use micro_h1::codec::RequestDecoder;
//! use micro_h1::protocol::{Method, Response, ResponseConfig};
//!
//! let mut stream = &b"GET /hello HTTP/1.1\r\nHost: localhost:3668\r\nAccept: */*\r\n\r\n"[..];
//! let request = RequestDecoder::new().parse(&mut stream).unwrap();
//!
//! assert_eq!(request.method(), Method::Get);
//! assert_eq!(request.header("accept"), Some("*/*"));
//!
//! let mut response = Response::new(ResponseConfig::new(201, "Created"));
//! response.set_header("Content-Type", "text/plain");
//! response.set_body("Hellow");
//!
//! let mut wire = Vec::new();
//! response.write_to(&mut wire).unwrap();
//! assert!(wire.starts_with(b"HTTP/1.1 201 Created\r\n"));
//! ```
//!
//! # Architecture
//!
//! - [`protocol`]: message types, vocabulary and errors
//! - [`codec`]: decoders and the response encoder
//!
//! # Error Handling
//!
//! - [`protocol::ParseError`]: every way a request or response parse can fail
//! - [`protocol::SendError`]: failures while writing a response
//! - [`protocol::HttpError`]: both, for transport code
//!
//! # Limitations
//!
//! - No chunked transfer encoding, compression or multipart bodies
//! - No HTTP/1.0, HTTP/2 or HTTP/3
//! - One message per parse call; connection state is the caller's business

pub mod codec;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
