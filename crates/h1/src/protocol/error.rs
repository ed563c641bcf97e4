use std::io;
use thiserror::Error;

/// Top-level error for transport code that both parses and sends messages.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("request error: {source}")]
    RequestError {
        #[from]
        source: ParseError,
    },

    #[error("response error: {source}")]
    ResponseError {
        #[from]
        source: SendError,
    },
}

/// Failure of a single request or response parse.
///
/// Every variant is terminal: the parse that produced it returned no message and
/// kept none of the bytes it had read.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("missing request line")]
    NoRequestLine,

    #[error("missing response status line")]
    NoResponseLine,

    #[error("unknown http method: {method}")]
    MethodNotFound { method: String },

    #[error("request line is not `METHOD TARGET VERSION`")]
    UnrecognizedRequestFormat,

    #[error("status line is not `VERSION STATUS REASON`")]
    UnrecognizedResponseFormat,

    #[error("invalid http version: {version}")]
    InvalidHttpVersion { version: String },

    #[error("invalid status code: {code}")]
    InvalidStatusCode { code: String },

    #[error("invalid header: {reason}")]
    InvalidHeader { reason: String },

    #[error("invalid content-length header: {reason}")]
    InvalidContentLength { reason: String },

    #[error("header size too large, current: {current_size} exceed the limit {max_size}")]
    HeadersTooLarge { current_size: usize, max_size: usize },

    #[error("body size too large, content-length: {length} exceed the limit {max_size}")]
    BodyTooLarge { length: u64, max_size: u64 },

    #[error("unexpected end of stream")]
    EndOfStream,

    #[error("io error: {source}")]
    Io { source: io::Error },
}

impl ParseError {
    pub fn method_not_found<S: ToString>(method: S) -> Self {
        Self::MethodNotFound { method: method.to_string() }
    }

    pub fn invalid_http_version<S: ToString>(version: S) -> Self {
        Self::InvalidHttpVersion { version: version.to_string() }
    }

    pub fn invalid_status_code<S: ToString>(code: S) -> Self {
        Self::InvalidStatusCode { code: code.to_string() }
    }

    pub fn invalid_header<S: ToString>(str: S) -> Self {
        Self::InvalidHeader { reason: str.to_string() }
    }

    pub fn invalid_content_length<S: ToString>(str: S) -> Self {
        Self::InvalidContentLength { reason: str.to_string() }
    }

    pub fn headers_too_large(current_size: usize, max_size: usize) -> Self {
        Self::HeadersTooLarge { current_size, max_size }
    }

    pub fn body_too_large(length: u64, max_size: u64) -> Self {
        Self::BodyTooLarge { length, max_size }
    }

    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::from(e.into())
    }
}

/// A short read surfaces as [`ParseError::EndOfStream`], everything else as
/// [`ParseError::Io`].
impl From<io::Error> for ParseError {
    fn from(source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::UnexpectedEof => Self::EndOfStream,
            _ => Self::Io { source },
        }
    }
}

/// Failure while writing a serialized response to its sink.
#[derive(Error, Debug)]
pub enum SendError {
    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl SendError {
    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }
}
