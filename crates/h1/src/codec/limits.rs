//! Size limits applied while parsing.

/// Maximum size in bytes of a header block, terminator included.
pub const MAX_HEADER_BYTES: usize = 8 * 1024;

/// Maximum request body size in bytes accepted through `content-length`.
pub const MAX_REQUEST_BODY: u64 = 10 * 1024 * 1024;

/// Bounds enforced by [`RequestDecoder`](super::RequestDecoder) and
/// [`ResponseDecoder`](super::ResponseDecoder).
///
/// Response bodies are unbounded by default: a client is expected to trust the
/// server it talks to more than a server trusts its clients. Set
/// `max_response_body` to opt into a bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Largest header block accepted, terminator included.
    pub max_header_bytes: usize,
    /// Largest `content-length` a request may declare.
    pub max_request_body: u64,
    /// Largest `content-length` a response may declare; `None` means unbounded.
    pub max_response_body: Option<u64>,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_header_bytes: MAX_HEADER_BYTES, max_request_body: MAX_REQUEST_BODY, max_response_body: None }
    }
}
