//! Message types and vocabulary of the codec.
//!
//! - [`Method`] and [`Version`]: the closed sets of request methods and protocol
//!   versions the parsers accept
//! - [`Headers`]: case-insensitive header map with replace-on-set semantics
//! - [`Request`]: a parsed request with its owned body
//! - [`Response`] and [`ResponseConfig`]: a parsed or built response
//! - [`ParseError`], [`SendError`], [`HttpError`]: failures of the codec
//!
//! Every message value owns all of its strings and bytes; dropping it releases them.

mod method;
pub use method::Method;

mod version;
pub use version::Version;

mod header;
pub use header::Headers;
pub use header::Iter as HeaderIter;

mod request;
pub use request::Request;

mod response;
pub use response::Response;
pub use response::ResponseConfig;

mod error;
pub use error::HttpError;
pub use error::ParseError;
pub use error::SendError;
