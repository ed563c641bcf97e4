//! Protocol versions. Only HTTP/1.1 exists here.

use std::fmt;

/// HTTP protocol version of a parsed or built message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Version {
    #[default]
    Http11,
}

impl Version {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Version::Http11 => "HTTP/1.1",
        }
    }

    /// Accepts exactly the `HTTP/1.1` literal.
    pub fn from_bytes(token: &[u8]) -> Option<Version> {
        (token == Version::Http11.as_str().as_bytes()).then_some(Version::Http11)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Version> for http::Version {
    fn from(version: Version) -> Self {
        match version {
            Version::Http11 => http::Version::HTTP_11,
        }
    }
}
