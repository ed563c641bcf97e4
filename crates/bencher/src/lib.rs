//! Wire fixtures shared by the codec benchmarks.

/// Which decoder a fixture is meant for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MessageKind {
    Request,
    Response,
}

/// A raw HTTP/1.1 message embedded at compile time.
#[derive(Debug, Copy, Clone)]
pub struct Fixture {
    file_name: &'static str,
    content: &'static [u8],
}

impl Fixture {
    pub const fn new(file_name: &'static str, content: &'static [u8]) -> Self {
        Self { file_name, content }
    }

    pub fn content(&self) -> &'static [u8] {
        self.content
    }

    pub fn file_name(&self) -> &'static str {
        self.file_name
    }
}

/// A named benchmark input.
#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    kind: MessageKind,
    fixture: Fixture,
}

impl TestCase {
    pub fn request(name: &'static str, fixture: Fixture) -> Self {
        Self { name, kind: MessageKind::Request, fixture }
    }

    pub fn response(name: &'static str, fixture: Fixture) -> Self {
        Self { name, kind: MessageKind::Response, fixture }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    pub fn fixture(&self) -> &Fixture {
        &self.fixture
    }

    /// Size of the fixture in bytes, for throughput reporting.
    pub fn size(&self) -> u64 {
        self.fixture.content.len() as u64
    }
}
