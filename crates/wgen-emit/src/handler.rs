//! Host-side model of the generated handler contract
//!
//! The emitted handlers run on the device, but their response behaviour is
//! fixed by the scaffold's `staticResponder`. `StaticResponder` mirrors it so
//! the contract can be exercised without a device.

/// Request method as seen by a handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Get,
    Post,
    /// Header-only request: status and headers, never a body
    Head,
}

/// The connection side of the handler contract
pub trait Connection {
    /// Send a success status, optionally with a `Content-Type`
    fn http_success(&mut self, mime: Option<&str>);
    /// Send a failure status. Static pages never fail; dynamic handlers
    /// use it to refuse methods they do not support.
    fn http_fail(&mut self);
    /// Write body bytes
    fn write(&mut self, bytes: &[u8]);
}

/// Body of a static page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body<'a> {
    /// Read up to the first NUL, like `printP`
    Text(&'a str),
    /// Exactly this many bytes, like `writeP`
    Binary(&'a [u8]),
}

impl Body<'_> {
    /// Bytes the device would put on the wire
    pub fn wire_bytes(&self) -> &[u8] {
        match self {
            Body::Text(text) => text.as_bytes().split(|b| *b == 0).next().unwrap_or_default(),
            Body::Binary(bytes) => bytes,
        }
    }
}

/// Mirror of a generated static handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticResponder<'a> {
    pub mime: &'a str,
    pub body: Body<'a>,
}

impl StaticResponder<'_> {
    /// Signal success with the page's MIME type, then write the body unless
    /// the request is header-only.
    ///
    /// POST is answered like GET: a static page has nothing to refuse.
    pub fn respond<C: Connection + ?Sized>(&self, conn: &mut C, request: RequestKind) {
        conn.http_success(Some(self.mime));
        if request != RequestKind::Head {
            conn.write(self.body.wire_bytes());
        }
    }
}
