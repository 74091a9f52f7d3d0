//! Response sink trait and the buffered [`Response`] the server sends.
//!
//! Handlers never build a response value. They write into a
//! [`ResponseWriter`]: headers first, then an optional status, then body
//! bytes. Middleware can wrap the writer to observe what goes through it.

use std::io;

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderValue, StatusCode};
use http_body_util::Full;
use tracing::debug;

// ── ContentType ───────────────────────────────────────────────────────────────

/// Common content-type values for use with [`ResponseWriter::bytes`].
#[derive(Clone, Copy, Debug)]
pub enum ContentType {
    Csv,          // text/csv
    EventStream,  // text/event-stream  (SSE)
    Html,         // text/html; charset=utf-8
    Json,         // application/json
    OctetStream,  // application/octet-stream
    Text,         // text/plain; charset=utf-8
    Xml,          // application/xml
}

impl ContentType {
    fn as_str(self) -> &'static str {
        match self {
            Self::Csv         => "text/csv",
            Self::EventStream => "text/event-stream",
            Self::Html        => "text/html; charset=utf-8",
            Self::Json        => "application/json",
            Self::OctetStream => "application/octet-stream",
            Self::Text        => "text/plain; charset=utf-8",
            Self::Xml         => "application/xml",
        }
    }
}

// ── ResponseWriter ────────────────────────────────────────────────────────────

/// Where a handler writes its response.
///
/// Semantics follow HTTP: the first status written is the one sent, and a
/// body write without an explicit status implies `200 OK`. Header changes
/// must happen before the first status or body write to be meaningful.
pub trait ResponseWriter {
    /// Response headers, for inspection or mutation.
    fn headers_mut(&mut self) -> &mut HeaderMap;

    /// Sets the response status. Only the first call takes effect.
    fn write_status(&mut self, status: StatusCode);

    /// Writes body bytes, returning how many were accepted.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;

    /// Writes the whole buffer, looping over short writes.
    fn write_all(&mut self, mut buf: &[u8]) -> io::Result<()> {
        while !buf.is_empty() {
            match self.write(buf)? {
                0 => return Err(io::ErrorKind::WriteZero.into()),
                n => buf = &buf[n..],
            }
        }
        Ok(())
    }

    /// Sets `content-type` and writes `body`.
    fn bytes(&mut self, content_type: ContentType, body: &[u8]) -> io::Result<()> {
        self.headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(content_type.as_str()));
        self.write_all(body)
    }

    /// `text/plain; charset=utf-8` body.
    fn text(&mut self, body: &str) -> io::Result<()> {
        self.bytes(ContentType::Text, body.as_bytes())
    }

    /// `application/json` body. Pass the bytes straight from your serialiser.
    fn json(&mut self, body: &[u8]) -> io::Result<()> {
        self.bytes(ContentType::Json, body)
    }
}

// ── Response ──────────────────────────────────────────────────────────────────

/// A fully buffered response.
///
/// The server hands one of these to the application for every request and
/// sends it once the application returns. It is also the natural sink for
/// driving handlers in tests:
///
/// ```rust
/// use tsu::{Response, ResponseWriter, StatusCode};
///
/// let mut res = Response::new();
/// res.text("hello").unwrap();
/// assert_eq!(res.status(), StatusCode::OK);
/// assert_eq!(res.body(), b"hello");
/// ```
#[derive(Debug, Default)]
pub struct Response {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    /// The status that will be sent: the first one written, or `200 OK`.
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    pub fn headers(&self) -> &HeaderMap { &self.headers }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Converts into the `http` type hyper sends on the wire.
    pub fn into_http(self) -> http::Response<Full<Bytes>> {
        let status = self.status();
        let mut res = http::Response::new(Full::new(Bytes::from(self.body)));
        *res.status_mut() = status;
        *res.headers_mut() = self.headers;
        res
    }
}

impl ResponseWriter for Response {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn write_status(&mut self, status: StatusCode) {
        match self.status {
            None => self.status = Some(status),
            Some(sent) => debug!(%sent, ignored = %status, "superfluous status write"),
        }
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.status.is_none() {
            self.status = Some(StatusCode::OK);
        }
        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }
}
