//! A [`ResponseWriter`] wrapper that records what the handler sent.

use std::io;

use http::{HeaderMap, StatusCode};

use crate::response::ResponseWriter;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum RecordedStatus {
    Unset,
    Set(StatusCode),
}

/// Wraps the real response sink and records the final status and the
/// number of body bytes written. Everything is forwarded unchanged.
pub struct Interceptor<'a> {
    inner: &'a mut dyn ResponseWriter,
    status: RecordedStatus,
    bytes_written: usize,
}

impl<'a> Interceptor<'a> {
    pub fn new(inner: &'a mut dyn ResponseWriter) -> Self {
        Self { inner, status: RecordedStatus::Unset, bytes_written: 0 }
    }

    /// The first status the handler wrote, `200 OK` if it wrote none.
    pub fn final_status(&self) -> StatusCode {
        match self.status {
            RecordedStatus::Set(status) => status,
            RecordedStatus::Unset => StatusCode::OK,
        }
    }

    /// Whether the handler wrote a status, explicitly or by writing a body.
    #[cfg(test)]
    fn status_written(&self) -> bool {
        self.status != RecordedStatus::Unset
    }

    pub fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    fn record(&mut self, status: StatusCode) {
        if self.status == RecordedStatus::Unset {
            self.status = RecordedStatus::Set(status);
        }
    }
}

impl ResponseWriter for Interceptor<'_> {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        self.inner.headers_mut()
    }

    fn write_status(&mut self, status: StatusCode) {
        self.record(status);
        self.inner.write_status(status);
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.record(StatusCode::OK);
        let n = self.inner.write(buf)?;
        self.bytes_written += n;
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::Response;

    #[test]
    fn defaults_to_ok_when_untouched() {
        let mut res = Response::new();
        let w = Interceptor::new(&mut res);
        assert!(!w.status_written());
        assert_eq!(w.final_status(), StatusCode::OK);
        assert_eq!(w.bytes_written(), 0);
    }

    #[test]
    fn repeated_writes_record_ok_once() {
        let mut res = Response::new();
        let mut w = Interceptor::new(&mut res);
        w.write_all(b"te").unwrap();
        w.write_all(b"st").unwrap();
        w.write_status(StatusCode::BAD_GATEWAY);

        assert_eq!(w.final_status(), StatusCode::OK);
        assert_eq!(w.bytes_written(), 4);
        assert_eq!(res.body(), b"test");
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[test]
    fn first_explicit_status_wins() {
        let mut res = Response::new();
        let mut w = Interceptor::new(&mut res);
        w.write_status(StatusCode::ACCEPTED);
        w.write_status(StatusCode::NOT_FOUND);
        w.write_all(b"{}").unwrap();

        assert_eq!(w.final_status(), StatusCode::ACCEPTED);
        assert_eq!(res.status(), StatusCode::ACCEPTED);
    }

    #[test]
    fn explicit_ok_is_distinct_from_unset() {
        let mut res = Response::new();
        let mut w = Interceptor::new(&mut res);
        w.write_status(StatusCode::OK);
        assert!(w.status_written());
    }

    #[test]
    fn headers_reach_the_sink() {
        let mut res = Response::new();
        let mut w = Interceptor::new(&mut res);
        w.text("hi").unwrap();
        assert_eq!(w.bytes_written(), 2);
        assert_eq!(res.headers()["content-type"], "text/plain; charset=utf-8");
    }
}
