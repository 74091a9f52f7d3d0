//! Incoming HTTP request type.

use std::collections::HashMap;

/// An incoming HTTP request.
///
/// The server fills one of these per request; tests and embedders can build
/// their own with [`Request::new`] and the `with_*` setters.
#[derive(Clone, Debug, Default)]
pub struct Request {
    pub(crate) method: String,
    pub(crate) path: String,
    pub(crate) raw_path: String,
    pub(crate) remote_addr: String,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Vec<u8>,
    pub(crate) params: HashMap<String, String>,
}

impl Request {
    /// A request with the given method token and decoded path. Everything
    /// else starts empty.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self { method: method.into(), path: path.into(), ..Self::default() }
    }

    /// Sets the escaped form of the path as it appeared on the wire.
    pub fn with_raw_path(mut self, raw_path: impl Into<String>) -> Self {
        self.raw_path = raw_path.into();
        self
    }

    /// Sets the peer address, normally `ip:port`.
    pub fn with_remote_addr(mut self, addr: impl Into<String>) -> Self {
        self.remote_addr = addr.into();
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn method(&self) -> &str { &self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn raw_path(&self) -> &str { &self.raw_path }
    pub fn remote_addr(&self) -> &str { &self.remote_addr }
    pub fn headers(&self) -> &[(String, String)] { &self.headers }
    pub fn body(&self) -> &[u8] { &self.body }

    /// The path used for route matching: the raw (escaped) form when the
    /// request carries one, the decoded path otherwise.
    pub fn routing_path(&self) -> &str {
        if self.raw_path.is_empty() { &self.path } else { &self.raw_path }
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/users/{id}`, `req.param("id")` on `/users/42` returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routing_path_prefers_raw() {
        let req = Request::new("GET", "/a b").with_raw_path("/a%20b");
        assert_eq!(req.routing_path(), "/a%20b");
    }

    #[test]
    fn routing_path_falls_back_to_decoded() {
        let req = Request::new("GET", "/users");
        assert_eq!(req.routing_path(), "/users");
        assert_eq!(Request::new("GET", "").routing_path(), "");
    }

    #[test]
    fn header_lookup_ignores_case() {
        let req = Request::new("GET", "/").with_header("Content-Type", "text/plain");
        assert_eq!(req.header("content-type"), Some("text/plain"));
        assert_eq!(req.header("accept"), None);
    }
}
