//! `405 Method Not Allowed` with an accurate `Allow` header.

use http::header::ALLOW;
use http::{HeaderValue, StatusCode};

use crate::method::Method;
use crate::request::Request;
use crate::response::ResponseWriter;

/// Answers whether a route exists for a method and path, without running
/// any handler.
pub trait RouteMatcher {
    fn matches(&self, method: Method, path: &str) -> bool;
}

/// Methods found for a path, in probe order.
pub type AllowedMethods = Vec<Method>;

/// Probes `matcher` with each of [`Method::ALLOW_CANDIDATES`] against the
/// request's routing path, appends one `Allow` header per match and writes
/// `405`.
///
/// The routing path is the raw path when present, the decoded path
/// otherwise. An empty path is still probed. Status and headers are
/// written whatever the probe finds.
pub fn add_allow_header(
    matcher: &impl RouteMatcher,
    w: &mut dyn ResponseWriter,
    req: &Request,
) -> AllowedMethods {
    let path = req.routing_path();
    let allowed: AllowedMethods = Method::ALLOW_CANDIDATES
        .into_iter()
        .filter(|&m| matcher.matches(m, path))
        .collect();

    let headers = w.headers_mut();
    for method in &allowed {
        headers.append(ALLOW, HeaderValue::from_static(method.as_str()));
    }
    w.write_status(StatusCode::METHOD_NOT_ALLOWED);
    allowed
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::response::Response;

    struct Recording {
        routes: Vec<(Method, &'static str)>,
        probes: RefCell<Vec<(Method, String)>>,
    }

    impl RouteMatcher for Recording {
        fn matches(&self, method: Method, path: &str) -> bool {
            self.probes.borrow_mut().push((method, path.to_owned()));
            self.routes.iter().any(|&(m, p)| m == method && p == path)
        }
    }

    fn recording(routes: Vec<(Method, &'static str)>) -> Recording {
        Recording { routes, probes: RefCell::new(Vec::new()) }
    }

    #[test]
    fn probes_five_verbs_in_order() {
        let m = recording(vec![]);
        add_allow_header(&m, &mut Response::new(), &Request::new("POST", "/x"));

        let probed: Vec<_> = m.probes.borrow().iter().map(|(m, _)| *m).collect();
        assert_eq!(probed, Method::ALLOW_CANDIDATES);
    }

    #[test]
    fn raw_path_is_used_when_present() {
        let m = recording(vec![(Method::Get, "/a%2Fb")]);
        let req = Request::new("POST", "/a/b").with_raw_path("/a%2Fb");
        let mut res = Response::new();

        assert_eq!(add_allow_header(&m, &mut res, &req), [Method::Get]);
        assert!(m.probes.borrow().iter().all(|(_, p)| p == "/a%2Fb"));
    }

    #[test]
    fn nothing_matched_still_writes_405() {
        let m = recording(vec![]);
        let mut res = Response::new();
        let allowed = add_allow_header(&m, &mut res, &Request::new("POST", ""));

        assert!(allowed.is_empty());
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert!(res.headers().get(ALLOW).is_none());
    }

    #[test]
    fn one_header_per_method() {
        let m = recording(vec![(Method::Put, "/"), (Method::Delete, "/")]);
        let mut res = Response::new();
        add_allow_header(&m, &mut res, &Request::new("GET", "/"));

        let values: Vec<_> = res.headers().get_all(ALLOW).iter().collect();
        assert_eq!(values, ["PUT", "DELETE"]);
    }
}
