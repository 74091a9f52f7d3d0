//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. When a path exists but
//! not for the requested method the router answers `405` with an accurate
//! `Allow` header instead of a bare `404`.

use std::collections::HashMap;
use std::io;
use std::sync::Arc;

use http::StatusCode;
use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::middleware::{RouteMatcher, add_allow_header};
use crate::request::Request;
use crate::response::ResponseWriter;

/// The application router.
///
/// Build it once at startup; pass it to [`Server::serve`](crate::Server::serve),
/// optionally wrapped in middleware. Each registration returns `self` so
/// calls chain naturally.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
    not_found: Option<BoxedHandler>,
    method_not_allowed: Option<BoxedHandler>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new(), not_found: None, method_not_allowed: None }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax — `req.param("name")` retrieves them:
    ///
    /// ```rust,no_run
    /// # use std::io;
    /// # use tsu::{Method, Request, ResponseWriter, Router};
    /// # fn get_user(_: Request, _: &mut dyn ResponseWriter) -> io::Result<()> { Ok(()) }
    /// # fn delete_user(_: Request, _: &mut dyn ResponseWriter) -> io::Result<()> { Ok(()) }
    /// Router::new()
    ///     .on(Method::Delete, "/users/{id}", delete_user)
    ///     .on(Method::Get,    "/users/{id}", get_user);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route pattern or conflicts with a
    /// route already registered for `method`.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, Arc::new(handler) as BoxedHandler)
            .unwrap_or_else(|e| panic!("invalid route `{method} {path}`: {e}"));
        self
    }

    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Get, path, handler)
    }

    pub fn post(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Post, path, handler)
    }

    pub fn put(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Put, path, handler)
    }

    pub fn patch(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Patch, path, handler)
    }

    pub fn delete(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Delete, path, handler)
    }

    /// Handler for paths no route matches. Defaults to a bare `404`.
    pub fn not_found(mut self, handler: impl Handler) -> Self {
        self.not_found = Some(Arc::new(handler));
        self
    }

    /// Handler for paths that exist under a different method. Defaults to
    /// [`add_allow_header`]; a custom handler can call it too.
    ///
    /// Only the methods in [`Method::ALLOW_CANDIDATES`] count: a path
    /// registered solely for `HEAD` or `OPTIONS` gets the not-found
    /// handler for any other method.
    pub fn method_not_allowed(mut self, handler: impl Handler) -> Self {
        self.method_not_allowed = Some(Arc::new(handler));
        self
    }

    pub(crate) fn lookup(
        &self,
        method: Method,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let tree = self.routes.get(&method)?;
        let matched = tree.at(match_path(path)).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }

    /// Whether any probed method has a route for `path`.
    fn allows_any(&self, path: &str) -> bool {
        Method::ALLOW_CANDIDATES.iter().any(|&m| self.matches(m, path))
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}

impl RouteMatcher for Router {
    fn matches(&self, method: Method, path: &str) -> bool {
        self.routes
            .get(&method)
            .is_some_and(|tree| tree.at(match_path(path)).is_ok())
    }
}

impl Handler for Router {
    fn serve(&self, mut req: Request, w: &mut dyn ResponseWriter) -> io::Result<()> {
        let found = req.method.parse::<Method>().ok()
            .and_then(|m| self.lookup(m, req.routing_path()));

        if let Some((handler, params)) = found {
            req.params = params;
            return handler.serve(req, w);
        }

        if self.allows_any(req.routing_path()) {
            return match &self.method_not_allowed {
                Some(handler) => handler.serve(req, w),
                None => {
                    add_allow_header(self, w, &req);
                    Ok(())
                }
            };
        }

        match &self.not_found {
            Some(handler) => handler.serve(req, w),
            None => {
                w.write_status(StatusCode::NOT_FOUND);
                Ok(())
            }
        }
    }
}

/// An empty path is matched as the root.
fn match_path(path: &str) -> &str {
    if path.is_empty() { "/" } else { path }
}
