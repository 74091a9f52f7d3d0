//! # tsu
//!
//! Request observability and route introspection for small HTTP services.
//!
//! ## What it does
//!
//! - **Access logging** — [`RequestLogger`](middleware::RequestLogger) wraps
//!   any [`Handler`] and emits one colorized line per request: status,
//!   method, path, latency, client IP.
//! - **Honest 405s** — when a path exists but not for the requested method,
//!   the [`Router`] answers `405 Method Not Allowed` with one `Allow` header
//!   per method that would have matched, instead of a generic `404`.
//!
//! Routing is a radix tree per method via [`matchit`]; transport is hyper
//! (HTTP/1.1 and HTTP/2) on tokio, with graceful shutdown on SIGTERM.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::io;
//! use tsu::middleware::RequestLogger;
//! use tsu::{Request, ResponseWriter, Router, Server, StatusCode};
//!
//! #[tokio::main]
//! async fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     let app = Router::new()
//!         .get("/users/{id}", get_user)
//!         .delete("/users/{id}", delete_user);
//!
//!     Server::bind("0.0.0.0:3000")
//!         .serve(RequestLogger::new().wrap(app))
//!         .await
//!         .unwrap();
//! }
//!
//! fn get_user(req: Request, w: &mut dyn ResponseWriter) -> io::Result<()> {
//!     let id = req.param("id").unwrap_or("unknown");
//!     w.json(format!(r#"{{"id":"{id}"}}"#).as_bytes())
//! }
//!
//! fn delete_user(_req: Request, w: &mut dyn ResponseWriter) -> io::Result<()> {
//!     w.write_status(StatusCode::NO_CONTENT);
//!     Ok(())
//! }
//! ```
//!
//! `POST /users/1` on that app logs a yellow `405` and answers with
//! `Allow: GET` and `Allow: DELETE`.

mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;

pub mod middleware;

pub use http::{HeaderMap, HeaderValue, StatusCode};

pub use error::Error;
pub use handler::{BoxedHandler, Handler};
pub use method::Method;
pub use request::Request;
pub use response::{ContentType, Response, ResponseWriter};
pub use router::Router;
pub use server::Server;
