//! Middleware layer.
//!
//! Middleware wraps a [`Handler`](crate::Handler) and is the right place for
//! cross-cutting concerns. Built in:
//!
//! - [`RequestLogger`] — one colorized access line per request
//! - [`add_allow_header`] — `405` with an accurate `Allow` header, used as
//!   the router's default method-not-allowed fallback
//!
//! ```rust,no_run
//! use std::io;
//! use tsu::middleware::RequestLogger;
//! use tsu::{Request, ResponseWriter, Router, Server};
//!
//! # async fn run() -> Result<(), tsu::Error> {
//! let app = RequestLogger::new().wrap(Router::new().get("/", hello));
//! Server::bind("0.0.0.0:3000").serve(app).await
//! # }
//! fn hello(_req: Request, w: &mut dyn ResponseWriter) -> io::Result<()> {
//!     w.text("hello")
//! }
//! ```

mod allow;
mod client_ip;
mod color;
mod interceptor;
mod logger;

pub use allow::{AllowedMethods, RouteMatcher, add_allow_header};
pub use client_ip::client_ip;
pub use color::{ColorCategory, method_color, status_color};
pub use interceptor::Interceptor;
pub use logger::{Logged, RequestLogger};
