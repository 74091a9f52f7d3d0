//! Colorized access logging.
//!
//! One `INFO` event per request, emitted after the wrapped handler returns:
//!
//! ```text
//! [CHI] \x1b[97;42m 200 \x1b[0m \x1b[97;46m POST    \x1b[0m /users 1.2ms 127.0.0.1
//! ```
//!
//! The line is fully formatted here so it reads the same whatever subscriber
//! ends up writing it.

use std::io;
use std::net::IpAddr;
use std::time::{Duration, Instant};

use http::StatusCode;
use tracing::info;

use super::client_ip::client_ip;
use super::color::{ColorCategory, method_color, status_color};
use super::interceptor::Interceptor;
use crate::handler::Handler;
use crate::request::Request;
use crate::response::ResponseWriter;

/// Prefix identifying access lines.
pub const TAG: &str = "[CHI]";

/// Access-log middleware.
///
/// ```rust,no_run
/// # use std::io;
/// # use tsu::{Request, ResponseWriter, Router};
/// use tsu::middleware::RequestLogger;
/// # fn hello(_: Request, w: &mut dyn ResponseWriter) -> io::Result<()> { w.text("hi") }
///
/// let app = RequestLogger::new().wrap(Router::new().get("/", hello));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestLogger;

impl RequestLogger {
    pub fn new() -> Self {
        Self
    }

    pub fn wrap<H: Handler>(self, next: H) -> Logged<H> {
        Logged { next }
    }
}

/// A handler wrapped by [`RequestLogger`].
pub struct Logged<H> {
    next: H,
}

impl<H: Handler> Handler for Logged<H> {
    fn serve(&self, req: Request, w: &mut dyn ResponseWriter) -> io::Result<()> {
        let start = Instant::now();
        let method = req.method().to_owned();
        let path = req.path().to_owned();
        let remote_addr = req.remote_addr().to_owned();

        let mut interceptor = Interceptor::new(w);
        let result = self.next.serve(req, &mut interceptor);
        let elapsed = start.elapsed();

        // A failed handler is answered with 500 whatever it wrote first.
        let status = match result {
            Ok(()) => interceptor.final_status(),
            Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let line = access_line(
            &method,
            &path,
            status.as_u16(),
            elapsed,
            client_ip(&remote_addr),
        );
        info!(target: "tsu::middleware::logger", "{line}");

        result
    }
}

fn access_line(
    method: &str,
    path: &str,
    status: u16,
    elapsed: Duration,
    ip: Option<IpAddr>,
) -> String {
    let reset = ColorCategory::Reset;
    let ip = ip.map(|ip| ip.to_string()).unwrap_or_default();
    format!(
        "{TAG} {} {status:3} {reset} {} {method:<7} {reset} {path} {elapsed:?} {ip}",
        status_color(status),
        method_color(method),
    )
}
