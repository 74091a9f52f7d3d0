//! Handler trait.
//!
//! A handler receives the request by value and a borrowed
//! [`ResponseWriter`]. Because the writer is a trait object, middleware can
//! slot its own writer in front of the real one without the handler
//! noticing:
//!
//! ```text
//! fn hello(req: Request, w: &mut dyn ResponseWriter) -> io::Result<()>
//!        ↓ router.get("/", hello)
//! Arc::new(hello)                        ← BoxedHandler = Arc<dyn Handler>
//!        ↓ at request time
//! handler.serve(req, &mut response)      ← one vtable dispatch
//! ```
//!
//! Handlers are synchronous and run on the connection task. Anything slow
//! belongs in `tokio::task::spawn_blocking` or a separate service.

use std::io;
use std::sync::Arc;

use crate::request::Request;
use crate::response::ResponseWriter;

/// A heap-allocated, type-erased handler shared across concurrent requests.
pub type BoxedHandler = Arc<dyn Handler>;

/// Serves one request.
///
/// Implemented automatically for every function or closure with the shape
///
/// ```text
/// fn name(req: Request, w: &mut dyn ResponseWriter) -> std::io::Result<()>
/// ```
///
/// and by [`Router`](crate::Router) and the middleware wrappers, so they
/// nest freely.
///
/// An `Err` means the response sink failed. Application errors are HTTP
/// statuses written to `w`, not `Err`s.
pub trait Handler: Send + Sync + 'static {
    fn serve(&self, req: Request, w: &mut dyn ResponseWriter) -> io::Result<()>;
}

impl<F> Handler for F
where
    F: Fn(Request, &mut dyn ResponseWriter) -> io::Result<()> + Send + Sync + 'static,
{
    fn serve(&self, req: Request, w: &mut dyn ResponseWriter) -> io::Result<()> {
        (self)(req, w)
    }
}
