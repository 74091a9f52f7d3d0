//! Minimal tsu example — a few JSON endpoints behind the access logger.
//!
//! Run with:
//!   RUST_LOG=info cargo run --example basic
//!
//! Try:
//!   curl http://localhost:3000/users/42
//!   curl -X POST http://localhost:3000/users -d '{"name":"alice"}'
//!   curl -i -X PUT http://localhost:3000/users/42     ← 405, Allow: GET, DELETE
//!   curl -i http://localhost:3000/nope                ← 404

use std::io;

use tsu::middleware::RequestLogger;
use tsu::{Request, ResponseWriter, Router, Server, StatusCode};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let app = Router::new()
        .get("/users/{id}",    get_user)
        .post("/users",        create_user)
        .delete("/users/{id}", delete_user);

    Server::bind("0.0.0.0:3000")
        .serve(RequestLogger::new().wrap(app))
        .await
        .expect("server error");
}

// GET /users/{id}
//
// w.json takes bytes — pass them straight from your serialiser:
//   serde_json:  w.json(&serde_json::to_vec(&user)?)
//   hand-built:  w.json(format!(...).as_bytes())
fn get_user(req: Request, w: &mut dyn ResponseWriter) -> io::Result<()> {
    let id = req.param("id").unwrap_or("unknown");
    w.json(format!(r#"{{"id":"{id}","name":"alice"}}"#).as_bytes())
}

// POST /users
//
// req.body() is &[u8] — tsu does not touch the bytes.
fn create_user(req: Request, w: &mut dyn ResponseWriter) -> io::Result<()> {
    if req.body().is_empty() {
        w.write_status(StatusCode::BAD_REQUEST);
        return Ok(());
    }

    w.headers_mut().insert("location", "/users/99".parse().expect("static header"));
    w.write_status(StatusCode::CREATED);
    w.json(br#"{"id":"99","name":"new_user"}"#)
}

// DELETE /users/{id} → 204 No Content
fn delete_user(_req: Request, w: &mut dyn ResponseWriter) -> io::Result<()> {
    w.write_status(StatusCode::NO_CONTENT);
    Ok(())
}
