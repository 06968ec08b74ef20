//! The HTTP surface: routes, handlers, and negotiation guards.

mod negotiate;
mod posts;

use http::Method;

use crate::health;
use crate::router::Router;

/// Builds the full routing table.
///
/// | Method | Path | Success |
/// |---|---|---|
/// | GET | /api/posts | 200, array of posts |
/// | GET | /api/posts/{id} | 200, post |
/// | POST | /api/posts | 201, post + `Location` |
/// | PUT | /api/posts/{id} | 200, post + `Location` |
/// | DELETE | /api/posts/{id} | 200, message |
/// | GET | /healthz, /readyz | 200 |
pub fn routes() -> Router {
    Router::new()
        .on(Method::GET, "/api/posts", posts::list)
        .on(Method::POST, "/api/posts", posts::create)
        .on(Method::GET, "/api/posts/{id}", posts::get)
        .on(Method::PUT, "/api/posts/{id}", posts::update)
        .on(Method::DELETE, "/api/posts/{id}", posts::delete)
        .on(Method::GET, "/healthz", health::liveness)
        .on(Method::GET, "/readyz", health::readiness)
}
