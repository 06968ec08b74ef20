//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. You register a path, you
//! get a handler. That is all.

use std::collections::HashMap;
use std::sync::Arc;

use http::Method;
use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};

/// The application router.
///
/// One radix tree per HTTP method. Build it once at startup; pass it to
/// [`Server::serve`](crate::Server::serve). Each [`Router::on`] call returns
/// `self` so registrations chain naturally.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax — `req.param("name")` retrieves them:
    ///
    /// ```rust,no_run
    /// # use postd::{Request, Response, Router, store::PostStore};
    /// # use http::Method;
    /// # async fn get_post(_: Request, _: PostStore) -> Response { Response::text("") }
    /// # async fn create_post(_: Request, _: PostStore) -> Response { Response::text("") }
    /// Router::new()
    ///     .on(Method::GET,  "/api/posts/{id}", get_post)
    ///     .on(Method::POST, "/api/posts",      create_post);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics on a conflicting or malformed path — a routing-table bug is a
    /// startup failure, not a runtime condition.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub(crate) fn lookup(
        &self,
        method: &Method,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let tree = self.routes.get(method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched
            .params
            .iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
