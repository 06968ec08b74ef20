//! # postd
//!
//! A small JSON API for blog posts. One resource, five operations, SQLite
//! underneath. Nothing more. Nothing less.
//!
//! ## The surface
//!
//! All API paths are prefixed `/api`; every body in and out is JSON, and
//! every error body is `{"message": "<text>"}`.
//!
//! | Method | Path | Success | Failure |
//! |---|---|---|---|
//! | GET | /api/posts | 200, array of posts | 406 |
//! | GET | /api/posts/{id} | 200, post | 404, 406 |
//! | DELETE | /api/posts/{id} | 200, message | 404, 406 |
//! | POST | /api/posts | 201, post + `Location` | 406, 415, 422 |
//! | PUT | /api/posts/{id} | 200, post + `Location` | 404, 406, 415, 422 |
//!
//! `GET /api/posts` takes optional `title_like` / `body_like` query
//! parameters — case-sensitive substring filters, AND-combined — and always
//! returns posts ascending by id.
//!
//! ## The contract
//!
//! The reverse proxy owns TLS, rate limiting, and body-size limits. postd
//! owns exactly the request-handling logic: content negotiation (406/415
//! before anything else runs), payload validation (422 with a message
//! clients can match on), and the store round-trip, each write committed
//! before the response leaves.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use postd::{Config, PostStore, Server, api};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let store = PostStore::connect(&config.database_url).await?;
//!     Server::bind(&config.bind).serve(api::routes(), store).await?;
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod handler;
mod request;
mod response;
mod router;
mod schema;
mod server;

pub mod api;
pub mod health;
pub mod store;

pub use config::Config;
pub use error::{ApiError, Error};
pub use handler::Handler;
pub use request::Request;
pub use response::{IntoResponse, Response};
pub use router::Router;
pub use server::Server;
pub use store::{Post, PostStore};
