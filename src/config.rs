//! Process configuration.
//!
//! Two knobs, both environment variables, both with sensible defaults —
//! enough for a service that runs behind a reverse proxy:
//!
//! | Variable | Default |
//! |---|---|
//! | `POSTD_BIND` | `0.0.0.0:3000` |
//! | `POSTD_DATABASE_URL` | `sqlite://posts.db` |
//!
//! Log verbosity is the subscriber's business (`RUST_LOG`), not ours.

use std::env;

const DEFAULT_BIND: &str = "0.0.0.0:3000";
const DEFAULT_DATABASE_URL: &str = "sqlite://posts.db";

#[derive(Debug, Clone)]
pub struct Config {
    /// `host:port` the server binds to.
    pub bind: String,
    /// Where the posts live, as a sqlx connection URL.
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind: env::var("POSTD_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_owned()),
            database_url: env::var("POSTD_DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_owned(),
            database_url: DEFAULT_DATABASE_URL.to_owned(),
        }
    }
}
