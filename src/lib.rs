//! Animal shelter backend.
//!
//! [`validation`] holds the record validators every write goes through; the
//! remaining modules wire them into an axum service backed by Postgres.

pub mod config;
pub mod db;
pub mod errors;
pub mod logging;
pub mod models;
pub mod routes;
pub mod schema;
pub mod security;
pub mod validation;

use axum::{Extension, Router, extract::DefaultBodyLimit, middleware};

use crate::db::PgPool;

/// The full application: routes, security headers, body limit and pool.
pub fn app(pool: PgPool) -> Router {
    routes::create_router()
        .layer(middleware::from_fn(security::headers::set_security_headers))
        .layer(DefaultBodyLimit::max(security::json::MAX_BODY_SIZE_BYTES))
        .layer(Extension(pool))
}
