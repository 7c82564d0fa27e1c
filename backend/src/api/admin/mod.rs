//! Admin-only endpoints.

pub mod handlers;
pub mod routes;
