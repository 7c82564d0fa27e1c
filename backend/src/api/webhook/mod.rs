//! Service-to-service webhook endpoints.

pub mod handlers;
pub mod routes;
