//! User account endpoints.

pub mod handlers;
pub mod routes;
