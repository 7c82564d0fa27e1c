//! Chirp endpoints.

pub mod handlers;
pub mod routes;
