//! Business logic services built on top of the repositories.

pub mod chirp_service;
pub mod user_service;
