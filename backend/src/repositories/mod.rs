//! Database repositories, one per table.

pub mod chirp_repository;
pub mod refresh_token_repository;
pub mod user_repository;
