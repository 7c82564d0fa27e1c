//! Shared application state handed to every handler.
//!
//! Configuration is immutable after startup; the only mutable piece is the
//! visit counter behind an atomic, so the state clones freely across
//! concurrent requests without locking.

use crate::config::Config;
use sqlx::SqlitePool;
use std::sync::atomic::AtomicI64;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Arc<Config>,
    pub page_hits: Arc<AtomicI64>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        Self {
            pool,
            config: Arc::new(config),
            page_hits: Arc::new(AtomicI64::new(0)),
        }
    }
}
