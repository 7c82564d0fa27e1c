//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for the different API domains:
//! user accounts, chirps, the admin surface, and the Polka webhook. Core
//! authentication routes are handled separately under `auth`.

pub mod admin;
pub mod chirp;
pub mod common;
pub mod user;
pub mod webhook;
