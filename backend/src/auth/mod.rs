//! Authentication module for credentials, tokens, and access control.
//!
//! The leaf components live in their own submodules: password hashing
//! (`password`), the signed access-token codec (`token`), `Authorization`
//! header parsing (`headers`), and opaque refresh-token generation
//! (`refresh`). `service` wires them together for the login, refresh, and
//! revoke flows; `middleware` guards protected routes.

pub mod errors;
pub mod handlers;
pub mod headers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod refresh;
pub mod routes;
pub mod service;
pub mod token;
