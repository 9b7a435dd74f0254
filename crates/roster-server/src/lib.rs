//! # roster-server
//!
//! axum HTTP surface for Roster: schema-driven request validation,
//! the user CRUD routes, and the health probe.
//!
//! The binary in `main.rs` wires configuration, the database and the schema
//! registry together and calls [`server::serve`].

pub mod app;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod health;
pub mod middleware;
pub mod server;

pub use app::{AppState, router};
pub use error::ApiError;
