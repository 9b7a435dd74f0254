//! Repository modules implementing CRUD operations.
//!
//! Each module adds methods to `RosterService` via `impl RosterService` blocks.

pub mod user;
