//! # roster-core
//!
//! Core types shared across all Roster crates:
//! - The `User` entity and its creation payload
//! - JSON response envelopes (`{ success, data }` / `{ success, error }`)
//! - Health check report types

pub mod entities;
pub mod health;
pub mod responses;
