//! Domain entities persisted by `roster-db`.

mod user;

pub use user::{NewUser, User};
