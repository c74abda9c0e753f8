//! User record storage for Rolodex
//!
//! This crate provides the storage abstraction behind the API server: the
//! [`UserStore`] trait, an in-memory implementation (the default, also used
//! as the test double), and a SQLite implementation for persistence. The
//! store is the sole authority for record identity, timestamps, and the
//! uniqueness of phone numbers and email addresses.

mod error;
mod memory;
mod sqlite;
mod traits;

pub use error::*;
pub use memory::*;
pub use sqlite::*;
pub use traits::*;
