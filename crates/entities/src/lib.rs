//! Core entity definitions for Rolodex
//!
//! This crate defines the user record shared by the API server and the
//! console client, plus the field validator applied at the API boundary.

mod user;
mod validate;

pub use user::*;
pub use validate::*;
