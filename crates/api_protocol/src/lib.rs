//! Wire type definitions for the Rolodex HTTP API
//!
//! The server and the console client both depend on this crate, so the
//! camelCase JSON shapes are written down exactly once.

pub mod requests;
pub mod responses;
pub mod types;

pub use requests::*;
pub use responses::*;
pub use types::*;
