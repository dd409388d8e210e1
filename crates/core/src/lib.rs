//! Domain types and pure logic shared by the database and API layers.
//!
//! No I/O lives here: error taxonomy, ID/timestamp aliases, the v1 event
//! filter precedence, and presence-check validation.

pub mod error;
pub mod filter;
pub mod types;
pub mod validation;
