//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate presence, delegate to the repositories in
//! `timeline_db`, map rows to DTOs, and translate outcomes into status
//! codes via [`crate::error::AppError`].

pub mod books;
pub mod historical;
pub mod timeline;
