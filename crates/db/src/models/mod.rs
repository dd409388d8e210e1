//! Row models and wire DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - Wire DTOs decoupling the HTTP representation from storage
//! - `Deserialize` create/update DTOs for writes
//!
//! The v1 (`historical_event`, `resource`) and v2 (`timeline`) generations
//! are deliberately separate modules; their filter contracts diverge and
//! callers depend on each generation's exact shape.

pub mod book_content;
pub mod historical_event;
pub mod resource;
pub mod timeline;
