//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Multi-row writes (an event
//! plus its owned children, bulk creates, replaces) run inside a single
//! transaction so a batch either fully persists or fully fails.

pub mod book_content_repo;
pub mod historical_event_repo;
pub mod timeline_event_repo;

pub use book_content_repo::BookContentRepo;
pub use historical_event_repo::HistoricalEventRepo;
pub use timeline_event_repo::TimelineEventRepo;
