//! Sample-data seeding for the v1 schema.
//!
//! Five hand-authored events spanning multiple eras, each with one or two
//! nested resources, kept as a JSON fixture rather than inline structs.

use sqlx::PgPool;

use crate::models::historical_event::CreateHistoricalEvent;
use crate::repositories::HistoricalEventRepo;

const SAMPLE_EVENTS_JSON: &str = include_str!("fixtures/sample_events.json");

/// What a seed call did.
#[derive(Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store was empty; this many events were inserted.
    Seeded(usize),
    /// At least one event already existed; nothing was inserted.
    AlreadyExists,
}

/// The parsed seed fixture.
pub fn sample_events() -> Result<Vec<CreateHistoricalEvent>, serde_json::Error> {
    serde_json::from_str(SAMPLE_EVENTS_JSON)
}

/// Populate the sample events if and only if no event exists yet.
///
/// The emptiness guard is check-then-act: two concurrent first-time calls
/// can both observe an empty table and double-insert. There is no locking
/// around it; the endpoint is a development convenience.
pub async fn seed_sample_events(pool: &PgPool) -> Result<SeedOutcome, sqlx::Error> {
    if HistoricalEventRepo::count(pool).await? > 0 {
        return Ok(SeedOutcome::AlreadyExists);
    }

    let events = sample_events().map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
    let inserted = HistoricalEventRepo::create_many(pool, &events).await?;
    tracing::info!(count = inserted.len(), "Sample data seeded");
    Ok(SeedOutcome::Seeded(inserted.len()))
}
