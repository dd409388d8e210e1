//! Repository for the v1 `historical_events` and `resources` tables.

use sqlx::{PgConnection, PgPool};
use timeline_core::filter::EventFilter;
use timeline_core::types::DbId;

use crate::models::historical_event::{
    CreateHistoricalEvent, HistoricalEvent, UpdateHistoricalEvent,
};
use crate::models::resource::Resource;

/// Column list for historical_events queries.
const EVENT_COLUMNS: &str = "id, year, event, figure, details, period, country, topics, created_at";

/// Column list for resources queries.
const RESOURCE_COLUMNS: &str =
    "id, event_id, title, author, year, type, description, topics, resource_type";

/// Provides CRUD and filtered queries for v1 historical events.
pub struct HistoricalEventRepo;

impl HistoricalEventRepo {
    /// Total number of stored events.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM historical_events")
            .fetch_one(pool)
            .await
    }

    /// List events matching the given filter, ordered by id so results are
    /// reproducible across calls.
    pub async fn list(
        pool: &PgPool,
        filter: &EventFilter,
    ) -> Result<Vec<HistoricalEvent>, sqlx::Error> {
        match filter {
            EventFilter::Search(q) => {
                let pattern = format!("%{q}%");
                let query = format!(
                    "SELECT {EVENT_COLUMNS} FROM historical_events
                     WHERE event ILIKE $1 OR figure ILIKE $1 OR details ILIKE $1
                     ORDER BY id"
                );
                sqlx::query_as::<_, HistoricalEvent>(&query)
                    .bind(pattern)
                    .fetch_all(pool)
                    .await
            }
            EventFilter::Period(period) => {
                let query = format!(
                    "SELECT {EVENT_COLUMNS} FROM historical_events WHERE period = $1 ORDER BY id"
                );
                sqlx::query_as::<_, HistoricalEvent>(&query)
                    .bind(period)
                    .fetch_all(pool)
                    .await
            }
            EventFilter::Country(country) => {
                let query = format!(
                    "SELECT {EVENT_COLUMNS} FROM historical_events WHERE country = $1 ORDER BY id"
                );
                sqlx::query_as::<_, HistoricalEvent>(&query)
                    .bind(country)
                    .fetch_all(pool)
                    .await
            }
            EventFilter::All => {
                let query =
                    format!("SELECT {EVENT_COLUMNS} FROM historical_events ORDER BY id");
                sqlx::query_as::<_, HistoricalEvent>(&query)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Find an event by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<HistoricalEvent>, sqlx::Error> {
        let query = format!("SELECT {EVENT_COLUMNS} FROM historical_events WHERE id = $1");
        sqlx::query_as::<_, HistoricalEvent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the resources owned by one event, ordered by id.
    pub async fn resources_for(pool: &PgPool, event_id: DbId) -> Result<Vec<Resource>, sqlx::Error> {
        let query =
            format!("SELECT {RESOURCE_COLUMNS} FROM resources WHERE event_id = $1 ORDER BY id");
        sqlx::query_as::<_, Resource>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// List the resources owned by any of the given events in one query,
    /// ordered by id. Callers bucket the rows by `event_id`.
    pub async fn resources_for_events(
        pool: &PgPool,
        event_ids: &[DbId],
    ) -> Result<Vec<Resource>, sqlx::Error> {
        let query = format!(
            "SELECT {RESOURCE_COLUMNS} FROM resources WHERE event_id = ANY($1) ORDER BY id"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(event_ids)
            .fetch_all(pool)
            .await
    }

    /// Create an event together with its nested resources, atomically.
    pub async fn create(
        pool: &PgPool,
        input: &CreateHistoricalEvent,
    ) -> Result<(HistoricalEvent, Vec<Resource>), sqlx::Error> {
        let mut tx = pool.begin().await?;
        let created = Self::insert_event_graph(&mut tx, input).await?;
        tx.commit().await?;
        Ok(created)
    }

    /// Create many events in one transaction. Either the whole batch
    /// persists or the whole call fails.
    pub async fn create_many(
        pool: &PgPool,
        inputs: &[CreateHistoricalEvent],
    ) -> Result<Vec<(HistoricalEvent, Vec<Resource>)>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut created = Vec::with_capacity(inputs.len());
        for input in inputs {
            created.push(Self::insert_event_graph(&mut tx, input).await?);
        }
        tx.commit().await?;
        Ok(created)
    }

    async fn insert_event_graph(
        conn: &mut PgConnection,
        input: &CreateHistoricalEvent,
    ) -> Result<(HistoricalEvent, Vec<Resource>), sqlx::Error> {
        let query = format!(
            "INSERT INTO historical_events (year, event, figure, details, period, country, topics)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {EVENT_COLUMNS}"
        );
        let event = sqlx::query_as::<_, HistoricalEvent>(&query)
            .bind(&input.year)
            .bind(&input.event)
            .bind(&input.figure)
            .bind(&input.details)
            .bind(&input.period)
            .bind(&input.country)
            .bind(&input.topics)
            .fetch_one(&mut *conn)
            .await?;

        let mut resources = Vec::with_capacity(input.resources.len());
        for resource in &input.resources {
            let query = format!(
                "INSERT INTO resources
                    (event_id, title, author, year, type, description, topics, resource_type)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                 RETURNING {RESOURCE_COLUMNS}"
            );
            let row = sqlx::query_as::<_, Resource>(&query)
                .bind(event.id)
                .bind(&resource.title)
                .bind(&resource.author)
                .bind(&resource.year)
                .bind(&resource.kind)
                .bind(&resource.description)
                .bind(&resource.topics)
                .bind(&resource.resource_type)
                .fetch_one(&mut *conn)
                .await?;
            resources.push(row);
        }

        Ok((event, resources))
    }

    /// Update-via-mutation: overwrite the six v1 scalar fields on the
    /// existing row, leaving topics and resources untouched. Returns the
    /// updated row, or `None` if the id is absent.
    pub async fn update_fields(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHistoricalEvent,
    ) -> Result<Option<HistoricalEvent>, sqlx::Error> {
        let query = format!(
            "UPDATE historical_events SET
                year = $2, event = $3, figure = $4, details = $5, period = $6, country = $7
             WHERE id = $1
             RETURNING {EVENT_COLUMNS}"
        );
        sqlx::query_as::<_, HistoricalEvent>(&query)
            .bind(id)
            .bind(&input.year)
            .bind(&input.event)
            .bind(&input.figure)
            .bind(&input.details)
            .bind(&input.period)
            .bind(&input.country)
            .fetch_optional(pool)
            .await
    }

    /// Delete an event by id. Owned resources go with it (ON DELETE CASCADE).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM historical_events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Distinct period values across all events, for client filter choices.
    pub async fn distinct_periods(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT DISTINCT period FROM historical_events ORDER BY 1")
            .fetch_all(pool)
            .await
    }

    /// Distinct country values across all events.
    pub async fn distinct_countries(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT DISTINCT country FROM historical_events ORDER BY 1")
            .fetch_all(pool)
            .await
    }
}
