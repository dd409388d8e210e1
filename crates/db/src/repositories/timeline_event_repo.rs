//! Repository for the v2 `timeline_events` table and its owned children.

use sqlx::{PgConnection, PgPool};
use timeline_core::types::DbId;

use crate::models::timeline::{
    EventFigure, NewTimelineEventGraph, TimelineEvent, TimelineResource,
};

/// Column list for timeline_events queries.
const EVENT_COLUMNS: &str =
    "id, year, event_name, details, period, country, regions, topics, event_type, created_at";

/// Column list for timeline_resources queries.
const RESOURCE_COLUMNS: &str =
    "id, event_id, title, author, year, type, description, topics, resource_type";

/// A fully loaded v2 event graph: the row plus its owned figures and
/// resources.
pub type TimelineEventGraph = (TimelineEvent, Vec<EventFigure>, Vec<TimelineResource>);

/// Provides CRUD for v2 timeline events.
///
/// The v2 listing contract is narrower than v1 by design: exact country or
/// period match as separate queries, no free-text search, no grouping.
pub struct TimelineEventRepo;

impl TimelineEventRepo {
    /// List all events, ordered by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<TimelineEvent>, sqlx::Error> {
        let query = format!("SELECT {EVENT_COLUMNS} FROM timeline_events ORDER BY id");
        sqlx::query_as::<_, TimelineEvent>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find an event by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TimelineEvent>, sqlx::Error> {
        let query = format!("SELECT {EVENT_COLUMNS} FROM timeline_events WHERE id = $1");
        sqlx::query_as::<_, TimelineEvent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Exact-match listing by country.
    pub async fn list_by_country(
        pool: &PgPool,
        country: &str,
    ) -> Result<Vec<TimelineEvent>, sqlx::Error> {
        let query =
            format!("SELECT {EVENT_COLUMNS} FROM timeline_events WHERE country = $1 ORDER BY id");
        sqlx::query_as::<_, TimelineEvent>(&query)
            .bind(country)
            .fetch_all(pool)
            .await
    }

    /// Exact-match listing by period.
    pub async fn list_by_period(
        pool: &PgPool,
        period: &str,
    ) -> Result<Vec<TimelineEvent>, sqlx::Error> {
        let query =
            format!("SELECT {EVENT_COLUMNS} FROM timeline_events WHERE period = $1 ORDER BY id");
        sqlx::query_as::<_, TimelineEvent>(&query)
            .bind(period)
            .fetch_all(pool)
            .await
    }

    /// Figures owned by any of the given events, ordered by id.
    pub async fn figures_for_events(
        pool: &PgPool,
        event_ids: &[DbId],
    ) -> Result<Vec<EventFigure>, sqlx::Error> {
        sqlx::query_as::<_, EventFigure>(
            "SELECT id, event_id, name FROM timeline_event_figures
             WHERE event_id = ANY($1) ORDER BY id",
        )
        .bind(event_ids)
        .fetch_all(pool)
        .await
    }

    /// Resources owned by any of the given events, ordered by id.
    pub async fn resources_for_events(
        pool: &PgPool,
        event_ids: &[DbId],
    ) -> Result<Vec<TimelineResource>, sqlx::Error> {
        let query = format!(
            "SELECT {RESOURCE_COLUMNS} FROM timeline_resources
             WHERE event_id = ANY($1) ORDER BY id"
        );
        sqlx::query_as::<_, TimelineResource>(&query)
            .bind(event_ids)
            .fetch_all(pool)
            .await
    }

    /// Create an event with its owned figures and resources, atomically.
    pub async fn create(
        pool: &PgPool,
        graph: &NewTimelineEventGraph,
    ) -> Result<TimelineEventGraph, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let created = Self::insert_graph(&mut tx, graph).await?;
        tx.commit().await?;
        Ok(created)
    }

    /// Create many events in one transaction.
    pub async fn create_many(
        pool: &PgPool,
        graphs: &[NewTimelineEventGraph],
    ) -> Result<Vec<TimelineEventGraph>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut created = Vec::with_capacity(graphs.len());
        for graph in graphs {
            created.push(Self::insert_graph(&mut tx, graph).await?);
        }
        tx.commit().await?;
        Ok(created)
    }

    /// Update-via-replace: stamp the incoming graph with the target id and
    /// persist it wholesale. Scalar fields are overwritten (including to
    /// null), and the owned figures and resources are deleted and
    /// re-inserted from the graph. Returns `None` if the id is absent.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        graph: &NewTimelineEventGraph,
    ) -> Result<Option<TimelineEventGraph>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE timeline_events SET
                year = $2, event_name = $3, details = $4, period = $5, country = $6,
                regions = $7, topics = $8, event_type = $9
             WHERE id = $1
             RETURNING {EVENT_COLUMNS}"
        );
        let event = sqlx::query_as::<_, TimelineEvent>(&query)
            .bind(id)
            .bind(&graph.event.year)
            .bind(&graph.event.event_name)
            .bind(&graph.event.details)
            .bind(&graph.event.period)
            .bind(&graph.event.country)
            .bind(&graph.event.regions)
            .bind(&graph.event.topics)
            .bind(&graph.event.event_type)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(event) = event else {
            tx.rollback().await?;
            return Ok(None);
        };

        sqlx::query("DELETE FROM timeline_event_figures WHERE event_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM timeline_resources WHERE event_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let figures = Self::insert_figures(&mut tx, id, &graph.figures).await?;
        let resources = Self::insert_resources(&mut tx, id, graph).await?;

        tx.commit().await?;
        Ok(Some((event, figures, resources)))
    }

    /// Delete an event by id. Owned figures and resources go with it
    /// (ON DELETE CASCADE).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM timeline_events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert_graph(
        conn: &mut PgConnection,
        graph: &NewTimelineEventGraph,
    ) -> Result<TimelineEventGraph, sqlx::Error> {
        let query = format!(
            "INSERT INTO timeline_events
                (year, event_name, details, period, country, regions, topics, event_type)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {EVENT_COLUMNS}"
        );
        let event = sqlx::query_as::<_, TimelineEvent>(&query)
            .bind(&graph.event.year)
            .bind(&graph.event.event_name)
            .bind(&graph.event.details)
            .bind(&graph.event.period)
            .bind(&graph.event.country)
            .bind(&graph.event.regions)
            .bind(&graph.event.topics)
            .bind(&graph.event.event_type)
            .fetch_one(&mut *conn)
            .await?;

        let figures = Self::insert_figures(conn, event.id, &graph.figures).await?;
        let resources = Self::insert_resources(conn, event.id, graph).await?;

        Ok((event, figures, resources))
    }

    async fn insert_figures(
        conn: &mut PgConnection,
        event_id: DbId,
        names: &[String],
    ) -> Result<Vec<EventFigure>, sqlx::Error> {
        let mut figures = Vec::with_capacity(names.len());
        for name in names {
            let figure = sqlx::query_as::<_, EventFigure>(
                "INSERT INTO timeline_event_figures (event_id, name)
                 VALUES ($1, $2)
                 RETURNING id, event_id, name",
            )
            .bind(event_id)
            .bind(name)
            .fetch_one(&mut *conn)
            .await?;
            figures.push(figure);
        }
        Ok(figures)
    }

    async fn insert_resources(
        conn: &mut PgConnection,
        event_id: DbId,
        graph: &NewTimelineEventGraph,
    ) -> Result<Vec<TimelineResource>, sqlx::Error> {
        let mut resources = Vec::with_capacity(graph.resources.len());
        for resource in &graph.resources {
            let query = format!(
                "INSERT INTO timeline_resources
                    (event_id, title, author, year, type, description, topics, resource_type)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                 RETURNING {RESOURCE_COLUMNS}"
            );
            let row = sqlx::query_as::<_, TimelineResource>(&query)
                .bind(event_id)
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
        Ok(resources)
    }
}
