//! Repository-layer integration tests against a real database:
//! - Create with owned children
//! - Cascade delete behaviour for both schema generations
//! - v1 update-via-mutation vs. v2 update-via-replace
//! - Filtered and distinct-value queries

use sqlx::PgPool;
use timeline_core::filter::EventFilter;
use timeline_db::models::historical_event::{CreateHistoricalEvent, UpdateHistoricalEvent};
use timeline_db::models::resource::CreateResource;
use timeline_db::models::timeline::{
    NewTimelineEvent, NewTimelineEventGraph, NewTimelineResource,
};
use timeline_db::repositories::{HistoricalEventRepo, TimelineEventRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_event(event: &str, figure: &str, period: &str, country: &str) -> CreateHistoricalEvent {
    CreateHistoricalEvent {
        year: "1969".to_string(),
        event: event.to_string(),
        figure: figure.to_string(),
        details: Some(format!("{event} details")),
        period: period.to_string(),
        country: country.to_string(),
        topics: vec!["Topic A".to_string()],
        resources: vec![new_resource("A resource")],
    }
}

fn new_resource(title: &str) -> CreateResource {
    CreateResource {
        title: title.to_string(),
        author: None,
        year: "1969".to_string(),
        kind: None,
        description: None,
        topics: Vec::new(),
        resource_type: "book".to_string(),
    }
}

fn new_timeline_graph(event_name: &str) -> NewTimelineEventGraph {
    NewTimelineEventGraph {
        event: NewTimelineEvent {
            year: "1969".to_string(),
            event_name: event_name.to_string(),
            details: None,
            period: "Modern Era".to_string(),
            country: "USA".to_string(),
            regions: vec!["North America".to_string()],
            topics: vec!["Space Race".to_string()],
            event_type: "scientific".to_string(),
        },
        figures: vec!["Neil Armstrong".to_string(), "Buzz Aldrin".to_string()],
        resources: vec![NewTimelineResource {
            title: "Apollo 11 Mission Report".to_string(),
            author: Some("NASA".to_string()),
            year: Some("1969".to_string()),
            kind: None,
            description: None,
            topics: Vec::new(),
            resource_type: Some("document".to_string()),
        }],
    }
}

async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// v1
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_persists_event_and_children_atomically(pool: PgPool) {
    let input = new_event("Moon Landing", "Neil Armstrong", "Modern Era", "USA");
    let (event, resources) = HistoricalEventRepo::create(&pool, &input).await.unwrap();

    assert!(event.id > 0);
    assert_eq!(event.topics, vec!["Topic A".to_string()]);
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].event_id, event.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_cascades_to_owned_resources(pool: PgPool) {
    let input = new_event("Moon Landing", "Neil Armstrong", "Modern Era", "USA");
    let (event, _) = HistoricalEventRepo::create(&pool, &input).await.unwrap();
    assert_eq!(count_rows(&pool, "resources").await, 1);

    let deleted = HistoricalEventRepo::delete(&pool, event.id).await.unwrap();
    assert!(deleted);
    assert_eq!(count_rows(&pool, "resources").await, 0);

    // Deleting again reports absence rather than erroring.
    let deleted = HistoricalEventRepo::delete(&pool, event.id).await.unwrap();
    assert!(!deleted);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_fields_overwrites_scalars_only(pool: PgPool) {
    let input = new_event("Moon Landing", "Neil Armstrong", "Modern Era", "USA");
    let (event, _) = HistoricalEventRepo::create(&pool, &input).await.unwrap();

    let updated = HistoricalEventRepo::update_fields(
        &pool,
        event.id,
        &UpdateHistoricalEvent {
            year: "1969".to_string(),
            event: "Apollo 11 Landing".to_string(),
            figure: "Neil Armstrong".to_string(),
            details: None,
            period: "Modern Era".to_string(),
            country: "USA".to_string(),
        },
    )
    .await
    .unwrap()
    .expect("event exists");

    assert_eq!(updated.event, "Apollo 11 Landing");
    assert_eq!(updated.details, None);
    // Topics survive a v1 update untouched.
    assert_eq!(updated.topics, vec!["Topic A".to_string()]);
    // And so do resources.
    let resources = HistoricalEventRepo::resources_for(&pool, event.id).await.unwrap();
    assert_eq!(resources.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_filter_matches_event_figure_and_details(pool: PgPool) {
    let moon = new_event("Moon Landing", "Neil Armstrong", "Modern Era", "USA");
    let caesar = new_event(
        "Assassination of Julius Caesar",
        "Julius Caesar",
        "Ancient Period",
        "Rome",
    );
    HistoricalEventRepo::create_many(&pool, &[moon, caesar])
        .await
        .unwrap();

    let hits = HistoricalEventRepo::list(&pool, &EventFilter::Search("armstrong".to_string()))
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].event, "Moon Landing");

    // Details are searched too.
    let hits = HistoricalEventRepo::list(
        &pool,
        &EventFilter::Search("caesar details".to_string()),
    )
    .await
    .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].country, "Rome");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_orders_by_id_for_reproducible_results(pool: PgPool) {
    let first = new_event("First", "A", "P", "C1");
    let second = new_event("Second", "B", "P", "C1");
    HistoricalEventRepo::create_many(&pool, &[first, second])
        .await
        .unwrap();

    let all = HistoricalEventRepo::list(&pool, &EventFilter::All).await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all[0].id < all[1].id);
    assert_eq!(all[0].event, "First");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn distinct_values_deduplicate(pool: PgPool) {
    let a = new_event("A", "X", "Ancient Period", "Egypt");
    let b = new_event("B", "Y", "Ancient Period", "Rome");
    HistoricalEventRepo::create_many(&pool, &[a, b]).await.unwrap();

    let periods = HistoricalEventRepo::distinct_periods(&pool).await.unwrap();
    assert_eq!(periods, vec!["Ancient Period".to_string()]);

    let countries = HistoricalEventRepo::distinct_countries(&pool).await.unwrap();
    assert_eq!(countries, vec!["Egypt".to_string(), "Rome".to_string()]);
}

// ---------------------------------------------------------------------------
// v2
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn v2_create_persists_figures_and_resources(pool: PgPool) {
    let graph = new_timeline_graph("Moon Landing");
    let (event, figures, resources) = TimelineEventRepo::create(&pool, &graph).await.unwrap();

    assert!(event.id > 0);
    assert_eq!(figures.len(), 2);
    assert!(figures.iter().all(|f| f.event_id == event.id));
    assert_eq!(resources.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn v2_delete_cascades_to_figures_and_resources(pool: PgPool) {
    let graph = new_timeline_graph("Moon Landing");
    let (event, _, _) = TimelineEventRepo::create(&pool, &graph).await.unwrap();
    assert_eq!(count_rows(&pool, "timeline_event_figures").await, 2);
    assert_eq!(count_rows(&pool, "timeline_resources").await, 1);

    assert!(TimelineEventRepo::delete(&pool, event.id).await.unwrap());
    assert_eq!(count_rows(&pool, "timeline_event_figures").await, 0);
    assert_eq!(count_rows(&pool, "timeline_resources").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn v2_replace_swaps_children_and_keeps_identity(pool: PgPool) {
    let graph = new_timeline_graph("Moon Landing");
    let (event, _, _) = TimelineEventRepo::create(&pool, &graph).await.unwrap();

    let mut replacement = new_timeline_graph("Apollo 11");
    replacement.figures = vec!["Neil Armstrong".to_string()];
    replacement.resources.clear();

    let (replaced, figures, resources) = TimelineEventRepo::replace(&pool, event.id, &replacement)
        .await
        .unwrap()
        .expect("event exists");

    assert_eq!(replaced.id, event.id);
    assert_eq!(replaced.event_name, "Apollo 11");
    assert_eq!(figures.len(), 1);
    assert!(resources.is_empty());
    assert_eq!(count_rows(&pool, "timeline_event_figures").await, 1);
    assert_eq!(count_rows(&pool, "timeline_resources").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn v2_replace_missing_id_returns_none(pool: PgPool) {
    let graph = new_timeline_graph("Moon Landing");
    let replaced = TimelineEventRepo::replace(&pool, 999_999, &graph).await.unwrap();
    assert!(replaced.is_none());
    // Nothing was inserted by the aborted replace.
    assert_eq!(count_rows(&pool, "timeline_events").await, 0);
    assert_eq!(count_rows(&pool, "timeline_event_figures").await, 0);
}
