//! Handlers for the v1 `/historical` resource.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use timeline_core::error::CoreError;
use timeline_core::filter::EventFilter;
use timeline_core::types::DbId;
use timeline_core::validation::require_non_blank;
use timeline_db::mapper;
use timeline_db::models::historical_event::{
    CreateHistoricalEvent, HistoricalEvent, HistoricalEventDto, UpdateHistoricalEvent,
};
use timeline_db::models::resource::{CreateResource, Resource};
use timeline_db::repositories::HistoricalEventRepo;
use timeline_db::seed::{self, SeedOutcome};

use crate::error::{AppError, AppResult};
use crate::grouping::{group_by_period_and_country, GroupedEvents};
use crate::state::AppState;

/// Query parameters for the filtered listing.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub period: Option<String>,
    pub country: Option<String>,
    pub search: Option<String>,
}

/// GET /historical?period=&country=&search=
///
/// Filtered listing grouped by period, then country. Exactly one filter
/// applies, chosen by the precedence encoded in [`EventFilter`].
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<GroupedEvents>> {
    let filter = EventFilter::from_params(
        params.search.as_deref(),
        params.period.as_deref(),
        params.country.as_deref(),
    );

    let events = HistoricalEventRepo::list(&state.pool, &filter).await?;
    let event_ids: Vec<DbId> = events.iter().map(|e| e.id).collect();
    let resources = HistoricalEventRepo::resources_for_events(&state.pool, &event_ids).await?;

    let dtos = assemble_dtos(&events, resources);
    Ok(Json(group_by_period_and_country(dtos)))
}

/// GET /historical/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<HistoricalEventDto>> {
    let event = HistoricalEventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "HistoricalEvent",
            id,
        }))?;
    let resources = HistoricalEventRepo::resources_for(&state.pool, id).await?;
    Ok(Json(mapper::historical_event_to_dto(&event, &resources)))
}

/// POST /historical
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateHistoricalEvent>,
) -> AppResult<(StatusCode, Json<HistoricalEventDto>)> {
    validate_create(&input)?;
    let (event, resources) = HistoricalEventRepo::create(&state.pool, &input).await?;
    tracing::info!(event_id = event.id, event = %event.event, "Historical event created");
    Ok((
        StatusCode::CREATED,
        Json(mapper::historical_event_to_dto(&event, &resources)),
    ))
}

/// POST /historical/all and POST /historical/bulk
///
/// Atomic bulk create: either the whole batch persists or the request fails.
pub async fn create_many(
    State(state): State<AppState>,
    Json(inputs): Json<Vec<CreateHistoricalEvent>>,
) -> AppResult<(StatusCode, Json<Vec<HistoricalEventDto>>)> {
    for input in &inputs {
        validate_create(input)?;
    }
    let created = HistoricalEventRepo::create_many(&state.pool, &inputs).await?;
    tracing::info!(count = created.len(), "Historical events bulk created");
    let dtos = created
        .iter()
        .map(|(event, resources)| mapper::historical_event_to_dto(event, resources))
        .collect();
    Ok((StatusCode::CREATED, Json(dtos)))
}

/// PUT /historical/{id}
///
/// Update-via-mutation: overwrites the six scalar fields on the existing
/// event; topics and resources are untouched.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateHistoricalEvent>,
) -> AppResult<Json<HistoricalEventDto>> {
    validate_update(&input)?;
    let event = HistoricalEventRepo::update_fields(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "HistoricalEvent",
            id,
        }))?;
    let resources = HistoricalEventRepo::resources_for(&state.pool, id).await?;
    Ok(Json(mapper::historical_event_to_dto(&event, &resources)))
}

/// DELETE /historical/{id}
///
/// Deleting an event cascades to its owned resources.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = HistoricalEventRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "HistoricalEvent",
            id,
        }))
    }
}

/// GET /historical/periods
pub async fn periods(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    Ok(Json(HistoricalEventRepo::distinct_periods(&state.pool).await?))
}

/// GET /historical/countries
pub async fn countries(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    Ok(Json(
        HistoricalEventRepo::distinct_countries(&state.pool).await?,
    ))
}

/// POST /historical/init
///
/// Seed the sample events once; a populated store makes this a no-op.
pub async fn init(State(state): State<AppState>) -> AppResult<String> {
    match seed::seed_sample_events(&state.pool).await? {
        SeedOutcome::Seeded(count) => {
            Ok(format!("Sample data initialized with {count} events"))
        }
        SeedOutcome::AlreadyExists => Ok("Data already exists".to_string()),
    }
}

fn assemble_dtos(events: &[HistoricalEvent], resources: Vec<Resource>) -> Vec<HistoricalEventDto> {
    let mut by_event: HashMap<DbId, Vec<Resource>> = HashMap::new();
    for resource in resources {
        by_event.entry(resource.event_id).or_default().push(resource);
    }
    events
        .iter()
        .map(|event| {
            let children = by_event.get(&event.id).map(Vec::as_slice).unwrap_or(&[]);
            mapper::historical_event_to_dto(event, children)
        })
        .collect()
}

fn validate_create(input: &CreateHistoricalEvent) -> Result<(), AppError> {
    require_non_blank("year", &input.year).map_err(CoreError::Validation)?;
    require_non_blank("event", &input.event).map_err(CoreError::Validation)?;
    require_non_blank("figure", &input.figure).map_err(CoreError::Validation)?;
    require_non_blank("period", &input.period).map_err(CoreError::Validation)?;
    require_non_blank("country", &input.country).map_err(CoreError::Validation)?;
    for resource in &input.resources {
        validate_resource(resource)?;
    }
    Ok(())
}

fn validate_resource(input: &CreateResource) -> Result<(), AppError> {
    require_non_blank("title", &input.title).map_err(CoreError::Validation)?;
    require_non_blank("year", &input.year).map_err(CoreError::Validation)?;
    require_non_blank("resourceType", &input.resource_type).map_err(CoreError::Validation)?;
    Ok(())
}

fn validate_update(input: &UpdateHistoricalEvent) -> Result<(), AppError> {
    require_non_blank("year", &input.year).map_err(CoreError::Validation)?;
    require_non_blank("event", &input.event).map_err(CoreError::Validation)?;
    require_non_blank("figure", &input.figure).map_err(CoreError::Validation)?;
    require_non_blank("period", &input.period).map_err(CoreError::Validation)?;
    require_non_blank("country", &input.country).map_err(CoreError::Validation)?;
    Ok(())
}
