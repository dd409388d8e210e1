//! Handlers for the v2 `/v2/timeline` resource.
//!
//! The v2 contract is deliberately narrower than v1: exact country or
//! period filters on separate paths, no free-text search, no grouping.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use timeline_core::error::CoreError;
use timeline_core::types::DbId;
use timeline_core::validation::require_non_blank;
use timeline_db::mapper;
use timeline_db::models::timeline::{
    EventFigure, TimelineEvent, TimelineEventDto, TimelineResource,
};
use timeline_db::repositories::TimelineEventRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /v2/timeline
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<TimelineEventDto>>> {
    let events = TimelineEventRepo::list_all(&state.pool).await?;
    Ok(Json(load_and_map(&state, events).await?))
}

/// GET /v2/timeline/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TimelineEventDto>> {
    let event = TimelineEventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;
    let figures = TimelineEventRepo::figures_for_events(&state.pool, &[id]).await?;
    let resources = TimelineEventRepo::resources_for_events(&state.pool, &[id]).await?;
    Ok(Json(mapper::timeline_event_to_dto(&event, &figures, &resources)))
}

/// GET /v2/timeline/country/{country}
pub async fn list_by_country(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> AppResult<Json<Vec<TimelineEventDto>>> {
    let events = TimelineEventRepo::list_by_country(&state.pool, &country).await?;
    Ok(Json(load_and_map(&state, events).await?))
}

/// GET /v2/timeline/period/{period}
pub async fn list_by_period(
    State(state): State<AppState>,
    Path(period): Path<String>,
) -> AppResult<Json<Vec<TimelineEventDto>>> {
    let events = TimelineEventRepo::list_by_period(&state.pool, &period).await?;
    Ok(Json(load_and_map(&state, events).await?))
}

/// POST /v2/timeline
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<TimelineEventDto>,
) -> AppResult<(StatusCode, Json<TimelineEventDto>)> {
    validate_dto(&dto)?;
    let graph = mapper::dto_to_graph(&dto);
    let (event, figures, resources) = TimelineEventRepo::create(&state.pool, &graph).await?;
    tracing::info!(event_id = event.id, event_name = %event.event_name, "Timeline event created");
    Ok((
        StatusCode::CREATED,
        Json(mapper::timeline_event_to_dto(&event, &figures, &resources)),
    ))
}

/// POST /v2/timeline/all
pub async fn create_many(
    State(state): State<AppState>,
    Json(dtos): Json<Vec<TimelineEventDto>>,
) -> AppResult<(StatusCode, Json<Vec<TimelineEventDto>>)> {
    for dto in &dtos {
        validate_dto(dto)?;
    }
    let graphs: Vec<_> = dtos.iter().map(mapper::dto_to_graph).collect();
    let created = TimelineEventRepo::create_many(&state.pool, &graphs).await?;
    tracing::info!(count = created.len(), "Timeline events bulk created");
    let mapped = created
        .iter()
        .map(|(event, figures, resources)| {
            mapper::timeline_event_to_dto(event, figures, resources)
        })
        .collect();
    Ok((StatusCode::CREATED, Json(mapped)))
}

/// PUT /v2/timeline/{id}
///
/// Update-via-replace: the incoming DTO is mapped to a fresh graph, stamped
/// with the target id, and persisted wholesale. Fields absent from the DTO
/// end up null or empty on the stored event.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(dto): Json<TimelineEventDto>,
) -> AppResult<Json<TimelineEventDto>> {
    validate_dto(&dto)?;
    let graph = mapper::dto_to_graph(&dto);
    let (event, figures, resources) = TimelineEventRepo::replace(&state.pool, id, &graph)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;
    Ok(Json(mapper::timeline_event_to_dto(&event, &figures, &resources)))
}

/// DELETE /v2/timeline/{id}
///
/// Deleting an event cascades to its owned figures and resources.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = TimelineEventRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Event", id }))
    }
}

/// Batch-load the children for a page of events and map everything to DTOs,
/// preserving the events' id order.
async fn load_and_map(
    state: &AppState,
    events: Vec<TimelineEvent>,
) -> Result<Vec<TimelineEventDto>, AppError> {
    let event_ids: Vec<DbId> = events.iter().map(|e| e.id).collect();
    let figures = TimelineEventRepo::figures_for_events(&state.pool, &event_ids).await?;
    let resources = TimelineEventRepo::resources_for_events(&state.pool, &event_ids).await?;

    let mut figures_by_event: HashMap<DbId, Vec<EventFigure>> = HashMap::new();
    for figure in figures {
        figures_by_event.entry(figure.event_id).or_default().push(figure);
    }
    let mut resources_by_event: HashMap<DbId, Vec<TimelineResource>> = HashMap::new();
    for resource in resources {
        resources_by_event
            .entry(resource.event_id)
            .or_default()
            .push(resource);
    }

    Ok(events
        .iter()
        .map(|event| {
            let figures = figures_by_event
                .get(&event.id)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let resources = resources_by_event
                .get(&event.id)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            mapper::timeline_event_to_dto(event, figures, resources)
        })
        .collect())
}

fn validate_dto(dto: &TimelineEventDto) -> Result<(), AppError> {
    require_non_blank("year", &dto.year).map_err(CoreError::Validation)?;
    require_non_blank("eventName", &dto.event_name).map_err(CoreError::Validation)?;
    require_non_blank("period", &dto.period).map_err(CoreError::Validation)?;
    require_non_blank("country", &dto.country).map_err(CoreError::Validation)?;
    require_non_blank("eventType", &dto.event_type).map_err(CoreError::Validation)?;
    for resource in &dto.resources {
        require_non_blank("title", &resource.title).map_err(CoreError::Validation)?;
    }
    Ok(())
}
