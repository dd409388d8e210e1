//! Bidirectional entity/DTO mapping.
//!
//! Pure and side-effect free: rows (plus their loaded children) in, wire
//! DTOs out, and inversely DTOs to insertable values. Identity is dropped
//! on the DTO-to-entity direction (ids are store-assigned), and the v1
//! resource-to-event back-reference is never restored from a DTO.

use std::collections::BTreeSet;

use crate::models::historical_event::{CreateHistoricalEvent, HistoricalEvent, HistoricalEventDto};
use crate::models::resource::{CreateResource, Resource, ResourceDto};
use crate::models::timeline::{
    EventFigure, NewTimelineEvent, NewTimelineEventGraph, NewTimelineResource, TimelineEvent,
    TimelineEventDto, TimelineResource, TimelineResourceDto,
};

// ---------------------------------------------------------------------------
// v1
// ---------------------------------------------------------------------------

/// Map a v1 event row and its loaded resources to the wire DTO.
///
/// Resource order follows the order of `resources` as given.
pub fn historical_event_to_dto(
    event: &HistoricalEvent,
    resources: &[Resource],
) -> HistoricalEventDto {
    HistoricalEventDto {
        id: event.id,
        year: event.year.clone(),
        event: event.event.clone(),
        figure: event.figure.clone(),
        details: event.details.clone(),
        period: event.period.clone(),
        country: event.country.clone(),
        topics: event.topics.clone(),
        resources: resources.iter().map(resource_to_dto).collect(),
    }
}

/// Map a v1 resource row to the wire DTO. The owning event is intentionally
/// not represented.
pub fn resource_to_dto(resource: &Resource) -> ResourceDto {
    ResourceDto {
        id: resource.id,
        title: resource.title.clone(),
        author: resource.author.clone(),
        year: resource.year.clone(),
        kind: resource.kind.clone(),
        description: resource.description.clone(),
        topics: resource.topics.clone(),
        resource_type: resource.resource_type.clone(),
    }
}

/// Inverse of [`historical_event_to_dto`] minus identity: produce the create
/// payload that would reconstruct the same scalar and collection values.
pub fn dto_to_create(dto: &HistoricalEventDto) -> CreateHistoricalEvent {
    CreateHistoricalEvent {
        year: dto.year.clone(),
        event: dto.event.clone(),
        figure: dto.figure.clone(),
        details: dto.details.clone(),
        period: dto.period.clone(),
        country: dto.country.clone(),
        topics: dto.topics.clone(),
        resources: dto.resources.iter().map(resource_dto_to_create).collect(),
    }
}

pub fn resource_dto_to_create(dto: &ResourceDto) -> CreateResource {
    CreateResource {
        title: dto.title.clone(),
        author: dto.author.clone(),
        year: dto.year.clone(),
        kind: dto.kind.clone(),
        description: dto.description.clone(),
        topics: dto.topics.clone(),
        resource_type: dto.resource_type.clone(),
    }
}

// ---------------------------------------------------------------------------
// v2
// ---------------------------------------------------------------------------

/// Map a v2 event row plus its loaded figures and resources to the wire DTO.
///
/// List-typed storage collections become sets on the DTO; a row can never
/// hand a null collection to the wire.
pub fn timeline_event_to_dto(
    event: &TimelineEvent,
    figures: &[EventFigure],
    resources: &[TimelineResource],
) -> TimelineEventDto {
    TimelineEventDto {
        id: Some(event.id),
        year: event.year.clone(),
        event_name: event.event_name.clone(),
        figures: figures.iter().map(|f| f.name.clone()).collect(),
        details: event.details.clone(),
        period: event.period.clone(),
        country: event.country.clone(),
        regions: event.regions.iter().cloned().collect(),
        topics: event.topics.iter().cloned().collect(),
        event_type: event.event_type.clone(),
        resources: resources.iter().map(timeline_resource_to_dto).collect(),
    }
}

pub fn timeline_resource_to_dto(resource: &TimelineResource) -> TimelineResourceDto {
    TimelineResourceDto {
        id: Some(resource.id),
        title: resource.title.clone(),
        author: resource.author.clone(),
        year: resource.year.clone(),
        kind: resource.kind.clone(),
        description: resource.description.clone(),
        topics: resource.topics.iter().cloned().collect(),
        resource_type: resource.resource_type.clone(),
    }
}

/// Map an incoming v2 DTO to insertable parts: the event row values, one
/// owned figure per name, and the owned resources. Set-typed fields come
/// out sorted and deduplicated; incoming ids are discarded.
pub fn dto_to_graph(dto: &TimelineEventDto) -> NewTimelineEventGraph {
    NewTimelineEventGraph {
        event: NewTimelineEvent {
            year: dto.year.clone(),
            event_name: dto.event_name.clone(),
            details: dto.details.clone(),
            period: dto.period.clone(),
            country: dto.country.clone(),
            regions: set_to_vec(&dto.regions),
            topics: set_to_vec(&dto.topics),
            event_type: dto.event_type.clone(),
        },
        figures: dto.figures.iter().cloned().collect(),
        resources: dto.resources.iter().map(resource_dto_to_new).collect(),
    }
}

pub fn resource_dto_to_new(dto: &TimelineResourceDto) -> NewTimelineResource {
    NewTimelineResource {
        title: dto.title.clone(),
        author: dto.author.clone(),
        year: dto.year.clone(),
        kind: dto.kind.clone(),
        description: dto.description.clone(),
        topics: set_to_vec(&dto.topics),
        resource_type: dto.resource_type.clone(),
    }
}

fn set_to_vec(set: &BTreeSet<String>) -> Vec<String> {
    set.iter().cloned().collect()
}
