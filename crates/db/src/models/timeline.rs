//! v2 timeline model.
//!
//! Generalizes the v1 schema: multiple figures (each an owned child row),
//! region/topic sets, and an event type label. v2 resources carry no
//! back-reference; they are owned purely by the parent collection.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use timeline_core::types::{DbId, Timestamp};

/// A row from the `timeline_events` table.
#[derive(Debug, Clone, FromRow)]
pub struct TimelineEvent {
    pub id: DbId,
    pub year: String,
    pub event_name: String,
    pub details: Option<String>,
    pub period: String,
    pub country: String,
    /// Set semantics; stored sorted and deduplicated.
    pub regions: Vec<String>,
    pub topics: Vec<String>,
    pub event_type: String,
    pub created_at: Timestamp,
}

/// A row from the `timeline_event_figures` table.
///
/// An entity wrapping a single name, existing only so an event can own
/// many figures.
#[derive(Debug, Clone, FromRow)]
pub struct EventFigure {
    pub id: DbId,
    pub event_id: DbId,
    pub name: String,
}

/// A row from the `timeline_resources` table.
#[derive(Debug, Clone, FromRow)]
pub struct TimelineResource {
    pub id: DbId,
    pub event_id: DbId,
    pub title: String,
    pub author: Option<String>,
    pub year: Option<String>,
    #[sqlx(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
    pub topics: Vec<String>,
    pub resource_type: Option<String>,
}

/// Wire DTO for a v2 event. Serves as both the read representation and the
/// create/replace payload; the id is ignored on writes.
///
/// All collection fields default to empty and are always serialized, so a
/// missing collection in the payload never becomes a null downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEventDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub year: String,
    pub event_name: String,
    #[serde(default)]
    pub figures: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub period: String,
    pub country: String,
    #[serde(default)]
    pub regions: BTreeSet<String>,
    #[serde(default)]
    pub topics: BTreeSet<String>,
    pub event_type: String,
    #[serde(default)]
    pub resources: Vec<TimelineResourceDto>,
}

/// Wire DTO for a v2 resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineResourceDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub topics: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

/// Column values for inserting a `timeline_events` row, produced by the
/// mapper from an incoming DTO.
#[derive(Debug, Clone)]
pub struct NewTimelineEvent {
    pub year: String,
    pub event_name: String,
    pub details: Option<String>,
    pub period: String,
    pub country: String,
    pub regions: Vec<String>,
    pub topics: Vec<String>,
    pub event_type: String,
}

/// Column values for inserting a `timeline_resources` row.
#[derive(Debug, Clone)]
pub struct NewTimelineResource {
    pub title: String,
    pub author: Option<String>,
    pub year: Option<String>,
    pub kind: Option<String>,
    pub description: Option<String>,
    pub topics: Vec<String>,
    pub resource_type: Option<String>,
}

/// The mapped parts of an incoming v2 DTO, ready for insertion inside one
/// transaction: the event row, one owned figure per name, and the owned
/// resources.
#[derive(Debug, Clone)]
pub struct NewTimelineEventGraph {
    pub event: NewTimelineEvent,
    pub figures: Vec<String>,
    pub resources: Vec<NewTimelineResource>,
}
