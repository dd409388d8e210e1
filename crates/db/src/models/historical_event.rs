//! v1 historical event model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use timeline_core::types::{DbId, Timestamp};

use crate::models::resource::{CreateResource, ResourceDto};

/// A row from the `historical_events` table.
///
/// Owned `Resource` children live in the `resources` table and are loaded
/// by the repository; `created_at` is storage-only and never serialized.
#[derive(Debug, Clone, FromRow)]
pub struct HistoricalEvent {
    pub id: DbId,
    /// Free text, not necessarily numeric ("3150 BCE").
    pub year: String,
    pub event: String,
    pub figure: String,
    pub details: Option<String>,
    pub period: String,
    pub country: String,
    pub topics: Vec<String>,
    pub created_at: Timestamp,
}

/// Wire DTO for a v1 event, including its mapped resources.
///
/// Optional scalars are omitted from output when absent; collections are
/// always present and default to empty on input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalEventDto {
    pub id: DbId,
    pub year: String,
    pub event: String,
    pub figure: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub period: String,
    pub country: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub resources: Vec<ResourceDto>,
}

/// Create payload for a v1 event. The id is store-assigned, never
/// client-supplied.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHistoricalEvent {
    pub year: String,
    pub event: String,
    pub figure: String,
    #[serde(default)]
    pub details: Option<String>,
    pub period: String,
    pub country: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub resources: Vec<CreateResource>,
}

/// Update payload for a v1 event.
///
/// v1 updates mutate exactly these six scalar fields on the existing row;
/// topics and resources are left untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateHistoricalEvent {
    pub year: String,
    pub event: String,
    pub figure: String,
    #[serde(default)]
    pub details: Option<String>,
    pub period: String,
    pub country: String,
}
