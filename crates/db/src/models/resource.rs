//! v1 bibliographic resource model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use timeline_core::types::DbId;

/// A row from the `resources` table.
///
/// Many resources belong to one event; the row is deleted with its owner
/// (ON DELETE CASCADE). The owning event is not mapped back onto the DTO,
/// which avoids serialization cycles.
#[derive(Debug, Clone, FromRow)]
pub struct Resource {
    pub id: DbId,
    pub event_id: DbId,
    pub title: String,
    pub author: Option<String>,
    pub year: String,
    #[sqlx(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
    pub topics: Vec<String>,
    pub resource_type: String,
}

/// Wire DTO for a v1 resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDto {
    pub id: DbId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub year: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    /// Category label: "book", "artifact", "document", "study".
    pub resource_type: String,
}

/// Create payload for a v1 resource, nested under its event's create payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResource {
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    pub year: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub resource_type: String,
}
