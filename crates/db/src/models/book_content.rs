//! Full-text book content model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use timeline_core::types::{DbId, Timestamp};

/// A row from the `book_contents` table.
///
/// Stands alone; the former one-to-one link to a resource was dropped and
/// is not part of this schema.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BookContent {
    pub id: DbId,
    pub title: String,
    pub author: String,
    /// Large text blob; omitted from output when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip)]
    pub created_at: Timestamp,
}

/// Create payload for book content.
#[derive(Debug, Deserialize)]
pub struct CreateBookContent {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub content: Option<String>,
}
