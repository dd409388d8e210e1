//! Handlers for the `/books/content` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use timeline_core::validation::require_non_blank;
use timeline_core::error::CoreError;
use timeline_db::models::book_content::{BookContent, CreateBookContent};
use timeline_db::repositories::BookContentRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for the content lookup.
#[derive(Debug, Deserialize)]
pub struct ContentParams {
    pub title: String,
    pub author: String,
}

/// GET /books/content?title=&author=
///
/// All contents matching the exact title and author. A non-matching query
/// is a 404, not a fault; several editions of one title can match at once.
pub async fn get_content(
    State(state): State<AppState>,
    Query(params): Query<ContentParams>,
) -> AppResult<Json<Vec<BookContent>>> {
    let books =
        BookContentRepo::find_by_title_and_author(&state.pool, &params.title, &params.author)
            .await?;
    if books.is_empty() {
        return Err(AppError::NotFound("Book content not found".to_string()));
    }
    Ok(Json(books))
}

/// POST /books/content
pub async fn add_content(
    State(state): State<AppState>,
    Json(input): Json<CreateBookContent>,
) -> AppResult<(StatusCode, Json<BookContent>)> {
    require_non_blank("title", &input.title).map_err(CoreError::Validation)?;
    require_non_blank("author", &input.author).map_err(CoreError::Validation)?;
    let book = BookContentRepo::create(&state.pool, &input).await?;
    tracing::info!(book_id = book.id, title = %book.title, "Book content added");
    Ok((StatusCode::CREATED, Json(book)))
}
