//! Route definitions for the `/books` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::books;
use crate::state::AppState;

/// Book content routes.
///
/// ```text
/// GET  /content   -> get_content (?title, author)
/// POST /content   -> add_content
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/content", get(books::get_content).post(books::add_content))
}
