//! Route definitions.

pub mod books;
pub mod health;
pub mod historical;
pub mod timeline;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (mounted at the root).
///
/// ```text
/// /historical                v1 events: filtered/grouped list, create, bulk
/// /historical/{id}           get, update (mutation), delete
/// /historical/periods        distinct periods
/// /historical/countries      distinct countries
/// /historical/init           seed sample data
///
/// /v2/timeline               v2 events: list, create, bulk
/// /v2/timeline/{id}          get, update (replace), delete
/// /v2/timeline/country/{c}   exact-match listing
/// /v2/timeline/period/{p}    exact-match listing
///
/// /books/content             lookup by title+author, add content
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/historical", historical::router())
        .nest("/v2/timeline", timeline::router())
        .nest("/books", books::router())
}
