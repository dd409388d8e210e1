//! Route definitions for the v2 `/v2/timeline` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::timeline;
use crate::state::AppState;

/// v2 event routes.
///
/// ```text
/// GET    /                    -> list_all
/// POST   /                    -> create
/// POST   /all                 -> create_many
/// GET    /country/{country}   -> list_by_country
/// GET    /period/{period}     -> list_by_period
/// GET    /{id}                -> get_by_id
/// PUT    /{id}                -> update (replace)
/// DELETE /{id}                -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(timeline::list_all).post(timeline::create))
        .route("/all", post(timeline::create_many))
        .route("/country/{country}", get(timeline::list_by_country))
        .route("/period/{period}", get(timeline::list_by_period))
        .route(
            "/{id}",
            get(timeline::get_by_id)
                .put(timeline::update)
                .delete(timeline::delete),
        )
}
