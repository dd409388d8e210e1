//! Route definitions for the v1 `/historical` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::historical;
use crate::state::AppState;

/// v1 event routes.
///
/// ```text
/// GET    /              -> list (?period, country, search; grouped output)
/// POST   /              -> create
/// POST   /all           -> create_many
/// POST   /bulk          -> create_many (legacy alias)
/// GET    /periods       -> periods
/// GET    /countries     -> countries
/// POST   /init          -> init (seed sample data)
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(historical::list).post(historical::create))
        .route("/all", post(historical::create_many))
        .route("/bulk", post(historical::create_many))
        .route("/periods", get(historical::periods))
        .route("/countries", get(historical::countries))
        .route("/init", post(historical::init))
        .route(
            "/{id}",
            get(historical::get_by_id)
                .put(historical::update)
                .delete(historical::delete),
        )
}
