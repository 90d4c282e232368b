use axum::{routing::get, Router};

use crate::{handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/rss-all.xml", get(handlers::rss_all))
        .with_state(state)
}
