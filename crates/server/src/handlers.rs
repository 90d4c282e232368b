use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Serve the combined feed.
/// GET /rss-all.xml
pub async fn rss_all(State(state): State<AppState>) -> Response {
    match state.feed.build_feed().await {
        Ok(xml) => ([(header::CONTENT_TYPE, "application/rss+xml")], xml).into_response(),
        Err(e) => e.into_response(),
    }
}
