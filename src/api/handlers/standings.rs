use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};

use super::AppState;
use crate::api::views;
use crate::rating;

pub async fn get_standings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.lock().await;

    let matches = match store.match_records() {
        Ok(matches) => matches,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Match log error: {e}"),
            )
                .into_response();
        }
    };

    let ratings = match rating::compute_ratings(store.roster(), &matches, &state.config.rating) {
        Ok(ratings) => ratings,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Rating error: {e}"),
            )
                .into_response();
        }
    };

    let rows = rating::standings(store.roster(), &ratings);
    Html(views::standings_page(&rows)).into_response()
}
