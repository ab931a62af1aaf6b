use std::sync::Arc;

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};

use super::{AddResultForm, AppState};
use crate::api::views;
use crate::errors::StoreError;

pub async fn add_result_form(State(state): State<Arc<AppState>>) -> Html<String> {
    let store = state.store.lock().await;
    Html(views::add_result_form(store.roster()))
}

pub async fn add_result(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddResultForm>,
) -> impl IntoResponse {
    let mut store = state.store.lock().await;

    match store.add_result(&form.winner, &form.loser) {
        Ok(()) => Html(views::result_added_page(&form.winner, &form.loser)).into_response(),
        Err(StoreError::UnknownPlayer(_) | StoreError::IdenticalParticipants(_)) => (
            StatusCode::BAD_REQUEST,
            format!(
                "Invalid game result (winner: {}, loser: {})",
                form.winner, form.loser
            ),
        )
            .into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Save error: {e}")).into_response(),
    }
}
