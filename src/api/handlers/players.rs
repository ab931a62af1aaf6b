use std::sync::Arc;

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};

use super::{AddPlayerForm, AppState};
use crate::api::views;
use crate::errors::StoreError;
use crate::store::AddPlayerOutcome;

pub async fn add_player_form() -> Html<String> {
    Html(views::add_player_form())
}

pub async fn add_player(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddPlayerForm>,
) -> impl IntoResponse {
    let mut store = state.store.lock().await;

    match store.add_player(&form.player) {
        Ok(AddPlayerOutcome::Added | AddPlayerOutcome::AlreadyExists) => {
            Html(views::player_added_page(&form.player)).into_response()
        }
        Err(StoreError::InvalidName(name)) => Html(views::invalid_name_page(&name)).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Save error: {e}")).into_response(),
    }
}
