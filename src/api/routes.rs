use std::sync::Arc;

use axum::{Router, routing::get};

use crate::api::handlers::{
    AppState,
    players::{add_player, add_player_form},
    results::{add_result, add_result_form},
    standings::get_standings,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(get_standings))
        .route("/addPlayer", get(add_player_form).post(add_player))
        .route("/addResult", get(add_result_form).post(add_result))
        .with_state(state)
}
