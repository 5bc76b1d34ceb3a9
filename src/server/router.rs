use axum::{routing::get, Router};

use crate::server::{
    controller::status::{get_bot, get_status},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_status))
        .route("/bot/{index}", get(get_bot))
}
