mod dto;
mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::main_lib::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dcf/calculate/{ticker}", get(handlers::calculate_dcf))
        .route("/dcf/suggestions/{ticker}", get(handlers::get_suggestions))
}
