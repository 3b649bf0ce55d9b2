use crate::api::controllers::product_controller;
use crate::api::state::AppState;
use axum::routing::{get, put};
use axum::Router;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(product_controller::get_all_products))
        .route("/{id}", get(product_controller::get_product_by_id))
        .route(
            "/category/{category}",
            get(product_controller::get_products_by_category),
        )
        .route("/{id}/rating", put(product_controller::update_rating))
}
