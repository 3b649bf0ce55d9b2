use crate::api::controllers::dto::product_dto::{ProductResponse, UpdateRatingRequest};
use crate::api::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

/// Get all products
pub async fn get_all_products(State(state): State<AppState>) -> impl IntoResponse {
    match state.products.get_all_products().await {
        Ok(products) => {
            let response: Vec<ProductResponse> =
                products.into_iter().map(ProductResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response(),
    }
}

/// Get a product by id
pub async fn get_product_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.products.get_product_by_id(&id).await {
        Ok(Some(product)) => {
            (StatusCode::OK, Json(ProductResponse::from(product))).into_response()
        }
        Ok(None) => (StatusCode::NOT_FOUND, "Product not found").into_response(),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response(),
    }
}

/// Get products by category. A category with no products is an empty
/// 200 response, not a 404.
pub async fn get_products_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> impl IntoResponse {
    match state.products.get_products_by_category(&category).await {
        Ok(products) => {
            let response: Vec<ProductResponse> =
                products.into_iter().map(ProductResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response(),
    }
}

/// Update the product rating
pub async fn update_rating(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateRatingRequest>,
) -> impl IntoResponse {
    match state.products.update_rating(&id, payload.rating).await {
        Ok(Some(product)) => {
            (StatusCode::OK, Json(ProductResponse::from(product))).into_response()
        }
        Ok(None) => (StatusCode::NOT_FOUND, "Product not found").into_response(),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response(),
    }
}
