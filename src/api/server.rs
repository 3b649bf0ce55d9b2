use crate::api::config::Config;
use crate::api::routes::product_routes;
use crate::api::state::AppState;
use crate::data::mongo::MongoProductStore;
use crate::services::product_service::ProductService;
use axum::Router;
use mongodb::Client;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

pub async fn start() {
    let config = Config::new();

    let client = Client::with_uri_str(&config.mongodb_uri)
        .await
        .expect("Failed to create MongoDB client");
    let database = client.database(&config.mongodb_database);
    let store = Arc::new(MongoProductStore::new(&database));

    let state = AppState::new(ProductService::new(store));

    let cors_layer = CorsLayer::new().allow_origin(Any);
    let router = Router::new()
        .nest("/api/products", product_routes::routes())
        .layer(cors_layer)
        .with_state(state);

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server running on http://{}", config.bind_address);

    axum::serve(listener, router)
        .await
        .expect("Failed to start the server");
}
