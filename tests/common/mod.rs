#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use catalog_server_lib::api::routes::product_routes;
use catalog_server_lib::api::state::AppState;
use catalog_server_lib::data::models::product::Product;
use catalog_server_lib::data::store::{ProductStore, StoreError};
use catalog_server_lib::services::product_service::ProductService;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::DateTime;
use std::sync::{Arc, Mutex};
use tokio::sync::Barrier;

/// In-memory stand-in for the MongoDB store, keeping products in
/// insertion order.
pub struct MemoryProductStore {
    products: Mutex<Vec<Product>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        MemoryProductStore {
            products: Mutex::new(Vec::new()),
        }
    }

    /// Assigns an id and stores the product, returning the id as hex.
    pub fn insert(&self, mut product: Product) -> String {
        let oid = ObjectId::new();
        product.id = Some(oid);
        self.products.lock().unwrap().push(product);
        oid.to_hex()
    }

    pub fn snapshot(&self) -> Vec<Product> {
        self.products.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.products.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id.map(|oid| oid.to_hex()).as_deref() == Some(id))
            .cloned())
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Product>, StoreError> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    async fn save(&self, product: Product) -> Result<Product, StoreError> {
        let mut products = self.products.lock().unwrap();
        if let Some(slot) = products.iter_mut().find(|p| p.id == product.id) {
            *slot = product.clone();
        }
        Ok(product)
    }
}

/// Store whose every call fails, for exercising the 500 path.
pub struct FailingProductStore;

#[async_trait]
impl ProductStore for FailingProductStore {
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        Err(StoreError::Backend("simulated outage".to_string()))
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Product>, StoreError> {
        Err(StoreError::Backend("simulated outage".to_string()))
    }

    async fn find_by_category(&self, _category: &str) -> Result<Vec<Product>, StoreError> {
        Err(StoreError::Backend("simulated outage".to_string()))
    }

    async fn save(&self, _product: Product) -> Result<Product, StoreError> {
        Err(StoreError::Backend("simulated outage".to_string()))
    }
}

/// Wrapper that holds every `find_by_id` caller at a barrier until the
/// expected number of readers has arrived, forcing two rating updates
/// to both read the same snapshot before either writes.
pub struct GatedProductStore {
    inner: Arc<MemoryProductStore>,
    read_barrier: Barrier,
}

impl GatedProductStore {
    pub fn new(inner: Arc<MemoryProductStore>, readers: usize) -> Self {
        GatedProductStore {
            inner,
            read_barrier: Barrier::new(readers),
        }
    }
}

#[async_trait]
impl ProductStore for GatedProductStore {
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let found = self.inner.find_by_id(id).await;
        self.read_barrier.wait().await;
        found
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Product>, StoreError> {
        self.inner.find_by_category(category).await
    }

    async fn save(&self, product: Product) -> Result<Product, StoreError> {
        self.inner.save(product).await
    }
}

pub fn sample_product(name: &str, category: &str, rating: f64, num_reviews: i64) -> Product {
    Product {
        id: None,
        name: name.to_string(),
        description: "Test Description".to_string(),
        price: 19.99,
        category: category.to_string(),
        image: "https://example.com/product.jpg".to_string(),
        brand: "Test Brand".to_string(),
        stock: 10,
        rating,
        num_reviews,
        created_at: DateTime::now(),
    }
}

pub fn app(store: Arc<dyn ProductStore>) -> Router {
    let state = AppState::new(ProductService::new(store));
    Router::new()
        .nest("/api/products", product_routes::routes())
        .with_state(state)
}
