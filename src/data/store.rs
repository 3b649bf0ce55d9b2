use crate::data::models::product::Product;
use async_trait::async_trait;

#[derive(Debug)]
pub enum StoreError {
    InvalidId(String),
    Backend(String),
}

impl std::error::Error for StoreError {}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::InvalidId(detail) => write!(f, "Invalid product id: {}", detail),
            StoreError::Backend(detail) => write!(f, "Store backend failure: {}", detail),
        }
    }
}

/// Persistence collaborator for the product catalog. The store owns
/// durability and query execution; callers get no transaction or
/// locking primitives beyond single find/save round-trips.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Product>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError>;

    async fn find_by_category(&self, category: &str) -> Result<Vec<Product>, StoreError>;

    /// Replaces the stored document matching `product.id` with the
    /// given state and returns it.
    async fn save(&self, product: Product) -> Result<Product, StoreError>;
}
