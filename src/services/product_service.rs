use crate::data::models::product::Product;
use crate::data::store::ProductStore;
use crate::services::errors::ProductServiceError;
use std::sync::Arc;

#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        ProductService { store }
    }

    /// Gets the full catalog, in insertion order.
    pub async fn get_all_products(&self) -> Result<Vec<Product>, ProductServiceError> {
        self.store.find_all().await.map_err(|e| {
            tracing::error!(error = %e, "failed to list products");
            ProductServiceError::StoreUnavailable
        })
    }

    /// Gets a product by id. `Ok(None)` means no matching record.
    pub async fn get_product_by_id(
        &self,
        id: &str,
    ) -> Result<Option<Product>, ProductServiceError> {
        self.store.find_by_id(id).await.map_err(|e| {
            tracing::error!(error = %e, product_id = id, "failed to load product");
            ProductServiceError::StoreUnavailable
        })
    }

    /// Gets all products in a category. An empty result is a valid
    /// success, not a miss; only single-record lookup reports not-found.
    pub async fn get_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, ProductServiceError> {
        self.store.find_by_category(category).await.map_err(|e| {
            tracing::error!(error = %e, category, "failed to query category");
            ProductServiceError::StoreUnavailable
        })
    }

    /// Folds one reviewer's score into the product's running average
    /// and persists the result. `Ok(None)` means no matching record and
    /// nothing was written.
    ///
    /// This is a plain read-then-write with no lock or transaction:
    /// two concurrent calls against the same id can interleave between
    /// the load and the save, and the later save wins (lost update).
    /// `rating` is folded as-is; no range check is applied.
    pub async fn update_rating(
        &self,
        id: &str,
        rating: f64,
    ) -> Result<Option<Product>, ProductServiceError> {
        let product = self.store.find_by_id(id).await.map_err(|e| {
            tracing::error!(error = %e, product_id = id, "failed to load product for rating");
            ProductServiceError::StoreUnavailable
        })?;

        let mut product = match product {
            Some(p) => p,
            None => return Ok(None),
        };

        let new_num_reviews = product.num_reviews + 1;
        let new_rating_sum = product.rating * product.num_reviews as f64 + rating;
        let new_average_rating = new_rating_sum / new_num_reviews as f64;

        product.rating = new_average_rating;
        product.num_reviews = new_num_reviews;

        let saved = self.store.save(product).await.map_err(|e| {
            tracing::error!(error = %e, product_id = id, "failed to save rating update");
            ProductServiceError::StoreUnavailable
        })?;

        Ok(Some(saved))
    }
}
