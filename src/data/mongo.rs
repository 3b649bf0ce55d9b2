use crate::data::models::product::Product;
use crate::data::store::{ProductStore, StoreError};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Collection, Database};

const COLLECTION_NAME: &str = "products";

pub struct MongoProductStore {
    collection: Collection<Product>,
}

impl MongoProductStore {
    pub fn new(database: &Database) -> Self {
        MongoProductStore {
            collection: database.collection(COLLECTION_NAME),
        }
    }
}

fn backend(err: mongodb::error::Error) -> StoreError {
    StoreError::Backend(err.to_string())
}

#[async_trait]
impl ProductStore for MongoProductStore {
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let cursor = self.collection.find(doc! {}).await.map_err(backend)?;
        cursor.try_collect().await.map_err(backend)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let oid =
            ObjectId::parse_str(id).map_err(|e| StoreError::InvalidId(e.to_string()))?;

        self.collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(backend)
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Product>, StoreError> {
        // Exact match, case-sensitive. No normalization.
        let cursor = self
            .collection
            .find(doc! { "category": category })
            .await
            .map_err(backend)?;
        cursor.try_collect().await.map_err(backend)
    }

    async fn save(&self, product: Product) -> Result<Product, StoreError> {
        let oid = product
            .id
            .ok_or_else(|| StoreError::Backend("cannot save product without an id".to_string()))?;

        self.collection
            .replace_one(doc! { "_id": oid }, &product)
            .await
            .map_err(backend)?;

        Ok(product)
    }
}
