use crate::data::models::product::Product;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct UpdateRatingRequest {
    pub rating: f64,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: String,
    pub brand: String,
    pub stock: i64,
    pub rating: f64,
    pub num_reviews: i64,
    pub created_at: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            image: product.image,
            brand: product.brand,
            stock: product.stock,
            rating: product.rating,
            num_reviews: product.num_reviews,
            created_at: product
                .created_at
                .try_to_rfc3339_string()
                .unwrap_or_default(),
        }
    }
}
