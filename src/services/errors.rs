#[derive(Debug, PartialEq)]
pub enum ProductServiceError {
    ProductNotFound,
    StoreUnavailable,
}

impl std::error::Error for ProductServiceError {}

impl std::fmt::Display for ProductServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductServiceError::ProductNotFound => write!(f, "Product not found"),
            ProductServiceError::StoreUnavailable => write!(f, "Store unavailable"),
        }
    }
}
