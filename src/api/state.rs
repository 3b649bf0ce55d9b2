use crate::services::product_service::ProductService;

#[derive(Clone)]
pub struct AppState {
    pub products: ProductService,
}

impl AppState {
    pub fn new(products: ProductService) -> Self {
        AppState { products }
    }
}
