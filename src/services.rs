pub mod errors;
pub mod product_service;
