pub mod models;
pub mod mongo;
pub mod store;
