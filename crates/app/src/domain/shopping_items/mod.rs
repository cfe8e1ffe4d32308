//! Shopping Items

pub mod data;
pub mod errors;
pub mod names;
pub mod records;
mod repository;
pub mod service;

pub use errors::ShoppingItemsServiceError;
pub use service::*;
