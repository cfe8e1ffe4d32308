//! Shopping list application domain and in-memory storage.

pub mod context;
pub mod domain;

#[cfg(test)]
mod test;

mod uuids;

pub use domain::shopping_items;
