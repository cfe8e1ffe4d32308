//! Shopping List Domain Concerns

pub mod shopping_items;
