//! Shopping items service errors.

use thiserror::Error;

use crate::domain::shopping_items::{names::ItemNameError, records::ShoppingItemUuid};

#[derive(Debug, Error)]
pub enum ShoppingItemsServiceError {
    #[error(transparent)]
    InvalidName(#[from] ItemNameError),

    #[error("at least one item must be selected")]
    EmptySelection,

    #[error("shopping item not found")]
    NotFound,

    #[error("shopping items not found: {}", join_uuids(.0))]
    ItemsNotFound(Vec<ShoppingItemUuid>),
}

fn join_uuids(uuids: &[ShoppingItemUuid]) -> String {
    uuids
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
