//! Shopping Item Errors

use serde_json::{Value, json};
use tracing::warn;

use shopping_list_app::domain::shopping_items::{
    ShoppingItemsServiceError, names::ItemNameError,
};

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: ShoppingItemsServiceError) -> ApiError {
    let message = error.to_string();

    match error {
        ShoppingItemsServiceError::InvalidName(reason) => {
            ApiError::validation(message).with_details(json!([name_issue(&reason)]))
        }
        ShoppingItemsServiceError::EmptySelection => {
            ApiError::validation(message).with_details(json!([{
                "field": "itemIds",
                "code": "empty",
                "message": ShoppingItemsServiceError::EmptySelection.to_string(),
            }]))
        }
        ShoppingItemsServiceError::NotFound => ApiError::not_found(message),
        ShoppingItemsServiceError::ItemsNotFound(uuids) => {
            warn!(missing = uuids.len(), "bulk update referenced unknown items");

            let not_found_ids: Vec<String> = uuids.iter().map(ToString::to_string).collect();

            ApiError::not_found(message).with_details(json!({ "notFoundIds": not_found_ids }))
        }
    }
}

/// One entry of a validation error's `details` list.
fn name_issue(reason: &ItemNameError) -> Value {
    let message = reason.to_string();

    match reason {
        ItemNameError::Empty => json!({ "field": "name", "code": "empty", "message": message }),
        ItemNameError::TooLong { max, actual } => json!({
            "field": "name",
            "code": "too_long",
            "message": message,
            "max": max,
            "actual": actual,
        }),
        ItemNameError::InvalidCharacters => json!({
            "field": "name",
            "code": "invalid_characters",
            "message": message,
        }),
    }
}
