//! Get Shopping Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shopping_list_app::domain::shopping_items::records::ShoppingItemRecord;

use crate::{
    envelope::Envelope, errors::ApiError, extensions::*,
    shopping_items::errors::into_api_error, state::State,
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ShoppingItemResponse {
    /// The unique identifier of the item
    pub id: Uuid,

    /// The trimmed item name
    pub name: String,

    /// Whether the item has been bought
    pub purchased: bool,

    /// Display order, ascending
    pub position: u64,

    /// The date and time the item was created
    pub created_at: String,

    /// The date and time the item was last marked purchased
    pub purchased_at: Option<String>,
}

impl From<ShoppingItemRecord> for ShoppingItemResponse {
    fn from(item: ShoppingItemRecord) -> Self {
        ShoppingItemResponse {
            id: item.uuid.into(),
            name: item.name,
            purchased: item.purchased,
            position: item.position,
            created_at: item.created_at.to_string(),
            purchased_at: item.purchased_at.as_ref().map(ToString::to_string),
        }
    }
}

/// Get Shopping Item Handler
///
/// Returns a single shopping item.
#[endpoint(tags("shopping-items"), summary = "Get Shopping Item")]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<Envelope<ShoppingItemResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let item = state
        .app
        .shopping_items
        .get_item(id.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(Envelope::new(item.into())))
}
