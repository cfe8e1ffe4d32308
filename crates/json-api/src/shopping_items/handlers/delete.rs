//! Delete Shopping Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    envelope::Envelope, errors::ApiError, extensions::*,
    shopping_items::errors::into_api_error, state::State,
};

/// Shopping Item Deleted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ShoppingItemDeletedResponse {
    pub success: bool,
}

/// Delete Shopping Item Handler
#[endpoint(tags("shopping-items"), summary = "Delete Shopping Item")]
#[tracing::instrument(
    name = "shopping_items.http.delete",
    skip(id, depot),
    fields(item_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<Envelope<ShoppingItemDeletedResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();

    tracing::Span::current().record("item_uuid", tracing::field::display(id));

    state
        .app
        .shopping_items
        .delete_item(id.into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(Envelope::new(ShoppingItemDeletedResponse {
        success: true,
    })))
}
