//! Create Shopping Item Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use shopping_list_app::domain::shopping_items::data::NewShoppingItem;

use crate::{
    envelope::Envelope, errors::ApiError, extensions::*,
    router::shopping_item_location,
    shopping_items::{errors::into_api_error, get::ShoppingItemResponse},
    state::State,
};

/// Create Shopping Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateShoppingItemRequest {
    /// Letters, numbers and spaces only; trimmed before storing
    pub name: String,
}

impl From<CreateShoppingItemRequest> for NewShoppingItem {
    fn from(request: CreateShoppingItemRequest) -> Self {
        NewShoppingItem { name: request.name }
    }
}

/// Create Shopping Item Handler
#[endpoint(
    tags("shopping-items"),
    summary = "Create Shopping Item",
    responses(
        (status_code = StatusCode::CREATED, description = "Shopping item created"),
    ),
)]
#[tracing::instrument(
    name = "shopping_items.http.create",
    skip(json, depot, res),
    fields(item_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateShoppingItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<Envelope<ShoppingItemResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let item = state
        .app
        .shopping_items
        .create_item(json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    tracing::Span::current().record("item_uuid", tracing::field::display(item.uuid));

    res.add_header(LOCATION, shopping_item_location(item.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(Envelope::new(item.into())))
}
