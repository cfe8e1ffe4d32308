//! Update Shopping Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shopping_list_app::domain::shopping_items::data::ShoppingItemUpdate;

use crate::{
    envelope::Envelope, errors::ApiError, extensions::*,
    shopping_items::{errors::into_api_error, get::ShoppingItemResponse},
    state::State,
};

/// Update Shopping Item Request
///
/// Omitted fields are left unchanged.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateShoppingItemRequest {
    #[serde(default)]
    pub name: Option<String>,

    /// `true` stamps the purchase time, `false` clears it
    #[serde(default)]
    pub purchased: Option<bool>,
}

impl From<UpdateShoppingItemRequest> for ShoppingItemUpdate {
    fn from(request: UpdateShoppingItemRequest) -> Self {
        ShoppingItemUpdate {
            name: request.name,
            purchased: request.purchased,
        }
    }
}

/// Shopping Item Update Handler
#[endpoint(tags("shopping-items"), summary = "Update Shopping Item")]
#[tracing::instrument(
    name = "shopping_items.http.update",
    skip(id, json, depot),
    fields(
        item_uuid = tracing::field::Empty,
        name_changed = tracing::field::Empty,
        purchased = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    json: JsonBody<UpdateShoppingItemRequest>,
    depot: &mut Depot,
) -> Result<Json<Envelope<ShoppingItemResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();
    let id = id.into_inner();

    let span = tracing::Span::current();

    span.record("item_uuid", tracing::field::display(id));
    span.record("name_changed", request.name.is_some());

    if let Some(purchased) = request.purchased {
        span.record("purchased", purchased);
    }

    let item = state
        .app
        .shopping_items
        .update_item(id.into(), request.into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(Envelope::new(item.into())))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use shopping_list_app::domain::shopping_items::{
        MockShoppingItemsService, ShoppingItemsServiceError, names::ItemNameError,
        records::ShoppingItemUuid,
    };

    use crate::test_helpers::{make_item, shopping_items_service};

    use super::*;

    fn make_service(repo: MockShoppingItemsService) -> Service {
        shopping_items_service(repo, Router::with_path("shopping-item/{id}").put(handler))
    }

    #[tokio::test]
    async fn test_update_item_forwards_partial_update() -> TestResult {
        let uuid = ShoppingItemUuid::new();
        let mut item = make_item(uuid, "Leite", 1);

        item.set_purchased(true, Timestamp::UNIX_EPOCH);

        let mut repo = MockShoppingItemsService::new();

        repo.expect_update_item()
            .once()
            .withf(move |item, update| {
                *item == uuid
                    && *update
                        == ShoppingItemUpdate {
                            name: None,
                            purchased: Some(true),
                        }
            })
            .return_once(move |_, _| Ok(item));

        repo.expect_list_items().never();
        repo.expect_get_item().never();
        repo.expect_create_item().never();
        repo.expect_delete_item().never();
        repo.expect_mark_purchased().never();

        let mut res = TestClient::put(format!("http://example.com/shopping-item/{uuid}"))
            .json(&json!({ "purchased": true }))
            .send(&make_service(repo))
            .await;

        let body: Envelope<ShoppingItemResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.data.purchased, "expected purchased item");
        assert_eq!(
            body.data.purchased_at,
            Some(Timestamp::UNIX_EPOCH.to_string())
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_update_item_forwards_name() -> TestResult {
        let uuid = ShoppingItemUuid::new();
        let item = make_item(uuid, "Leite Integral", 1);

        let mut repo = MockShoppingItemsService::new();

        repo.expect_update_item()
            .once()
            .withf(move |item, update| {
                *item == uuid
                    && *update
                        == ShoppingItemUpdate {
                            name: Some("Leite Integral".to_string()),
                            purchased: None,
                        }
            })
            .return_once(move |_, _| Ok(item));

        repo.expect_list_items().never();
        repo.expect_get_item().never();
        repo.expect_create_item().never();
        repo.expect_delete_item().never();
        repo.expect_mark_purchased().never();

        let res = TestClient::put(format!("http://example.com/shopping-item/{uuid}"))
            .json(&json!({ "name": "Leite Integral" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_item_not_found_returns_404() -> TestResult {
        let uuid = ShoppingItemUuid::new();

        let mut repo = MockShoppingItemsService::new();

        repo.expect_update_item()
            .once()
            .return_once(|_, _| Err(ShoppingItemsServiceError::NotFound));

        repo.expect_list_items().never();
        repo.expect_get_item().never();
        repo.expect_create_item().never();
        repo.expect_delete_item().never();
        repo.expect_mark_purchased().never();

        let mut res = TestClient::put(format!("http://example.com/shopping-item/{uuid}"))
            .json(&json!({ "purchased": false }))
            .send(&make_service(repo))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body["error"]["code"], json!("NOT_FOUND"));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_item_invalid_name_returns_400() -> TestResult {
        let uuid = ShoppingItemUuid::new();

        let mut repo = MockShoppingItemsService::new();

        repo.expect_update_item()
            .once()
            .return_once(|_, _| Err(ItemNameError::Empty.into()));

        repo.expect_list_items().never();
        repo.expect_get_item().never();
        repo.expect_create_item().never();
        repo.expect_delete_item().never();
        repo.expect_mark_purchased().never();

        let mut res = TestClient::put(format!("http://example.com/shopping-item/{uuid}"))
            .json(&json!({ "name": "   " }))
            .send(&make_service(repo))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body["error"]["code"], json!("VALIDATION_ERROR"));
        assert_eq!(body["error"]["message"], json!("item name is required"));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_item_wrong_type_returns_400() -> TestResult {
        let uuid = ShoppingItemUuid::new();

        let mut repo = MockShoppingItemsService::new();

        repo.expect_update_item().never();
        repo.expect_list_items().never();
        repo.expect_get_item().never();
        repo.expect_create_item().never();
        repo.expect_delete_item().never();
        repo.expect_mark_purchased().never();

        let mut res = TestClient::put(format!("http://example.com/shopping-item/{uuid}"))
            .json(&json!({ "purchased": "yes" }))
            .send(&make_service(repo))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"]["code"], json!("VALIDATION_ERROR"));

        Ok(())
    }
}
