//! Mark Shopping Items Purchased Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shopping_list_app::domain::shopping_items::data::PurchaseSelection;

use crate::{
    envelope::Envelope, errors::ApiError, extensions::*,
    shopping_items::{errors::into_api_error, get::ShoppingItemResponse},
    state::State,
};

/// Mark Purchased Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MarkPurchasedRequest {
    /// Items to change; must not be empty
    pub item_ids: Vec<Uuid>,

    /// The purchase state applied to every listed item
    pub purchased: bool,
}

impl From<MarkPurchasedRequest> for PurchaseSelection {
    fn from(request: MarkPurchasedRequest) -> Self {
        PurchaseSelection {
            items: request.item_ids.into_iter().map(Into::into).collect(),
            purchased: request.purchased,
        }
    }
}

/// Mark Shopping Items Purchased Handler
///
/// Applies one purchase state and timestamp to every listed item. Nothing
/// changes when any id is unknown.
#[endpoint(tags("shopping-items"), summary = "Mark Shopping Items Purchased")]
#[tracing::instrument(
    name = "shopping_items.http.mark_purchased",
    skip(json, depot),
    fields(
        item_count = tracing::field::Empty,
        purchased = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<MarkPurchasedRequest>,
    depot: &mut Depot,
) -> Result<Json<Envelope<Vec<ShoppingItemResponse>>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let span = tracing::Span::current();

    span.record("item_count", request.item_ids.len());
    span.record("purchased", request.purchased);

    let items = state
        .app
        .shopping_items
        .mark_purchased(request.into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(Envelope::new(
        items.into_iter().map(Into::into).collect(),
    )))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use shopping_list_app::domain::shopping_items::{
        MockShoppingItemsService, ShoppingItemsServiceError, records::ShoppingItemUuid,
    };

    use crate::test_helpers::{make_item, shopping_items_service};

    use super::*;

    fn make_service(repo: MockShoppingItemsService) -> Service {
        shopping_items_service(
            repo,
            Router::with_path("shopping-item/mark-purchased").patch(handler),
        )
    }

    #[tokio::test]
    async fn test_mark_purchased_success() -> TestResult {
        let uuid_a = ShoppingItemUuid::new();
        let uuid_b = ShoppingItemUuid::new();

        let mut item_a = make_item(uuid_a, "Leite", 1);
        let mut item_b = make_item(uuid_b, "Pão", 2);

        item_a.set_purchased(true, Timestamp::UNIX_EPOCH);
        item_b.set_purchased(true, Timestamp::UNIX_EPOCH);

        let mut repo = MockShoppingItemsService::new();

        repo.expect_mark_purchased()
            .once()
            .withf(move |selection| {
                *selection
                    == PurchaseSelection {
                        items: vec![uuid_b, uuid_a],
                        purchased: true,
                    }
            })
            .return_once(move |_| Ok(vec![item_b, item_a]));

        repo.expect_list_items().never();
        repo.expect_get_item().never();
        repo.expect_create_item().never();
        repo.expect_update_item().never();
        repo.expect_delete_item().never();

        let mut res = TestClient::patch("http://example.com/shopping-item/mark-purchased")
            .json(&json!({
                "itemIds": [uuid_b.into_uuid(), uuid_a.into_uuid()],
                "purchased": true,
            }))
            .send(&make_service(repo))
            .await;

        let body: Envelope<Vec<ShoppingItemResponse>> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.data.len(), 2, "expected both items back");
        assert_eq!(body.data[0].id, uuid_b.into_uuid());
        assert_eq!(body.data[1].id, uuid_a.into_uuid());
        assert_eq!(body.data[0].purchased_at, body.data[1].purchased_at);

        Ok(())
    }

    #[tokio::test]
    async fn test_mark_purchased_missing_items_returns_404_with_ids() -> TestResult {
        let missing = ShoppingItemUuid::new();

        let mut repo = MockShoppingItemsService::new();

        repo.expect_mark_purchased()
            .once()
            .return_once(move |_| Err(ShoppingItemsServiceError::ItemsNotFound(vec![missing])));

        repo.expect_list_items().never();
        repo.expect_get_item().never();
        repo.expect_create_item().never();
        repo.expect_update_item().never();
        repo.expect_delete_item().never();

        let mut res = TestClient::patch("http://example.com/shopping-item/mark-purchased")
            .json(&json!({ "itemIds": [missing.into_uuid()], "purchased": true }))
            .send(&make_service(repo))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body["error"]["code"], json!("NOT_FOUND"));
        assert_eq!(
            body["error"]["details"]["notFoundIds"],
            json!([missing.to_string()])
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_mark_purchased_empty_selection_returns_400() -> TestResult {
        let mut repo = MockShoppingItemsService::new();

        repo.expect_mark_purchased()
            .once()
            .withf(|selection| selection.items.is_empty())
            .return_once(|_| Err(ShoppingItemsServiceError::EmptySelection));

        repo.expect_list_items().never();
        repo.expect_get_item().never();
        repo.expect_create_item().never();
        repo.expect_update_item().never();
        repo.expect_delete_item().never();

        let mut res = TestClient::patch("http://example.com/shopping-item/mark-purchased")
            .json(&json!({ "itemIds": [], "purchased": false }))
            .send(&make_service(repo))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body["error"]["code"], json!("VALIDATION_ERROR"));

        Ok(())
    }

    #[tokio::test]
    async fn test_mark_purchased_malformed_id_returns_400() -> TestResult {
        let mut repo = MockShoppingItemsService::new();

        repo.expect_mark_purchased().never();
        repo.expect_list_items().never();
        repo.expect_get_item().never();
        repo.expect_create_item().never();
        repo.expect_update_item().never();
        repo.expect_delete_item().never();

        let mut res = TestClient::patch("http://example.com/shopping-item/mark-purchased")
            .json(&json!({ "itemIds": ["nope"], "purchased": true }))
            .send(&make_service(repo))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"]["code"], json!("VALIDATION_ERROR"));

        Ok(())
    }
}
