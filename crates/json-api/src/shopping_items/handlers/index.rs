//! Shopping Item Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use shopping_list_app::domain::shopping_items::data::ShoppingItemFilter;

use crate::{
    envelope::Envelope, errors::ApiError, extensions::*,
    shopping_items::{errors::into_api_error, get::ShoppingItemResponse},
    state::State,
};

/// Shopping Item Index Handler
///
/// Returns every item ordered by position, optionally filtered by purchase
/// state.
#[endpoint(tags("shopping-items"), summary = "List Shopping Items")]
pub(crate) async fn handler(
    purchased: QueryParam<bool, false>,
    depot: &mut Depot,
) -> Result<Json<Envelope<Vec<ShoppingItemResponse>>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = ShoppingItemFilter {
        purchased: purchased.into_inner(),
    };

    let items = state
        .app
        .shopping_items
        .list_items(filter)
        .await
        .map_err(into_api_error)?;

    Ok(Json(Envelope::new(
        items.into_iter().map(Into::into).collect(),
    )))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shopping_list_app::domain::shopping_items::{
        MockShoppingItemsService, records::ShoppingItemUuid,
    };

    use crate::test_helpers::{make_item, shopping_items_service};

    use super::*;

    fn make_service(repo: MockShoppingItemsService) -> Service {
        shopping_items_service(repo, Router::with_path("shopping-item").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_empty_list() -> TestResult {
        let mut repo = MockShoppingItemsService::new();

        repo.expect_list_items()
            .once()
            .withf(|filter| *filter == ShoppingItemFilter::default())
            .return_once(|_| Ok(vec![]));

        repo.expect_get_item().never();
        repo.expect_create_item().never();
        repo.expect_update_item().never();
        repo.expect_delete_item().never();
        repo.expect_mark_purchased().never();

        let mut res = TestClient::get("http://example.com/shopping-item")
            .send(&make_service(repo))
            .await;

        let body: Envelope<Vec<ShoppingItemResponse>> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.success, "expected success envelope");
        assert!(body.data.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_keeps_service_order() -> TestResult {
        let uuid_a = ShoppingItemUuid::new();
        let uuid_b = ShoppingItemUuid::new();

        let mut repo = MockShoppingItemsService::new();

        repo.expect_list_items().once().return_once(move |_| {
            Ok(vec![
                make_item(uuid_a, "Leite", 1),
                make_item(uuid_b, "Pão", 2),
            ])
        });

        repo.expect_get_item().never();
        repo.expect_create_item().never();
        repo.expect_update_item().never();
        repo.expect_delete_item().never();
        repo.expect_mark_purchased().never();

        let body: Envelope<Vec<ShoppingItemResponse>> =
            TestClient::get("http://example.com/shopping-item")
                .send(&make_service(repo))
                .await
                .take_json()
                .await?;

        let names: Vec<&str> = body.data.iter().map(|item| item.name.as_str()).collect();

        assert_eq!(names, ["Leite", "Pão"]);
        assert_eq!(body.data[0].id, uuid_a.into_uuid());
        assert_eq!(body.data[1].position, 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_forwards_purchased_filter() -> TestResult {
        let mut repo = MockShoppingItemsService::new();

        repo.expect_list_items()
            .once()
            .withf(|filter| filter.purchased == Some(false))
            .return_once(|_| Ok(vec![]));

        repo.expect_get_item().never();
        repo.expect_create_item().never();
        repo.expect_update_item().never();
        repo.expect_delete_item().never();
        repo.expect_mark_purchased().never();

        let res = TestClient::get("http://example.com/shopping-item?purchased=false")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
