//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, catcher::Catcher, prelude::*};

use shopping_list_app::{
    context::AppContext,
    domain::shopping_items::{
        MockShoppingItemsService,
        records::{ShoppingItemRecord, ShoppingItemUuid},
    },
};

use crate::{errors::catch_error_status, state::State};

pub(crate) fn state_with_shopping_items(shopping_items: MockShoppingItemsService) -> Arc<State> {
    State::from_app_context(AppContext::new(Arc::new(shopping_items)))
}

/// Serve `route` against a mocked service, rendering errors as envelopes.
pub(crate) fn shopping_items_service(
    shopping_items: MockShoppingItemsService,
    route: Router,
) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_shopping_items(shopping_items)))
            .push(route),
    )
    .catcher(Catcher::default().hoop(catch_error_status))
}

pub(crate) fn make_item(uuid: ShoppingItemUuid, name: &str, position: u64) -> ShoppingItemRecord {
    ShoppingItemRecord {
        uuid,
        name: name.to_string(),
        purchased: false,
        position,
        created_at: Timestamp::UNIX_EPOCH,
        purchased_at: None,
    }
}
