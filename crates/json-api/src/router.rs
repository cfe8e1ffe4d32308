//! App Router

use std::fmt::Display;

use salvo::{
    affix_state::inject,
    catcher::Catcher,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};

use shopping_list_app::context::AppContext;

use crate::{
    errors::catch_error_status,
    healthcheck,
    observability::{metrics_handler, request_logging},
    shopping_items,
    state::State,
};

/// Prefix the UI client uses for every shopping item route.
pub(crate) const API_PREFIX: &str = "api/v1/internal";

pub(crate) const SHOPPING_ITEM_PATH: &str = "shopping-item";

/// Location of a single item, as returned after creation.
pub(crate) fn shopping_item_location(item: impl Display) -> String {
    format!("/{API_PREFIX}/{SHOPPING_ITEM_PATH}/{item}")
}

pub(crate) fn app_router() -> Router {
    Router::with_path(SHOPPING_ITEM_PATH)
        .get(shopping_items::index::handler)
        .post(shopping_items::create::handler)
        .push(Router::with_path("mark-purchased").patch(shopping_items::mark_purchased::handler))
        .push(
            Router::with_path("{id}")
                .get(shopping_items::get::handler)
                .put(shopping_items::update::handler)
                .delete(shopping_items::delete::handler),
        )
}

/// The full router, including the OpenAPI document and Swagger UI.
pub(crate) fn root_router(app: AppContext) -> Router {
    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(inject(State::from_app_context(app)))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(Router::with_path(API_PREFIX).push(app_router()));

    let doc = OpenApi::new("Shopping List API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"))
}

/// Wrap the router with request logging and the error envelope catcher.
pub(crate) fn service(app: AppContext) -> Service {
    Service::new(root_router(app))
        .hoop(request_logging)
        .hoop(remove_slash())
        .catcher(Catcher::default().hoop(catch_error_status))
}
