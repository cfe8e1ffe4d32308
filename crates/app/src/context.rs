//! App Context

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use crate::domain::shopping_items::{InMemoryShoppingItemsService, ShoppingItemsService};

/// Services shared by every request.
#[derive(Clone)]
pub struct AppContext {
    pub shopping_items: Arc<dyn ShoppingItemsService>,
}

impl AppContext {
    /// Build a context around the given services.
    #[must_use]
    pub fn new(shopping_items: Arc<dyn ShoppingItemsService>) -> Self {
        Self { shopping_items }
    }

    /// Build a context backed by an empty in-memory store.
    ///
    /// Nothing survives a restart.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryShoppingItemsService::new()))
    }
}

impl Debug for AppContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::shopping_items::data::{NewShoppingItem, ShoppingItemFilter};

    use super::*;

    #[tokio::test]
    async fn clones_share_the_same_store() -> TestResult {
        let ctx = AppContext::in_memory();
        let clone = ctx.clone();

        ctx.shopping_items
            .create_item(NewShoppingItem {
                name: "Leite".to_string(),
            })
            .await?;

        let items = clone
            .shopping_items
            .list_items(ShoppingItemFilter::default())
            .await?;

        assert_eq!(items.len(), 1, "clone should see the created item");

        Ok(())
    }

    #[tokio::test]
    async fn separate_contexts_are_isolated() -> TestResult {
        let a = AppContext::in_memory();
        let b = AppContext::in_memory();

        a.shopping_items
            .create_item(NewShoppingItem {
                name: "Leite".to_string(),
            })
            .await?;

        let items = b
            .shopping_items
            .list_items(ShoppingItemFilter::default())
            .await?;

        assert!(items.is_empty());

        Ok(())
    }
}
