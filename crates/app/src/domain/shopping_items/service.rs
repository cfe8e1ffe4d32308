//! Shopping items service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::shopping_items::{
    data::{NewShoppingItem, PurchaseSelection, ShoppingItemFilter, ShoppingItemUpdate},
    errors::ShoppingItemsServiceError,
    names::ItemName,
    records::{ShoppingItemRecord, ShoppingItemUuid},
    repository::InMemoryShoppingItemsRepository,
};

/// Shopping items held in process memory.
///
/// Every mutation takes the write lock for its whole duration, so readers never
/// observe a half-applied change. Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryShoppingItemsService {
    repository: Arc<RwLock<InMemoryShoppingItemsRepository>>,
}

impl InMemoryShoppingItemsService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            repository: Arc::new(RwLock::new(InMemoryShoppingItemsRepository::new())),
        }
    }
}

#[async_trait]
impl ShoppingItemsService for InMemoryShoppingItemsService {
    #[tracing::instrument(name = "shopping_items.list", level = "debug", skip(self), err)]
    async fn list_items(
        &self,
        filter: ShoppingItemFilter,
    ) -> Result<Vec<ShoppingItemRecord>, ShoppingItemsServiceError> {
        let items = self.repository.read().await.list_items(filter);

        debug!(count = items.len(), "listed shopping items");

        Ok(items)
    }

    #[tracing::instrument(name = "shopping_items.get", level = "debug", skip(self), err)]
    async fn get_item(
        &self,
        item: ShoppingItemUuid,
    ) -> Result<ShoppingItemRecord, ShoppingItemsServiceError> {
        self.repository.read().await.get_item(item)
    }

    #[tracing::instrument(name = "shopping_items.create", skip(self), err)]
    async fn create_item(
        &self,
        item: NewShoppingItem,
    ) -> Result<ShoppingItemRecord, ShoppingItemsServiceError> {
        let name = ItemName::parse(&item.name)?;

        let mut repository = self.repository.write().await;

        let created = repository.create_item(ShoppingItemUuid::new(), name, Timestamp::now());

        info!(
            item_uuid = %created.uuid,
            position = created.position,
            total = repository.len(),
            "created shopping item"
        );

        Ok(created)
    }

    #[tracing::instrument(name = "shopping_items.update", skip(self), err)]
    async fn update_item(
        &self,
        item: ShoppingItemUuid,
        update: ShoppingItemUpdate,
    ) -> Result<ShoppingItemRecord, ShoppingItemsServiceError> {
        let name = update.name.as_deref().map(ItemName::parse).transpose();

        let mut repository = self.repository.write().await;

        // An unknown item wins over a bad name.
        if !repository.contains(item) {
            return Err(ShoppingItemsServiceError::NotFound);
        }

        let updated = repository.update_item(item, name?, update.purchased, Timestamp::now())?;

        info!(item_uuid = %item, purchased = updated.purchased, "updated shopping item");

        Ok(updated)
    }

    #[tracing::instrument(name = "shopping_items.delete", skip(self), err)]
    async fn delete_item(&self, item: ShoppingItemUuid) -> Result<(), ShoppingItemsServiceError> {
        let mut repository = self.repository.write().await;

        repository.delete_item(item)?;

        info!(item_uuid = %item, total = repository.len(), "deleted shopping item");

        Ok(())
    }

    #[tracing::instrument(name = "shopping_items.mark_purchased", skip(self), err)]
    async fn mark_purchased(
        &self,
        selection: PurchaseSelection,
    ) -> Result<Vec<ShoppingItemRecord>, ShoppingItemsServiceError> {
        if selection.items.is_empty() {
            return Err(ShoppingItemsServiceError::EmptySelection);
        }

        let updated = self.repository.write().await.mark_purchased(
            &selection.items,
            selection.purchased,
            Timestamp::now(),
        )?;

        info!(
            count = updated.len(),
            purchased = selection.purchased,
            "marked shopping items"
        );

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait ShoppingItemsService: Send + Sync {
    /// Retrieves all items matching `filter`, ordered by position.
    async fn list_items(
        &self,
        filter: ShoppingItemFilter,
    ) -> Result<Vec<ShoppingItemRecord>, ShoppingItemsServiceError>;

    /// Retrieve a single item.
    async fn get_item(
        &self,
        item: ShoppingItemUuid,
    ) -> Result<ShoppingItemRecord, ShoppingItemsServiceError>;

    /// Creates a new, unpurchased item at the end of the list.
    async fn create_item(
        &self,
        item: NewShoppingItem,
    ) -> Result<ShoppingItemRecord, ShoppingItemsServiceError>;

    /// Applies a partial update to an item.
    async fn update_item(
        &self,
        item: ShoppingItemUuid,
        update: ShoppingItemUpdate,
    ) -> Result<ShoppingItemRecord, ShoppingItemsServiceError>;

    /// Removes an item permanently.
    async fn delete_item(&self, item: ShoppingItemUuid) -> Result<(), ShoppingItemsServiceError>;

    /// Sets the purchase state of every selected item, or of none if any is
    /// missing.
    async fn mark_purchased(
        &self,
        selection: PurchaseSelection,
    ) -> Result<Vec<ShoppingItemRecord>, ShoppingItemsServiceError>;
}
