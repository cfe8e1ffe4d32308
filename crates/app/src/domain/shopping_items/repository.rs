//! Shopping Items Repository

use jiff::Timestamp;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::domain::shopping_items::{
    data::ShoppingItemFilter,
    errors::ShoppingItemsServiceError,
    names::ItemName,
    records::{ShoppingItemRecord, ShoppingItemUuid},
};

/// First position handed out in an empty list.
const FIRST_POSITION: u64 = 1;

#[derive(Debug, Clone)]
struct StoredItem {
    /// Insertion order, used to break position ties.
    sequence: u64,
    record: ShoppingItemRecord,
}

/// Process-local item storage. Callers serialise access.
#[derive(Debug, Clone, Default)]
pub(crate) struct InMemoryShoppingItemsRepository {
    items: FxHashMap<ShoppingItemUuid, StoredItem>,
    next_sequence: u64,
}

impl InMemoryShoppingItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn contains(&self, item: ShoppingItemUuid) -> bool {
        self.items.contains_key(&item)
    }

    pub(crate) fn list_items(&self, filter: ShoppingItemFilter) -> Vec<ShoppingItemRecord> {
        let mut stored: Vec<&StoredItem> = self
            .items
            .values()
            .filter(|stored| filter.matches(&stored.record))
            .collect();

        stored.sort_by_key(|stored| (stored.record.position, stored.sequence));

        stored
            .into_iter()
            .map(|stored| stored.record.clone())
            .collect()
    }

    pub(crate) fn get_item(
        &self,
        item: ShoppingItemUuid,
    ) -> Result<ShoppingItemRecord, ShoppingItemsServiceError> {
        self.items
            .get(&item)
            .map(|stored| stored.record.clone())
            .ok_or(ShoppingItemsServiceError::NotFound)
    }

    pub(crate) fn create_item(
        &mut self,
        item: ShoppingItemUuid,
        name: ItemName,
        now: Timestamp,
    ) -> ShoppingItemRecord {
        let record = ShoppingItemRecord {
            uuid: item,
            name: name.into_string(),
            purchased: false,
            position: self.next_position(),
            created_at: now,
            purchased_at: None,
        };

        let sequence = self.next_sequence;

        self.next_sequence = self.next_sequence.saturating_add(1);

        self.items.insert(
            item,
            StoredItem {
                sequence,
                record: record.clone(),
            },
        );

        record
    }

    pub(crate) fn update_item(
        &mut self,
        item: ShoppingItemUuid,
        name: Option<ItemName>,
        purchased: Option<bool>,
        now: Timestamp,
    ) -> Result<ShoppingItemRecord, ShoppingItemsServiceError> {
        let stored = self
            .items
            .get_mut(&item)
            .ok_or(ShoppingItemsServiceError::NotFound)?;

        if let Some(name) = name {
            stored.record.name = name.into_string();
        }

        if let Some(purchased) = purchased {
            stored.record.set_purchased(purchased, now);
        }

        Ok(stored.record.clone())
    }

    pub(crate) fn delete_item(
        &mut self,
        item: ShoppingItemUuid,
    ) -> Result<(), ShoppingItemsServiceError> {
        self.items
            .remove(&item)
            .map(|_removed| ())
            .ok_or(ShoppingItemsServiceError::NotFound)
    }

    /// Apply one purchase state and timestamp to every selected item.
    ///
    /// Nothing is modified unless every uuid resolves. Results follow the order
    /// of `items` with repeats dropped.
    pub(crate) fn mark_purchased(
        &mut self,
        items: &[ShoppingItemUuid],
        purchased: bool,
        now: Timestamp,
    ) -> Result<Vec<ShoppingItemRecord>, ShoppingItemsServiceError> {
        let mut seen = FxHashSet::default();

        let selected: Vec<ShoppingItemUuid> = items
            .iter()
            .copied()
            .filter(|item| seen.insert(*item))
            .collect();

        let missing: Vec<ShoppingItemUuid> = selected
            .iter()
            .copied()
            .filter(|item| !self.items.contains_key(item))
            .collect();

        if !missing.is_empty() {
            return Err(ShoppingItemsServiceError::ItemsNotFound(missing));
        }

        let mut updated = Vec::with_capacity(selected.len());

        for item in selected {
            if let Some(stored) = self.items.get_mut(&item) {
                stored.record.set_purchased(purchased, now);
                updated.push(stored.record.clone());
            }
        }

        Ok(updated)
    }

    fn next_position(&self) -> u64 {
        self.items
            .values()
            .map(|stored| stored.record.position)
            .max()
            .map_or(FIRST_POSITION, |max| max.saturating_add(1))
    }
}
