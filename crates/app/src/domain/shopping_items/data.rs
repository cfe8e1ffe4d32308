//! Shopping Items Data

use crate::domain::shopping_items::records::{ShoppingItemRecord, ShoppingItemUuid};

/// New Shopping Item Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewShoppingItem {
    pub name: String,
}

/// Shopping Item Update Data
///
/// Fields left as `None` are not touched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingItemUpdate {
    pub name: Option<String>,
    pub purchased: Option<bool>,
}

/// Bulk purchase-state change
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseSelection {
    pub items: Vec<ShoppingItemUuid>,
    pub purchased: bool,
}

/// Shopping Item List Filter
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShoppingItemFilter {
    pub purchased: Option<bool>,
}

impl ShoppingItemFilter {
    /// Whether `record` passes this filter.
    #[must_use]
    pub fn matches(&self, record: &ShoppingItemRecord) -> bool {
        self.purchased
            .is_none_or(|purchased| record.purchased == purchased)
    }
}
