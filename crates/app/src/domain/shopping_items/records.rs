//! Shopping Item Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Shopping Item UUID
pub type ShoppingItemUuid = TypedUuid<ShoppingItemRecord>;

/// Shopping Item Record
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingItemRecord {
    pub uuid: ShoppingItemUuid,
    pub name: String,
    pub purchased: bool,
    pub position: u64,
    pub created_at: Timestamp,
    pub purchased_at: Option<Timestamp>,
}

impl ShoppingItemRecord {
    /// Set the purchase state, stamping `purchased_at` with `at` when purchased
    /// and clearing it otherwise.
    pub fn set_purchased(&mut self, purchased: bool, at: Timestamp) {
        self.purchased = purchased;
        self.purchased_at = purchased.then_some(at);
    }
}
