//! Shopping Item Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod mark_purchased;
pub(crate) mod update;
