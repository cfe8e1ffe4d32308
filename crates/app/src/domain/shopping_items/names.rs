//! Item Names

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use thiserror::Error;

/// Longest accepted item name, in characters.
pub const MAX_ITEM_NAME_LENGTH: usize = 100;

/// Reasons a raw name is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemNameError {
    #[error("item name is required")]
    Empty,

    #[error("item name must be at most {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("item name may only contain letters, numbers and spaces")]
    InvalidCharacters,
}

/// A validated, trimmed item name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemName(String);

impl ItemName {
    /// Validate `raw` and keep its trimmed form.
    ///
    /// The length limit applies to the input as given; the stored value has
    /// surrounding whitespace removed.
    ///
    /// # Errors
    ///
    /// Returns an [`ItemNameError`] when the name is blank, too long, or contains
    /// anything other than alphanumerics and whitespace.
    pub fn parse(raw: &str) -> Result<Self, ItemNameError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ItemNameError::Empty);
        }

        let actual = raw.chars().count();

        if actual > MAX_ITEM_NAME_LENGTH {
            return Err(ItemNameError::TooLong {
                max: MAX_ITEM_NAME_LENGTH,
                actual,
            });
        }

        if !raw
            .chars()
            .all(|c| c.is_alphanumeric() || c.is_whitespace())
        {
            return Err(ItemNameError::InvalidCharacters);
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take ownership of the name.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for ItemName {
    type Err = ItemNameError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

impl Display for ItemName {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}
