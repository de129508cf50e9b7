//! Ingredient list normalization.
//!
//! The raw form value is split literally on commas. There is no escaping and
//! no deduplication; empty pieces between commas survive as empty strings.

use std::fmt;

use crate::error::IngredientError;

/// An ordered list of trimmed ingredient names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientList {
    items: Vec<String>,
}

impl IngredientList {
    /// Parse the raw comma-separated value typed into the form.
    ///
    /// Returns `IngredientError::Empty` if the input is blank after trimming.
    pub fn parse(raw: &str) -> Result<Self, IngredientError> {
        if raw.trim().is_empty() {
            return Err(IngredientError::Empty);
        }

        let items = raw.split(',').map(|i| i.trim().to_string()).collect();
        Ok(Self { items })
    }

    /// Build from a list that was already split by the caller.
    pub fn from_items(items: Vec<String>) -> Self {
        Self { items }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.items
    }
}

impl fmt::Display for IngredientList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.items.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_each_item() {
        let list = IngredientList::parse("  Chicken, Rice ,Beans  ").unwrap();
        assert_eq!(list.as_slice(), &["Chicken", "Rice", "Beans"]);
    }

    #[test]
    fn test_parse_single_item() {
        let list = IngredientList::parse("eggs").unwrap();
        assert_eq!(list.into_inner(), vec!["eggs".to_string()]);
    }

    #[test]
    fn test_parse_blank_is_rejected() {
        assert_eq!(IngredientList::parse(""), Err(IngredientError::Empty));
        assert_eq!(IngredientList::parse("   \t\n"), Err(IngredientError::Empty));
    }

    #[test]
    fn test_parse_keeps_duplicates_and_order() {
        let list = IngredientList::parse("salt, pepper, salt").unwrap();
        assert_eq!(list.as_slice(), &["salt", "pepper", "salt"]);
    }

    #[test]
    fn test_parse_keeps_empty_pieces() {
        let list = IngredientList::parse("tomato,, basil,").unwrap();
        assert_eq!(list.as_slice(), &["tomato", "", "basil", ""]);
    }

    #[test]
    fn test_parse_only_commas() {
        // Not blank after trimming, so it goes through as empty names.
        let list = IngredientList::parse(" , ").unwrap();
        assert_eq!(list.as_slice(), &["", ""]);
    }

    #[test]
    fn test_display_joins_with_comma_space() {
        let list = IngredientList::parse("Chicken,Rice,Beans").unwrap();
        assert_eq!(list.to_string(), "Chicken, Rice, Beans");
    }
}
