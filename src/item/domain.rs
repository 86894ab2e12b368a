//! Core item domain types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    category::{Category, CategoryId},
    name::Name,
    validation::{ValidationErrors, non_empty, parse_price},
};

/// Database identifier for an item.
pub type ItemId = i64;

/// Something in the catalog, e.g. 'Dune (paperback)'.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: Name,
    pub description: String,
    pub price: f64,
    /// The category the item belongs to.
    ///
    /// The category may have been deleted since the item was saved.
    pub category_id: CategoryId,
}

/// The validated fields of an item that has not been saved yet, or the
/// replacement fields for an existing item.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: Name,
    pub description: String,
    pub price: f64,
    pub category_id: CategoryId,
}

/// An item together with the category it refers to.
///
/// `category` is `None` when the referenced category no longer exists.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemWithCategory {
    pub item: Item,
    pub category: Option<Category>,
}

/// Pair each item with its category from `categories`.
pub fn resolve_categories(items: Vec<Item>, categories: Vec<Category>) -> Vec<ItemWithCategory> {
    let categories_by_id: HashMap<CategoryId, Category> = categories
        .into_iter()
        .map(|category| (category.id, category))
        .collect();

    items
        .into_iter()
        .map(|item| {
            let category = categories_by_id.get(&item.category_id).cloned();

            ItemWithCategory { item, category }
        })
        .collect()
}

/// Form data for item creation and updates.
///
/// Fields are kept as the raw submitted text so that they can be shown
/// again if validation fails.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ItemFormData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub category: String,
}

impl ItemFormData {
    /// Pre-fill the form with the fields of an existing item.
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.to_string(),
            description: item.description.clone(),
            price: item.price.to_string(),
            category: item.category_id.to_string(),
        }
    }

    /// Validate the submitted fields.
    ///
    /// The category is only checked to be a well formed ID, not that it
    /// refers to an existing category.
    ///
    /// # Errors
    ///
    /// Returns an error for every field that is invalid.
    pub fn validate(&self) -> Result<NewItem, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = Name::new(&self.name)
            .inspect_err(|error| errors.push("name", format!("Item name {error}")))
            .ok();

        let description = non_empty(&self.description);
        if description.is_none() {
            errors.push("description", "Description must not be empty");
        }

        let price = parse_price(&self.price);
        if price.is_none() {
            errors.push("price", "Invalid price");
        }

        let category_id = self.category.trim().parse::<CategoryId>().ok();
        if category_id.is_none() {
            errors.push("category", "Category must be selected");
        }

        match (name, description, price, category_id) {
            (Some(name), Some(description), Some(price), Some(category_id)) => Ok(NewItem {
                name,
                description: description.to_owned(),
                price,
                category_id,
            }),
            _ => Err(errors),
        }
    }

    /// The selected category, if the form holds a well formed category ID.
    pub fn selected_category(&self) -> Option<CategoryId> {
        self.category.trim().parse().ok()
    }
}

/// Form data for deleting an item.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteItemFormData {
    /// The item to delete. A request without one deletes nothing.
    #[serde(default)]
    pub id: Option<ItemId>,
}
