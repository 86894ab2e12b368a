//! Core category domain types.

use serde::{Deserialize, Serialize};

use crate::{name::Name, validation::ValidationErrors};

/// Database identifier for a category.
pub type CategoryId = i64;

/// A group of items, e.g. 'Books' or 'Garden Tools'.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category {
    pub id: CategoryId,
    pub name: Name,
}

/// Form data for category creation and updates.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CategoryFormData {
    #[serde(default)]
    pub name: String,
}

impl CategoryFormData {
    /// Validate the submitted fields into a category name.
    ///
    /// # Errors
    ///
    /// Returns the field errors if the trimmed name is too short or too long.
    pub fn validate(&self) -> Result<Name, ValidationErrors> {
        Name::new(&self.name).map_err(|error| {
            let mut errors = ValidationErrors::default();
            errors.push("name", format!("Category name {error}"));
            errors
        })
    }
}

/// Form data for deleting a category.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteCategoryFormData {
    /// The category to delete. A request without one deletes nothing.
    #[serde(default)]
    pub id: Option<CategoryId>,
}

#[cfg(test)]
mod tests {
    use crate::name::Name;

    use super::CategoryFormData;

    #[test]
    fn validate_trims_name() {
        let form = CategoryFormData {
            name: "  Sci-Fi ".to_owned(),
        };

        assert_eq!(form.validate(), Ok(Name::new_unchecked("Sci-Fi")));
    }

    #[test]
    fn validate_rejects_short_name() {
        let form = CategoryFormData {
            name: " ab ".to_owned(),
        };

        let errors = form.validate().unwrap_err();

        assert_eq!(
            errors.for_field("name").collect::<Vec<_>>(),
            vec!["Category name must contain at least 3 characters"]
        );
    }

    #[test]
    fn validate_rejects_long_name() {
        let form = CategoryFormData {
            name: "x".repeat(101),
        };

        let errors = form.validate().unwrap_err();

        assert_eq!(
            errors.for_field("name").collect::<Vec<_>>(),
            vec!["Category name must contain at most 100 characters"]
        );
    }
}
