//! Categories group items in the catalog.

mod create;
mod delete;
mod detail;
mod domain;
mod edit;
mod list;
mod store;

pub use create::{create_category_endpoint, get_new_category_page};
pub use delete::{delete_category_endpoint, get_delete_category_page};
pub use detail::get_category_page;
pub use domain::{Category, CategoryFormData, CategoryId, DeleteCategoryFormData};
pub use edit::{get_update_category_page, update_category_endpoint};
pub use list::get_categories_page;
pub use store::{CategoryStore, SQLiteCategoryStore, create_category_table};
