//! Items are the things kept in the catalog, each filed under a category.

mod create;
mod delete;
mod detail;
mod domain;
mod edit;
mod form;
mod list;
mod store;

pub use create::{create_item_endpoint, get_new_item_page};
pub use delete::{delete_item_endpoint, get_delete_item_page};
pub use detail::get_item_page;
pub use domain::{
    DeleteItemFormData, Item, ItemFormData, ItemId, ItemWithCategory, NewItem, resolve_categories,
};
pub use edit::{get_update_item_page, update_item_endpoint};
pub use list::get_items_page;
pub use store::{ItemStore, SQLiteItemStore, create_item_table};
