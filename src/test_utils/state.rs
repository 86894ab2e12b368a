use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    AppState, Error,
    category::{Category, CategoryId, CategoryStore, SQLiteCategoryStore},
    db::initialize,
    item::{Item, ItemId, ItemStore, NewItem, SQLiteItemStore},
    name::Name,
};

pub(crate) type TestState = AppState<SQLiteCategoryStore, SQLiteItemStore>;

pub(crate) fn get_test_state() -> TestState {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");
    initialize(&connection).expect("Could not initialize database");
    let connection = Arc::new(Mutex::new(connection));

    AppState::with_stores(
        SQLiteCategoryStore::new(connection.clone()),
        SQLiteItemStore::new(connection),
    )
}

#[track_caller]
pub(crate) fn create_test_category(state: &TestState, name: &str) -> Category {
    state
        .category_store
        .create(Name::new_unchecked(name))
        .expect("Could not create test category")
}

#[track_caller]
pub(crate) fn create_test_item(state: &TestState, name: &str, category_id: CategoryId) -> Item {
    state
        .item_store
        .create(NewItem {
            name: Name::new_unchecked(name),
            description: format!("About {name}"),
            price: 19.99,
            category_id,
        })
        .expect("Could not create test item")
}

/// A category store whose every operation fails like a broken database.
#[derive(Debug, Clone)]
pub(crate) struct FailingCategoryStore;

impl CategoryStore for FailingCategoryStore {
    fn create(&self, _name: Name) -> Result<Category, Error> {
        Err(Error::DatabaseLockError)
    }

    fn get(&self, _category_id: CategoryId) -> Result<Category, Error> {
        Err(Error::DatabaseLockError)
    }

    fn get_all(&self) -> Result<Vec<Category>, Error> {
        Err(Error::DatabaseLockError)
    }

    fn find_by_name(&self, _name: &Name) -> Result<Option<Category>, Error> {
        Err(Error::DatabaseLockError)
    }

    fn update(&self, _category_id: CategoryId, _name: Name) -> Result<Category, Error> {
        Err(Error::DatabaseLockError)
    }

    fn delete(&self, _category_id: CategoryId) -> Result<(), Error> {
        Err(Error::DatabaseLockError)
    }

    fn count(&self) -> Result<u32, Error> {
        Err(Error::DatabaseLockError)
    }
}

/// An item store whose every operation fails like a broken database.
#[derive(Debug, Clone)]
pub(crate) struct FailingItemStore;

impl ItemStore for FailingItemStore {
    fn create(&self, _item: NewItem) -> Result<Item, Error> {
        Err(Error::DatabaseLockError)
    }

    fn get(&self, _item_id: ItemId) -> Result<Item, Error> {
        Err(Error::DatabaseLockError)
    }

    fn get_all(&self) -> Result<Vec<Item>, Error> {
        Err(Error::DatabaseLockError)
    }

    fn get_by_category(&self, _category_id: CategoryId) -> Result<Vec<Item>, Error> {
        Err(Error::DatabaseLockError)
    }

    fn update(&self, _item_id: ItemId, _item: NewItem) -> Result<Item, Error> {
        Err(Error::DatabaseLockError)
    }

    fn delete(&self, _item_id: ItemId) -> Result<(), Error> {
        Err(Error::DatabaseLockError)
    }

    fn count(&self) -> Result<u32, Error> {
        Err(Error::DatabaseLockError)
    }
}

pub(crate) fn get_failing_state() -> AppState<FailingCategoryStore, FailingItemStore> {
    AppState::with_stores(FailingCategoryStore, FailingItemStore)
}
