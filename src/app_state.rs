//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Error,
    category::{CategoryStore, SQLiteCategoryStore},
    db::initialize,
    item::{ItemStore, SQLiteItemStore},
};

/// The state of the REST server.
///
/// The stores are generic so that handlers can be tested against other
/// implementations than SQLite.
#[derive(Debug, Clone)]
pub struct AppState<C, I>
where
    C: CategoryStore,
    I: ItemStore,
{
    /// The store for categories.
    pub category_store: C,

    /// The store for items.
    pub item_store: I,
}

impl<C, I> AppState<C, I>
where
    C: CategoryStore,
    I: ItemStore,
{
    /// Create a new [AppState] from existing stores.
    pub fn with_stores(category_store: C, item_store: I) -> Self {
        Self {
            category_store,
            item_store,
        }
    }
}

impl AppState<SQLiteCategoryStore, SQLiteItemStore> {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    /// Both stores share `db_connection`, which is closed once the last clone of the state is
    /// dropped.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection) -> Result<Self, Error> {
        initialize(&db_connection)?;

        let connection = Arc::new(Mutex::new(db_connection));

        Ok(Self::with_stores(
            SQLiteCategoryStore::new(connection.clone()),
            SQLiteItemStore::new(connection),
        ))
    }
}
