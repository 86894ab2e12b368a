//! Defines the item store trait and its SQLite implementation.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    category::CategoryId,
    item::{Item, ItemId, NewItem},
    name::Name,
};

/// Creates, retrieves, updates and deletes items.
pub trait ItemStore: Clone + Send + Sync + 'static {
    /// Create a new item and add it to the store.
    ///
    /// The category ID is stored as given, it is not checked against the
    /// category store.
    fn create(&self, item: NewItem) -> Result<Item, Error>;

    /// Get an item by its ID.
    ///
    /// Returns [Error::NotFound] if there is no item with `item_id`.
    fn get(&self, item_id: ItemId) -> Result<Item, Error>;

    /// Get all items in the order they were created.
    fn get_all(&self) -> Result<Vec<Item>, Error>;

    /// Get the items that refer to the category with `category_id`.
    fn get_by_category(&self, category_id: CategoryId) -> Result<Vec<Item>, Error>;

    /// Replace every field of the item with `item_id`.
    ///
    /// Returns [Error::NotFound] if there is no item with `item_id`.
    fn update(&self, item_id: ItemId, item: NewItem) -> Result<Item, Error>;

    /// Delete the item with `item_id`.
    ///
    /// Returns [Error::NotFound] if there is no item with `item_id`.
    fn delete(&self, item_id: ItemId) -> Result<(), Error>;

    /// The number of items in the store.
    fn count(&self) -> Result<u32, Error>;
}

/// Stores items in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteItemStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteItemStore {
    /// Create a new item store with a SQLite database.
    ///
    /// The item table must already exist, see [crate::initialize_db].
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)
    }
}

impl ItemStore for SQLiteItemStore {
    fn create(&self, item: NewItem) -> Result<Item, Error> {
        let connection = self.lock()?;
        connection.execute(
            "INSERT INTO item (name, description, price, category_id) VALUES (?1, ?2, ?3, ?4);",
            (
                item.name.as_ref(),
                &item.description,
                item.price,
                item.category_id,
            ),
        )?;

        let id = connection.last_insert_rowid();

        Ok(with_id(id, item))
    }

    fn get(&self, item_id: ItemId) -> Result<Item, Error> {
        self.lock()?
            .prepare(
                "SELECT id, name, description, price, category_id FROM item WHERE id = :id;",
            )?
            .query_row(&[(":id", &item_id)], map_row)
            .map_err(|error| error.into())
    }

    fn get_all(&self) -> Result<Vec<Item>, Error> {
        self.lock()?
            .prepare("SELECT id, name, description, price, category_id FROM item ORDER BY id ASC;")?
            .query_map([], map_row)?
            .map(|maybe_item| maybe_item.map_err(|error| error.into()))
            .collect()
    }

    fn get_by_category(&self, category_id: CategoryId) -> Result<Vec<Item>, Error> {
        self.lock()?
            .prepare(
                "SELECT id, name, description, price, category_id FROM item
                WHERE category_id = :category_id
                ORDER BY id ASC;",
            )?
            .query_map(&[(":category_id", &category_id)], map_row)?
            .map(|maybe_item| maybe_item.map_err(|error| error.into()))
            .collect()
    }

    fn update(&self, item_id: ItemId, item: NewItem) -> Result<Item, Error> {
        let rows_affected = self.lock()?.execute(
            "UPDATE item SET name = ?1, description = ?2, price = ?3, category_id = ?4
            WHERE id = ?5",
            (
                item.name.as_ref(),
                &item.description,
                item.price,
                item.category_id,
                item_id,
            ),
        )?;

        if rows_affected == 0 {
            return Err(Error::NotFound);
        }

        Ok(with_id(item_id, item))
    }

    fn delete(&self, item_id: ItemId) -> Result<(), Error> {
        let rows_affected = self
            .lock()?
            .execute("DELETE FROM item WHERE id = ?1", [item_id])?;

        if rows_affected == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }

    fn count(&self) -> Result<u32, Error> {
        self.lock()?
            .query_row("SELECT COUNT(1) FROM item", [], |row| row.get(0))
            .map_err(Error::from)
    }
}

fn with_id(id: ItemId, item: NewItem) -> Item {
    Item {
        id,
        name: item.name,
        description: item.description,
        price: item.price,
        category_id: item.category_id,
    }
}

/// Initialize the item table and indexes.
///
/// `category_id` is intentionally not a foreign key: deleting a category
/// leaves its items pointing at the old ID.
pub fn create_item_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS item (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL,
            price REAL NOT NULL,
            category_id INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_item_category_id ON item(category_id);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Item, rusqlite::Error> {
    let raw_name: String = row.get(1)?;

    Ok(Item {
        id: row.get(0)?,
        name: Name::new_unchecked(&raw_name),
        description: row.get(2)?,
        price: row.get(3)?,
        category_id: row.get(4)?,
    })
}

#[cfg(test)]
mod item_store_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;

    use crate::{
        Error,
        category::{CategoryStore, SQLiteCategoryStore},
        db::initialize,
        item::NewItem,
        name::Name,
    };

    use super::{ItemStore, SQLiteItemStore};

    fn get_test_stores() -> (SQLiteCategoryStore, SQLiteItemStore) {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        let connection = Arc::new(Mutex::new(connection));

        (
            SQLiteCategoryStore::new(connection.clone()),
            SQLiteItemStore::new(connection),
        )
    }

    fn new_item(name: &str, category_id: i64) -> NewItem {
        NewItem {
            name: Name::new_unchecked(name),
            description: format!("All about {name}"),
            price: 9.99,
            category_id,
        }
    }

    #[test]
    fn create_item_succeeds() {
        let (_, store) = get_test_stores();

        let item = store.create(new_item("Dune", 1)).unwrap();

        assert!(item.id > 0);
        assert_eq!(item.name, Name::new_unchecked("Dune"));
        assert_eq!(item.description, "All about Dune");
        assert_eq!(item.price, 9.99);
        assert_eq!(item.category_id, 1);
    }

    #[test]
    fn get_item_succeeds() {
        let (_, store) = get_test_stores();
        let inserted_item = store.create(new_item("Dune", 1)).unwrap();

        let selected_item = store.get(inserted_item.id);

        assert_eq!(Ok(inserted_item), selected_item);
    }

    #[test]
    fn get_item_with_invalid_id_returns_not_found() {
        let (_, store) = get_test_stores();
        let inserted_item = store.create(new_item("Dune", 1)).unwrap();

        let selected_item = store.get(inserted_item.id + 123);

        assert_eq!(selected_item, Err(Error::NotFound));
    }

    #[test]
    fn get_all_returns_items_in_creation_order() {
        let (_, store) = get_test_stores();
        let first = store.create(new_item("Zebra Plush", 1)).unwrap();
        let second = store.create(new_item("Abacus", 2)).unwrap();

        let items = store.get_all().unwrap();

        assert_eq!(items, vec![first, second]);
    }

    #[test]
    fn get_by_category_returns_only_matching_items() {
        let (categories, store) = get_test_stores();
        let books = categories.create(Name::new_unchecked("Books")).unwrap();
        let games = categories.create(Name::new_unchecked("Games")).unwrap();
        let dune = store.create(new_item("Dune", books.id)).unwrap();
        store.create(new_item("Chess", games.id)).unwrap();
        let emma = store.create(new_item("Emma", books.id)).unwrap();

        let items = store.get_by_category(books.id).unwrap();

        assert_eq!(items, vec![dune, emma]);
    }

    #[test]
    fn deleting_a_category_leaves_its_items() {
        let (categories, store) = get_test_stores();
        let books = categories.create(Name::new_unchecked("Books")).unwrap();
        let dune = store.create(new_item("Dune", books.id)).unwrap();

        categories.delete(books.id).unwrap();

        assert_eq!(store.get(dune.id), Ok(dune));
    }

    #[test]
    fn update_item_succeeds() {
        let (_, store) = get_test_stores();
        let item = store.create(new_item("Dune", 1)).unwrap();

        let updated = store.update(item.id, new_item("Dune Messiah", 2)).unwrap();

        assert_eq!(updated.id, item.id);
        assert_eq!(store.get(item.id), Ok(updated));
    }

    #[test]
    fn update_item_with_invalid_id_returns_not_found() {
        let (_, store) = get_test_stores();

        let result = store.update(999999, new_item("Dune", 1));

        assert_eq!(result, Err(Error::NotFound));
    }

    #[test]
    fn delete_item_succeeds() {
        let (_, store) = get_test_stores();
        let item = store.create(new_item("Dune", 1)).unwrap();

        assert_eq!(store.delete(item.id), Ok(()));
        assert_eq!(store.get(item.id), Err(Error::NotFound));
    }

    #[test]
    fn delete_item_with_invalid_id_returns_not_found() {
        let (_, store) = get_test_stores();

        assert_eq!(store.delete(999999), Err(Error::NotFound));
    }

    #[test]
    fn count_items() {
        let (_, store) = get_test_stores();
        store.create(new_item("Dune", 1)).unwrap();

        assert_eq!(store.count(), Ok(1));
    }
}
