//! Defines the category store trait and its SQLite implementation.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    category::{Category, CategoryId},
    name::Name,
};

/// Creates, retrieves, updates and deletes categories.
pub trait CategoryStore: Clone + Send + Sync + 'static {
    /// Create a new category and add it to the store.
    fn create(&self, name: Name) -> Result<Category, Error>;

    /// Get a category by its ID.
    ///
    /// Returns [Error::NotFound] if there is no category with `category_id`.
    fn get(&self, category_id: CategoryId) -> Result<Category, Error>;

    /// Get all categories ordered by name.
    fn get_all(&self) -> Result<Vec<Category>, Error>;

    /// Find a category whose name matches `name` ignoring case.
    fn find_by_name(&self, name: &Name) -> Result<Option<Category>, Error>;

    /// Replace the name of the category with `category_id`.
    ///
    /// Returns [Error::NotFound] if there is no category with `category_id`.
    fn update(&self, category_id: CategoryId, name: Name) -> Result<Category, Error>;

    /// Delete the category with `category_id`.
    ///
    /// Items that refer to the category are left as they are.
    /// Returns [Error::NotFound] if there is no category with `category_id`.
    fn delete(&self, category_id: CategoryId) -> Result<(), Error>;

    /// The number of categories in the store.
    fn count(&self) -> Result<u32, Error>;
}

/// Stores categories in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteCategoryStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteCategoryStore {
    /// Create a new category store with a SQLite database.
    ///
    /// The category table must already exist, see [crate::initialize_db].
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

impl CategoryStore for SQLiteCategoryStore {
    fn create(&self, name: Name) -> Result<Category, Error> {
        let connection = self.lock()?;
        connection.execute("INSERT INTO category (name) VALUES (?1);", (name.as_ref(),))?;

        let id = connection.last_insert_rowid();

        Ok(Category { id, name })
    }

    fn get(&self, category_id: CategoryId) -> Result<Category, Error> {
        self.lock()?
            .prepare("SELECT id, name FROM category WHERE id = :id;")?
            .query_row(&[(":id", &category_id)], map_row)
            .map_err(|error| error.into())
    }

    fn get_all(&self) -> Result<Vec<Category>, Error> {
        self.lock()?
            .prepare("SELECT id, name FROM category ORDER BY name ASC, id ASC;")?
            .query_map([], map_row)?
            .map(|maybe_category| maybe_category.map_err(|error| error.into()))
            .collect()
    }

    fn find_by_name(&self, name: &Name) -> Result<Option<Category>, Error> {
        // SQLite's NOCASE collation only folds ASCII, so names are compared here instead.
        let categories = self.get_all()?;

        Ok(categories
            .into_iter()
            .find(|category| category.name.eq_ignore_case(name)))
    }

    fn update(&self, category_id: CategoryId, name: Name) -> Result<Category, Error> {
        let rows_affected = self.lock()?.execute(
            "UPDATE category SET name = ?1 WHERE id = ?2",
            (name.as_ref(), category_id),
        )?;

        if rows_affected == 0 {
            return Err(Error::NotFound);
        }

        Ok(Category {
            id: category_id,
            name,
        })
    }

    fn delete(&self, category_id: CategoryId) -> Result<(), Error> {
        let rows_affected = self
            .lock()?
            .execute("DELETE FROM category WHERE id = ?1", [category_id])?;

        if rows_affected == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }

    fn count(&self) -> Result<u32, Error> {
        self.lock()?
            .query_row("SELECT COUNT(1) FROM category", [], |row| row.get(0))
            .map_err(Error::from)
    }
}

/// Initialize the category table and indexes.
///
/// Names are not declared `UNIQUE`: duplicates are only prevented when a
/// category is created, and renaming may produce them.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS category (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_category_name ON category(name);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Category, rusqlite::Error> {
    let id = row.get(0)?;
    let raw_name: String = row.get(1)?;
    let name = Name::new_unchecked(&raw_name);

    Ok(Category { id, name })
}
