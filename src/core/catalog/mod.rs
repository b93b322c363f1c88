//! SQLite-backed catalog of wardrobe items
//!
//! One table, one statement per operation: the whole persistence layer is
//! create/read/update/delete against `wardrobe_items`, plus the distinct
//! value queries that feed the suggestion lists. Every statement commits
//! on its own; there are no multi-statement transactions.

mod schema;
mod suggest;
mod types;

pub use suggest::{SuggestField, TYPE_BASELINE, VIBE_BASELINE};
pub use types::{ItemFields, WardrobeItem};

use std::fs;
use std::path::Path;

use miette::{IntoDiagnostic, Result};
use rusqlite::{params, Connection, OptionalExtension};

/// The wardrobe catalog backed by SQLite
///
/// Opened once per invocation and passed by reference to whoever needs it.
pub struct CatalogStore {
    conn: Connection,
}

impl CatalogStore {
    /// Open or create the catalog at the given path
    ///
    /// Creates the parent directory and the schema when missing. Both are
    /// idempotent, so reopening an existing catalog changes nothing.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).into_diagnostic()?;
            }
        }

        let conn = Connection::open(path).into_diagnostic()?;

        // WAL keeps readers unblocked if a second invocation overlaps
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .into_diagnostic()?;

        let store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Open an in-memory catalog (used by unit tests)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().into_diagnostic()?;
        let store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Fetch a single item by id
    pub fn get(&self, id: i64) -> Result<Option<WardrobeItem>> {
        self.conn
            .query_row(
                "SELECT id, name, type, color, vibe FROM wardrobe_items WHERE id = ?1",
                params![id],
                row_to_item,
            )
            .optional()
            .into_diagnostic()
    }

    /// Fetch all items in insertion order
    pub fn items(&self) -> Result<Vec<WardrobeItem>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, type, color, vibe FROM wardrobe_items ORDER BY id")
            .into_diagnostic()?;

        let rows = stmt.query_map([], row_to_item).into_diagnostic()?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .into_diagnostic()
    }

    /// Count stored items
    pub fn count(&self) -> Result<usize> {
        self.conn
            .query_row("SELECT COUNT(*) FROM wardrobe_items", [], |row| row.get(0))
            .into_diagnostic()
    }

    /// Append a new item and return it with its generated id
    ///
    /// A non-empty `name` is the caller's contract; the other fields may be
    /// empty strings. Duplicate names are allowed.
    pub fn insert(&self, fields: &ItemFields) -> Result<WardrobeItem> {
        self.conn
            .execute(
                "INSERT INTO wardrobe_items (name, type, color, vibe) VALUES (?1, ?2, ?3, ?4)",
                params![fields.name, fields.kind, fields.color, fields.vibe],
            )
            .into_diagnostic()?;

        let id = self.conn.last_insert_rowid();
        Ok(WardrobeItem {
            id,
            name: fields.name.clone(),
            kind: fields.kind.clone(),
            color: fields.color.clone(),
            vibe: fields.vibe.clone(),
        })
    }

    /// Overwrite all four text fields of the item matching `id`
    ///
    /// An unknown id is a silent no-op.
    pub fn update(&self, id: i64, fields: &ItemFields) -> Result<()> {
        self.conn
            .execute(
                "UPDATE wardrobe_items SET name = ?1, type = ?2, color = ?3, vibe = ?4 WHERE id = ?5",
                params![fields.name, fields.kind, fields.color, fields.vibe, id],
            )
            .into_diagnostic()?;
        Ok(())
    }

    /// Remove the item matching `id`
    ///
    /// An unknown id is a silent no-op. Removed ids are never assigned
    /// again.
    pub fn delete(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM wardrobe_items WHERE id = ?1", params![id])
            .into_diagnostic()?;
        Ok(())
    }

    /// The suggestion list for a field (see [`SuggestField`])
    pub fn suggestions(&self, field: SuggestField) -> Result<Vec<String>> {
        suggest::suggestions(&self.conn, field)
    }
}

fn row_to_item(row: &rusqlite::Row<'_>) -> rusqlite::Result<WardrobeItem> {
    Ok(WardrobeItem {
        id: row.get(0)?,
        name: row.get(1)?,
        kind: row.get(2)?,
        color: row.get(3)?,
        vibe: row.get(4)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, kind: &str, color: &str, vibe: &str) -> ItemFields {
        ItemFields::new(name, kind, color, vibe)
    }

    #[test]
    fn insert_assigns_sequential_ids() {
        let store = CatalogStore::open_in_memory().unwrap();
        let a = store.insert(&fields("White Tee", "Top", "White", "Casual")).unwrap();
        let b = store.insert(&fields("Black Boots", "Shoes", "Black", "Edgy")).unwrap();
        assert_ne!(a.id, b.id);
        assert!(b.id > a.id);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let store = CatalogStore::open_in_memory().unwrap();
        let a = store.insert(&fields("A", "", "", "")).unwrap();
        let b = store.insert(&fields("B", "", "", "")).unwrap();
        store.delete(b.id).unwrap();
        let c = store.insert(&fields("C", "", "", "")).unwrap();
        assert_ne!(c.id, b.id);
        assert!(c.id > b.id);
        let ids: Vec<i64> = store.items().unwrap().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);
    }

    #[test]
    fn get_returns_stored_fields() {
        let store = CatalogStore::open_in_memory().unwrap();
        let item = store.insert(&fields("Blue Jeans", "Bottom", "Blue", "Casual")).unwrap();
        let fetched = store.get(item.id).unwrap().unwrap();
        assert_eq!(fetched, item);
        assert!(store.get(item.id + 100).unwrap().is_none());
    }

    #[test]
    fn update_with_identical_values_is_a_round_trip() {
        let store = CatalogStore::open_in_memory().unwrap();
        let item = store.insert(&fields("Blue Jeans", "Bottom", "Blue", "Casual")).unwrap();
        store.update(item.id, &item.fields()).unwrap();
        assert_eq!(store.get(item.id).unwrap().unwrap(), item);
    }

    #[test]
    fn update_unknown_id_changes_nothing() {
        let store = CatalogStore::open_in_memory().unwrap();
        store.insert(&fields("A", "", "", "")).unwrap();
        store.update(999, &fields("X", "", "", "")).unwrap();
        assert_eq!(store.count().unwrap(), 1);
        assert_eq!(store.items().unwrap()[0].name, "A");
    }

    #[test]
    fn delete_is_idempotent() {
        let store = CatalogStore::open_in_memory().unwrap();
        let item = store.insert(&fields("A", "", "", "")).unwrap();
        store.delete(item.id).unwrap();
        store.delete(item.id).unwrap();
        assert!(store.get(item.id).unwrap().is_none());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn open_creates_parent_directories_and_reopens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("wardrobe.db");

        {
            let store = CatalogStore::open(&path).unwrap();
            store.insert(&fields("Scarf", "Accessory", "Red", "Romantic")).unwrap();
        }

        let store = CatalogStore::open(&path).unwrap();
        assert_eq!(store.count().unwrap(), 1);
        assert_eq!(store.items().unwrap()[0].name, "Scarf");
    }
}
