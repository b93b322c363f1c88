//! Database schema initialization

use miette::{IntoDiagnostic, Result};

use super::CatalogStore;

impl CatalogStore {
    /// Create the `wardrobe_items` table if it does not exist
    ///
    /// Safe to call on every open. AUTOINCREMENT keeps deleted ids from
    /// ever being assigned again.
    pub fn ensure_schema(&self) -> Result<()> {
        self.conn
            .execute_batch(
                r#"
            -- The single catalog table
            CREATE TABLE IF NOT EXISTS wardrobe_items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                type TEXT NOT NULL DEFAULT '',
                color TEXT NOT NULL DEFAULT '',
                vibe TEXT NOT NULL DEFAULT ''
            );
            "#,
            )
            .into_diagnostic()
    }
}
