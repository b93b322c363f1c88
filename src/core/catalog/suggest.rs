//! Suggestion lists for type-ahead inputs
//!
//! Each list merges the distinct values already stored with a fixed
//! baseline (empty for colors), sorted ascending. Stored colors are
//! capitalized before deduplication so "red" and "RED" collapse.

use std::collections::BTreeSet;

use miette::{IntoDiagnostic, Result};
use rusqlite::Connection;

/// Garment types always offered, even on an empty catalog
pub const TYPE_BASELINE: &[&str] = &["Top", "Bottom", "Dress", "Outerwear", "Shoes", "Accessory"];

/// Vibes always offered, even on an empty catalog
pub const VIBE_BASELINE: &[&str] = &[
    "Romantic",
    "Minimalist",
    "Edgy",
    "Bohemian",
    "Casual",
    "Formal",
];

/// A field that carries a suggestion list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestField {
    Type,
    Color,
    Vibe,
}

impl SuggestField {
    /// Column backing this field
    fn column(self) -> &'static str {
        match self {
            SuggestField::Type => "type",
            SuggestField::Color => "color",
            SuggestField::Vibe => "vibe",
        }
    }

    /// Fixed values always present in the list (empty for Color)
    pub fn baseline(self) -> &'static [&'static str] {
        match self {
            SuggestField::Type => TYPE_BASELINE,
            SuggestField::Color => &[],
            SuggestField::Vibe => VIBE_BASELINE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SuggestField::Type => "type",
            SuggestField::Color => "color",
            SuggestField::Vibe => "vibe",
        }
    }
}

pub(super) fn suggestions(conn: &Connection, field: SuggestField) -> Result<Vec<String>> {
    // column() returns fixed identifiers, never user input
    let sql = format!(
        "SELECT DISTINCT {col} FROM wardrobe_items WHERE {col} <> ''",
        col = field.column()
    );

    let mut stmt = conn.prepare(&sql).into_diagnostic()?;
    let rows = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .into_diagnostic()?;

    let mut values: BTreeSet<String> = field.baseline().iter().map(|s| s.to_string()).collect();
    for value in rows {
        let value = value.into_diagnostic()?;
        match field {
            SuggestField::Color => values.insert(capitalize(&value)),
            _ => values.insert(value),
        };
    }

    Ok(values.into_iter().collect())
}

/// Uppercase the first character, lowercase the rest ("BLUE" -> "Blue")
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
