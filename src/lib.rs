//! wardrobe: a personal clothing inventory manager
//!
//! A small CLI that keeps a catalog of clothing items in a local SQLite
//! database and offers type-ahead suggestions learned from stored values.

pub mod cli;
pub mod core;
