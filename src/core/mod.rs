//! Core module - catalog storage, configuration, and form handling

pub mod catalog;
pub mod config;
pub mod forms;

pub use catalog::{CatalogStore, ItemFields, SuggestField, WardrobeItem};
pub use config::Config;
pub use forms::{
    Ack, AckKind, AddOutcome, AddResponse, CatalogView, DeleteResponse, FormController, FormError,
    FormState, SaveOutcome, SaveResponse,
};
