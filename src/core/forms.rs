//! Form handling between submitted field values and the catalog
//!
//! The controller owns the two rules the store does not enforce: a name is
//! required, and per-item actions must target an item that exists. Every
//! response carries a freshly fetched [`CatalogView`] so the caller renders
//! suggestion lists that already include newly learned values.

use miette::Result;
use thiserror::Error;

use crate::core::catalog::{CatalogStore, ItemFields, SuggestField, WardrobeItem};

/// Errors surfaced for per-item actions
#[derive(Debug, Error)]
pub enum FormError {
    #[error("no item found with id {0}")]
    NotFound(i64),
}

/// Where a form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Fields are being filled in, or a submission was rejected
    Editing,
    /// The submission was persisted
    Submitted,
}

/// How an acknowledgment should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckKind {
    Success,
    Warning,
}

/// A post-action message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ack {
    pub kind: AckKind,
    pub message: String,
}

impl Ack {
    fn success(message: String) -> Self {
        Self {
            kind: AckKind::Success,
            message,
        }
    }

    fn warning(message: String) -> Self {
        Self {
            kind: AckKind::Warning,
            message,
        }
    }
}

/// Everything the presentation layer needs to render the catalog
#[derive(Debug, Clone)]
pub struct CatalogView {
    pub items: Vec<WardrobeItem>,
    pub type_options: Vec<String>,
    pub color_options: Vec<String>,
    pub vibe_options: Vec<String>,
}

/// Outcome of an add-form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The item was persisted
    Added(WardrobeItem),
    /// The name was empty; nothing was written
    Rejected,
}

#[derive(Debug)]
pub struct AddResponse {
    pub outcome: AddOutcome,
    pub state: FormState,
    pub ack: Option<Ack>,
    pub view: CatalogView,
}

/// Outcome of a per-item save submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(WardrobeItem),
    /// The name was empty; nothing was written
    Rejected,
}

#[derive(Debug)]
pub struct SaveResponse {
    pub outcome: SaveOutcome,
    pub ack: Option<Ack>,
    pub view: CatalogView,
}

#[derive(Debug)]
pub struct DeleteResponse {
    pub deleted: WardrobeItem,
    pub ack: Ack,
    pub view: CatalogView,
}

/// Bridges submitted form values to the catalog store
pub struct FormController<'a> {
    store: &'a CatalogStore,
}

impl<'a> FormController<'a> {
    pub fn new(store: &'a CatalogStore) -> Self {
        Self { store }
    }

    /// The full render input: all items plus the three suggestion lists
    pub fn view(&self) -> Result<CatalogView> {
        Ok(CatalogView {
            items: self.store.items()?,
            type_options: self.store.suggestions(SuggestField::Type)?,
            color_options: self.store.suggestions(SuggestField::Color)?,
            vibe_options: self.store.suggestions(SuggestField::Vibe)?,
        })
    }

    /// Look up the item a per-item form targets
    pub fn resolve(&self, id: i64) -> Result<WardrobeItem> {
        self.store
            .get(id)?
            .ok_or(FormError::NotFound(id))
            .map_err(|e| miette::miette!("{}", e))
    }

    /// Submit the add form
    ///
    /// An empty name rejects the submission silently: no record, no
    /// acknowledgment, the form stays in editing.
    pub fn submit_add(&self, fields: ItemFields) -> Result<AddResponse> {
        if fields.name.is_empty() {
            return Ok(AddResponse {
                outcome: AddOutcome::Rejected,
                state: FormState::Editing,
                ack: None,
                view: self.view()?,
            });
        }

        let item = self.store.insert(&fields)?;
        let ack = Ack::success(format!("Added '{}' to your wardrobe!", item.name));
        Ok(AddResponse {
            outcome: AddOutcome::Added(item),
            state: FormState::Submitted,
            ack: Some(ack),
            view: self.view()?,
        })
    }

    /// Submit a per-item save
    ///
    /// The target must exist. The update writes all four fields, changed or
    /// not; an empty name is rejected exactly like the add form.
    pub fn submit_save(&self, id: i64, fields: ItemFields) -> Result<SaveResponse> {
        self.resolve(id)?;

        if fields.name.is_empty() {
            return Ok(SaveResponse {
                outcome: SaveOutcome::Rejected,
                ack: None,
                view: self.view()?,
            });
        }

        self.store.update(id, &fields)?;
        let item = self.resolve(id)?;
        let ack = Ack::success(format!("Updated '{}'", item.name));
        Ok(SaveResponse {
            outcome: SaveOutcome::Saved(item),
            ack: Some(ack),
            view: self.view()?,
        })
    }

    /// Submit a per-item delete
    pub fn submit_delete(&self, id: i64) -> Result<DeleteResponse> {
        let item = self.resolve(id)?;
        self.store.delete(id)?;
        let ack = Ack::warning(format!("Deleted '{}'", item.name));
        Ok(DeleteResponse {
            deleted: item,
            ack,
            view: self.view()?,
        })
    }
}
