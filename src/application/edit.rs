//! Copy-then-commit editing workflow
//!
//! Editing never touches the live collection directly: the session owns an
//! independent working copy, and only `commit` makes it authoritative,
//! either by appending a new quote or by writing the copy's fields back
//! onto the original in place.

use crate::application::QuoteStore;
use crate::domain::Quote;
use crate::error::Result;

/// A pending edit over a working copy
///
/// Consuming `self` in `commit` and `discard` makes both outcomes terminal;
/// a finished session cannot be reused.
pub struct EditSession {
    origin: Option<usize>,
    working: Quote,
}

impl EditSession {
    /// Start editing a fresh quote with placeholder values
    pub fn create() -> Self {
        EditSession {
            origin: None,
            working: Quote::default(),
        }
    }

    /// Start editing an existing quote through an independent copy.
    ///
    /// `index` is the original's position in the store; the original itself
    /// is not touched until `commit`.
    pub fn edit(index: usize, original: &Quote) -> Self {
        EditSession {
            origin: Some(index),
            working: original.duplicate(),
        }
    }

    /// True when the session creates a new quote rather than editing one
    pub fn is_new(&self) -> bool {
        self.origin.is_none()
    }

    pub fn working(&self) -> &Quote {
        &self.working
    }

    pub fn working_mut(&mut self) -> &mut Quote {
        &mut self.working
    }

    /// Make the working copy authoritative.
    ///
    /// A new quote is appended to the store as-is; for an existing quote the
    /// original's fields are overwritten in place, so its position in the
    /// collection is unchanged. Returns the committed quote's position.
    pub fn commit(self, store: &mut QuoteStore) -> Result<usize> {
        match self.origin {
            None => {
                store.add(self.working);
                Ok(store.len() - 1)
            }
            Some(index) => {
                store.update_at(index, self.working.author(), self.working.text())?;
                Ok(index)
            }
        }
    }

    /// Abandon the working copy, leaving the store and original untouched
    pub fn discard(self) {}
}
