//! Quote entity

use serde::{Deserialize, Serialize};

/// Identifies which field of a quote changed through a setter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteField {
    Author,
    Text,
}

impl QuoteField {
    /// Lowercase field name for display
    pub fn name(&self) -> &'static str {
        match self {
            QuoteField::Author => "author",
            QuoteField::Text => "text",
        }
    }
}

/// A text/author pair
///
/// Fields are plain strings with no validation beyond existence; empty
/// strings are allowed. Presentation-level checks belong to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    author: String,
    text: String,
}

impl Quote {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Quote {
            author: author.into(),
            text: text.into(),
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the author, reporting the change only when the value differs
    pub fn set_author(&mut self, value: impl Into<String>) -> Option<QuoteField> {
        let value = value.into();
        if self.author == value {
            return None;
        }
        self.author = value;
        Some(QuoteField::Author)
    }

    /// Set the text, reporting the change only when the value differs
    pub fn set_text(&mut self, value: impl Into<String>) -> Option<QuoteField> {
        let value = value.into();
        if self.text == value {
            return None;
        }
        self.text = value;
        Some(QuoteField::Text)
    }

    /// Produce an independent working copy with the same field values
    pub fn duplicate(&self) -> Quote {
        self.clone()
    }
}

impl Default for Quote {
    fn default() -> Self {
        Quote::new("Unknown", "Quote goes here..")
    }
}
