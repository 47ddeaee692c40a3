//! Output formatting utilities

use crate::application::StoreEvent;
use crate::domain::Quote;

/// Format the numbered quote list for display
pub fn format_quote_list(quotes: &[Quote]) -> String {
    if quotes.is_empty() {
        return "No quotes yet\n".to_string();
    }

    let mut output = String::new();
    for (position, quote) in quotes.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}. \"{}\" - {}\n",
            position + 1,
            quote.text(),
            quote.author()
        ));
    }
    output
}

/// Format a single quote for the detail view
pub fn format_quote(quote: &Quote) -> String {
    format!("{}\n\n    by {}\n", quote.text(), quote.author())
}

/// Format a store change as a confirmation line
pub fn format_store_event(event: &StoreEvent) -> String {
    match event {
        StoreEvent::Added { index, quote } => {
            format!("Added quote {}: \"{}\"", index + 1, quote.text())
        }
        StoreEvent::Removed { index, quote } => {
            format!("Removed quote {}: \"{}\"", index + 1, quote.text())
        }
        StoreEvent::Updated { index, field } => {
            format!("Updated {} of quote {}", field.name(), index + 1)
        }
    }
}
