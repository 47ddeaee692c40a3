//! Quote persistence port and its TOML file backend

use crate::domain::Quote;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Load/save contract the quote store depends on
///
/// Implementations decide for themselves what to return when no persisted
/// data exists; `load` never fails. The store drains the returned iterator
/// exactly once, at construction.
pub trait QuoteStorage {
    /// Produce the persisted quotes in order
    fn load(&self) -> Box<dyn Iterator<Item = Quote>>;

    /// Overwrite the persisted collection with `quotes`, preserving order.
    /// An empty slice is valid and yields an empty persisted store.
    fn save(&self, quotes: &[Quote]) -> Result<()>;
}

// Seed quotes used when no valid persisted data exists
const SEED_QUOTES: [(&str, &str); 5] = [
    (
        "Eleanor Roosevelt",
        "Great minds discuss ideas; average minds discuss events; small minds discuss people.",
    ),
    (
        "William Shakespeare",
        "Some are born great, some achieve greatness, and some have greatness thrust upon them.",
    ),
    (
        "Winston Churchill",
        "All the great things are simple, and many can be expressed in a single word: freedom, justice, honor, duty, mercy, hope.",
    ),
    (
        "Ralph Waldo Emerson",
        "Our greatest glory is not in never failing, but in rising up every time we fail.",
    ),
    (
        "William Arthur Ward",
        "The mediocre teacher tells. The good teacher explains. The superior teacher demonstrates. The great teacher inspires.",
    ),
];

/// On-disk document shape: an array of `[[quote]]` tables
#[derive(Debug, Default, Serialize, Deserialize)]
struct QuoteFileDoc {
    #[serde(rename = "quote", default)]
    quotes: Vec<Quote>,
}

/// TOML file backend for the persistence port
///
/// A missing or unparseable file degrades to the built-in seed set; an
/// existing file with no `[[quote]]` tables is a genuinely empty store.
#[derive(Debug, Clone)]
pub struct QuoteFile {
    path: PathBuf,
}

impl QuoteFile {
    pub fn new(path: PathBuf) -> Self {
        QuoteFile { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The built-in seed quotes
    pub fn seed() -> Vec<Quote> {
        SEED_QUOTES
            .iter()
            .map(|(author, text)| Quote::new(*author, *text))
            .collect()
    }

    // Returns None on a missing or corrupt file; the caller substitutes seeds.
    fn read(&self) -> Option<Vec<Quote>> {
        let contents = fs::read_to_string(&self.path).ok()?;
        let doc: QuoteFileDoc = toml::from_str(&contents).ok()?;
        Some(doc.quotes)
    }
}

impl QuoteStorage for QuoteFile {
    fn load(&self) -> Box<dyn Iterator<Item = Quote>> {
        let quotes = self.read().unwrap_or_else(Self::seed);
        Box::new(quotes.into_iter())
    }

    fn save(&self, quotes: &[Quote]) -> Result<()> {
        let doc = QuoteFileDoc {
            quotes: quotes.to_vec(),
        };
        let contents = toml::to_string_pretty(&doc)?;

        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write to a temp file in the same directory, then rename into place,
        // so an interrupted save never truncates the existing file.
        let tmp_name = format!(
            "{}.dictum-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("quotes.toml"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, contents)?;

        if self.path.exists() {
            // On Windows, rename does not overwrite existing files.
            fs::remove_file(&self.path)?;
        }

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}
