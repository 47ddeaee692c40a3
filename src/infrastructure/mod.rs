//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod editor;
pub mod repository;
pub mod speech;
pub mod storage;

pub use config::Config;
pub use editor::{edit_quote_buffer, EditorSession};
pub use repository::FileSystemRepository;
pub use speech::{CommandSpeech, Speech};
pub use storage::{QuoteFile, QuoteStorage};
