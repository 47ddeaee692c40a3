//! dictum - Terminal quote collection manager
//!
//! A command-line application that keeps a small ordered collection of
//! quotes in a TOML file. The in-memory store loads the collection once at
//! startup, routes every change through its own operations with observer
//! notification, edits through independent working copies that only become
//! visible on commit, and writes the collection back at end of command.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DictumError;
