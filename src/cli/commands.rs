//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dictum")]
#[command(about = "Terminal quote collection manager", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new quote store
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// List all quotes
    List,

    /// Show a quote in full
    Show {
        /// Quote number as printed by 'dictum list'
        number: usize,
    },

    /// Add a new quote
    Add {
        /// Author of the quote; omit both flags to edit in your editor
        #[arg(short, long)]
        author: Option<String>,

        /// Text of the quote
        #[arg(short, long)]
        text: Option<String>,
    },

    /// Edit an existing quote
    Edit {
        /// Quote number as printed by 'dictum list'
        number: usize,

        /// New author; omit both flags to edit in your editor
        #[arg(short, long)]
        author: Option<String>,

        /// New text
        #[arg(short, long)]
        text: Option<String>,
    },

    /// Remove a quote
    Remove {
        /// Quote number as printed by 'dictum list'
        number: usize,
    },

    /// Speak a quote through the configured speech command
    Say {
        /// Quote number as printed by 'dictum list'
        number: usize,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
