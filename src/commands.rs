//! CLI command definitions
//!
//! All CLI structs and subcommand enums are defined here.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Memobook - keep short text memos in a local file
#[derive(Parser, Debug)]
#[command(name = "mb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (default: ~/.config/memobook/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Memo file to use instead of the configured one
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Log store and repository activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default configuration file
    Init,

    /// Add a memo
    Add {
        /// Memo text
        content: String,
    },

    /// List all memos
    List,

    /// Show memos containing a term (case-insensitive)
    Search {
        /// Search term; empty shows everything
        term: String,
    },

    /// Replace the text of a memo
    Edit {
        /// Memo position as shown by `list`
        index: usize,

        /// New memo text
        content: String,
    },

    /// Delete memos
    Delete {
        /// Memo positions as shown by `list`
        #[arg(required = true)]
        indices: Vec<usize>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Sort memos newest first
    Sort,

    /// Interactive session (add, search, edit, delete, sort, quit)
    Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_delete() {
        let cli = Cli::parse_from(["mb", "delete", "0", "2", "--yes"]);
        match cli.command {
            Commands::Delete { indices, yes } => {
                assert_eq!(indices, vec![0, 2]);
                assert!(yes);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_file() {
        let cli = Cli::parse_from(["mb", "list", "--file", "/tmp/memos.json"]);
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/memos.json")));
        assert!(!cli.verbose);
    }
}
