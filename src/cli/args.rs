//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::domain::NodeId;

/// Query a tree of items loaded from a TOML file
#[derive(Parser, Debug)]
#[command(name = "treestore")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Items file (default: `items_file` from settings)
    #[arg(short, long, global = true, env = "TREESTORE_FILE", value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Directory holding a local .treestore.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Node ids parse as integers when possible; wrap in double quotes to force text.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all items in load order
    List,

    /// Show a single item
    Get { id: NodeId },

    /// Direct children of an item
    Children { id: NodeId },

    /// All descendants, depth-first
    Descendants { id: NodeId },

    /// Parent of an item
    Parent { id: NodeId },

    /// Ancestors from nearest to root
    Ancestors { id: NodeId },

    /// Label path from root to item
    Path { id: NodeId },

    /// Flat rows: number, category, path
    Rows,

    /// Tree view from every root
    Tree,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print effective settings
    Show,
    /// Print config file locations
    Path,
}
