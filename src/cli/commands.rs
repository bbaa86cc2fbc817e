//! Command dispatch: load settings and items, run one query.

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::load_store;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::tree_view::TreeStoreConvert;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::{NodeId, TreeStore};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let config_dir = resolve_config_dir(cli.config_dir.as_deref());

    match &cli.command {
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        Some(Commands::Config { command }) => {
            let settings = Settings::load(Some(&config_dir))?;
            cmd_config(command, &settings, &config_dir)
        }
        Some(command) => {
            let settings = Settings::load(Some(&config_dir))?;
            let store = open_store(cli.file.as_deref(), &settings)?;
            run_query(command, &store, &settings)
        }
        None => Err(CliError::Usage("no command given, see --help".to_string())),
    }
}

fn resolve_config_dir(dir: Option<&Path>) -> PathBuf {
    dir.map(Path::to_path_buf)
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[instrument(level = "debug", skip(settings))]
fn open_store(file: Option<&Path>, settings: &Settings) -> CliResult<TreeStore> {
    let path = file
        .map(Path::to_path_buf)
        .or_else(|| settings.items_file.clone())
        .ok_or_else(|| {
            CliError::Usage("no items file: pass --file or set items_file in settings".into())
        })?;
    debug!(path = %path.display(), "loading items");
    let store = load_store(&path)?;
    if store.is_empty() {
        output::warning(&format!("{} contains no items", path.display()));
    }
    Ok(store)
}

fn require_id(id: &NodeId) -> CliResult<&NodeId> {
    match id {
        NodeId::Text(s) if s.is_empty() => Err(CliError::InvalidArgs("empty node id".into())),
        _ => Ok(id),
    }
}

#[instrument(level = "debug", skip(store, settings))]
fn run_query(command: &Commands, store: &TreeStore, settings: &Settings) -> CliResult<()> {
    match command {
        Commands::List => output::items(store.get_all()),
        Commands::Get { id } => output::items(store.get_item(require_id(id)?)),
        Commands::Children { id } => output::items(store.get_children(require_id(id)?)),
        Commands::Descendants { id } => output::items(store.get_all_children(require_id(id)?)),
        Commands::Parent { id } => output::items(store.get_parent(require_id(id)?)),
        Commands::Ancestors { id } => output::items(store.get_all_parents(require_id(id)?)),
        Commands::Path { id } => {
            let path = store.data_path(require_id(id)?);
            if !path.is_empty() {
                output::info(&path.iter().join(&settings.path_separator));
            }
        }
        Commands::Rows => {
            for row in store.rows() {
                output::info(&format!(
                    "{}\t{}\t{}",
                    row.ordinal,
                    settings.category_label(row.category),
                    row.joined_path(&settings.path_separator)
                ));
            }
        }
        Commands::Tree => {
            for tree in store.to_tree_strings() {
                output::info(&tree);
            }
        }
        // handled in execute_command, no store needed
        Commands::Config { .. } | Commands::Completion { .. } => {}
    }
    Ok(())
}

fn cmd_config(command: &ConfigCommands, settings: &Settings, config_dir: &Path) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Path => {
            output::header("Config files");
            match global_config_path() {
                Some(path) => output::detail(&format!("global: {}", path.display())),
                None => output::detail(&"global: <unavailable>"),
            }
            output::detail(&format!(
                "local:  {}",
                local_config_path(config_dir).display()
            ));
        }
    }
    Ok(())
}
