//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use notelink_core::config::AnalysisConfig;
use notelink_core::error::{NotelinkError, Result};
use notelink_core::store::FsStore;

use super::trace_command;
use crate::cli::Cli;

/// An opened vault with its effective configuration
pub struct Vault {
    pub store: FsStore,
    pub config: AnalysisConfig,
}

impl Vault {
    /// Fail with `DocumentNotFound` unless `id` names a note in the vault
    pub fn require(&self, id: &str) -> Result<()> {
        if self.store.contains(id) {
            Ok(())
        } else {
            Err(NotelinkError::DocumentNotFound { id: id.to_string() })
        }
    }
}

/// Load the config (explicit `--config` or the vault default) and open the vault
pub fn open_vault(cli: &Cli, root: &PathBuf) -> Result<Vault> {
    let config = match &cli.config {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::load_for_vault(root)?,
    };
    let store = FsStore::open(root, &config.store.extensions)?;
    Ok(Vault { store, config })
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    pub fn open_vault(&self) -> Result<Vault> {
        let vault = open_vault(self.cli, self.root)?;
        trace_command!(self.cli, self.start, "open_vault");
        Ok(vault)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("notelink {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Related notes, clusters and tags for a Markdown vault.");
        println!();
        println!("Run `notelink --help` for usage information.");
        Ok(())
    }
}
