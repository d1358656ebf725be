//! Command dispatch logic for notelink

use std::time::Instant;

use notelink_core::error::Result;
use tracing::debug;

use crate::cli::paths::resolve_root_path;
use crate::cli::Cli;

mod command;
mod commands;
mod macros;

pub use command::Vault;
use command::{Command, CommandContext, NoCommand};
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = resolve_root_path(cli.root.clone());

    debug!(elapsed = ?start.elapsed(), root = %root.display(), "resolve_root");

    let ctx = CommandContext::new(cli, &root, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
