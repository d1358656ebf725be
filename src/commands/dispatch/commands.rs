//! Command implementations for all notelink commands

use notelink_core::bail_usage;
use notelink_core::error::Result;

use crate::cli::{AnalyzeArgs, ClustersArgs, Commands, InputArgs, RelatedArgs, StatsArgs, SuggestArgs};
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Related(args) => execute_related(ctx, args),
            Commands::Suggest(args) => execute_suggest(ctx, args),
            Commands::Clusters(args) => execute_clusters(ctx, args),
            Commands::Classify(args) => execute_classify(ctx, args),
            Commands::Analyze(args) => execute_analyze(ctx, args),
            Commands::Stats(args) => execute_stats(ctx, args),
        }
    }
}

fn execute_related(ctx: &CommandContext, args: &RelatedArgs) -> Result<()> {
    let vault = ctx.open_vault()?;
    commands::related::execute(ctx.cli, &vault, &args.id, args.limit, args.min_similarity)
}

fn execute_suggest(ctx: &CommandContext, args: &SuggestArgs) -> Result<()> {
    let text = commands::input::read_input(&args.input)?;
    let vault = ctx.open_vault()?;
    commands::suggest::execute(ctx.cli, &vault, &text, args.limit)
}

fn execute_clusters(ctx: &CommandContext, args: &ClustersArgs) -> Result<()> {
    let vault = ctx.open_vault()?;
    commands::clusters::execute(ctx.cli, &vault, args.min_size)
}

fn execute_classify(ctx: &CommandContext, args: &InputArgs) -> Result<()> {
    let text = commands::input::read_input(args)?;
    commands::classify::execute(ctx.cli, &text)
}

fn execute_analyze(ctx: &CommandContext, args: &AnalyzeArgs) -> Result<()> {
    let vault = ctx.open_vault()?;
    match (&args.id, &args.folder) {
        (_, Some(prefix)) => commands::analyze::execute_folder(ctx.cli, &vault, prefix),
        (Some(id), None) => commands::analyze::execute(ctx.cli, &vault, id),
        (None, None) => bail_usage!("analyze needs a note ID or --folder"),
    }
}

fn execute_stats(ctx: &CommandContext, args: &StatsArgs) -> Result<()> {
    let vault = ctx.open_vault()?;
    commands::stats::execute(ctx.cli, &vault, args.warm, args.clear)
}
