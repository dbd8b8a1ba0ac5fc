use anyhow::Result;
use clap::Parser;
use redtable::cli::{Cli, Commands};
use redtable::commands::{handle_analyze, init_config, AnalyzeConfig};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            config,
            top,
            filter,
            sort_by,
            descending,
            as_of,
        } => handle_analyze(AnalyzeConfig {
            path,
            format: format.into(),
            output,
            config,
            top,
            filter,
            sort_by: sort_by.map(Into::into),
            descending,
            as_of,
        }),
        Commands::Init { force } => init_config(force),
    }
}
